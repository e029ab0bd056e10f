//! File system storage backend
//!
//! Implements StorageBackend on top of `std::fs`. Paths are used as given,
//! relative paths resolve against the process working directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{StorageBackend, StorageError};

/// File system storage backend
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemStorageBackend;

impl FileSystemStorageBackend {
    /// Create a new file system storage backend
    pub fn new() -> Self {
        Self
    }
}

impl StorageBackend for FileSystemStorageBackend {
    fn read_file(&self, path: &Path) -> Result<String, StorageError> {
        fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StorageError::FileNotFound(path.display().to_string())
            } else {
                StorageError::IoError(format!("Failed to read file {}: {}", path.display(), e))
            }
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), StorageError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            self.create_dir(parent)?;
        }

        fs::write(path, content).map_err(|e| {
            StorageError::IoError(format!("Failed to write file {}: {}", path.display(), e))
        })?;
        debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, StorageError> {
        let read_dir = fs::read_dir(dir).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StorageError::DirectoryNotFound(dir.display().to_string())
            } else {
                StorageError::IoError(format!("Failed to read directory {}: {}", dir.display(), e))
            }
        })?;

        let mut files = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| {
                StorageError::IoError(format!("Failed to read directory entry: {}", e))
            })?;
            if let Ok(file_type) = entry.file_type()
                && file_type.is_file()
            {
                files.push(entry.path());
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn dir_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir(&self, path: &Path) -> Result<(), StorageError> {
        fs::create_dir_all(path).map_err(|e| {
            StorageError::IoError(format!(
                "Failed to create directory {}: {}",
                path.display(),
                e
            ))
        })
    }
}
