//! In-memory storage backend
//!
//! Keeps files in a map keyed by path. Directories exist implicitly when a
//! file lives below them, or explicitly once created.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use super::{StorageBackend, StorageError};

#[derive(Debug, Default)]
struct MemoryState {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
}

/// In-memory storage backend
#[derive(Debug, Default)]
pub struct MemoryStorageBackend {
    state: Mutex<MemoryState>,
}

impl MemoryStorageBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, builder style
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.files.insert(path.into(), content.into());
        }
        self
    }

    /// Seed an empty directory, builder style
    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.dirs.insert(path.into());
        }
        self
    }

    /// Content of a stored file
    pub fn get(&self, path: &Path) -> Option<String> {
        self.lock().ok()?.files.get(path).cloned()
    }

    /// All stored file paths in sorted order
    pub fn paths(&self) -> Vec<PathBuf> {
        self.lock()
            .map(|state| state.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, StorageError> {
        self.state
            .lock()
            .map_err(|_| StorageError::IoError("memory storage lock poisoned".to_string()))
    }
}

impl StorageBackend for MemoryStorageBackend {
    fn read_file(&self, path: &Path) -> Result<String, StorageError> {
        self.lock()?
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::FileNotFound(path.display().to_string()))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), StorageError> {
        let mut state = self.lock()?;
        if let Some(parent) = path.parent() {
            state.dirs.insert(parent.to_path_buf());
        }
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, StorageError> {
        if !self.dir_exists(dir) {
            return Err(StorageError::DirectoryNotFound(dir.display().to_string()));
        }
        let state = self.lock()?;
        let mut files: Vec<PathBuf> = state
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect();
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.lock()
            .map(|state| state.files.contains_key(path))
            .unwrap_or(false)
    }

    fn dir_exists(&self, path: &Path) -> bool {
        self.lock()
            .map(|state| {
                state.dirs.contains(path)
                    || state
                        .files
                        .keys()
                        .any(|p| p != path && p.starts_with(path))
            })
            .unwrap_or(false)
    }

    fn create_dir(&self, path: &Path) -> Result<(), StorageError> {
        self.lock()?.dirs.insert(path.to_path_buf());
        Ok(())
    }
}
