//! Storage backend abstraction
//!
//! Defines the StorageBackend trait used to read JSON documents and write generated sources:
//! - FileSystemStorageBackend: native file system
//! - MemoryStorageBackend: in-process map of paths to contents (tests, dry runs)

use std::path::{Path, PathBuf};

pub mod filesystem;
pub mod memory;

pub use filesystem::FileSystemStorageBackend;
pub use memory::MemoryStorageBackend;

/// Error type for storage operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),
    #[error("IO error: {0}")]
    IoError(String),
}

/// Trait for storage backends
///
/// Reading, enumeration and writing are synchronous; every document is read
/// whole before inference starts.
pub trait StorageBackend: Send + Sync {
    /// Read a whole text file
    fn read_file(&self, path: &Path) -> Result<String, StorageError>;

    /// Write a text file, creating parent directories as needed
    fn write_file(&self, path: &Path, content: &str) -> Result<(), StorageError>;

    /// List the regular files directly inside a directory, sorted by file name
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, StorageError>;

    /// Check if a regular file exists
    fn file_exists(&self, path: &Path) -> bool;

    /// Check if a directory exists
    fn dir_exists(&self, path: &Path) -> bool;

    /// Create a directory and its parents
    fn create_dir(&self, path: &Path) -> Result<(), StorageError>;
}
