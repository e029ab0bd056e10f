//! Target classification

use std::path::{Path, PathBuf};

use super::error::InferenceError;
use crate::storage::StorageBackend;

/// What a user-supplied target string refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Inline JSON text
    Json(String),
    /// A single JSON file
    File(PathBuf),
    /// A directory of JSON files
    Directory(PathBuf),
}

impl Target {
    /// Classify a target string
    ///
    /// Any string containing `{` is treated as JSON text. Otherwise an
    /// existing directory wins over an existing file.
    pub fn classify<B>(input: &str, backend: &B) -> Result<Self, InferenceError>
    where
        B: StorageBackend + ?Sized,
    {
        if input.is_empty() {
            return Err(InferenceError::InvalidArgument("target".to_string()));
        }
        if input.contains('{') {
            return Ok(Target::Json(input.to_string()));
        }

        let path = Path::new(input);
        if backend.dir_exists(path) {
            Ok(Target::Directory(path.to_path_buf()))
        } else if backend.file_exists(path) {
            Ok(Target::File(path.to_path_buf()))
        } else {
            tracing::debug!("Target {} is neither a directory nor a file", input);
            Err(InferenceError::NotFound("target".to_string()))
        }
    }
}
