//! Error types for CLI operations

use std::path::PathBuf;

use crate::convert::ConvertError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read file {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Invalid config file {0}: {1}")]
    ConfigError(PathBuf, String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}
