//! Error types for schema inference

use thiserror::Error;

use crate::models::ModelError;
use crate::storage::StorageError;

/// Errors that can occur during schema inference
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// A required parameter is missing or empty
    #[error("{0} is null")]
    InvalidArgument(String),

    /// Malformed JSON text, carries the text that failed to parse
    #[error("JSON parse error:{0}")]
    JsonParse(String),

    /// An object (root or nested) without members, carries that object's text
    #[error("JSON elements none:{0}")]
    EmptyObject(String),

    /// Valid JSON whose root is not an object
    #[error("Invalid JSON structure: expected object at root, found {found}")]
    InvalidStructure { found: &'static str, json: String },

    /// Target is neither JSON text, an existing file, nor an existing directory
    #[error("{0} is not exists")]
    NotFound(String),

    /// Directory without any usable file
    #[error("{0} is not file")]
    NoFiles(String),

    /// A value kind the model cannot express
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Maximum nesting depth exceeded
    #[error("Maximum nesting depth exceeded: {depth} > {max}")]
    MaxDepthExceeded { depth: usize, max: usize },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
