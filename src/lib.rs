//! json2dto - Generate C# data-transfer classes from sample JSON documents
//!
//! Provides unified interfaces for:
//! - Identifier normalization
//! - Schema inference over JSON text, files and directories
//! - Class model validation
//! - C# source generation
//! - File access (via storage backends)

pub mod convert;
pub mod export;
pub mod inference;
pub mod models;
pub mod naming;
pub mod storage;
pub mod validation;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use storage::{FileSystemStorageBackend, MemoryStorageBackend, StorageBackend, StorageError};

pub use convert::{ConvertError, ConvertOptions, ConvertResult, Converter, convert};
pub use export::{CSharpExporter, CodegenConfig, ExportError, ExportResult, OutputLanguage};
pub use inference::{ClassInferrer, InferenceConfig, InferenceError, JsonValueKind, Target};
pub use validation::{ClassValidationResult, ClassValidator};

// Re-export models
pub use models::{ClassEntity, ClassesEntity, ModelError, Property, PropertyKind, PropertyType};
