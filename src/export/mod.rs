//! Export functionality
//!
//! Renders an inferred [`ClassesEntity`](crate::models::ClassesEntity) as source code:
//! - C# (`System.Text.Json` DTO classes)

pub mod csharp;

use serde::{Deserialize, Serialize};

/// Result of an export operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    /// Generated source text
    pub content: String,
    /// Format identifier (the output file extension)
    pub format: String,
}

/// Error during export
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),
}

/// Target language of the generated sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputLanguage {
    #[default]
    #[serde(alias = "cs", alias = "c#")]
    CSharp,
}

impl OutputLanguage {
    /// Source file extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            OutputLanguage::CSharp => "cs",
        }
    }
}

/// Code generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodegenConfig {
    /// Namespace wrapping every class; empty for none
    pub namespace: String,
    /// Spaces per indentation level
    pub indent_width: usize,
    /// Prepended to every class name
    pub prefix: String,
    /// Appended to every class name
    pub suffix: String,
    pub language: OutputLanguage,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            indent_width: 4,
            prefix: String::new(),
            suffix: String::new(),
            language: OutputLanguage::CSharp,
        }
    }
}

impl CodegenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_language(mut self, language: OutputLanguage) -> Self {
        self.language = language;
        self
    }
}

// Re-export for convenience
pub use csharp::CSharpExporter;
