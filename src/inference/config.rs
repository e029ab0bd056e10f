//! Configuration for schema inference

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::DEFAULT_INNER_CLASS_NAME;

/// Configuration for schema inference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InferenceConfig {
    /// Base name of synthesized inner classes
    pub inner_class_base_name: String,

    /// Maximum nesting depth for objects
    pub max_depth: usize,

    /// Only files with this extension are read from a directory (`None` = every file)
    pub file_extension: Option<String>,

    /// Infer the files of a directory concurrently (needs the `parallel` feature)
    pub parallel: bool,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            inner_class_base_name: DEFAULT_INNER_CLASS_NAME.to_string(),
            max_depth: 64,
            file_extension: Some("json".to_string()),
            parallel: false,
        }
    }
}

impl InferenceConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> InferenceConfigBuilder {
        InferenceConfigBuilder::default()
    }

    /// Whether a directory entry should be inferred
    pub fn accepts_file(&self, path: &Path) -> bool {
        match &self.file_extension {
            None => true,
            Some(wanted) => path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted)),
        }
    }
}

/// Builder for InferenceConfig
#[derive(Debug, Default)]
pub struct InferenceConfigBuilder {
    config: InferenceConfig,
}

impl InferenceConfigBuilder {
    /// Set the inner class base name
    pub fn inner_class_base_name(mut self, name: impl Into<String>) -> Self {
        self.config.inner_class_base_name = name.into();
        self
    }

    /// Set the maximum nesting depth
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }

    /// Restrict directory enumeration to one extension, or accept every file
    pub fn file_extension(mut self, extension: Option<&str>) -> Self {
        self.config.file_extension = extension.map(|e| e.trim_start_matches('.').to_string());
        self
    }

    /// Enable or disable concurrent directory inference
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Build the configuration
    pub fn build(self) -> InferenceConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InferenceConfig::default();
        assert_eq!(config.inner_class_base_name, "InnerClass");
        assert_eq!(config.max_depth, 64);
        assert_eq!(config.file_extension.as_deref(), Some("json"));
        assert!(!config.parallel);
    }

    #[test]
    fn test_builder() {
        let config = InferenceConfig::builder()
            .inner_class_base_name("Nested")
            .max_depth(5)
            .file_extension(Some(".JSON"))
            .parallel(true)
            .build();

        assert_eq!(config.inner_class_base_name, "Nested");
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.file_extension.as_deref(), Some("JSON"));
        assert!(config.parallel);
    }

    #[test]
    fn test_accepts_file() {
        let config = InferenceConfig::default();
        assert!(config.accepts_file(Path::new("dir/fileA.json")));
        assert!(config.accepts_file(Path::new("dir/fileB.JSON")));
        assert!(!config.accepts_file(Path::new("dir/readme.md")));
        assert!(!config.accepts_file(Path::new("dir/noext")));

        let any = InferenceConfig::builder().file_extension(None).build();
        assert!(any.accepts_file(Path::new("dir/noext")));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: InferenceConfig = serde_json::from_str(r#"{"maxDepth": 3}"#).unwrap();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.inner_class_base_name, "InnerClass");
    }
}
