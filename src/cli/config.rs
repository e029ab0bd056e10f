//! TOML configuration file for the CLI
//!
//! Every key is optional; values given on the command line take precedence.
//!
//! ```toml
//! namespace = "Company.Dto"
//! prefix = "Api"
//! indentCount = 2
//! keepGoing = true
//!
//! [inference]
//! maxDepth = 32
//! innerClassBaseName = "Nested"
//! ```

use std::path::Path;

use serde::Deserialize;

use super::error::CliError;
use crate::inference::InferenceConfig;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileConfig {
    pub namespace: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    #[serde(alias = "rootclass")]
    pub root_class: Option<String>,
    pub indent_count: Option<usize>,
    pub keep_going: Option<bool>,
    pub inference: Option<InferenceConfig>,
}

impl FileConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))?;
        Self::parse(&content).map_err(|e| match e {
            CliError::ConfigError(_, msg) => CliError::ConfigError(path.to_path_buf(), msg),
            other => other,
        })
    }

    /// Parse configuration text
    pub fn parse(content: &str) -> Result<Self, CliError> {
        toml::from_str(content)
            .map_err(|e| CliError::ConfigError(Default::default(), e.to_string()))
    }
}
