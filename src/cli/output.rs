//! Output formatting for CLI

use clap::ValueEnum;

use super::error::CliError;
use crate::convert::ConvertResult;
use crate::models::ClassesEntity;

/// Serialization format for `--emit-model`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelFormat {
    Json,
    Yaml,
}

/// One `<file>...Success` or `<file>...Error` line per result
pub fn format_results(results: &[ConvertResult]) -> String {
    let mut output = String::new();
    for result in results {
        let status = if result.success { "Success" } else { "Error" };
        output.push_str(&format!("{}...{}\n", result.file_name, status));
    }
    output
}

/// Serialize inferred models for inspection
pub fn format_models(models: &[ClassesEntity], format: ModelFormat) -> Result<String, CliError> {
    match format {
        ModelFormat::Json => serde_json::to_string_pretty(models)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| CliError::SerializationError(e.to_string())),
        ModelFormat::Yaml => {
            serde_yaml::to_string(models).map_err(|e| CliError::SerializationError(e.to_string()))
        }
    }
}
