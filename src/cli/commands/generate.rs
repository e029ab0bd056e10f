//! Generate command implementation

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::cli::config::FileConfig;
use crate::cli::error::CliError;
use crate::cli::output::{ModelFormat, format_models, format_results};
use crate::convert::{ConvertOptions, Converter};
use crate::export::CodegenConfig;
use crate::storage::{FileSystemStorageBackend, StorageBackend};

/// Default number of spaces per indentation level
pub const DEFAULT_INDENT_COUNT: usize = 4;

/// Parse an indent count, ignoring values that are not a non-negative integer
pub fn parse_indent_count(raw: &str) -> Option<usize> {
    match raw.trim().parse() {
        Ok(count) => Some(count),
        Err(_) => {
            warn!("Ignoring indent count {:?}, not a number", raw);
            None
        }
    }
}

/// Arguments of the generate command, as given on the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateArgs {
    pub output_path: PathBuf,
    pub target: String,
    pub namespace: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub root_class: Option<String>,
    pub indent_count: Option<String>,
    pub config: Option<PathBuf>,
    pub keep_going: bool,
    pub dry_run: bool,
    pub emit_model: Option<ModelFormat>,
}

impl GenerateArgs {
    /// Combine command-line values with an optional config file; flags win
    pub fn into_options(self, file: FileConfig) -> ConvertOptions {
        let codegen = CodegenConfig::new()
            .with_namespace(self.namespace.or(file.namespace).unwrap_or_default())
            .with_prefix(self.prefix.or(file.prefix).unwrap_or_default())
            .with_suffix(self.suffix.or(file.suffix).unwrap_or_default())
            .with_indent_width(
                self.indent_count
                    .as_deref()
                    .and_then(parse_indent_count)
                    .or(file.indent_count)
                    .unwrap_or(DEFAULT_INDENT_COUNT),
            );

        let mut options = ConvertOptions::new(self.output_path)
            .with_codegen(codegen)
            .with_inference(file.inference.unwrap_or_default())
            .with_keep_going(self.keep_going || file.keep_going.unwrap_or(false))
            .with_dry_run(self.dry_run);
        options.root_class_name = self.root_class.or(file.root_class);
        options
    }
}

/// Handle the generate command against the native file system
pub fn handle_generate(args: GenerateArgs) -> Result<String, CliError> {
    run_generate(args, &FileSystemStorageBackend::new())
}

/// Handle the generate command against any storage backend
///
/// Returns the console report: either the serialized model (`--emit-model`)
/// or one status line per generated file.
pub fn run_generate<B>(args: GenerateArgs, backend: &B) -> Result<String, CliError>
where
    B: StorageBackend + ?Sized,
{
    if args.target.is_empty() {
        return Err(CliError::InvalidArgument("target is empty".to_string()));
    }

    let file_config = match &args.config {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            FileConfig::load(path)?
        }
        None => FileConfig::default(),
    };

    let target = args.target.clone();
    let emit_model = args.emit_model;
    let converter = Converter::new(backend, args.into_options(file_config));

    if let Some(format) = emit_model {
        let models: Vec<_> = converter
            .infer(&target)?
            .into_iter()
            .filter_map(|document| match document.result {
                Ok(classes) => Some(classes),
                Err(err) => {
                    let source = document
                        .source
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    warn!("Model of {} omitted: {}", source, err);
                    None
                }
            })
            .collect();
        return format_models(&models, format);
    }

    let results = converter.convert(&target)?;
    info!(
        "{} of {} file(s) generated",
        results.iter().filter(|r| r.success).count(),
        results.len()
    );
    Ok(format_results(&results))
}
