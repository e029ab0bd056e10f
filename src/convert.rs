//! End-to-end conversion: target → class models → source files
//!
//! [`Converter`] ties the inference engine, validation, the exporter and a
//! storage backend together and reports one [`ConvertResult`] per document.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::export::{CSharpExporter, CodegenConfig, ExportError};
use crate::inference::{ClassInferrer, InferenceConfig, InferenceError, Target};
use crate::models::ClassesEntity;
use crate::storage::{StorageBackend, StorageError};
use crate::validation::ClassValidator;

/// Errors that halt a conversion run
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error(transparent)]
    Inference(#[from] InferenceError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Options of one conversion run
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Directory receiving the generated files (created when missing)
    pub root_path: PathBuf,
    /// Root class name; required when the target is JSON text
    pub root_class_name: Option<String>,
    pub codegen: CodegenConfig,
    pub inference: InferenceConfig,
    /// Record failing directory entries and continue instead of halting
    pub keep_going: bool,
    /// Render without writing files
    pub dry_run: bool,
}

impl ConvertOptions {
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            root_class_name: None,
            codegen: CodegenConfig::default(),
            inference: InferenceConfig::default(),
            keep_going: false,
            dry_run: false,
        }
    }

    pub fn with_root_class_name(mut self, name: impl Into<String>) -> Self {
        self.root_class_name = Some(name.into());
        self
    }

    pub fn with_codegen(mut self, codegen: CodegenConfig) -> Self {
        self.codegen = codegen;
        self
    }

    pub fn with_inference(mut self, inference: InferenceConfig) -> Self {
        self.inference = inference;
        self
    }

    pub fn with_keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Outcome for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResult {
    pub success: bool,
    /// Written (or, on a dry run, would-be) file path; the source path on failure
    pub file_name: String,
    pub source_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConvertResult {
    fn success(file_name: String, source_code: String) -> Self {
        Self {
            success: true,
            file_name,
            source_code,
            error: None,
        }
    }

    fn failure(file_name: String, error: String) -> Self {
        Self {
            success: false,
            file_name,
            source_code: String::new(),
            error: Some(error),
        }
    }
}

/// One inferred document; `source` is `None` for inline JSON text
#[derive(Debug, Clone, PartialEq)]
pub struct InferredDocument {
    pub source: Option<PathBuf>,
    pub result: Result<ClassesEntity, InferenceError>,
}

/// Conversion service over a storage backend
pub struct Converter<'a, B: StorageBackend + ?Sized> {
    backend: &'a B,
    options: ConvertOptions,
    inferrer: ClassInferrer,
    exporter: CSharpExporter,
    validator: ClassValidator,
}

impl<'a, B: StorageBackend + ?Sized> Converter<'a, B> {
    pub fn new(backend: &'a B, options: ConvertOptions) -> Self {
        let inferrer = ClassInferrer::with_config(options.inference.clone());
        let exporter = CSharpExporter::new(options.codegen.clone());
        Self {
            backend,
            options,
            inferrer,
            exporter,
            validator: ClassValidator::new(),
        }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Classify the target and infer every document it names
    ///
    /// Without `keep_going` the first failing document aborts the run; with it,
    /// failing directory entries are returned alongside the successful ones.
    pub fn infer(&self, target: &str) -> Result<Vec<InferredDocument>, ConvertError> {
        let documents = match Target::classify(target, self.backend)? {
            Target::Json(json) => {
                let name = self
                    .options
                    .root_class_name
                    .as_deref()
                    .filter(|name| !name.is_empty())
                    .ok_or_else(|| InferenceError::InvalidArgument("rootClassName".to_string()))?;
                vec![InferredDocument {
                    source: None,
                    result: Ok(self.inferrer.infer_str(&json, name)?),
                }]
            }
            Target::File(path) => {
                let classes = self.inferrer.infer_file(self.backend, &path)?;
                vec![InferredDocument {
                    source: Some(path),
                    result: Ok(classes),
                }]
            }
            Target::Directory(dir) => {
                let mut documents = Vec::new();
                for (path, result) in self.inferrer.infer_dir_each(self.backend, &dir)? {
                    if let Err(err) = &result {
                        if !self.options.keep_going {
                            return Err(err.clone().into());
                        }
                        warn!("Skipping {}: {}", path.display(), err);
                    }
                    documents.push(InferredDocument {
                        source: Some(path),
                        result,
                    });
                }
                documents
            }
        };
        Ok(documents)
    }

    /// Convert every document of `target` into a source file
    pub fn convert(&self, target: &str) -> Result<Vec<ConvertResult>, ConvertError> {
        let documents = self.infer(target)?;
        let mut results = Vec::with_capacity(documents.len());

        for document in documents {
            let result = match document.result {
                Ok(classes) => self.output(&classes)?,
                Err(err) => {
                    let source = document
                        .source
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    ConvertResult::failure(source, err.to_string())
                }
            };
            results.push(result);
        }

        Ok(results)
    }

    /// Render one document and write it below the root path
    pub fn output(&self, classes: &ClassesEntity) -> Result<ConvertResult, ConvertError> {
        let validation = self.validator.validate(classes);
        for message in validation.messages() {
            warn!("{}", message);
        }

        let source_code = self.exporter.render(classes)?;
        let path = self.options.root_path.join(self.exporter.file_name(classes));
        let file_name = path.display().to_string();

        if self.options.dry_run {
            info!("Dry run, not writing {}", file_name);
            return Ok(ConvertResult::success(file_name, source_code));
        }

        match self.write(&path, &source_code) {
            Ok(()) => {
                info!("Wrote {}", file_name);
                Ok(ConvertResult::success(file_name, source_code))
            }
            Err(err) if self.options.keep_going => {
                warn!("Failed to write {}: {}", file_name, err);
                Ok(ConvertResult::failure(file_name, err.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), StorageError> {
        let root = &self.options.root_path;
        if !self.backend.dir_exists(root) {
            self.backend.create_dir(root)?;
        }
        self.backend.write_file(path, content)
    }
}

/// Convert `target` with the given options in one call
pub fn convert<B>(
    backend: &B,
    target: &str,
    options: ConvertOptions,
) -> Result<Vec<ConvertResult>, ConvertError>
where
    B: StorageBackend + ?Sized,
{
    Converter::new(backend, options).convert(target)
}
