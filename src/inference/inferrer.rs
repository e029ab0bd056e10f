//! Class inference engine

use std::path::{Path, PathBuf};

use serde_json::value::RawValue;
use tracing::{debug, info};

use super::config::InferenceConfig;
use super::error::InferenceError;
use super::kinds::{JsonValueKind, Members};
use super::target::Target;
use crate::models::{ClassEntity, ClassesEntity, Property, PropertyKind, PropertyType};
use crate::naming::capitalize;
use crate::storage::StorageBackend;

/// Class inference engine
///
/// Analyzes one JSON document per call and builds its class model. The engine
/// holds only configuration; all per-document state lives in the walk.
#[derive(Debug, Clone, Default)]
pub struct ClassInferrer {
    config: InferenceConfig,
}

impl ClassInferrer {
    /// Create a new inferrer with default configuration
    pub fn new() -> Self {
        Self::with_config(InferenceConfig::default())
    }

    /// Create a new inferrer with custom configuration
    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Infer the classes of an in-memory JSON document
    ///
    /// Only the first character of `root_class_name` is upper-cased.
    pub fn infer_str(
        &self,
        json: &str,
        root_class_name: &str,
    ) -> Result<ClassesEntity, InferenceError> {
        if json.is_empty() {
            return Err(InferenceError::InvalidArgument("json".to_string()));
        }
        if root_class_name.is_empty() {
            return Err(InferenceError::InvalidArgument(
                "rootClassName".to_string(),
            ));
        }

        let mut classes = ClassesEntity::new(capitalize(root_class_name))?;
        let mut walk = Walk::new(&self.config);
        for property in walk.object_properties(json, 0)? {
            classes.add_root_property(property);
        }
        for class in walk.inner_classes {
            classes.add_inner_class(class);
        }

        debug!(
            "Inferred class {} with {} inner classes",
            classes.name(),
            classes.inner_classes().len()
        );
        Ok(classes)
    }

    /// Infer the classes of a JSON file; the root class is named after the file stem
    pub fn infer_file<B>(&self, backend: &B, path: &Path) -> Result<ClassesEntity, InferenceError>
    where
        B: StorageBackend + ?Sized,
    {
        if !backend.file_exists(path) {
            return Err(InferenceError::NotFound(path.display().to_string()));
        }

        let content = backend.read_file(path)?;
        // a leading byte-order mark is not part of the document
        let json = content.strip_prefix('\u{feff}').unwrap_or(&content);
        let root_class_name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        self.infer_str(json, root_class_name)
    }

    /// Infer every file of a directory, keeping one result per file
    ///
    /// Files come in file-name order. A failing file does not stop the others;
    /// callers decide whether to halt (see [`ClassInferrer::infer_dir`]).
    pub fn infer_dir_each<B>(
        &self,
        backend: &B,
        dir: &Path,
    ) -> Result<Vec<(PathBuf, Result<ClassesEntity, InferenceError>)>, InferenceError>
    where
        B: StorageBackend + ?Sized,
    {
        if !backend.dir_exists(dir) {
            return Err(InferenceError::NotFound(dir.display().to_string()));
        }

        let files: Vec<PathBuf> = backend
            .list_files(dir)?
            .into_iter()
            .filter(|path| self.config.accepts_file(path))
            .collect();
        if files.is_empty() {
            return Err(InferenceError::NoFiles(dir.display().to_string()));
        }

        info!("Inferring {} file(s) from {}", files.len(), dir.display());
        Ok(self.infer_files(backend, files))
    }

    /// Infer every file of a directory, halting on the first failure in file order
    pub fn infer_dir<B>(&self, backend: &B, dir: &Path) -> Result<Vec<ClassesEntity>, InferenceError>
    where
        B: StorageBackend + ?Sized,
    {
        self.infer_dir_each(backend, dir)?
            .into_iter()
            .map(|(_, result)| result)
            .collect()
    }

    /// Classify `target` and infer every document it names
    ///
    /// `root_class_name` is required when the target is JSON text and ignored otherwise.
    pub fn infer_target<B>(
        &self,
        backend: &B,
        target: &str,
        root_class_name: Option<&str>,
    ) -> Result<Vec<ClassesEntity>, InferenceError>
    where
        B: StorageBackend + ?Sized,
    {
        match Target::classify(target, backend)? {
            Target::Json(json) => {
                let name = root_class_name.unwrap_or_default();
                Ok(vec![self.infer_str(&json, name)?])
            }
            Target::File(path) => Ok(vec![self.infer_file(backend, &path)?]),
            Target::Directory(dir) => self.infer_dir(backend, &dir),
        }
    }

    #[cfg(feature = "parallel")]
    fn infer_files<B>(
        &self,
        backend: &B,
        files: Vec<PathBuf>,
    ) -> Vec<(PathBuf, Result<ClassesEntity, InferenceError>)>
    where
        B: StorageBackend + ?Sized,
    {
        use rayon::prelude::*;

        if self.config.parallel {
            return files
                .into_par_iter()
                .map(|path| {
                    let result = self.infer_file(backend, &path);
                    (path, result)
                })
                .collect();
        }
        self.infer_files_sequential(backend, files)
    }

    #[cfg(not(feature = "parallel"))]
    fn infer_files<B>(
        &self,
        backend: &B,
        files: Vec<PathBuf>,
    ) -> Vec<(PathBuf, Result<ClassesEntity, InferenceError>)>
    where
        B: StorageBackend + ?Sized,
    {
        self.infer_files_sequential(backend, files)
    }

    fn infer_files_sequential<B>(
        &self,
        backend: &B,
        files: Vec<PathBuf>,
    ) -> Vec<(PathBuf, Result<ClassesEntity, InferenceError>)>
    where
        B: StorageBackend + ?Sized,
    {
        files
            .into_iter()
            .map(|path| {
                let result = self.infer_file(backend, &path);
                (path, result)
            })
            .collect()
    }
}

/// State of one document's recursive walk
///
/// `counter` is the discovery counter shared by every nesting level;
/// `inner_classes` receives each nested class after its own children.
struct Walk<'c> {
    config: &'c InferenceConfig,
    counter: u64,
    inner_classes: Vec<ClassEntity>,
}

impl<'c> Walk<'c> {
    fn new(config: &'c InferenceConfig) -> Self {
        Self {
            config,
            counter: 0,
            inner_classes: Vec::new(),
        }
    }

    /// Collect the properties of one object, given as its exact JSON text
    fn object_properties(
        &mut self,
        json: &str,
        depth: usize,
    ) -> Result<Vec<Property>, InferenceError> {
        if depth > self.config.max_depth {
            return Err(InferenceError::MaxDepthExceeded {
                depth,
                max: self.config.max_depth,
            });
        }

        let members = parse_members(json)?;
        let mut properties = Vec::with_capacity(members.len());
        for (key, value) in members {
            let property_type = self.value_type(&value, depth)?;
            properties.push(Property::new(key, property_type)?);
        }
        Ok(properties)
    }

    fn value_type(
        &mut self,
        value: &RawValue,
        depth: usize,
    ) -> Result<PropertyType, InferenceError> {
        match JsonValueKind::of(value) {
            JsonValueKind::Object => self.nested_class(value.get(), false, depth),
            JsonValueKind::Array => self.array_type(value, depth),
            scalar => scalar_type(scalar, false),
        }
    }

    /// First element decides the element kind; an empty array is a list of null
    fn array_type(
        &mut self,
        value: &RawValue,
        depth: usize,
    ) -> Result<PropertyType, InferenceError> {
        let elements: Vec<Box<RawValue>> = serde_json::from_str(value.get())
            .map_err(|_| InferenceError::JsonParse(value.get().to_string()))?;

        let Some(first) = elements.first() else {
            return Ok(PropertyType::scalar(PropertyKind::Null, true)?);
        };

        match JsonValueKind::of(first) {
            JsonValueKind::Object => self.nested_class(first.get(), true, depth),
            JsonValueKind::Array => Err(InferenceError::UnsupportedType(format!(
                "nested array {}",
                value.get()
            ))),
            scalar => scalar_type(scalar, true),
        }
    }

    fn nested_class(
        &mut self,
        json: &str,
        is_list: bool,
        depth: usize,
    ) -> Result<PropertyType, InferenceError> {
        self.counter += 1;
        let property_type = PropertyType::class_with_base(
            &self.config.inner_class_base_name,
            self.counter as i64,
            is_list,
        )?;

        let properties = self.object_properties(json, depth + 1)?;
        let class = ClassEntity::with_properties(property_type.class_name(), properties)?;
        debug!(
            "Inner class {} with {} properties",
            class.name(),
            class.properties().len()
        );
        self.inner_classes.push(class);

        Ok(property_type)
    }
}

fn scalar_type(kind: JsonValueKind, is_list: bool) -> Result<PropertyType, InferenceError> {
    let property_kind = kind
        .scalar_kind()
        .ok_or_else(|| InferenceError::UnsupportedType(kind.name().to_string()))?;
    Ok(PropertyType::scalar(property_kind, is_list)?)
}

/// Parse an object's members, reporting errors against `json` itself
fn parse_members(json: &str) -> Result<Vec<(String, Box<RawValue>)>, InferenceError> {
    let raw: Box<RawValue> =
        serde_json::from_str(json).map_err(|_| InferenceError::JsonParse(json.to_string()))?;

    let kind = JsonValueKind::of(&raw);
    if kind != JsonValueKind::Object {
        return Err(InferenceError::InvalidStructure {
            found: kind.name(),
            json: json.to_string(),
        });
    }

    let Members(members) = serde_json::from_str::<Members>(raw.get())
        .map_err(|_| InferenceError::JsonParse(json.to_string()))?;
    if members.is_empty() {
        return Err(InferenceError::EmptyObject(json.to_string()));
    }
    Ok(members)
}
