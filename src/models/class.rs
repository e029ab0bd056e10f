//! Class models for the schema

use serde::Serialize;

use super::ModelError;
use super::property::{Property, PropertyKind};

/// One generated class: a name and its properties in declaration order
///
/// Duplicate property names are kept; the name is stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEntity {
    name: String,
    properties: Vec<Property>,
}

impl ClassEntity {
    /// Create an empty class; the name must not be empty
    pub fn new(name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ModelError::InvalidArgument("className is null".to_string()));
        }
        Ok(Self {
            name,
            properties: Vec::new(),
        })
    }

    /// Create a class with its properties already collected
    pub fn with_properties(
        name: impl Into<String>,
        properties: Vec<Property>,
    ) -> Result<Self, ModelError> {
        let mut class = Self::new(name)?;
        class.properties = properties;
        Ok(class)
    }

    /// Append a property at the end of the declaration order
    pub fn add_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Names of the classes this class refers to, in declaration order
    pub fn referenced_classes(&self) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .filter(|p| p.property_type().kind() == PropertyKind::Class)
            .map(|p| p.class_name())
    }
}

/// Per-document aggregate: the root class plus a flat list of inner classes
///
/// Inner classes are stored in post-order (a nested object's class precedes
/// the class that contains it) and are looked up by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassesEntity {
    name: String,
    root_class: ClassEntity,
    inner_classes: Vec<ClassEntity>,
}

impl ClassesEntity {
    /// Create an aggregate whose root class carries the same name
    pub fn new(name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ModelError::InvalidArgument("className is null".to_string()));
        }
        let root_class = ClassEntity::new(name.clone())?;
        Ok(Self {
            name,
            root_class,
            inner_classes: Vec::new(),
        })
    }

    pub fn add_root_property(&mut self, property: Property) {
        self.root_class.add_property(property);
    }

    pub fn add_inner_class(&mut self, class: ClassEntity) {
        self.inner_classes.push(class);
    }

    /// Root class name (identical to the root class's own name)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root_class(&self) -> &ClassEntity {
        &self.root_class
    }

    pub fn inner_classes(&self) -> &[ClassEntity] {
        &self.inner_classes
    }

    /// Look up an inner class by name
    pub fn inner_class(&self, name: &str) -> Option<&ClassEntity> {
        self.inner_classes.iter().find(|c| c.name() == name)
    }

    /// All classes: inner classes in stored order, then the root
    pub fn classes(&self) -> impl Iterator<Item = &ClassEntity> {
        self.inner_classes
            .iter()
            .chain(std::iter::once(&self.root_class))
    }
}
