//! Schema entity model
//!
//! In-memory representation of one inferred document schema:
//! [`ClassesEntity`] owns a root [`ClassEntity`] and a flat list of inner classes;
//! every [`Property`] carries a [`PropertyType`]. Nested JSON objects are not
//! stored as a tree: a property of kind [`PropertyKind::Class`] refers to its
//! inner class by name only.

pub mod class;
pub mod property;

pub use class::{ClassEntity, ClassesEntity};
pub use property::{DEFAULT_INNER_CLASS_NAME, Property, PropertyKind, PropertyType, inner_class_name};

/// Error raised when a model value is constructed from invalid arguments
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("{0}")]
    InvalidArgument(String),
}
