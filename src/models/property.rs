//! Property model for the schema

use serde::Serialize;

use super::ModelError;

/// Base name given to classes synthesized for nested JSON objects
pub const DEFAULT_INNER_CLASS_NAME: &str = "InnerClass";

/// Inferred kind of a property value
///
/// Every JSON value kind maps onto exactly one of these. Integers and
/// floating point numbers are both [`PropertyKind::Decimal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyKind {
    String,
    Decimal,
    Bool,
    Null,
    Class,
}

/// Type of a property: kind, list flag and (for classes) the referenced class
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyType {
    kind: PropertyKind,
    is_list: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    class_name: String,
}

impl PropertyType {
    /// Create a scalar property type (anything but [`PropertyKind::Class`])
    pub fn scalar(kind: PropertyKind, is_list: bool) -> Result<Self, ModelError> {
        if kind == PropertyKind::Class {
            return Err(ModelError::InvalidArgument(
                "kind(Class) requires a class number".to_string(),
            ));
        }
        Ok(Self {
            kind,
            is_list,
            class_name: String::new(),
        })
    }

    /// Create a class-typed property from a discovery counter value
    ///
    /// The class name is computed with [`inner_class_name`] using
    /// [`DEFAULT_INNER_CLASS_NAME`].
    pub fn class(class_no: i64, is_list: bool) -> Result<Self, ModelError> {
        Self::class_with_base(DEFAULT_INNER_CLASS_NAME, class_no, is_list)
    }

    /// Create a class-typed property using a custom inner class base name
    pub fn class_with_base(base: &str, class_no: i64, is_list: bool) -> Result<Self, ModelError> {
        if class_no < 0 {
            return Err(ModelError::InvalidArgument(
                "classNo is negative value".to_string(),
            ));
        }
        if base.is_empty() {
            return Err(ModelError::InvalidArgument("base is null".to_string()));
        }
        Ok(Self {
            kind: PropertyKind::Class,
            is_list,
            class_name: inner_class_name(base, class_no as u64),
        })
    }

    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    pub fn is_list(&self) -> bool {
        self.is_list
    }

    /// Referenced class name; empty unless the kind is [`PropertyKind::Class`]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

/// Compute the name of an inner class from the discovery counter.
///
/// Counter values 0 and 1 both yield the bare base name; N ≥ 2 appends the
/// letter `'A' + N - 2`. Past `Z` the suffix grows to two letters (`AA`, `AB`, ...).
///
/// # Examples
///
/// ```
/// use json2dto::models::inner_class_name;
///
/// assert_eq!(inner_class_name("InnerClass", 0), "InnerClass");
/// assert_eq!(inner_class_name("InnerClass", 1), "InnerClass");
/// assert_eq!(inner_class_name("InnerClass", 2), "InnerClassA");
/// assert_eq!(inner_class_name("InnerClass", 27), "InnerClassZ");
/// assert_eq!(inner_class_name("InnerClass", 28), "InnerClassAA");
/// ```
pub fn inner_class_name(base: &str, class_no: u64) -> String {
    if class_no < 2 {
        return base.to_string();
    }
    format!("{}{}", base, letter_suffix(class_no - 2))
}

/// Bijective base-26 letters: 0 → A, 25 → Z, 26 → AA
fn letter_suffix(mut index: u64) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push((b'A' + (index % 26) as u8) as char);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// A property: the raw JSON key plus its inferred type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    name: String,
    #[serde(rename = "type")]
    property_type: PropertyType,
}

impl Property {
    /// Create a property; the raw key must not be empty
    pub fn new(name: impl Into<String>, property_type: PropertyType) -> Result<Self, ModelError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ModelError::InvalidArgument("name is null".to_string()));
        }
        Ok(Self {
            name,
            property_type,
        })
    }

    /// Raw JSON key, unnormalized
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn property_type(&self) -> &PropertyType {
        &self.property_type
    }

    /// Shortcut for the referenced class name (empty for scalars)
    pub fn class_name(&self) -> &str {
        self.property_type.class_name()
    }
}
