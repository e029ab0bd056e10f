//! Class validation functionality
//!
//! Findings are advisory: the model still renders, but the generated source
//! may not compile (colliding identifiers) or may reference a missing class.

use std::collections::HashMap;

use crate::models::{ClassEntity, ClassesEntity};
use crate::naming::to_pascal_case;

/// Result of class validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassValidationResult {
    /// Properties of one class that normalize to the same identifier
    pub naming_conflicts: Vec<NamingConflict>,
    /// Class-typed properties whose class is not among the inner classes
    pub dangling_references: Vec<DanglingReference>,
    /// Classes without properties
    pub empty_classes: Vec<EmptyClass>,
}

impl ClassValidationResult {
    pub fn is_clean(&self) -> bool {
        self.naming_conflicts.is_empty()
            && self.dangling_references.is_empty()
            && self.empty_classes.is_empty()
    }

    /// One human-readable line per finding
    pub fn messages(&self) -> Vec<String> {
        let conflicts = self.naming_conflicts.iter().map(|c| {
            format!(
                "{}: properties {:?} and {:?} both become {}",
                c.class_name, c.first_key, c.second_key, c.identifier
            )
        });
        let dangling = self.dangling_references.iter().map(|d| {
            format!(
                "{}: property {:?} references missing class {}",
                d.class_name, d.property, d.referenced_class
            )
        });
        let empty = self
            .empty_classes
            .iter()
            .map(|e| format!("{}: class has no properties", e.class_name));
        conflicts.chain(dangling).chain(empty).collect()
    }
}

/// Two raw keys of one class mapping onto the same C# identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConflict {
    pub class_name: String,
    pub first_key: String,
    pub second_key: String,
    pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub class_name: String,
    pub property: String,
    pub referenced_class: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyClass {
    pub class_name: String,
}

/// Class validator
#[derive(Debug, Default)]
pub struct ClassValidator;

impl ClassValidator {
    /// Create a new class validator
    pub fn new() -> Self {
        Self
    }

    /// Run every check over one document's classes
    pub fn validate(&self, classes: &ClassesEntity) -> ClassValidationResult {
        let mut result = ClassValidationResult::default();
        for class in classes.classes() {
            result
                .naming_conflicts
                .extend(self.detect_naming_conflicts(class));
            result
                .dangling_references
                .extend(self.detect_dangling_references(class, classes));
            if class.properties().is_empty() {
                result.empty_classes.push(EmptyClass {
                    class_name: class.name().to_string(),
                });
            }
        }
        result
    }

    /// Detect properties whose normalized identifiers collide
    ///
    /// Exact duplicate keys count as well; each later key is reported against
    /// the first key that produced the identifier.
    pub fn detect_naming_conflicts(&self, class: &ClassEntity) -> Vec<NamingConflict> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        let mut conflicts = Vec::new();

        for property in class.properties() {
            let identifier = to_pascal_case(property.name());
            match seen.get(&identifier) {
                Some(first) => conflicts.push(NamingConflict {
                    class_name: class.name().to_string(),
                    first_key: first.to_string(),
                    second_key: property.name().to_string(),
                    identifier,
                }),
                None => {
                    seen.insert(identifier, property.name());
                }
            }
        }

        conflicts
    }

    /// Detect class references that no inner class satisfies
    pub fn detect_dangling_references(
        &self,
        class: &ClassEntity,
        classes: &ClassesEntity,
    ) -> Vec<DanglingReference> {
        class
            .properties()
            .iter()
            .filter(|p| !p.class_name().is_empty())
            .filter(|p| classes.inner_class(p.class_name()).is_none())
            .map(|p| DanglingReference {
                class_name: class.name().to_string(),
                property: p.name().to_string(),
                referenced_class: p.class_name().to_string(),
            })
            .collect()
    }
}
