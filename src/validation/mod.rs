//! Validation functionality
//!
//! Provides checks over an inferred class model before it is rendered:
//! - Class validation (identifier collisions, dangling class references, empty classes)

pub mod classes;

pub use classes::{
    ClassValidationResult, ClassValidator, DanglingReference, EmptyClass, NamingConflict,
};
