//! Schema inference engine for JSON documents
//!
//! Turns a JSON document into a [`ClassesEntity`](crate::models::ClassesEntity):
//! one root class holding the top-level members, plus one flattened inner class
//! per nested object.
//!
//! ## Features
//!
//! - **Kind classification** - each member value is dispatched on its [`JsonValueKind`]
//! - **Flattening** - nested objects become sibling inner classes, deepest first
//! - **Inner class naming** - a discovery counter threaded through the whole walk
//! - **Targets** - JSON text, a single `.json` file, or a directory of them
//!
//! ## Example
//!
//! ```rust
//! use json2dto::inference::ClassInferrer;
//! use json2dto::models::PropertyKind;
//!
//! let inferrer = ClassInferrer::new();
//! let classes = inferrer
//!     .infer_str(r#"{"name": "Alice", "address": {"city": "Berlin"}}"#, "person")
//!     .unwrap();
//!
//! assert_eq!(classes.name(), "Person");
//! assert_eq!(classes.inner_classes()[0].name(), "InnerClass");
//! assert_eq!(
//!     classes.root_class().properties()[1].property_type().kind(),
//!     PropertyKind::Class
//! );
//! ```

mod config;
mod error;
mod inferrer;
mod kinds;
mod target;

pub use config::{InferenceConfig, InferenceConfigBuilder};
pub use error::InferenceError;
pub use inferrer::ClassInferrer;
pub use kinds::JsonValueKind;
pub use target::Target;
