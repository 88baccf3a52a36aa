//! Core types for the protomock generator.
//!
//! This crate provides the foundational types used across protomock:
//!
//! - [`ScalarKind`] - The closed universe of protobuf scalar field kinds
//! - [`FieldKind`] - Tagged union over scalar/message/enum/map field shapes
//! - [`SchemaSet`] - Arena-addressed schema graph with lookup by type name
//! - [`MockValue`] - The generated, JSON-representable output tree
//!
//! # Architecture
//!
//! The mock-core crate sits at the foundation of protomock:
//!
//! ```text
//! mock-core (this crate)
//!    │
//!    ├─── mock-generator  (depends on mock-core for schema + value types)
//!    │
//!    └─── external loaders (populate SchemaSet from .proto descriptors)
//! ```
//!
//! # Example
//!
//! ```rust
//! use mock_core::{FieldDescriptor, FieldKind, MessageDescriptor, ScalarKind, SchemaSet};
//!
//! let mut schema = SchemaSet::new("person.proto");
//! schema.add_message(MessageDescriptor::new(
//!     "Person",
//!     vec![FieldDescriptor::scalar("name", ScalarKind::String)],
//! ));
//!
//! let (_, person) = schema.lookup_message("Person").unwrap();
//! assert_eq!(person.fields[0].name, "name");
//! ```

pub mod names;
pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use names::to_snake_case;
pub use schema::{
    EnumDescriptor, EnumId, EnumValue, FieldDescriptor, FieldKind, MessageDescriptor, MessageId,
    SchemaError, SchemaSet,
};
pub use types::ScalarKind;
pub use values::MockValue;
