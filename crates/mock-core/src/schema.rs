//! Schema graph for the protomock generator.
//!
//! This module defines the in-memory descriptor graph an external loader
//! populates from a `.proto` source, and the lookup surface the generator
//! consumes.
//!
//! Message and enum descriptors live in flat arenas inside [`SchemaSet`]
//! and reference each other through copyable [`MessageId`] / [`EnumId`]
//! indices instead of direct links. Cyclic schemas (a message that
//! references itself, directly or transitively) are therefore
//! representable; bounding the traversal of such graphs is the
//! generator's job.

use crate::types::ScalarKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Schema source missing or unparsable (surfaced by loaders).
    #[error("Failed to load schema '{source_name}': {reason}")]
    Load {
        /// Identity of the schema source (e.g. a file path)
        source_name: String,
        /// What went wrong during loading
        reason: String,
    },

    /// Requested message type absent from the resolved schema.
    #[error("no such type: {type_name} in {source_name}")]
    TypeNotFound {
        /// The requested type name
        type_name: String,
        /// Identity of the schema source that was searched
        source_name: String,
    },
}

// ============================================================================
// Descriptor Types
// ============================================================================

/// Arena index of a message descriptor within a [`SchemaSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub usize);

/// Arena index of an enum descriptor within a [`SchemaSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumId(pub usize);

/// Resolved shape of a field.
///
/// This is a closed union: generation matches on it exhaustively, and
/// anything a loader cannot resolve into one of the first four shapes
/// must be recorded as [`FieldKind::Unsupported`] so the fallback stays
/// visible instead of disappearing into a default match arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum FieldKind {
    /// Plain scalar field
    Scalar(ScalarKind),

    /// Reference to a nested message type
    Message(MessageId),

    /// Reference to an enum type
    Enum(EnumId),

    /// Protocol map field
    Map {
        /// Key kind (proto restricts keys to integral/string scalars;
        /// that restriction is the loader's concern, not enforced here)
        key: ScalarKind,
        /// Value shape (scalar, message or enum reference)
        value: Box<FieldKind>,
    },

    /// A type the loader could not resolve into any of the above.
    Unsupported {
        /// The unresolved type name, kept for diagnostics
        type_name: String,
    },
}

/// Descriptor for a single message field.
///
/// Declaration order of descriptors within a message is semantically
/// meaningful: it fixes the key order of the generated output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name as declared in the schema source
    pub name: String,

    /// Resolved field shape
    pub kind: FieldKind,

    /// Whether this is a repeated field
    #[serde(default)]
    pub repeated: bool,
}

impl FieldDescriptor {
    /// Create a new field descriptor.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            repeated: false,
        }
    }

    /// Create a singular scalar field.
    pub fn scalar(name: impl Into<String>, kind: ScalarKind) -> Self {
        Self::new(name, FieldKind::Scalar(kind))
    }

    /// Create a repeated field of the given shape.
    pub fn repeated(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            repeated: true,
        }
    }

    /// Create a map field with the given key kind and value shape.
    pub fn map(name: impl Into<String>, key: ScalarKind, value: FieldKind) -> Self {
        Self::new(
            name,
            FieldKind::Map {
                key,
                value: Box::new(value),
            },
        )
    }
}

/// Descriptor for a message type: an ordered sequence of fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDescriptor {
    /// Message type name
    pub name: String,

    /// Field descriptors in declaration order; names unique per message
    pub fields: Vec<FieldDescriptor>,
}

impl MessageDescriptor {
    /// Create a new message descriptor.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Get a field descriptor by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// All field names in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

/// A single named enum value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    /// Value name as declared in the schema source
    pub name: String,

    /// Assigned number; need not be contiguous or unique across values
    pub number: i32,
}

impl EnumValue {
    /// Create a new enum value.
    pub fn new(name: impl Into<String>, number: i32) -> Self {
        Self {
            name: name.into(),
            number,
        }
    }
}

/// Descriptor for an enum type: an ordered sequence of named values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDescriptor {
    /// Enum type name
    pub name: String,

    /// Enum values in declaration order
    pub values: Vec<EnumValue>,
}

impl EnumDescriptor {
    /// Create a new enum descriptor.
    pub fn new(name: impl Into<String>, values: Vec<EnumValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// The assigned numbers of all values, in declaration order.
    pub fn numbers(&self) -> Vec<i32> {
        self.values.iter().map(|v| v.number).collect()
    }
}

// ============================================================================
// Schema Set
// ============================================================================

/// Resolved schema graph for one schema source.
///
/// Holds the message and enum arenas plus a name lookup for message
/// types. Loaders populate it once (optionally in two phases, see
/// [`declare_message`](Self::declare_message)); afterwards it is
/// read-only for the duration of any generation call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaSet {
    /// Identity of the schema source (e.g. the `.proto` file path)
    source: String,

    /// Message descriptor arena
    messages: Vec<MessageDescriptor>,

    /// Enum descriptor arena
    enums: Vec<EnumDescriptor>,

    /// Cached message lookup (not serialized)
    #[serde(skip)]
    message_map: HashMap<String, usize>,
}

impl SchemaSet {
    /// Create an empty schema set for the given source identity.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            messages: Vec::new(),
            enums: Vec::new(),
            message_map: HashMap::new(),
        }
    }

    /// Identity of the schema source this set was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Add a fully built message descriptor, returning its id.
    pub fn add_message(&mut self, message: MessageDescriptor) -> MessageId {
        let idx = self.messages.len();
        self.message_map.insert(message.name.clone(), idx);
        self.messages.push(message);
        MessageId(idx)
    }

    /// Declare a message by name with no fields yet, returning its id.
    ///
    /// Together with [`define_message`](Self::define_message) this allows
    /// loaders to build mutually recursive message graphs: declare every
    /// type first, then fill in fields that reference the ids.
    pub fn declare_message(&mut self, name: impl Into<String>) -> MessageId {
        self.add_message(MessageDescriptor::new(name, Vec::new()))
    }

    /// Fill in the fields of a previously declared message.
    pub fn define_message(&mut self, id: MessageId, fields: Vec<FieldDescriptor>) {
        if let Some(message) = self.messages.get_mut(id.0) {
            message.fields = fields;
        }
    }

    /// Add an enum descriptor, returning its id.
    pub fn add_enum(&mut self, descriptor: EnumDescriptor) -> EnumId {
        let idx = self.enums.len();
        self.enums.push(descriptor);
        EnumId(idx)
    }

    /// Resolve a message id to its descriptor.
    pub fn message(&self, id: MessageId) -> Option<&MessageDescriptor> {
        self.messages.get(id.0)
    }

    /// Resolve an enum id to its descriptor.
    pub fn enumeration(&self, id: EnumId) -> Option<&EnumDescriptor> {
        self.enums.get(id.0)
    }

    /// Look up a message type by name.
    ///
    /// Fails with [`SchemaError::TypeNotFound`] carrying the requested
    /// name and the source identity if the type is absent.
    pub fn lookup_message(&self, name: &str) -> Result<(MessageId, &MessageDescriptor), SchemaError> {
        self.message_map
            .get(name)
            .and_then(|&idx| self.messages.get(idx).map(|m| (MessageId(idx), m)))
            .ok_or_else(|| SchemaError::TypeNotFound {
                type_name: name.to_string(),
                source_name: self.source.clone(),
            })
    }

    /// All message type names in this set.
    pub fn message_names(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.name.as_str()).collect()
    }

    /// Rebuild the message lookup map.
    ///
    /// Needed after deserializing a schema set, since the cached map is
    /// not serialized.
    pub fn rebuild_lookup(&mut self) {
        self.message_map = self
            .messages
            .iter()
            .enumerate()
            .map(|(idx, message)| (message.name.clone(), idx))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address_book() -> SchemaSet {
        let mut schema = SchemaSet::new("addressbook.proto");
        let person = schema.declare_message("Person");
        schema.define_message(
            person,
            vec![
                FieldDescriptor::scalar("name", ScalarKind::String),
                FieldDescriptor::scalar("id", ScalarKind::Int32),
            ],
        );
        schema.add_message(MessageDescriptor::new(
            "AddressBook",
            vec![FieldDescriptor::repeated(
                "people",
                FieldKind::Message(person),
            )],
        ));
        schema
    }

    #[test]
    fn test_lookup_message() {
        let schema = address_book();

        let (id, person) = schema.lookup_message("Person").unwrap();
        assert_eq!(person.name, "Person");
        assert_eq!(person.field_names(), vec!["name", "id"]);
        assert_eq!(schema.message(id).unwrap().name, "Person");
    }

    #[test]
    fn test_lookup_missing_type() {
        let schema = address_book();

        let err = schema.lookup_message("Company").unwrap_err();
        match err {
            SchemaError::TypeNotFound {
                type_name,
                source_name,
            } => {
                assert_eq!(type_name, "Company");
                assert_eq!(source_name, "addressbook.proto");
            }
            other => panic!("Expected TypeNotFound, got {other:?}"),
        }
        // The rendered message matches the historical loader error text.
        let err = schema.lookup_message("Company").unwrap_err();
        assert_eq!(
            err.to_string(),
            "no such type: Company in addressbook.proto"
        );
    }

    #[test]
    fn test_cyclic_graph_is_representable() {
        let mut schema = SchemaSet::new("tree.proto");
        let node = schema.declare_message("Node");
        schema.define_message(
            node,
            vec![
                FieldDescriptor::scalar("label", ScalarKind::String),
                FieldDescriptor::new("parent", FieldKind::Message(node)),
            ],
        );

        let (_, descriptor) = schema.lookup_message("Node").unwrap();
        assert_eq!(descriptor.fields[1].kind, FieldKind::Message(node));
    }

    #[test]
    fn test_field_iteration_is_declaration_ordered() {
        let schema = address_book();
        let (_, person) = schema.lookup_message("Person").unwrap();

        // Two passes over the same descriptor yield the same order.
        let first: Vec<_> = person.fields.iter().map(|f| &f.name).collect();
        let second: Vec<_> = person.fields.iter().map(|f| &f.name).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec!["name", "id"]);
    }

    #[test]
    fn test_rebuild_lookup_after_deserialize() {
        let schema = address_book();
        let json = serde_json::to_string(&schema).unwrap();

        let mut restored: SchemaSet = serde_json::from_str(&json).unwrap();
        assert!(restored.lookup_message("Person").is_err());

        restored.rebuild_lookup();
        assert!(restored.lookup_message("Person").is_ok());
    }
}
