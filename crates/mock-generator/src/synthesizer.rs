//! Recursive mock value synthesis.
//!
//! [`MockSynthesizer`] walks a message descriptor field by field, in
//! declaration order, and produces one value per field. Which generation
//! path applies is decided by a fixed precedence: a configured literal
//! override wins over everything, then map handling, then repeated
//! handling, then the resolved type (message, enum, scalar).
//!
//! Failures are split into two classes. Unresolvable *requests* (unknown
//! type name, recursion past the depth limit) abort the call with a typed
//! error. Unresolvable *fields* (a malformed map, an unsupported kind)
//! degrade to a null value for that field only, logged at debug level,
//! while siblings continue.

use crate::config::MockConfig;
use crate::random::RandomSource;
use indexmap::IndexMap;
use mock_core::{
    to_snake_case, EnumDescriptor, FieldDescriptor, FieldKind, MessageDescriptor, MockValue,
    ScalarKind, SchemaError, SchemaSet,
};

/// Words per generated string value.
const STRING_WORD_COUNT: usize = 5;

/// Error type for synthesis operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Schema lookup failed
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Message nesting exceeded the configured depth limit
    #[error("maximum nesting depth {max_depth} exceeded while expanding '{type_name}'")]
    DepthExceeded {
        /// The message type being expanded when the limit was hit
        type_name: String,
        /// The configured limit
        max_depth: usize,
    },
}

/// Resolved value side of a map field.
enum MapValueKind<'s> {
    Message(&'s MessageDescriptor),
    Enum(&'s EnumDescriptor),
    Scalar(ScalarKind),
}

/// Mock value synthesizer for one schema and configuration.
///
/// Borrows both for the duration of the call; neither is mutated. The
/// produced [`MockValue`] tree is owned by the caller.
pub struct MockSynthesizer<'a> {
    schema: &'a SchemaSet,
    config: &'a MockConfig,
}

impl<'a> MockSynthesizer<'a> {
    /// Create a synthesizer over the given schema and configuration.
    pub fn new(schema: &'a SchemaSet, config: &'a MockConfig) -> Self {
        Self { schema, config }
    }

    /// Synthesize one mock message for the named type.
    ///
    /// Fails with [`SchemaError::TypeNotFound`] before producing any
    /// output if the type is absent, and with
    /// [`GeneratorError::DepthExceeded`] if the message graph nests (or
    /// cycles) past the configured depth limit.
    pub fn synthesize<R: RandomSource>(
        &self,
        type_name: &str,
        rng: &mut R,
    ) -> Result<MockValue, GeneratorError> {
        let (_, message) = self.schema.lookup_message(type_name)?;
        Ok(MockValue::Object(self.message_object(message, rng, 0)?))
    }

    fn message_object<R: RandomSource>(
        &self,
        message: &MessageDescriptor,
        rng: &mut R,
        depth: usize,
    ) -> Result<IndexMap<String, MockValue>, GeneratorError> {
        if depth >= self.config.max_depth() {
            return Err(GeneratorError::DepthExceeded {
                type_name: message.name.clone(),
                max_depth: self.config.max_depth(),
            });
        }

        let mut object = IndexMap::with_capacity(message.fields.len());
        for field in &message.fields {
            let key = if self.config.normalize_field_names() {
                to_snake_case(&field.name)
            } else {
                field.name.clone()
            };
            let value = self.field_value(field, rng, depth)?;
            object.insert(key, value);
        }
        Ok(object)
    }

    /// Produce the value for one field per the precedence rules.
    fn field_value<R: RandomSource>(
        &self,
        field: &FieldDescriptor,
        rng: &mut R,
        depth: usize,
    ) -> Result<MockValue, GeneratorError> {
        // Overrides are keyed by the original field name and bypass all
        // type-based handling, map and enum included.
        if let Some(choices) = self.config.override_for(&field.name) {
            return Ok(self.override_value(field.repeated, choices, rng));
        }

        match &field.kind {
            FieldKind::Map { key, value } => self.map_value(&field.name, *key, value, rng, depth),

            FieldKind::Message(id) if field.repeated => {
                let Some(message) = self.schema.message(*id) else {
                    return Ok(self.dangling(&field.name));
                };
                let count = rng.range_integer(1, self.config.max_repeated_length());
                let mut items = Vec::with_capacity(count);
                for _ in 0..count {
                    items.push(MockValue::Object(self.message_object(
                        message,
                        rng,
                        depth + 1,
                    )?));
                }
                Ok(MockValue::Array(items))
            }

            FieldKind::Message(id) => match self.schema.message(*id) {
                Some(message) => Ok(MockValue::Object(self.message_object(
                    message,
                    rng,
                    depth + 1,
                )?)),
                None => Ok(self.dangling(&field.name)),
            },

            FieldKind::Enum(id) if field.repeated => {
                let Some(descriptor) = self.schema.enumeration(*id) else {
                    return Ok(self.dangling(&field.name));
                };
                // Proto forbids empty enums; if a loader hands one over
                // anyway, a single null element keeps the output length
                // inside [1, max_repeated_length].
                if descriptor.values.is_empty() {
                    tracing::debug!(
                        field = %field.name,
                        "enum has no values, substituting null element"
                    );
                    return Ok(MockValue::Array(vec![MockValue::Null]));
                }
                let count = rng.range_integer(1, self.config.max_repeated_length());
                Ok(sample_enum_values(descriptor, count, rng))
            }

            FieldKind::Enum(id) => match self.schema.enumeration(*id) {
                Some(descriptor) => Ok(pick_enum_value(descriptor, rng)),
                None => Ok(self.dangling(&field.name)),
            },

            FieldKind::Scalar(kind) if field.repeated => {
                let count = rng.range_integer(1, self.config.max_repeated_length());
                // Plain scalar elements are drawn with replacement.
                let items = (0..count).map(|_| scalar_value(*kind, rng)).collect();
                Ok(MockValue::Array(items))
            }

            FieldKind::Scalar(kind) => Ok(scalar_value(*kind, rng)),

            FieldKind::Unsupported { type_name } if field.repeated => {
                tracing::debug!(
                    field = %field.name,
                    type_name = %type_name,
                    "unsupported element kind, substituting nulls"
                );
                let count = rng.range_integer(1, self.config.max_repeated_length());
                Ok(MockValue::Array(vec![MockValue::Null; count]))
            }

            FieldKind::Unsupported { type_name } => {
                tracing::debug!(
                    field = %field.name,
                    type_name = %type_name,
                    "unsupported field kind, substituting null"
                );
                Ok(MockValue::Null)
            }
        }
    }

    /// Draw from a configured override list.
    fn override_value<R: RandomSource>(
        &self,
        repeated: bool,
        choices: &[MockValue],
        rng: &mut R,
    ) -> MockValue {
        if repeated {
            let count = rng.range_integer(1, self.config.max_repeated_length());
            let items = rng
                .sample_indices(choices.len(), count)
                .into_iter()
                .map(|i| choices[i].clone())
                .collect();
            MockValue::Array(items)
        } else {
            match rng.pick_index(choices.len()) {
                Some(i) => choices[i].clone(),
                None => MockValue::Null,
            }
        }
    }

    /// Synthesize a protocol-map field.
    ///
    /// Duplicate generated keys overwrite earlier entries, so the visible
    /// entry count may be smaller than the attempted draw count.
    fn map_value<R: RandomSource>(
        &self,
        field_name: &str,
        key_kind: ScalarKind,
        value_kind: &FieldKind,
        rng: &mut R,
        depth: usize,
    ) -> Result<MockValue, GeneratorError> {
        let Some(value_kind) = self.resolve_map_value(value_kind) else {
            tracing::debug!(
                field = %field_name,
                "map value kind unresolvable, substituting null"
            );
            return Ok(MockValue::Null);
        };

        let attempts = rng.range_integer(1, self.config.max_map_entries());
        let mut object = IndexMap::new();
        for _ in 0..attempts {
            let Some(key) = scalar_value(key_kind, rng).to_map_key() else {
                tracing::debug!(
                    field = %field_name,
                    "map key kind not key-representable, substituting null"
                );
                return Ok(MockValue::Null);
            };
            let value = match &value_kind {
                MapValueKind::Message(message) => {
                    MockValue::Object(self.message_object(message, rng, depth + 1)?)
                }
                MapValueKind::Enum(descriptor) => pick_enum_value(descriptor, rng),
                MapValueKind::Scalar(kind) => scalar_value(*kind, rng),
            };
            object.insert(key, value);
        }
        Ok(MockValue::Object(object))
    }

    /// Resolve the value side of a map field, if it has a usable shape.
    ///
    /// Nested maps, unsupported kinds and dangling references all make
    /// the map malformed.
    fn resolve_map_value<'s>(&'s self, kind: &FieldKind) -> Option<MapValueKind<'s>> {
        match kind {
            FieldKind::Message(id) => self.schema.message(*id).map(MapValueKind::Message),
            FieldKind::Enum(id) => self.schema.enumeration(*id).map(MapValueKind::Enum),
            FieldKind::Scalar(kind) => Some(MapValueKind::Scalar(*kind)),
            FieldKind::Map { .. } | FieldKind::Unsupported { .. } => None,
        }
    }

    fn dangling(&self, field_name: &str) -> MockValue {
        tracing::debug!(
            field = %field_name,
            "dangling type reference, substituting null"
        );
        MockValue::Null
    }
}

/// Draw one scalar value for the given kind.
///
/// The 64-bit integer family always yields a decimal string, never a
/// native number, so values survive 53-bit JSON consumers.
fn scalar_value<R: RandomSource>(kind: ScalarKind, rng: &mut R) -> MockValue {
    match kind {
        ScalarKind::Double | ScalarKind::Float => MockValue::Float(rng.scalar_float()),
        ScalarKind::Int32
        | ScalarKind::Uint32
        | ScalarKind::Sint32
        | ScalarKind::Fixed32
        | ScalarKind::Sfixed32 => MockValue::Int(i64::from(rng.scalar_integer())),
        ScalarKind::Int64
        | ScalarKind::Uint64
        | ScalarKind::Sint64
        | ScalarKind::Fixed64
        | ScalarKind::Sfixed64 => MockValue::BigInt(rng.scalar_big_integer()),
        ScalarKind::Bool => MockValue::Bool(rng.scalar_bool()),
        ScalarKind::String => MockValue::Text(rng.scalar_words(STRING_WORD_COUNT)),
        ScalarKind::Bytes => MockValue::Bytes(rng.scalar_bytes()),
    }
}

/// Pick one value number from an enum.
fn pick_enum_value<R: RandomSource>(descriptor: &EnumDescriptor, rng: &mut R) -> MockValue {
    match rng.pick_index(descriptor.values.len()) {
        Some(i) => MockValue::Int(i64::from(descriptor.values[i].number)),
        None => MockValue::Null,
    }
}

/// Sample up to `count` distinct enum value numbers, clamped to the
/// enum's cardinality; values are never cycled or repeated.
fn sample_enum_values<R: RandomSource>(
    descriptor: &EnumDescriptor,
    count: usize,
    rng: &mut R,
) -> MockValue {
    let items = rng
        .sample_indices(descriptor.values.len(), count)
        .into_iter()
        .map(|i| MockValue::Int(i64::from(descriptor.values[i].number)))
        .collect();
    MockValue::Array(items)
}
