//! protomock
//!
//! Randomized, structurally valid mock data for protobuf message schemas.
//! Given a resolved schema graph and a message type name, protomock walks
//! every declared field and produces a JSON-compatible value tree usable
//! as a test fixture.
//!
//! # Crates
//!
//! - `mock-core` - schema graph, scalar kinds, value tree, name transform
//! - `mock-generator` - configuration, random source, synthesizer
//!
//! # Usage
//!
//! ```rust
//! use protomock::{
//!     mock_message_seeded, FieldDescriptor, MessageDescriptor, MockConfig, ScalarKind, SchemaSet,
//! };
//!
//! // A loader would populate this from a .proto descriptor; tests can
//! // build it directly.
//! let mut schema = SchemaSet::new("person.proto");
//! schema.add_message(MessageDescriptor::new(
//!     "Person",
//!     vec![
//!         FieldDescriptor::scalar("name", ScalarKind::String),
//!         FieldDescriptor::scalar("age", ScalarKind::Int32),
//!     ],
//! ));
//!
//! let value = mock_message_seeded(&schema, "Person", &MockConfig::new(), 42).unwrap();
//! println!("{}", value.to_json());
//! ```

pub use mock_core::{
    to_snake_case, EnumDescriptor, EnumId, EnumValue, FieldDescriptor, FieldKind,
    MessageDescriptor, MessageId, MockValue, ScalarKind, SchemaError, SchemaSet,
};
pub use mock_generator::{
    ConfigError, GeneratorError, MockConfig, MockSynthesizer, PseudoRandom, RandomSource,
};

/// Synthesize one mock message using an entropy-seeded random source.
pub fn mock_message(
    schema: &SchemaSet,
    type_name: &str,
    config: &MockConfig,
) -> Result<MockValue, GeneratorError> {
    let mut rng = PseudoRandom::from_entropy();
    MockSynthesizer::new(schema, config).synthesize(type_name, &mut rng)
}

/// Synthesize one mock message using a deterministic seeded source.
///
/// The same schema, configuration and seed always produce the same tree.
pub fn mock_message_seeded(
    schema: &SchemaSet,
    type_name: &str,
    config: &MockConfig,
    seed: u64,
) -> Result<MockValue, GeneratorError> {
    let mut rng = PseudoRandom::seeded(seed);
    MockSynthesizer::new(schema, config).synthesize(type_name, &mut rng)
}
