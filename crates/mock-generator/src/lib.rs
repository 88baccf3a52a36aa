//! Mock value synthesizer for protomock.
//!
//! This crate produces randomized, structurally valid sample data for a
//! message type described by a [`mock_core::SchemaSet`]. The synthesizer
//! walks every declared field in order and emits one value per field,
//! handling scalars, nested messages, repeated fields, protocol maps,
//! enums, and literal per-field overrides.
//!
//! # Architecture
//!
//! ```text
//! SchemaSet (mock-core)        MockConfig
//!        │                          │
//!        └──────────┬───────────────┘
//!                   ▼
//!          ┌─────────────────┐
//!          │ MockSynthesizer │──── RandomSource (swappable;
//!          └────────┬────────┘     entropy or seeded)
//!                   │
//!                   ▼
//!            MockValue::Object
//! ```
//!
//! # Example
//!
//! ```rust
//! use mock_core::{FieldDescriptor, MessageDescriptor, ScalarKind, SchemaSet};
//! use mock_generator::{MockConfig, MockSynthesizer, PseudoRandom};
//!
//! let mut schema = SchemaSet::new("greeting.proto");
//! schema.add_message(MessageDescriptor::new(
//!     "Greeting",
//!     vec![FieldDescriptor::scalar("text", ScalarKind::String)],
//! ));
//!
//! let config = MockConfig::new();
//! let mut rng = PseudoRandom::seeded(42);
//! let value = MockSynthesizer::new(&schema, &config)
//!     .synthesize("Greeting", &mut rng)
//!     .unwrap();
//!
//! assert!(value.as_object().unwrap()["text"].as_str().is_some());
//! ```

pub mod config;
pub mod random;
pub mod synthesizer;

// Re-exports for convenience
pub use config::{ConfigError, MockConfig};
pub use random::{PseudoRandom, RandomSource};
pub use synthesizer::{GeneratorError, MockSynthesizer};
