//! Generation configuration.
//!
//! [`MockConfig`] carries the per-call knobs of the synthesizer. All
//! bounds are validated when the config is built, so the generation path
//! never has to re-check or default-coalesce them.

use mock_core::MockValue;
use std::collections::HashMap;

/// Default upper bound for repeated-field lengths and map entry draws.
const DEFAULT_MAX_LENGTH: usize = 3;

/// Default recursion limit for nested / cyclic message graphs.
const DEFAULT_MAX_DEPTH: usize = 64;

/// Error type for configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A bound option was set to zero.
    #[error("{option} must be a positive integer, got {value}")]
    InvalidBound {
        /// Name of the offending option
        option: &'static str,
        /// The rejected value
        value: usize,
    },

    /// A field override was given an empty candidate list.
    #[error("override for field '{field}' must list at least one value")]
    EmptyOverride {
        /// The field the override targets
        field: String,
    },
}

/// Configuration for one synthesis call.
///
/// Built with defaults via [`MockConfig::new`] and adjusted through the
/// `with_*` builders, which validate their inputs.
///
/// Note on `normalize_field_names`: the historical option this replaces
/// was named as if it preserved field-name casing, while enabling it in
/// fact applied the underscore transform. The behavior is kept exactly;
/// only the name now says what it does.
#[derive(Debug, Clone)]
pub struct MockConfig {
    max_repeated_length: usize,
    max_map_entries: usize,
    normalize_field_names: bool,
    field_overrides: HashMap<String, Vec<MockValue>>,
    max_depth: usize,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            max_repeated_length: DEFAULT_MAX_LENGTH,
            max_map_entries: DEFAULT_MAX_LENGTH,
            normalize_field_names: false,
            field_overrides: HashMap::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl MockConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive upper bound on repeated-field lengths.
    pub fn with_max_repeated_length(mut self, value: usize) -> Result<Self, ConfigError> {
        if value == 0 {
            return Err(ConfigError::InvalidBound {
                option: "max_repeated_length",
                value,
            });
        }
        self.max_repeated_length = value;
        Ok(self)
    }

    /// Set the inclusive upper bound on map entry draw attempts.
    pub fn with_max_map_entries(mut self, value: usize) -> Result<Self, ConfigError> {
        if value == 0 {
            return Err(ConfigError::InvalidBound {
                option: "max_map_entries",
                value,
            });
        }
        self.max_map_entries = value;
        Ok(self)
    }

    /// Set the recursion limit for nested message graphs.
    pub fn with_max_depth(mut self, value: usize) -> Result<Self, ConfigError> {
        if value == 0 {
            return Err(ConfigError::InvalidBound {
                option: "max_depth",
                value,
            });
        }
        self.max_depth = value;
        Ok(self)
    }

    /// Enable or disable the underscore transform on output keys.
    pub fn with_normalized_field_names(mut self, enabled: bool) -> Self {
        self.normalize_field_names = enabled;
        self
    }

    /// Force generation for a field to draw only from the given values.
    ///
    /// The field is addressed by its original (untransformed) name. The
    /// override bypasses every type-based generation rule for that field.
    pub fn with_field_override(
        mut self,
        field: impl Into<String>,
        values: Vec<MockValue>,
    ) -> Result<Self, ConfigError> {
        let field = field.into();
        if values.is_empty() {
            return Err(ConfigError::EmptyOverride { field });
        }
        self.field_overrides.insert(field, values);
        Ok(self)
    }

    /// Inclusive upper bound on repeated-field lengths.
    pub fn max_repeated_length(&self) -> usize {
        self.max_repeated_length
    }

    /// Inclusive upper bound on map entry draw attempts.
    pub fn max_map_entries(&self) -> usize {
        self.max_map_entries
    }

    /// Whether output keys get the underscore transform.
    pub fn normalize_field_names(&self) -> bool {
        self.normalize_field_names
    }

    /// Recursion limit for nested message graphs.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Override candidate list for a field, if configured.
    pub fn override_for(&self, field: &str) -> Option<&[MockValue]> {
        self.field_overrides.get(field).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MockConfig::new();
        assert_eq!(config.max_repeated_length(), 3);
        assert_eq!(config.max_map_entries(), 3);
        assert!(!config.normalize_field_names());
        assert_eq!(config.override_for("age"), None);
    }

    #[test]
    fn test_rejects_zero_bounds() {
        assert!(matches!(
            MockConfig::new().with_max_repeated_length(0),
            Err(ConfigError::InvalidBound {
                option: "max_repeated_length",
                ..
            })
        ));
        assert!(matches!(
            MockConfig::new().with_max_map_entries(0),
            Err(ConfigError::InvalidBound { .. })
        ));
        assert!(matches!(
            MockConfig::new().with_max_depth(0),
            Err(ConfigError::InvalidBound { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_override() {
        let result = MockConfig::new().with_field_override("age", vec![]);
        match result {
            Err(ConfigError::EmptyOverride { field }) => assert_eq!(field, "age"),
            other => panic!("Expected EmptyOverride, got {other:?}"),
        }
    }

    #[test]
    fn test_override_lookup_uses_original_name() {
        let config = MockConfig::new()
            .with_field_override("emailAddress", vec![MockValue::from("a@b.c")])
            .unwrap();

        assert!(config.override_for("emailAddress").is_some());
        assert!(config.override_for("email_address").is_none());
    }
}
