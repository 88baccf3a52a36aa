//! Scalar field kinds for the protomock generator.
//!
//! This module defines [`ScalarKind`], the closed universe of protobuf
//! primitive field types. Generation dispatches on this enum exhaustively;
//! there is no default/unknown arm, so a type outside this set has to be
//! represented explicitly (see `FieldKind::Unsupported` in the schema
//! module) rather than silently falling through.

use serde::{Deserialize, Serialize};

/// Protobuf scalar (primitive) field kind.
///
/// Covers the full proto3 scalar universe: the floating point kinds, the
/// 32-bit and 64-bit integer families, booleans, strings, and bytes.
///
/// The 64-bit family is generated as decimal strings rather than native
/// numbers so values survive JSON consumers limited to 53-bit safe
/// integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    /// 64-bit IEEE 754 floating point
    Double,

    /// 32-bit IEEE 754 floating point
    Float,

    /// 32-bit signed integer (varint)
    Int32,

    /// 32-bit unsigned integer (varint)
    Uint32,

    /// 32-bit signed integer (zigzag varint)
    Sint32,

    /// 32-bit unsigned integer (fixed width)
    Fixed32,

    /// 32-bit signed integer (fixed width)
    Sfixed32,

    /// 64-bit signed integer (varint)
    Int64,

    /// 64-bit unsigned integer (varint)
    Uint64,

    /// 64-bit signed integer (zigzag varint)
    Sint64,

    /// 64-bit unsigned integer (fixed width)
    Fixed64,

    /// 64-bit signed integer (fixed width)
    Sfixed64,

    /// Boolean value
    Bool,

    /// UTF-8 string
    String,

    /// Binary data
    Bytes,
}

impl ScalarKind {
    /// Parse a proto type name (`"int32"`, `"sfixed64"`, ...) into a kind.
    ///
    /// Returns `None` for names outside the scalar universe, e.g. message
    /// or enum type names.
    pub fn parse(name: &str) -> Option<Self> {
        let kind = match name {
            "double" => Self::Double,
            "float" => Self::Float,
            "int32" => Self::Int32,
            "uint32" => Self::Uint32,
            "sint32" => Self::Sint32,
            "fixed32" => Self::Fixed32,
            "sfixed32" => Self::Sfixed32,
            "int64" => Self::Int64,
            "uint64" => Self::Uint64,
            "sint64" => Self::Sint64,
            "fixed64" => Self::Fixed64,
            "sfixed64" => Self::Sfixed64,
            "bool" => Self::Bool,
            "string" => Self::String,
            "bytes" => Self::Bytes,
            _ => return None,
        };
        Some(kind)
    }

    /// The proto type name for this kind.
    pub fn proto_name(&self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Float => "float",
            Self::Int32 => "int32",
            Self::Uint32 => "uint32",
            Self::Sint32 => "sint32",
            Self::Fixed32 => "fixed32",
            Self::Sfixed32 => "sfixed32",
            Self::Int64 => "int64",
            Self::Uint64 => "uint64",
            Self::Sint64 => "sint64",
            Self::Fixed64 => "fixed64",
            Self::Sfixed64 => "sfixed64",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Bytes => "bytes",
        }
    }

    /// Whether this kind belongs to the 64-bit integer family.
    pub fn is_long(&self) -> bool {
        matches!(
            self,
            Self::Int64 | Self::Uint64 | Self::Sint64 | Self::Fixed64 | Self::Sfixed64
        )
    }

    /// Whether this kind belongs to the 32-bit integer family.
    pub fn is_int(&self) -> bool {
        matches!(
            self,
            Self::Int32 | Self::Uint32 | Self::Sint32 | Self::Fixed32 | Self::Sfixed32
        )
    }
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.proto_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_proto_names() {
        for name in [
            "double", "float", "int32", "uint32", "sint32", "fixed32", "sfixed32", "int64",
            "uint64", "sint64", "fixed64", "sfixed64", "bool", "string", "bytes",
        ] {
            let kind = ScalarKind::parse(name).unwrap();
            assert_eq!(kind.proto_name(), name);
        }
    }

    #[test]
    fn test_parse_rejects_non_scalar_names() {
        assert_eq!(ScalarKind::parse("Person"), None);
        assert_eq!(ScalarKind::parse("map"), None);
        assert_eq!(ScalarKind::parse(""), None);
    }

    #[test]
    fn test_integer_families() {
        assert!(ScalarKind::Int64.is_long());
        assert!(ScalarKind::Sfixed64.is_long());
        assert!(!ScalarKind::Int32.is_long());

        assert!(ScalarKind::Uint32.is_int());
        assert!(!ScalarKind::Uint64.is_int());
        assert!(!ScalarKind::Bool.is_int());
    }
}
