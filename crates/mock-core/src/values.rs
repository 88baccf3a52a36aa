//! Generated value tree for the protomock generator.
//!
//! [`MockValue`] is the dynamically shaped output of one generation call:
//! scalars, ordered sequences, and string-keyed objects (used both for
//! nested messages and for protocol map fields).

use indexmap::IndexMap;
use serde::Serialize;

/// A generated, JSON-representable value.
///
/// Objects use an insertion-ordered map so that field declaration order
/// survives into the output. 64-bit integers are carried as decimal
/// strings ([`MockValue::BigInt`]) to avoid precision loss past the
/// 53-bit safe-integer boundary of JSON consumers.
///
/// Serialization is untagged: scalars render as their JSON counterparts,
/// `BigInt` as a string, and `Bytes` as an array of numbers. Textual
/// byte encodings such as base64 are the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MockValue {
    /// Null / absent value
    Null,

    /// Boolean value
    Bool(bool),

    /// Integer value (32-bit family, enum numbers)
    Int(i64),

    /// 64-bit integer carried as a decimal string
    BigInt(String),

    /// Floating point value
    Float(f64),

    /// String value
    Text(String),

    /// Binary data
    Bytes(Vec<u8>),

    /// Ordered sequence of values
    Array(Vec<MockValue>),

    /// String-keyed object, insertion-ordered
    Object(IndexMap<String, MockValue>),
}

impl MockValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::BigInt(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a byte slice.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get this value as an array.
    pub fn as_array(&self) -> Option<&[MockValue]> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to get this value as an object.
    pub fn as_object(&self) -> Option<&IndexMap<String, MockValue>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Coerce a scalar value into a protocol-map key string.
    ///
    /// Map keys are represented as strings in the output object, matching
    /// JSON object semantics. Composite values and nulls have no key
    /// form and return `None`.
    pub fn to_map_key(&self) -> Option<String> {
        match self {
            Self::Bool(b) => Some(b.to_string()),
            Self::Int(i) => Some(i.to_string()),
            Self::BigInt(s) => Some(s.clone()),
            Self::Float(f) => Some(f.to_string()),
            Self::Text(s) => Some(s.clone()),
            Self::Bytes(b) => Some(String::from_utf8_lossy(b).into_owned()),
            Self::Null | Self::Array(_) | Self::Object(_) => None,
        }
    }

    /// Convert this value into a `serde_json::Value`.
    pub fn to_json(&self) -> serde_json::Value {
        // The untagged Serialize impl already maps onto plain JSON.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl From<&str> for MockValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for MockValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for MockValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for MockValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for MockValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_preserves_insertion_order() {
        let mut map = IndexMap::new();
        map.insert("zulu".to_string(), MockValue::Int(1));
        map.insert("alpha".to_string(), MockValue::Int(2));
        map.insert("mike".to_string(), MockValue::Int(3));

        let value = MockValue::Object(map);
        let keys: Vec<_> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zulu", "alpha", "mike"]);
    }

    #[test]
    fn test_map_key_coercion() {
        assert_eq!(MockValue::Int(42).to_map_key().unwrap(), "42");
        assert_eq!(MockValue::Bool(true).to_map_key().unwrap(), "true");
        assert_eq!(
            MockValue::BigInt("9007199254740993".to_string())
                .to_map_key()
                .unwrap(),
            "9007199254740993"
        );
        assert_eq!(MockValue::Null.to_map_key(), None);
        assert_eq!(MockValue::Array(vec![]).to_map_key(), None);
    }

    #[test]
    fn test_json_serialization_shapes() {
        let mut map = IndexMap::new();
        map.insert("age".to_string(), MockValue::Int(7));
        map.insert(
            "id".to_string(),
            MockValue::BigInt("18446744073709551615".to_string()),
        );
        map.insert("raw".to_string(), MockValue::Bytes(vec![1, 2]));

        let json = serde_json::to_string(&MockValue::Object(map)).unwrap();
        assert_eq!(json, r#"{"age":7,"id":"18446744073709551615","raw":[1,2]}"#);
    }

    #[test]
    fn test_big_int_survives_json() {
        // Past the 53-bit safe-integer boundary the value must stay textual.
        let value = MockValue::BigInt("9007199254740993".to_string());
        assert_eq!(value.to_json(), serde_json::json!("9007199254740993"));
    }
}
