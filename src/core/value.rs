//! Attribute values for structured records
//!
//! `FieldValue` is the typed value of one attribute; `Attr` pairs it with a
//! key. Groups are represented as `FieldValue::Map`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    /// Unsigned values above `i64::MAX`; smaller ones are stored as `Int`.
    UInt(u64),
    Float(f64),
    String(String),
    Map(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::Null => serde_json::Value::Null,
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::UInt(u) => serde_json::Value::Number((*u).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Map(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json_value()))
                    .collect(),
            ),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::UInt(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Map(_) => write!(f, "{}", self.to_json_value()),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<u64> for FieldValue {
    fn from(i: u64) -> Self {
        i64::try_from(i)
            .map(FieldValue::Int)
            .unwrap_or(FieldValue::UInt(i))
    }
}

impl From<usize> for FieldValue {
    fn from(i: usize) -> Self {
        FieldValue::from(i as u64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// One key/value attribute of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: FieldValue,
}

impl Attr {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Nest `attrs` under `name`. Later duplicates overwrite earlier ones.
    pub fn group<K: Into<String>>(name: K, attrs: Vec<Attr>) -> Self {
        let map = attrs
            .into_iter()
            .map(|attr| (attr.key, attr.value))
            .collect::<BTreeMap<_, _>>();
        Self {
            key: name.into(),
            value: FieldValue::Map(map),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(FieldValue::from(7_i32), FieldValue::Int(7));
        assert_eq!(FieldValue::from("x"), FieldValue::String("x".into()));
        assert_eq!(FieldValue::from(None::<i64>), FieldValue::Null);
        assert_eq!(FieldValue::from(5_u64), FieldValue::Int(5));
        assert_eq!(FieldValue::from(u64::MAX), FieldValue::UInt(u64::MAX));
    }

    #[test]
    fn test_large_unsigned_is_exact() {
        let value = FieldValue::from(u64::MAX);
        assert_eq!(value.to_json_value(), serde_json::json!(u64::MAX));
        assert_eq!(value.to_string(), "18446744073709551615");

        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "18446744073709551615");
        let back: FieldValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);

        let at_boundary: FieldValue = serde_json::from_str("9223372036854775808").unwrap();
        assert_eq!(at_boundary, FieldValue::UInt(1 << 63));
    }

    #[test]
    fn test_json_untagged_roundtrip() {
        let value = FieldValue::Map(BTreeMap::from([
            ("id".to_string(), FieldValue::Int(42)),
            ("ratio".to_string(), FieldValue::Float(0.5)),
            ("name".to_string(), FieldValue::from("alice")),
            ("ok".to_string(), FieldValue::Bool(true)),
            ("none".to_string(), FieldValue::Null),
        ]));

        let json = serde_json::to_string(&value).unwrap();
        let back: FieldValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_nan_serializes_as_null() {
        assert_eq!(
            FieldValue::Float(f64::NAN).to_json_value(),
            serde_json::Value::Null
        );
    }

    #[test]
    fn test_group_last_write_wins() {
        let attr = Attr::group(
            "req",
            vec![Attr::new("id", 1), Attr::new("path", "/"), Attr::new("id", 2)],
        );
        match attr.value {
            FieldValue::Map(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map["id"], FieldValue::Int(2));
            }
            other => panic!("expected map, got {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::from("plain").to_string(), "plain");
        let map = Attr::group("g", vec![Attr::new("a", 1)]).value;
        assert_eq!(map.to_string(), r#"{"a":1}"#);
    }
}
