//! Value types for generated scenarios and payloads.
//!
//! Values are the atomic data placed in scenario fields and request bodies.
//! They mirror JSON: scalars (Bool, Int, Float, String), Null, lists and
//! objects whose keys keep insertion order.

use crate::ValueKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value that can be placed in a scenario field or a payload leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// List of values.
    List(Vec<Value>),
    /// Object with ordered keys.
    Object(Object),
}

/// Ordered string-keyed map of values.
pub type Object = IndexMap<String, Value>;

impl Value {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is an integer value.
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns true if this is a float value.
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is a list value.
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as float. Integers are widened.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get as string reference if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the elements if this is a List value.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get the entries if this is an Object value.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Build a `(low, high)` pair, stored as a two-element list.
    pub fn pair(low: impl Into<Value>, high: impl Into<Value>) -> Self {
        Value::List(vec![low.into(), high.into()])
    }

    /// View a two-element list as a `(low, high)` pair.
    pub fn as_pair(&self) -> Option<(&Value, &Value)> {
        match self {
            Value::List(items) if items.len() == 2 => Some((&items[0], &items[1])),
            _ => None,
        }
    }

    /// The members of this value when treated as a set.
    ///
    /// A list contributes its elements; any other value is a singleton.
    pub fn members(&self) -> &[Value] {
        match self {
            Value::List(items) => items,
            other => std::slice::from_ref(other),
        }
    }

    /// Order-insensitive set equality of the members of two values.
    pub fn same_members(&self, other: &Value) -> bool {
        let (a, b) = (self.members(), other.members());
        a.iter().all(|x| b.contains(x)) && b.iter().all(|y| a.contains(y))
    }

    /// The kind of this concrete value. Lists report the kind of their first
    /// element; empty lists are reported as lists of null.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Int(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::List(items) => ValueKind::array_of(
                items.first().map(Value::kind).unwrap_or(ValueKind::Null),
            ),
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::List(_) => "List",
            Value::Object(_) => "Object",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Object(map) => {
                write!(f, "{{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{}\": {}", key, item)?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<Object> for Value {
    fn from(map: Object) -> Self {
        Value::Object(map)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(i) => serde_json::Value::from(i),
            // Non-finite floats have no JSON form.
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

/// Helper macro to create ordered objects.
#[macro_export]
macro_rules! object {
    () => {
        $crate::Object::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = $crate::Object::new();
            $(
                map.insert($key.to_string(), $crate::Value::from($value));
            )+
            map
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_value_type_checks() {
        assert!(Value::Null.is_null());
        assert!(Value::Bool(true).is_bool());
        assert!(Value::Int(42).is_int());
        assert!(Value::Float(3.15).is_float());
        assert!(Value::String("hello".into()).is_string());
        assert!(Value::List(vec![]).is_list());
        assert!(Value::Object(Object::new()).is_object());
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Int(42).as_int(), Some(42));
        assert_eq!(Value::Int(2).as_float(), Some(2.0));
        assert_eq!(Value::String("hello".into()).as_str(), Some("hello"));
    }

    #[test]
    fn test_pair_roundtrip() {
        let pair = Value::pair(0, 100);
        assert_eq!(pair.as_pair(), Some((&Value::Int(0), &Value::Int(100))));
        assert_eq!(Value::from(vec![1, 2, 3]).as_pair(), None);
    }

    #[test]
    fn test_same_members_ignores_order() {
        let a = Value::from(vec!["summer", "spring"]);
        let b = Value::from(vec!["spring", "summer"]);
        let c = Value::from(vec!["summer"]);
        assert!(a.same_members(&b));
        assert!(!a.same_members(&c));
        // A scalar is a singleton set
        assert!(Value::from("summer").same_members(&c));
    }

    #[test]
    fn test_deserialize_plain_json() {
        let value: Value = serde_json::from_str(r#"{"a": 1, "b": [1.5, "x"], "c": null}"#).unwrap();
        let expected = Value::Object(object! {
            "a" => 1,
            "b" => Value::List(vec![Value::Float(1.5), Value::from("x")]),
            "c" => Value::Null,
        });
        assert_eq!(value, expected);
    }

    #[test]
    fn test_serialize_keeps_insertion_order() {
        let value = Value::Object(object! { "z" => 1, "a" => true });
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"z":1,"a":true}"#);

        let json: serde_json::Value = value.clone().into();
        assert_eq!(Value::from(json).as_object().map(|m| m.len()), Some(2));
    }

    #[test]
    fn test_kind_of_value() {
        assert_eq!(Value::from("x").kind(), ValueKind::String);
        assert_eq!(
            Value::from(vec![1, 2]).kind(),
            ValueKind::array_of(ValueKind::Integer)
        );
    }
}
