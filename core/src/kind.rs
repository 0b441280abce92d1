//! Declared kinds of generated values.

use crate::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The declared kind of a payload leaf, named after JSON-schema types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Number,
    Integer,
    Boolean,
    Null,
    Object,
    /// Array whose items all share one kind.
    Array(Box<ValueKind>),
}

/// A type name that does not denote any known kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown value kind: {0}")]
pub struct UnknownKind(pub String);

impl ValueKind {
    pub fn array_of(item: ValueKind) -> Self {
        ValueKind::Array(Box::new(item))
    }

    /// Returns true for string, number, integer, boolean and null.
    pub fn is_primitive(&self) -> bool {
        !matches!(self, ValueKind::Object | ValueKind::Array(_))
    }

    /// Returns true if `value` is a member of this kind. Integers are also
    /// numbers; every item of a list must belong to the item kind.
    pub fn admits(&self, value: &Value) -> bool {
        match (self, value) {
            (ValueKind::String, Value::String(_))
            | (ValueKind::Number, Value::Int(_) | Value::Float(_))
            | (ValueKind::Integer, Value::Int(_))
            | (ValueKind::Boolean, Value::Bool(_))
            | (ValueKind::Null, Value::Null)
            | (ValueKind::Object, Value::Object(_)) => true,
            (ValueKind::Array(item), Value::List(items)) => {
                items.iter().all(|v| item.admits(v))
            }
            _ => false,
        }
    }

    /// The JSON-schema type name, without item information.
    pub fn type_name(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Integer => "integer",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
            ValueKind::Object => "object",
            ValueKind::Array(_) => "array",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Array(item) => write!(f, "array<{}>", item),
            other => write!(f, "{}", other.type_name()),
        }
    }
}

impl FromStr for ValueKind {
    type Err = UnknownKind;

    /// Parses a type name such as `string` or `array<integer>`.
    ///
    /// A bare `array` carries no item kind and is rejected; callers resolve
    /// the item kind from the schema's `items` first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(inner) = s.strip_prefix("array<").and_then(|r| r.strip_suffix('>')) {
            return inner.parse().map(ValueKind::array_of);
        }
        match s {
            "string" => Ok(ValueKind::String),
            "number" => Ok(ValueKind::Number),
            "integer" => Ok(ValueKind::Integer),
            "boolean" => Ok(ValueKind::Boolean),
            "null" => Ok(ValueKind::Null),
            "object" => Ok(ValueKind::Object),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_primitive_kinds() {
        assert_eq!("string".parse::<ValueKind>(), Ok(ValueKind::String));
        assert_eq!("integer".parse::<ValueKind>(), Ok(ValueKind::Integer));
        assert!("null".parse::<ValueKind>().unwrap().is_primitive());
        assert!(!ValueKind::Object.is_primitive());
    }

    #[test]
    fn test_parse_array_kind_matches_display() {
        let kind = ValueKind::array_of(ValueKind::array_of(ValueKind::Boolean));
        assert_eq!(kind.to_string(), "array<array<boolean>>");
        assert_eq!(kind.to_string().parse::<ValueKind>(), Ok(kind));
    }

    #[test]
    fn test_admits_values() {
        assert!(ValueKind::Number.admits(&Value::Int(3)));
        assert!(!ValueKind::Integer.admits(&Value::Float(3.5)));
        assert!(!ValueKind::Integer.admits(&Value::from("x")));

        let tags = ValueKind::array_of(ValueKind::String);
        assert!(tags.admits(&Value::from(vec!["a", "b"])));
        assert!(tags.admits(&Value::List(vec![])));
        assert!(!tags.admits(&Value::List(vec![Value::from("a"), Value::Int(1)])));
    }

    #[test]
    fn test_parse_unknown_kind() {
        assert_eq!(
            "array".parse::<ValueKind>(),
            Err(UnknownKind("array".to_string()))
        );
        assert_eq!(
            "date".parse::<ValueKind>().unwrap_err().to_string(),
            "Unknown value kind: date"
        );
    }
}
