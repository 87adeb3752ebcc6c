//! Decoded environment values and the decoder kinds that produce them.

use std::fmt;

/// The decoder applied to a raw environment string.
///
/// Each kind is a closed grammar: a raw value either decodes to the
/// corresponding [`Value`] variant or the whole resolution fails with a
/// parse error naming the variable. There is no coercion between kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoder {
    /// Identity: the raw string passes through unchanged.
    Str,
    /// Base-10 signed integer.
    Int,
    /// Standard floating-point syntax.
    Float,
    /// Exactly `true`/`True`/`1` or `false`/`False`/`0`.
    Bool,
}

impl fmt::Display for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Decoder::Str => "string",
            Decoder::Int => "integer",
            Decoder::Float => "float",
            Decoder::Bool => "boolean",
        };
        f.write_str(name)
    }
}

/// A decoded environment value.
///
/// This is the tagged representation stored in a
/// [`Namespace`](crate::Namespace). Accessors follow the `as_*` convention:
/// they return `None` when the value is of a different kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Value {
    /// Returns the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer value, if this is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float value, if this is a float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The decoder kind that produces this value.
    pub fn kind(&self) -> Decoder {
        match self {
            Value::Str(_) => Decoder::Str,
            Value::Int(_) => Decoder::Int,
            Value::Float(_) => Decoder::Float,
            Value::Bool(_) => Decoder::Bool,
        }
    }

    pub(crate) fn to_toml(&self) -> toml::Value {
        match self {
            Value::Str(s) => toml::Value::String(s.clone()),
            Value::Int(i) => toml::Value::Integer(*i),
            Value::Float(x) => toml::Value::Float(*x),
            Value::Bool(b) => toml::Value::Boolean(*b),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_kind() {
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::from(7i64).as_i64(), Some(7));
        assert_eq!(Value::from(1.5f64).as_f64(), Some(1.5));
        assert_eq!(Value::from(true).as_bool(), Some(true));
    }

    #[test]
    fn test_accessors_reject_other_kinds() {
        assert_eq!(Value::from(7i64).as_str(), None);
        assert_eq!(Value::from("7").as_i64(), None);
        assert_eq!(Value::from(true).as_f64(), None);
        assert_eq!(Value::from("true").as_bool(), None);
    }

    #[test]
    fn test_kind_roundtrip() {
        assert_eq!(Value::from("x").kind(), Decoder::Str);
        assert_eq!(Value::from(0i64).kind(), Decoder::Int);
        assert_eq!(Value::from(0.0f64).kind(), Decoder::Float);
        assert_eq!(Value::from(false).kind(), Decoder::Bool);
    }

    #[test]
    fn test_decoder_display() {
        assert_eq!(Decoder::Str.to_string(), "string");
        assert_eq!(Decoder::Int.to_string(), "integer");
        assert_eq!(Decoder::Float.to_string(), "float");
        assert_eq!(Decoder::Bool.to_string(), "boolean");
    }
}
