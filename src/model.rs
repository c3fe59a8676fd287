use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ParseValueTypeError;

/// Primitive type a schema entry declares for a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueType {
    String,
    Number,
    Boolean,
}

impl ValueType {
    /// The textual tag, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = ParseValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            other => Err(ParseValueTypeError {
                tag: other.to_owned(),
            }),
        }
    }
}

/// Type tag as stored in a schema.
///
/// Tags built from text are kept even when unrecognized; the lookup, not the
/// construction, reports them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declared {
    Known(ValueType),
    Unrecognized(String),
}

impl From<ValueType> for Declared {
    fn from(value: ValueType) -> Self {
        Self::Known(value)
    }
}

/// A typed lookup result.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::String(_) => ValueType::String,
            Self::Number(_) => ValueType::Number,
            Self::Boolean(_) => ValueType::Boolean,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Rust types that a schema type tag maps onto.
pub trait FromValue: Sized + Into<Value> {
    const VALUE_TYPE: ValueType;

    /// Extract `Self` from a value of the matching variant.
    fn from_value(value: Value) -> Option<Self>;
}

impl FromValue for String {
    const VALUE_TYPE: ValueType = ValueType::String;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(value) => Some(value),
            _ => None,
        }
    }
}

impl FromValue for f64 {
    const VALUE_TYPE: ValueType = ValueType::Number;

    fn from_value(value: Value) -> Option<Self> {
        value.as_number()
    }
}

impl FromValue for bool {
    const VALUE_TYPE: ValueType = ValueType::Boolean;

    fn from_value(value: Value) -> Option<Self> {
        value.as_bool()
    }
}

/// Numeric coercion behavior for `number` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberParsing {
    /// Permissive conversion: surrounding whitespace is trimmed, empty input
    /// is `0`, and `0x`/`0o`/`0b` integers and `Infinity` are accepted.
    #[default]
    Loose,
    /// Only an untrimmed decimal literal with a finite value.
    Strict,
}
