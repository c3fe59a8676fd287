use thiserror::Error as ThisError;

use crate::model::ValueType;

/// Failure of a single environment lookup.
///
/// Offending raw values are carried for inspection but never rendered in the
/// message.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("environment variable {key} is not defined and no default value was provided")]
    MissingVariable { key: String },

    #[error("environment variable {key} is not a valid number")]
    InvalidNumber { key: String, value: String },

    #[error("environment variable {key} is not a valid boolean")]
    InvalidBoolean { key: String, value: String },

    #[error("unsupported type `{tag}` for environment variable {key}")]
    UnsupportedType { key: String, tag: String },

    #[error("environment variable {key} is not declared in the schema")]
    UnknownKey { key: String },

    #[error("environment variable {key} is declared as {declared}, not {requested}")]
    TypeMismatch {
        key: String,
        declared: ValueType,
        requested: ValueType,
    },
}

impl Error {
    /// Name of the variable the failed lookup was for.
    pub fn key(&self) -> &str {
        match self {
            Self::MissingVariable { key }
            | Self::InvalidNumber { key, .. }
            | Self::InvalidBoolean { key, .. }
            | Self::UnsupportedType { key, .. }
            | Self::UnknownKey { key }
            | Self::TypeMismatch { key, .. } => key,
        }
    }
}

/// Returned when a textual type tag is not `string`, `number` or `boolean`.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("unrecognized type tag `{tag}`")]
pub struct ParseValueTypeError {
    pub tag: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_key() {
        let err = Error::MissingVariable {
            key: "PORT".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "environment variable PORT is not defined and no default value was provided"
        );

        let err = Error::TypeMismatch {
            key: "PORT".to_owned(),
            declared: ValueType::Number,
            requested: ValueType::Boolean,
        };
        assert_eq!(
            err.to_string(),
            "environment variable PORT is declared as number, not boolean"
        );
    }

    #[test]
    fn raw_value_is_not_rendered() {
        let err = Error::InvalidNumber {
            key: "TOKEN_TTL".to_owned(),
            value: "hunter2".to_owned(),
        };
        assert!(!err.to_string().contains("hunter2"));
        assert_eq!(err.key(), "TOKEN_TTL");
    }
}
