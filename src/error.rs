//! Error types shared by every text operation.
//!
//! Two kinds are enough: an argument of the wrong shape ([`TextError::Type`])
//! and an argument of the right shape whose value breaks a documented
//! constraint ([`TextError::Value`]). The typed API can only produce the latter;
//! type errors come from the untyped [`dispatch`](crate::dispatch) boundary.

use std::fmt;

/// Error raised by a text operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// An argument has the wrong type (e.g. a number where text was expected)
    Type(String),
    /// An argument has the right type but an invalid value
    Value(String),
}

impl TextError {
    pub fn type_error(msg: impl Into<String>) -> Self {
        TextError::Type(msg.into())
    }

    pub fn value_error(msg: impl Into<String>) -> Self {
        TextError::Value(msg.into())
    }

    /// The human-readable message without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            TextError::Type(msg) | TextError::Value(msg) => msg,
        }
    }

    pub fn is_type_error(&self) -> bool {
        matches!(self, TextError::Type(_))
    }

    pub fn is_value_error(&self) -> bool {
        matches!(self, TextError::Value(_))
    }
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextError::Type(msg) => write!(f, "Type error: {msg}"),
            TextError::Value(msg) => write!(f, "Value error: {msg}"),
        }
    }
}

impl std::error::Error for TextError {}

pub type TextResult<T> = Result<T, TextError>;
