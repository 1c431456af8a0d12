//! Engine Value Model
//!
//! The small dynamic value vocabulary blocks exchange with the host engine.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Kinds a block can declare for its input or output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    /// Matches any value kind.
    Any,
    /// UTF-8 string.
    String,
    /// Opaque byte sequence.
    Bytes,
}

impl ValueKind {
    /// Whether a value of kind `actual` satisfies this declared kind.
    pub fn accepts(self, actual: ValueKind) -> bool {
        self == ValueKind::Any || self == actual
    }
}

/// A value flowing between blocks.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Bytes(Bytes),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Bytes(_) => ValueKind::Bytes,
        }
    }

    /// Borrow as a string slice.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TypeMismatch`] if the value is not a string.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(EngineError::TypeMismatch {
                expected: ValueKind::String,
                actual: other.kind(),
            }),
        }
    }

    /// Borrow as a byte payload.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TypeMismatch`] if the value is not bytes.
    pub fn as_bytes(&self) -> Result<&Bytes> {
        match self {
            Value::Bytes(b) => Ok(b),
            other => Err(EngineError::TypeMismatch {
                expected: ValueKind::Bytes,
                actual: other.kind(),
            }),
        }
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

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::Bytes(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_accepts() {
        assert!(ValueKind::Any.accepts(ValueKind::String));
        assert!(ValueKind::Any.accepts(ValueKind::Bytes));
        assert!(ValueKind::String.accepts(ValueKind::String));
        assert!(!ValueKind::String.accepts(ValueKind::Bytes));
    }

    #[test]
    fn test_value_accessors() {
        let s = Value::from("hello");
        assert_eq!(s.kind(), ValueKind::String);
        assert_eq!(s.as_str().unwrap(), "hello");
        assert!(s.as_bytes().is_err());

        let b = Value::from(Bytes::from_static(b"raw"));
        assert_eq!(b.kind(), ValueKind::Bytes);
        assert_eq!(b.as_bytes().unwrap().as_ref(), b"raw");
        assert!(b.as_str().is_err());
    }
}
