//! Error types for the serde bridge.
//!
//! Coercing a [`ClassValue`](crate::ClassValue) into a class string never
//! fails: anything without a class meaning quietly contributes nothing. The
//! only fallible operations are the ones that go through serde:
//!
//! - [`to_value`](crate::to_value) / [`to_class_string`](crate::to_class_string)
//!   when a Rust value has a shape that cannot be expressed as a class value
//! - `TryFrom<ClassValue>` extraction of primitives
//!
//! ## Examples
//!
//! ```rust
//! use clsify::{to_value, Error};
//! use std::collections::BTreeMap;
//!
//! let mut map = BTreeMap::new();
//! map.insert(1, true);
//!
//! let err = to_value(&map).unwrap_err();
//! assert!(matches!(err, Error::KeyMustBeString(_)));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by the serde bridge.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A serde shape with no class meaning (tuple or struct enum variants)
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// A map key serialized to something other than a string
    #[error("Map keys must be strings, found {0}")]
    KeyMustBeString(String),

    /// Primitive extraction from a value of another kind
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported type error for shapes that cannot become class values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clsify::Error;
    ///
    /// let err = Error::unsupported_type("tuple variants");
    /// assert_eq!(err.to_string(), "Unsupported type: tuple variants");
    /// ```
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates an error for a map key that is not a string.
    pub fn key_must_be_string(found: &str) -> Self {
        Error::KeyMustBeString(found.to_string())
    }

    /// Creates a type mismatch error for failed primitive extraction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clsify::Error;
    ///
    /// let err = Error::type_mismatch("string", "array");
    /// assert!(err.to_string().contains("expected string"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::key_must_be_string("number").to_string(),
            "Map keys must be strings, found number"
        );
        assert_eq!(
            Error::type_mismatch("bool", "string").to_string(),
            "Type mismatch: expected bool, found string"
        );
        assert_eq!(Error::custom("boom").to_string(), "Error: boom");
    }

    #[test]
    fn test_serde_custom() {
        let err = <Error as serde::ser::Error>::custom("from ser");
        assert_eq!(err, Error::Custom("from ser".to_string()));

        let err = <Error as serde::de::Error>::custom("from de");
        assert_eq!(err, Error::Custom("from de".to_string()));
    }
}
