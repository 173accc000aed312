//! Error types for NaN0 parsing and stringifying.
//!
//! Every failure in this crate is fatal to the call that raised it. There is
//! no partial recovery. A caller that wants tolerant parsing should catch the
//! error at the call boundary.
//!
//! ## Error Categories
//!
//! - **Grammar errors**: a line that does not fit the NaN0 grammar. This covers
//!   a field without a colon, an array item without its `- ` marker, or an
//!   unsupported nesting shape. The error carries the nesting level and the raw
//!   line content.
//! - **Input contract errors**: `stringify` was handed a value that it cannot
//!   represent, e.g. a scalar root.
//! - **Custom errors**: raised through the serde bridge.
//!
//! ## Examples
//!
//! ```rust
//! use nan0::{parse, Error};
//!
//! let err = parse("test:\n  items:\n    - one\n    invalid").unwrap_err();
//! assert!(matches!(err, Error::Grammar { .. }));
//! assert!(err.to_string().contains("invalid"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while reading or writing NaN0.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A line violates the NaN0 grammar.
    #[error("{msg} at level {level}: {content:?}")]
    Grammar {
        level: usize,
        content: String,
        msg: String,
    },

    /// The value handed to `stringify` cannot be represented.
    #[error("Invalid input: {0}")]
    InputContract(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a grammar error for the offending line content at a nesting level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nan0::Error;
    ///
    /// let err = Error::grammar(2, "invalid", "Invalid array item");
    /// assert_eq!(err.to_string(), "Invalid array item at level 2: \"invalid\"");
    /// ```
    pub fn grammar(level: usize, content: &str, msg: &str) -> Self {
        Error::Grammar {
            level,
            content: content.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an input contract error for values `stringify` refuses.
    pub fn input_contract<T: fmt::Display>(msg: T) -> Self {
        Error::InputContract(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nan0::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the nesting level for grammar errors.
    #[must_use]
    pub fn level(&self) -> Option<usize> {
        match self {
            Error::Grammar { level, .. } => Some(*level),
            _ => None,
        }
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
    fn test_grammar_message_names_level_and_content() {
        let err = Error::grammar(1, "name John", "Missing ':' in object field");
        assert_eq!(
            err.to_string(),
            "Missing ':' in object field at level 1: \"name John\""
        );
        assert_eq!(err.level(), Some(1));
    }

    #[test]
    fn test_input_contract_message() {
        let err = Error::input_contract("expected an object or array, found number");
        assert!(err.to_string().starts_with("Invalid input:"));
        assert_eq!(err.level(), None);
    }
}
