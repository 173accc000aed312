//! # nan0
//!
//! A reader and writer for NaN0, an indentation-based document format with
//! comments that survive a round-trip.
//!
//! ## What is NaN0?
//!
//! NaN0 is a line-oriented, human-editable notation for nested data. Objects
//! are `key: value` lines, arrays are `- item` lines, and nesting is expressed
//! by indentation alone (two spaces by default):
//!
//! ```text
//! # Build settings
//! name: demo
//! budget: 160_000_500.345
//! released: 2024-11-13T19:34:00
//! notes: |
//!   first line
//!   second line
//! targets:
//!   - linux
//!   - macos
//! flags: {}
//! ```
//!
//! ## Layers
//!
//! - [`LineParser`] turns text into a format-agnostic [`NodeTree`] keyed by
//!   indentation and renders such trees back to text.
//! - [`Codec`] reads that tree as NaN0 and produces a [`Value`], or lays out a
//!   value as a tree. Comments travel beside the value in a [`Document`].
//! - [`to_value`], [`from_value`], [`to_string`] and [`from_str`] bridge any
//!   serde type to and from NaN0.
//!
//! ## Quick Start
//!
//! ```rust
//! use nan0::{parse_document, stringify_document, Comment, Value};
//!
//! let doc = parse_document("# note\nname: John").unwrap();
//! assert_eq!(doc.value.get("name"), Some(&Value::String("John".into())));
//! assert_eq!(doc.comments, vec![Comment::new("note", "name")]);
//!
//! assert_eq!(stringify_document(&doc).unwrap(), "# note\nname: John");
//! ```
//!
//! ### With serde
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use nan0::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string(), active: true };
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, "id: 123\nname: Alice\nactive: true");
//!
//! let back: User = from_str(&text).unwrap();
//! assert_eq!(user, back);
//! ```
//!
//! ### Dynamic values with the nan0! macro
//!
//! ```rust
//! use nan0::{nan0, stringify};
//!
//! let data = nan0!({
//!     "name": "Alice",
//!     "tags": ["rust", "serde"]
//! });
//! assert_eq!(stringify(&data).unwrap(), "name: Alice\ntags:\n  - rust\n  - serde");
//! ```
//!
//! ## Logging
//!
//! Parsing and stringifying emit `tracing` events (`debug` per document,
//! `trace` per node). The crate never installs a subscriber.
//!
//! ## Demos
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - serializing a struct and reading it back
//! - **`macro.rs`** - building values with `nan0!`
//! - **`comments.rs`** - keeping comments through a round-trip
//! - **`dynamic_values.rs`** - inspecting a parsed [`Value`]
//! - **`custom_options.rs`** - tab units, line separators and skip rules
//! - **`line_tree.rs`** - the generic line tree on its own
//!
//! Run any demo with: `cargo run --example <name>`

pub mod codec;
pub mod comment;
pub mod container;
pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod node;
pub mod options;
pub mod parser;
pub mod scalar;
pub mod ser;
pub mod value;

pub use codec::Codec;
pub use comment::{Comment, Document};
pub use container::{Entry, NodeId, Tree};
pub use de::{from_value, Deserializer};
pub use error::{Error, Result};
pub use map::Nan0Map;
pub use node::{Line, NodeTree};
pub use options::{ParserOptions, RenderOptions, Skip, TabCandidate};
pub use parser::LineParser;
pub use scalar::{format_value, parse_value};
pub use ser::{to_value, ValueSerializer};
pub use value::Value;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Parse NaN0 text into a [`Value`], dropping comments.
///
/// # Examples
///
/// ```rust
/// use nan0::{nan0, parse};
///
/// assert_eq!(parse("desc: |\n  line one\n  line two").unwrap(), nan0!({"desc": "line one\nline two"}));
/// assert_eq!(parse("").unwrap(), nan0!({}));
/// ```
///
/// # Errors
///
/// Returns [`Error::Grammar`] naming the nesting level and the offending line
/// when the text is not well-formed NaN0.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(text: &str) -> Result<Value> {
    Codec::default().parse(text)
}

/// Parse NaN0 text into a [`Document`], keeping its comments.
///
/// Comments are listed in reverse discovery order.
///
/// # Errors
///
/// Same as [`parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_document(text: &str) -> Result<Document> {
    Codec::default().parse_document(text)
}

/// Write a container [`Value`] as NaN0 text.
///
/// # Examples
///
/// ```rust
/// use nan0::{nan0, stringify};
///
/// assert_eq!(stringify(&nan0!({"num": 160000500.345})).unwrap(), "num: 160_000_500.345");
/// assert!(stringify(&nan0!(1)).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::InputContract`] when the root is not an object or array,
/// or when the value holds a shape the grammar cannot express.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn stringify(value: &Value) -> Result<String> {
    Codec::default().stringify(value)
}

/// Write a [`Document`] as NaN0 text, comments included.
///
/// # Errors
///
/// Same as [`stringify`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn stringify_document(doc: &Document) -> Result<String> {
    Codec::default().stringify_document(doc)
}

/// Write a [`Value`] as NaN0 text with the given comments.
///
/// `comments` uses the order [`parse_document`] returns.
///
/// # Errors
///
/// Same as [`stringify`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn stringify_with_comments(value: &Value, comments: &[Comment]) -> Result<String> {
    Codec::default().stringify_with_comments(value, comments)
}

/// Serialize any `T: Serialize` to a NaN0 string.
///
/// # Examples
///
/// ```rust
/// use nan0::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_string(&Point { x: 1, y: 2 }).unwrap(), "x: 1\ny: 2");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized, or if it does not
/// serialize to an object or array.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    stringify(&to_value(value)?)
}

/// Deserialize an instance of type `T` from NaN0 text.
///
/// # Examples
///
/// ```rust
/// use nan0::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x: 1\ny: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the text is not valid NaN0 or cannot be deserialized
/// to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(parse(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn test_serialize_deserialize_user() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let text = to_string(&user).unwrap();
        assert_eq!(text, "id: 123\nname: Alice\nactive: true\ntags:\n  - admin\n  - user");
        let back: User = from_str(&text).unwrap();
        assert_eq!(user, back);
    }

    #[test]
    fn test_arrays() {
        let numbers = vec![1, 2, 3, 4, 5];
        let text = to_string(&numbers).unwrap();
        assert_eq!(text, "- 1\n- 2\n- 3\n- 4\n- 5");
        let back: Vec<i32> = from_str(&text).unwrap();
        assert_eq!(numbers, back);
    }

    #[test]
    fn test_scalar_root_is_rejected() {
        assert!(matches!(to_string(&5), Err(Error::InputContract(_))));
    }

    #[test]
    fn test_document_round_trip() {
        let text = "# note\nname: John";
        let doc = parse_document(text).unwrap();
        assert_eq!(doc.comments, vec![Comment::new("note", "name")]);
        assert_eq!(stringify_document(&doc).unwrap(), text);
    }
}
