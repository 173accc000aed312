//! NaN0 format reference.
//!
//! This module documents the NaN0 grammar as this crate reads and writes it,
//! and holds the marker tokens the codec matches on.
//!
//! # Overview
//!
//! A NaN0 document is indentation-structured text. Every non-empty line is one
//! node; a line indented one tab unit (two spaces by default) deeper than the
//! line above it is that line's child. The document root is always a container.
//!
//! ```text
//! document     := container
//! container    := "[]" | "{}" | object | array
//! object       := (comment* field)+
//! field        := key ":" (" " scalar | NEWLINE INDENT container | " |" NEWLINE INDENT multiline)
//! array        := (comment* item)+
//! item         := "- " (scalar | label ":" NEWLINE INDENT container | "|" NEWLINE INDENT multiline)
//! comment      := "# " text (NEWLINE INDENT text)*
//! ```
//!
//! ## Objects
//!
//! ```text
//! name: Alice
//! address:
//!   city: Kyiv
//! tags: []
//! meta: {}
//! ```
//!
//! A field splits on its first `:`. Keys therefore never contain a colon.
//! Fields keep their source order.
//!
//! ## Arrays
//!
//! ```text
//! - plain scalar
//! - 160_000_500.345
//! - label:
//!     nested: value
//! - |
//!   multiple line
//!   string
//! ```
//!
//! An item is a scalar, a multi-line block, an empty container marker, or a
//! single `label:` whose children form the label's value. The last case reads
//! as the one-key object `{ label: value }`.
//!
//! Two shapes cannot be written as array items and are rejected:
//!
//! - an object with more than one key (or a one-key object holding a scalar)
//! - a non-empty array nested directly inside another array
//!
//! Wrap such values in a labelled item instead.
//!
//! ## Scalars
//!
//! | Type    | Syntax                                      | Example                    |
//! |---------|---------------------------------------------|----------------------------|
//! | Null    | `null`                                      | `value: null`              |
//! | Boolean | `true` / `false`                            | `active: true`             |
//! | Number  | optional `-`, digits, `_` groups, fraction  | `total: -160_000_500.345`  |
//! | Date    | `YYYY-MM-DD[THH:MM[:SS][offset]]`           | `at: 2024-11-13T19:34:00+2`|
//! | String  | anything else, or `"double quoted"`         | `name: Alice`              |
//!
//! Text is typed in a fixed order: empty, number, date, literal, quoted,
//! plain. `2024` is always a number, never a date.
//!
//! Numbers are written with `_` between every three integer digits. Dates are
//! written in UTC, with the time part only when it is not midnight. Strings that
//! would read back as another type, or that hold `"`, `:`, `#` or a line
//! break, are quoted.
//!
//! ## Multi-line text
//!
//! ```text
//! description: |
//!   first line
//!     indented line
//!   last line
//! ```
//!
//! The block is the `|` line's children joined by the line separator. Deeper
//! lines keep their extra indentation.
//!
//! ## Comments
//!
//! ```text
//! # Leading comment
//! #   continued on a deeper line
//! name: John
//! ```
//!
//! A comment line is `#` alone or starts with `# `. Comments are returned next
//! to the value, never inside it, and each one is tagged with the position it
//! precedes: a field key, `[i]` for array item `i`, or `.` for the container
//! itself. [`crate::Document`] carries them through a round-trip.

/// Line content of an empty array.
pub const EMPTY_ARRAY: &str = "[]";

/// Line content of an empty object.
pub const EMPTY_OBJECT: &str = "{}";

/// Value text that opens a multi-line block.
pub const MULTILINE: &str = "|";

/// Prefix of an array item line.
pub const ITEM: &str = "- ";

/// Separator between a key and its value.
pub const KEY_SEPARATOR: char = ':';

/// Prefix of a comment line.
pub const COMMENT: &str = "# ";

/// Comment id of a container itself.
pub const ROOT_ID: &str = ".";

/// Digit grouping separator in numbers.
pub const GROUP_SEPARATOR: char = '_';

/// Date written for values whose year cannot be represented.
pub const INVALID_DATE: &str = "0000-00-00";

/// Returns `true` if a line's content is a comment.
///
/// ```rust
/// use nan0::format::is_comment;
///
/// assert!(is_comment("# note"));
/// assert!(is_comment("#"));
/// assert!(!is_comment("#tag: value"));
/// ```
#[inline]
#[must_use]
pub fn is_comment(content: &str) -> bool {
    content == COMMENT.trim_end() || content.starts_with(COMMENT)
}

/// Returns `true` if a line's content is an array item.
#[inline]
#[must_use]
pub fn is_item(content: &str) -> bool {
    content == ITEM.trim_end() || content.starts_with(ITEM)
}

/// Comment id of array item `index`.
#[inline]
#[must_use]
pub fn item_id(index: usize) -> String {
    format!("[{}]", index)
}
