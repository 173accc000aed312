//! Comment records and parsed documents.
//!
//! Comments never enter the [`Value`] graph. Parsing returns them next to the
//! value in a [`Document`], each tagged with the position it precedes:
//!
//! | id       | position                                              |
//! |----------|-------------------------------------------------------|
//! | `"key"`  | the object field `key`                                |
//! | `"[i]"`  | array item `i`; trailing array comments use `"[0]"`   |
//! | `"."`    | the container itself (trailing, or nothing to attach to) |
//!
//! `Document::comments` lists records in reverse discovery order: the comment
//! nearest the end of the text comes first. Stringify relies on that order.
//!
//! ```rust
//! use nan0::{parse_document, Comment};
//!
//! let doc = parse_document("# note\nname: John").unwrap();
//! assert_eq!(doc.comments, vec![Comment::new("note", "name")]);
//! ```

use crate::Value;
use serde::{Deserialize, Serialize};

/// One comment, possibly spanning several lines, and the id of the position
/// it is attached to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    pub id: String,
}

impl Comment {
    pub fn new(text: impl Into<String>, id: impl Into<String>) -> Self {
        Comment {
            text: text.into(),
            id: id.into(),
        }
    }
}

/// A parsed value together with its comments.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub value: Value,
    pub comments: Vec<Comment>,
}

impl Document {
    pub fn new(value: Value, comments: Vec<Comment>) -> Self {
        Document { value, comments }
    }

    /// Comments attached to `id`, in reverse discovery order.
    pub fn comments_for<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Comment> + 'a {
        self.comments.iter().filter(move |c| c.id == id)
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Document::new(value, Vec::new())
    }
}

/// Comments waiting to be written by stringify.
///
/// Built from a comment list in its stored (reversed) order and replayed in
/// discovery order. Every record is handed out at most once.
#[derive(Debug)]
pub(crate) struct CommentQueue {
    pending: Vec<Option<Comment>>,
}

impl CommentQueue {
    pub(crate) fn new(comments: &[Comment]) -> Self {
        CommentQueue {
            pending: comments.iter().rev().cloned().map(Some).collect(),
        }
    }

    /// The earliest pending record for `id`.
    pub(crate) fn take(&mut self, id: &str) -> Option<Comment> {
        self.pending
            .iter_mut()
            .find(|slot| matches!(slot, Some(c) if c.id == id))
            .and_then(Option::take)
    }

    /// Every pending record for `id`, earliest first.
    pub(crate) fn take_all(&mut self, id: &str) -> Vec<Comment> {
        self.pending
            .iter_mut()
            .filter(|slot| matches!(slot, Some(c) if c.id == id))
            .filter_map(Option::take)
            .collect()
    }

    /// Everything not handed out yet, earliest first.
    pub(crate) fn drain(&mut self) -> Vec<Comment> {
        self.pending.drain(..).flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_replays_in_discovery_order() {
        // Stored order is reversed: "second" was discovered last.
        let stored = vec![Comment::new("second", "name"), Comment::new("first", "name")];
        let mut queue = CommentQueue::new(&stored);
        assert_eq!(queue.take("name").map(|c| c.text), Some("first".to_string()));
        assert_eq!(queue.take("name").map(|c| c.text), Some("second".to_string()));
        assert_eq!(queue.take("name"), None);
    }

    #[test]
    fn test_take_all_and_drain() {
        let stored = vec![
            Comment::new("c", "."),
            Comment::new("b", "[0]"),
            Comment::new("a", "."),
        ];
        let mut queue = CommentQueue::new(&stored);
        let root: Vec<_> = queue.take_all(".").into_iter().map(|c| c.text).collect();
        assert_eq!(root, vec!["a", "c"]);
        assert_eq!(queue.drain(), vec![Comment::new("b", "[0]")]);
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_comments_for() {
        let doc = Document::new(
            Value::Null,
            vec![Comment::new("x", "a"), Comment::new("y", "b"), Comment::new("z", "a")],
        );
        let texts: Vec<_> = doc.comments_for("a").map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["x", "z"]);
    }
}
