//! Line nodes: the format-agnostic tree produced by [`LineParser`](crate::LineParser).
//!
//! A [`Line`] is the payload of one source line: its content without leading
//! indentation, plus the indentation it was read at (counted in tab units).
//! The indent is tracked apart from the tree level. They agree for decoded
//! trees. Trees built by hand may choose any indent.

use crate::container::{NodeId, Tree};
use crate::options::RenderOptions;
use std::fmt;

/// Payload of one line in a [`NodeTree`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Line {
    pub content: String,
    pub indent: usize,
}

impl Line {
    pub fn new(content: impl Into<String>, indent: usize) -> Self {
        Line {
            content: content.into(),
            indent,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// A tree of [`Line`]s.
pub type NodeTree = Tree<Line>;

impl Tree<Line> {
    /// Content of a node.
    #[inline]
    #[must_use]
    pub fn content(&self, id: NodeId) -> &str {
        &self[id].content
    }

    /// Creates a line node under `parent`.
    pub fn push_line(&mut self, parent: NodeId, content: impl Into<String>, indent: usize) -> NodeId {
        self.push(parent, Line::new(content, indent))
    }

    /// Renders `id` and its descendants, one line per node.
    ///
    /// Each line is `tab` repeated by the node's indent, followed by its
    /// content, or the bare content when `trim` is set. A parentless node with
    /// empty content, such as the root returned by decoding, produces no line.
    ///
    /// ```rust
    /// use nan0::{Line, NodeTree, RenderOptions};
    ///
    /// let mut tree = NodeTree::new();
    /// let root = tree.insert(Line::new("Root", 0));
    /// let child = tree.push_line(root, "Child", 1);
    /// tree.push_line(child, "Grandchild", 2);
    ///
    /// assert_eq!(tree.render(root, &RenderOptions::new()), "Root\n\tChild\n\t\tGrandchild");
    /// assert_eq!(tree.render(root, &RenderOptions::new().trimmed()), "Root\nChild\nGrandchild");
    /// ```
    #[must_use]
    pub fn render(&self, id: NodeId, options: &RenderOptions) -> String {
        let lines: Vec<String> = self
            .flatten(id)
            .into_iter()
            .filter(|&node| !(node == id && self.parent(id).is_none() && self[id].content.is_empty()))
            .map(|node| {
                let line = &self[node];
                if options.trim {
                    line.content.clone()
                } else {
                    format!("{}{}", options.tab.repeat(line.indent), line.content)
                }
            })
            .collect();
        lines.join(&options.line_separator)
    }
}
