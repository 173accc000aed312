//! The NaN0 grammar layer.
//!
//! [`Codec`] reads the line tree built by [`LineParser`] as NaN0 (objects,
//! arrays, scalars, `|` blocks and comments) and produces a [`Value`]. It also
//! runs the other way: a value is laid out as a line tree, which is then
//! rendered to text.
//!
//! ```rust
//! use nan0::{Codec, Value};
//!
//! let codec = Codec::default();
//! let doc = codec.parse_document("# owner\nname: John\nage: 30").unwrap();
//! assert_eq!(doc.value.get("age"), Some(&Value::Number(30.0)));
//! assert_eq!(doc.comments[0].id, "name");
//!
//! let text = codec.stringify_document(&doc).unwrap();
//! assert_eq!(text, "# owner\nname: John\nage: 30");
//! ```
//!
//! Array items are limited to what the grammar can express. An object item
//! must have exactly one key whose value is a container (`- label:` followed by
//! the container), and an array may not hold a non-empty array directly.
//! `stringify` rejects other shapes with [`Error::InputContract`].

use crate::comment::CommentQueue;
use crate::container::NodeId;
use crate::error::{Error, Result};
use crate::format::{
    self, EMPTY_ARRAY, EMPTY_OBJECT, ITEM, KEY_SEPARATOR, MULTILINE, ROOT_ID,
};
use crate::node::{Line, NodeTree};
use crate::options::{ParserOptions, Skip};
use crate::parser::LineParser;
use crate::scalar::{format_value, parse_value};
use crate::{Comment, Document, Nan0Map, Value};

/// Reads and writes NaN0 documents with a given tab unit and line separator.
#[derive(Clone, Debug)]
pub struct Codec {
    parser: LineParser,
}

impl Default for Codec {
    fn default() -> Self {
        Codec::new(ParserOptions::default())
    }
}

impl Codec {
    /// Builds a codec over `options`. Whitespace-only lines are dropped on top
    /// of the skip rules the options already carry.
    pub fn new(options: ParserOptions) -> Self {
        let options = options.with_skip(Skip::predicate(|row| row.trim().is_empty()));
        Codec {
            parser: LineParser::new(options),
        }
    }

    #[must_use]
    pub fn parser(&self) -> &LineParser {
        &self.parser
    }

    /// Parses a document and drops its comments.
    pub fn parse(&self, text: &str) -> Result<Value> {
        self.parse_document(text).map(|doc| doc.value)
    }

    /// Parses a document, keeping its comments in reverse discovery order.
    pub fn parse_document(&self, text: &str) -> Result<Document> {
        let (tree, root) = self.parser.decode(text);
        let mut comments = Vec::new();
        let value = self.parse_container(&tree, tree.children(root), 0, &mut comments)?;
        comments.reverse();
        tracing::debug!(
            bytes = text.len(),
            nodes = tree.len(),
            comments = comments.len(),
            "parsed document"
        );
        Ok(Document::new(value, comments))
    }

    /// Collects the comment lines starting at `nodes[start]`.
    ///
    /// Consecutive comment nodes merge into one text, joined by the line
    /// separator, and their deeper lines continue it. Returns the text, if any
    /// comment was found, and the index of the first non-comment node.
    #[must_use]
    pub fn parse_comments(&self, tree: &NodeTree, nodes: &[NodeId], start: usize) -> (Option<String>, usize) {
        let mut lines: Vec<String> = Vec::new();
        let mut index = start;
        while let Some(&node) = nodes.get(index) {
            let content = tree.content(node);
            if !format::is_comment(content) {
                break;
            }
            lines.push(content.strip_prefix(format::COMMENT).unwrap_or("").to_string());
            lines.extend(
                tree.children(node)
                    .iter()
                    .map(|&child| self.parser.encode(tree, child, 0)),
            );
            index += 1;
        }
        let text = (!lines.is_empty()).then(|| lines.join(self.parser.line_separator()));
        (text, index)
    }

    /// Reads sibling nodes as one container.
    ///
    /// Leading comments are skipped to find the first real line. No real line
    /// means an empty object. A `[]` or `{}` line is that empty container.
    /// Otherwise a `- ` line starts an array and anything else an object.
    pub fn parse_container(
        &self,
        tree: &NodeTree,
        nodes: &[NodeId],
        level: usize,
        comments: &mut Vec<Comment>,
    ) -> Result<Value> {
        let (text, first) = self.parse_comments(tree, nodes, 0);
        let Some(&head) = nodes.get(first) else {
            if let Some(text) = text {
                comments.push(Comment::new(text, ROOT_ID));
            }
            return Ok(Value::Object(Nan0Map::new()));
        };

        let content = tree.content(head);
        if content == EMPTY_ARRAY || content == EMPTY_OBJECT {
            if let Some(text) = text {
                comments.push(Comment::new(text, ROOT_ID));
            }
            self.absorb_comments(tree, tree.children(head), ROOT_ID, level + 1, comments)?;
            if nodes.len() > first + 1 {
                tracing::trace!(level, content, "ignoring lines after empty container marker");
            }
            return Ok(if content == EMPTY_ARRAY {
                Value::Array(Vec::new())
            } else {
                Value::Object(Nan0Map::new())
            });
        }

        if format::is_item(content) {
            self.parse_array(tree, nodes, level, comments)
        } else {
            self.parse_object(tree, nodes, level, comments)
        }
    }

    /// Reads sibling nodes as object fields.
    pub fn parse_object(
        &self,
        tree: &NodeTree,
        nodes: &[NodeId],
        level: usize,
        comments: &mut Vec<Comment>,
    ) -> Result<Value> {
        let mut map = Nan0Map::with_capacity(nodes.len());
        let mut index = 0;
        loop {
            let (text, next) = self.parse_comments(tree, nodes, index);
            index = next;
            let Some(&node) = nodes.get(index) else {
                if let Some(text) = text {
                    comments.push(Comment::new(text, ROOT_ID));
                }
                break;
            };

            let content = tree.content(node);
            if format::is_item(content) {
                return Err(Error::grammar(level, content, "Unexpected array item in object"));
            }
            let Some((key, rest)) = content.split_once(KEY_SEPARATOR) else {
                return Err(Error::grammar(level, content, "Missing ':' in object field"));
            };
            let key = key.trim();
            if let Some(text) = text {
                tracing::trace!(level, key, "comment attached to field");
                comments.push(Comment::new(text, key));
            }

            let value = self.parse_field(tree, node, key, rest.trim(), level, comments)?;
            map.insert(key.to_string(), value);
            index += 1;
        }
        Ok(Value::Object(map))
    }

    fn parse_field(
        &self,
        tree: &NodeTree,
        node: NodeId,
        key: &str,
        rest: &str,
        level: usize,
        comments: &mut Vec<Comment>,
    ) -> Result<Value> {
        let children = tree.children(node);
        if rest == MULTILINE {
            tracing::trace!(level, key, lines = children.len(), "multi-line field");
            return Ok(Value::String(self.join_block(tree, children)));
        }
        if rest.is_empty() && !children.is_empty() {
            tracing::trace!(level, key, "nested container field");
            return self.parse_container(tree, children, level + 1, comments);
        }
        self.absorb_comments(tree, children, key, level + 1, comments)?;
        Ok(marker_or_scalar(rest))
    }

    /// Reads sibling nodes as array items.
    ///
    /// Every item line must start with `- `. An item is a `|` block, a
    /// `label:` with children (read as `{ label: container }`), an empty
    /// container marker, or a scalar.
    pub fn parse_array(
        &self,
        tree: &NodeTree,
        nodes: &[NodeId],
        level: usize,
        comments: &mut Vec<Comment>,
    ) -> Result<Value> {
        let mut items = Vec::with_capacity(nodes.len());
        let mut index = 0;
        loop {
            let (text, next) = self.parse_comments(tree, nodes, index);
            index = next;
            let Some(&node) = nodes.get(index) else {
                if let Some(text) = text {
                    comments.push(Comment::new(text, format::item_id(0)));
                }
                break;
            };

            let content = tree.content(node);
            let Some(body) = item_body(content) else {
                return Err(Error::grammar(level, content, "Invalid array item"));
            };
            let id = format::item_id(items.len());
            if let Some(text) = text {
                tracing::trace!(level, id = id.as_str(), "comment attached to item");
                comments.push(Comment::new(text, id.clone()));
            }

            items.push(self.parse_item(tree, node, body, &id, level, comments)?);
            index += 1;
        }
        Ok(Value::Array(items))
    }

    fn parse_item(
        &self,
        tree: &NodeTree,
        node: NodeId,
        body: &str,
        id: &str,
        level: usize,
        comments: &mut Vec<Comment>,
    ) -> Result<Value> {
        let children = tree.children(node);
        if body == MULTILINE {
            return Ok(Value::String(self.join_block(tree, children)));
        }
        if let Some(label) = body.strip_suffix(KEY_SEPARATOR) {
            if !children.is_empty() {
                let label = label.trim();
                tracing::trace!(level, label, "labelled array item");
                let inner = self.parse_container(tree, children, level + 1, comments)?;
                let mut wrapper = Nan0Map::with_capacity(1);
                wrapper.insert(label.to_string(), inner);
                return Ok(Value::Object(wrapper));
            }
        }
        if body.is_empty() && self.has_content(tree, children) {
            return Err(Error::grammar(
                level,
                tree.content(node),
                "Unsupported array item: nested content under a bare '-'",
            ));
        }
        self.absorb_comments(tree, children, id, level + 1, comments)?;
        Ok(marker_or_scalar(body))
    }

    // Children of a scalar or marker line may only be comments.
    fn absorb_comments(
        &self,
        tree: &NodeTree,
        children: &[NodeId],
        id: &str,
        level: usize,
        comments: &mut Vec<Comment>,
    ) -> Result<()> {
        let (text, next) = self.parse_comments(tree, children, 0);
        if let Some(&stray) = children.get(next) {
            return Err(Error::grammar(level, tree.content(stray), "Unexpected nested content"));
        }
        if let Some(text) = text {
            comments.push(Comment::new(text, id));
        }
        Ok(())
    }

    fn has_content(&self, tree: &NodeTree, children: &[NodeId]) -> bool {
        self.parse_comments(tree, children, 0).1 < children.len()
    }

    fn join_block(&self, tree: &NodeTree, children: &[NodeId]) -> String {
        let lines: Vec<String> = children
            .iter()
            .map(|&child| self.parser.encode(tree, child, 0))
            .collect();
        lines.join(self.parser.line_separator())
    }

    /// Writes a container as NaN0 text, without comments.
    pub fn stringify(&self, value: &Value) -> Result<String> {
        self.stringify_with_comments(value, &[])
    }

    /// Writes a document, placing each comment before the position its id names.
    pub fn stringify_document(&self, doc: &Document) -> Result<String> {
        self.stringify_with_comments(&doc.value, &doc.comments)
    }

    /// Writes a container as NaN0 text with comments.
    ///
    /// `comments` is taken in the order [`parse_document`](Self::parse_document)
    /// returns it. Records are replayed in reverse list order. Each one is
    /// written once, before the first field or item whose id matches. Records
    /// tagged `"."` go before the body. Records that match nothing are written
    /// after it.
    pub fn stringify_with_comments(&self, value: &Value, comments: &[Comment]) -> Result<String> {
        let mut tree = NodeTree::new();
        let root = tree.insert(Line::default());
        let mut queue = CommentQueue::new(comments);

        if !value.is_container() {
            return Err(Error::input_contract(format!(
                "stringify expects an object or array, found {}",
                value.type_name()
            )));
        }
        for comment in queue.take_all(ROOT_ID) {
            self.push_comment(&mut tree, root, &comment.text, 0);
        }
        if value.is_empty_container() {
            tree.push_line(root, format_value(value), 0);
        } else {
            self.add_children(&mut tree, root, value, 0, &mut queue)?;
        }
        for comment in queue.drain() {
            tracing::trace!(id = comment.id.as_str(), "comment without a matching position");
            self.push_comment(&mut tree, root, &comment.text, 0);
        }

        let text = self.parser.stringify(&tree, root);
        tracing::debug!(
            bytes = text.len(),
            nodes = tree.len(),
            comments = comments.len(),
            "stringified document"
        );
        Ok(text)
    }

    fn add_children(
        &self,
        tree: &mut NodeTree,
        parent: NodeId,
        value: &Value,
        indent: usize,
        queue: &mut CommentQueue,
    ) -> Result<()> {
        match value {
            Value::Object(map) => {
                for (key, field) in map {
                    self.add_value_to_node(tree, parent, key, field, indent, queue)?;
                }
            }
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    self.add_array_item_to_node(tree, parent, index, item, indent, queue)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Appends the field `key: value` under `parent` at `indent`, writing a
    /// pending comment for `key` in front of it.
    pub(crate) fn add_value_to_node(
        &self,
        tree: &mut NodeTree,
        parent: NodeId,
        key: &str,
        value: &Value,
        indent: usize,
        queue: &mut CommentQueue,
    ) -> Result<()> {
        check_key(key)?;
        if let Some(comment) = queue.take(key) {
            self.push_comment(tree, parent, &comment.text, indent);
        }

        match value {
            Value::Array(_) | Value::Object(_) if !value.is_empty_container() => {
                let node = tree.push_line(parent, format!("{}{}", key, KEY_SEPARATOR), indent);
                self.add_children(tree, node, value, indent + 1, queue)
            }
            Value::String(s) if self.fits_block(s) => {
                let node = tree.push_line(parent, format!("{}{} {}", key, KEY_SEPARATOR, MULTILINE), indent);
                self.push_block(tree, node, s, indent + 1);
                Ok(())
            }
            _ => {
                tree.push_line(parent, format!("{}{} {}", key, KEY_SEPARATOR, format_value(value)), indent);
                Ok(())
            }
        }
    }

    /// Appends array item `index` under `parent` at `indent`, writing a
    /// pending comment for `[index]` in front of it.
    pub(crate) fn add_array_item_to_node(
        &self,
        tree: &mut NodeTree,
        parent: NodeId,
        index: usize,
        item: &Value,
        indent: usize,
        queue: &mut CommentQueue,
    ) -> Result<()> {
        if let Some(comment) = queue.take(&format::item_id(index)) {
            self.push_comment(tree, parent, &comment.text, indent);
        }

        match item {
            Value::Array(items) if !items.is_empty() => Err(Error::input_contract(format!(
                "array item {} is a non-empty array; wrap it in a labelled item",
                index
            ))),
            Value::Object(map) if !map.is_empty() => {
                let (key, inner) = single_entry(map, index)?;
                check_key(key)?;
                let node = tree.push_line(parent, format!("{}{}{}", ITEM, key, KEY_SEPARATOR), indent);
                if inner.is_empty_container() {
                    tree.push_line(node, format_value(inner), indent + 1);
                    Ok(())
                } else {
                    self.add_children(tree, node, inner, indent + 1, queue)
                }
            }
            Value::String(s) if self.fits_block(s) => {
                let node = tree.push_line(parent, format!("{}{}", ITEM, MULTILINE), indent);
                self.push_block(tree, node, s, indent + 1);
                Ok(())
            }
            _ => {
                tree.push_line(parent, format!("{}{}", ITEM, format_value(item)), indent);
                Ok(())
            }
        }
    }

    fn push_comment(&self, tree: &mut NodeTree, parent: NodeId, text: &str, indent: usize) {
        let mut lines = text.splitn(2, self.parser.line_separator());
        let first = lines.next().unwrap_or("");
        let content = if first.is_empty() {
            format::COMMENT.trim_end().to_string()
        } else {
            format!("{}{}", format::COMMENT, first)
        };
        let node = tree.push_line(parent, content, indent);
        if let Some(rest) = lines.next() {
            self.push_block(tree, node, rest, indent + 1);
        }
    }

    /// Lays out the lines of `text` under `parent`, starting at `indent`.
    ///
    /// Leading tab units become nesting, so that rendering restores them. A
    /// line is never nested more than one level below the line before it.
    fn push_block(&self, tree: &mut NodeTree, parent: NodeId, text: &str, indent: usize) {
        let tab = self.parser.tab();
        let mut stack: Vec<NodeId> = Vec::new();
        for line in text.split(self.parser.line_separator()) {
            let depth = self.parser.read_indent(line).min(stack.len());
            let content = &line[depth * tab.len()..];
            stack.truncate(depth);
            let owner = stack.last().copied().unwrap_or(parent);
            let node = tree.push_line(owner, content, indent + depth);
            stack.push(node);
        }
    }

    /// Whether `s` can be written as a `|` block and read back unchanged.
    ///
    /// Blank lines, trailing whitespace and jumps of more than one tab unit do
    /// not survive the line tree. Such strings are quoted instead.
    fn fits_block(&self, s: &str) -> bool {
        let separator = self.parser.line_separator();
        if separator.is_empty() || !s.contains(separator) {
            return false;
        }
        let mut previous: Option<usize> = None;
        for line in s.split(separator) {
            if line.trim().is_empty()
                || line.ends_with(char::is_whitespace)
                || self.parser.options().is_skipped(line)
            {
                return false;
            }
            let depth = self.parser.read_indent(line);
            if depth > previous.map_or(0, |p| p + 1) {
                return false;
            }
            previous = Some(depth);
        }
        true
    }
}

fn item_body(content: &str) -> Option<&str> {
    if content == ITEM.trim_end() {
        Some("")
    } else {
        content.strip_prefix(ITEM)
    }
}

fn marker_or_scalar(text: &str) -> Value {
    match text {
        EMPTY_ARRAY => Value::Array(Vec::new()),
        EMPTY_OBJECT => Value::Object(Nan0Map::new()),
        _ => parse_value(text),
    }
}

fn single_entry(map: &Nan0Map, index: usize) -> Result<(&String, &Value)> {
    if map.len() > 1 {
        return Err(Error::input_contract(format!(
            "array item {} is an object with {} keys; only single-key items are supported",
            index,
            map.len()
        )));
    }
    match map.first() {
        Some((key, value)) if value.is_container() => Ok((key, value)),
        Some((key, value)) => Err(Error::input_contract(format!(
            "array item {} maps {:?} to a {}; a labelled item must hold an object or array",
            index,
            key,
            value.type_name()
        ))),
        None => Err(Error::input_contract(format!("array item {} is empty", index))),
    }
}

fn check_key(key: &str) -> Result<()> {
    if key.contains(KEY_SEPARATOR)
        || key.contains('\n')
        || key.contains('\r')
        || key.starts_with('#')
        || format::is_item(key)
        || key.trim() != key
    {
        return Err(Error::input_contract(format!("key {:?} cannot be written as a field name", key)));
    }
    Ok(())
}
