//! Indentation tree builder.
//!
//! [`LineParser`] turns line-oriented text into a [`NodeTree`] keyed by
//! indentation depth, and renders such a tree back to text. It knows nothing
//! about NaN0. [`Codec`](crate::Codec) interprets the tree it builds.
//!
//! ```rust
//! use nan0::LineParser;
//!
//! let parser = LineParser::default();
//! let (tree, root) = parser.decode("root\n  child\n    subchild\nsibling");
//! let top: Vec<_> = tree.children(root).iter().map(|&id| tree.content(id)).collect();
//! assert_eq!(top, vec!["root", "sibling"]);
//! ```

use crate::container::NodeId;
use crate::node::{Line, NodeTree};
use crate::options::{ParserOptions, RenderOptions, TabCandidate};

/// Splits text into an indentation tree and joins it back.
#[derive(Clone, Debug, Default)]
pub struct LineParser {
    options: ParserOptions,
}

impl LineParser {
    pub fn new(options: ParserOptions) -> Self {
        LineParser { options }
    }

    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    #[must_use]
    pub fn tab(&self) -> &str {
        &self.options.tab
    }

    #[must_use]
    pub fn line_separator(&self) -> &str {
        &self.options.line_separator
    }

    /// Counts the whole tab units that prefix `row`.
    ///
    /// Leading whitespace that is not a whole number of tab units is rounded
    /// down. The line then lands on the nearest enclosing level.
    ///
    /// ```rust
    /// use nan0::LineParser;
    ///
    /// let parser = LineParser::default();
    /// assert_eq!(parser.read_indent("    Hello"), 2);
    /// assert_eq!(parser.read_indent("   Hello"), 1);
    /// assert_eq!(parser.read_indent("Hello"), 0);
    /// ```
    #[must_use]
    pub fn read_indent(&self, row: &str) -> usize {
        let tab = self.options.tab.as_str();
        if tab.is_empty() {
            return 0;
        }
        let mut rest = row;
        let mut indent = 0;
        while let Some(next) = rest.strip_prefix(tab) {
            rest = next;
            indent += 1;
        }
        indent
    }

    /// Builds the line tree of `text`.
    ///
    /// Returns the tree and its virtual root. The root has empty content, and
    /// its children are the top-level lines of the document. Lines matched by a
    /// skip rule are dropped. Every other line becomes one node under the
    /// nearest preceding line with a smaller indent.
    pub fn decode(&self, text: &str) -> (NodeTree, NodeId) {
        let mut tree = NodeTree::new();
        let root = tree.insert(Line::default());
        let tab_len = self.options.tab.len();

        // `None` marks the virtual root, which sits above every real indent.
        let mut stack: Vec<(NodeId, Option<usize>)> = vec![(root, None)];

        for row in self.rows(text) {
            if self.options.is_skipped(row) {
                continue;
            }

            let indent = self.read_indent(row);
            let payload = row[indent * tab_len..].trim_end();

            while matches!(stack.last(), Some(&(_, Some(depth))) if indent <= depth) {
                stack.pop();
            }
            let parent = stack.last().map_or(root, |&(id, _)| id);

            let node = tree.push_line(parent, payload, indent);
            stack.push((node, Some(indent)));
        }

        tracing::trace!(nodes = tree.len(), "decoded line tree");
        (tree, root)
    }

    /// Renders `id` at `indent` tab units, with its children one unit deeper each.
    ///
    /// The stored indent of each node is ignored. Depth comes from the tree shape.
    #[must_use]
    pub fn encode(&self, tree: &NodeTree, id: NodeId, indent: usize) -> String {
        let line = format!("{}{}", self.options.tab.repeat(indent), tree.content(id));
        let children = tree.children(id);
        if children.is_empty() {
            return line;
        }
        let child_lines: Vec<String> = children
            .iter()
            .map(|&child| self.encode(tree, child, indent + 1))
            .collect();
        format!(
            "{}{}{}",
            line,
            self.options.line_separator,
            child_lines.join(&self.options.line_separator)
        )
    }

    /// Renders `id` with the stored indents, using this parser's tab and separator.
    #[must_use]
    pub fn stringify(&self, tree: &NodeTree, id: NodeId) -> String {
        let options = RenderOptions::new()
            .with_tab(self.options.tab.clone())
            .with_line_separator(self.options.line_separator.clone());
        tree.render(id, &options)
    }

    /// Guesses the indentation unit of `text`.
    ///
    /// Counts the lines that start with each candidate and returns the most
    /// frequent one. Ties go to the earlier candidate. Without candidates the
    /// result is a tab character.
    ///
    /// ```rust
    /// use nan0::{LineParser, TabCandidate};
    ///
    /// let text = "1. First\n  1. Sub\n  1. Sub\n    1. Deep\n1. Second";
    /// assert_eq!(LineParser::find_tab(text, &TabCandidate::defaults(), "\n"), "  ");
    ///
    /// let wide = [TabCandidate::Spaces(4), TabCandidate::from("\t")];
    /// assert_eq!(LineParser::find_tab(text, &wide, "\n"), "    ");
    /// ```
    #[must_use]
    pub fn find_tab(text: &str, candidates: &[TabCandidate], line_separator: &str) -> String {
        let prefixes: Vec<String> = candidates.iter().map(TabCandidate::as_prefix).collect();
        let mut counts = vec![0usize; prefixes.len()];
        for row in split_rows(text, line_separator) {
            for (count, prefix) in counts.iter_mut().zip(&prefixes) {
                if row.starts_with(prefix.as_str()) {
                    *count += 1;
                }
            }
        }

        let mut best: Option<usize> = None;
        for (i, &count) in counts.iter().enumerate() {
            if best.map_or(true, |b| count > counts[b]) {
                best = Some(i);
            }
        }
        best.map_or_else(|| "\t".to_string(), |i| prefixes[i].clone())
    }

    /// [`find_tab`](Self::find_tab) with the default candidates and a `"\n"` separator.
    #[must_use]
    pub fn detect_tab(text: &str) -> String {
        Self::find_tab(text, &TabCandidate::defaults(), "\n")
    }

    fn rows<'a>(&self, text: &'a str) -> Vec<&'a str> {
        split_rows(text, &self.options.line_separator)
    }
}

fn split_rows<'a>(text: &'a str, line_separator: &str) -> Vec<&'a str> {
    if line_separator.is_empty() {
        vec![text]
    } else {
        text.split(line_separator).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Skip;

    fn contents(tree: &NodeTree, id: NodeId) -> Vec<&str> {
        tree.children(id).iter().map(|&c| tree.content(c)).collect()
    }

    #[test]
    fn test_defaults() {
        let parser = LineParser::default();
        assert_eq!(parser.line_separator(), "\n");
        assert_eq!(parser.tab(), "  ");
    }

    #[test]
    fn test_read_indent() {
        let parser = LineParser::default();
        assert_eq!(parser.read_indent(""), 0);
        assert_eq!(parser.read_indent("  "), 1);
        assert_eq!(parser.read_indent("    "), 2);
        assert_eq!(parser.read_indent("      "), 3);
        assert_eq!(parser.read_indent("  Hello"), 1);

        let wide = LineParser::new(ParserOptions::new().with_tab("    "));
        assert_eq!(wide.read_indent("        text"), 2);
        assert_eq!(wide.read_indent("      text"), 1);
    }

    #[test]
    fn test_decode_nested() {
        let parser = LineParser::default();
        let (tree, root) = parser.decode("Root\n  Child1\n  Child2\n    Grandchild");

        assert_eq!(tree.content(root), "");
        assert_eq!(contents(&tree, root), vec!["Root"]);

        let top = tree.children(root)[0];
        assert_eq!(contents(&tree, top), vec!["Child1", "Child2"]);

        let child2 = tree.children(top)[1];
        assert_eq!(contents(&tree, child2), vec!["Grandchild"]);
        assert_eq!(tree[tree.children(child2)[0]].indent, 2);
        assert_eq!(tree.level(tree.children(child2)[0]), 3);
    }

    #[test]
    fn test_decode_pops_back_to_top_level() {
        let parser = LineParser::default();
        let (tree, root) = parser.decode("root\n  child\n    subchild\nsibling");
        assert_eq!(contents(&tree, root), vec!["root", "sibling"]);
    }

    #[test]
    fn test_decode_skips_empty_lines_and_trims_end() {
        let parser = LineParser::default();
        let (tree, root) = parser.decode("Root\n\n  Child   \n\n\n  AnotherChild");
        let top = tree.children(root)[0];
        assert_eq!(contents(&tree, top), vec!["Child", "AnotherChild"]);
    }

    #[test]
    fn test_decode_custom_skip() {
        let parser = LineParser::new(
            ParserOptions::new().with_skip(Skip::predicate(|row| row.trim().starts_with("//"))),
        );
        let text = "// comment line\nroot\n  // inner comment\n  child\n\n  // trailing comment";
        let (tree, root) = parser.decode(text);
        assert_eq!(contents(&tree, root), vec!["root"]);
        assert_eq!(contents(&tree, tree.children(root)[0]), vec!["child"]);
    }

    #[test]
    fn test_encode_round_trip() {
        let parser = LineParser::default();
        let text = "Root\n  Child1\n  Child2\n    Grandchild";
        let (tree, root) = parser.decode(text);
        assert_eq!(parser.encode(&tree, tree.children(root)[0], 0), text);
    }

    #[test]
    fn test_encode_custom_tab_and_eol() {
        let parser = LineParser::new(ParserOptions::new().with_tab("--").with_line_separator("\r\n"));
        let mut tree = NodeTree::new();
        let root = tree.insert(Line::new("root", 0));
        tree.push_line(root, "child", 1);
        assert_eq!(parser.encode(&tree, root, 0), "root\r\n--child");
        assert_eq!(parser.stringify(&tree, root), "root\r\n--child");
    }

    #[test]
    fn test_find_tab() {
        let text = [
            "# Document",
            "1. First task",
            "  1. First sub-task",
            "  1. Second sub-task",
            "    1. Sub-sub-task",
            "1. Second task",
        ]
        .join("\n");
        assert_eq!(LineParser::detect_tab(&text), "  ");
        let wide = [TabCandidate::Spaces(4), TabCandidate::from("\t")];
        assert_eq!(LineParser::find_tab(&text, &wide, "\n"), "    ");

        let candidates = [
            TabCandidate::from("\t"),
            TabCandidate::Spaces(2),
            TabCandidate::Spaces(4),
        ];
        assert_eq!(
            LineParser::find_tab("\tFirst line\n  Second line", &candidates, "\n"),
            "\t"
        );
        assert_eq!(LineParser::find_tab("a\nb", &[], "\n"), "\t");
    }
}
