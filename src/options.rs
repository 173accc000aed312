//! Configuration for the line-tree layer.
//!
//! - [`ParserOptions`]: line separator, tab unit and skip rules used by
//!   [`LineParser`](crate::LineParser) and [`Codec`](crate::Codec)
//! - [`Skip`]: a rule that drops raw lines before they reach the tree
//! - [`RenderOptions`]: formatting for [`NodeTree::render`](crate::NodeTree::render)
//! - [`TabCandidate`]: an indentation unit tried by [`LineParser::find_tab`](crate::LineParser::find_tab)
//!
//! ## Examples
//!
//! ```rust
//! use nan0::{LineParser, ParserOptions, Skip};
//!
//! let options = ParserOptions::new()
//!     .with_tab("    ")
//!     .with_skip(Skip::predicate(|row| row.trim_start().starts_with("//")));
//! let parser = LineParser::new(options);
//! let (tree, root) = parser.decode("// header\nroot\n    child");
//! assert_eq!(tree.children(root).len(), 1);
//! ```

use std::fmt;
use std::sync::Arc;

/// Default line separator.
pub const EOL: &str = "\n";

/// Default indentation unit: two spaces.
pub const TAB: &str = "  ";

/// A rule that makes the decoder ignore a raw line.
#[derive(Clone)]
pub enum Skip {
    /// Matches a raw line that equals the string exactly.
    Exact(String),
    /// Matches a raw line for which the predicate returns `true`.
    Predicate(Arc<dyn Fn(&str) -> bool + Send + Sync>),
}

impl Skip {
    /// Wraps a closure into a [`Skip::Predicate`].
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Skip::Predicate(Arc::new(f))
    }

    /// Returns `true` if the raw line should be dropped.
    #[inline]
    #[must_use]
    pub fn matches(&self, row: &str) -> bool {
        match self {
            Skip::Exact(s) => s == row,
            Skip::Predicate(f) => f(row),
        }
    }
}

impl fmt::Debug for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::Exact(s) => f.debug_tuple("Exact").field(s).finish(),
            Skip::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<&str> for Skip {
    fn from(value: &str) -> Self {
        Skip::Exact(value.to_string())
    }
}

/// Configuration for splitting text into an indentation tree.
///
/// # Examples
///
/// ```rust
/// use nan0::ParserOptions;
///
/// let options = ParserOptions::new();
/// assert_eq!(options.tab, "  ");
/// assert_eq!(options.line_separator, "\n");
///
/// let options = ParserOptions::new().with_tab("\t").with_line_separator("\r\n");
/// assert_eq!(options.tab, "\t");
/// ```
#[derive(Clone, Debug)]
pub struct ParserOptions {
    pub line_separator: String,
    pub tab: String,
    pub skip: Vec<Skip>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            line_separator: EOL.to_string(),
            tab: TAB.to_string(),
            skip: vec![Skip::Exact(String::new())],
        }
    }
}

impl ParserOptions {
    /// Creates default options (`"\n"` separator, two-space tab, skip empty lines).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation unit.
    #[must_use]
    pub fn with_tab(mut self, tab: impl Into<String>) -> Self {
        self.tab = tab.into();
        self
    }

    /// Sets the line separator.
    #[must_use]
    pub fn with_line_separator(mut self, line_separator: impl Into<String>) -> Self {
        self.line_separator = line_separator.into();
        self
    }

    /// Adds a skip rule on top of the existing ones.
    #[must_use]
    pub fn with_skip(mut self, skip: Skip) -> Self {
        self.skip.push(skip);
        self
    }

    /// Replaces all skip rules.
    #[must_use]
    pub fn with_skip_rules(mut self, skip: Vec<Skip>) -> Self {
        self.skip = skip;
        self
    }

    #[inline]
    pub(crate) fn is_skipped(&self, row: &str) -> bool {
        self.skip.iter().any(|rule| rule.matches(row))
    }
}

/// Formatting for rendering a node tree as text.
///
/// The default tab is a tab character.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub trim: bool,
    pub tab: String,
    pub line_separator: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            trim: false,
            tab: "\t".to_string(),
            line_separator: EOL.to_string(),
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops indentation from every rendered line.
    #[must_use]
    pub fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }

    #[must_use]
    pub fn with_tab(mut self, tab: impl Into<String>) -> Self {
        self.tab = tab.into();
        self
    }

    #[must_use]
    pub fn with_line_separator(mut self, line_separator: impl Into<String>) -> Self {
        self.line_separator = line_separator.into();
        self
    }
}

/// An indentation unit tried by [`LineParser::find_tab`](crate::LineParser::find_tab).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TabCandidate {
    /// A run of `n` spaces.
    Spaces(usize),
    /// A literal prefix such as `"\t"`.
    Literal(String),
}

impl TabCandidate {
    /// Returns the prefix this candidate stands for.
    #[must_use]
    pub fn as_prefix(&self) -> String {
        match self {
            TabCandidate::Spaces(n) => " ".repeat(*n),
            TabCandidate::Literal(s) => s.clone(),
        }
    }

    /// The candidates tried when the caller has no preference: four spaces,
    /// two spaces, then a tab.
    #[must_use]
    pub fn defaults() -> Vec<TabCandidate> {
        vec![
            TabCandidate::Spaces(4),
            TabCandidate::Spaces(2),
            TabCandidate::Literal("\t".to_string()),
        ]
    }
}

impl From<usize> for TabCandidate {
    fn from(value: usize) -> Self {
        TabCandidate::Spaces(value)
    }
}

impl From<&str> for TabCandidate {
    fn from(value: &str) -> Self {
        TabCandidate::Literal(value.to_string())
    }
}
