/// Parser configuration.
///
/// ```rust
/// use tagtree::ParseOptions;
///
/// let options = ParseOptions::default().require_declaration(false);
/// let doc = tagtree::parse_with_options("<a>text</a>", &options)?;
/// assert_eq!(doc.root_element().body(), "text");
/// # Ok::<(), tagtree::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub(crate) require_declaration: bool,
    pub(crate) max_depth: usize,
    pub(crate) allow_trailing_content: bool,
}

/// Default nesting limit.
pub const DEFAULT_MAX_DEPTH: usize = 256;

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            require_declaration: true,
            max_depth: DEFAULT_MAX_DEPTH,
            allow_trailing_content: false,
        }
    }
}

impl ParseOptions {
    /// Whether the document must open with a `<?name ...?>` declaration.
    ///
    /// Defaults to `true`. A malformed declaration is an error either way.
    pub fn require_declaration(mut self, require: bool) -> Self {
        self.require_declaration = require;
        self
    }

    /// Maximum element nesting depth; the root element is depth 1.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Ignore whatever follows the root element's closing tag instead of
    /// requiring only whitespace there.
    pub fn allow_trailing_content(mut self, allow: bool) -> Self {
        self.allow_trailing_content = allow;
        self
    }
}
