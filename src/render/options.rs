//! Rendering options configuration.

/// Options for Akoma Ntoso output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AkomaOptions {
    /// Spaces per nesting level (None = single line)
    pub indent: Option<usize>,

    /// Emit the `<?xml ...?>` declaration
    pub include_declaration: bool,

    /// Emit the `level` attribute on each section
    pub include_level: bool,
}

impl Default for AkomaOptions {
    fn default() -> Self {
        Self {
            indent: Some(2),
            include_declaration: true,
            include_level: true,
        }
    }
}

impl AkomaOptions {
    /// Create new render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set indentation width, or `None` for compact output.
    pub fn with_indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    /// Compact single-line output.
    pub fn compact(self) -> Self {
        self.with_indent(None)
    }

    /// Include or omit the XML declaration.
    pub fn with_declaration(mut self, include: bool) -> Self {
        self.include_declaration = include;
        self
    }

    /// Include or omit section `level` attributes.
    pub fn with_level(mut self, include: bool) -> Self {
        self.include_level = include;
        self
    }
}
