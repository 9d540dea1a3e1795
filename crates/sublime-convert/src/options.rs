//! Output options.

/// Default JSON indentation width.
pub const DEFAULT_INDENT: usize = 4;

/// How a converted document is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Prepend the generated-theme comment block.
    pub header: bool,
    /// Spaces per JSON indentation level.
    pub indent: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            header: true,
            indent: DEFAULT_INDENT,
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave out the generated-theme comment block.
    pub fn without_header(mut self) -> Self {
        self.header = false;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
