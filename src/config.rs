/// Nesting limit used when none is configured.
///
/// Counts nested calls, whether they appear as arguments or as index values.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parser settings. Immutable once handed to a [`Classifier`](crate::Classifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest allowed expression nesting; deeper input fails with
    /// `MaxDepthExceeded` instead of growing the stack.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
