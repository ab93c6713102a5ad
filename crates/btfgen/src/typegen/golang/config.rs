//! Configuration types for Go emission.

/// Default bound on nested type literals.
pub const DEFAULT_MAX_DEPTH: usize = crate::MAX_TYPE_DEPTH;

/// Configuration for Go emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Bound on nested anonymous type literals
    pub(crate) max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nesting bound.
    ///
    /// A declaration whose literal nesting reaches exactly `value` levels is
    /// still rendered; one level more fails with `FormatError::TooDeep`.
    /// Only type literals count. Qualifier chains and size lookups use the
    /// fixed [`MAX_TYPE_DEPTH`](crate::MAX_TYPE_DEPTH).
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }
}
