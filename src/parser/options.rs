/// How repeated parameter names are resolved.
///
/// Applies uniformly to every name; announce parameters are single-valued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// Later occurrences overwrite earlier ones
    #[default]
    LastWins,
    /// The first occurrence is kept, later ones are ignored
    FirstWins,
    /// Any repeated name fails the parse with `DuplicateKey`
    Reject,
}

/// Options for [`parse_with`](crate::parse_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub duplicate_keys: DuplicateKeys,
    /// Reject inputs longer than this many bytes before any decoding
    pub max_input_len: Option<usize>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_duplicate_keys(mut self, policy: DuplicateKeys) -> Self {
        self.duplicate_keys = policy;
        self
    }

    #[must_use]
    pub fn with_max_input_len(mut self, max: usize) -> Self {
        self.max_input_len = Some(max);
        self
    }
}
