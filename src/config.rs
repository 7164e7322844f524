/// Default maximum expression length, in characters.
pub const DEFAULT_MAX_INPUT_LEN: usize = 4096;
/// Default maximum nesting depth (parentheses, negation chains, power
/// exponents and operator chains).
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Resource bounds applied while parsing.
///
/// The grammar itself is unbounded, so adversarial input such as thousands of
/// nested parentheses or a long `1+1+...+1` chain could otherwise exhaust the
/// stack. `max_depth` bounds the height of every accepted tree regardless of
/// `max_input_len`.
///
/// ## Example
/// ```
/// use roastulator::config::Limits;
///
/// let limits = Limits::default().with_max_depth(8);
/// assert_eq!(limits.max_depth, 8);
/// assert_eq!(limits.max_input_len, 4096);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Longest accepted input, counted in characters.
    pub max_input_len: usize,
    /// Deepest accepted nesting.
    pub max_depth:     usize,
}

impl Limits {
    /// Creates limits with explicit values.
    #[must_use]
    pub const fn new(max_input_len: usize, max_depth: usize) -> Self {
        Self { max_input_len,
               max_depth }
    }

    /// Returns a copy with a different input length limit.
    #[must_use]
    pub const fn with_max_input_len(self, max_input_len: usize) -> Self {
        Self { max_input_len,
               ..self }
    }

    /// Returns a copy with a different nesting limit.
    #[must_use]
    pub const fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INPUT_LEN, DEFAULT_MAX_DEPTH)
    }
}
