use std::fmt;

use crate::{engine::complexity::score::Complexity, util::num::format_number};

/// Everything the engine produces for one successfully evaluated
/// expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The expression exactly as given.
    pub expression: String,
    /// The evaluated value.
    pub result:     f64,
    /// Score and level of the expression.
    pub complexity: Complexity,
    /// The roast message; never empty.
    pub roast:      String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Result:     {}", format_number(self.result))?;
        writeln!(f, "Complexity: {}", self.complexity)?;
        write!(f, "Roast:      {}", self.roast)
    }
}
