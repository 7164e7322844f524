use log::warn;

use crate::{engine::complexity::score::Complexity, error::RoastError};

/// An offline roaster with one fixed message per complexity level.
pub mod canned;
/// The combined evaluation, scoring and roast result.
pub mod report;

pub use canned::CannedRoaster;
pub use report::Report;

/// Text returned whenever a roaster fails.
pub const FALLBACK_ROAST: &str =
    "I'm speechless. Not because I'm impressed, but because my brain broke.";

/// Text to pair with an expression that could not be evaluated.
pub const BROKEN_CALCULATOR_ROAST: &str = "You broke the calculator. Are you proud of yourself?";

/// Produces a roast message for an evaluated expression.
///
/// This is the seam to the text-generation collaborator. Implementations may
/// do anything, including network calls, and may fail; the engine only ever
/// calls them through [`roast_or_fallback`], which turns failures into
/// [`FALLBACK_ROAST`].
pub trait Roaster: Send + Sync {
    /// Returns a roast for `expression`, given its complexity.
    ///
    /// # Errors
    /// Any `RoastError`; callers must not let it affect the evaluation
    /// result.
    fn roast(&self, expression: &str, complexity: &Complexity) -> Result<String, RoastError>;
}

impl<F> Roaster for F where F: Fn(&str, &Complexity) -> Result<String, RoastError> + Send + Sync
{
    fn roast(&self, expression: &str, complexity: &Complexity) -> Result<String, RoastError> {
        self(expression, complexity)
    }
}

/// Asks `roaster` for a message and always returns one.
///
/// Failures and blank messages are logged at `warn` level and replaced with
/// [`FALLBACK_ROAST`]. Returned text is trimmed.
///
/// # Example
/// ```
/// use roastulator::{
///     engine::complexity::score::Complexity,
///     error::RoastError,
///     roast::{FALLBACK_ROAST, roast_or_fallback},
/// };
///
/// let broken = |_: &str, _: &Complexity| -> Result<String, RoastError> {
///     Err(RoastError::Unavailable { reason: "no API key".into() })
/// };
/// assert_eq!(roast_or_fallback(&broken, "1+1", &Complexity::from_score(1)), FALLBACK_ROAST);
/// ```
pub fn roast_or_fallback(roaster: &dyn Roaster, expression: &str, complexity: &Complexity) -> String {
    match roaster.roast(expression, complexity) {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            warn!("Roaster returned an empty message for '{expression}'");
            FALLBACK_ROAST.to_string()
        },
        Err(e) => {
            warn!("Roaster failed for '{expression}': {e}");
            FALLBACK_ROAST.to_string()
        },
    }
}
