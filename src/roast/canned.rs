use crate::{
    engine::complexity::{level::ComplexityLevel, score::Complexity},
    error::RoastError,
    roast::Roaster,
};

/// A roaster that needs no network or credentials.
///
/// It speaks as a permanently unimpressed parent and picks its line by
/// complexity level alone. It never fails.
///
/// # Example
/// ```
/// use roastulator::{
///     engine::complexity::score::Complexity,
///     roast::{CannedRoaster, Roaster},
/// };
///
/// let roast = CannedRoaster.roast("1 + 1", &Complexity::from_score(1)).unwrap();
/// assert!(roast.contains("doctor"));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct CannedRoaster;

impl CannedRoaster {
    /// The message used for `level`.
    #[must_use]
    pub const fn message(level: ComplexityLevel) -> &'static str {
        match level {
            ComplexityLevel::VerySimple => {
                "A baby could do this. Your cousin is already a doctor and you need a calculator for this?"
            },
            ComplexityLevel::Easy => {
                "Elementary school math. Your younger cousin did this in his head while practicing violin."
            },
            ComplexityLevel::Moderate => {
                "Okay, you did the bare minimum. Don't expect a reward for the bare minimum."
            },
            ComplexityLevel::Hard => {
                "Very big math. And what will you do with it? Still not a doctor."
            },
            ComplexityLevel::VeryHard => {
                "You solved this? By yourself? Who helped you? Tell me the truth."
            },
        }
    }
}

impl Roaster for CannedRoaster {
    fn roast(&self, _expression: &str, complexity: &Complexity) -> Result<String, RoastError> {
        Ok(Self::message(complexity.level).to_string())
    }
}
