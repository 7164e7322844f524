/// Complexity levels.
///
/// Declares the five ordered difficulty labels and the score thresholds
/// that select them.
pub mod level;
/// Complexity scoring.
///
/// Combines a structural walk over the tree with surface features of the
/// original text into a single integer score.
pub mod score;
