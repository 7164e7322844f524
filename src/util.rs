/// Numeric formatting helpers.
///
/// This module renders evaluation results for display. Integral values that
/// an `f64` represents exactly are printed without a fractional part, so
/// `2 + 2` shows as `4` rather than `4.0`.
pub mod num;
