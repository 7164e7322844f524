/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: f64 = 9_007_199_254_740_991.0;

/// Returns `true` if `value` is a whole number that an `f64` holds exactly.
///
/// ## Example
/// ```
/// use roastulator::util::num::{MAX_SAFE_INT, is_safe_integer};
///
/// assert!(is_safe_integer(42.0));
/// assert!(is_safe_integer(-7.0));
/// assert!(!is_safe_integer(0.5));
/// assert!(!is_safe_integer(MAX_SAFE_INT * 2.0));
/// assert!(!is_safe_integer(f64::INFINITY));
/// ```
#[must_use]
pub fn is_safe_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INT
}

/// Formats an evaluation result for display.
///
/// - Safe integers print without a fractional part (`14`).
/// - Other finite values use the shortest representation that round-trips
///   (`0.1`, `1e300`).
/// - Infinities print as `inf` / `-inf`, NaN as `NaN`.
/// - Negative zero prints as `0`.
///
/// ## Example
/// ```
/// use roastulator::util::num::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(f64::INFINITY), "inf");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_number(value: f64) -> String {
    if is_safe_integer(value) {
        // Exact: the magnitude is at most 2^53 - 1.
        return format!("{}", value as i64);
    }
    if value.is_finite() && value.abs() >= MAX_SAFE_INT {
        return format!("{value:e}");
    }
    format!("{value}")
}
