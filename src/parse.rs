//! Strict coercion of strings and floats to integers and booleans.
//!
//! The parsers here accept only "normal-looking" literals: the forms a
//! person would type into a query parameter or form field. They are
//! deliberately narrower than `str::parse`, which also accepts a leading
//! `+` sign.

use crate::error::ArgumentError;

/// Largest magnitude at which every integer is exactly representable in
/// an `f64` (2^53 − 1).
const MAX_EXACT_F64_INT: f64 = 9_007_199_254_740_991.0;

/// Parses a strict decimal integer.
///
/// Accepts `"0"`, or an optional `-` followed by digits with no leading
/// zero. No whitespace, `+` sign, `-0`, decimal point, exponent, radix
/// prefix, or value outside the `i64` range.
///
/// # Examples
/// ```
/// use u_sample::parse::int_from_str;
/// assert_eq!(int_from_str("42"), Some(42));
/// assert_eq!(int_from_str("-17"), Some(-17));
/// assert_eq!(int_from_str("0"), Some(0));
/// assert_eq!(int_from_str("007"), None);
/// assert_eq!(int_from_str("-0"), None);
/// assert_eq!(int_from_str("1.5"), None);
/// ```
pub fn int_from_str(value: &str) -> Option<i64> {
    if value == "0" {
        return Some(0);
    }
    let digits = value.strip_prefix('-').unwrap_or(value);
    let mut chars = digits.chars();
    if !chars.next()?.is_ascii_digit() || digits.starts_with('0') {
        return None;
    }
    if !chars.all(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Parses a strict boolean: exactly `"true"` or `"false"`.
///
/// No whitespace, capitalization variants, or numeric forms.
///
/// # Examples
/// ```
/// use u_sample::parse::bool_from_str;
/// assert_eq!(bool_from_str("true"), Some(true));
/// assert_eq!(bool_from_str("false"), Some(false));
/// assert_eq!(bool_from_str("True"), None);
/// assert_eq!(bool_from_str("1"), None);
/// ```
pub fn bool_from_str(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Converts an `f64` to the integer it exactly represents.
///
/// # Errors
/// Returns `Err` if `value` is NaN or infinite, has a fractional part,
/// or lies outside ±(2^53 − 1), beyond which `f64` no longer represents
/// every integer exactly.
///
/// # Examples
/// ```
/// use u_sample::parse::int_from_f64;
/// assert_eq!(int_from_f64(3.0).unwrap(), 3);
/// assert_eq!(int_from_f64(-0.0).unwrap(), 0);
/// assert!(int_from_f64(3.5).is_err());
/// assert!(int_from_f64(f64::NAN).is_err());
/// ```
pub fn int_from_f64(value: f64) -> Result<i64, ArgumentError> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_EXACT_F64_INT {
        return Err(ArgumentError::InvalidArgument(format!(
            "{value} is not an integer"
        )));
    }
    Ok(value as i64)
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn int_from_str_round_trips_display(value in any::<i64>()) {
            prop_assert_eq!(int_from_str(&value.to_string()), Some(value));
        }

        #[test]
        fn int_from_f64_round_trips_exact_integers(
            value in -9_007_199_254_740_991_i64..=9_007_199_254_740_991,
        ) {
            prop_assert_eq!(int_from_f64(value as f64).unwrap(), value);
        }

        #[test]
        fn int_from_f64_rejects_offset_fractions(value in -1_000_000_i64..1_000_000) {
            prop_assert!(int_from_f64(value as f64 + 0.5).is_err());
        }
    }
}
