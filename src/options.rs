//! Labeled option pairs for selection widgets.
//!
//! Turns an integer range into the `{label, value}` pairs a picker
//! renders, one per integer, ascending.

use crate::error::ArgumentError;
use crate::range;

/// A display label paired with its submission value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledOption {
    /// Text shown to the user.
    pub label: String,
    /// Value submitted when the option is chosen.
    pub value: String,
}

/// Builds one option per integer in `[start, end_exclusive)`, ascending.
///
/// Both label and value are the integer's decimal rendering. An empty
/// range yields an empty list.
///
/// # Errors
/// Returns `Err` if the range is malformed.
///
/// # Examples
/// ```
/// use u_sample::options::of_range;
/// let opts = of_range(1, 4).unwrap();
/// let labels: Vec<&str> = opts.iter().map(|o| o.label.as_str()).collect();
/// assert_eq!(labels, ["1", "2", "3"]);
/// ```
pub fn of_range(start: i64, end_exclusive: i64) -> Result<Vec<LabeledOption>, ArgumentError> {
    Ok(range::lazy(start, end_exclusive)?
        .map(|i| LabeledOption {
            label: i.to_string(),
            value: i.to_string(),
        })
        .collect())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_range_labels_and_values() {
        let opts = of_range(1, 4).unwrap();
        assert_eq!(opts.len(), 3);
        for (opt, expected) in opts.iter().zip(["1", "2", "3"]) {
            assert_eq!(opt.label, expected);
            assert_eq!(opt.value, expected);
        }
    }

    #[test]
    fn test_of_range_negative_values() {
        let opts = of_range(-2, 1).unwrap();
        let labels: Vec<&str> = opts.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["-2", "-1", "0"]);
    }

    #[test]
    fn test_of_range_empty() {
        assert_eq!(of_range(5, 5).unwrap(), vec![]);
    }

    #[test]
    fn test_of_range_invalid() {
        assert!(of_range(5, 2).is_err());
    }
}
