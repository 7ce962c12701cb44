//! k-out-of-n integer sampling with and without replacement.
//!
//! Draws `quantity` integers from the half-open range
//! `[start, end_exclusive)` and returns them in ascending order. With
//! replacement, draws are independent and duplicates are preserved.
//! Without replacement, a partial Fisher-Yates selection makes every
//! size-`quantity` subset of the domain equally likely, in O(n + quantity)
//! time with no rejection loop and no full-domain sort.

use rand::Rng;

use crate::error::ArgumentError;
use crate::random::{self, draw_uniform_with, partial_shuffle};
use crate::range;

/// Samples `quantity` integers from `[start, end_exclusive)` using `rng`.
///
/// The result is always sorted ascending, independent of draw order, so
/// callers get a deterministic, comparison-friendly shape on both paths.
///
/// With `with_replacement`, performs `quantity` independent uniform draws;
/// duplicates are expected and preserved. Without it, the values are
/// pairwise distinct, which requires
/// `quantity <= end_exclusive - start`.
///
/// A `quantity` of zero succeeds with an empty result on any valid range,
/// including an empty one.
///
/// # Errors
/// Returns `Err` if the range is malformed, or if sampling without
/// replacement and `quantity` exceeds the domain width, or if sampling
/// with replacement from an empty range with `quantity > 0`.
///
/// # Examples
/// ```
/// use u_sample::random::create_rng;
/// use u_sample::sample::sample_with;
///
/// let mut rng = create_rng(42);
/// let picked = sample_with(&mut rng, 3, 1, 11, false).unwrap();
/// assert_eq!(picked.len(), 3);
/// assert!(picked.windows(2).all(|w| w[0] < w[1]));
/// assert!(picked.iter().all(|v| (1..11).contains(v)));
/// ```
pub fn sample_with<R: Rng>(
    rng: &mut R,
    quantity: usize,
    start: i64,
    end_exclusive: i64,
    with_replacement: bool,
) -> Result<Vec<i64>, ArgumentError> {
    range::validate(start, end_exclusive)?;
    if with_replacement {
        sample_with_replacement(rng, quantity, start, end_exclusive)
    } else {
        sample_without_replacement(rng, quantity, start, end_exclusive)
    }
}

/// Samples `quantity` integers from `[start, end_exclusive)` using the
/// process-wide engine.
///
/// See [`sample_with`] for the contract.
///
/// # Errors
/// Returns `Err` under the same conditions as [`sample_with`].
pub fn sample(
    quantity: usize,
    start: i64,
    end_exclusive: i64,
    with_replacement: bool,
) -> Result<Vec<i64>, ArgumentError> {
    random::with_engine(|rng| sample_with(rng, quantity, start, end_exclusive, with_replacement))
}

fn sample_with_replacement<R: Rng>(
    rng: &mut R,
    quantity: usize,
    start: i64,
    end_exclusive: i64,
) -> Result<Vec<i64>, ArgumentError> {
    let mut values = Vec::with_capacity(quantity);
    for _ in 0..quantity {
        values.push(draw_uniform_with(rng, start, end_exclusive)?);
    }
    values.sort_unstable();
    Ok(values)
}

fn sample_without_replacement<R: Rng>(
    rng: &mut R,
    quantity: usize,
    start: i64,
    end_exclusive: i64,
) -> Result<Vec<i64>, ArgumentError> {
    let width = range::width(start, end_exclusive)?;
    if quantity > width {
        return Err(ArgumentError::InvalidArgument(format!(
            "cannot draw {quantity} distinct values from [{start},{end_exclusive})"
        )));
    }

    let mut pool = range::eager(start, end_exclusive)?;
    partial_shuffle(&mut pool, quantity, rng);
    pool.truncate(quantity);
    pool.sort_unstable();
    Ok(pool)
}

// ============================================================================
// Tests
// ============================================================================
