//! Random number generation and uniform integer draws.
//!
//! Provides seeded RNG construction, a process-wide engine for callers
//! that do not manage their own, uniform draws over half-open integer
//! ranges, and a partial Fisher-Yates shuffle.
//!
//! # Reproducibility
//!
//! For reproducible sequences, use [`create_rng`] with a fixed seed and
//! the `*_with` variants. The underlying algorithm (SmallRng) is
//! deterministic for a given seed on the same platform. The process-wide
//! engine behind [`draw_uniform`] is seeded exactly once, at first use,
//! from wall-clock time mixed with an OS-entropy draw; it is never
//! reseeded and is not reproducible across runs.

use std::sync::{LazyLock, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::ArgumentError;
use crate::range;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use u_sample::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Process-wide engine, initialized exactly once at first use.
///
/// Seeded from wall-clock nanoseconds XOR one OS-entropy draw. All access
/// goes through [`with_engine`], which serializes callers on the mutex.
static ENGINE: LazyLock<Mutex<SmallRng>> = LazyLock::new(|| {
    let clock = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default();
    let entropy: u64 = rand::random();
    Mutex::new(create_rng(clock ^ entropy))
});

/// Runs `f` with exclusive access to the process-wide engine.
pub(crate) fn with_engine<T>(f: impl FnOnce(&mut SmallRng) -> T) -> T {
    let mut engine = ENGINE.lock().expect("engine mutex poisoned");
    f(&mut engine)
}

/// Draws one integer uniformly from `[start, end_exclusive)` using `rng`.
///
/// Each eligible integer is returned with probability
/// `1 / (end_exclusive - start)`.
///
/// # Errors
/// Returns `Err` if the range is malformed or empty.
///
/// # Examples
/// ```
/// use u_sample::random::{create_rng, draw_uniform_with};
/// let mut rng = create_rng(42);
/// let v = draw_uniform_with(&mut rng, 1, 11).unwrap();
/// assert!((1..11).contains(&v));
/// ```
pub fn draw_uniform_with<R: Rng>(
    rng: &mut R,
    start: i64,
    end_exclusive: i64,
) -> Result<i64, ArgumentError> {
    range::validate(start, end_exclusive)?;
    if start == end_exclusive {
        return Err(ArgumentError::InvalidArgument(format!(
            "[{start},{end_exclusive}) is empty"
        )));
    }
    Ok(rng.random_range(start..end_exclusive))
}

/// Draws one integer uniformly from `[start, end_exclusive)` using the
/// process-wide engine.
///
/// # Errors
/// Returns `Err` if the range is malformed or empty.
pub fn draw_uniform(start: i64, end_exclusive: i64) -> Result<i64, ArgumentError> {
    with_engine(|rng| draw_uniform_with(rng, start, end_exclusive))
}

/// Partial Fisher-Yates (Durstenfeld) shuffle of the first `k` positions.
///
/// After the call, `slice[..k]` holds `k` elements selected uniformly
/// without replacement from the whole slice, in uniform order; the
/// remaining positions hold the elements not selected. A `k` of
/// `slice.len()` or more degenerates to a full shuffle.
///
/// # Algorithm
/// Forward variant of the Durstenfeld shuffle: for each `i < k`, swap
/// `slice[i]` with `slice[j]` for `j` drawn uniformly from `[i, n)`.
/// Stopping after `k` swaps leaves the first `k` positions with the same
/// joint distribution a full shuffle would give them.
///
/// Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.
///
/// # Complexity
/// Time: O(k), Space: O(1) (in-place)
///
/// # Examples
/// ```
/// use u_sample::random::{create_rng, partial_shuffle};
/// let mut v = vec![1, 2, 3, 4, 5];
/// let mut rng = create_rng(42);
/// partial_shuffle(&mut v, 2, &mut rng);
/// // v[..2] is a uniform 2-element selection; v overall is a permutation
/// v.sort();
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn partial_shuffle<T, R: Rng>(slice: &mut [T], k: usize, rng: &mut R) {
    let n = slice.len();
    if n <= 1 {
        return;
    }
    for i in 0..k.min(n) {
        let j = rng.random_range(i..n);
        slice.swap(i, j);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rng_deterministic() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let vals1: Vec<f64> = (0..10).map(|_| rng1.random()).collect();
        let vals2: Vec<f64> = (0..10).map(|_| rng2.random()).collect();
        assert_eq!(vals1, vals2);
    }

    #[test]
    fn test_draw_uniform_with_stays_in_range() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let v = draw_uniform_with(&mut rng, -5, 5).unwrap();
            assert!((-5..5).contains(&v));
        }
    }

    #[test]
    fn test_draw_uniform_with_single_value_range() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            assert_eq!(draw_uniform_with(&mut rng, 7, 8).unwrap(), 7);
        }
    }

    #[test]
    fn test_draw_uniform_with_empty_range() {
        let mut rng = create_rng(0);
        assert!(draw_uniform_with(&mut rng, 3, 3).is_err());
    }

    #[test]
    fn test_draw_uniform_with_invalid_range() {
        let mut rng = create_rng(0);
        assert!(draw_uniform_with(&mut rng, 5, 2).is_err());
    }

    #[test]
    fn test_draw_uniform_with_deterministic() {
        let mut rng1 = create_rng(99);
        let mut rng2 = create_rng(99);
        let draws1: Vec<i64> = (0..50)
            .map(|_| draw_uniform_with(&mut rng1, 0, 100).unwrap())
            .collect();
        let draws2: Vec<i64> = (0..50)
            .map(|_| draw_uniform_with(&mut rng2, 0, 100).unwrap())
            .collect();
        assert_eq!(draws1, draws2);
    }

    #[test]
    fn test_draw_uniform_with_frequency() {
        // 100k draws over [0, 10): expected 10000 per value, sd ≈ 95
        let mut rng = create_rng(42);
        let mut counts = [0_u32; 10];
        for _ in 0..100_000 {
            let v = draw_uniform_with(&mut rng, 0, 10).unwrap();
            counts[v as usize] += 1;
        }
        for (value, &count) in counts.iter().enumerate() {
            assert!(
                (9_000..=11_000).contains(&count),
                "value {value} drawn {count} times, expected ~10000"
            );
        }
    }

    #[test]
    fn test_draw_uniform_shared_engine() {
        for _ in 0..100 {
            let v = draw_uniform(0, 10).unwrap();
            assert!((0..10).contains(&v));
        }
        assert!(draw_uniform(3, 3).is_err());
    }

    #[test]
    fn test_partial_shuffle_preserves_elements() {
        let mut v = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut rng = create_rng(123);
        partial_shuffle(&mut v, 4, &mut rng);
        v.sort();
        assert_eq!(v, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_partial_shuffle_zero_k_is_noop() {
        let mut v = vec![1, 2, 3];
        let mut rng = create_rng(0);
        partial_shuffle(&mut v, 0, &mut rng);
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn test_partial_shuffle_k_beyond_len() {
        let mut v = vec![1, 2, 3];
        let mut rng = create_rng(0);
        partial_shuffle(&mut v, 10, &mut rng);
        v.sort();
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn test_partial_shuffle_empty() {
        let mut v: Vec<i32> = vec![];
        let mut rng = create_rng(0);
        partial_shuffle(&mut v, 3, &mut rng); // should not panic
    }

    #[test]
    fn test_partial_shuffle_full_k_actually_shuffles() {
        // With 10 elements, probability of identity permutation is 1/10! ≈ 2.8e-7
        let original = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut v = original.clone();
        let mut rng = create_rng(42);
        let n = v.len();
        partial_shuffle(&mut v, n, &mut rng);
        assert_ne!(v, original, "full shuffle should change order (probabilistic)");
    }
}
