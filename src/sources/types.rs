//! Shared helpers for the source output models.

use rand::{Rng, rngs::StdRng};

/// Utility function to draw a uniform multiplier from a half-open range.
///
/// # Arguments
///
/// * `rng` - Random number generator
/// * `lo` - Lower bound (inclusive)
/// * `hi` - Upper bound (exclusive)
///
/// # Returns
///
/// A value uniformly distributed in `[lo, hi)`. Returns `lo` when the range
/// is empty or inverted.
pub fn uniform_factor(rng: &mut StdRng, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        return lo;
    }
    lo + rng.random::<f64>() * (hi - lo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn factor_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let f = uniform_factor(&mut rng, 0.8, 1.2);
            assert!((0.8..1.2).contains(&f));
        }
    }

    #[test]
    fn degenerate_range_returns_lower_bound() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(uniform_factor(&mut rng, 1.0, 1.0), 1.0);
        assert_eq!(uniform_factor(&mut rng, 2.0, 1.0), 2.0);
    }

    #[test]
    fn deterministic_with_same_seed() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(
                uniform_factor(&mut rng1, 0.6, 1.4),
                uniform_factor(&mut rng2, 0.6, 1.4)
            );
        }
    }
}
