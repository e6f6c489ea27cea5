use crate::sources::types::uniform_factor;
use rand::{SeedableRng, rngs::StdRng};

/// A wind farm that models output as a noisy constant, independent of the
/// hour of day.
///
/// Each call scales `base_kw` by a uniform variability factor, so output
/// swings between `base_kw * var_min` and `base_kw * var_max` with no
/// temporal correlation between calls.
#[derive(Debug, Clone)]
pub struct WindFarm {
    /// Nominal output in kilowatts at a variability factor of 1.0.
    pub base_kw: f64,

    /// Lower bound of the uniform variability factor.
    pub var_min: f64,

    /// Upper bound of the uniform variability factor.
    pub var_max: f64,

    /// Random number generator for the variability factor.
    rng: StdRng,
}

impl WindFarm {
    /// Creates a new wind farm with the specified parameters.
    ///
    /// # Panics
    ///
    /// Panics if the variability range is inverted or negative.
    pub fn new(base_kw: f64, var_min: f64, var_max: f64, seed: u64) -> Self {
        assert!(var_min >= 0.0 && var_min <= var_max);
        Self {
            base_kw: base_kw.max(0.0),
            var_min,
            var_max,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns the rounded output in kilowatts, drawing fresh noise.
    pub fn output_kw(&mut self) -> u32 {
        let variability = uniform_factor(&mut self.rng, self.var_min, self.var_max);
        (self.base_kw * variability).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_wind_farm() {
        let w = WindFarm::new(80.0, 0.6, 1.4, 42);
        assert_eq!(w.base_kw, 80.0);
        assert_eq!(w.var_min, 0.6);
        assert_eq!(w.var_max, 1.4);
    }

    #[test]
    fn negative_base_clamped_to_zero() {
        let mut w = WindFarm::new(-10.0, 0.6, 1.4, 42);
        assert_eq!(w.output_kw(), 0);
    }

    #[test]
    #[should_panic]
    fn inverted_variability_range_panics() {
        WindFarm::new(80.0, 1.4, 0.6, 42);
    }

    #[test]
    fn output_within_variability_bounds() {
        let mut w = WindFarm::new(80.0, 0.6, 1.4, 42);
        for _ in 0..1000 {
            let kw = w.output_kw();
            assert!((48..=112).contains(&kw), "wind output {kw} out of bounds");
        }
    }

    #[test]
    fn fixed_variability_is_exact() {
        let mut w = WindFarm::new(80.0, 1.0, 1.0, 42);
        assert_eq!(w.output_kw(), 80);
    }

    #[test]
    fn deterministic_with_same_seed() {
        let mut a = WindFarm::new(80.0, 0.6, 1.4, 42);
        let mut b = WindFarm::new(80.0, 0.6, 1.4, 42);
        for _ in 0..50 {
            assert_eq!(a.output_kw(), b.output_kw());
        }
    }

    #[test]
    fn successive_calls_vary() {
        let mut w = WindFarm::new(80.0, 0.6, 1.4, 42);
        let first = w.output_kw();
        let varied = (0..20).any(|_| w.output_kw() != first);
        assert!(varied);
    }
}
