use crate::sources::types::uniform_factor;
use rand::{SeedableRng, rngs::StdRng};

/// A solar array that models output with a bell-shaped daylight curve.
///
/// Output ramps linearly from zero at sunrise up to `peak_kw` at `peak_hour`
/// and back down to zero at sunset, then is scaled by a uniform random cloud
/// factor to simulate changing weather. Hours outside the daylight window
/// produce nothing.
#[derive(Debug, Clone)]
pub struct SolarArray {
    /// Nameplate peak output in kilowatts under a cloud factor of 1.0.
    pub peak_kw: f64,

    /// First hour of the day with any production (inclusive).
    pub sunrise_hour: u32,

    /// Last hour of the day with any production (inclusive).
    pub sunset_hour: u32,

    /// Hour of the day where the curve peaks.
    pub peak_hour: u32,

    /// Lower bound of the uniform cloud factor.
    pub cloud_min: f64,

    /// Upper bound of the uniform cloud factor.
    pub cloud_max: f64,

    /// Hours from sunrise to the peak of the curve.
    ramp_hours: f64,

    /// Random number generator for the cloud factor.
    rng: StdRng,
}

impl SolarArray {
    /// Creates a new solar array with the specified parameters.
    ///
    /// # Arguments
    ///
    /// * `peak_kw` - Nameplate peak output in kilowatts
    /// * `sunrise_hour` - First producing hour of the day (inclusive)
    /// * `sunset_hour` - Last producing hour of the day (inclusive)
    /// * `peak_hour` - Hour of the day where the curve peaks
    /// * `cloud_min` - Lower bound of the uniform cloud factor
    /// * `cloud_max` - Upper bound of the uniform cloud factor
    /// * `seed` - Random seed for reproducible cloud noise
    ///
    /// # Panics
    ///
    /// Panics if the daylight window is not `sunrise < peak < sunset`, if
    /// `sunset_hour > 23`, or if the cloud factor range is inverted or
    /// negative.
    pub fn new(
        peak_kw: f64,
        sunrise_hour: u32,
        sunset_hour: u32,
        peak_hour: u32,
        cloud_min: f64,
        cloud_max: f64,
        seed: u64,
    ) -> Self {
        assert!(sunrise_hour < peak_hour && peak_hour < sunset_hour);
        assert!(sunset_hour <= 23);
        assert!(cloud_min >= 0.0 && cloud_min <= cloud_max);
        Self {
            peak_kw: peak_kw.max(0.0),
            sunrise_hour,
            sunset_hour,
            peak_hour,
            cloud_min,
            cloud_max,
            ramp_hours: f64::from(peak_hour - sunrise_hour),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Fraction of peak output at the given hour, before cloud noise.
    ///
    /// Zero outside the daylight window and clamped to `[0, 1]` inside it,
    /// so an asymmetric window never goes negative on the long side.
    fn shape(&self, hour: u32) -> f64 {
        if hour < self.sunrise_hour || hour > self.sunset_hour {
            return 0.0;
        }
        let offset = f64::from(hour.abs_diff(self.peak_hour));
        (1.0 - offset / self.ramp_hours).clamp(0.0, 1.0)
    }

    /// Returns the rounded output in kilowatts at the given hour of day.
    ///
    /// Draws a fresh cloud factor on every call, so repeated calls for the
    /// same hour differ.
    pub fn output_kw(&mut self, hour: u32) -> u32 {
        let shape = self.shape(hour);
        if shape <= 0.0 {
            return 0;
        }
        let cloud = uniform_factor(&mut self.rng, self.cloud_min, self.cloud_max);
        (self.peak_kw * shape * cloud).round() as u32
    }
}
