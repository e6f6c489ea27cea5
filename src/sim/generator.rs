//! The energy reading generator, the plant's only source of data.
//!
//! Three operations — a current reading, a rolling hourly series, and daily
//! statistics — all pure functions of wall-clock time and the owned RNGs.
//! The generator holds no state between calls beyond those RNGs, so every
//! call draws fresh noise.

use chrono::{DateTime, Duration, Local, Timelike};

use crate::config::PlantConfig;
use crate::sim::stats::DailyStats;
use crate::sim::types::{EnergyReading, PlantStatus};
use crate::sources::{BatteryBank, SolarArray, WindFarm};

/// Seed offset for the wind farm RNG to avoid correlation with the solar
/// array.
const WIND_SEED_OFFSET: u64 = 57;

/// Synthesizes plausible plant readings from the configured source models.
#[derive(Debug, Clone)]
pub struct ReadingGenerator {
    solar: SolarArray,
    wind: WindFarm,
    battery: BatteryBank,
    capacity_kw: u32,
}

impl ReadingGenerator {
    /// Builds a generator from a validated configuration with an explicit
    /// seed, for reproducible output.
    pub fn with_seed(cfg: &PlantConfig, seed: u64) -> Self {
        let s = &cfg.solar;
        let solar = SolarArray::new(
            s.peak_kw,
            s.sunrise_hour,
            s.sunset_hour,
            s.peak_hour,
            s.cloud_min,
            s.cloud_max,
            seed,
        );

        let w = &cfg.wind;
        let wind = WindFarm::new(
            w.base_kw,
            w.var_min,
            w.var_max,
            seed.wrapping_add(WIND_SEED_OFFSET),
        );

        let b = &cfg.battery;
        let battery = BatteryBank::new(cfg.plant.demand_kw, b.max_charge_kw, b.max_discharge_kw);

        Self {
            solar,
            wind,
            battery,
            capacity_kw: cfg.plant.capacity_kw,
        }
    }

    /// Builds a generator from a validated configuration using the seed the
    /// configuration carries.
    pub fn from_config(cfg: &PlantConfig) -> Self {
        Self::with_seed(cfg, cfg.plant.seed)
    }

    /// Generates a reading for the given point in time.
    ///
    /// Solar depends on the hour of day, wind on nothing, and battery on the
    /// other two versus plant demand.
    pub fn reading_at(&mut self, timestamp: DateTime<Local>) -> EnergyReading {
        let solar_kw = self.solar.output_kw(timestamp.hour());
        let wind_kw = self.wind.output_kw();
        let battery_kw = self.battery.output_kw(solar_kw, wind_kw);
        EnergyReading {
            timestamp,
            solar_kw,
            wind_kw,
            battery_kw,
        }
    }

    /// Generates a reading for the current wall-clock time.
    pub fn current_reading(&mut self) -> EnergyReading {
        self.reading_at(Local::now())
    }

    /// Generates one reading per past hour ending at `end`, oldest first.
    ///
    /// Returns exactly `hours_back` readings with consecutive timestamps one
    /// hour apart, the last one at `end`. Noise is drawn fresh per hour, so
    /// two calls with identical arguments produce different readings.
    pub fn series_ending_at(
        &mut self,
        end: DateTime<Local>,
        hours_back: usize,
    ) -> Vec<EnergyReading> {
        let mut series = Vec::with_capacity(hours_back);
        for i in (0..hours_back).rev() {
            let ts = end - Duration::hours(i as i64);
            series.push(self.reading_at(ts));
        }
        series
    }

    /// Generates the rolling hourly series ending now, oldest first.
    pub fn hourly_series(&mut self, hours_back: usize) -> Vec<EnergyReading> {
        self.series_ending_at(Local::now(), hours_back)
    }

    /// Derives daily statistics from a fresh 24-hour series ending at `end`.
    ///
    /// The internal series is drawn independently of any series the caller
    /// already holds; callers that need stats consistent with a displayed
    /// series should use [`DailyStats::from_series`] on that series instead.
    pub fn daily_stats_at(&mut self, end: DateTime<Local>) -> DailyStats {
        let series = self.series_ending_at(end, 24);
        DailyStats::from_series(end.date_naive(), &series, self.capacity_kw)
    }

    /// Derives daily statistics from a fresh 24-hour series ending now.
    pub fn daily_stats(&mut self) -> DailyStats {
        self.daily_stats_at(Local::now())
    }

    /// Summarizes plant liveness from a fresh current reading.
    pub fn plant_status(&mut self) -> PlantStatus {
        let reading = self.current_reading();
        PlantStatus {
            online: true,
            last_update: reading.timestamp,
            current_output_kw: reading.total_kw(),
        }
    }

    /// Assumed plant capacity used for the efficiency ratio (kW).
    pub fn capacity_kw(&self) -> u32 {
        self.capacity_kw
    }
}
