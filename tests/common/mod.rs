//! Shared helpers for integration tests.

use chrono::{DateTime, Local, TimeZone};
use plant_sim::config::PlantConfig;
use plant_sim::sim::generator::ReadingGenerator;

/// Baseline configuration used across integration tests.
pub fn baseline_config() -> PlantConfig {
    PlantConfig::baseline()
}

/// Generator over the baseline plant with an explicit seed.
pub fn seeded_generator(seed: u64) -> ReadingGenerator {
    ReadingGenerator::with_seed(&baseline_config(), seed)
}

/// A fixed local timestamp at the given hour of day.
pub fn fixed_time(hour: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2026, 8, 24, hour, 0, 0)
        .single()
        .expect("fixed test timestamp should be unambiguous")
}
