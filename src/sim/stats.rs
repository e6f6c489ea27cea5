//! Daily aggregate statistics derived from an hourly series.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::EnergyReading;

/// Aggregate statistics for one calendar day of hourly readings.
///
/// Recomputed wholesale from a series on every call; there is no
/// incremental update path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStats {
    /// Calendar day the series belongs to.
    pub date: NaiveDate,
    /// Sum of hourly total production (kWh, one reading per hour).
    pub total_production_kwh: u32,
    /// Highest hourly total production (kW).
    pub peak_output_kw: u32,
    /// Peak output as a percentage of plant capacity, clamped to 100.
    pub efficiency_pct: u8,
}

impl DailyStats {
    /// Computes statistics from a complete hourly series.
    ///
    /// Total production counts solar, wind, and discharging battery output;
    /// a charging battery contributes nothing. Efficiency is the peak hourly
    /// total as a percentage of `capacity_kw`, rounded and clamped to 100.
    ///
    /// # Arguments
    ///
    /// * `date` - Calendar day to stamp the statistics with
    /// * `series` - Hourly readings (one per hour)
    /// * `capacity_kw` - Assumed plant capacity for the efficiency ratio
    pub fn from_series(date: NaiveDate, series: &[EnergyReading], capacity_kw: u32) -> Self {
        let total: u32 = series.iter().map(EnergyReading::total_kw).sum();
        let peak = series.iter().map(EnergyReading::total_kw).max().unwrap_or(0);

        let efficiency = if capacity_kw > 0 {
            let pct = (f64::from(peak) / f64::from(capacity_kw) * 100.0).round() as u32;
            pct.min(100) as u8
        } else {
            0
        };

        Self {
            date,
            total_production_kwh: total,
            peak_output_kw: peak,
            efficiency_pct: efficiency,
        }
    }
}

impl fmt::Display for DailyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Daily Stats ({}) ---", self.date)?;
        writeln!(f, "Total production:  {} kWh", self.total_production_kwh)?;
        writeln!(f, "Peak output:       {} kW", self.peak_output_kw)?;
        write!(f, "Efficiency:        {}%", self.efficiency_pct)
    }
}
