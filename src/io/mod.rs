//! File output for generated series.

/// CSV export of hourly readings.
pub mod export;
