//! Simulated renewable-energy plant telemetry for a live dashboard.
//!
//! The core is [`sim::generator::ReadingGenerator`], which synthesizes a
//! current reading, a rolling hourly series, and daily aggregate statistics
//! from deterministic daylight/wind shapes plus uniform random noise.

/// Plant configuration, presets, and validation.
pub mod config;
pub mod io;
/// Reading generator, data model, and daily statistics.
pub mod sim;
/// Per-source output models (solar, wind, battery).
pub mod sources;
#[cfg(feature = "tui")]
pub mod tui;
