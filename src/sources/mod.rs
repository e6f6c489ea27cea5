//! Output models for the plant's energy sources.

/// Demand-following battery dispatch model.
pub mod battery;
/// Bell-curve solar generation model.
pub mod solar;
pub mod types;
/// Noisy-constant wind generation model.
pub mod wind;

// Re-export the main types for convenience
pub use battery::BatteryBank;
pub use solar::SolarArray;
pub use wind::WindFarm;
