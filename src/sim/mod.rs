//! Reading generation, data model, and daily statistics.

pub mod generator;
/// Daily aggregate statistics.
pub mod stats;
pub mod types;

// Re-export the main types for convenience
pub use generator::ReadingGenerator;
pub use stats::DailyStats;
pub use types::EnergyReading;
pub use types::EnergySource;
pub use types::PlantStatus;
