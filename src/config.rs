//! TOML-based plant configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level plant configuration parsed from TOML.
///
/// All fields have defaults matching the baseline plant. Load from TOML with
/// [`PlantConfig::from_toml_file`] or use [`PlantConfig::baseline`] for the
/// built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlantConfig {
    /// Plant-wide parameters.
    #[serde(default)]
    pub plant: PlantSection,
    /// Solar array parameters.
    #[serde(default)]
    pub solar: SolarSection,
    /// Wind farm parameters.
    #[serde(default)]
    pub wind: WindSection,
    /// Battery dispatch parameters.
    #[serde(default)]
    pub battery: BatterySection,
}

/// Plant-wide parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlantSection {
    /// Fixed plant demand (kW).
    pub demand_kw: u32,
    /// Assumed total capacity for the efficiency ratio (kW).
    pub capacity_kw: u32,
    /// Hours of history in the rolling series (must be > 0).
    pub history_hours: usize,
    /// Dashboard refresh interval in seconds (must be > 0).
    pub refresh_secs: u64,
    /// Master random seed.
    pub seed: u64,
}

impl Default for PlantSection {
    fn default() -> Self {
        Self {
            demand_kw: 120,
            capacity_kw: 200,
            history_hours: 24,
            refresh_secs: 5,
            seed: 42,
        }
    }
}

/// Solar array parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolarSection {
    /// Nameplate peak output (kW).
    pub peak_kw: f64,
    /// First producing hour of the day (inclusive).
    pub sunrise_hour: u32,
    /// Last producing hour of the day (inclusive).
    pub sunset_hour: u32,
    /// Hour of the day where the curve peaks.
    pub peak_hour: u32,
    /// Lower bound of the uniform cloud factor.
    pub cloud_min: f64,
    /// Upper bound of the uniform cloud factor.
    pub cloud_max: f64,
}

impl Default for SolarSection {
    fn default() -> Self {
        Self {
            peak_kw: 150.0,
            sunrise_hour: 6,
            sunset_hour: 18,
            peak_hour: 12,
            cloud_min: 0.8,
            cloud_max: 1.2,
        }
    }
}

/// Wind farm parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindSection {
    /// Nominal output (kW).
    pub base_kw: f64,
    /// Lower bound of the uniform variability factor.
    pub var_min: f64,
    /// Upper bound of the uniform variability factor.
    pub var_max: f64,
}

impl Default for WindSection {
    fn default() -> Self {
        Self {
            base_kw: 80.0,
            var_min: 0.6,
            var_max: 1.4,
        }
    }
}

/// Battery dispatch parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatterySection {
    /// Maximum charging power (kW, positive magnitude).
    pub max_charge_kw: u32,
    /// Maximum discharging power (kW, positive magnitude).
    pub max_discharge_kw: u32,
}

impl Default for BatterySection {
    fn default() -> Self {
        Self {
            max_charge_kw: 50,
            max_discharge_kw: 40,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"solar.peak_hour"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl PlantConfig {
    /// Returns the baseline plant (same parameters as the section defaults).
    pub fn baseline() -> Self {
        Self {
            plant: PlantSection::default(),
            solar: SolarSection::default(),
            wind: WindSection::default(),
            battery: BatterySection::default(),
        }
    }

    /// Returns the overcast preset: heavy cloud, solar rarely near peak.
    pub fn overcast() -> Self {
        Self {
            solar: SolarSection {
                cloud_min: 0.3,
                cloud_max: 0.7,
                ..SolarSection::default()
            },
            ..Self::baseline()
        }
    }

    /// Returns the high-wind preset: larger wind farm carrying the plant.
    pub fn high_wind() -> Self {
        Self {
            wind: WindSection {
                base_kw: 140.0,
                var_min: 0.8,
                var_max: 1.3,
            },
            battery: BatterySection {
                max_charge_kw: 80,
                ..BatterySection::default()
            },
            ..Self::baseline()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "overcast", "high_wind"];

    /// Loads a plant configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "overcast" => Ok(Self::overcast()),
            "high_wind" => Ok(Self::high_wind()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a plant configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a plant configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown
    /// fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let p = &self.plant;

        if p.capacity_kw == 0 {
            errors.push(ConfigError {
                field: "plant.capacity_kw".into(),
                message: "must be > 0".into(),
            });
        }
        if p.history_hours == 0 {
            errors.push(ConfigError {
                field: "plant.history_hours".into(),
                message: "must be > 0".into(),
            });
        }
        if p.refresh_secs == 0 {
            errors.push(ConfigError {
                field: "plant.refresh_secs".into(),
                message: "must be > 0".into(),
            });
        }

        let sol = &self.solar;
        if sol.sunrise_hour >= sol.peak_hour {
            errors.push(ConfigError {
                field: "solar.sunrise_hour".into(),
                message: "must be < solar.peak_hour".into(),
            });
        }
        if sol.peak_hour >= sol.sunset_hour {
            errors.push(ConfigError {
                field: "solar.peak_hour".into(),
                message: "must be < solar.sunset_hour".into(),
            });
        }
        if sol.sunset_hour > 23 {
            errors.push(ConfigError {
                field: "solar.sunset_hour".into(),
                message: "must be <= 23".into(),
            });
        }
        if sol.cloud_min < 0.0 || sol.cloud_min > sol.cloud_max {
            errors.push(ConfigError {
                field: "solar.cloud_min".into(),
                message: "must be >= 0 and <= solar.cloud_max".into(),
            });
        }

        let w = &self.wind;
        if w.var_min < 0.0 || w.var_min > w.var_max {
            errors.push(ConfigError {
                field: "wind.var_min".into(),
                message: "must be >= 0 and <= wind.var_max".into(),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_preset_valid() {
        let cfg = PlantConfig::baseline();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "baseline should be valid: {errors:?}");
    }

    #[test]
    fn from_preset_baseline() {
        let cfg = PlantConfig::from_preset("baseline");
        assert!(cfg.is_ok());
    }

    #[test]
    fn from_preset_unknown() {
        let err = PlantConfig::from_preset("nonexistent");
        assert!(err.is_err());
        let e = err.unwrap_err();
        assert!(e.message.contains("unknown preset"));
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[plant]
demand_kw = 100
capacity_kw = 300
history_hours = 48
refresh_secs = 2
seed = 99

[solar]
peak_kw = 200.0
sunrise_hour = 5
sunset_hour = 19
peak_hour = 12
cloud_min = 0.5
cloud_max = 1.0

[wind]
base_kw = 120.0
var_min = 0.7
var_max = 1.2

[battery]
max_charge_kw = 60
max_discharge_kw = 30
"#;
        let cfg = PlantConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.plant.seed), Some(99));
        assert_eq!(cfg.as_ref().map(|c| c.solar.peak_kw), Some(200.0));
        assert_eq!(cfg.as_ref().map(|c| c.battery.max_charge_kw), Some(60));
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[plant]
demand_kw = 120
bogus_field = true
"#;
        let result = PlantConfig::from_toml_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[plant]
seed = 7
"#;
        let cfg = PlantConfig::from_toml_str(toml);
        assert!(cfg.is_ok());
        let cfg = cfg.ok();
        // seed overridden
        assert_eq!(cfg.as_ref().map(|c| c.plant.seed), Some(7));
        // demand kept default
        assert_eq!(cfg.as_ref().map(|c| c.plant.demand_kw), Some(120));
        // solar kept default
        assert_eq!(cfg.as_ref().map(|c| c.solar.peak_kw), Some(150.0));
    }

    #[test]
    fn validation_catches_zero_capacity() {
        let mut cfg = PlantConfig::baseline();
        cfg.plant.capacity_kw = 0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "plant.capacity_kw"));
    }

    #[test]
    fn validation_catches_zero_refresh() {
        let mut cfg = PlantConfig::baseline();
        cfg.plant.refresh_secs = 0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "plant.refresh_secs"));
    }

    #[test]
    fn validation_catches_peak_outside_window() {
        let mut cfg = PlantConfig::baseline();
        cfg.solar.peak_hour = 20;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "solar.peak_hour"));
    }

    #[test]
    fn validation_catches_inverted_cloud_range() {
        let mut cfg = PlantConfig::baseline();
        cfg.solar.cloud_min = 1.5;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "solar.cloud_min"));
    }

    #[test]
    fn validation_catches_inverted_wind_range() {
        let mut cfg = PlantConfig::baseline();
        cfg.wind.var_min = 2.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "wind.var_min"));
    }

    #[test]
    fn all_presets_are_valid() {
        for name in PlantConfig::PRESETS {
            let cfg = PlantConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
        }
    }

    #[test]
    fn overcast_has_darker_skies() {
        let base = PlantConfig::baseline();
        let overcast = PlantConfig::overcast();
        assert!(overcast.solar.cloud_max < base.solar.cloud_max);
    }

    #[test]
    fn high_wind_has_larger_farm() {
        let base = PlantConfig::baseline();
        let windy = PlantConfig::high_wind();
        assert!(windy.wind.base_kw > base.wind.base_kw);
    }
}
