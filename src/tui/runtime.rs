//! Dashboard application state and refresh loop bookkeeping.

use std::time::Instant;

use crate::config::PlantConfig;
use crate::sim::generator::ReadingGenerator;
use crate::sim::stats::DailyStats;
use crate::sim::types::{EnergyReading, EnergySource, PlantStatus};

/// Refresh interval options in seconds (fastest → slowest).
const REFRESH_LEVELS_SECS: [u64; 5] = [1, 2, 5, 10, 30];

/// Default refresh index (5 s).
const DEFAULT_REFRESH_IDX: usize = 2;

/// Dashboard application state.
///
/// Each tick performs the three generation calls and replaces prior state
/// wholesale; nothing survives a tick except the generator's RNGs.
pub struct App {
    /// Reading generator built from the active configuration.
    generator: ReadingGenerator,
    /// Current plant configuration (kept for restart/preset switch).
    config: PlantConfig,
    /// Most recent snapshot reading.
    pub current: Option<EnergyReading>,
    /// Rolling hourly series, oldest first.
    pub series: Vec<EnergyReading>,
    /// Daily statistics for the displayed series.
    pub stats: Option<DailyStats>,
    /// Plant liveness summary.
    pub status: Option<PlantStatus>,
    /// Which source the chart displays.
    pub source: EnergySource,
    /// Whether refreshing is paused.
    pub paused: bool,
    /// Current index into `REFRESH_LEVELS_SECS`.
    pub refresh_idx: usize,
    /// Whether the user has requested quit.
    pub quit: bool,
    /// When the last refresh was executed.
    pub last_tick: Instant,
    /// Name of the active preset.
    pub preset_name: String,
}

impl App {
    /// Creates a new app from a validated configuration and performs the
    /// first refresh.
    ///
    /// The caller owns config loading and validation (file, preset, CLI
    /// overrides); the app only consumes the result. `name` is the label
    /// shown in the header.
    pub fn new(config: PlantConfig, name: &str) -> Self {
        let generator = ReadingGenerator::from_config(&config);
        let mut app = Self {
            generator,
            config,
            current: None,
            series: Vec::new(),
            stats: None,
            status: None,
            source: EnergySource::Total,
            paused: false,
            refresh_idx: DEFAULT_REFRESH_IDX,
            quit: false,
            last_tick: Instant::now(),
            preset_name: name.to_string(),
        };
        app.tick();
        app
    }

    /// Regenerates reading, series, stats, and status in one pass.
    ///
    /// Stats are computed from the same series the chart displays, so the
    /// two panels always agree within a tick.
    pub fn tick(&mut self) {
        let current = self.generator.current_reading();
        self.series = self
            .generator
            .hourly_series(self.config.plant.history_hours);

        self.stats = self.series.last().map(|last| {
            DailyStats::from_series(
                last.timestamp.date_naive(),
                &self.series,
                self.generator.capacity_kw(),
            )
        });
        self.status = Some(PlantStatus {
            online: true,
            last_update: current.timestamp,
            current_output_kw: current.total_kw(),
        });
        self.current = Some(current);
    }

    /// Toggles pause/resume.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Forces an immediate refresh regardless of the interval.
    pub fn refresh_now(&mut self) {
        self.tick();
        self.last_tick = Instant::now();
    }

    /// Selects which source the chart displays.
    pub fn select_source(&mut self, source: EnergySource) {
        self.source = source;
    }

    /// Shortens the refresh interval.
    pub fn faster(&mut self) {
        if self.refresh_idx > 0 {
            self.refresh_idx -= 1;
        }
    }

    /// Lengthens the refresh interval.
    pub fn slower(&mut self) {
        if self.refresh_idx + 1 < REFRESH_LEVELS_SECS.len() {
            self.refresh_idx += 1;
        }
    }

    /// Returns the current refresh interval in milliseconds.
    pub fn tick_interval_ms(&self) -> u64 {
        REFRESH_LEVELS_SECS[self.refresh_idx] * 1000
    }

    /// Switches to a different preset, rebuilding the generator.
    pub fn switch_preset(&mut self, name: &str) {
        let Ok(config) = PlantConfig::from_preset(name) else {
            return;
        };
        self.generator = ReadingGenerator::from_config(&config);
        self.config = config;
        self.preset_name = name.to_string();
        self.paused = false;
        self.refresh_now();
    }

    /// Switches to the next preset in [`PlantConfig::PRESETS`] order.
    pub fn cycle_preset(&mut self) {
        let presets = PlantConfig::PRESETS;
        let next = presets
            .iter()
            .position(|&p| p == self.preset_name)
            .map_or(0, |i| (i + 1) % presets.len());
        self.switch_preset(presets[next]);
    }

    /// Restarts with a fresh generator over the current configuration.
    ///
    /// Unlike [`App::switch_preset`] this keeps a file-loaded configuration
    /// intact instead of re-deriving one from the preset name.
    pub fn restart(&mut self) {
        self.generator = ReadingGenerator::from_config(&self.config);
        self.paused = false;
        self.refresh_now();
    }

    /// Number of history hours the series covers.
    pub fn history_hours(&self) -> usize {
        self.config.plant.history_hours
    }

    /// Active battery charge/discharge caps in kilowatts.
    pub fn battery_caps_kw(&self) -> (u32, u32) {
        (
            self.config.battery.max_charge_kw,
            self.config.battery.max_discharge_kw,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline_app() -> App {
        App::new(PlantConfig::baseline(), "baseline")
    }

    #[test]
    fn app_populates_state_on_creation() {
        let app = baseline_app();
        assert!(app.current.is_some());
        assert_eq!(app.series.len(), 24);
        assert!(app.stats.is_some());
        assert!(app.status.is_some());
    }

    #[test]
    fn app_honors_a_custom_config() {
        let mut config = PlantConfig::baseline();
        config.plant.history_hours = 12;
        config.plant.seed = 99;
        let app = App::new(config, "custom");
        assert_eq!(app.preset_name, "custom");
        assert_eq!(app.series.len(), 12);
    }

    #[test]
    fn app_honors_a_seed_override() {
        let mut config = PlantConfig::baseline();
        config.plant.seed = 7;
        let a = App::new(config.clone(), "custom");
        let b = App::new(config, "custom");
        // timestamps differ between the two constructions; the noise must not
        let kw = |app: &App| -> Vec<(u32, u32, i32)> {
            app.series
                .iter()
                .map(|r| (r.solar_kw, r.wind_kw, r.battery_kw))
                .collect()
        };
        assert_eq!(kw(&a), kw(&b), "same seed should reproduce the series");
    }

    #[test]
    fn restart_keeps_a_custom_config() {
        let mut config = PlantConfig::baseline();
        config.plant.history_hours = 12;
        let mut app = App::new(config, "custom");
        app.restart();
        assert_eq!(app.preset_name, "custom");
        assert_eq!(app.series.len(), 12);
    }

    #[test]
    fn battery_caps_follow_the_config() {
        let app = baseline_app();
        assert_eq!(app.battery_caps_kw(), (50, 40));

        let windy = PlantConfig::high_wind();
        let app = App::new(windy, "high_wind");
        assert_eq!(app.battery_caps_kw(), (80, 40));
    }

    #[test]
    fn tick_replaces_state_wholesale() {
        let mut app = baseline_app();
        let before = app.series.clone();
        app.tick();
        assert_eq!(app.series.len(), before.len());
        // fresh noise per tick makes an identical series vanishingly unlikely
        assert_ne!(app.series, before);
    }

    #[test]
    fn stats_agree_with_displayed_series() {
        let app = baseline_app();
        let peak = app
            .series
            .iter()
            .map(crate::sim::EnergyReading::total_kw)
            .max()
            .unwrap_or(0);
        assert_eq!(app.stats.as_ref().map(|s| s.peak_output_kw), Some(peak));
    }

    #[test]
    fn source_selection() {
        let mut app = baseline_app();
        assert_eq!(app.source, EnergySource::Total);
        app.select_source(EnergySource::Wind);
        assert_eq!(app.source, EnergySource::Wind);
    }

    #[test]
    fn refresh_controls_stay_in_bounds() {
        let mut app = baseline_app();
        assert_eq!(app.tick_interval_ms(), 5000);

        for _ in 0..10 {
            app.faster();
        }
        assert_eq!(app.refresh_idx, 0);

        for _ in 0..10 {
            app.slower();
        }
        assert_eq!(app.refresh_idx, REFRESH_LEVELS_SECS.len() - 1);
    }

    #[test]
    fn switch_preset_rebuilds_state() {
        let mut app = baseline_app();
        app.select_source(EnergySource::Solar);
        app.switch_preset("high_wind");
        assert_eq!(app.preset_name, "high_wind");
        assert_eq!(app.series.len(), 24);
        // source selection survives a preset switch
        assert_eq!(app.source, EnergySource::Solar);
    }

    #[test]
    fn unknown_preset_is_ignored() {
        let mut app = baseline_app();
        app.switch_preset("nonexistent");
        assert_eq!(app.preset_name, "baseline");
    }

    #[test]
    fn cycle_preset_wraps_around() {
        let mut app = baseline_app();
        app.cycle_preset();
        assert_eq!(app.preset_name, "overcast");
        app.cycle_preset();
        assert_eq!(app.preset_name, "high_wind");
        app.cycle_preset();
        assert_eq!(app.preset_name, "baseline");
    }

    #[test]
    fn toggle_pause() {
        let mut app = baseline_app();
        assert!(!app.paused);
        app.toggle_pause();
        assert!(app.paused);
        app.toggle_pause();
        assert!(!app.paused);
    }
}
