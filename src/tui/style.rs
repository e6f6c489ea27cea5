//! Color constants and auto-scaling helpers for the dashboard.

use ratatui::style::Color;

use crate::sim::EnergySource;

/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Battery gauge color while discharging.
pub const BATTERY_DISCHARGE: Color = Color::Green;
/// Battery gauge color while charging.
pub const BATTERY_CHARGE: Color = Color::LightBlue;
/// Battery gauge color when idle.
pub const BATTERY_IDLE: Color = Color::DarkGray;

/// Returns the chart color for a source.
pub fn source_color(source: EnergySource) -> Color {
    match source {
        EnergySource::Solar => Color::Yellow,
        EnergySource::Wind => Color::Cyan,
        EnergySource::Battery => Color::Green,
        EnergySource::Total => Color::White,
    }
}

/// Returns the gauge color for a battery power value.
pub fn battery_color(battery_kw: i32) -> Color {
    if battery_kw > 0 {
        BATTERY_DISCHARGE
    } else if battery_kw < 0 {
        BATTERY_CHARGE
    } else {
        BATTERY_IDLE
    }
}

/// Computes Y-axis bounds from chart data points with 10% headroom.
pub fn auto_bounds_y(points: &[(f64, f64)]) -> [f64; 2] {
    let max = points
        .iter()
        .map(|&(_, y)| y)
        .fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return [0.0, 1.0];
    }
    [0.0, (max * 1.1).max(1.0)]
}
