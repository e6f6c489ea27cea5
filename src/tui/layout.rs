//! Dashboard layout and widget rendering.

use chrono::Timelike;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, Paragraph};

use crate::sim::EnergySource;

use super::runtime::App;
use super::style;

/// Renders the full dashboard frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(10),   // chart
            Constraint::Length(3), // battery gauge
            Constraint::Length(5), // stats panel
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_chart(frame, app, chunks[1]);
    render_battery_gauge(frame, app, chunks[2]);
    render_stats(frame, app, chunks[3]);
    render_footer(frame, chunks[4]);
}

/// Header bar: preset name, selected source, refresh interval, run state.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let state_label = if app.paused { "PAUSED" } else { "LIVE" };
    let state_icon = if app.paused { "‖" } else { "●" };

    let header = Line::from(vec![
        Span::styled(
            " PLANT-SIM ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            &app.preset_name,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " │ {} │ every {}s │ {} {} ",
            app.source,
            app.tick_interval_ms() / 1000,
            state_icon,
            state_label,
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Hourly output chart for the selected source.
fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let data: Vec<(f64, f64)> = app
        .series
        .iter()
        .enumerate()
        .map(|(i, r)| (i as f64, f64::from(r.source_kw(app.source))))
        .collect();

    let y_bounds = style::auto_bounds_y(&data);
    let x_hi = (app.history_hours().saturating_sub(1)).max(1) as f64;

    let datasets = vec![
        Dataset::default()
            .name(app.source.label())
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(style::source_color(app.source)))
            .data(&data),
    ];

    let x_label_lo = app
        .series
        .first()
        .map_or_else(String::new, |r| format!("{:02}:00", r.timestamp.hour()));
    let x_label_hi = app
        .series
        .last()
        .map_or_else(String::new, |r| format!("{:02}:00", r.timestamp.hour()));
    let y_label_lo = format!("{:.0}", y_bounds[0]);
    let y_label_hi = format!("{:.0}", y_bounds[1]);

    let title = format!(" {} Output — last {}h ", app.source, app.history_hours());
    let chart = Chart::new(datasets)
        .block(Block::default().title(title).borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title("hour")
                .bounds([0.0, x_hi])
                .labels(vec![x_label_lo, x_label_hi]),
        )
        .y_axis(
            Axis::default()
                .title("kW")
                .bounds(y_bounds)
                .labels(vec![y_label_lo, y_label_hi]),
        );

    frame.render_widget(chart, area);
}

/// Battery gauge showing charge/discharge direction and magnitude.
fn render_battery_gauge(frame: &mut Frame, app: &App, area: Rect) {
    let battery_kw = app.current.as_ref().map_or(0, |r| r.battery_kw);
    let (max_charge_kw, max_discharge_kw) = app.battery_caps_kw();
    let (cap, label) = if battery_kw < 0 {
        (
            f64::from(max_charge_kw.max(1)),
            format!("charging {} kW", -battery_kw),
        )
    } else if battery_kw > 0 {
        (
            f64::from(max_discharge_kw.max(1)),
            format!("discharging {battery_kw} kW"),
        )
    } else {
        (1.0, "idle".to_string())
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Battery ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(style::battery_color(battery_kw)))
        .ratio((f64::from(battery_kw.abs()) / cap).clamp(0.0, 1.0))
        .label(label);
    frame.render_widget(gauge, area);
}

/// Stats panel: current reading, daily aggregates, plant status.
fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let lines = if let Some(r) = &app.current {
        let mut lines = vec![Line::from(format!(
            "  solar={:>4} kW  wind={:>4} kW  battery={:>5} kW  total={:>4} kW",
            r.solar_kw,
            r.wind_kw,
            r.battery_kw,
            r.total_kw(),
        ))];
        if let Some(s) = &app.stats {
            lines.push(Line::from(format!(
                "  today: {} kWh produced  peak {} kW  efficiency {}%",
                s.total_production_kwh, s.peak_output_kw, s.efficiency_pct,
            )));
        }
        if let Some(status) = &app.status {
            lines.push(Line::from(format!(
                "  {}  last update {}",
                if status.online { "ONLINE" } else { "OFFLINE" },
                status.last_update.format("%H:%M:%S"),
            )));
        }
        lines
    } else {
        vec![Line::from("  Waiting for first reading...")]
    };

    let block = Block::default().title(" Plant ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let sources: Vec<String> = EnergySource::ALL
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}:{}", i + 1, s.label()))
        .collect();
    let footer = Paragraph::new(Line::from(Span::styled(
        format!(
            " q:Quit  Space:Pause  r:Refresh  +/-:Interval  {}  Tab:Preset",
            sources.join("  ")
        ),
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
