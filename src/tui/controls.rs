//! Keyboard input handling for the dashboard.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sim::EnergySource;

use super::runtime::App;

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Char(' ') => app.toggle_pause(),
        KeyCode::Char('r') => app.refresh_now(),
        KeyCode::Char('+' | '=') | KeyCode::Right => app.faster(),
        KeyCode::Char('-') | KeyCode::Left => app.slower(),
        KeyCode::Char('1') => app.select_source(EnergySource::Solar),
        KeyCode::Char('2') => app.select_source(EnergySource::Wind),
        KeyCode::Char('3') => app.select_source(EnergySource::Battery),
        KeyCode::Char('4') => app.select_source(EnergySource::Total),
        KeyCode::Tab => app.cycle_preset(),
        KeyCode::Char('p') => app.restart(),
        _ => {}
    }
}
