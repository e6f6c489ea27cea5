//! Live terminal dashboard for the simulated plant.
//!
//! Feature-gated behind `tui`. Launch with `--tui` on the CLI.

mod controls;
mod layout;
/// Refresh loop and application state.
pub mod runtime;
mod style;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::PlantConfig;
use runtime::App;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Runs the dashboard over an already-validated configuration.
///
/// `name` is the label shown in the header (a preset name, or whatever the
/// caller picks for a file-loaded configuration). The terminal is restored
/// before returning, whether the loop ended normally or with an error.
///
/// # Errors
///
/// Returns an `io::Error` if terminal setup fails or the event loop hits an
/// I/O error.
pub fn run(config: PlantConfig, name: &str) -> io::Result<()> {
    let mut terminal = setup_terminal()?;
    let mut app = App::new(config, name);
    let result = event_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal);
    result
}

/// Puts the terminal into raw mode on the alternate screen.
///
/// Rolls raw mode back if the later steps fail, so an early error never
/// leaves the caller's terminal unusable.
fn setup_terminal() -> io::Result<Term> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e);
    }

    match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = disable_raw_mode();
            Err(e)
        }
    }
}

/// Leaves the alternate screen and re-enables the cursor, best-effort.
fn restore_terminal(terminal: &mut Term) {
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();
}

/// Core event loop: poll input, refresh readings on the interval, draw.
fn event_loop(terminal: &mut Term, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| layout::render(frame, app))?;

        if app.quit {
            return Ok(());
        }

        let timeout = Duration::from_millis(app.tick_interval_ms());
        let deadline = app.last_tick + timeout;
        let poll_timeout = deadline.saturating_duration_since(Instant::now());

        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                controls::handle_key(app, key);
            }
        }

        if app.last_tick.elapsed() >= timeout && !app.paused {
            app.tick();
            app.last_tick = Instant::now();
        }
    }
}
