//! Terminal UI for playing and time travelling.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Focus, KeyAction, action_for_key, digit_cell, move_cursor};
pub use ui::draw;

use crate::TuiConfig;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Restores the terminal when dropped, including on early return or panic.
pub struct TerminalGuard;

impl TerminalGuard {
    /// Switches to raw mode and the alternate screen.
    ///
    /// Installs a panic hook that restores the terminal before the panic
    /// message is printed.
    #[instrument]
    pub fn enter() -> Result<Self> {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            previous(info);
        }));

        enable_raw_mode()?;
        // From here on, dropping the guard undoes whatever succeeded.
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Leaves raw mode and the alternate screen, ignoring errors.
///
/// Safe to call more than once.
pub fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

/// Runs the terminal UI until the user quits.
#[instrument(skip(config))]
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting terminal UI");

    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(config);
    let tick_rate = Duration::from_millis(*config.tick_rate_ms());
    let res = run_app(&mut terminal, app, tick_rate);

    drop(guard);
    info!("Terminal UI closed");
    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(tick_rate)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code)?;
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
