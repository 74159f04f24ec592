//! Interactive terminal session
//!
//! Raw mode, alternate screen and mouse capture for the lifetime of the
//! keypad. Once raw mode is on, the terminal is restored whether setup, the
//! event loop or neither fails.

use std::io;

use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use keypad_calc::tui::{render, CalculatorApp, InputHandler};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};

use crate::error::CliResult;

/// Runs the keypad until the user quits
pub fn run(app: CalculatorApp) -> CliResult<()> {
    enable_raw_mode()?;
    with_restore(|| open_and_run(app), restore)
}

/// Runs `body`, then `restore` unconditionally. An error from `body` wins
/// over one from `restore`.
pub fn with_restore<T>(
    body: impl FnOnce() -> CliResult<T>,
    restore: impl FnOnce() -> CliResult<()>,
) -> CliResult<T> {
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

fn open_and_run(app: CalculatorApp) -> CliResult<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    tracing::info!("keypad opened");

    event_loop(&mut terminal, app)
}

fn restore() -> CliResult<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture, Show)?;
    tracing::info!("keypad closed");
    Ok(())
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, mut app: CalculatorApp) -> CliResult<()> {
    let input_handler = InputHandler::new();

    while !app.should_quit() {
        // Hit testing uses the area of the frame that was just drawn
        let screen = terminal.draw(|frame| render(&app, frame))?.area;
        let action = input_handler.handle_event(&event::read()?);
        app.handle(action, screen);
    }

    Ok(())
}
