//! Terminal setup and teardown.
//!
//! Raw mode plus alternate screen, wrapped so `main` can restore the terminal on
//! every exit path.

use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};

use crate::domain::{Result, WalletdeckError};

/// The concrete terminal type used by the binary.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Enables raw mode, enters the alternate screen, and builds the terminal.
///
/// # Errors
///
/// Returns a [`WalletdeckError::Terminal`] if the backend cannot be initialized.
pub fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().map_err(terminal_error)?;
    let mut stdout = stdout();
    crossterm::execute!(stdout, EnterAlternateScreen).map_err(terminal_error)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(terminal_error)
}

/// Leaves the alternate screen and disables raw mode.
///
/// # Errors
///
/// Returns a [`WalletdeckError::Terminal`] if restoration fails.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().map_err(terminal_error)?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(terminal_error)?;
    terminal.show_cursor().map_err(terminal_error)?;
    Ok(())
}

fn terminal_error(err: std::io::Error) -> WalletdeckError {
    WalletdeckError::Terminal(err.to_string())
}
