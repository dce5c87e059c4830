//! Terminal lifecycle for the full-screen page.
//!
//! [`TerminalManager`] puts the terminal into raw mode on the alternate
//! screen with mouse capture and bracketed paste, and a [`TerminalGuard`]
//! puts everything back when the manager is dropped. [`install_panic_hook`]
//! covers the paths where `Drop` never runs.
//!
//! ```no_run
//! use folio::terminal::{install_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     install_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     manager.terminal().draw(|_frame| {})?;
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::install_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use tracing::debug;

/// Restores the terminal exactly once, on drop or on [`TerminalGuard::release`].
pub struct TerminalGuard {
    released: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { released: false }
    }

    /// Restore the terminal now. Later calls do nothing.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        leave_tui_mode(&mut io::stdout());
        debug!("terminal restored");
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.release();
    }
}

/// Owns the ratatui terminal for the lifetime of the app.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enter raw mode and the alternate screen, then clear it.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        // From here on the guard undoes whatever succeeded.
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        debug!("terminal entered tui mode");

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Current terminal size as a rect at the origin.
    pub fn size(&self) -> Result<Rect> {
        Ok(self.terminal.size()?.into())
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) -> Result<()> {
        self.guard.release();
        self.terminal.show_cursor()?;
        Ok(())
    }
}
