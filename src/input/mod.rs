//! Input handling module for keyboard, mouse, and paste events.
//!
//! All input is:
//!
//! 1. Translated to a [`Command`] by the [`CommandRegistry`] (keys), the
//!    hit area registry (clicks), or directly (wheel, paste, resize)
//! 2. Dispatched to handlers in the [`handlers`] module
//!
//! # Architecture
//!
//! ```text
//! Event -> App::handle_event() -> Command -> Handler -> App mutation
//! ```
//!
//! # Example
//!
//! ```ignore
//! let registry = CommandRegistry::new();
//! let context = app.build_input_context();
//!
//! if let Some(cmd) = registry.dispatch(key_event, &context) {
//!     app.execute_command(cmd);
//! }
//! ```

pub mod command;
pub mod context;
pub mod handlers;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, ModalType};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use crate::app::App;
use crate::ui::interaction::handle_click_action;

/// Rows moved per mouse wheel notch.
pub const WHEEL_ROWS: u16 = 3;

impl App {
    /// The dialog or overlay currently capturing input.
    pub fn active_modal(&self) -> ModalType {
        if self.form.success_visible() {
            ModalType::Success
        } else if self.form.failure().is_some() {
            ModalType::Failure
        } else if self.menu_open {
            ModalType::Menu
        } else {
            ModalType::None
        }
    }

    /// Builds an InputContext from the current application state.
    pub fn build_input_context(&self) -> InputContext {
        InputContext::new()
            .with_focus(self.focus)
            .with_modal(self.active_modal())
            .with_submitting(self.form.is_submitting())
    }

    /// Executes a command, delegating to the appropriate handler.
    ///
    /// Returns `true` if the command was handled.
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        debug!(command = ?cmd, "execute_command");

        if cmd.marks_dirty() {
            self.mark_dirty();
        }

        if handlers::handle_modal_command(self, &cmd)
            || handlers::handle_editing_command(self, &cmd)
            || handlers::handle_navigation_command(self, &cmd)
        {
            return true;
        }

        match cmd {
            Command::Quit => {
                self.quit();
                true
            }
            Command::ToggleTheme => {
                self.toggle_theme();
                true
            }
            Command::OpenEmail => {
                // Failures are reported through the status line.
                let _ = self.open_email();
                true
            }
            Command::Resize { width, height } => {
                self.resize(width, height);
                true
            }
            Command::Tick => {
                self.tick();
                true
            }
            Command::Noop => true,
            _ => false,
        }
    }

    /// Route one terminal event.
    pub fn handle_event(&mut self, registry: &CommandRegistry, event: Event) {
        match event {
            Event::Resize(width, height) => {
                self.execute_command(Command::Resize { width, height });
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let context = self.build_input_context();
                if let Some(cmd) = registry.dispatch(key, &context) {
                    self.execute_command(cmd);
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Paste(text) => {
                if self.active_modal() == ModalType::None {
                    self.execute_command(Command::Paste(text));
                }
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_areas.hit_test(mouse.column, mouse.row) {
                    handle_click_action(self, action);
                }
            }
            MouseEventKind::Moved => {
                if self.hit_areas.update_hover(mouse.column, mouse.row) {
                    self.mark_dirty();
                }
            }
            MouseEventKind::ScrollDown if !self.dialog_open() => {
                self.execute_command(Command::ScrollDown(WHEEL_ROWS));
            }
            MouseEventKind::ScrollUp if !self.dialog_open() => {
                self.execute_command(Command::ScrollUp(WHEEL_ROWS));
            }
            _ => {}
        }
    }

    /// Whether a dialog that blocks the page is showing.
    pub fn dialog_open(&self) -> bool {
        matches!(self.active_modal(), ModalType::Success | ModalType::Failure)
    }
}
