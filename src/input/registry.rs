//! Command registry for dispatching keyboard input to commands.
//!
//! The [`CommandRegistry`] provides a centralized place for mapping key events
//! to commands based on the current application context. It handles:
//! - Global bindings (always active)
//! - Modal bindings (acknowledgment, failure dialog, nav menu)
//! - Focus-specific bindings (page, form field, send button)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::{InputContext, ModalType};
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Registry for dispatching key events to commands.
///
/// Priority, highest first:
/// 1. Ctrl+C always quits
/// 2. Modal bindings; the dialogs swallow every other key, the menu lets
///    unbound keys fall through
/// 3. Global bindings
/// 4. Focus bindings, then printable characters while a field is focused
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates a new command registry with default keybindings.
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    /// Creates a command registry with a custom keybinding configuration.
    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Dispatches a key event to a command based on the current context.
    ///
    /// Returns `None` if the key should be ignored.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        let combo = KeyCombo::new(key.code, key.modifiers);

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        if context.is_modal_active() {
            if let Some(cmd) = self.dispatch_modal(&combo, context) {
                return Some(cmd);
            }
        }

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(self.resolve_global_command(cmd, context));
        }

        if context.is_editing() {
            self.dispatch_input(key, &combo)
        } else {
            self.config.get_focus(context.focus, &combo).cloned()
        }
    }

    /// Dispatches input when a modal is active.
    ///
    /// `None` lets the key continue to the regular bindings.
    fn dispatch_modal(&self, combo: &KeyCombo, context: &InputContext) -> Option<Command> {
        let bound = self.config.get_modal(context.modal, combo).cloned();
        match context.modal {
            ModalType::Success | ModalType::Failure => Some(bound.unwrap_or(Command::Noop)),
            ModalType::Menu => bound,
            ModalType::None => None,
        }
    }

    /// Dispatches input while a text field holds the caret.
    fn dispatch_input(&self, key: KeyEvent, combo: &KeyCombo) -> Option<Command> {
        if let Some(cmd) = self.config.get_input_editing(combo) {
            return Some(cmd.clone());
        }

        // Printable characters, shifted or not
        if let KeyCode::Char(c) = key.code {
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
            {
                return Some(Command::InsertChar(c));
            }
        }

        None
    }

    fn resolve_global_command(&self, cmd: &Command, context: &InputContext) -> Command {
        match cmd {
            Command::SubmitForm if context.is_submitting => Command::Noop,
            _ => cmd.clone(),
        }
    }
}
