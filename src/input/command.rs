//! Command definitions for keyboard and mouse input.
//!
//! The [`Command`] enum decouples key bindings from their effects: the
//! registry maps a key to a command, and the app executes the command.

use crate::form::Field;
use crate::page::Section;

/// Every action input can trigger.
///
/// Commands are organized into categories:
/// - Global commands (quit, theme, section jumps)
/// - Scroll commands
/// - Form commands (focus, editing, submit)
/// - Dialog commands (acknowledgment, failure)
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (q, Ctrl+C)
    Quit,
    /// Switch between dark and light themes (t)
    ToggleTheme,
    /// Scroll to a section (1-4, nav links)
    JumpTo(Section),
    /// Open or close the narrow-terminal nav menu (m)
    ToggleMenu,
    /// Close the nav menu (Esc while open)
    CloseMenu,
    /// Open the contact address in the mail client (e)
    OpenEmail,

    // =========================================================================
    // Scroll Commands
    // =========================================================================
    /// Scroll up by rows (k, Up, mouse wheel)
    ScrollUp(u16),
    /// Scroll down by rows (j, Down, mouse wheel)
    ScrollDown(u16),
    ScrollPageUp,
    ScrollPageDown,
    ScrollTop,
    ScrollBottom,

    // =========================================================================
    // Form Commands
    // =========================================================================
    /// Focus the next form control (Tab)
    FocusNextField,
    /// Focus the previous form control (Shift+Tab)
    FocusPrevField,
    /// Put the caret in a specific field (mouse click)
    FocusField(Field),
    /// Return keys to page navigation (Esc in the form)
    LeaveForm,
    /// Type a character into the focused field
    InsertChar(char),
    /// Enter in a field: newline in the message, next field elsewhere
    InsertNewline,
    /// Delete the last character of the focused field
    Backspace,
    /// Append bracketed-paste text to the focused field
    Paste(String),
    /// Validate and send the form (Enter on Send, Ctrl+S)
    SubmitForm,

    // =========================================================================
    // Dialog Commands
    // =========================================================================
    /// Hide the "Message Sent!" acknowledgment
    CloseSuccess,
    /// Send the failed message again
    RetrySubmission,
    /// Close the failure dialog, keeping the fields
    DismissFailure,

    // =========================================================================
    // System Commands
    // =========================================================================
    /// Handle terminal resize
    Resize { width: u16, height: u16 },
    /// Tick for animations
    Tick,
    /// No operation (used when key should be ignored)
    Noop,
}

impl Command {
    /// Returns true if this command should mark the app as dirty (needs redraw).
    pub fn marks_dirty(&self) -> bool {
        !matches!(self, Command::Noop | Command::Tick)
    }

    /// Returns true if this command is a quit command.
    pub fn is_quit(&self) -> bool {
        matches!(self, Command::Quit)
    }

    /// Returns a human-readable description of the command.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Quit => "Quit application",
            Command::ToggleTheme => "Toggle theme",
            Command::JumpTo(_) => "Jump to section",
            Command::ToggleMenu => "Toggle navigation menu",
            Command::CloseMenu => "Close navigation menu",
            Command::OpenEmail => "Open email link",
            Command::ScrollUp(_) => "Scroll up",
            Command::ScrollDown(_) => "Scroll down",
            Command::ScrollPageUp => "Scroll page up",
            Command::ScrollPageDown => "Scroll page down",
            Command::ScrollTop => "Scroll to top",
            Command::ScrollBottom => "Scroll to bottom",
            Command::FocusNextField => "Next form field",
            Command::FocusPrevField => "Previous form field",
            Command::FocusField(_) => "Focus form field",
            Command::LeaveForm => "Leave form",
            Command::InsertChar(_) => "Insert character",
            Command::InsertNewline => "Insert newline",
            Command::Backspace => "Delete previous character",
            Command::Paste(_) => "Paste text",
            Command::SubmitForm => "Send message",
            Command::CloseSuccess => "Close acknowledgment",
            Command::RetrySubmission => "Retry sending",
            Command::DismissFailure => "Dismiss failure",
            Command::Resize { .. } => "Terminal resize",
            Command::Tick => "Animation tick",
            Command::Noop => "No operation",
        }
    }
}
