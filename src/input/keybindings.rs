//! Default keybindings for the application.
//!
//! This module defines the default key bindings that map key combinations
//! to commands. Printable characters typed into a form field are not listed
//! here; the registry turns them into [`Command::InsertChar`].

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::ModalType;
use crate::app::{Focus, FormFocus};
use crate::page::Section;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Creates a new key combo with the given code and modifiers.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Creates a key combo with Shift modifier.
    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    /// Creates a key combo with Alt modifier.
    pub const fn alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Global keybindings (always active)
    pub global: HashMap<KeyCombo, Command>,
    /// Keybindings per modal type
    pub modal: HashMap<ModalType, HashMap<KeyCombo, Command>>,
    /// Keybindings per focus state (page navigation, send button)
    pub focus: HashMap<Focus, HashMap<KeyCombo, Command>>,
    /// Keybindings while a text field holds the caret
    pub input_editing: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            modal: HashMap::new(),
            focus: HashMap::new(),
            input_editing: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_modal_bindings();
        config.setup_focus_bindings();
        config.setup_input_editing_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('s')), Command::SubmitForm);

        self.global
            .insert(KeyCombo::plain(KeyCode::PageUp), Command::ScrollPageUp);
        self.global
            .insert(KeyCombo::plain(KeyCode::PageDown), Command::ScrollPageDown);

        // Tab order runs through the form controls.
        self.global
            .insert(KeyCombo::plain(KeyCode::Tab), Command::FocusNextField);
        self.global
            .insert(KeyCombo::plain(KeyCode::BackTab), Command::FocusPrevField);
        self.global
            .insert(KeyCombo::shift(KeyCode::BackTab), Command::FocusPrevField);
    }

    fn setup_modal_bindings(&mut self) {
        let mut success = HashMap::new();
        success.insert(KeyCombo::plain(KeyCode::Enter), Command::CloseSuccess);
        success.insert(KeyCombo::plain(KeyCode::Esc), Command::CloseSuccess);
        success.insert(KeyCombo::plain(KeyCode::Char('c')), Command::CloseSuccess);
        self.modal.insert(ModalType::Success, success);

        let mut failure = HashMap::new();
        failure.insert(KeyCombo::plain(KeyCode::Char('r')), Command::RetrySubmission);
        failure.insert(KeyCombo::plain(KeyCode::Enter), Command::RetrySubmission);
        failure.insert(KeyCombo::plain(KeyCode::Esc), Command::DismissFailure);
        failure.insert(KeyCombo::plain(KeyCode::Char('c')), Command::DismissFailure);
        self.modal.insert(ModalType::Failure, failure);

        let mut menu = HashMap::new();
        menu.insert(KeyCombo::plain(KeyCode::Esc), Command::CloseMenu);
        menu.insert(KeyCombo::plain(KeyCode::Char('m')), Command::CloseMenu);
        for section in Section::ALL {
            menu.insert(section_key(section), Command::JumpTo(section));
        }
        self.modal.insert(ModalType::Menu, menu);
    }

    fn setup_focus_bindings(&mut self) {
        let mut page = HashMap::new();
        page.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        page.insert(KeyCombo::plain(KeyCode::Char('t')), Command::ToggleTheme);
        page.insert(KeyCombo::plain(KeyCode::Char('m')), Command::ToggleMenu);
        page.insert(KeyCombo::plain(KeyCode::Char('e')), Command::OpenEmail);
        for section in Section::ALL {
            page.insert(section_key(section), Command::JumpTo(section));
        }

        // Vim-style and arrow scrolling
        page.insert(KeyCombo::plain(KeyCode::Char('j')), Command::ScrollDown(1));
        page.insert(KeyCombo::plain(KeyCode::Down), Command::ScrollDown(1));
        page.insert(KeyCombo::plain(KeyCode::Char('k')), Command::ScrollUp(1));
        page.insert(KeyCombo::plain(KeyCode::Up), Command::ScrollUp(1));
        page.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::ScrollPageDown);
        page.insert(KeyCombo::plain(KeyCode::Home), Command::ScrollTop);
        page.insert(KeyCombo::plain(KeyCode::Char('g')), Command::ScrollTop);
        page.insert(KeyCombo::plain(KeyCode::End), Command::ScrollBottom);
        page.insert(KeyCombo::shift(KeyCode::Char('G')), Command::ScrollBottom);
        self.focus.insert(Focus::Page, page);

        let mut send = HashMap::new();
        send.insert(KeyCombo::plain(KeyCode::Enter), Command::SubmitForm);
        send.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::SubmitForm);
        send.insert(KeyCombo::plain(KeyCode::Esc), Command::LeaveForm);
        send.insert(KeyCombo::plain(KeyCode::Up), Command::FocusPrevField);
        self.focus.insert(Focus::Form(FormFocus::Send), send);
    }

    fn setup_input_editing_bindings(&mut self) {
        self.input_editing
            .insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);

        self.input_editing
            .insert(KeyCombo::plain(KeyCode::Enter), Command::InsertNewline);
        self.input_editing
            .insert(KeyCombo::shift(KeyCode::Enter), Command::InsertNewline);
        self.input_editing
            .insert(KeyCombo::alt(KeyCode::Enter), Command::InsertNewline);

        self.input_editing
            .insert(KeyCombo::plain(KeyCode::Esc), Command::LeaveForm);
    }

    /// Gets the global command for a key combo.
    /// This is a simple lookup; the registry handles priority.
    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    /// Gets the modal-specific command for a key combo.
    pub fn get_modal(&self, modal: ModalType, combo: &KeyCombo) -> Option<&Command> {
        self.modal.get(&modal).and_then(|m| m.get(combo))
    }

    /// Gets the focus-specific command for a key combo.
    pub fn get_focus(&self, focus: Focus, combo: &KeyCombo) -> Option<&Command> {
        self.focus.get(&focus).and_then(|m| m.get(combo))
    }

    /// Gets the input editing command for a key combo.
    pub fn get_input_editing(&self, combo: &KeyCombo) -> Option<&Command> {
        self.input_editing.get(combo)
    }
}

/// Digit key for a section: 1 for About through 4 for Contact.
fn section_key(section: Section) -> KeyCombo {
    let digit = char::from_digit(section.index() as u32 + 1, 10).unwrap_or('1');
    KeyCombo::plain(KeyCode::Char(digit))
}
