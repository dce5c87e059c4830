//! Input context for determining which commands are available.
//!
//! The [`InputContext`] captures the application state relevant to input
//! handling, so the command registry can pick bindings from the active
//! dialog and focus without borrowing the app.

use crate::app::{Focus, FormFocus};

/// The dialog or overlay currently capturing keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalType {
    /// No modal dialog is active
    #[default]
    None,
    /// "Message Sent!" acknowledgment is showing
    Success,
    /// The last submission failed
    Failure,
    /// Narrow-terminal nav menu is open
    Menu,
}

/// Context information for input handling.
#[derive(Debug, Clone, Default)]
pub struct InputContext {
    /// Whether keys drive the page or the form
    pub focus: Focus,
    /// Current modal type (if any)
    pub modal: ModalType,
    /// Whether a submission is in flight
    pub is_submitting: bool,
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_focus(mut self, focus: Focus) -> Self {
        self.focus = focus;
        self
    }

    pub fn with_modal(mut self, modal: ModalType) -> Self {
        self.modal = modal;
        self
    }

    pub fn with_submitting(mut self, submitting: bool) -> Self {
        self.is_submitting = submitting;
        self
    }

    /// Returns true if a text field holds the caret.
    pub fn is_editing(&self) -> bool {
        self.focus.field().is_some()
    }

    /// Returns true if the send button has focus.
    pub fn is_on_send(&self) -> bool {
        self.focus == Focus::Form(FormFocus::Send)
    }

    /// Returns true if we're in a modal state.
    pub fn is_modal_active(&self) -> bool {
        self.modal != ModalType::None
    }
}
