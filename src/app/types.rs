//! Type definitions for the application state.
//!
//! - [`Focus`] - Whether keys drive the page or the contact form
//! - [`FormFocus`] - Which form control holds the caret
//! - [`StatusMessage`] - Transient line shown in the key hints bar

use crate::form::Field;

/// A focusable control inside the contact form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormFocus {
    Field(Field),
    Send,
}

impl FormFocus {
    pub const FIRST: FormFocus = FormFocus::Field(Field::Name);

    /// Next control, wrapping from the send button back to the first field.
    pub fn next(self) -> FormFocus {
        match self {
            FormFocus::Field(field) => field.next().map_or(FormFocus::Send, FormFocus::Field),
            FormFocus::Send => FormFocus::FIRST,
        }
    }

    /// Previous control, wrapping from the first field to the send button.
    pub fn prev(self) -> FormFocus {
        match self {
            FormFocus::Field(field) => field.prev().map_or(FormFocus::Send, FormFocus::Field),
            FormFocus::Send => FormFocus::Field(Field::Message),
        }
    }

    pub fn field(self) -> Option<Field> {
        match self {
            FormFocus::Field(field) => Some(field),
            FormFocus::Send => None,
        }
    }
}

/// Represents which part of the page receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    #[default]
    Page,
    Form(FormFocus),
}

impl Focus {
    pub fn is_form(&self) -> bool {
        matches!(self, Focus::Form(_))
    }

    /// The text field holding the caret, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            Focus::Form(inner) => inner.field(),
            Focus::Page => None,
        }
    }
}

/// Short-lived feedback line, e.g. after trying to open the mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    /// Tick after which the message is cleared.
    pub expires_at: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_focus_cycles_forward() {
        let mut focus = FormFocus::FIRST;
        let mut seen = vec![focus];
        for _ in 0..4 {
            focus = focus.next();
            seen.push(focus);
        }
        assert_eq!(
            seen,
            vec![
                FormFocus::Field(Field::Name),
                FormFocus::Field(Field::Email),
                FormFocus::Field(Field::Message),
                FormFocus::Send,
                FormFocus::Field(Field::Name),
            ]
        );
    }

    #[test]
    fn test_form_focus_prev_is_inverse_of_next() {
        for focus in [
            FormFocus::Field(Field::Name),
            FormFocus::Field(Field::Email),
            FormFocus::Field(Field::Message),
            FormFocus::Send,
        ] {
            assert_eq!(focus.next().prev(), focus);
        }
    }

    #[test]
    fn test_focus_field() {
        assert_eq!(Focus::Page.field(), None);
        assert_eq!(Focus::Form(FormFocus::Send).field(), None);
        assert_eq!(
            Focus::Form(FormFocus::Field(Field::Email)).field(),
            Some(Field::Email)
        );
        assert!(!Focus::default().is_form());
    }
}
