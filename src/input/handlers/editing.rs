//! Editing command handlers.
//!
//! Handles text input into the focused form field and form submission.

use crate::app::App;
use crate::input::Command;

/// Handles editing-related commands.
///
/// Returns `true` if the command was handled.
pub fn handle_editing_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::InsertChar(c) => {
            app.insert_char(*c);
            true
        }
        Command::InsertNewline => {
            app.insert_newline();
            true
        }
        Command::Backspace => {
            app.backspace();
            true
        }
        Command::Paste(text) => {
            app.paste(text);
            true
        }
        Command::SubmitForm => {
            app.submit_contact_form();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FolioConfig;
    use crate::form::Field;

    #[test]
    fn test_insert_and_backspace() {
        let mut app = App::new(FolioConfig::default());
        app.focus_field(Field::Name);

        for c in "Ada".chars() {
            assert!(handle_editing_command(&mut app, &Command::InsertChar(c)));
        }
        handle_editing_command(&mut app, &Command::Backspace);
        assert_eq!(app.form.fields().get(Field::Name), "Ad");
    }

    #[test]
    fn test_submit_empty_form_reports_errors() {
        let mut app = App::new(FolioConfig::default());
        assert!(handle_editing_command(&mut app, &Command::SubmitForm));
        assert_eq!(app.form.errors().len(), 3);
        assert!(!app.form.is_submitting());
    }
}
