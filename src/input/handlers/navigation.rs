//! Navigation command handlers.
//!
//! Handles scrolling, section jumps, the nav menu, and moving focus in and
//! out of the contact form.

use crate::app::App;
use crate::input::Command;

/// Handles navigation-related commands.
///
/// Returns `true` if the command was handled.
pub fn handle_navigation_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::JumpTo(section) => {
            app.leave_form();
            app.jump_to(*section);
            true
        }
        Command::ToggleMenu => {
            app.toggle_menu();
            true
        }
        Command::CloseMenu => {
            app.close_menu();
            true
        }
        Command::ScrollUp(rows) => {
            app.scroll_up(*rows);
            true
        }
        Command::ScrollDown(rows) => {
            app.scroll_down(*rows);
            true
        }
        Command::ScrollPageUp => {
            app.page_up();
            true
        }
        Command::ScrollPageDown => {
            app.page_down();
            true
        }
        Command::ScrollTop => {
            app.scroll_to_top();
            true
        }
        Command::ScrollBottom => {
            app.scroll_to_bottom();
            true
        }
        Command::FocusNextField => {
            app.focus_next();
            true
        }
        Command::FocusPrevField => {
            app.focus_prev();
            true
        }
        Command::FocusField(field) => {
            app.focus_field(*field);
            true
        }
        Command::LeaveForm => {
            app.leave_form();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Focus, FormFocus};
    use crate::config::FolioConfig;
    use crate::form::Field;
    use crate::page::Section;

    fn create_test_app() -> App {
        App::new(FolioConfig::default().with_animations(false)).with_size(100, 30)
    }

    #[test]
    fn test_jump_leaves_form() {
        let mut app = create_test_app();
        app.focus_field(Field::Name);
        assert!(handle_navigation_command(&mut app, &Command::JumpTo(Section::Skills)));
        assert_eq!(app.focus, Focus::Page);
        assert_eq!(app.scroll, app.layout().anchor(Section::Skills));
    }

    #[test]
    fn test_scroll_commands() {
        let mut app = create_test_app();
        handle_navigation_command(&mut app, &Command::ScrollDown(5));
        assert_eq!(app.scroll, 5);
        handle_navigation_command(&mut app, &Command::ScrollUp(2));
        assert_eq!(app.scroll, 3);
        handle_navigation_command(&mut app, &Command::ScrollBottom);
        assert_eq!(app.scroll, app.max_scroll());
        handle_navigation_command(&mut app, &Command::ScrollTop);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_focus_field() {
        let mut app = create_test_app();
        handle_navigation_command(&mut app, &Command::FocusField(Field::Message));
        assert_eq!(app.focus, Focus::Form(FormFocus::Field(Field::Message)));
    }

    #[test]
    fn test_unrelated_command_not_handled() {
        let mut app = create_test_app();
        assert!(!handle_navigation_command(&mut app, &Command::InsertChar('a')));
    }
}
