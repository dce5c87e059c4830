//! Click action handler.
//!
//! Turns actions from the hit area registry into the same commands the
//! keyboard produces, so both paths share one implementation.

use super::hit_area::ClickAction;
use crate::app::App;
use crate::input::Command;
use crate::page::Section;

/// Handle a click action by updating App state.
///
/// While a dialog is showing only its own buttons respond.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    if app.dialog_open() && !action.is_dialog_action() {
        tracing::debug!(?action, "click ignored behind dialog");
        return;
    }
    app.mark_dirty();

    let command = match action {
        ClickAction::NavLink(section) => Command::JumpTo(section),
        ClickAction::Logo => Command::JumpTo(Section::About),
        ClickAction::ToggleTheme => Command::ToggleTheme,
        ClickAction::ToggleMenu => Command::ToggleMenu,
        ClickAction::FocusField(field) => Command::FocusField(field),
        ClickAction::SubmitForm => Command::SubmitForm,
        ClickAction::OpenEmail => Command::OpenEmail,
        ClickAction::CloseSuccess => Command::CloseSuccess,
        ClickAction::RetrySubmission => Command::RetrySubmission,
        ClickAction::DismissFailure => Command::DismissFailure,
    };
    tracing::debug!(?action, "click");
    app.execute_command(command);
}
