//! Dialog command handlers.

use crate::app::App;
use crate::input::Command;

/// Handles commands for the acknowledgment and failure dialogs.
///
/// Returns `true` if the command was handled.
pub fn handle_modal_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::CloseSuccess => {
            app.dismiss_success();
            true
        }
        Command::RetrySubmission => {
            app.retry_submission();
            true
        }
        Command::DismissFailure => {
            app.dismiss_failure();
            true
        }
        _ => false,
    }
}
