//! AppMessage enum for async communication within the application.

use crate::error::SubmissionError;
use crate::form::SubmissionTicket;

/// Messages received from background tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// A contact submission task finished, successfully or not
    SubmissionFinished {
        ticket: SubmissionTicket,
        result: Result<(), SubmissionError>,
    },
}
