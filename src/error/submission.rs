//! Errors raised while delivering a contact submission.
//!
//! The bundled transport never fails; these variants exist for transports
//! backed by a real endpoint and for test doubles that script failures.

use thiserror::Error;

/// Delivery failure for a contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The endpoint could not be reached.
    #[error("connection failed: {message}")]
    ConnectionFailed { message: String },

    /// The endpoint did not answer in time.
    #[error("timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// The endpoint answered but refused the message.
    #[error("rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

impl SubmissionError {
    /// Whether sending the same message again could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            SubmissionError::ConnectionFailed { .. } | SubmissionError::Timeout { .. } => true,
            SubmissionError::Rejected { status, .. } => *status >= 500 || *status == 429,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::ConnectionFailed { .. } => {
                "Couldn't reach the mail service. Check your connection.".to_string()
            }
            SubmissionError::Timeout { seconds } => {
                format!("The mail service didn't answer within {} seconds.", seconds)
            }
            SubmissionError::Rejected { message, .. } => {
                format!("The message was not accepted: {}", message)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SubmissionError::ConnectionFailed { .. } => "SUBMIT_CONNECTION_FAILED",
            SubmissionError::Timeout { .. } => "SUBMIT_TIMEOUT",
            SubmissionError::Rejected { .. } => "SUBMIT_REJECTED",
        }
    }
}
