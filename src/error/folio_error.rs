//! Unified error type for folio.
//!
//! `FolioError` wraps the domain-specific error enums so callers can
//! categorize, log, and present any failure the same way.

use thiserror::Error;

use super::category::ErrorCategory;
use super::config::{CliError, ConfigError};
use super::form::FormError;
use super::submission::SubmissionError;

/// Unified error type for folio.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Contact form API misuse.
    #[error(transparent)]
    Form(#[from] FormError),

    /// Contact submission delivery failure.
    #[error("submission failed: {0}")]
    Submission(#[from] SubmissionError),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Invalid command-line usage.
    #[error(transparent)]
    Cli(#[from] CliError),

    /// Terminal or file IO failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A link could not be handed to the system opener.
    #[error("could not open {target}: {message}")]
    OpenLink { target: String, message: String },

    /// The tracing subscriber could not be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl FolioError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::Form(_) => ErrorCategory::Validation,
            FolioError::Submission(_) => ErrorCategory::Network,
            FolioError::Config(_) | FolioError::Cli(_) => ErrorCategory::Configuration,
            FolioError::Io(_) => ErrorCategory::Terminal,
            FolioError::OpenLink { .. } | FolioError::Logging(_) => ErrorCategory::Internal,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            FolioError::Submission(err) => err.user_message(),
            FolioError::OpenLink { target, .. } => {
                format!("Couldn't open {}. Copy it from the page instead.", target)
            }
            other => format!("{}. {}", other, other.category().recovery_hint()),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FolioError::Form(_) => "FORM_UNKNOWN_FIELD",
            FolioError::Submission(err) => err.error_code(),
            FolioError::Config(_) => "CONFIG_INVALID",
            FolioError::Cli(_) => "CLI_USAGE",
            FolioError::Io(_) => "IO_ERROR",
            FolioError::OpenLink { .. } => "OPEN_LINK_FAILED",
            FolioError::Logging(_) => "LOGGING_SETUP_FAILED",
        }
    }
}
