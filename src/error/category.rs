//! Error category classification for unified error handling.
//!
//! Categories drive how an error is surfaced: validation problems are shown
//! inline next to the offending field, network problems get a retry
//! affordance, and everything else ends up in the status line or the log.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Missing or malformed user input.
    /// Not retryable until the user corrects the field.
    Validation,

    /// Delivery of a contact submission failed (connection, timeout, rejection).
    /// Generally transient and retryable.
    Network,

    /// Invalid command-line flags or configuration values.
    Configuration,

    /// Terminal setup, rendering, or teardown problems.
    Terminal,

    /// Programming errors and host integration failures (opening links, logging).
    Internal,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "validation",
            ErrorCategory::Network => "network",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Terminal => "terminal",
            ErrorCategory::Internal => "internal",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "Please check the highlighted fields and try again",
            ErrorCategory::Network => "Your message was kept. Press r to try sending it again",
            ErrorCategory::Configuration => "Run folio --help to see the accepted flags",
            ErrorCategory::Terminal => "Try resizing the window or restarting folio",
            ErrorCategory::Internal => "This may be a bug. Please report it if it persists",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
