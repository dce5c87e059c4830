//! Unified error handling for folio.
//!
//! - **Error Categories**: high-level classification for handling decisions
//! - **Domain-specific Errors**: form, submission, configuration, CLI
//! - **Unified Error Type**: `FolioError` consolidates all error types
//! - **Result Type Alias**: `FolioResult<T>`
//!
//! Field validation messages ("Name is required", ...) are not errors in
//! this sense: they are data held by the contact form and rendered inline.
//!
//! | Category      | Description                          | Retryable |
//! |---------------|--------------------------------------|-----------|
//! | Validation    | Missing or malformed input           | No        |
//! | Network       | Submission delivery failed           | Yes       |
//! | Configuration | Bad flags or config values           | No        |
//! | Terminal      | Terminal / file IO                   | No        |
//! | Internal      | Link opening, logging setup, bugs    | No        |

mod category;
mod config;
mod folio_error;
mod form;
mod result;
mod submission;

pub use category::ErrorCategory;
pub use config::{CliError, ConfigError};
pub use folio_error::FolioError;
pub use form::FormError;
pub use result::FolioResult;
pub use submission::SubmissionError;
