//! Form-level errors (as opposed to per-field validation messages).

use thiserror::Error;

/// Misuse of the contact form API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The field name is not one of `name`, `email`, `message`.
    #[error("unknown form field: {0}")]
    UnknownField(String),
}
