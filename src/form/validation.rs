//! Contact form validation rules.
//!
//! Every rule runs on every call; one invalid field never hides another.

use once_cell::sync::Lazy;
use regex::Regex;

use super::fields::{Field, FormErrors, FormFields};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Structural email check: something, `@`, something, `.`, something.
/// Unanchored on purpose, this is not RFC validation.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Invalid email regex pattern"));

/// Whether `email` passes the permissive structural check.
pub fn is_plausible_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate all fields, returning one message per invalid field.
///
/// The form is valid iff the returned mapping is empty.
pub fn validate(fields: &FormFields) -> FormErrors {
    let mut errors = FormErrors::new();

    if fields.name.trim().is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    if fields.email.trim().is_empty() {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !is_plausible_email(&fields.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    if fields.message.trim().is_empty() {
        errors.insert(Field::Message, MESSAGE_REQUIRED);
    }

    errors
}
