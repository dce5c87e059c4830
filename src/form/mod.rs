//! Contact form: field values, validation, and the submit state machine.
//!
//! - [`fields`] - [`Field`], [`FormFields`], [`FormErrors`]
//! - [`validation`] - the per-field rules
//! - [`submission`] - payload and ticket types for an in-flight submission
//! - [`machine`] - [`ContactForm`], the state machine itself

pub mod fields;
pub mod machine;
pub mod submission;
pub mod validation;

pub use fields::{Field, FormErrors, FormFields};
pub use machine::{CompletionOutcome, ContactForm, SubmissionStatus, SubmitOutcome};
pub use submission::{ContactSubmission, PendingSubmission, SubmissionTicket};
pub use validation::{is_plausible_email, validate};
