//! Contact form state machine.
//!
//! ```text
//!            submit (valid)              complete(Ok)
//!   Idle ─────────────────▶ Submitting ─────────────▶ Idle + success acknowledgment
//!    ▲                          │
//!    │ dismiss_failure          │ complete(Err)
//!    └──────── Failed ◀─────────┘
//!                 │ retry
//!                 └──────────▶ Submitting
//! ```
//!
//! Delivery itself happens outside the machine: `submit()` hands out a
//! [`PendingSubmission`] and the caller reports the result through
//! [`ContactForm::complete`]. This keeps the machine synchronous and lets a
//! late completion be dropped when the ticket no longer matches.

use tracing::{debug, info, warn};

use super::fields::{Field, FormErrors, FormFields};
use super::submission::{ContactSubmission, PendingSubmission, SubmissionTicket};
use super::validation::validate;
use crate::error::{FormError, SubmissionError};
use crate::traits::ContactTransport;

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    /// A submission is in flight; further submits are rejected.
    Submitting,
    /// The last delivery failed. Fields are retained for a retry.
    Failed(SubmissionError),
}

/// Result of [`ContactForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the form moved to `Submitting`.
    Started(PendingSubmission),
    /// Validation failed; the errors are now set on the form.
    Invalid,
    /// Another submission is still in flight. Nothing changed.
    InFlight,
}

/// Result of [`ContactForm::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Delivered: fields reset and the acknowledgment is showing.
    Delivered,
    /// Delivery failed: the form is in `Failed`.
    Failed,
    /// The ticket was stale (torn down or superseded); no state changed.
    Discarded,
}

/// Contact form values, validation errors, and submission status.
#[derive(Debug, Default)]
pub struct ContactForm {
    fields: FormFields,
    errors: FormErrors,
    status: SubmissionStatus,
    success_visible: bool,
    in_flight: Option<SubmissionTicket>,
    next_ticket: u64,
    delivered: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// The failure of the last attempt, if it failed.
    pub fn failure(&self) -> Option<&SubmissionError> {
        match &self.status {
            SubmissionStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the "Message Sent!" acknowledgment is showing.
    pub fn success_visible(&self) -> bool {
        self.success_visible
    }

    /// Number of submissions delivered since the form was created.
    pub fn delivered_count(&self) -> u64 {
        self.delivered
    }

    /// Set a field value, clearing that field's error if one is shown.
    ///
    /// The field is not re-validated. Edits are ignored while a submission
    /// is in flight; returns whether the edit was applied.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.is_submitting() {
            debug!(field = field.key(), "ignoring edit while submitting");
            return false;
        }
        self.fields.set(field, value);
        if self.errors.clear_field(field) {
            debug!(field = field.key(), "cleared validation error on edit");
        }
        true
    }

    /// [`update_field`](Self::update_field) addressed by field key.
    pub fn update_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<bool, FormError> {
        let field: Field = name.parse()?;
        Ok(self.update_field(field, value))
    }

    /// Append a character to a field (keyboard editing).
    pub fn push_char(&mut self, field: Field, c: char) -> bool {
        if c == '\n' && !field.is_multiline() {
            return false;
        }
        let mut value = self.fields.get(field).to_string();
        value.push(c);
        self.update_field(field, value)
    }

    /// Remove the last character of a field (keyboard editing).
    pub fn pop_char(&mut self, field: Field) -> bool {
        let mut value = self.fields.get(field).to_string();
        if value.pop().is_none() {
            return false;
        }
        self.update_field(field, value)
    }

    /// Run every validation rule against the current values.
    pub fn validate(&self) -> FormErrors {
        validate(&self.fields)
    }

    /// Validate and, when valid, move to `Submitting`.
    ///
    /// Invalid input replaces the error mapping and leaves the status alone.
    /// A call while `Submitting` changes nothing.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.in_flight.is_some() {
            warn!("submit rejected: a submission is already in flight");
            return SubmitOutcome::InFlight;
        }

        let errors = self.validate();
        if !errors.is_empty() {
            debug!(invalid = errors.len(), "submit blocked by validation");
            self.errors = errors;
            return SubmitOutcome::Invalid;
        }

        self.errors = errors;
        self.next_ticket += 1;
        let ticket = SubmissionTicket(self.next_ticket);
        self.in_flight = Some(ticket);
        self.status = SubmissionStatus::Submitting;
        self.success_visible = false;
        info!(ticket = ticket.id(), "contact submission started");

        SubmitOutcome::Started(PendingSubmission {
            ticket,
            payload: ContactSubmission::from_fields(&self.fields),
        })
    }

    /// Apply the result of delivering the submission identified by `ticket`.
    pub fn complete(
        &mut self,
        ticket: SubmissionTicket,
        result: Result<(), SubmissionError>,
    ) -> CompletionOutcome {
        if self.in_flight != Some(ticket) {
            debug!(ticket = ticket.id(), "discarding stale submission result");
            return CompletionOutcome::Discarded;
        }
        self.in_flight = None;

        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Idle;
                self.success_visible = true;
                self.fields.clear();
                self.delivered += 1;
                info!(ticket = ticket.id(), "contact submission delivered");
                CompletionOutcome::Delivered
            }
            Err(err) => {
                warn!(
                    ticket = ticket.id(),
                    code = err.error_code(),
                    retryable = err.is_retryable(),
                    "contact submission failed: {}",
                    err
                );
                self.status = SubmissionStatus::Failed(err);
                CompletionOutcome::Failed
            }
        }
    }

    /// Validate, deliver through `transport`, and apply the result.
    ///
    /// Returns `None` when nothing was sent (invalid input or in flight).
    pub async fn submit_via(
        &mut self,
        transport: &dyn ContactTransport,
    ) -> Option<CompletionOutcome> {
        match self.submit() {
            SubmitOutcome::Started(pending) => {
                let result = transport.send(&pending.payload).await;
                Some(self.complete(pending.ticket, result))
            }
            SubmitOutcome::Invalid | SubmitOutcome::InFlight => None,
        }
    }

    /// Re-send the retained fields after a failure.
    ///
    /// Returns `None` unless the form is in `Failed` with a retryable error.
    pub fn retry(&mut self) -> Option<SubmitOutcome> {
        if !self.can_retry() {
            return None;
        }
        self.status = SubmissionStatus::Idle;
        Some(self.submit())
    }

    /// Whether the current failure is worth sending again.
    pub fn can_retry(&self) -> bool {
        self.failure().is_some_and(SubmissionError::is_retryable)
    }

    /// Hide the success acknowledgment.
    pub fn dismiss_success(&mut self) {
        self.success_visible = false;
    }

    /// Leave `Failed` for `Idle`, keeping the field values.
    pub fn dismiss_failure(&mut self) {
        if matches!(self.status, SubmissionStatus::Failed(_)) {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Forget any in-flight submission so its completion is discarded.
    pub fn teardown(&mut self) {
        if let Some(ticket) = self.in_flight.take() {
            debug!(ticket = ticket.id(), "form torn down mid-submission");
        }
        if self.is_submitting() {
            self.status = SubmissionStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::validation::{EMAIL_INVALID, MESSAGE_REQUIRED, NAME_REQUIRED};

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "Ada");
        form.update_field(Field::Email, "ada@example.com");
        form.update_field(Field::Message, "Let's build something");
        form
    }

    fn start(form: &mut ContactForm) -> PendingSubmission {
        match form.submit() {
            SubmitOutcome::Started(pending) => pending,
            other => panic!("expected submission to start, got {:?}", other),
        }
    }

    #[test]
    fn test_new_form_is_idle_and_empty() {
        let form = ContactForm::new();
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert!(form.fields().is_empty());
        assert!(form.errors().is_empty());
        assert!(!form.success_visible());
    }

    #[test]
    fn test_invalid_submit_sets_errors_without_status_change() {
        let mut form = ContactForm::new();
        form.update_field(Field::Email, "nope");

        assert_eq!(form.submit(), SubmitOutcome::Invalid);
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert_eq!(form.errors().get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(form.errors().get(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(form.errors().get(Field::Message), Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn test_edit_clears_only_that_fields_error() {
        let mut form = ContactForm::new();
        form.submit();
        assert_eq!(form.errors().len(), 3);

        form.update_field(Field::Name, "X");
        assert!(!form.errors().contains(Field::Name));
        assert!(form.errors().contains(Field::Email));
        assert!(form.errors().contains(Field::Message));
    }

    #[test]
    fn test_edit_does_not_revalidate() {
        let mut form = ContactForm::new();
        form.submit();
        form.update_field(Field::Email, "still-bad");
        assert!(!form.errors().contains(Field::Email));
    }

    #[test]
    fn test_update_field_by_name() {
        let mut form = ContactForm::new();
        assert_eq!(form.update_field_by_name("message", "hi"), Ok(true));
        assert_eq!(form.fields().message, "hi");
        assert_eq!(
            form.update_field_by_name("phone", "555"),
            Err(FormError::UnknownField("phone".to_string()))
        );
    }

    #[test]
    fn test_valid_submit_moves_to_submitting() {
        let mut form = filled_form();
        let pending = start(&mut form);

        assert!(form.is_submitting());
        assert_eq!(pending.payload.name, "Ada");
        assert_eq!(pending.payload.email, "ada@example.com");
    }

    #[test]
    fn test_second_submit_while_in_flight_changes_nothing() {
        let mut form = filled_form();
        let _pending = start(&mut form);
        let fields_before = form.fields().clone();
        let errors_before = form.errors().clone();

        assert_eq!(form.submit(), SubmitOutcome::InFlight);
        assert_eq!(form.fields(), &fields_before);
        assert_eq!(form.errors(), &errors_before);
        assert!(form.is_submitting());
    }

    #[test]
    fn test_successful_completion_resets_fields_and_acknowledges_once() {
        let mut form = filled_form();
        let pending = start(&mut form);

        assert_eq!(form.complete(pending.ticket, Ok(())), CompletionOutcome::Delivered);
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert_eq!(form.fields(), &FormFields::default());
        assert!(form.success_visible());
        assert_eq!(form.delivered_count(), 1);

        // A duplicate completion for the same ticket is ignored.
        assert_eq!(form.complete(pending.ticket, Ok(())), CompletionOutcome::Discarded);
        assert_eq!(form.delivered_count(), 1);
    }

    #[test]
    fn test_dismiss_success_only_hides_acknowledgment() {
        let mut form = filled_form();
        let pending = start(&mut form);
        form.complete(pending.ticket, Ok(()));

        form.dismiss_success();
        assert!(!form.success_visible());
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert_eq!(form.delivered_count(), 1);
    }

    #[test]
    fn test_failed_completion_keeps_fields() {
        let mut form = filled_form();
        let pending = start(&mut form);
        let err = SubmissionError::Timeout { seconds: 5 };

        assert_eq!(form.complete(pending.ticket, Err(err.clone())), CompletionOutcome::Failed);
        assert_eq!(form.failure(), Some(&err));
        assert_eq!(form.fields().name, "Ada");
        assert!(!form.success_visible());
    }

    #[test]
    fn test_retry_after_failure_starts_new_ticket() {
        let mut form = filled_form();
        let first = start(&mut form);
        form.complete(
            first.ticket,
            Err(SubmissionError::ConnectionFailed {
                message: "refused".to_string(),
            }),
        );

        match form.retry() {
            Some(SubmitOutcome::Started(second)) => {
                assert_ne!(second.ticket, first.ticket);
                assert!(form.is_submitting());
            }
            other => panic!("expected retry to start, got {:?}", other),
        }
    }

    #[test]
    fn test_rejected_submission_cannot_be_retried() {
        let mut form = filled_form();
        let pending = start(&mut form);
        let err = SubmissionError::Rejected {
            status: 422,
            message: "spam detected".to_string(),
        };
        form.complete(pending.ticket, Err(err.clone()));

        assert!(!form.can_retry());
        assert_eq!(form.retry(), None);
        assert_eq!(form.failure(), Some(&err));
        assert_eq!(form.fields().name, "Ada");
    }

    #[test]
    fn test_retry_without_failure_is_noop() {
        let mut form = filled_form();
        assert_eq!(form.retry(), None);
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_dismiss_failure_returns_to_idle() {
        let mut form = filled_form();
        let pending = start(&mut form);
        form.complete(pending.ticket, Err(SubmissionError::Timeout { seconds: 1 }));

        form.dismiss_failure();
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert_eq!(form.fields().message, "Let's build something");
    }

    #[test]
    fn test_teardown_discards_late_completion() {
        let mut form = filled_form();
        let pending = start(&mut form);

        form.teardown();
        assert_eq!(form.complete(pending.ticket, Ok(())), CompletionOutcome::Discarded);
        assert!(!form.success_visible());
        assert_eq!(form.fields().name, "Ada");
    }

    #[test]
    fn test_edits_ignored_while_submitting() {
        let mut form = filled_form();
        let _pending = start(&mut form);

        assert!(!form.update_field(Field::Name, "Grace"));
        assert_eq!(form.fields().name, "Ada");
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut form = ContactForm::new();
        assert!(form.push_char(Field::Name, 'A'));
        assert!(form.push_char(Field::Name, 'b'));
        assert!(!form.push_char(Field::Name, '\n'));
        assert!(form.push_char(Field::Message, '\n'));
        assert_eq!(form.fields().name, "Ab");

        assert!(form.pop_char(Field::Name));
        assert_eq!(form.fields().name, "A");
        assert!(!form.pop_char(Field::Email));
    }
}
