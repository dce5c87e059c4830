//! Form editing, submission, and outbound links.
//!
//! Delivery runs on a spawned task; its result comes back through the app
//! message channel and is applied in [`App::handle_message`].

use std::sync::Arc;

use tracing::{info, warn};

use super::{App, AppMessage, Focus};
use crate::content::PROFILE;
use crate::error::{FolioError, FolioResult};
use crate::form::{CompletionOutcome, PendingSubmission, SubmitOutcome};

impl App {
    /// Type a character into the focused field.
    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.focus.field() {
            if self.form.push_char(field, c) {
                self.cursor_blink.reset(self.tick_count);
                self.mark_dirty();
            }
        }
    }

    /// Enter inside a field: newline in the message, next control elsewhere.
    pub fn insert_newline(&mut self) {
        match self.focus.field() {
            Some(field) if field.is_multiline() => self.insert_char('\n'),
            Some(_) => self.focus_next(),
            None => {}
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focus.field() {
            if self.form.pop_char(field) {
                self.cursor_blink.reset(self.tick_count);
                self.mark_dirty();
            }
        }
    }

    /// Append pasted text to the focused field.
    ///
    /// Line breaks become spaces in single-line fields.
    pub fn paste(&mut self, text: &str) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let text = if field.is_multiline() {
            text.replace("\r\n", "\n")
        } else {
            text.replace(['\r', '\n'], " ")
        };
        let value = format!("{}{}", self.form.fields().get(field), text);
        if self.form.update_field(field, value) {
            self.cursor_blink.reset(self.tick_count);
            self.mark_dirty();
        }
    }

    /// Validate and, when valid, start delivering the form.
    ///
    /// Returns whether a delivery started. Invalid input moves the caret to
    /// the first field with an error.
    pub fn submit_contact_form(&mut self) -> bool {
        match self.form.submit() {
            SubmitOutcome::Started(pending) => {
                self.spawn_submission(pending);
                self.mark_dirty();
                true
            }
            SubmitOutcome::Invalid => {
                let first_error = self.form.errors().iter().next().map(|(field, _)| field);
                if let Some(field) = first_error {
                    self.focus_field(field);
                }
                self.mark_dirty();
                false
            }
            SubmitOutcome::InFlight => false,
        }
    }

    /// Send the retained fields again after a failure.
    pub fn retry_submission(&mut self) -> bool {
        match self.form.retry() {
            Some(SubmitOutcome::Started(pending)) => {
                info!("retrying contact submission");
                self.spawn_submission(pending);
                self.mark_dirty();
                true
            }
            Some(_) => {
                self.mark_dirty();
                false
            }
            None => false,
        }
    }

    fn spawn_submission(&mut self, pending: PendingSubmission) {
        let PendingSubmission { ticket, payload } = pending;
        let transport = Arc::clone(&self.transport);
        let tx = self.message_tx.clone();

        if let Some(previous) = self.submission_task.take() {
            previous.abort();
        }
        self.submission_task = Some(tokio::spawn(async move {
            let result = transport.send(&payload).await;
            // The receiver is gone only when the app is shutting down.
            let _ = tx.send(AppMessage::SubmissionFinished { ticket, result });
        }));
    }

    /// Apply a message from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::SubmissionFinished { ticket, result } => {
                let outcome = self.form.complete(ticket, result);
                if outcome != CompletionOutcome::Discarded {
                    self.submission_task = None;
                }
                if outcome == CompletionOutcome::Delivered && self.focus.is_form() {
                    self.focus = Focus::Page;
                }
                self.mark_dirty();
            }
        }
    }

    pub fn dismiss_success(&mut self) {
        self.form.dismiss_success();
        self.mark_dirty();
    }

    pub fn dismiss_failure(&mut self) {
        self.form.dismiss_failure();
        self.mark_dirty();
    }

    /// Hand the contact address to the system mail client.
    pub fn open_email(&mut self) -> FolioResult<()> {
        let target = format!("mailto:{}", PROFILE.email);
        match (self.link_opener)(&target) {
            Ok(()) => {
                info!(target = %target, "opened mail link");
                self.set_status(format!("Opening mail client for {}", PROFILE.email), false);
                Ok(())
            }
            Err(e) => {
                warn!(target = %target, error = %e, "failed to open mail link");
                let err = FolioError::OpenLink {
                    target,
                    message: e.to_string(),
                };
                self.set_status(err.user_message(), true);
                Err(err)
            }
        }
    }
}
