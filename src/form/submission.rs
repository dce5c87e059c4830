//! Payload and bookkeeping for an in-flight contact submission.

use serde::{Deserialize, Serialize};

use super::fields::FormFields;

/// The message a transport delivers.
///
/// Serializes to the JSON body a mail endpoint would receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Snapshot the current field values, trimmed.
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            message: fields.message.trim().to_string(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Identifies one submission attempt.
///
/// A completion carrying an outdated ticket is discarded, which is how late
/// results arriving after teardown (or after a newer attempt) are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(pub(crate) u64);

impl SubmissionTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Handed out by a successful `submit()`; the caller delivers `payload`
/// and reports back with `ticket`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub ticket: SubmissionTicket,
    pub payload: ContactSubmission,
}
