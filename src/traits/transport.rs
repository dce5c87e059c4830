//! Contact transport trait abstraction.
//!
//! The contact form never talks to a mail service directly. It hands its
//! payload to a `ContactTransport`, which lets the app run against the
//! simulated transport and tests run against scripted doubles.

use async_trait::async_trait;

use crate::error::SubmissionError;
use crate::form::ContactSubmission;

/// Delivers a contact submission.
///
/// # Example
///
/// ```ignore
/// use folio::traits::ContactTransport;
///
/// async fn deliver<T: ContactTransport>(transport: &T, submission: &ContactSubmission) {
///     if let Err(err) = transport.send(submission).await {
///         eprintln!("{}", err.user_message());
///     }
/// }
/// ```
#[async_trait]
pub trait ContactTransport: Send + Sync {
    /// Deliver `submission`. Resolves once the endpoint has accepted or
    /// refused it.
    async fn send(&self, submission: &ContactSubmission) -> Result<(), SubmissionError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}
