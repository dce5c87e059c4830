//! Simulated contact transport.
//!
//! There is no mail backend. Sending waits a fixed delay on the tokio timer
//! and then reports success, which is all the contact form needs to walk
//! through its submitting state.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::SubmissionError;
use crate::form::ContactSubmission;
use crate::traits::ContactTransport;

/// Delay used when none is configured.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

/// Transport that always succeeds after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl ContactTransport for SimulatedTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), SubmissionError> {
        debug!(
            delay_ms = self.delay.as_millis() as u64,
            bytes = submission.message.len(),
            "simulating contact delivery"
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(SimulatedTransport::default().delay(), Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_waits_full_delay_then_succeeds() {
        let transport = SimulatedTransport::default();
        let started = tokio::time::Instant::now();

        let result = transport.send(&submission()).await;

        assert!(result.is_ok());
        assert_eq!(started.elapsed(), Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_is_pending_before_delay() {
        let transport = SimulatedTransport::new(Duration::from_millis(500));
        let payload = submission();
        let outcome = tokio::time::timeout(Duration::from_millis(499), transport.send(&payload)).await;
        assert!(outcome.is_err());
    }
}
