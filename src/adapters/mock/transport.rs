//! Mock contact transport for testing.
//!
//! Returns scripted results (success by default), records every payload it
//! is asked to send, and can hold sends open until the test releases them.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::error::SubmissionError;
use crate::form::ContactSubmission;
use crate::traits::ContactTransport;

/// Mock transport for tests.
///
/// Cloning shares the script, the recorded calls, and the gate.
///
/// # Example
///
/// ```ignore
/// let transport = MockTransport::new();
/// transport.push_result(Err(SubmissionError::Timeout { seconds: 30 }));
///
/// form.submit_via(&transport).await;
/// assert_eq!(transport.calls().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    results: Arc<Mutex<VecDeque<Result<(), SubmissionError>>>>,
    calls: Arc<Mutex<Vec<ContactSubmission>>>,
    gate: Option<Arc<Semaphore>>,
}

impl MockTransport {
    /// Transport that accepts everything immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport whose sends block until [`release`](Self::release) is called.
    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Semaphore::new(0))),
            ..Self::default()
        }
    }

    /// Transport that fails every send with `error` until re-scripted.
    pub fn failing(error: SubmissionError) -> Self {
        let transport = Self::new();
        transport.push_result(Err(error));
        transport
    }

    /// Queue the result for the next send. Once the queue is empty, sends succeed.
    pub fn push_result(&self, result: Result<(), SubmissionError>) {
        self.results.lock().unwrap().push_back(result);
    }

    /// Let one held send complete.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    /// Every payload passed to `send`, in call order.
    pub fn calls(&self) -> Vec<ContactSubmission> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ContactTransport for MockTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), SubmissionError> {
        self.calls.lock().unwrap().push(submission.clone());

        if let Some(gate) = &self.gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }

        self.results.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
