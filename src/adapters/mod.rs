//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`SimulatedTransport`] - stands in for a mail endpoint with a fixed delay
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockTransport`] - scripted results, call recording, hold-in-flight gate
//! - [`mock::FixedViewport`] / [`mock::UnsupportedViewport`] - viewport probes

pub mod mock;
pub mod simulated;

pub use mock::{FixedViewport, MockTransport, UnsupportedViewport};
pub use simulated::SimulatedTransport;
