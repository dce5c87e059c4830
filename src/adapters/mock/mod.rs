//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockTransport`] - contact transport with scripted results
//! - [`FixedViewport`] - viewport probe pinned to a rectangle
//! - [`UnsupportedViewport`] - viewport probe that cannot measure anything

pub mod transport;
pub mod viewport;

pub use transport::MockTransport;
pub use viewport::{FixedViewport, UnsupportedViewport};
