//! Trait abstractions for dependency injection and testability.
//!
//! - [`ContactTransport`] - delivery of contact form submissions
//! - [`ViewportProbe`] - which part of the page is on screen

pub mod transport;
pub mod viewport;

pub use transport::ContactTransport;
pub use viewport::ViewportProbe;
