//! folio - a single-page developer portfolio for the terminal
//!
//! The page (hero, stats, skills, projects, contact, footer) scrolls under a
//! fixed navbar; sections fade in the first time they reach the viewport,
//! and the contact form submits through an injectable transport.
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod form;
pub mod input;
pub mod logging;
pub mod page;
pub mod reveal;
pub mod terminal;
pub mod theme;
pub mod traits;
pub mod ui;
pub mod visibility;
