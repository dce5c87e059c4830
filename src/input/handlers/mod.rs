//! Command handlers for executing commands.
//!
//! This module contains handler functions organized by category:
//! - [`navigation`] - Scrolling, section jumps, menu, form focus
//! - [`editing`] - Form text input and submission
//! - [`modal`] - Acknowledgment and failure dialogs

pub mod editing;
pub mod modal;
pub mod navigation;

pub use editing::*;
pub use modal::*;
pub use navigation::*;
