//! Page composition: sections, block placement, and text measurement.

pub mod layout;
pub mod section;
pub mod text;

pub use layout::{BlockKind, PageLayout, PlacedBlock, NAVBAR_HEIGHT};
pub use section::Section;
pub use text::{display_width, truncate, wrap_text};
