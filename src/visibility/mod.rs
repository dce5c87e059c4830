//! Scroll-into-view detection.
//!
//! A region is "visible" once at least `threshold` of it has been inside the
//! viewport. The flag is a latch: it never goes back to false, and the region
//! stops being evaluated after it flips.
//!
//! ```text
//! Unobserved ──observe──▶ Observing ──ratio ≥ threshold──▶ Latched
//!      ▲                      │
//!      └──────unobserve───────┘
//! ```

pub mod geometry;
pub mod observer;
pub mod tracker;

pub use geometry::{apply_margin, intersection_ratio};
pub use observer::{RegionId, VisibilityObserver};
pub use tracker::{ObserverOptions, TrackerState, VisibilityTracker};
