//! Screen-level sizing for chrome drawn outside the page column.
//!
//! Page blocks get their geometry from [`crate::page::PageLayout`]; the
//! navbar, overlays, dialogs and the hints bar size themselves from the
//! terminal dimensions through a [`LayoutContext`].

use ratatui::layout::Rect;

use crate::page::layout::breakpoints::{SM_WIDTH, XS_WIDTH};

/// Terminal height below which the hints bar is dropped.
pub const SHORT_HEIGHT: u16 = 16;

/// Terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_area(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// `percentage` of the width, at least 1 column.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage.min(100) as u32) / 100).max(1) as u16
    }

    /// Percentage of the width clamped to `[min, max]`, never wider than the screen.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage)
            .clamp(min, max.max(min))
            .min(self.width)
    }

    /// Below the small breakpoint: nav links collapse into the menu.
    pub fn is_narrow(&self) -> bool {
        self.width < SM_WIDTH
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < XS_WIDTH
    }

    pub fn is_short(&self) -> bool {
        self.height < SHORT_HEIGHT
    }
}
