//! Viewport probe trait abstraction.
//!
//! Visibility tracking only needs one question answered by the host: which
//! part of the page is on screen right now. Keeping that behind a trait
//! lets the latch logic be tested without a terminal.

use ratatui::layout::Rect;

/// Reports the visible part of the page, in page coordinates.
pub trait ViewportProbe {
    /// The page rectangle currently on screen.
    ///
    /// `None` means the host cannot tell; observed regions then count as
    /// visible straight away.
    fn visible_rect(&self) -> Option<Rect>;
}

impl ViewportProbe for Rect {
    fn visible_rect(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl<P: ViewportProbe + ?Sized> ViewportProbe for &P {
    fn visible_rect(&self) -> Option<Rect> {
        (**self).visible_rect()
    }
}
