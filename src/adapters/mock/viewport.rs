//! Viewport probes for tests.

use std::cell::Cell;

use ratatui::layout::Rect;

use crate::traits::ViewportProbe;

/// Probe whose visible rectangle is set by the test.
#[derive(Debug, Clone, Default)]
pub struct FixedViewport {
    rect: Cell<Option<Rect>>,
}

impl FixedViewport {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect: Cell::new(Some(rect)),
        }
    }

    /// Move the viewport, e.g. to simulate scrolling.
    pub fn set(&self, rect: Rect) {
        self.rect.set(Some(rect));
    }

    /// Scroll to `top`, keeping the size.
    pub fn scroll_to(&self, top: u16) {
        if let Some(rect) = self.rect.get() {
            self.rect.set(Some(Rect { y: top, ..rect }));
        }
    }
}

impl ViewportProbe for FixedViewport {
    fn visible_rect(&self) -> Option<Rect> {
        self.rect.get()
    }
}

/// Probe for a host without intersection support.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedViewport;

impl ViewportProbe for UnsupportedViewport {
    fn visible_rect(&self) -> Option<Rect> {
        None
    }
}
