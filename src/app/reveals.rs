//! Entrance animations driven by the visibility observer.
//!
//! Every block with a [`Reveal`](crate::reveal::Reveal) is mounted as an
//! observed region. When the observer latches a region the current clock is
//! recorded; the block's frame is then a pure function of the time since.

use std::time::Duration;

use ratatui::layout::Rect;

use super::App;
use crate::page::{BlockKind, NAVBAR_HEIGHT};
use crate::reveal::RevealFrame;

impl App {
    /// Rows available to page content below the navbar.
    pub fn viewport_height(&self) -> u16 {
        self.height.saturating_sub(NAVBAR_HEIGHT)
    }

    /// The visible slice of the page, in page coordinates.
    pub fn viewport_rect(&self) -> Rect {
        Rect::new(0, self.scroll, self.width, self.viewport_height())
    }

    /// Register (or re-position) an observed region for every animated block.
    pub(super) fn mount_regions(&mut self) {
        for block in self.layout.blocks() {
            if block.reveal.is_none() {
                continue;
            }
            match self.regions.get(&block.kind) {
                Some(id) => self.observer.set_bounds(*id, block.rect),
                None => {
                    let id = self.observer.observe(block.rect);
                    self.regions.insert(block.kind, id);
                }
            }
        }
        self.regions_mounted = true;
        self.poll_visibility();
    }

    /// Latch every region the viewport now shows enough of.
    pub(super) fn poll_visibility(&mut self) {
        let viewport = self.viewport_rect();
        let latched = self.observer.poll(&viewport);
        if latched.is_empty() {
            return;
        }
        for id in latched {
            let kind = self
                .regions
                .iter()
                .find_map(|(kind, region)| (*region == id).then_some(*kind));
            if let Some(kind) = kind {
                self.latched_at.entry(kind).or_insert(self.clock);
            }
        }
        self.needs_redraw = true;
    }

    /// Whether `kind` has been on screen at least once.
    pub fn has_been_visible(&self, kind: BlockKind) -> bool {
        self.latched_at.contains_key(&kind)
    }

    fn since_latch(&self, kind: BlockKind) -> Option<Duration> {
        self.latched_at
            .get(&kind)
            .map(|at| self.clock.saturating_sub(*at))
    }

    /// Current entrance frame for a block.
    pub fn reveal_frame(&self, kind: BlockKind) -> RevealFrame {
        if !self.config.animations {
            return RevealFrame::RESTING;
        }
        match self.layout.block(kind).and_then(|b| b.reveal) {
            Some(reveal) => reveal.frame(self.since_latch(kind)),
            None => RevealFrame::RESTING,
        }
    }

    /// Whether any latched block is still mid-transition.
    pub fn is_animating(&self) -> bool {
        if !self.config.animations {
            return false;
        }
        self.layout.blocks().iter().any(|block| match block.reveal {
            Some(reveal) => {
                let since = self.since_latch(block.kind);
                since.is_some() && !reveal.is_settled(since)
            }
            None => false,
        })
    }

    /// Number of animated blocks that have not been seen yet.
    pub fn pending_reveals(&self) -> usize {
        self.observer.active_subscriptions()
    }
}
