//! Registry of observed regions.
//!
//! Mounting a region subscribes it; the subscription is dropped either when
//! the region first becomes visible (one-shot) or when it is unmounted.

use std::collections::HashMap;

use ratatui::layout::Rect;
use tracing::debug;

use super::geometry::intersection_ratio;
use super::tracker::{ObserverOptions, VisibilityTracker};
use crate::traits::ViewportProbe;

/// Opaque handle to an observed region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(u64);

#[derive(Debug, Clone)]
struct ObservedRegion {
    bounds: Rect,
    tracker: VisibilityTracker,
}

/// Tracks which mounted regions have been on screen at least once.
#[derive(Debug, Clone)]
pub struct VisibilityObserver {
    default_options: ObserverOptions,
    regions: HashMap<RegionId, ObservedRegion>,
    next_id: u64,
}

impl Default for VisibilityObserver {
    fn default() -> Self {
        Self::new(ObserverOptions::default())
    }
}

impl VisibilityObserver {
    pub fn new(default_options: ObserverOptions) -> Self {
        Self {
            default_options,
            regions: HashMap::new(),
            next_id: 0,
        }
    }

    /// Mount a region with the default options.
    pub fn observe(&mut self, bounds: Rect) -> RegionId {
        self.observe_with(bounds, self.default_options)
    }

    /// Mount a region with its own options.
    pub fn observe_with(&mut self, bounds: Rect, options: ObserverOptions) -> RegionId {
        self.next_id += 1;
        let id = RegionId(self.next_id);
        let mut tracker = VisibilityTracker::new(options);
        tracker.observe();
        self.regions.insert(id, ObservedRegion { bounds, tracker });
        id
    }

    /// Unmount a region, dropping its subscription and latch.
    pub fn unobserve(&mut self, id: RegionId) -> bool {
        self.regions.remove(&id).is_some()
    }

    /// Unmount every region.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Move a region after a relayout. Latched regions stay latched.
    pub fn set_bounds(&mut self, id: RegionId, bounds: Rect) {
        if let Some(region) = self.regions.get_mut(&id) {
            region.bounds = bounds;
        }
    }

    pub fn bounds(&self, id: RegionId) -> Option<Rect> {
        self.regions.get(&id).map(|r| r.bounds)
    }

    /// Whether the region has been on screen. Unknown regions report false.
    pub fn has_been_visible(&self, id: RegionId) -> bool {
        self.regions
            .get(&id)
            .is_some_and(|r| r.tracker.has_been_visible())
    }

    /// Number of mounted regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Number of regions still waiting to become visible.
    pub fn active_subscriptions(&self) -> usize {
        self.regions
            .values()
            .filter(|r| r.tracker.is_observing())
            .count()
    }

    /// Evaluate every waiting region against the viewport.
    ///
    /// Returns the regions that latched during this call, in mount order.
    /// Without a measurable viewport every waiting region latches.
    pub fn poll(&mut self, viewport: &dyn ViewportProbe) -> Vec<RegionId> {
        let visible = viewport.visible_rect();
        let mut latched = Vec::new();

        for (id, region) in self.regions.iter_mut() {
            if !region.tracker.is_observing() {
                continue;
            }
            let flipped = match visible {
                Some(viewport_rect) => {
                    let options = *region.tracker.options();
                    let root = options.root.unwrap_or(viewport_rect);
                    let ratio = intersection_ratio(region.bounds, root, options.root_margin);
                    region.tracker.report(ratio)
                }
                None => region.tracker.force_latch(),
            };
            if flipped {
                latched.push(*id);
            }
        }

        latched.sort();
        if !latched.is_empty() {
            debug!(count = latched.len(), "regions became visible");
        }
        latched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoViewport;

    impl ViewportProbe for NoViewport {
        fn visible_rect(&self) -> Option<Rect> {
            None
        }
    }

    fn viewport(scroll: u16) -> Rect {
        Rect::new(0, scroll, 80, 20)
    }

    #[test]
    fn test_region_in_view_latches_on_first_poll() {
        let mut observer = VisibilityObserver::default();
        let id = observer.observe(Rect::new(0, 5, 40, 4));

        assert!(!observer.has_been_visible(id));
        assert_eq!(observer.poll(&viewport(0)), vec![id]);
        assert!(observer.has_been_visible(id));
    }

    #[test]
    fn test_region_below_fold_waits_for_scroll() {
        let mut observer = VisibilityObserver::default();
        let id = observer.observe(Rect::new(0, 50, 40, 10));

        assert!(observer.poll(&viewport(0)).is_empty());
        // 1 of 10 rows visible: exactly the 10% threshold
        assert_eq!(observer.poll(&viewport(31)), vec![id]);
    }

    #[test]
    fn test_latch_survives_scrolling_away() {
        let mut observer = VisibilityObserver::default();
        let id = observer.observe(Rect::new(0, 5, 40, 4));
        observer.poll(&viewport(0));

        assert!(observer.poll(&viewport(200)).is_empty());
        assert!(observer.poll(&viewport(0)).is_empty());
        assert!(observer.has_been_visible(id));
    }

    #[test]
    fn test_subscription_released_on_latch() {
        let mut observer = VisibilityObserver::default();
        observer.observe(Rect::new(0, 5, 40, 4));
        observer.observe(Rect::new(0, 100, 40, 4));
        assert_eq!(observer.active_subscriptions(), 2);

        observer.poll(&viewport(0));
        assert_eq!(observer.active_subscriptions(), 1);
    }

    #[test]
    fn test_unobserve_removes_region() {
        let mut observer = VisibilityObserver::default();
        let id = observer.observe(Rect::new(0, 100, 40, 4));
        assert!(observer.unobserve(id));
        assert!(!observer.unobserve(id));
        assert_eq!(observer.active_subscriptions(), 0);
        assert!(observer.poll(&viewport(100)).is_empty());
        assert!(!observer.has_been_visible(id));
    }

    #[test]
    fn test_missing_viewport_degrades_to_visible() {
        let mut observer = VisibilityObserver::default();
        let a = observer.observe(Rect::new(0, 5, 40, 4));
        let b = observer.observe(Rect::new(0, 500, 40, 4));

        assert_eq!(observer.poll(&NoViewport), vec![a, b]);
        assert!(observer.has_been_visible(b));
    }

    #[test]
    fn test_set_bounds_moves_waiting_region() {
        let mut observer = VisibilityObserver::default();
        let id = observer.observe(Rect::new(0, 100, 40, 4));
        observer.set_bounds(id, Rect::new(0, 2, 40, 4));
        assert_eq!(observer.poll(&viewport(0)), vec![id]);
    }

    #[test]
    fn test_explicit_root_overrides_viewport() {
        let mut observer = VisibilityObserver::default();
        let options = ObserverOptions::default().with_root(Rect::new(0, 100, 80, 10));
        let id = observer.observe_with(Rect::new(0, 5, 40, 4), options);

        assert!(observer.poll(&viewport(0)).is_empty());
        observer.set_bounds(id, Rect::new(0, 102, 40, 4));
        assert_eq!(observer.poll(&viewport(0)), vec![id]);
    }
}
