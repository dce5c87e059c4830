//! One-shot visibility latch for a single region.

use ratatui::layout::Rect;

/// Observation options, mirroring the usual intersection observer knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Explicit root rectangle in page coordinates; `None` uses the viewport.
    pub root: Option<Rect>,
    /// Cells added to (or, when negative, removed from) each side of the root.
    pub root_margin: i16,
    /// Minimum visible fraction of the region that latches it.
    pub threshold: f32,
}

impl Default for ObserverOptions {
    /// No explicit root, no margin, 10% threshold.
    fn default() -> Self {
        Self {
            root: None,
            root_margin: 0,
            threshold: 0.1,
        }
    }
}

impl ObserverOptions {
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_root_margin(mut self, margin: i16) -> Self {
        self.root_margin = margin;
        self
    }

    pub fn with_root(mut self, root: Rect) -> Self {
        self.root = Some(root);
        self
    }

    /// Whether a region showing `ratio` of itself satisfies the threshold.
    pub fn is_satisfied_by(&self, ratio: f32) -> bool {
        ratio > 0.0 && ratio >= self.threshold
    }
}

/// Lifecycle of a tracker. `Latched` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackerState {
    #[default]
    Unobserved,
    Observing,
    Latched,
}

/// A boolean that starts false and flips to true exactly once.
#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    options: ObserverOptions,
    state: TrackerState,
}

impl VisibilityTracker {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            state: TrackerState::Unobserved,
        }
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// Whether the region has ever satisfied the threshold.
    pub fn has_been_visible(&self) -> bool {
        self.state == TrackerState::Latched
    }

    /// Whether intersection reports are currently being accepted.
    pub fn is_observing(&self) -> bool {
        self.state == TrackerState::Observing
    }

    /// Start accepting intersection reports. No effect once latched.
    pub fn observe(&mut self) {
        if self.state == TrackerState::Unobserved {
            self.state = TrackerState::Observing;
        }
    }

    /// Stop accepting reports without latching. No effect once latched.
    pub fn unobserve(&mut self) {
        if self.state == TrackerState::Observing {
            self.state = TrackerState::Unobserved;
        }
    }

    /// Feed an intersection ratio. Returns true only on the false→true flip.
    pub fn report(&mut self, ratio: f32) -> bool {
        if self.state != TrackerState::Observing {
            return false;
        }
        if self.options.is_satisfied_by(ratio) {
            self.state = TrackerState::Latched;
            return true;
        }
        false
    }

    /// Latch without a ratio, used when the host cannot measure intersection.
    pub fn force_latch(&mut self) -> bool {
        if self.state == TrackerState::Latched {
            return false;
        }
        self.state = TrackerState::Latched;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_unobserved_and_invisible() {
        let tracker = VisibilityTracker::new(ObserverOptions::default());
        assert_eq!(tracker.state(), TrackerState::Unobserved);
        assert!(!tracker.has_been_visible());
    }

    #[test]
    fn test_reports_ignored_until_observed() {
        let mut tracker = VisibilityTracker::new(ObserverOptions::default());
        assert!(!tracker.report(1.0));
        assert!(!tracker.has_been_visible());
    }

    #[test]
    fn test_below_threshold_does_not_latch() {
        let mut tracker = VisibilityTracker::new(ObserverOptions::default());
        tracker.observe();
        assert!(!tracker.report(0.05));
        assert!(tracker.is_observing());
    }

    #[test]
    fn test_latches_exactly_once() {
        let mut tracker = VisibilityTracker::new(ObserverOptions::default());
        tracker.observe();
        assert!(tracker.report(0.1));
        assert!(tracker.has_been_visible());

        // Leaving and re-entering the viewport changes nothing.
        assert!(!tracker.report(0.0));
        assert!(!tracker.report(1.0));
        assert!(tracker.has_been_visible());
    }

    #[test]
    fn test_latched_is_terminal() {
        let mut tracker = VisibilityTracker::new(ObserverOptions::default());
        tracker.observe();
        tracker.report(0.5);
        tracker.unobserve();
        tracker.observe();
        assert_eq!(tracker.state(), TrackerState::Latched);
    }

    #[test]
    fn test_zero_threshold_needs_some_overlap() {
        let mut tracker = VisibilityTracker::new(ObserverOptions::default().with_threshold(0.0));
        tracker.observe();
        assert!(!tracker.report(0.0));
        assert!(tracker.report(0.01));
    }

    #[test]
    fn test_force_latch() {
        let mut tracker = VisibilityTracker::new(ObserverOptions::default());
        assert!(tracker.force_latch());
        assert!(!tracker.force_latch());
        assert!(tracker.has_been_visible());
    }

    proptest! {
        #[test]
        fn prop_latch_flips_once_for_any_ratio_sequence(
            threshold in 0.0f32..=1.0,
            ratios in prop::collection::vec(0.0f32..=1.0, 0..40),
        ) {
            let options = ObserverOptions::default().with_threshold(threshold);
            let mut tracker = VisibilityTracker::new(options);
            tracker.observe();

            let mut flips = 0;
            let mut latched = false;
            for ratio in ratios {
                let expected = !latched && options.is_satisfied_by(ratio);
                let flipped = tracker.report(ratio);
                prop_assert_eq!(flipped, expected);
                if flipped {
                    flips += 1;
                    latched = true;
                }
                prop_assert_eq!(tracker.has_been_visible(), latched);
            }
            prop_assert!(flips <= 1);
        }

        #[test]
        fn prop_latched_tracker_ignores_later_reports(
            ratios in prop::collection::vec(0.0f32..=1.0, 0..40),
        ) {
            let mut tracker = VisibilityTracker::new(ObserverOptions::default());
            tracker.observe();
            prop_assert!(tracker.report(1.0));
            for ratio in ratios {
                prop_assert!(!tracker.report(ratio));
                tracker.unobserve();
                tracker.observe();
                prop_assert_eq!(tracker.state(), TrackerState::Latched);
            }
        }
    }
}
