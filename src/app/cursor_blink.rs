//! Form caret blink timing.
//!
//! The caret stays solid for a short wait after any edit or focus change,
//! then alternates on and off. Timing is counted in app ticks.

/// Blink state for the caret drawn in the focused form field.
#[derive(Debug, Clone)]
pub struct CursorBlinkState {
    last_activity_tick: u64,
    is_visible: bool,
    /// Ticks the caret stays solid after activity (~500ms at 60fps).
    blinkwait_ticks: u64,
    /// Ticks per visible or hidden phase (~250ms at 60fps).
    blink_half_cycle_ticks: u64,
}

impl Default for CursorBlinkState {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorBlinkState {
    pub fn new() -> Self {
        Self {
            last_activity_tick: 0,
            is_visible: true,
            blinkwait_ticks: 31,
            blink_half_cycle_ticks: 16,
        }
    }

    /// Make the caret solid again and restart the wait.
    pub fn reset(&mut self, current_tick: u64) {
        self.last_activity_tick = current_tick;
        self.is_visible = true;
    }

    /// Advance to `current_tick`. Returns whether visibility flipped.
    pub fn update(&mut self, current_tick: u64) -> bool {
        let since_activity = current_tick.saturating_sub(self.last_activity_tick);

        let visible = if since_activity < self.blinkwait_ticks {
            true
        } else {
            let into_blink = since_activity - self.blinkwait_ticks;
            into_blink % (self.blink_half_cycle_ticks * 2) < self.blink_half_cycle_ticks
        };

        let changed = self.is_visible != visible;
        self.is_visible = visible;
        changed
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_visible_cursor() {
        let state = CursorBlinkState::new();
        assert!(state.is_visible());
        assert_eq!(state.blinkwait_ticks, 31);
        assert_eq!(state.blink_half_cycle_ticks, 16);
    }

    #[test]
    fn test_cursor_stays_visible_during_blinkwait() {
        let mut state = CursorBlinkState::new();
        state.reset(0);
        for tick in 0..31 {
            state.update(tick);
            assert!(state.is_visible(), "hidden at tick {} during blinkwait", tick);
        }
    }

    #[test]
    fn test_cursor_blinks_after_wait() {
        let mut state = CursorBlinkState::new();
        state.reset(0);

        assert!(!state.update(31));
        assert!(state.is_visible());

        assert!(state.update(47));
        assert!(!state.is_visible());

        assert!(state.update(63));
        assert!(state.is_visible());
    }

    #[test]
    fn test_reset_makes_cursor_visible() {
        let mut state = CursorBlinkState::new();
        state.reset(0);
        state.update(50);
        assert!(!state.is_visible());

        state.reset(100);
        assert!(state.is_visible());
        assert!(!state.update(120));
        assert!(state.is_visible());
    }

    #[test]
    fn test_saturating_sub_handles_overflow() {
        let mut state = CursorBlinkState::new();
        state.last_activity_tick = 100;
        let changed = state.update(50);
        assert!(state.is_visible());
        assert!(!changed);
    }
}
