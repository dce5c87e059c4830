//! One-time entrance transition for a block of content.
//!
//! A [`Reveal`] describes where content starts (offset and transparent) and
//! how long it takes to settle. The frame at any moment is a pure function
//! of the time since the region's visibility latch flipped.

use std::time::Duration;

/// Transition length for every reveal.
pub const REVEAL_DURATION: Duration = Duration::from_millis(1000);

/// Starting vertical offset for [`RevealDirection::Up`], in rows.
pub const OFFSET_ROWS: i16 = 2;

/// Starting horizontal offset for left/right reveals, in columns.
pub const OFFSET_COLS: i16 = 6;

/// Which way the content travels into place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealDirection {
    /// Starts below its resting place and rises.
    #[default]
    Up,
    /// Starts to the left and slides right.
    Left,
    /// Starts to the right and slides left.
    Right,
}

impl RevealDirection {
    /// Offset `(dx, dy)` of the starting state.
    pub fn start_offset(&self) -> (i16, i16) {
        match self {
            RevealDirection::Up => (0, OFFSET_ROWS),
            RevealDirection::Left => (-OFFSET_COLS, 0),
            RevealDirection::Right => (OFFSET_COLS, 0),
        }
    }
}

/// Position and opacity of revealed content at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    /// Horizontal offset in columns (negative is left).
    pub dx: i16,
    /// Vertical offset in rows (positive is down).
    pub dy: i16,
    /// 0.0 is invisible, 1.0 is fully shown.
    pub opacity: f32,
}

impl RevealFrame {
    pub const RESTING: RevealFrame = RevealFrame {
        dx: 0,
        dy: 0,
        opacity: 1.0,
    };

    pub fn is_resting(&self) -> bool {
        self.dx == 0 && self.dy == 0 && self.opacity >= 1.0
    }
}

/// Entrance transition settings for one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub delay: Duration,
    pub direction: RevealDirection,
    pub duration: Duration,
}

impl Default for Reveal {
    fn default() -> Self {
        Self {
            delay: Duration::ZERO,
            direction: RevealDirection::Up,
            duration: REVEAL_DURATION,
        }
    }
}

impl Reveal {
    pub fn new(delay_ms: u64, direction: RevealDirection) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            direction,
            ..Self::default()
        }
    }

    pub fn up(delay_ms: u64) -> Self {
        Self::new(delay_ms, RevealDirection::Up)
    }

    /// Hidden, offset starting state.
    pub fn start_frame(&self) -> RevealFrame {
        let (dx, dy) = self.direction.start_offset();
        RevealFrame {
            dx,
            dy,
            opacity: 0.0,
        }
    }

    /// Frame at `since_latch` after the region became visible.
    ///
    /// `None` (not yet visible) and anything inside the delay give the
    /// starting state; the transition then eases to rest over `duration`.
    pub fn frame(&self, since_latch: Option<Duration>) -> RevealFrame {
        let Some(elapsed) = since_latch else {
            return self.start_frame();
        };
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return self.start_frame();
        };
        if active >= self.duration || self.duration.is_zero() {
            return RevealFrame::RESTING;
        }

        let t = active.as_secs_f32() / self.duration.as_secs_f32();
        let progress = ease(t);
        let (dx, dy) = self.direction.start_offset();
        let remaining = 1.0 - progress;

        RevealFrame {
            dx: (dx as f32 * remaining).round() as i16,
            dy: (dy as f32 * remaining).round() as i16,
            opacity: progress,
        }
    }

    /// Whether the transition has finished `since_latch` after the flip.
    pub fn is_settled(&self, since_latch: Option<Duration>) -> bool {
        since_latch.is_some_and(|elapsed| elapsed >= self.delay + self.duration)
    }
}

/// cubic-bezier(0.17, 0.55, 0.55, 1)
const EASE_X1: f32 = 0.17;
const EASE_Y1: f32 = 0.55;
const EASE_X2: f32 = 0.55;
const EASE_Y2: f32 = 1.0;

fn bezier(t: f32, p1: f32, p2: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

fn bezier_slope(t: f32, p1: f32, p2: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

/// Map linear time `x` in `0..=1` through the reveal easing curve.
pub fn ease(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    if x == 0.0 || x == 1.0 {
        return x;
    }

    // Solve bezier_x(t) = x: a few Newton steps, bisection as fallback.
    let mut t = x;
    for _ in 0..8 {
        let error = bezier(t, EASE_X1, EASE_X2) - x;
        if error.abs() < 1e-5 {
            return bezier(t, EASE_Y1, EASE_Y2);
        }
        let slope = bezier_slope(t, EASE_X1, EASE_X2);
        if slope.abs() < 1e-6 {
            break;
        }
        t = (t - error / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    t = x;
    for _ in 0..32 {
        let value = bezier(t, EASE_X1, EASE_X2);
        if (value - x).abs() < 1e-5 {
            break;
        }
        if value < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    bezier(t, EASE_Y1, EASE_Y2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Option<Duration> {
        Some(Duration::from_millis(value))
    }

    #[test]
    fn test_not_visible_is_start_state() {
        let reveal = Reveal::up(0);
        let frame = reveal.frame(None);
        assert_eq!(frame.dy, OFFSET_ROWS);
        assert_eq!(frame.opacity, 0.0);
    }

    #[test]
    fn test_delay_holds_start_state() {
        let reveal = Reveal::up(400);
        assert_eq!(reveal.frame(ms(399)), reveal.start_frame());
        assert!(reveal.frame(ms(500)).opacity > 0.0);
    }

    #[test]
    fn test_settles_after_delay_plus_duration() {
        let reveal = Reveal::new(200, RevealDirection::Left);
        assert!(!reveal.is_settled(ms(1199)));
        assert!(reveal.is_settled(ms(1200)));
        assert!(reveal.frame(ms(1200)).is_resting());
    }

    #[test]
    fn test_directions() {
        assert_eq!(RevealDirection::Up.start_offset(), (0, OFFSET_ROWS));
        assert_eq!(RevealDirection::Left.start_offset(), (-OFFSET_COLS, 0));
        assert_eq!(RevealDirection::Right.start_offset(), (OFFSET_COLS, 0));
    }

    #[test]
    fn test_offset_shrinks_monotonically() {
        let reveal = Reveal::new(0, RevealDirection::Right);
        let mut last_dx = OFFSET_COLS;
        let mut last_opacity = 0.0;
        for step in 0..=10 {
            let frame = reveal.frame(ms(step * 100));
            assert!(frame.dx <= last_dx);
            assert!(frame.opacity >= last_opacity);
            last_dx = frame.dx;
            last_opacity = frame.opacity;
        }
        assert_eq!(last_dx, 0);
    }

    #[test]
    fn test_ease_endpoints_and_shape() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
        // Ease-out: well past halfway at the temporal midpoint.
        assert!(ease(0.5) > 0.6);
        assert!(ease(0.25) < ease(0.5));
    }
}
