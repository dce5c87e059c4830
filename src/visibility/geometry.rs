//! Intersection geometry in page coordinates.

use ratatui::layout::Rect;

/// Grow (positive) or shrink (negative) `root` by `margin` cells on every side.
pub fn apply_margin(root: Rect, margin: i16) -> Rect {
    if margin >= 0 {
        let m = margin as u16;
        let x = root.x.saturating_sub(m);
        let y = root.y.saturating_sub(m);
        Rect {
            x,
            y,
            width: root.right().saturating_add(m) - x,
            height: root.bottom().saturating_add(m) - y,
        }
    } else {
        let m = margin.unsigned_abs();
        Rect {
            x: root.x.saturating_add(m),
            y: root.y.saturating_add(m),
            width: root.width.saturating_sub(m.saturating_mul(2)),
            height: root.height.saturating_sub(m.saturating_mul(2)),
        }
    }
}

/// Fraction of `target` inside the margin-adjusted `root`, in `0.0..=1.0`.
///
/// A zero-area target counts as fully visible when its origin lies inside
/// the root and invisible otherwise.
pub fn intersection_ratio(target: Rect, root: Rect, margin: i16) -> f32 {
    let root = apply_margin(root, margin);
    let target_area = target.width as u32 * target.height as u32;

    if target_area == 0 {
        let inside = target.x >= root.x
            && target.x <= root.right()
            && target.y >= root.y
            && target.y <= root.bottom();
        return if inside && !root.is_empty() { 1.0 } else { 0.0 };
    }

    let overlap = target.intersection(root);
    let overlap_area = overlap.width as u32 * overlap.height as u32;
    (overlap_area as f32 / target_area as f32).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect::new(x, y, width, height)
    }

    #[test]
    fn test_fully_inside() {
        let ratio = intersection_ratio(rect(0, 10, 20, 5), rect(0, 0, 80, 30), 0);
        assert_eq!(ratio, 1.0);
    }

    #[test]
    fn test_fully_outside() {
        let ratio = intersection_ratio(rect(0, 40, 20, 5), rect(0, 0, 80, 30), 0);
        assert_eq!(ratio, 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // 2 of 10 rows inside the root
        let ratio = intersection_ratio(rect(0, 28, 20, 10), rect(0, 0, 80, 30), 0);
        assert!((ratio - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_positive_margin_extends_root() {
        let target = rect(0, 30, 20, 10);
        let root = rect(0, 0, 80, 30);
        assert_eq!(intersection_ratio(target, root, 0), 0.0);
        assert!((intersection_ratio(target, root, 5) - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_negative_margin_shrinks_root() {
        let shrunk = apply_margin(rect(10, 10, 20, 20), -5);
        assert_eq!(shrunk, rect(15, 15, 10, 10));
    }

    #[test]
    fn test_margin_saturates_at_origin() {
        let grown = apply_margin(rect(2, 1, 10, 10), 5);
        assert_eq!(grown.x, 0);
        assert_eq!(grown.y, 0);
        assert_eq!(grown.right(), 17);
        assert_eq!(grown.bottom(), 16);
    }

    #[test]
    fn test_zero_area_target() {
        let root = rect(0, 0, 80, 30);
        assert_eq!(intersection_ratio(rect(5, 5, 0, 0), root, 0), 1.0);
        assert_eq!(intersection_ratio(rect(5, 50, 0, 0), root, 0), 0.0);
    }
}
