//! Offscreen drawing surface for one page block.
//!
//! Each block is drawn at rest into its own [`Buffer`] in block-local
//! coordinates. The reveal frame is applied afterwards: colors are faded
//! toward the page background and the buffer is copied onto the screen at
//! the offset position, clipped to the viewport. Click targets recorded
//! while drawing travel with the block.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use super::interaction::{ClickAction, HitAreaRegistry};

/// Opacity below which a revealing block does not take clicks.
pub const CLICKABLE_OPACITY: f32 = 0.5;

pub struct BlockCanvas {
    buffer: Buffer,
    /// Screen position of local (0, 0); negative when offset above or left.
    origin: (i32, i32),
    /// Pointer position in local coordinates, if it is over this block.
    pointer: Option<(i32, i32)>,
    interactive: bool,
    hits: Vec<(Rect, ClickAction)>,
}

impl BlockCanvas {
    /// A `width` x `height` canvas filled with `base`.
    pub fn new(width: u16, height: u16, base: Style) -> Self {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        buffer.set_style(area, base);
        Self {
            buffer,
            origin: (0, 0),
            pointer: None,
            interactive: true,
            hits: Vec::new(),
        }
    }

    /// Place the canvas at a screen position. The pointer is translated
    /// into local coordinates for hover checks.
    pub fn at(mut self, origin: (i32, i32), pointer: Option<(u16, u16)>) -> Self {
        self.origin = origin;
        self.pointer = pointer.map(|(x, y)| (x as i32 - origin.0, y as i32 - origin.1));
        self
    }

    /// Whether click targets are live (no dialog on top, block visible enough).
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn area(&self) -> Rect {
        self.buffer.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    /// Render a widget clipped to the canvas.
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        let area = area.intersection(self.buffer.area);
        if !area.is_empty() {
            widget.render(area, &mut self.buffer);
        }
    }

    /// Record a click target. Returns whether the pointer is over it, so
    /// the caller can draw the hover state.
    pub fn clickable(&mut self, rect: Rect, action: ClickAction) -> bool {
        let rect = rect.intersection(self.buffer.area);
        if !self.interactive || rect.is_empty() {
            return false;
        }
        self.hits.push((rect, action));
        self.hovered(rect)
    }

    /// Whether the pointer is over `rect` and the canvas takes input.
    pub fn hovered(&self, rect: Rect) -> bool {
        self.interactive
            && self.pointer.is_some_and(|(x, y)| {
                x >= rect.x as i32
                    && x < rect.right() as i32
                    && y >= rect.y as i32
                    && y < rect.bottom() as i32
            })
    }

    /// Blend every color toward `background`. `opacity` 1.0 leaves the
    /// canvas untouched, 0.0 makes it vanish into the background.
    pub fn fade(&mut self, opacity: f32, background: Color) {
        if opacity >= 1.0 {
            return;
        }
        let area = self.buffer.area;
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = self.buffer.cell_mut((x, y)) {
                    cell.fg = blend(cell.fg, background, opacity);
                    cell.bg = blend(cell.bg, background, opacity);
                }
            }
        }
    }

    /// Copy onto `target` at the canvas origin, clipped to `clip`.
    ///
    /// Blank cells on the page background are skipped so a block moving
    /// through its entrance offset does not erase its neighbours.
    /// Click targets are registered with their screen rects.
    pub fn blit(self, target: &mut Buffer, clip: Rect, background: Color, hits: &mut HitAreaRegistry) {
        let clip = clip.intersection(target.area);
        let (ox, oy) = self.origin;
        let area = self.buffer.area;

        for y in area.top()..area.bottom() {
            let sy = oy + y as i32;
            if sy < clip.top() as i32 || sy >= clip.bottom() as i32 {
                continue;
            }
            for x in area.left()..area.right() {
                let sx = ox + x as i32;
                if sx < clip.left() as i32 || sx >= clip.right() as i32 {
                    continue;
                }
                let Some(cell) = self.buffer.cell((x, y)) else {
                    continue;
                };
                if cell.symbol() == " " && cell.bg == background {
                    continue;
                }
                if let Some(dest) = target.cell_mut((sx as u16, sy as u16)) {
                    *dest = cell.clone();
                }
            }
        }

        for (rect, action) in self.hits {
            if let Some(screen) = translate(rect, self.origin, clip) {
                hits.register(screen, action, None);
            }
        }
    }
}

/// Move a local rect to the screen and clip it; `None` when nothing is left.
fn translate(rect: Rect, origin: (i32, i32), clip: Rect) -> Option<Rect> {
    let left = (origin.0 + rect.x as i32).max(clip.left() as i32);
    let top = (origin.1 + rect.y as i32).max(clip.top() as i32);
    let right = (origin.0 + rect.right() as i32).min(clip.right() as i32);
    let bottom = (origin.1 + rect.bottom() as i32).min(clip.bottom() as i32);
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

/// Linear blend of two RGB colors. Non-RGB colors are kept unless fully
/// transparent.
pub fn blend(color: Color, background: Color, opacity: f32) -> Color {
    let t = opacity.clamp(0.0, 1.0);
    match (color, background) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
            let mix = |c: u8, base: u8| (base as f32 + (c as f32 - base as f32) * t).round() as u8;
            Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
        }
        _ if t <= 0.0 => background,
        _ => color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    const BG: Color = Color::Rgb(0, 0, 0);

    fn base() -> Style {
        Style::default().fg(Color::Rgb(200, 200, 200)).bg(BG)
    }

    #[test]
    fn test_blend_endpoints() {
        let white = Color::Rgb(255, 255, 255);
        assert_eq!(blend(white, BG, 1.0), white);
        assert_eq!(blend(white, BG, 0.0), BG);
        assert_eq!(blend(white, BG, 0.5), Color::Rgb(128, 128, 128));
        assert_eq!(blend(Color::Reset, BG, 0.5), Color::Reset);
    }

    #[test]
    fn test_blit_offsets_and_clips() {
        let mut canvas = BlockCanvas::new(4, 2, base()).at((2, -1), None);
        canvas.render_widget(Paragraph::new("abcd\nefgh"), Rect::new(0, 0, 4, 2));

        let mut target = Buffer::empty(Rect::new(0, 0, 10, 3));
        let mut hits = HitAreaRegistry::new();
        canvas.blit(&mut target, Rect::new(0, 0, 10, 3), BG, &mut hits);

        // First row lands above the screen; second row on row 0.
        assert_eq!(target[(2, 0)].symbol(), "e");
        assert_eq!(target[(5, 0)].symbol(), "h");
        assert_eq!(target[(2, 1)].symbol(), " ");
    }

    #[test]
    fn test_blank_cells_do_not_overwrite() {
        let canvas = BlockCanvas::new(3, 1, base());
        let mut target = Buffer::empty(Rect::new(0, 0, 3, 1));
        target[(1, 0)].set_symbol("x");
        canvas.blit(&mut target, Rect::new(0, 0, 3, 1), BG, &mut HitAreaRegistry::new());
        assert_eq!(target[(1, 0)].symbol(), "x");
    }

    #[test]
    fn test_click_targets_translate_and_clip() {
        let mut canvas = BlockCanvas::new(10, 4, base()).at((5, 8), Some((6, 9)));
        assert!(canvas.clickable(Rect::new(0, 0, 4, 2), ClickAction::OpenEmail));
        assert!(!canvas.clickable(Rect::new(0, 2, 4, 2), ClickAction::SubmitForm));

        let mut hits = HitAreaRegistry::new();
        let mut target = Buffer::empty(Rect::new(0, 0, 40, 10));
        canvas.blit(&mut target, Rect::new(0, 0, 40, 10), BG, &mut hits);

        assert_eq!(hits.hit_test(6, 9), Some(ClickAction::OpenEmail));
        // Second target sits below the clip and is dropped.
        assert_eq!(hits.hit_test(6, 10), None);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_inert_canvas_records_nothing() {
        let mut canvas = BlockCanvas::new(10, 4, base()).interactive(false);
        assert!(!canvas.clickable(Rect::new(0, 0, 4, 2), ClickAction::OpenEmail));
        let mut hits = HitAreaRegistry::new();
        canvas.blit(
            &mut Buffer::empty(Rect::new(0, 0, 10, 4)),
            Rect::new(0, 0, 10, 4),
            BG,
            &mut hits,
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn test_fade_moves_toward_background() {
        let mut canvas = BlockCanvas::new(1, 1, base());
        canvas.fade(0.0, BG);
        assert_eq!(canvas.buffer_mut()[(0, 0)].fg, BG);
    }
}
