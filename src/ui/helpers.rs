//! Helper functions for UI rendering
//!
//! Rect arithmetic, color gradients, and span builders shared by the
//! page blocks and the chrome around them.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::page::text::{display_width, wrap_text};

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// One row of `area`, relative to its top.
pub fn row(area: Rect, offset: u16) -> Rect {
    Rect::new(area.x, area.y + offset, area.width, 1).intersection(area)
}

/// A `width` x `height` rect centered horizontally in `area` at row `offset`.
pub fn centered(area: Rect, width: u16, offset: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + offset,
        width,
        height,
    )
    .intersection(area)
}

/// Interpolate between two RGB colors; other colors snap at the midpoint.
pub fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// Color each character of `text` along a gradient.
pub fn gradient_spans(text: &str, from: Color, to: Color, style: Style) -> Vec<Span<'static>> {
    let count = text.chars().count();
    let steps = count.saturating_sub(1).max(1) as f32;
    text.chars()
        .enumerate()
        .map(|(i, c)| Span::styled(c.to_string(), style.fg(lerp_color(from, to, i as f32 / steps))))
        .collect()
}

/// Word-wrap `text` and style the byte range `highlight` differently.
///
/// Relies on [`wrap_text`] joining words with single spaces, so offsets
/// into the original text can be recovered line by line.
pub fn highlighted_lines(
    text: &str,
    highlight: std::ops::Range<usize>,
    width: usize,
    base: Style,
    emphasis: Style,
) -> Vec<Line<'static>> {
    let mut pos = 0;
    let mut lines = Vec::new();
    for line in wrap_text(text, width) {
        let start = text[pos..].find(line.as_str()).map_or(pos, |i| pos + i);
        let end = start + line.len();
        let mut spans = Vec::new();
        let mut cursor = start;
        for (from, to, style) in [
            (start, highlight.start.clamp(start, end), base),
            (highlight.start.clamp(start, end), highlight.end.clamp(start, end), emphasis),
            (highlight.end.clamp(start, end), end, base),
        ] {
            if to > from && from >= cursor {
                spans.push(Span::styled(text[from..to].to_string(), style));
                cursor = to;
            }
        }
        lines.push(Line::from(spans));
        pos = end;
    }
    lines
}

/// Bordered button with a centered label.
pub fn render_button(buf: &mut Buffer, area: Rect, label: &str, filled: bool, accent: Color, fill_text: Color) {
    let (border, text) = if filled {
        (
            Style::default().fg(accent).bg(accent),
            Style::default()
                .fg(fill_text)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(accent),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border);
    if filled {
        block = block.style(Style::default().bg(accent));
    }
    let inner = block.inner(area);
    block.render(area, buf);
    let label_width = display_width(label) as u16;
    let label_area = centered(inner, label_width, inner.height.saturating_sub(1) / 2, 1);
    Paragraph::new(Span::styled(label.to_string(), text)).render(label_area, buf);
}

/// Columns a button needs for `label`: border and two columns of padding each side.
pub fn button_width(label: &str) -> u16 {
    display_width(label) as u16 + 6
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_inner_rect() {
        let inner = inner_rect(Rect::new(0, 0, 10, 6), 1);
        assert_eq!(inner, Rect::new(1, 1, 8, 4));
        assert_eq!(inner_rect(Rect::new(0, 0, 1, 1), 2).width, 0);
    }

    #[test]
    fn test_centered_clamps_to_area() {
        let area = Rect::new(10, 5, 20, 4);
        assert_eq!(centered(area, 6, 1, 1), Rect::new(17, 6, 6, 1));
        assert_eq!(centered(area, 40, 0, 1).width, 20);
    }

    #[test]
    fn test_gradient_endpoints() {
        let from = Color::Rgb(0, 0, 0);
        let to = Color::Rgb(100, 200, 50);
        let spans = gradient_spans("abc", from, to, Style::default());
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].style.fg, Some(from));
        assert_eq!(spans[2].style.fg, Some(to));
        assert_eq!(spans[1].style.fg, Some(Color::Rgb(50, 100, 25)));
    }

    #[test]
    fn test_highlight_across_wrap() {
        let text = "with 3.5+ years of work";
        let start = text.find("3.5+").unwrap_or(0);
        let lines = highlighted_lines(
            text,
            start..start + "3.5+ years".len(),
            9,
            Style::default(),
            Style::default().add_modifier(Modifier::BOLD),
        );
        assert_eq!(plain(&lines), vec!["with 3.5+", "years of", "work"]);
        assert_eq!(lines[0].spans[1].content, "3.5+");
        assert_eq!(lines[1].spans[0].content, "years");
        assert!(lines[1].spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(lines[2].spans.len(), 1);
    }

    #[test]
    fn test_button_width() {
        assert_eq!(button_width("Close"), 11);
    }
}
