//! Input Field Component
//!
//! A labelled text input with focus handling, a blinking caret, placeholder
//! text, and an inline error line. Multi-line inputs wrap their value and
//! keep the last lines in view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::page::text::{display_width, wrap_text};
use crate::ui::theme::Palette;

/// Block cursor drawn after the value.
const CARET: char = '\u{2588}';

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input holds the caret
    pub focused: bool,
    /// Whether the caret is in the visible half of its blink
    pub caret_visible: bool,
    /// Whether the pointer is over the input
    pub hovered: bool,
    /// Optional error message to display below the input
    pub error: Option<&'a str>,
    /// Optional placeholder text when empty
    pub placeholder: Option<&'a str>,
    /// Text rows inside the border
    pub lines: u16,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            caret_visible: true,
            hovered: false,
            error: None,
            placeholder: None,
            lines: 1,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn caret_visible(mut self, visible: bool) -> Self {
        self.caret_visible = visible;
        self
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Make the input a textarea `lines` rows tall.
    pub fn lines(mut self, lines: u16) -> Self {
        self.lines = lines.max(1);
        self
    }
}

/// Rows needed: label, bordered input, error line.
///
/// The error line is always reserved so the form does not jump when
/// validation messages appear.
pub fn calculate_input_field_height(config: &InputFieldConfig) -> u16 {
    1 + config.lines + 2 + 1
}

/// Bordered box of the input inside a field area; the click target.
pub fn input_box_area(area: Rect, config: &InputFieldConfig) -> Rect {
    Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: config.lines + 2,
    }
    .intersection(area)
}

/// Text shown inside the box: the tail that fits, with the caret.
fn visible_lines(config: &InputFieldConfig, inner_width: u16) -> Vec<String> {
    let width = inner_width.max(1) as usize;
    let mut value = config.value.to_string();
    if config.focused && config.caret_visible {
        value.push(CARET);
    } else if config.focused {
        value.push(' ');
    }

    let mut lines: Vec<String> = if config.lines > 1 {
        value
            .split('\n')
            .flat_map(|paragraph| wrap_text(paragraph, width))
            .collect()
    } else {
        vec![tail_to_width(&value, width)]
    };

    let keep = config.lines as usize;
    if lines.len() > keep {
        lines.drain(..lines.len() - keep);
    }
    lines
}

/// Last characters of `s` fitting in `width` columns.
fn tail_to_width(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }
    let mut used = 0;
    let mut start = s.len();
    for (idx, c) in s.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    s[start..].to_string()
}

/// Render an input field into `buf`. Returns the height consumed.
pub fn render_input_field(
    buf: &mut Buffer,
    area: Rect,
    config: &InputFieldConfig,
    palette: &Palette,
) -> u16 {
    let mut y_offset = 0;

    let label_style = if config.focused {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    } else {
        palette.muted_style()
    };
    let label_area = Rect::new(area.x, area.y, area.width, 1).intersection(area);
    Paragraph::new(Line::from(Span::styled(config.label, label_style))).render(label_area, buf);
    y_offset += 1;

    let input_area = input_box_area(area, config);
    let border_color = if config.error.is_some() {
        palette.error
    } else if config.focused {
        palette.accent
    } else if config.hovered {
        palette.muted
    } else {
        palette.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(palette.surface));

    let showing_placeholder = config.value.is_empty() && !config.focused;
    let text: Vec<Line> = match config.placeholder {
        Some(placeholder) if showing_placeholder => {
            vec![Line::from(Span::styled(
                placeholder.to_string(),
                Style::default().fg(palette.dim),
            ))]
        }
        _ => visible_lines(config, input_area.width.saturating_sub(4))
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(palette.text))))
            .collect(),
    };
    let inner = block.inner(input_area);
    block.render(input_area, buf);
    let text_area = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    Paragraph::new(text).render(text_area, buf);
    y_offset += input_area.height;

    if let Some(error) = config.error {
        let error_area = Rect::new(area.x, area.y + y_offset, area.width, 1).intersection(area);
        Paragraph::new(Line::from(vec![
            Span::styled("\u{2717} ", palette.error_style()),
            Span::styled(error, palette.error_style()),
        ]))
        .render(error_area, buf);
    }

    calculate_input_field_height(config)
}
