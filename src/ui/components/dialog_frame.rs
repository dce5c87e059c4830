//! Dialog Frame Component
//!
//! A centered dialog frame with rounded borders.
//! Handles background clearing and responsive sizing.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border; empty for none
    pub title: &'a str,
    /// Title and border color; the palette border color when unset
    pub accent: Option<Color>,
    /// Content height (not including borders)
    pub content_height: u16,
    /// Optional fixed width (otherwise responsive)
    pub fixed_width: Option<u16>,
    pub min_width: u16,
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            accent: None,
            content_height,
            fixed_width: None,
            min_width: 30,
            max_width: 56,
        }
    }

    pub fn accent(mut self, color: Color) -> Self {
        self.accent = Some(color);
        self
    }

    /// Set a fixed width for the dialog
    pub fn fixed_width(mut self, width: u16) -> Self {
        self.fixed_width = Some(width);
        self
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

/// Calculate dialog width based on terminal size and configuration
pub fn calculate_dialog_width(ctx: &LayoutContext, config: &DialogFrameConfig, area_width: u16) -> u16 {
    if let Some(fixed) = config.fixed_width {
        return fixed.min(area_width.saturating_sub(4));
    }

    if ctx.is_extra_small() {
        // Take most of the screen, leave 2 cols margin each side
        area_width.saturating_sub(4).min(config.max_width)
    } else if ctx.is_narrow() {
        ctx.bounded_width(80, config.min_width, config.max_width)
    } else {
        ctx.bounded_width(50, config.min_width, config.max_width)
    }
}

/// Render a dialog frame centered in `area` and return the inner content area.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    palette: &Palette,
    config: &DialogFrameConfig,
) -> Rect {
    let dialog_width = calculate_dialog_width(ctx, config, area.width);
    let dialog_height = calculate_total_dialog_height(config.content_height).min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(dialog_width) / 2,
        y: area.y + area.height.saturating_sub(dialog_height) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    frame.render_widget(Clear, dialog_area);

    let accent = config.accent.unwrap_or(palette.border);
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .style(Style::default().fg(palette.text).bg(palette.surface));
    if !config.title.is_empty() {
        block = block.title(Span::styled(
            format!(" {} ", config.title),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(block, dialog_area);

    Rect {
        x: dialog_area.x + 1,
        y: dialog_area.y + 1,
        width: dialog_area.width.saturating_sub(2),
        height: dialog_area.height.saturating_sub(2),
    }
}

/// Calculate the total dialog height needed for given content
pub fn calculate_total_dialog_height(content_height: u16) -> u16 {
    content_height + 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_dialog_frame_config_builder() {
        let config = DialogFrameConfig::new("Test", 10)
            .fixed_width(50)
            .min_width(40)
            .max_width(70)
            .accent(Color::Red);

        assert_eq!(config.fixed_width, Some(50));
        assert_eq!(config.min_width, 40);
        assert_eq!(config.max_width, 70);
        assert_eq!(config.accent, Some(Color::Red));
    }

    #[test]
    fn test_calculate_dialog_width_fixed_clamped() {
        let ctx = LayoutContext::new(40, 20);
        let config = DialogFrameConfig::new("Test", 10).fixed_width(50);
        assert_eq!(calculate_dialog_width(&ctx, &config, 40), 36);
    }

    #[test]
    fn test_calculate_dialog_width_normal() {
        let ctx = LayoutContext::new(120, 40);
        let config = DialogFrameConfig::new("Test", 10);
        assert_eq!(calculate_dialog_width(&ctx, &config, 120), 56);
    }

    #[test]
    fn test_calculate_dialog_width_extra_small() {
        let ctx = LayoutContext::new(40, 14);
        let config = DialogFrameConfig::new("Test", 10);
        assert_eq!(calculate_dialog_width(&ctx, &config, 40), 36);
    }

    #[test]
    fn test_render_returns_inner_area() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut inner = Rect::default();
        terminal
            .draw(|frame| {
                let area = frame.area();
                let ctx = LayoutContext::from_area(area);
                let config = DialogFrameConfig::new("Hello", 6);
                inner = render_dialog_frame(frame, area, &ctx, &Palette::DARK, &config);
            })
            .unwrap();

        assert_eq!(inner.height, 6);
        assert_eq!(inner.width, 50 - 2);
        assert_eq!(inner.x, 25 + 1);
    }

    #[test]
    fn test_calculate_total_dialog_height() {
        assert_eq!(calculate_total_dialog_height(10), 12);
    }
}
