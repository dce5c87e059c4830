//! Key hints and status line on the bottom row.
//!
//! The bar floats over the last page row and only shows when it has
//! something to say: a status message, the form editing keys while the form
//! has focus, or the page keys while the reader is at the very top.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::layout::LayoutContext;
use super::theme::Palette;
use crate::app::{App, Focus, FormFocus};
use crate::input::ModalType;

/// Build hint spans for the current focus, abbreviated on narrow terminals.
pub fn build_responsive_keybinds(app: &App, ctx: &LayoutContext, palette: &Palette) -> Line<'static> {
    let key = |k: &str| Span::styled(k.to_string(), Style::default().fg(palette.accent));
    let text = |t: &str| Span::styled(t.to_string(), palette.muted_style());
    let mut spans = vec![Span::raw(" ")];

    let push = |k: &str, t: &str, spans: &mut Vec<Span<'static>>| {
        if spans.len() > 1 {
            spans.push(text(" · "));
        }
        spans.push(key(k));
        spans.push(text(t));
    };

    match app.focus {
        Focus::Form(FormFocus::Send) => {
            push("Enter", " send", &mut spans);
            push("↑", " back", &mut spans);
            push("Esc", " leave form", &mut spans);
        }
        Focus::Form(FormFocus::Field(field)) => {
            push("Tab", " next", &mut spans);
            if !ctx.is_extra_small() {
                push("S+Tab", " prev", &mut spans);
            }
            if field.is_multiline() {
                push("Enter", " newline", &mut spans);
            }
            push("Ctrl+S", " send", &mut spans);
            push("Esc", if ctx.is_narrow() { " leave" } else { " leave form" }, &mut spans);
        }
        Focus::Page => {
            push("1-4", if ctx.is_narrow() { " jump" } else { " sections" }, &mut spans);
            push("j/k", " scroll", &mut spans);
            if !ctx.is_extra_small() {
                push("Tab", " form", &mut spans);
                push("e", " email", &mut spans);
            }
            push("t", " theme", &mut spans);
            if app.is_narrow() {
                push("m", " menu", &mut spans);
            }
            push("q", " quit", &mut spans);
        }
    }

    Line::from(spans)
}

/// Whether the hints bar should be drawn this frame.
pub fn hints_visible(app: &App, ctx: &LayoutContext) -> bool {
    if ctx.is_short() || app.active_modal() != ModalType::None {
        return false;
    }
    app.status.is_some() || app.focus.is_form() || app.scroll == 0
}

pub fn render_hints(buf: &mut Buffer, app: &App, palette: &Palette) {
    let ctx = LayoutContext::from_area(buf.area);
    if !hints_visible(app, &ctx) || buf.area.height == 0 {
        return;
    }
    let area = Rect::new(
        buf.area.x,
        buf.area.bottom() - 1,
        buf.area.width,
        1,
    );

    let line = match &app.status {
        Some(status) => {
            let style = if status.is_error {
                palette.error_style().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.success)
            };
            Line::from(vec![Span::raw(" "), Span::styled(status.text.clone(), style)])
        }
        None => build_responsive_keybinds(app, &ctx, palette),
    };
    Paragraph::new(line)
        .style(Style::default().bg(palette.surface))
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FolioConfig;
    use crate::form::Field;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn app() -> App {
        App::new(FolioConfig::default().with_animations(false)).with_size(100, 30)
    }

    #[test]
    fn test_page_hints() {
        let app = app();
        let line = build_responsive_keybinds(&app, &LayoutContext::new(100, 30), &Palette::DARK);
        let text = plain(&line);
        assert!(text.contains("1-4 sections"));
        assert!(text.contains("q quit"));
        assert!(!text.contains("m menu"));
    }

    #[test]
    fn test_message_field_hints() {
        let mut app = app();
        app.focus_field(Field::Message);
        let text = plain(&build_responsive_keybinds(
            &app,
            &LayoutContext::new(100, 30),
            &Palette::DARK,
        ));
        assert!(text.contains("Enter newline"));
        assert!(text.contains("Ctrl+S send"));
    }

    #[test]
    fn test_hidden_when_scrolled_on_page() {
        let mut app = app();
        let ctx = LayoutContext::new(100, 30);
        assert!(hints_visible(&app, &ctx));
        app.scroll_to(10);
        assert!(!hints_visible(&app, &ctx));
        app.set_status("Opening mail client", false);
        assert!(hints_visible(&app, &ctx));
        assert!(!hints_visible(&app, &LayoutContext::new(100, 10)));
    }
}
