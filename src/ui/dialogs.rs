//! Submission dialogs: the "Message Sent!" acknowledgment and the failure
//! prompt with retry. Both sit over a dimmed page and own all input while
//! they show.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::canvas::blend;
use super::components::{
    calculate_dialog_width, render_dialog_frame, render_status_indicator, DialogFrameConfig, StatusIndicatorType,
};
use super::helpers::{button_width, render_button};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::LayoutContext;
use super::theme::Palette;
use crate::app::App;
use crate::content::{FAILURE_TITLE, SUCCESS_BODY, SUCCESS_CLOSE, SUCCESS_TITLE};
use crate::page::layout::BUTTON_HEIGHT;

/// How much of the page shows through the backdrop.
const BACKDROP_OPACITY: f32 = 0.35;

/// Horizontal padding inside the dialog border.
const PADDING: u16 = 2;

pub fn render_dialogs(frame: &mut Frame, app: &App, palette: &Palette, hits: &mut HitAreaRegistry) {
    if app.form.success_visible() {
        dim_backdrop(frame, palette.bg);
        render_success(frame, palette, hits);
    } else if let Some(error) = app.form.failure() {
        dim_backdrop(frame, palette.bg);
        render_failure(frame, palette, &error.user_message(), error.is_retryable(), hits);
    }
}

/// Fade everything already drawn toward the page background.
fn dim_backdrop(frame: &mut Frame, background: Color) {
    let buf = frame.buffer_mut();
    let area = buf.area;
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.fg = blend(cell.fg, background, BACKDROP_OPACITY);
                cell.bg = blend(cell.bg, background, BACKDROP_OPACITY);
            }
        }
    }
}

fn hover_style(palette: &Palette) -> Option<Style> {
    Some(Style::default().fg(palette.text))
}

fn render_success(frame: &mut Frame, palette: &Palette, hits: &mut HitAreaRegistry) {
    let area = frame.area();
    let ctx = LayoutContext::from_area(area);
    let probe = DialogFrameConfig::new("", 0);
    let text_width = dialog_text_width(&ctx, &probe, area);

    let lines = render_status_indicator(
        &StatusIndicatorType::success(SUCCESS_TITLE, SUCCESS_BODY),
        palette,
        text_width,
    );
    let content_height = lines.len() as u16 + 1 + BUTTON_HEIGHT;
    let config = DialogFrameConfig::new("", content_height).accent(palette.success);
    let inner = render_dialog_frame(frame, area, &ctx, palette, &config);
    let text_area = padded(inner);
    frame.render_widget(Paragraph::new(lines), text_area);

    let width = button_width(SUCCESS_CLOSE);
    let button = Rect::new(
        inner.x + inner.width.saturating_sub(width) / 2,
        inner.bottom().saturating_sub(BUTTON_HEIGHT),
        width,
        BUTTON_HEIGHT,
    )
    .intersection(inner);
    hits.register(button, ClickAction::CloseSuccess, hover_style(palette));
    let hovered = hits.get_hover_style(button).is_some();
    render_button(frame.buffer_mut(), button, SUCCESS_CLOSE, !hovered, palette.success, palette.bg);
}

fn render_failure(
    frame: &mut Frame,
    palette: &Palette,
    message: &str,
    retryable: bool,
    hits: &mut HitAreaRegistry,
) {
    let area = frame.area();
    let ctx = LayoutContext::from_area(area);
    let probe = DialogFrameConfig::new(FAILURE_TITLE, 0);
    let text_width = dialog_text_width(&ctx, &probe, area);

    let mut lines = render_status_indicator(
        &StatusIndicatorType::error(FAILURE_TITLE, Some(message.to_string())),
        palette,
        text_width,
    );
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            if retryable { "r retry · Esc dismiss" } else { "Esc dismiss" },
            Style::default().fg(palette.dim),
        ))
            .alignment(Alignment::Center),
    );
    let content_height = lines.len() as u16 + 1 + BUTTON_HEIGHT;
    let config = DialogFrameConfig::new("", content_height).accent(palette.error);
    let inner = render_dialog_frame(frame, area, &ctx, palette, &config);
    frame.render_widget(Paragraph::new(lines), padded(inner));

    let buttons: &[(&str, ClickAction, bool)] = if retryable {
        &[
            ("Retry", ClickAction::RetrySubmission, true),
            ("Dismiss", ClickAction::DismissFailure, false),
        ]
    } else {
        &[("Dismiss", ClickAction::DismissFailure, true)]
    };
    let total: u16 = buttons.iter().map(|(label, _, _)| button_width(label)).sum::<u16>() + 2;
    let mut x = inner.x + inner.width.saturating_sub(total) / 2;
    let y = inner.bottom().saturating_sub(BUTTON_HEIGHT);
    for &(label, action, primary) in buttons {
        let width = button_width(label);
        let rect = Rect::new(x, y, width, BUTTON_HEIGHT).intersection(inner);
        hits.register(rect, action, hover_style(palette));
        let hovered = hits.get_hover_style(rect).is_some();
        render_button(frame.buffer_mut(), rect, label, primary != hovered, palette.error, palette.bg);
        x += width + 2;
    }
}

fn padded(inner: Rect) -> Rect {
    Rect {
        x: inner.x + PADDING,
        y: inner.y + 1,
        width: inner.width.saturating_sub(2 * PADDING),
        height: inner.height.saturating_sub(1),
    }
}

/// Text columns a dialog will have, before its height is known.
fn dialog_text_width(ctx: &LayoutContext, probe: &DialogFrameConfig, area: Rect) -> u16 {
    calculate_dialog_width(ctx, probe, area.width)
        .saturating_sub(2 + 2 * PADDING)
        .max(1)
}
