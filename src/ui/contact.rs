//! Contact section: the intro column with the mail link, and the form.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::canvas::BlockCanvas;
use super::components::{
    calculate_input_field_height, render_input_field, render_status_indicator,
    InputFieldConfig, StatusIndicatorType,
};
use super::helpers::{gradient_spans, render_button, row};
use super::interaction::ClickAction;
use super::theme::Palette;
use crate::app::{App, FormFocus};
use crate::content::{
    Accent, CONTACT_BLURB, CONTACT_TITLE, PROFILE, SOCIALS, SUBMITTING_LABEL, SUBMIT_LABEL,
};
use crate::form::Field;
use crate::page::layout::BUTTON_HEIGHT;
use crate::page::text::{display_width, wrap_text};

/// Textarea rows for the message field.
const MESSAGE_LINES: u16 = 4;

pub fn draw_contact_intro(canvas: &mut BlockCanvas, palette: &Palette) {
    let area = canvas.area();
    let bold = Style::default().fg(palette.text).add_modifier(Modifier::BOLD);
    canvas.render_widget(Paragraph::new(Span::styled(CONTACT_TITLE.0, bold)), row(area, 0));
    canvas.render_widget(
        Paragraph::new(Line::from(gradient_spans(
            CONTACT_TITLE.1,
            palette.accent_color(Accent::Cyan),
            palette.accent_color(Accent::Purple),
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        row(area, 1),
    );

    let blurb: Vec<Line> = wrap_text(CONTACT_BLURB, area.width as usize)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, palette.muted_style())))
        .collect();
    let blurb_rows = blurb.len() as u16;
    canvas.render_widget(
        Paragraph::new(blurb),
        Rect::new(0, 3, area.width, blurb_rows).intersection(area),
    );

    let mail_row = 3 + blurb_rows + 1;
    let label = format!("✉ {}", PROFILE.email_label);
    let mail_rect = Rect::new(0, mail_row, display_width(&label) as u16, 1).intersection(area);
    let style = if canvas.clickable(mail_rect, ClickAction::OpenEmail) {
        Style::default().fg(palette.accent).add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(palette.text)
    };
    canvas.render_widget(Paragraph::new(Span::styled(label, style)), mail_rect);

    let mut socials = Vec::new();
    for (i, name) in SOCIALS.iter().enumerate() {
        if i > 0 {
            socials.push(Span::styled(" · ", Style::default().fg(palette.dim)));
        }
        socials.push(Span::styled(*name, palette.muted_style()));
    }
    canvas.render_widget(Paragraph::new(Line::from(socials)), row(area, mail_row + 2));
}

pub fn draw_contact_form(canvas: &mut BlockCanvas, app: &App, palette: &Palette) {
    let area = canvas.area();
    let submitting = app.form.is_submitting();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if app.focus.is_form() {
            palette.accent
        } else {
            palette.border
        }))
        .style(Style::default().bg(palette.surface));
    canvas.render_widget(block, area);

    let body = Rect::new(3, 2, area.width.saturating_sub(6), area.height.saturating_sub(4))
        .intersection(area);
    let mut y = body.y;

    for field in Field::ALL {
        let value = app.form.fields().get(field);
        let focused = app.focus.field() == Some(field);
        let mut config = InputFieldConfig::new(field.label(), value)
            .placeholder(field.placeholder())
            .focused(focused)
            .caret_visible(app.cursor_blink.is_visible())
            .error(app.form.errors().get(field));
        if field.is_multiline() {
            config = config.lines(MESSAGE_LINES);
        }
        let height = calculate_input_field_height(&config);
        let field_area = Rect::new(body.x, y, body.width, height).intersection(area);

        let input_box = Rect::new(field_area.x, field_area.y + 1, field_area.width, config.lines + 2);
        if !submitting {
            let hovered = canvas.clickable(input_box, ClickAction::FocusField(field));
            config = config.hovered(hovered);
        }
        render_input_field(canvas.buffer_mut(), field_area, &config, palette);
        y += height;
    }

    let button = Rect::new(body.x, y, body.width, BUTTON_HEIGHT).intersection(area);
    if submitting {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.dim));
        let inner = block.inner(button);
        canvas.render_widget(block, button);
        let spinner = render_status_indicator(
            &StatusIndicatorType::spinner(SUBMITTING_LABEL, app.spinner_frame()),
            palette,
            inner.width,
        );
        canvas.render_widget(Paragraph::new(spinner), inner);
        draw_loading_overlay(canvas, app, palette, body);
    } else {
        let hovered = canvas.clickable(button, ClickAction::SubmitForm);
        let focused = app.focus == crate::app::Focus::Form(FormFocus::Send);
        let label = if focused {
            format!("▸ {} ◂", SUBMIT_LABEL)
        } else {
            SUBMIT_LABEL.to_string()
        };
        render_button(
            canvas.buffer_mut(),
            button,
            &label,
            focused || hovered,
            palette.accent,
            palette.bg,
        );
    }
}

/// Small panel over the fields while a submission is in flight.
fn draw_loading_overlay(canvas: &mut BlockCanvas, app: &App, palette: &Palette, body: Rect) {
    let width = (display_width(SUBMITTING_LABEL) as u16 + 8).min(body.width);
    let panel = Rect::new(
        body.x + (body.width - width) / 2,
        body.y + body.height.saturating_sub(BUTTON_HEIGHT) / 2,
        width,
        3,
    )
    .intersection(canvas.area());
    canvas.render_widget(Clear, panel);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(panel);
    canvas.render_widget(block, panel);
    let lines = render_status_indicator(
        &StatusIndicatorType::spinner(SUBMITTING_LABEL, app.spinner_frame()),
        palette,
        inner.width,
    );
    canvas.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
