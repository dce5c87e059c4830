//! Status Indicator Component
//!
//! Renders spinner, success, and error status indicators.
//! Used for the in-flight submit button and the two submission dialogs.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::page::text::wrap_text;
use crate::ui::theme::Palette;

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Status indicator types
#[derive(Debug, Clone)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner {
        message: String,
        /// Current frame index, wraps around
        frame: usize,
    },
    /// Check mark with a heading and body text
    Success { header: String, message: String },
    /// Cross with a heading and optional details
    Error {
        header: String,
        details: Option<String>,
    },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, frame: usize) -> Self {
        Self::Spinner {
            message: message.into(),
            frame,
        }
    }

    pub fn success(header: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Success {
            header: header.into(),
            message: message.into(),
        }
    }

    pub fn error(header: impl Into<String>, details: Option<String>) -> Self {
        Self::Error {
            header: header.into(),
            details,
        }
    }
}

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Render a status indicator as centered lines wrapped to `width`.
pub fn render_status_indicator(
    indicator: &StatusIndicatorType,
    palette: &Palette,
    width: u16,
) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let body = |text: &str, style: Style, lines: &mut Vec<Line<'static>>| {
        for row in wrap_text(text, width as usize) {
            lines.push(Line::from(Span::styled(row, style)).alignment(Alignment::Center));
        }
    };

    match indicator {
        StatusIndicatorType::Spinner { message, frame } => {
            lines.push(
                Line::from(vec![
                    Span::styled(format!("{} ", get_spinner_char(*frame)), palette.accent_style()),
                    Span::styled(message.clone(), palette.accent_style()),
                ])
                .alignment(Alignment::Center),
            );
        }

        StatusIndicatorType::Success { header, message } => {
            let style = Style::default().fg(palette.success);
            lines.push(Line::from(Span::styled("\u{2714}", style.add_modifier(Modifier::BOLD))).alignment(Alignment::Center));
            lines.push(Line::from(""));
            lines.push(
                Line::from(Span::styled(
                    header.clone(),
                    Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
            );
            lines.push(Line::from(""));
            body(message, palette.muted_style(), &mut lines);
        }

        StatusIndicatorType::Error { header, details } => {
            lines.push(
                Line::from(vec![
                    Span::styled("\u{2717} ", palette.error_style()),
                    Span::styled(header.clone(), palette.error_style().add_modifier(Modifier::BOLD)),
                ])
                .alignment(Alignment::Center),
            );
            if let Some(detail) = details {
                lines.push(Line::from(""));
                body(detail, Style::default().fg(palette.text), &mut lines);
            }
        }
    }

    lines
}
