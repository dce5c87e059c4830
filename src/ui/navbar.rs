//! Fixed navbar and the narrow-terminal menu that drops down from it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::canvas::BlockCanvas;
use super::helpers::gradient_spans;
use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::Palette;
use crate::app::App;
use crate::content::{Accent, NAV_LINKS, PROFILE};
use crate::page::text::display_width;
use crate::page::NAVBAR_HEIGHT;

/// Columns between the screen edge and the logo or the last control.
const EDGE_PADDING: u16 = 2;
/// Columns between nav links.
const LINK_GAP: u16 = 3;

pub fn render_navbar(buf: &mut Buffer, app: &App, palette: &Palette, hits: &mut HitAreaRegistry) {
    let area = Rect::new(0, 0, app.width, NAVBAR_HEIGHT).intersection(buf.area);
    if area.is_empty() {
        return;
    }
    let scrolled = app.is_scrolled();
    let base = if scrolled {
        Style::default().fg(palette.text).bg(palette.surface)
    } else {
        palette.base()
    };
    let mut canvas = BlockCanvas::new(area.width, area.height, base)
        .at((0, 0), hits.pointer())
        .interactive(!app.dialog_open());
    let bar = Rect::new(0, 1, area.width, 1).intersection(canvas.area());

    if scrolled {
        canvas.render_widget(
            Paragraph::new(Span::styled(
                "─".repeat(area.width as usize),
                Style::default().fg(palette.border),
            )),
            Rect::new(0, area.height.saturating_sub(1), area.width, 1),
        );
    }

    // Logo
    let logo_width = display_width(PROFILE.initials) as u16 + 1;
    let logo_rect = Rect::new(EDGE_PADDING, bar.y, logo_width, 1).intersection(bar);
    let logo_hovered = canvas.clickable(logo_rect, ClickAction::Logo);
    let mut logo = gradient_spans(
        PROFILE.initials,
        palette.accent_color(Accent::Cyan),
        palette.accent_color(Accent::Purple),
        Style::default().add_modifier(Modifier::BOLD),
    );
    logo.push(Span::styled(".", Style::default().fg(palette.accent)));
    if logo_hovered {
        logo = logo
            .into_iter()
            .map(|s| {
                let style = s.style.add_modifier(Modifier::UNDERLINED);
                s.style(style)
            })
            .collect();
    }
    canvas.render_widget(Paragraph::new(Line::from(logo)), logo_rect);

    // Controls from the right edge inward.
    let mut right = area.width.saturating_sub(EDGE_PADDING);
    if app.is_narrow() {
        let menu_icon = if app.menu_open { MENU_CLOSE_ICON } else { MENU_OPEN_ICON };
        right = control(&mut canvas, bar, right, menu_icon, ClickAction::ToggleMenu, palette, app.menu_open);
        right = right.saturating_sub(1);
        control(&mut canvas, bar, right, app.theme.toggle_icon(), ClickAction::ToggleTheme, palette, false);
    } else {
        right = control(&mut canvas, bar, right, app.theme.toggle_icon(), ClickAction::ToggleTheme, palette, false);
        right = right.saturating_sub(LINK_GAP);
        let active = app.active_section();
        for link in NAV_LINKS.iter().rev() {
            let width = display_width(link.label) as u16;
            let x = right.saturating_sub(width);
            if x <= EDGE_PADDING + logo_width {
                break;
            }
            let rect = Rect::new(x, bar.y, width, 1);
            let hovered = canvas.clickable(rect, ClickAction::NavLink(link.section));
            let style = if link.section == active {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else if hovered {
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD)
            } else {
                palette.muted_style()
            };
            canvas.render_widget(Paragraph::new(Span::styled(link.label, style)), rect);
            right = x.saturating_sub(LINK_GAP);
        }
    }

    canvas.blit(buf, area, palette.bg, hits);
}

/// Draw a bracketed icon button ending at column `right`; returns its left edge.
/// Control icons must stay one cell wide: wide glyphs lose their
/// continuation cell when the bar is blitted.
const MENU_OPEN_ICON: &str = "≡";
const MENU_CLOSE_ICON: &str = "✕";

fn control(
    canvas: &mut BlockCanvas,
    bar: Rect,
    right: u16,
    icon: &str,
    action: ClickAction,
    palette: &Palette,
    active: bool,
) -> u16 {
    let label = format!("[{}]", icon);
    let width = display_width(&label) as u16;
    let x = right.saturating_sub(width);
    let rect = Rect::new(x, bar.y, width, 1).intersection(bar);
    let hovered = canvas.clickable(rect, action);
    let style = if hovered || active {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    };
    canvas.render_widget(Paragraph::new(Span::styled(label, style)), rect);
    x
}

/// Rows of the dropped-down menu: one per link plus the border.
pub fn menu_height() -> u16 {
    NAV_LINKS.len() as u16 + 2
}

pub fn render_menu(buf: &mut Buffer, app: &App, palette: &Palette, hits: &mut HitAreaRegistry) {
    if !app.menu_open {
        return;
    }
    let area = Rect::new(0, NAVBAR_HEIGHT, app.width, menu_height()).intersection(buf.area);
    if area.is_empty() {
        return;
    }
    let mut canvas = BlockCanvas::new(area.width, area.height, Style::default().fg(palette.text).bg(palette.surface))
        .at((area.x as i32, area.y as i32), hits.pointer())
        .interactive(!app.dialog_open());
    let local = canvas.area();
    let block = Block::default()
        .borders(Borders::BOTTOM | Borders::TOP)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(local);
    canvas.render_widget(block, local);

    let active = app.active_section();
    for (i, link) in NAV_LINKS.iter().enumerate() {
        let rect = Rect::new(inner.x, inner.y + i as u16, inner.width, 1).intersection(inner);
        let hovered = canvas.clickable(rect, ClickAction::NavLink(link.section));
        let marker = if link.section == active { "▸ " } else { "  " };
        let style = if link.section == active || hovered {
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };
        let line = Line::from(vec![
            Span::styled(format!("{}{}", " ".repeat(EDGE_PADDING as usize), marker), style),
            Span::styled(link.label, style),
            Span::styled(format!("  {}", i + 1), Style::default().fg(palette.dim)),
        ]);
        canvas.render_widget(Paragraph::new(line), rect);
    }

    // Surface cells never match the page background, so the panel stays opaque.
    canvas.blit(buf, area, palette.bg, hits);
}
