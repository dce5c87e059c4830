//! Page blocks outside the contact section: hero, stats, section headers,
//! skill and project cards, and the footer.
//!
//! Every function draws one block at rest into a [`BlockCanvas`] sized to
//! the block's rect, in block-local coordinates. Row budgets follow
//! [`crate::page::layout`] exactly.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::canvas::BlockCanvas;
use super::helpers::{
    button_width, centered, gradient_spans, highlighted_lines, render_button, row,
};
use super::interaction::ClickAction;
use super::theme::Palette;
use crate::app::App;
use crate::content::{
    self, Accent, HERO_ACTIONS, PROFILE, PROJECTS, PROJECTS_GITHUB, PROJECTS_SUBTITLE,
    PROJECTS_TITLE, PROJECT_LINK, SKILLS, SKILLS_SUBTITLE, SKILLS_TITLE, STATS,
};
use crate::page::layout::{
    card_text_width, column_width, hero_buttons_height, hero_buttons_inline, stats_columns,
    BUTTON_HEIGHT, GRID_GAP_X, GRID_GAP_Y, PROJECT_BANNER_HEIGHT, PROJECT_DESCRIPTION_LINES,
    PROSE_WIDTH, STAT_CELL_HEIGHT,
};
use crate::page::text::{display_width, truncate, wrap_text};
use crate::page::Section;

fn card_block(border: ratatui::style::Color, palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(palette.surface))
}

pub fn draw_hero_badge(canvas: &mut BlockCanvas, palette: &Palette) {
    let area = canvas.area();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    canvas.render_widget(block, area);
    let line = Line::from(vec![
        Span::styled("● ", Style::default().fg(palette.success)),
        Span::styled(PROFILE.badge, palette.muted_style()),
    ])
    .alignment(Alignment::Center);
    canvas.render_widget(Paragraph::new(line), inner);
}

pub fn draw_hero_title(canvas: &mut BlockCanvas, palette: &Palette) {
    let area = canvas.area();
    let greeting = Line::from(Span::styled(PROFILE.greeting, palette.muted_style()))
        .alignment(Alignment::Center);
    canvas.render_widget(Paragraph::new(greeting), row(area, 0));

    let name = Line::from(gradient_spans(
        PROFILE.name,
        palette.accent_color(Accent::Cyan),
        palette.accent_color(Accent::Purple),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    canvas.render_widget(Paragraph::new(name), row(area, 1));
}

pub fn draw_hero_intro(canvas: &mut BlockCanvas, palette: &Palette) {
    let area = canvas.area();
    let (before, highlight, _) = PROFILE.intro;
    let text = crate::page::layout::intro_text();
    let start = before.len();
    let lines: Vec<Line> = highlighted_lines(
        &text,
        start..start + highlight.len(),
        area.width as usize,
        palette.muted_style(),
        palette.accent_style(),
    )
    .into_iter()
    .map(|line| line.alignment(Alignment::Center))
    .collect();
    canvas.render_widget(Paragraph::new(lines), area);
}

pub fn draw_hero_actions(canvas: &mut BlockCanvas, app: &App, palette: &Palette) {
    let area = canvas.area();
    let inline = hero_buttons_inline(area.width);

    let rects: Vec<Rect> = if inline {
        let widths: Vec<u16> = HERO_ACTIONS.iter().map(|(label, _)| button_width(label)).collect();
        let total: u16 = widths.iter().sum::<u16>() + 2;
        let mut x = area.width.saturating_sub(total) / 2;
        widths
            .iter()
            .map(|w| {
                let rect = Rect::new(x, 0, *w, BUTTON_HEIGHT);
                x += w + 2;
                rect
            })
            .collect()
    } else {
        let width = area.width.min(30);
        (0..HERO_ACTIONS.len() as u16)
            .map(|i| centered(area, width, i * (BUTTON_HEIGHT + 1), BUTTON_HEIGHT))
            .collect()
    };

    for (i, ((label, section), rect)) in HERO_ACTIONS.iter().zip(rects).enumerate() {
        let hovered = canvas.clickable(rect, ClickAction::NavLink(*section));
        // The first action is the primary, filled one.
        let filled = i == 0 || hovered;
        render_button(canvas.buffer_mut(), rect, label, filled, palette.accent, palette.bg);
    }

    let chevron_top = hero_buttons_height(area.width) + 1;
    let offset = if app.chevron_raised() { 0 } else { 1 };
    let chevron = Line::from(Span::styled("↓", Style::default().fg(palette.dim)))
        .alignment(Alignment::Center);
    canvas.render_widget(Paragraph::new(chevron), row(area, chevron_top + offset));
}

pub fn draw_stats(canvas: &mut BlockCanvas, app: &App, palette: &Palette) {
    let area = canvas.area();
    let rule = "─".repeat(area.width as usize);
    let rule_style = Style::default().fg(palette.border);
    canvas.render_widget(Paragraph::new(Span::styled(rule.clone(), rule_style)), row(area, 0));
    canvas.render_widget(
        Paragraph::new(Span::styled(rule, rule_style)),
        row(area, area.height.saturating_sub(1)),
    );

    let columns = stats_columns(app.layout().width());
    let cell_width = column_width(area.width, columns);
    for (i, stat) in STATS.iter().enumerate() {
        let (r, c) = (i as u16 / columns, i as u16 % columns);
        let cell = Rect::new(
            c * (cell_width + GRID_GAP_X),
            1 + r * (STAT_CELL_HEIGHT + GRID_GAP_Y),
            cell_width,
            STAT_CELL_HEIGHT,
        );
        let lines = vec![
            Line::from(Span::styled(
                stat.value,
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(stat.suffix, Style::default().fg(palette.accent))),
            Line::from(Span::styled(stat.label.to_uppercase(), Style::default().fg(palette.dim))),
        ];
        canvas.render_widget(Paragraph::new(lines).alignment(Alignment::Center), cell);
    }
}

pub fn draw_section_header(canvas: &mut BlockCanvas, section: Section, palette: &Palette) {
    let area = canvas.area();
    let (title, subtitle) = match section {
        Section::Skills => (SKILLS_TITLE, SKILLS_SUBTITLE),
        Section::Projects => (PROJECTS_TITLE, PROJECTS_SUBTITLE),
        Section::About | Section::Contact => return,
    };

    let heading = Line::from(vec![
        Span::styled(title.0, Style::default().fg(palette.text).add_modifier(Modifier::BOLD)),
        Span::styled(title.1, palette.accent_style()),
    ])
    .alignment(Alignment::Center);
    canvas.render_widget(Paragraph::new(heading), row(area, 0));

    let rule = Line::from(Span::styled("━━━━━━", Style::default().fg(palette.accent)))
        .alignment(Alignment::Center);
    canvas.render_widget(Paragraph::new(rule), row(area, 1));

    let prose = area.width.min(PROSE_WIDTH);
    let sub_lines: Vec<Line> = wrap_text(subtitle, prose as usize)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, palette.muted_style())).alignment(Alignment::Center))
        .collect();
    let sub_count = sub_lines.len() as u16;
    canvas.render_widget(
        Paragraph::new(sub_lines),
        Rect::new(0, 2, area.width, sub_count).intersection(area),
    );

    if section == Section::Projects {
        let link = Line::from(Span::styled(PROJECTS_GITHUB, Style::default().fg(palette.muted)))
            .alignment(Alignment::Center);
        canvas.render_widget(Paragraph::new(link), row(area, 2 + sub_count));
    }
}

pub fn draw_skill(canvas: &mut BlockCanvas, index: usize, palette: &Palette) {
    let Some(skill) = SKILLS.get(index) else {
        return;
    };
    let area = canvas.area();
    let accent = palette.accent_color(skill.accent);
    let border = if canvas.hovered(area) { accent } else { palette.border };
    let block = card_block(border, palette);
    let inner = block.inner(area);
    canvas.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            skill.icon,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            skill.name,
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(skill.level, palette.muted_style())),
    ];
    canvas.render_widget(
        Paragraph::new(lines),
        Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height),
    );
}

pub fn draw_project(canvas: &mut BlockCanvas, index: usize, palette: &Palette) {
    let Some(project) = PROJECTS.get(index) else {
        return;
    };
    let area = canvas.area();
    let hovered = canvas.hovered(area);
    let border = if hovered { palette.accent } else { palette.border };
    let block = card_block(border, palette);
    canvas.render_widget(block, area);

    // Banner: a horizontal gradient with the icon in the middle.
    let (from, to) = (
        palette.accent_color(project.gradient.0),
        palette.accent_color(project.gradient.1),
    );
    let banner_width = area.width.saturating_sub(2);
    let banner = Rect::new(1, 1, banner_width, PROJECT_BANNER_HEIGHT).intersection(area);
    let buf = canvas.buffer_mut();
    for x in banner.left()..banner.right() {
        let t = (x - banner.x) as f32 / banner_width.saturating_sub(1).max(1) as f32;
        let color = super::helpers::lerp_color(from, to, t);
        for y in banner.top()..banner.bottom() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(" ");
                cell.bg = color;
            }
        }
    }
    let icon = Line::from(Span::styled(
        project.icon,
        Style::default().fg(palette.bg).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    canvas.render_widget(Paragraph::new(icon), row(banner, PROJECT_BANNER_HEIGHT / 2));

    let text_width = card_text_width(area.width);
    let text = |y: u16| Rect::new(2, y, text_width, 1).intersection(area);

    let mut tags = Vec::new();
    for (i, tag) in project.tags.iter().enumerate() {
        if i > 0 {
            tags.push(Span::styled(" · ", Style::default().fg(palette.dim)));
        }
        tags.push(Span::styled(*tag, Style::default().fg(palette.accent)));
    }
    let tags_row = 1 + PROJECT_BANNER_HEIGHT + 1;
    canvas.render_widget(Paragraph::new(Line::from(tags)), text(tags_row));

    let title_style = if hovered {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text).add_modifier(Modifier::BOLD)
    };
    let title_row = tags_row + 2;
    canvas.render_widget(
        Paragraph::new(Span::styled(truncate(project.title, text_width as usize), title_style)),
        text(title_row),
    );

    let mut description = wrap_text(project.description, text_width as usize);
    let limit = PROJECT_DESCRIPTION_LINES as usize;
    if description.len() > limit {
        description.truncate(limit);
        if let Some(last) = description.last_mut() {
            *last = truncate(&format!("{} …", last), text_width as usize);
        }
    }
    for (i, line) in description.into_iter().enumerate() {
        canvas.render_widget(
            Paragraph::new(Span::styled(line, palette.muted_style())),
            text(title_row + 1 + i as u16),
        );
    }

    let link = Span::styled(
        PROJECT_LINK,
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
    );
    canvas.render_widget(Paragraph::new(link), text(area.height.saturating_sub(2)));
}

pub fn draw_footer(canvas: &mut BlockCanvas, app: &App, palette: &Palette) {
    let area = canvas.area();
    canvas.render_widget(
        Paragraph::new(Span::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(palette.border),
        )),
        row(area, 0),
    );

    let text = Line::from(Span::styled(content::footer_text(app.year), palette.muted_style()))
        .alignment(Alignment::Center);
    canvas.render_widget(Paragraph::new(text), row(area, 2));

    let back = "↑ Back to top";
    let back_rect = centered(area, display_width(back) as u16, 3, 1);
    let style = if canvas.clickable(back_rect, ClickAction::Logo) {
        Style::default().fg(palette.accent).add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(palette.dim)
    };
    canvas.render_widget(Paragraph::new(Span::styled(back, style)), back_rect);
}
