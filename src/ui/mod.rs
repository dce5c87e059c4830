//! UI rendering for the portfolio page
//!
//! One frame is drawn back to front:
//! - Page background
//! - Page blocks in the viewport, each through a [`canvas::BlockCanvas`]
//!   so its entrance reveal can offset and fade it
//! - Fixed navbar, then the narrow-terminal menu
//! - Key hints / status line
//! - Submission dialogs over a dimmed backdrop
//!
//! Click targets are re-registered on every frame; whatever is drawn later
//! sits on top for hit testing too.

mod canvas;
pub mod components;
mod contact;
mod dialogs;
mod helpers;
mod hints;
pub mod interaction;
pub mod layout;
mod navbar;
mod sections;
pub mod theme;

pub use canvas::{blend, BlockCanvas, CLICKABLE_OPACITY};
pub use hints::build_responsive_keybinds;
pub use layout::LayoutContext;
pub use theme::Palette;

use ratatui::{layout::Rect, widgets::Block, Frame};

use crate::app::App;
use crate::page::{BlockKind, PlacedBlock, NAVBAR_HEIGHT};
use interaction::HitAreaRegistry;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen for the current app state.
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = Palette::for_theme(app.theme);
    let mut hits = std::mem::take(&mut app.hit_areas);
    hits.clear();

    frame.render_widget(Block::default().style(palette.base()), frame.area());

    render_page(frame, app, &palette, &mut hits);
    navbar::render_navbar(frame.buffer_mut(), app, &palette, &mut hits);
    navbar::render_menu(frame.buffer_mut(), app, &palette, &mut hits);
    hints::render_hints(frame.buffer_mut(), app, &palette);
    dialogs::render_dialogs(frame, app, &palette, &mut hits);

    app.hit_areas = hits;
    app.needs_redraw = false;
}

/// Draw every block that intersects the viewport.
fn render_page(frame: &mut Frame, app: &App, palette: &Palette, hits: &mut HitAreaRegistry) {
    let screen = frame.area();
    let viewport = Rect::new(
        0,
        NAVBAR_HEIGHT,
        screen.width,
        screen.height.saturating_sub(NAVBAR_HEIGHT),
    )
    .intersection(screen);
    if viewport.is_empty() {
        return;
    }

    let pointer = hits.pointer();
    let live = !app.dialog_open();

    for block in app.layout().blocks() {
        let reveal = app.reveal_frame(block.kind);
        if reveal.opacity <= 0.0 {
            continue;
        }
        let origin = screen_origin(block, app.scroll, reveal.dx, reveal.dy);
        let height = block.rect.height as i32;
        if origin.1 + height <= viewport.top() as i32 || origin.1 >= viewport.bottom() as i32 {
            continue;
        }

        let mut canvas = BlockCanvas::new(block.rect.width, block.rect.height, palette.base())
            .at(origin, pointer)
            .interactive(live && reveal.opacity >= CLICKABLE_OPACITY);
        draw_block(&mut canvas, block.kind, app, palette);
        canvas.fade(reveal.opacity, palette.bg);
        canvas.blit(frame.buffer_mut(), viewport, palette.bg, hits);
    }
}

/// Screen position of a block's top-left corner at a scroll offset.
fn screen_origin(block: &PlacedBlock, scroll: u16, dx: i16, dy: i16) -> (i32, i32) {
    (
        block.rect.x as i32 + dx as i32,
        NAVBAR_HEIGHT as i32 + block.rect.y as i32 - scroll as i32 + dy as i32,
    )
}

fn draw_block(canvas: &mut BlockCanvas, kind: BlockKind, app: &App, palette: &Palette) {
    match kind {
        BlockKind::HeroBadge => sections::draw_hero_badge(canvas, palette),
        BlockKind::HeroTitle => sections::draw_hero_title(canvas, palette),
        BlockKind::HeroIntro => sections::draw_hero_intro(canvas, palette),
        BlockKind::HeroActions => sections::draw_hero_actions(canvas, app, palette),
        BlockKind::Stats => sections::draw_stats(canvas, app, palette),
        BlockKind::SectionHeader(section) => sections::draw_section_header(canvas, section, palette),
        BlockKind::Skill(index) => sections::draw_skill(canvas, index, palette),
        BlockKind::Project(index) => sections::draw_project(canvas, index, palette),
        BlockKind::ContactIntro => contact::draw_contact_intro(canvas, palette),
        BlockKind::ContactForm => contact::draw_contact_form(canvas, app, palette),
        BlockKind::Footer => sections::draw_footer(canvas, app, palette),
    }
}
