//! Page geometry.
//!
//! The page is one tall column of blocks laid out for a given terminal
//! width. Coordinates are page coordinates: `y` counts rows from the top of
//! the page, independent of scrolling. The viewport (the terminal area
//! below the navbar) is a window onto this column.
//!
//! Heights depend only on the width, so the same width always yields the
//! same anchors and the same visibility geometry.

use ratatui::layout::Rect;

use super::section::Section;
use super::text::{display_width, wrapped_height};
use crate::content::{
    CONTACT_BLURB, PROFILE, PROJECTS, SKILLS, SKILLS_SUBTITLE, PROJECTS_SUBTITLE, STATS,
};
use crate::reveal::{Reveal, RevealDirection};

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;
}

use breakpoints::{MD_WIDTH, SM_WIDTH, XS_WIDTH};

/// Rows taken by the fixed navbar above the viewport.
pub const NAVBAR_HEIGHT: u16 = 3;

/// Widest the content column gets.
pub const MAX_CONTENT_WIDTH: u16 = 110;

/// Columns kept clear on each side of the content column.
pub const SIDE_PADDING: u16 = 2;

/// Blank rows between sections.
pub const SECTION_GAP: u16 = 3;

/// Widest a paragraph of prose gets.
pub const PROSE_WIDTH: u16 = 72;

pub const GRID_GAP_X: u16 = 2;
pub const GRID_GAP_Y: u16 = 1;

pub const BADGE_HEIGHT: u16 = 3;
pub const TITLE_HEIGHT: u16 = 2;
pub const BUTTON_HEIGHT: u16 = 3;
/// Rows under the buttons for the bouncing scroll chevron.
pub const CHEVRON_ROWS: u16 = 2;
pub const STAT_CELL_HEIGHT: u16 = 3;
pub const SKILL_CARD_HEIGHT: u16 = 5;
pub const PROJECT_BANNER_HEIGHT: u16 = 3;
/// Project descriptions show at most this many lines.
pub const PROJECT_DESCRIPTION_LINES: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 5;

/// Rows of one single-line form field: label, bordered input, error line.
pub const FORM_FIELD_HEIGHT: u16 = 5;
/// Rows of the message field: label, bordered 4-line textarea, error line.
pub const FORM_MESSAGE_HEIGHT: u16 = 8;
/// Total contact form height: border and padding around fields and button.
pub const FORM_HEIGHT: u16 = 2 + 2 * FORM_FIELD_HEIGHT + FORM_MESSAGE_HEIGHT + BUTTON_HEIGHT + 2;

/// What a placed block shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    HeroBadge,
    HeroTitle,
    HeroIntro,
    /// The two call-to-action buttons and the scroll chevron.
    HeroActions,
    Stats,
    SectionHeader(Section),
    Skill(usize),
    Project(usize),
    ContactIntro,
    ContactForm,
    Footer,
}

/// A block positioned in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedBlock {
    pub kind: BlockKind,
    pub rect: Rect,
    /// Entrance transition; `None` renders at rest immediately.
    pub reveal: Option<Reveal>,
}

/// Every block of the page, placed for one width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    width: u16,
    height: u16,
    blocks: Vec<PlacedBlock>,
    anchors: [u16; 4],
}

/// Builder state while stacking blocks top to bottom.
struct Cursor {
    blocks: Vec<PlacedBlock>,
    y: u16,
}

impl Cursor {
    fn place(&mut self, kind: BlockKind, rect: Rect, reveal: Option<Reveal>) {
        self.blocks.push(PlacedBlock { kind, rect, reveal });
    }
}

impl PageLayout {
    /// Lay the page out for a terminal `width` columns wide.
    pub fn compute(width: u16) -> Self {
        let width = width.max(1);
        let content_width = width
            .saturating_sub(2 * SIDE_PADDING)
            .clamp(1, MAX_CONTENT_WIDTH);
        let content_x = (width - content_width) / 2;
        let prose_width = content_width.min(PROSE_WIDTH);
        let prose_x = content_x + (content_width - prose_width) / 2;

        let mut cursor = Cursor {
            blocks: Vec::new(),
            y: 2,
        };
        let mut anchors = [0u16; 4];

        // Hero
        let badge_width = (display_width(PROFILE.badge) as u16 + 6).min(content_width);
        cursor.place(
            BlockKind::HeroBadge,
            Rect::new(
                content_x + (content_width - badge_width) / 2,
                cursor.y,
                badge_width,
                BADGE_HEIGHT,
            ),
            Some(Reveal::up(0)),
        );
        cursor.y += BADGE_HEIGHT + 1;

        cursor.place(
            BlockKind::HeroTitle,
            Rect::new(content_x, cursor.y, content_width, TITLE_HEIGHT),
            Some(Reveal::up(200)),
        );
        cursor.y += TITLE_HEIGHT + 1;

        let intro_height = wrapped_height(&intro_text(), prose_width as usize);
        cursor.place(
            BlockKind::HeroIntro,
            Rect::new(prose_x, cursor.y, prose_width, intro_height),
            Some(Reveal::up(400)),
        );
        cursor.y += intro_height + 1;

        let actions_height = hero_buttons_height(content_width) + 1 + CHEVRON_ROWS;
        cursor.place(
            BlockKind::HeroActions,
            Rect::new(content_x, cursor.y, content_width, actions_height),
            Some(Reveal::up(600)),
        );
        cursor.y += actions_height + 1;

        let stats_height = stats_height(width);
        cursor.place(
            BlockKind::Stats,
            Rect::new(content_x, cursor.y, content_width, stats_height),
            Some(Reveal::up(800)),
        );
        cursor.y += stats_height + SECTION_GAP;

        // Skills
        anchors[Section::Skills.index()] = cursor.y;
        cursor.y += 1;
        let header_height = section_header_height(Section::Skills, prose_width);
        cursor.place(
            BlockKind::SectionHeader(Section::Skills),
            Rect::new(content_x, cursor.y, content_width, header_height),
            Some(Reveal::up(0)),
        );
        cursor.y += header_height + 2;

        let columns = skill_columns(width);
        let card_width = column_width(content_width, columns);
        let skill_rows = SKILLS.len().div_ceil(columns as usize) as u16;
        for index in 0..SKILLS.len() {
            let (row, col) = (index as u16 / columns, index as u16 % columns);
            cursor.place(
                BlockKind::Skill(index),
                Rect::new(
                    content_x + col * (card_width + GRID_GAP_X),
                    cursor.y + row * (SKILL_CARD_HEIGHT + GRID_GAP_Y),
                    card_width,
                    SKILL_CARD_HEIGHT,
                ),
                Some(Reveal::up(index as u64 * 100)),
            );
        }
        cursor.y += grid_height(skill_rows, SKILL_CARD_HEIGHT) + SECTION_GAP;

        // Projects
        anchors[Section::Projects.index()] = cursor.y;
        cursor.y += 1;
        let header_height = section_header_height(Section::Projects, prose_width);
        cursor.place(
            BlockKind::SectionHeader(Section::Projects),
            Rect::new(content_x, cursor.y, content_width, header_height),
            Some(Reveal::up(0)),
        );
        cursor.y += header_height + 2;

        let columns = project_columns(width);
        let card_width = column_width(content_width, columns);
        let card_height = (0..PROJECTS.len())
            .map(|i| project_card_height(i, card_width))
            .max()
            .unwrap_or(0);
        let project_rows = PROJECTS.len().div_ceil(columns as usize) as u16;
        for index in 0..PROJECTS.len() {
            let (row, col) = (index as u16 / columns, index as u16 % columns);
            cursor.place(
                BlockKind::Project(index),
                Rect::new(
                    content_x + col * (card_width + GRID_GAP_X),
                    cursor.y + row * (card_height + GRID_GAP_Y),
                    card_width,
                    card_height,
                ),
                Some(Reveal::up(index as u64 * 150)),
            );
        }
        cursor.y += grid_height(project_rows, card_height) + SECTION_GAP;

        // Contact
        anchors[Section::Contact.index()] = cursor.y;
        cursor.y += 1;
        if contact_side_by_side(width) {
            let intro_width = (content_width - 4) / 2;
            let form_width = content_width - intro_width - 4;
            let intro_height = contact_intro_height(intro_width);
            let row_height = intro_height.max(FORM_HEIGHT);
            cursor.place(
                BlockKind::ContactIntro,
                Rect::new(
                    content_x,
                    cursor.y + (row_height - intro_height) / 2,
                    intro_width,
                    intro_height,
                ),
                Some(Reveal::new(0, RevealDirection::Left)),
            );
            cursor.place(
                BlockKind::ContactForm,
                Rect::new(
                    content_x + intro_width + 4,
                    cursor.y + (row_height - FORM_HEIGHT) / 2,
                    form_width,
                    FORM_HEIGHT,
                ),
                Some(Reveal::new(200, RevealDirection::Right)),
            );
            cursor.y += row_height + SECTION_GAP;
        } else {
            let intro_height = contact_intro_height(content_width);
            cursor.place(
                BlockKind::ContactIntro,
                Rect::new(content_x, cursor.y, content_width, intro_height),
                Some(Reveal::new(0, RevealDirection::Left)),
            );
            cursor.y += intro_height + 2;
            cursor.place(
                BlockKind::ContactForm,
                Rect::new(content_x, cursor.y, content_width, FORM_HEIGHT),
                Some(Reveal::new(200, RevealDirection::Right)),
            );
            cursor.y += FORM_HEIGHT + SECTION_GAP;
        }

        cursor.place(
            BlockKind::Footer,
            Rect::new(0, cursor.y, width, FOOTER_HEIGHT),
            None,
        );
        cursor.y += FOOTER_HEIGHT;

        Self {
            width,
            height: cursor.y,
            blocks: cursor.blocks,
            anchors,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Total page height in rows.
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn blocks(&self) -> &[PlacedBlock] {
        &self.blocks
    }

    pub fn block(&self, kind: BlockKind) -> Option<&PlacedBlock> {
        self.blocks.iter().find(|b| b.kind == kind)
    }

    /// Top row of a section.
    pub fn anchor(&self, section: Section) -> u16 {
        self.anchors[section.index()]
    }

    /// Largest useful scroll offset for a viewport `viewport_height` rows tall.
    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.height.saturating_sub(viewport_height)
    }

    /// Section the reader is in when the viewport starts at `scroll`.
    pub fn section_at(&self, scroll: u16) -> Section {
        Section::ALL
            .iter()
            .rev()
            .copied()
            .find(|s| self.anchor(*s) <= scroll)
            .unwrap_or(Section::About)
    }
}

/// The hero intro as one paragraph.
pub fn intro_text() -> String {
    let (before, highlight, after) = PROFILE.intro;
    format!("{}{}{}", before, highlight, after)
}

/// Whether the two hero buttons fit side by side.
pub fn hero_buttons_inline(content_width: u16) -> bool {
    content_width >= 44
}

pub fn hero_buttons_height(content_width: u16) -> u16 {
    if hero_buttons_inline(content_width) {
        BUTTON_HEIGHT
    } else {
        2 * BUTTON_HEIGHT + 1
    }
}

pub fn stats_columns(width: u16) -> u16 {
    if width >= SM_WIDTH {
        4
    } else {
        2
    }
}

fn stats_height(width: u16) -> u16 {
    let rows = STATS.len().div_ceil(stats_columns(width) as usize) as u16;
    2 + grid_height(rows, STAT_CELL_HEIGHT)
}

pub fn skill_columns(width: u16) -> u16 {
    if width >= SM_WIDTH {
        3
    } else if width >= XS_WIDTH {
        2
    } else {
        1
    }
}

pub fn project_columns(width: u16) -> u16 {
    if width >= MD_WIDTH {
        3
    } else {
        1
    }
}

/// Intro and form share a row on wide terminals.
pub fn contact_side_by_side(width: u16) -> bool {
    width >= MD_WIDTH
}

pub fn column_width(content_width: u16, columns: u16) -> u16 {
    let gaps = GRID_GAP_X * columns.saturating_sub(1);
    (content_width.saturating_sub(gaps) / columns).max(1)
}

fn grid_height(rows: u16, cell_height: u16) -> u16 {
    rows * cell_height + rows.saturating_sub(1) * GRID_GAP_Y
}

/// Title, accent rule, subtitle, and (for projects) the Github link row.
pub fn section_header_height(section: Section, prose_width: u16) -> u16 {
    match section {
        Section::Skills => 2 + wrapped_height(SKILLS_SUBTITLE, prose_width as usize),
        Section::Projects => 3 + wrapped_height(PROJECTS_SUBTITLE, prose_width as usize),
        Section::About | Section::Contact => 2,
    }
}

/// Lines of a project description shown in a card `card_width` wide.
pub fn project_description_lines(index: usize, card_width: u16) -> u16 {
    PROJECTS.get(index).map_or(0, |p| {
        wrapped_height(p.description, card_text_width(card_width) as usize)
            .min(PROJECT_DESCRIPTION_LINES)
    })
}

/// Text columns inside a card: border and one column of padding each side.
pub fn card_text_width(card_width: u16) -> u16 {
    card_width.saturating_sub(4).max(1)
}

/// Border, banner, tags, title, description, link, with blank separators.
fn project_card_height(index: usize, card_width: u16) -> u16 {
    1 + PROJECT_BANNER_HEIGHT + 1 + 1 + 1 + 1 + project_description_lines(index, card_width) + 1 + 1 + 1
}

/// Two title lines, blurb, mail link, socials, with blank separators.
pub fn contact_intro_height(width: u16) -> u16 {
    2 + 1 + wrapped_height(CONTACT_BLURB, width as usize) + 1 + 1 + 1 + 1
}
