//! Color palettes for the dark and light themes.
//!
//! Render code never branches on [`Theme`] directly; it asks for a
//! [`Palette`] once per frame and reads colors from it.

use ratatui::style::{Color, Modifier, Style};

use crate::content::Accent;
use crate::theme::Theme;

// ============================================================================
// Dark Theme (slate-950 page, cyan accents)
// ============================================================================

pub const DARK_BG: Color = Color::Rgb(2, 6, 23);
pub const DARK_SURFACE: Color = Color::Rgb(15, 23, 42);
pub const DARK_TEXT: Color = Color::Rgb(226, 232, 240);
pub const DARK_MUTED: Color = Color::Rgb(148, 163, 184);
pub const DARK_DIM: Color = Color::Rgb(71, 85, 105);
pub const DARK_BORDER: Color = Color::Rgb(30, 41, 59);
pub const DARK_ACCENT: Color = Color::Rgb(34, 211, 238); // cyan-400

// ============================================================================
// Light Theme (slate-50 page, cyan-600 accents)
// ============================================================================

pub const LIGHT_BG: Color = Color::Rgb(248, 250, 252);
pub const LIGHT_SURFACE: Color = Color::Rgb(255, 255, 255);
pub const LIGHT_TEXT: Color = Color::Rgb(15, 23, 42);
pub const LIGHT_MUTED: Color = Color::Rgb(71, 85, 105);
pub const LIGHT_DIM: Color = Color::Rgb(148, 163, 184);
pub const LIGHT_BORDER: Color = Color::Rgb(226, 232, 240);
pub const LIGHT_ACCENT: Color = Color::Rgb(8, 145, 178); // cyan-600

// ============================================================================
// Shared status colors
// ============================================================================

/// Validation messages and failed submissions.
pub const COLOR_ERROR: Color = Color::Rgb(239, 68, 68);

/// Success acknowledgment.
pub const COLOR_SUCCESS: Color = Color::Rgb(16, 185, 129);

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub theme: Theme,
    pub bg: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub dim: Color,
    pub border: Color,
    pub accent: Color,
    pub error: Color,
    pub success: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        theme: Theme::Dark,
        bg: DARK_BG,
        surface: DARK_SURFACE,
        text: DARK_TEXT,
        muted: DARK_MUTED,
        dim: DARK_DIM,
        border: DARK_BORDER,
        accent: DARK_ACCENT,
        error: COLOR_ERROR,
        success: COLOR_SUCCESS,
    };

    pub const LIGHT: Palette = Palette {
        theme: Theme::Light,
        bg: LIGHT_BG,
        surface: LIGHT_SURFACE,
        text: LIGHT_TEXT,
        muted: LIGHT_MUTED,
        dim: LIGHT_DIM,
        border: LIGHT_BORDER,
        accent: LIGHT_ACCENT,
        error: COLOR_ERROR,
        success: COLOR_SUCCESS,
    };

    pub fn for_theme(theme: Theme) -> Palette {
        match theme {
            Theme::Dark => Palette::DARK,
            Theme::Light => Palette::LIGHT,
        }
    }

    /// Resolve a named accent; light backgrounds get the darker shade.
    pub fn accent_color(&self, accent: Accent) -> Color {
        let (dark, light) = match accent {
            Accent::Cyan => ((34, 211, 238), (8, 145, 178)),
            Accent::Blue => ((96, 165, 250), (37, 99, 235)),
            Accent::Teal => ((45, 212, 191), (13, 148, 136)),
            Accent::Purple => ((192, 132, 252), (147, 51, 234)),
            Accent::Green => ((74, 222, 128), (22, 163, 74)),
            Accent::Yellow => ((250, 204, 21), (202, 138, 4)),
            Accent::Fuchsia => ((232, 121, 249), (192, 38, 211)),
            Accent::Emerald => ((52, 211, 153), (5, 150, 105)),
        };
        let (r, g, b) = if self.theme.is_dark() { dark } else { light };
        Color::Rgb(r, g, b)
    }

    /// Base style for page text.
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }
}
