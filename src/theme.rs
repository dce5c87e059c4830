//! Light/dark theme flag.
//!
//! The flag lives on [`App`](crate::app::App) and is handed to render code
//! as a [`Palette`](crate::ui::Palette); nothing else reads it. It is not
//! persisted, so every launch starts dark.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Flip in place, returning the new value.
    pub fn toggle(&mut self) -> Theme {
        *self = self.toggled();
        *self
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Navbar toggle glyph: a sun while dark (switch to light), a moon while light.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => f.write_str("dark"),
            Theme::Light => f.write_str("light"),
        }
    }
}
