//! Hit area system for mouse interactions.
//!
//! Components register clickable regions while rendering, and the event
//! loop queries the registry to decide what a click does. Rects are in
//! screen coordinates, so registrations are only valid for the frame that
//! produced them.

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::form::Field;
use crate::page::Section;

/// Represents an action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    // Navbar
    /// A nav link, a menu entry, or a hero call-to-action
    NavLink(Section),
    /// The logo scrolls back to the top
    Logo,
    ToggleTheme,
    ToggleMenu,

    // Contact
    /// Put the caret in a form field
    FocusField(Field),
    SubmitForm,
    /// The contact email address
    OpenEmail,

    // Dialogs
    CloseSuccess,
    RetrySubmission,
    DismissFailure,
}

impl ClickAction {
    /// Whether the action belongs to a dialog and stays live while it shows.
    pub fn is_dialog_action(&self) -> bool {
        matches!(
            self,
            ClickAction::CloseSuccess | ClickAction::RetrySubmission | ClickAction::DismissFailure
        )
    }
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
    /// Optional style to apply when hovering over this area
    pub hover_style: Option<Style>,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry for managing hit areas across the UI.
///
/// Cleared at the start of each render and refilled by the components drawn
/// in that frame. Later registrations sit on top of earlier ones.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    /// Index of the currently hovered area (if any)
    hovered: Option<usize>,
    /// Last known pointer position, re-applied after each clear
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas. Call this at the start of each render.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
    }

    /// Register a new hit area. Zero-sized rects are skipped.
    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
        if let Some((x, y)) = self.pointer {
            if self.areas.last().is_some_and(|a| a.contains(x, y)) {
                self.hovered = Some(self.areas.len() - 1);
            }
        }
    }

    /// Returns the action for the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action)
    }

    /// Update the hover state based on mouse position.
    ///
    /// Returns true if the hover state changed (requiring a redraw).
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        self.pointer = Some((x, y));
        let new_hovered = self.areas.iter().rposition(|area| area.contains(x, y));
        let changed = new_hovered != self.hovered;
        self.hovered = new_hovered;
        changed
    }

    /// Hover style for `rect` if it is the hovered area.
    pub fn get_hover_style(&self, rect: Rect) -> Option<Style> {
        let area = self.get_hovered()?;
        if area.rect == rect {
            area.hover_style
        } else {
            None
        }
    }

    /// Last pointer position seen by [`update_hover`](Self::update_hover).
    pub fn pointer(&self) -> Option<(u16, u16)> {
        self.pointer
    }

    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }

    pub fn get_hovered(&self) -> Option<&HitArea> {
        self.hovered.and_then(|idx| self.areas.get(idx))
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
