//! Scrolling, section jumps, the narrow-terminal menu, and form focus.

use tracing::{debug, info};

use super::{App, Focus, FormFocus};
use crate::form::Field;
use crate::page::layout::breakpoints::SM_WIDTH;
use crate::page::{BlockKind, Section};

/// Rows scrolled before the navbar switches to its compact style.
pub const SCROLLED_THRESHOLD: u16 = 3;

/// Rows kept between the navbar and the top of a focused form.
const FOCUS_MARGIN: u16 = 1;

impl App {
    pub fn max_scroll(&self) -> u16 {
        self.layout.max_scroll(self.viewport_height())
    }

    /// Whether the page has moved far enough to restyle the navbar.
    pub fn is_scrolled(&self) -> bool {
        self.scroll > SCROLLED_THRESHOLD
    }

    /// Nav links collapse into a menu below this width.
    pub fn is_narrow(&self) -> bool {
        self.width < SM_WIDTH
    }

    /// Section highlighted in the navbar.
    ///
    /// At the bottom of the page the last section wins even when its anchor
    /// cannot reach the top of the viewport.
    pub fn active_section(&self) -> Section {
        let max = self.max_scroll();
        if max > 0 && self.scroll >= max {
            return Section::Contact;
        }
        self.layout.section_at(self.scroll)
    }

    pub fn is_smooth_scrolling(&self) -> bool {
        self.scroll_target.is_some()
    }

    /// Jump straight to `row`, cancelling any smooth scroll.
    pub fn scroll_to(&mut self, row: u16) {
        self.scroll_target = None;
        let row = row.min(self.max_scroll());
        if row != self.scroll {
            self.scroll = row;
            self.poll_visibility();
            self.mark_dirty();
        }
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll_to(self.scroll.saturating_sub(rows));
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.scroll_to(self.scroll.saturating_add(rows));
    }

    /// One viewport minus two rows of overlap.
    fn page_rows(&self) -> u16 {
        self.viewport_height().saturating_sub(2).max(1)
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page_rows());
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page_rows());
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_to(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_to(self.max_scroll());
    }

    /// Scroll to a section, animating when animations are on.
    ///
    /// Also closes the nav menu, mirroring a tap on a menu link.
    pub fn jump_to(&mut self, section: Section) {
        let target = self.layout.anchor(section).min(self.max_scroll());
        info!(section = %section, target, "jump to section");
        self.menu_open = false;
        self.smooth_scroll_to(target);
        self.mark_dirty();
    }

    fn smooth_scroll_to(&mut self, target: u16) {
        let target = target.min(self.max_scroll());
        if self.config.animations && target != self.scroll {
            self.scroll_target = Some(target);
        } else {
            self.scroll_to(target);
        }
    }

    /// Move one step toward the smooth scroll target.
    ///
    /// Covers a third of the remaining distance per tick, at least one row.
    /// Returns whether the position changed.
    pub(super) fn step_smooth_scroll(&mut self) -> bool {
        let Some(target) = self.scroll_target else {
            return false;
        };
        let remaining = target.abs_diff(self.scroll);
        if remaining == 0 {
            self.scroll_target = None;
            return false;
        }
        let step = (remaining / 3).max(1);
        self.scroll = if target > self.scroll {
            self.scroll + step
        } else {
            self.scroll - step
        };
        if self.scroll == target {
            self.scroll_target = None;
        }
        true
    }

    /// Toggle the collapsed nav menu. Ignored while the links fit inline.
    pub fn toggle_menu(&mut self) {
        if !self.is_narrow() {
            return;
        }
        self.menu_open = !self.menu_open;
        debug!(open = self.menu_open, "nav menu toggled");
        self.mark_dirty();
    }

    pub fn close_menu(&mut self) {
        if self.menu_open {
            self.menu_open = false;
            self.mark_dirty();
        }
    }

    /// Put the caret in `field`, scrolling the form into view.
    pub fn focus_field(&mut self, field: Field) {
        self.set_form_focus(FormFocus::Field(field));
    }

    fn set_form_focus(&mut self, focus: FormFocus) {
        self.focus = Focus::Form(focus);
        self.cursor_blink.reset(self.tick_count);
        self.ensure_form_visible();
        self.mark_dirty();
    }

    /// Tab: enter the form at its first control or advance within it.
    pub fn focus_next(&mut self) {
        let next = match self.focus {
            Focus::Page => FormFocus::FIRST,
            Focus::Form(current) => current.next(),
        };
        self.set_form_focus(next);
    }

    /// Shift+Tab: enter the form at the send button or step back.
    pub fn focus_prev(&mut self) {
        let prev = match self.focus {
            Focus::Page => FormFocus::Send,
            Focus::Form(current) => current.prev(),
        };
        self.set_form_focus(prev);
    }

    /// Return keys to page navigation.
    pub fn leave_form(&mut self) {
        if self.focus.is_form() {
            self.focus = Focus::Page;
            self.mark_dirty();
        }
    }

    /// Scroll so the whole form is on screen, or at least its top.
    fn ensure_form_visible(&mut self) {
        let Some(form) = self.layout.block(BlockKind::ContactForm) else {
            return;
        };
        let rect = form.rect;
        let viewport = self.viewport_height();
        let top = rect.y.saturating_sub(FOCUS_MARGIN);
        let bottom = rect.y + rect.height;

        let fits = self.scroll <= top && bottom <= self.scroll + viewport;
        if fits {
            return;
        }
        let target = if self.scroll > top || rect.height + FOCUS_MARGIN > viewport {
            top
        } else {
            bottom.saturating_sub(viewport)
        };
        self.smooth_scroll_to(target);
    }
}
