//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Focus`] / [`FormFocus`] - Whether keys drive the page or the form
//! - [`AppMessage`] - Messages from background submission tasks
//!
//! `App` owns everything the page needs between frames: the computed
//! [`PageLayout`], the scroll position, the visibility observer that
//! latches entrance animations, and the contact form. Behaviour is split
//! over the `navigation`, `actions` and `reveals` submodules.

mod actions;
pub mod cursor_blink;
mod messages;
mod navigation;
mod reveals;
mod types;

pub use cursor_blink::CursorBlinkState;
pub use messages::AppMessage;
pub use types::{Focus, FormFocus, StatusMessage};

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Datelike;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::adapters::SimulatedTransport;
use crate::config::FolioConfig;
use crate::form::ContactForm;
use crate::page::{BlockKind, PageLayout};
use crate::theme::Theme;
use crate::traits::ContactTransport;
use crate::ui::interaction::HitAreaRegistry;
use crate::visibility::{RegionId, VisibilityObserver};

/// Opens a URL or `mailto:` target with the system handler.
pub type LinkOpener = Box<dyn Fn(&str) -> std::io::Result<()> + Send>;

/// Size used until the first resize event arrives.
pub const DEFAULT_SIZE: (u16, u16) = (80, 24);

/// Main application state
pub struct App {
    /// Active color theme
    pub theme: Theme,
    /// Contact form values and submission state
    pub form: ContactForm,
    /// Where key presses go
    pub focus: Focus,
    /// Whether the narrow-terminal nav menu is open
    pub menu_open: bool,
    /// Flag to quit the application
    pub should_quit: bool,
    /// Rows of page content scrolled past the top of the viewport
    pub scroll: u16,
    /// Destination of an in-progress smooth scroll
    scroll_target: Option<u16>,
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
    layout: PageLayout,
    observer: VisibilityObserver,
    regions: HashMap<BlockKind, RegionId>,
    /// Set once regions are observed at a real terminal size
    regions_mounted: bool,
    /// Animation clock value when each block first became visible
    latched_at: HashMap<BlockKind, Duration>,
    /// Time elapsed since startup, advanced by one tick rate per tick
    clock: Duration,
    /// Tick counter for blink and spinner phases
    pub tick_count: u64,
    /// Whether the next loop iteration must redraw
    pub needs_redraw: bool,
    /// Clickable regions registered during the last render
    pub hit_areas: HitAreaRegistry,
    /// Caret blink for the focused form field
    pub cursor_blink: CursorBlinkState,
    /// Feedback line shown in the key hints bar
    pub status: Option<StatusMessage>,
    /// Sender for background task results
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver for background task results; taken by the main loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    transport: Arc<dyn ContactTransport>,
    submission_task: Option<JoinHandle<()>>,
    link_opener: LinkOpener,
    config: FolioConfig,
    /// Year shown in the footer
    pub year: i32,
}

impl App {
    /// Create an app delivering through the simulated transport.
    pub fn new(config: FolioConfig) -> Self {
        let transport = Arc::new(SimulatedTransport::new(config.submit_delay));
        Self::with_transport(config, transport)
    }

    /// Create an app delivering through `transport`.
    pub fn with_transport(config: FolioConfig, transport: Arc<dyn ContactTransport>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let (width, height) = DEFAULT_SIZE;

        let mut app = Self {
            theme: Theme::default(),
            form: ContactForm::new(),
            focus: Focus::default(),
            menu_open: false,
            should_quit: false,
            scroll: 0,
            scroll_target: None,
            width,
            height,
            layout: PageLayout::compute(width),
            observer: VisibilityObserver::new(config.observer),
            regions: HashMap::new(),
            regions_mounted: false,
            latched_at: HashMap::new(),
            clock: Duration::ZERO,
            tick_count: 0,
            needs_redraw: true,
            hit_areas: HitAreaRegistry::new(),
            cursor_blink: CursorBlinkState::new(),
            status: None,
            message_tx,
            message_rx: Some(message_rx),
            transport,
            submission_task: None,
            link_opener: Box::new(|target| open::that(target)),
            config,
            year: chrono::Local::now().year(),
        };
        // Regions mount on the first real size (or the first tick) so a
        // placeholder viewport never latches anything.
        app
    }

    /// Replace the system link opener.
    pub fn with_link_opener(
        mut self,
        opener: impl Fn(&str) -> std::io::Result<()> + Send + 'static,
    ) -> Self {
        self.link_opener = Box::new(opener);
        self
    }

    /// Start at a given terminal size instead of [`DEFAULT_SIZE`].
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.resize(width, height);
        if !self.regions_mounted {
            self.mount_regions();
        }
        self
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    /// Mark that the UI needs to be redrawn
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Re-lay the page for a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        if width == self.width && height == self.height {
            return;
        }
        debug!(width, height, "terminal resized");
        let width_changed = width != self.width;
        self.width = width;
        self.height = height;
        if width_changed {
            self.layout = PageLayout::compute(width);
        }
        if width_changed || !self.regions_mounted {
            self.mount_regions();
        }
        if !self.is_narrow() {
            self.menu_open = false;
        }
        self.scroll = self.scroll.min(self.max_scroll());
        self.scroll_target = self.scroll_target.map(|t| t.min(self.max_scroll()));
        self.poll_visibility();
        self.mark_dirty();
    }

    /// Advance animations, smooth scrolling and timers by one tick.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        self.clock += self.config.tick_rate;

        if !self.regions_mounted {
            self.mount_regions();
        }
        if self.step_smooth_scroll() {
            self.needs_redraw = true;
        }
        self.poll_visibility();

        if self.config.animations && self.is_animating() {
            self.needs_redraw = true;
        }
        if self.focus.field().is_some() && self.cursor_blink.update(self.tick_count) {
            self.needs_redraw = true;
        }
        if self.form.is_submitting() && self.tick_count % SPINNER_TICKS == 0 {
            self.needs_redraw = true;
        }
        if self.config.animations && self.tick_count % CHEVRON_TICKS == 0 && self.scroll == 0 {
            self.needs_redraw = true;
        }
        if self
            .status
            .as_ref()
            .is_some_and(|s| self.tick_count >= s.expires_at)
        {
            self.status = None;
            self.needs_redraw = true;
        }
    }

    /// Elapsed animation time.
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Spinner frame index for the submit button.
    pub fn spinner_frame(&self) -> usize {
        (self.tick_count / SPINNER_TICKS) as usize
    }

    /// Whether the scroll hint chevron is in its raised phase.
    pub fn chevron_raised(&self) -> bool {
        self.config.animations && (self.tick_count / CHEVRON_TICKS) % 2 == 1
    }

    pub fn toggle_theme(&mut self) {
        let theme = self.theme.toggle();
        tracing::info!(theme = %theme, "theme toggled");
        self.mark_dirty();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Show a transient status line for a few seconds.
    pub fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error,
            expires_at: self.tick_count + STATUS_TICKS,
        });
        self.mark_dirty();
    }
}

/// Ticks per spinner frame (~130ms at 60fps).
const SPINNER_TICKS: u64 = 8;

/// Ticks per half bounce of the scroll hint chevron.
const CHEVRON_TICKS: u64 = 30;

/// Ticks a status message stays up (~3s at 60fps).
const STATUS_TICKS: u64 = 180;

impl Drop for App {
    fn drop(&mut self) {
        if let Some(task) = self.submission_task.take() {
            task.abort();
        }
        self.form.teardown();
    }
}
