//! Shared fixtures for the integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{static_app, screen_text, draw};
//!
//! let mut app = static_app(100, 30);
//! let text = screen_text(&draw(&mut app));
//! ```

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use folio::adapters::MockTransport;
use folio::app::App;
use folio::config::FolioConfig;
use folio::form::Field;
use folio::input::CommandRegistry;
use folio::ui;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// App with reveals disabled so every block renders at rest.
pub fn static_app(width: u16, height: u16) -> App {
    App::new(FolioConfig::default().with_animations(false))
        .with_size(width, height)
        .with_link_opener(|_| Ok(()))
}

/// App with entrance animations on.
pub fn animated_app(width: u16, height: u16) -> App {
    App::new(FolioConfig::default())
        .with_size(width, height)
        .with_link_opener(|_| Ok(()))
}

/// App delivering through `transport`, animations off.
pub fn app_with_transport(transport: &MockTransport) -> App {
    App::with_transport(
        FolioConfig::default().with_animations(false),
        Arc::new(transport.clone()),
    )
    .with_size(100, 30)
    .with_link_opener(|_| Ok(()))
}

/// App whose link opener records every target it is handed.
pub fn recording_app(width: u16, height: u16) -> (App, Arc<Mutex<Vec<String>>>) {
    let opened = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&opened);
    let app = App::new(FolioConfig::default().with_animations(false))
        .with_size(width, height)
        .with_link_opener(move |target| {
            sink.lock().unwrap().push(target.to_string());
            Ok(())
        });
    (app, opened)
}

pub fn fill_valid_form(app: &mut App) {
    app.form.update_field(Field::Name, "Ada Lovelace");
    app.form.update_field(Field::Email, "ada@example.com");
    app.form.update_field(Field::Message, "Let's build an engine.");
}

/// Render one frame into a fresh test terminal the size of the app.
pub fn draw(app: &mut App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(app.width, app.height)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

pub fn screen_text(buf: &Buffer) -> String {
    (0..buf.area.height)
        .map(|y| row_text(buf, y))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
}

/// Position of the first cell of `needle` on screen, if drawn.
pub fn find_text(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
    (0..buf.area.height).find_map(|y| {
        let cells: Vec<&str> = (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect();
        let row: String = cells.concat();
        let byte = row.find(needle)?;
        // Map the byte offset back to a column.
        let mut seen = 0;
        cells.iter().position(|cell| {
            let hit = seen == byte;
            seen += cell.len();
            hit
        })
        .map(|x| (x as u16, y))
    })
}

pub fn key(code: KeyCode) -> Event {
    key_with(code, KeyModifiers::NONE)
}

pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}

pub fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

pub fn wheel_down() -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 10,
        row: 10,
        modifiers: KeyModifiers::NONE,
    })
}

/// Feed events through the default keybindings.
pub fn send(app: &mut App, events: impl IntoIterator<Item = Event>) {
    let registry = CommandRegistry::new();
    for event in events {
        app.handle_event(&registry, event);
    }
}

pub fn type_text(app: &mut App, text: &str) {
    send(app, text.chars().map(|c| key(KeyCode::Char(c))));
}
