//! End-to-end contact form flows: keys in, transport out, dialogs back.

mod common;

use std::time::Duration;

use common::*;
use crossterm::event::{KeyCode, KeyModifiers};
use folio::adapters::MockTransport;
use folio::app::{App, Focus, FormFocus};
use folio::config::FolioConfig;
use folio::error::SubmissionError;
use folio::form::validation::{EMAIL_INVALID, NAME_REQUIRED};
use folio::form::{Field, SubmissionStatus};
use folio::input::ModalType;

fn fill_by_keys(app: &mut App) {
    send(app, [key(KeyCode::Tab)]);
    type_text(app, "Ada Lovelace");
    send(app, [key(KeyCode::Tab)]);
    type_text(app, "ada@example.com");
    send(app, [key(KeyCode::Tab)]);
    type_text(app, "Hello");
    send(app, [key(KeyCode::Enter)]);
    type_text(app, "there");
}

#[tokio::test(start_paused = true)]
async fn test_simulated_delivery_takes_two_seconds() {
    let mut app = App::new(FolioConfig::default().with_animations(false)).with_size(100, 30);
    let mut rx = app.message_rx.take().unwrap();

    fill_by_keys(&mut app);
    assert_eq!(app.form.fields().get(Field::Message), "Hello\nthere");

    send(&mut app, [key_with(KeyCode::Char('s'), KeyModifiers::CONTROL)]);
    assert!(app.form.is_submitting());
    let text = screen_text(&draw(&mut app));
    assert!(text.contains("Sending..."));

    let early = tokio::time::timeout(Duration::from_millis(1999), rx.recv()).await;
    assert!(early.is_err(), "delivery finished before the simulated delay");

    let msg = rx.recv().await.unwrap();
    app.handle_message(msg);

    assert!(app.form.success_visible());
    assert!(app.form.fields().is_empty());
    assert_eq!(app.focus, Focus::Page);
    assert_eq!(app.active_modal(), ModalType::Success);

    let text = screen_text(&draw(&mut app));
    assert!(text.contains("Message Sent!"));
    assert!(text.contains("Close"));

    send(&mut app, [key(KeyCode::Enter)]);
    assert!(!app.form.success_visible());
    assert_eq!(app.active_modal(), ModalType::None);
}

#[tokio::test]
async fn test_invalid_submit_focuses_first_error() {
    let transport = MockTransport::new();
    let mut app = app_with_transport(&transport);
    app.form.update_field(Field::Email, "not-an-email");

    send(&mut app, [key_with(KeyCode::Char('s'), KeyModifiers::CONTROL)]);

    assert!(!app.form.is_submitting());
    assert_eq!(app.form.errors().get(Field::Name), Some(NAME_REQUIRED));
    assert_eq!(app.form.errors().get(Field::Email), Some(EMAIL_INVALID));
    assert_eq!(app.focus, Focus::Form(FormFocus::Field(Field::Name)));

    let text = screen_text(&draw(&mut app));
    assert!(text.contains(NAME_REQUIRED));
    assert!(text.contains(EMAIL_INVALID));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_editing_a_field_clears_its_error() {
    let transport = MockTransport::new();
    let mut app = app_with_transport(&transport);
    send(&mut app, [key_with(KeyCode::Char('s'), KeyModifiers::CONTROL)]);
    assert_eq!(app.form.errors().len(), 3);

    type_text(&mut app, "A");
    assert!(!app.form.errors().contains(Field::Name));
    assert_eq!(app.form.errors().len(), 2);
}

#[tokio::test]
async fn test_failure_then_retry_resends_same_payload() {
    let transport = MockTransport::failing(SubmissionError::Timeout { seconds: 5 });
    let mut app = app_with_transport(&transport);
    let mut rx = app.message_rx.take().unwrap();
    fill_valid_form(&mut app);

    assert!(app.submit_contact_form());
    app.handle_message(rx.recv().await.unwrap());

    assert!(matches!(app.form.status(), SubmissionStatus::Failed(_)));
    assert_eq!(app.active_modal(), ModalType::Failure);
    let text = screen_text(&draw(&mut app));
    assert!(text.contains("Message Not Sent"));
    assert!(text.contains("5 seconds"));

    send(&mut app, [key(KeyCode::Char('r'))]);
    assert!(app.form.is_submitting());
    app.handle_message(rx.recv().await.unwrap());

    assert!(app.form.success_visible());
    let calls = transport.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
    assert_eq!(calls[0].name, "Ada Lovelace");
}

#[tokio::test]
async fn test_dismissed_failure_keeps_fields() {
    let transport = MockTransport::failing(SubmissionError::ConnectionFailed {
        message: "refused".to_string(),
    });
    let mut app = app_with_transport(&transport);
    let mut rx = app.message_rx.take().unwrap();
    fill_valid_form(&mut app);

    app.submit_contact_form();
    app.handle_message(rx.recv().await.unwrap());
    send(&mut app, [key(KeyCode::Esc)]);

    assert_eq!(app.form.status(), &SubmissionStatus::Idle);
    assert_eq!(app.form.fields().get(Field::Name), "Ada Lovelace");
    assert_eq!(app.active_modal(), ModalType::None);
}

#[tokio::test]
async fn test_second_submit_while_in_flight_is_ignored() {
    let transport = MockTransport::gated();
    let mut app = app_with_transport(&transport);
    let mut rx = app.message_rx.take().unwrap();
    fill_valid_form(&mut app);

    assert!(app.submit_contact_form());
    assert!(!app.submit_contact_form());
    send(&mut app, [key_with(KeyCode::Char('s'), KeyModifiers::CONTROL)]);

    // Edits are locked while the form is covered.
    app.focus_field(Field::Name);
    type_text(&mut app, "zzz");
    assert_eq!(app.form.fields().get(Field::Name), "Ada Lovelace");

    transport.release();
    app.handle_message(rx.recv().await.unwrap());
    assert_eq!(transport.call_count(), 1);
    assert_eq!(app.form.delivered_count(), 1);
}

#[tokio::test]
async fn test_dropping_app_discards_pending_delivery() {
    let transport = MockTransport::gated();
    let mut app = app_with_transport(&transport);
    let mut rx = app.message_rx.take().unwrap();
    fill_valid_form(&mut app);
    app.submit_contact_form();
    tokio::task::yield_now().await;

    drop(app);
    transport.release();

    // The task was aborted, so its sender is gone without a message.
    assert!(rx.recv().await.is_none());
}

#[tokio::test]
async fn test_clicking_send_button_submits() {
    let transport = MockTransport::new();
    let mut app = app_with_transport(&transport).with_size(100, 60);
    let mut rx = app.message_rx.take().unwrap();
    fill_valid_form(&mut app);
    app.scroll_to_bottom();

    let buf = draw(&mut app);
    let (x, y) = find_text(&buf, "Send Message").expect("send button on screen");
    send(&mut app, [click(x, y)]);

    assert!(app.form.is_submitting());
    app.handle_message(rx.recv().await.unwrap());
    assert!(app.form.success_visible());
}
