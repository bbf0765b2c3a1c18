use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::core::app::{schedule_copy_reset, ShellEvent};
use crate::core::message::Message;
use crate::utils::haptics::HapticEngine;
use crate::utils::test_utils::{
    create_test_app, create_test_app_with, FailingClipboard, RecordingClipboard,
    RecordingVibration,
};

#[test]
fn empty_submission_is_inert() {
    let mut app = create_test_app();
    let before = app.ui.messages.len();

    assert!(app.conversation().submit_draft().is_none());
    assert_eq!(app.ui.messages.len(), before);
}

#[test]
fn whitespace_submission_is_inert_and_fires_no_haptic() {
    let device = Arc::new(RecordingVibration::default());
    let mut app = create_test_app_with(
        HapticEngine::with_device(device.clone()),
        Arc::new(RecordingClipboard::default()),
    );
    app.ui.composer.set_input_text("  ");

    assert!(app.conversation().submit_draft().is_none());
    assert!(device.requests().is_empty());
    assert_eq!(app.ui.composer.input_text(), "  ");
}

#[test]
fn accepted_submission_appends_user_message_and_clears_draft() {
    let device = Arc::new(RecordingVibration::default());
    let mut app = create_test_app_with(
        HapticEngine::with_device(device.clone()),
        Arc::new(RecordingClipboard::default()),
    );
    app.ui.composer.set_input_text("hello");
    app.ui
        .composer
        .add_attachment(crate::core::app::Attachment::from_path("/tmp/pic.png"));

    let draft = app.conversation().submit_draft().expect("draft");
    assert_eq!(draft.text, "hello");
    assert_eq!(draft.attachments.len(), 1);

    assert_eq!(app.ui.composer.input_text(), "");
    assert!(app.ui.composer.attachments.is_empty());

    let last = app.ui.messages.back().expect("user message");
    assert!(last.role.is_user());
    assert_eq!(last.content, "hello");

    // Submission fires the medium haptic cue.
    assert_eq!(device.requests(), vec![vec![20]]);
}

#[test]
fn newline_variant_leaves_the_draft_unsubmitted() {
    let mut app = create_test_app();
    app.ui.composer.set_input_text("hello");
    app.ui.composer.insert_newline();

    assert_eq!(app.ui.composer.input_text(), "hello\n");
    assert_eq!(app.ui.messages.len(), 1);
}

#[test]
fn selected_model_always_resolves_to_a_catalog_entry() {
    let mut app = create_test_app();
    app.session.set_model("model-that-never-existed");
    assert_eq!(app.session.current_model().id, "gpt-4");

    app.session.set_model("llama-3");
    assert_eq!(app.session.current_model().id, "llama-3");
}

#[test]
fn session_flags_toggle_independently() {
    let mut app = create_test_app();
    assert!(app.session.sidebar_open);
    assert!(!app.session.toggle_sidebar());
    assert!(!app.session.incognito_mode);
    assert!(app.session.toggle_incognito());
    assert!(!app.session.toggle_incognito());
}

#[tokio::test(start_paused = true)]
async fn successful_copy_sets_flag_and_reverts_after_two_seconds() {
    let clipboard = Arc::new(RecordingClipboard::default());
    let device = Arc::new(RecordingVibration::default());
    let mut app = create_test_app_with(HapticEngine::with_device(device.clone()), clipboard.clone());

    let id = app.ui.next_id();
    app.ui
        .push_message(Message::assistant(id.clone(), "answer", "gpt-4"));

    let (tx, mut rx) = mpsc::unbounded_channel();
    let started = tokio::time::Instant::now();
    app.conversation().copy_message_to_clipboard(&id, tx).await;

    assert!(app.ui.is_copied(&id));
    assert_eq!(clipboard.writes(), vec!["answer".to_string()]);
    assert_eq!(device.requests(), vec![vec![10, 50, 10]]);

    let event = rx.recv().await.expect("revert event");
    assert_eq!(
        event,
        ShellEvent::CopyExpired {
            message_id: id.clone()
        }
    );
    // The revert never fires early.
    assert!(started.elapsed() >= std::time::Duration::from_millis(2000));

    app.ui.clear_copied(&id);
    assert!(!app.ui.is_copied(&id));
}

#[tokio::test(start_paused = true)]
async fn failed_copy_leaves_flag_unset_and_fires_one_error_haptic() {
    let device = Arc::new(RecordingVibration::default());
    let mut app =
        create_test_app_with(HapticEngine::with_device(device.clone()), Arc::new(FailingClipboard));

    let id = app.ui.next_id();
    app.ui
        .push_message(Message::assistant(id.clone(), "answer", "gpt-4"));

    let (tx, mut rx) = mpsc::unbounded_channel();
    app.conversation().copy_message_to_clipboard(&id, tx).await;

    assert!(!app.ui.is_copied(&id));
    assert_eq!(device.requests(), vec![vec![30, 100, 30, 100, 30]]);

    tokio::time::advance(std::time::Duration::from_millis(2500)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn cancelled_revert_task_sends_no_event() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let token = CancellationToken::new();
    schedule_copy_reset("msg-9".to_string(), token.clone(), tx);
    token.cancel();

    tokio::time::advance(std::time::Duration::from_millis(2500)).await;
    tokio::task::yield_now().await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn copying_an_unknown_message_does_nothing() {
    let clipboard = Arc::new(RecordingClipboard::default());
    let mut app = create_test_app_with(HapticEngine::unavailable(), clipboard.clone());

    let (tx, _rx) = mpsc::unbounded_channel();
    app.conversation()
        .copy_message_to_clipboard("msg-404", tx)
        .await;

    assert!(clipboard.writes().is_empty());
    assert!(!app.ui.is_copied("msg-404"));
}
