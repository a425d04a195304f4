//! E2E dispatch tests for outbox.
//!
//! Exercises the full flow: compose, prepare, dispatch through the
//! journaling wrapper, inspect the journal file.

mod common;

use common::{addr, draft};
use outbox::{
    Dispatch, Dispatcher, JournaledDispatcher, Message, Status, JOURNAL_SEPARATOR,
};

/// Compose -> prepare -> dispatch: every recipient gets a sent copy.
#[test]
fn test_full_flow_marks_copies_sent() {
    let mut message = draft(
        "  Monthly   report  ",
        " Numbers are\nup   again ",
        &["alice@work.com", "bob@home.net", "carol@mail.ru"],
    );
    message.prepare();

    assert_eq!(message.status, Status::Ready);
    assert_eq!(message.subject, "Monthly report");
    assert_eq!(message.body, "Numbers are up again");

    let copies = Dispatcher::new().dispatch(&message).unwrap();

    assert_eq!(copies.len(), 3);
    for copy in &copies {
        assert_eq!(copy.status, Status::Sent);
        assert_eq!(copy.recipients.len(), 1);
        assert!(copy.sent_at.is_some());
    }

    // The source message is left untouched.
    assert!(message.sent_at.is_none());
    assert_eq!(message.status, Status::Ready);
    assert_eq!(message.recipients.len(), 3);
}

/// An unprepared draft dispatches, but every copy is marked failed.
#[test]
fn test_unprepared_draft_fails_all_copies() {
    let message = draft("Hello", "Body", &["alice@work.com", "bob@home.net"]);
    let copies = Dispatcher::new().dispatch(&message).unwrap();

    assert_eq!(copies.len(), 2);
    assert!(copies.iter().all(|copy| copy.status == Status::Failed));
}

/// A message that prepares to invalid also fails its copies.
#[test]
fn test_invalid_message_fails_copies() {
    let mut message = draft("Hello", "   ", &["alice@work.com"]);
    message.prepare();
    assert_eq!(message.status, Status::Invalid);

    let copies = Dispatcher::new().dispatch(&message).unwrap();
    assert_eq!(copies.len(), 1);
    assert_eq!(copies[0].status, Status::Failed);
}

/// Journal file holds one rendered block per copy, separated by the
/// fixed delimiter, and is overwritten by the next dispatch.
#[test]
fn test_journal_file_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("send.log");
    let dispatcher = JournaledDispatcher::new(Dispatcher::new(), &path);

    let mut message = draft(
        "Greetings",
        "A body long enough to be shortened",
        &["alice@work.com", "bob@home.net"],
    );
    message.prepare();
    dispatcher.dispatch(&message).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();

    // Two rendered blocks, one separator line between them.
    assert_eq!(content.matches(JOURNAL_SEPARATOR).count(), 1);
    assert_eq!(content.matches("Status: sent").count(), 2);
    assert!(content.contains("To: al***@work.com"));
    assert!(content.contains("To: bo***@home.net"));
    assert!(content.contains("From: se***@mail.com"));
    assert!(content.contains("Subject: Greetings, date "));
    // Rendered body is the shortened preview.
    assert!(content.contains("A body lon..."));

    // Second dispatch overwrites the journal.
    let mut second = draft("Again", "Short", &["carol@mail.ru"]);
    second.prepare();
    dispatcher.dispatch(&second).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("Subject: Again"));
    assert!(!content.contains("Subject: Greetings"));
}

/// Rendered copies follow the five-line labeled block contract.
#[test]
fn test_rendered_copy_layout() {
    let mut message = draft("Hello", "World", &["alice@work.com"]);
    message.prepare();

    let copy = Dispatcher::new()
        .dispatch(&message)
        .unwrap()
        .into_iter()
        .next()
        .unwrap();
    let text = copy.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Status: sent");
    assert_eq!(lines[1], "To: al***@work.com");
    assert_eq!(lines[2], "From: se***@mail.com");
    assert!(lines[3].starts_with("Subject: Hello, date "));
    assert_eq!(lines[4], "World");
}

/// No recipients: dispatch yields nothing and the journal is not written.
#[test]
fn test_empty_recipients_skip_journal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("send.log");
    let dispatcher = JournaledDispatcher::new(Dispatcher::new(), &path);

    let message = draft("Hello", "Body", &[]).with_status(Status::Ready);
    let copies = dispatcher.dispatch(&message).unwrap();

    assert!(copies.is_empty());
    assert!(!path.exists());
}

/// Fan-out to many recipients preserves order and per-copy isolation.
#[test]
fn test_large_fan_out() {
    let recipients: Vec<String> = (0..10).map(|i| format!("user{i}@mail.com")).collect();
    let recipient_refs: Vec<&str> = recipients.iter().map(String::as_str).collect();

    let mut message = draft("Hi", "Msg", &recipient_refs);
    message.prepare();

    let copies = Dispatcher::new().dispatch(&message).unwrap();

    assert_eq!(copies.len(), 10);
    for (i, copy) in copies.iter().enumerate() {
        assert_eq!(copy.recipients.len(), 1);
        assert_eq!(copy.recipients[0].normalized(), format!("user{i}@mail.com"));
        assert_eq!(copy.status, Status::Sent);
    }
}

/// Status progression across the whole lifecycle.
#[test]
fn test_status_progression() {
    let mut message = Message::new("S", "B", addr("a@a.com"), addr("b@b.com"));
    assert_eq!(message.status, Status::Draft);

    message.prepare();
    assert_eq!(message.status, Status::Ready);

    let copy = Dispatcher::new()
        .dispatch(&message)
        .unwrap()
        .into_iter()
        .next()
        .unwrap();
    assert_eq!(copy.status, Status::Sent);
}
