use super::*;
use crate::net::backend::{CONNECTION_FALLBACK, ERROR_FALLBACK};

fn begin(session: &mut ChatSession, text: &str) -> PendingExchange {
    session.begin_exchange(text, "10:00 AM".to_owned()).unwrap()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_default_is_empty_with_suggestions() {
    let session = ChatSession::default();
    assert!(session.messages.is_empty());
    assert!(session.transcript.is_empty());
    assert!(session.input.is_empty());
    assert!(!session.composing);
    assert!(session.suggestions_visible);
}

// =============================================================
// begin_exchange
// =============================================================

#[test]
fn begin_exchange_ignores_blank_input() {
    let mut session = ChatSession { input: "   ".to_owned(), ..ChatSession::default() };
    for text in ["", " ", "\t\n", "   "] {
        assert_eq!(session.begin_exchange(text, String::new()), None);
    }
    assert!(session.messages.is_empty());
    assert!(session.suggestions_visible);
    assert!(!session.composing);
    assert_eq!(session.input, "   ");
}

#[test]
fn begin_exchange_appends_trimmed_user_message() {
    let mut session = ChatSession { input: "  hello  ".to_owned(), ..ChatSession::default() };
    let exchange = begin(&mut session, "  hello  ");

    assert_eq!(exchange.message, "hello");
    assert!(exchange.history.is_empty());
    assert_eq!(session.messages.len(), 1);
    assert_eq!(session.messages[0].role, MessageRole::User);
    assert_eq!(session.messages[0].content, "hello");
    assert_eq!(session.messages[0].time_label, "10:00 AM");
    assert!(session.input.is_empty());
    assert!(session.composing);
    assert!(!session.suggestions_visible);
}

#[test]
fn begin_exchange_is_ignored_while_composing() {
    let mut session = ChatSession::default();
    begin(&mut session, "first");
    session.input = "second".to_owned();

    assert_eq!(session.begin_exchange("second", String::new()), None);
    assert_eq!(session.messages.len(), 1);
    assert_eq!(session.input, "second");
}

#[test]
fn begin_exchange_carries_prior_transcript() {
    let mut session = ChatSession::default();
    let first = begin(&mut session, "q1");
    session.settle_exchange(first, Ok("a1".to_owned()), String::new());

    let second = begin(&mut session, "q2");
    assert_eq!(second.history, vec![TranscriptEntry { user: "q1".to_owned(), assistant: "a1".to_owned() }]);
}

// =============================================================
// settle_exchange
// =============================================================

#[test]
fn settle_success_appends_reply_and_transcript_entry() {
    let mut session = ChatSession::default();
    let exchange = begin(&mut session, "What is melanoma?");
    session.settle_exchange(exchange, Ok("Melanoma is...".to_owned()), "10:01 AM".to_owned());

    assert!(!session.composing);
    assert_eq!(session.messages.len(), 2);
    assert_eq!(session.messages[1].role, MessageRole::Assistant);
    assert_eq!(session.messages[1].content, "Melanoma is...");
    assert_eq!(
        session.transcript,
        vec![TranscriptEntry { user: "What is melanoma?".to_owned(), assistant: "Melanoma is...".to_owned() }]
    );
}

#[test]
fn settle_failure_shows_fallback_without_transcript_entry() {
    let mut session = ChatSession::default();
    let exchange = begin(&mut session, "hello");
    session.settle_exchange(exchange, Err(ChatError::Status(500)), String::new());

    assert!(!session.composing);
    assert!(session.transcript.is_empty());
    assert_eq!(session.messages[1].role, MessageRole::Error);
    assert_eq!(session.messages[1].content, ERROR_FALLBACK);
}

#[test]
fn settle_network_failure_shows_connection_fallback() {
    let mut session = ChatSession::default();
    let exchange = begin(&mut session, "hello");
    session.settle_exchange(exchange, Err(ChatError::Network("offline".to_owned())), String::new());

    assert_eq!(session.messages[1].content, CONNECTION_FALLBACK);
    assert!(session.transcript.is_empty());
}

#[test]
fn transcript_preserves_order_across_round_trips() {
    let mut session = ChatSession::default();
    for (q, a) in [("q1", "a1"), ("q2", "a2"), ("q3", "a3")] {
        let exchange = begin(&mut session, q);
        session.settle_exchange(exchange, Ok(a.to_owned()), String::new());
    }
    let users: Vec<&str> = session.transcript.iter().map(|t| t.user.as_str()).collect();
    assert_eq!(users, ["q1", "q2", "q3"]);
    assert_eq!(session.transcript.last().map(|t| t.assistant.as_str()), Some("a3"));
}

#[test]
fn suggestions_stay_hidden_after_failures() {
    let mut session = ChatSession::default();
    let exchange = begin(&mut session, "hello");
    session.settle_exchange(exchange, Err(ChatError::MissingReply), String::new());
    assert!(!session.suggestions_visible);
}

#[test]
fn message_ids_are_unique_and_increasing() {
    let mut session = ChatSession::default();
    let exchange = begin(&mut session, "a");
    session.settle_exchange(exchange, Ok("b".to_owned()), String::new());
    let exchange = begin(&mut session, "c");
    session.settle_exchange(exchange, Err(ChatError::MissingReply), String::new());

    let ids: Vec<u64> = session.messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, [0, 1, 2, 3]);
}
