use super::*;

fn message(role: MessageRole, content: &str) -> ChatMessage {
    ChatMessage { id: 0, role, content: content.to_owned(), time_label: "09:30 AM".to_owned() }
}

#[test]
fn bubble_class_marks_errors_as_assistant_bubbles() {
    assert_eq!(bubble_class(MessageRole::User), "chat-message user-message");
    assert_eq!(bubble_class(MessageRole::Assistant), "chat-message ai-message");
    assert!(bubble_class(MessageRole::Error).starts_with("chat-message ai-message"));
}

#[test]
fn user_bubble_is_escaped_verbatim() {
    let html = bubble_html(&message(MessageRole::User, "<script>x</script> **hi**"));
    assert_eq!(html, "&lt;script&gt;x&lt;/script&gt; **hi**");
}

#[test]
fn assistant_bubble_gets_formatting() {
    let html = bubble_html(&message(MessageRole::Assistant, "**Melanoma** is\n- serious"));
    assert_eq!(html, "<strong>Melanoma</strong> is<br>• serious");
}

#[test]
fn assistant_bubble_never_passes_raw_markup() {
    let html = bubble_html(&message(MessageRole::Assistant, "<img src=x onerror=alert(1)>"));
    assert!(!html.contains('<'));
}

#[test]
fn error_bubble_renders_like_assistant_text() {
    let html = bubble_html(&message(MessageRole::Error, "Sorry, I'm having trouble connecting."));
    assert_eq!(html, "Sorry, I&#39;m having trouble connecting.");
}

#[test]
fn bubble_keys_stay_unique_across_failed_exchanges() {
    use crate::net::backend::ChatError;
    use crate::state::session::ChatSession;

    let mut session = ChatSession::default();
    for (text, outcome) in [
        ("q1", Ok("a1".to_owned())),
        ("q2", Err(ChatError::Status(500))),
        ("q3", Ok("a3".to_owned())),
    ] {
        let exchange = session.begin_exchange(text, String::new());
        assert!(exchange.is_some());
        if let Some(exchange) = exchange {
            session.settle_exchange(exchange, outcome, String::new());
        }
    }

    let keys: Vec<u64> = session.messages.iter().map(bubble_key).collect();
    assert_eq!(keys.len(), 6);
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]), "{keys:?}");
}

#[test]
fn suggestions_need_prompts_and_session_flag() {
    assert!(suggestions_shown(true, 6));
    assert!(!suggestions_shown(true, 0));
    assert!(!suggestions_shown(false, 6));
    assert!(!suggestions_shown(false, 0));
}
