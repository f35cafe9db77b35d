//! Chat session state: visible log, transcript, and the composing marker.
//!
//! DESIGN
//! ======
//! Transitions are synchronous and I/O free. The controller calls
//! `begin_exchange` before dispatching a request and `settle_exchange` once it
//! resolves, so every ordering rule can be tested without a browser.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::backend::ChatError;

/// Who a visible message is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
    /// Fallback text shown in place of a failed reply.
    Error,
}

/// A single bubble in the message list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: MessageRole,
    pub content: String,
    pub time_label: String,
}

/// One successful round trip, replayed to the backend as context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub user: String,
    pub assistant: String,
}

/// A request accepted by the session and awaiting the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingExchange {
    /// Trimmed user message.
    pub message: String,
    /// Transcript as it stood before this message.
    pub history: Vec<TranscriptEntry>,
}

/// State for one page's chat session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatSession {
    pub messages: Vec<ChatMessage>,
    pub transcript: Vec<TranscriptEntry>,
    pub input: String,
    pub composing: bool,
    pub suggestions_visible: bool,
    next_id: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            transcript: Vec::new(),
            input: String::new(),
            composing: false,
            suggestions_visible: true,
            next_id: 0,
        }
    }
}

impl ChatSession {
    /// Accept a user message and mark a reply as pending.
    ///
    /// Returns `None` (and changes nothing) for blank text or while another
    /// exchange is still outstanding.
    pub fn begin_exchange(&mut self, text: &str, time_label: String) -> Option<PendingExchange> {
        let message = text.trim();
        if message.is_empty() || self.composing {
            return None;
        }

        let exchange = PendingExchange { message: message.to_owned(), history: self.transcript.clone() };
        self.push_message(MessageRole::User, exchange.message.clone(), time_label);
        self.input.clear();
        self.suggestions_visible = false;
        self.composing = true;
        Some(exchange)
    }

    /// Record the outcome of an exchange started by `begin_exchange`.
    ///
    /// Only successful replies enter the transcript.
    pub fn settle_exchange(&mut self, exchange: PendingExchange, outcome: Result<String, ChatError>, time_label: String) {
        self.composing = false;
        match outcome {
            Ok(reply) => {
                self.push_message(MessageRole::Assistant, reply.clone(), time_label);
                self.transcript.push(TranscriptEntry { user: exchange.message, assistant: reply });
            }
            Err(err) => {
                self.push_message(MessageRole::Error, err.fallback_message().to_owned(), time_label);
            }
        }
    }

    fn push_message(&mut self, role: MessageRole, content: String, time_label: String) {
        self.messages.push(ChatMessage { id: self.next_id, role, content, time_label });
        self.next_id += 1;
    }
}
