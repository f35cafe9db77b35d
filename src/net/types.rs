//! Wire DTOs for the chat backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON (`history[].ai`, not `assistant`) so
//! serde round-trips stay lossless without hand-written mapping.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::session::{PendingExchange, TranscriptEntry};

/// Body of `POST {endpoint}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub history: Vec<HistoryTurn>,
}

/// One prior round trip sent as context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryTurn {
    pub user: String,
    pub ai: String,
}

/// Backend reply envelope.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    #[serde(default)]
    pub response: Option<String>,
    /// Server-side diagnostic accompanying `success: false`.
    #[serde(default)]
    pub message: Option<String>,
}

impl From<&TranscriptEntry> for HistoryTurn {
    fn from(entry: &TranscriptEntry) -> Self {
        Self { user: entry.user.clone(), ai: entry.assistant.clone() }
    }
}

impl From<&PendingExchange> for ChatRequest {
    fn from(exchange: &PendingExchange) -> Self {
        Self {
            message: exchange.message.clone(),
            history: exchange.history.iter().map(HistoryTurn::from).collect(),
        }
    }
}
