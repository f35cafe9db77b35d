//! Chat backend boundary.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: the HTTP backend reports a transport error, since the
//! endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode collapses into [`ChatError`]; callers only ever show
//! its fixed fallback text, never the detail, which goes to the log.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use super::types::{ChatRequest, ChatResponse};
use crate::config::WidgetConfig;

/// Shown for backend-reported failures, bad statuses, and malformed bodies.
pub const ERROR_FALLBACK: &str = "Sorry, I encountered an error. Please try again or visit the full DermaGenie page.";

/// Shown when the request never completed.
pub const CONNECTION_FALLBACK: &str = "Sorry, I'm having trouble connecting. Please try again later.";

/// Errors produced by a chat exchange.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// The backend answered `success: false`.
    #[error("backend rejected message: {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { detail: Option<String> },

    /// The backend answered with a non-2xx status.
    #[error("chat request failed: {0}")]
    Status(u16),

    /// The response body was not a valid chat envelope.
    #[error("chat response parse failed: {0}")]
    Decode(String),

    /// `success: true` without a `response` field.
    #[error("chat response missing reply text")]
    MissingReply,

    /// The request body could not be encoded.
    #[error("chat request encode failed: {0}")]
    Encode(String),

    /// The request never produced a response.
    #[error("chat request could not be sent: {0}")]
    Network(String),
}

impl ChatError {
    /// User-visible text for this failure.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::Network(_) => CONNECTION_FALLBACK,
            _ => ERROR_FALLBACK,
        }
    }
}

/// Something that can answer a chat request.
///
/// The widget runs on a single-threaded event loop, so implementations are
/// not required to return `Send` futures.
#[allow(async_fn_in_trait)]
pub trait ChatBackend {
    /// Send one message with its transcript and return the reply text.
    ///
    /// # Errors
    ///
    /// Returns a [`ChatError`] for any transport, status, or decode failure.
    async fn send(&self, request: &ChatRequest) -> Result<String, ChatError>;
}

/// Turn a raw HTTP status and body into a reply or an error.
///
/// # Errors
///
/// Non-2xx statuses, bodies that are not a chat envelope, `success: false`,
/// and success bodies without a reply all produce a [`ChatError`].
pub fn interpret_response(status: u16, body: &str) -> Result<String, ChatError> {
    if !(200..300).contains(&status) {
        return Err(ChatError::Status(status));
    }
    let envelope: ChatResponse = serde_json::from_str(body).map_err(|e| ChatError::Decode(e.to_string()))?;
    if !envelope.success {
        return Err(ChatError::Rejected { detail: envelope.message });
    }
    envelope.response.ok_or(ChatError::MissingReply)
}

/// `POST`s chat requests to the configured endpoint with the CSRF header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpChatBackend {
    endpoint: String,
    csrf_cookie: String,
    csrf_header: String,
}

impl HttpChatBackend {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            csrf_cookie: config.csrf_cookie.clone(),
            csrf_header: config.csrf_header.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ChatBackend for HttpChatBackend {
    async fn send(&self, request: &ChatRequest) -> Result<String, ChatError> {
        #[cfg(feature = "csr")]
        {
            let mut builder = gloo_net::http::Request::post(&self.endpoint);
            if let Some(token) = crate::util::cookie::read_cookie(&self.csrf_cookie) {
                builder = builder.header(&self.csrf_header, &token);
            }
            let resp = builder
                .json(request)
                .map_err(|e| ChatError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ChatError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ChatError::Network(e.to_string()))?;
            interpret_response(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, &self.csrf_cookie, &self.csrf_header);
            Err(ChatError::Network("not available outside the browser".to_owned()))
        }
    }
}
