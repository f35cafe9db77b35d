//! Chat session controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once per page and handed to the widget component. It owns the
//! reactive session and visibility signals and is the only code that talks to
//! the [`ChatBackend`]. Components forward DOM events here and render from
//! the signals it exposes.
//!
//! CONCURRENCY
//! ===========
//! Runs on the browser event loop. The backend exchange is the only
//! suspension point; the session rejects new submissions until it settles, so
//! at most one request is in flight.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::backend::ChatBackend;
use crate::net::types::ChatRequest;
use crate::state::session::ChatSession;
use crate::state::visibility::{DismissRules, PanelEvent, Visibility};
use crate::util::clock;

pub struct ChatController<B> {
    session: RwSignal<ChatSession>,
    visibility: RwSignal<Visibility>,
    rules: DismissRules,
    backend: Arc<B>,
}

impl<B> Clone for ChatController<B> {
    fn clone(&self) -> Self {
        Self {
            session: self.session,
            visibility: self.visibility,
            rules: self.rules,
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B: ChatBackend> ChatController<B> {
    pub fn new(backend: B, rules: DismissRules) -> Self {
        Self {
            session: RwSignal::new(ChatSession::default()),
            visibility: RwSignal::new(Visibility::default()),
            rules,
            backend: Arc::new(backend),
        }
    }

    pub fn session(&self) -> RwSignal<ChatSession> {
        self.session
    }

    pub fn visibility(&self) -> RwSignal<Visibility> {
        self.visibility
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    /// Apply a panel event and return the resulting state.
    pub fn handle(&self, event: PanelEvent) -> Visibility {
        let current = self.visibility.get_untracked();
        let next = current.apply(event, &self.rules);
        if next != current {
            log::debug!("chat panel {current:?} -> {next:?} on {event:?}");
            self.visibility.set(next);
        }
        next
    }

    /// Mirror the input box contents.
    pub fn set_input(&self, text: String) {
        self.session.update(|s| s.input = text);
    }

    /// Send `text` to the backend and render the outcome.
    ///
    /// Returns `false` without side effects when the text is blank or another
    /// exchange is still pending.
    pub async fn submit_message(&self, text: &str) -> bool {
        let Some(exchange) = self
            .session
            .try_update(|s| s.begin_exchange(text, clock::time_label()))
            .flatten()
        else {
            return false;
        };

        let request = ChatRequest::from(&exchange);
        let outcome = self.backend.send(&request).await;
        match &outcome {
            Ok(_) => log::debug!("chat reply received with {} prior turns", request.history.len()),
            Err(err) => log::warn!("chat exchange failed: {err}"),
        }

        self.session.update(|s| s.settle_exchange(exchange, outcome, clock::time_label()));
        true
    }

    /// Submit whatever is currently in the input box.
    pub async fn submit_input(&self) -> bool {
        let text = self.session.with_untracked(|s| s.input.clone());
        self.submit_message(&text).await
    }

    /// Fill the input with a canned question and submit it.
    pub async fn select_suggested_prompt(&self, prompt: &str) -> bool {
        self.set_input(prompt.to_owned());
        self.submit_input().await
    }
}
