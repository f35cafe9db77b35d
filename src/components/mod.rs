//! Leptos UI components.
//!
//! Components own no state of their own beyond DOM refs; everything they
//! render comes from a [`crate::controller::ChatController`].

pub mod chat_widget;
