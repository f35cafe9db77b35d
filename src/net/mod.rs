//! Networking modules for the chat backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema and `backend` owns the HTTP exchange and
//! the mapping of every failure mode onto user-facing fallbacks.

pub mod backend;
pub mod types;
