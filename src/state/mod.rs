//! Widget state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session` for the conversation, `visibility`
//! for the panel) so each can be tested without a browser or reactive runtime.

pub mod session;
pub mod visibility;
