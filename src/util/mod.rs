//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (cookies, clock) and
//! HTML rendering from controller and component logic so they stay testable.

pub mod clock;
pub mod cookie;
pub mod format;
