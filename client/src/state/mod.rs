//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui`, `content`) so individual components can
//! depend on small focused models. Chat state lives with the chat core.

pub mod content;
pub mod ui;
