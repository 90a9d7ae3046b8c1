//! Canned-response chat widget core.
//!
//! SYSTEM CONTEXT
//! ==============
//! `rules` classifies text, `session` holds history and flags, and
//! `controller` ties them to a rendering surface. None of it touches the DOM,
//! so the whole conversation flow is testable off-browser.

pub mod controller;
pub mod rules;
pub mod session;

pub use controller::{ChatController, ChatSurface, PendingReply, REPLY_DELAY_MS};
pub use session::{ChatSession, ChatTurn, Sender};
