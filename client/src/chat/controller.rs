//! Chat widget controller.
//!
//! ARCHITECTURE
//! ============
//! `ChatController` is the single owner of a `ChatSession`. Every user action
//! goes through it, and every visible change is pushed out through the
//! injected `ChatSurface`. The Leptos widget supplies a signal-backed surface;
//! tests supply a recording one.
//!
//! Bot replies are two-phase: `submit` records a `PendingReply` and the caller
//! schedules `resolve` after `REPLY_DELAY_MS`. Unmounting the widget calls
//! `cancel_pending`, after which late timers resolve to nothing.

use super::rules;
use super::session::{ChatSession, ChatTurn};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Simulated typing latency before a bot reply appears.
pub const REPLY_DELAY_MS: u32 = 500;

/// Rendering capabilities the controller needs from its host.
pub trait ChatSurface {
    /// Append a turn to the message pane.
    fn show_turn(&self, turn: &ChatTurn);
    /// Reflect the open/minimized flags on the panel and overlay.
    fn set_visibility(&self, open: bool, minimized: bool);
    fn scroll_to_latest(&self);
    fn focus_input(&self);
    /// Lock or restore background page scrolling.
    fn lock_page_scroll(&self, locked: bool);
}

/// A bot reply waiting for its delay to elapse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingReply {
    pub seq: u64,
    pub text: &'static str,
}

/// Owns the chat session and drives the surface.
#[derive(Clone, Debug)]
pub struct ChatController<S> {
    session: ChatSession,
    pending: Vec<PendingReply>,
    surface: S,
}

impl<S: ChatSurface> ChatController<S> {
    pub fn new(surface: S) -> Self {
        Self { session: ChatSession::new(), pending: Vec::new(), surface }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Replies scheduled but not yet resolved.
    pub fn pending(&self) -> &[PendingReply] {
        &self.pending
    }

    pub fn toggle(&mut self) {
        if self.session.is_open {
            self.close();
            return;
        }
        self.session.is_open = true;
        self.surface.set_visibility(true, self.session.is_minimized);
        self.surface.focus_input();
        self.surface.scroll_to_latest();
        self.surface.lock_page_scroll(true);
    }

    pub fn close(&mut self) {
        self.session.is_open = false;
        self.session.is_minimized = false;
        self.surface.set_visibility(false, false);
        self.surface.lock_page_scroll(false);
    }

    pub fn minimize(&mut self) {
        self.session.is_minimized = !self.session.is_minimized;
        self.surface.set_visibility(self.session.is_open, self.session.is_minimized);
        if !self.session.is_minimized {
            self.surface.focus_input();
            self.surface.scroll_to_latest();
        }
    }

    /// Accept user text. Blank input is ignored and returns `None`.
    pub fn submit(&mut self, text: &str) -> Option<PendingReply> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let turn = self.session.push(ChatTurn::user(text));
        self.surface.show_turn(turn);
        self.surface.scroll_to_latest();

        let reply = PendingReply { seq: self.session.next_reply_seq(), text: rules::classify(text) };
        self.pending.push(reply.clone());
        log::debug!("chat reply {} scheduled", reply.seq);
        Some(reply)
    }

    /// Quick-suggestion entry point.
    pub fn ask(&mut self, question: &str) -> Option<PendingReply> {
        self.submit(question)
    }

    /// Deliver a pending reply. Returns `false` if it was cancelled or already delivered.
    pub fn resolve(&mut self, reply: &PendingReply) -> bool {
        let Some(idx) = self.pending.iter().position(|p| p.seq == reply.seq) else {
            log::debug!("chat reply {} dropped", reply.seq);
            return false;
        };
        let reply = self.pending.remove(idx);
        let turn = self.session.push(ChatTurn::bot(reply.text));
        self.surface.show_turn(turn);
        self.surface.scroll_to_latest();
        true
    }

    pub fn cancel_pending(&mut self) {
        if !self.pending.is_empty() {
            log::debug!("cancelling {} pending chat replies", self.pending.len());
        }
        self.pending.clear();
    }
}
