//! Chat widget session state.
//!
//! One `ChatSession` exists per page load. History is append-only and is
//! dropped on reload.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Who authored a conversation turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Tag used in CSS class names (`user-message`, `bot-message`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// A single rendered chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatTurn {
    pub sender: Sender,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { sender: Sender::User, text: text.into() }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { sender: Sender::Bot, text: text.into() }
    }
}

/// Widget visibility flags plus conversation history.
#[derive(Clone, Debug, Default)]
pub struct ChatSession {
    pub is_open: bool,
    pub is_minimized: bool,
    history: Vec<ChatTurn>,
    next_reply_seq: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Conversation so far, oldest first.
    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    pub fn count(&self, sender: Sender) -> usize {
        self.history.iter().filter(|t| t.sender == sender).count()
    }

    /// Append a turn and return a reference to it.
    pub fn push(&mut self, turn: ChatTurn) -> &ChatTurn {
        self.history.push(turn);
        &self.history[self.history.len() - 1]
    }

    /// Allocate the next reply sequence number.
    pub fn next_reply_seq(&mut self) -> u64 {
        self.next_reply_seq += 1;
        self.next_reply_seq
    }
}
