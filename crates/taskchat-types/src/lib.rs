//! Core types for taskchat
//!
//! Shared by the chat core, the browser frontend and the native client.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod wire;

pub use wire::{QueryResponse, UserQuery};

// ============================================================================
// Constants
// ============================================================================

/// Endpoint the chat panel posts to when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/user_query";

/// Placeholder shown in an empty input control
pub const DEFAULT_PLACEHOLDER: &str = "Type something...";

// ============================================================================
// Message Types
// ============================================================================

/// Message identifier, milliseconds since the Unix epoch at creation
/// (bumped when two messages land on the same millisecond)
pub type MessageId = i64;

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single chat message. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
}

impl Message {
    pub fn user(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender: Sender::User,
        }
    }

    pub fn bot(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender: Sender::Bot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");
        assert_eq!(Sender::Bot.to_string(), "bot");
    }

    #[test]
    fn message_constructors_set_sender() {
        let msg = Message::user(1, "hello");
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.text, "hello");

        let reply = Message::bot(2, "hi");
        assert_eq!(reply.sender, Sender::Bot);
    }
}
