// src/services/conversation.rs
//
// Client-side chat history. Owned by whoever drives the conversation; the
// server never stores it.

use serde::Serialize;

pub const THINKING_PLACEHOLDER: &str = "Thinking...";
pub const CONNECTION_ERROR_REPLY: &str = "Sorry, I'm having trouble connecting. Please try again later.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatEntry {
    pub role: MessageRole,
    pub content: String,
}

#[derive(Clone, Debug, Default)]
pub struct ChatLog {
    entries: Vec<ChatEntry>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user message. Blank input is ignored and returns `false`.
    pub fn push_user(&mut self, content: impl Into<String>) -> bool {
        let content = content.into();
        if content.trim().is_empty() {
            return false;
        }
        self.entries.push(ChatEntry { role: MessageRole::User, content });
        true
    }

    /// Append the bot placeholder shown while a reply is pending.
    pub fn begin_thinking(&mut self) {
        self.entries.push(ChatEntry {
            role: MessageRole::Bot,
            content: THINKING_PLACEHOLDER.to_string(),
        });
    }

    /// Replace the last entry with a bot message. Appends if the log is empty.
    pub fn replace_last(&mut self, content: impl Into<String>) {
        self.entries.pop();
        self.entries.push(ChatEntry { role: MessageRole::Bot, content: content.into() });
    }

    /// Resolve the pending placeholder with the reply, or with the connection
    /// error text if the request failed.
    pub fn settle<E>(&mut self, result: Result<String, E>) {
        match result {
            Ok(reply) => self.replace_last(reply),
            Err(_) => self.replace_last(CONNECTION_ERROR_REPLY),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.entries
            .last()
            .is_some_and(|e| e.role == MessageRole::Bot && e.content == THINKING_PLACEHOLDER)
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
