//! Assistant conversation state for the chat page.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::error::ApiError;

pub const GREETING: &str = "Hello! I'm your AI stock portfolio assistant. I can help you analyze your stocks, \
explain market trends, and answer questions about your investments. How can I help you today?";

pub const FALLBACK_REPLY: &str = "I apologize, but I'm having trouble connecting to the AI service right now. \
Please try again in a moment, or feel free to ask me about your portfolio, stock analysis, or investment strategies.";

/// Stable id of the opening message so server and browser renders agree.
pub const GREETING_ID: &str = "greeting";

pub const FAILURE_BANNER: &str = "Failed to get AI response. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub content: String,
    pub sent_at_ms: u64,
}

impl ChatMessage {
    fn new(sender: Sender, content: impl Into<String>, sent_at_ms: u64) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), sender, content: content.into(), sent_at_ms }
    }
}

/// Message history, in-flight flag, and the current error banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub sending: bool,
    pub error: Option<String>,
}

impl ChatState {
    /// Fresh conversation opening with the assistant's greeting.
    pub fn new(now_ms: u64) -> Self {
        let greeting = ChatMessage {
            id: GREETING_ID.to_owned(),
            sender: Sender::Assistant,
            content: GREETING.to_owned(),
            sent_at_ms: now_ms,
        };
        Self { messages: vec![greeting], sending: false, error: None }
    }

    /// Set the greeting's timestamp once the page is live in the browser.
    pub fn stamp_greeting(&mut self, now_ms: u64) {
        if let Some(greeting) = self.messages.iter_mut().find(|m| m.id == GREETING_ID) {
            greeting.sent_at_ms = now_ms;
        }
    }

    /// Record the user's message and return the prompt to send, or `None`
    /// when the input is blank or a reply is still pending.
    pub fn begin_send(&mut self, input: &str, now_ms: u64) -> Option<String> {
        let prompt = input.trim();
        if prompt.is_empty() || self.sending {
            return None;
        }
        self.messages.push(ChatMessage::new(Sender::User, prompt, now_ms));
        self.sending = true;
        self.error = None;
        Some(prompt.to_owned())
    }

    /// Append the assistant's reply, or the fallback plus an error banner.
    pub fn receive(&mut self, reply: Result<String, ApiError>, now_ms: u64) {
        self.sending = false;
        let content = match reply {
            Ok(text) => text,
            Err(err) => {
                log::warn!("chat request failed: {err}");
                self.error = Some(FAILURE_BANNER.to_owned());
                FALLBACK_REPLY.to_owned()
            }
        };
        self.messages.push(ChatMessage::new(Sender::Assistant, content, now_ms));
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
