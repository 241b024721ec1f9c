//! Chat transcript state.
//!
//! A send is split in two so the network call can happen between them:
//! [`ChatState::begin_send`] records the user message and returns the request,
//! [`ChatState::finish_send`] appends the bot reply (or the error line) and
//! releases the input.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use protocol::chat::CHAT_ERROR_TEXT;
use protocol::{ChatRequest, ChatResponse, Standard};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

/// Transcript, input box and selector state for the chat panel.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub standard: Standard,
    pub show_welcome: bool,
    pub loading: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            standard: Standard::default(),
            show_welcome: true,
            loading: false,
        }
    }
}

impl ChatState {
    /// Record the pending user message and build the request for it.
    ///
    /// Returns `None` when the input is blank or a reply is still pending.
    pub fn begin_send(&mut self) -> Option<ChatRequest> {
        if self.loading || self.input.trim().is_empty() {
            return None;
        }
        self.show_welcome = false;
        self.loading = true;
        self.messages.push(ChatMessage { sender: Sender::User, text: self.input.clone() });
        Some(ChatRequest { message: self.input.clone(), selected_standard: self.standard })
    }

    /// Append the reply for the in-flight request.
    pub fn finish_send(&mut self, result: Result<ChatResponse, String>) {
        let text = match &result {
            Ok(response) => response.reply_text().to_owned(),
            Err(_) => CHAT_ERROR_TEXT.to_owned(),
        };
        self.messages.push(ChatMessage { sender: Sender::Bot, text });
        self.loading = false;
        self.input.clear();
    }

    /// Clear the transcript and bring the welcome panel back.
    pub fn new_chat(&mut self) {
        self.messages.clear();
        self.input.clear();
        self.show_welcome = true;
    }

    pub fn shows_welcome(&self) -> bool {
        self.show_welcome && self.messages.is_empty()
    }
}
