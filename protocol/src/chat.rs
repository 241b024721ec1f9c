//! `/chat` request and response payloads.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

use crate::standard::Standard;

pub const CHAT_PATH: &str = "/chat";

/// Transcript line appended when a question could not be answered at all.
pub const CHAT_ERROR_TEXT: &str = "⚠️ Error fetching response.";

/// Transcript line used when the backend replied with neither field set.
pub const NO_ANSWER_TEXT: &str = "No answer available.";

/// Body of `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub selected_standard: Standard,
}

/// Body returned by `POST /chat`.
///
/// The backend sets `clarification` instead of `answer` when it needs the user
/// to narrow the question down.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub clarification: Option<String>,
}

impl ChatResponse {
    /// Text to show for this reply: the first non-empty of `answer` and
    /// `clarification`, else [`NO_ANSWER_TEXT`].
    #[must_use]
    pub fn reply_text(&self) -> &str {
        [self.answer.as_deref(), self.clarification.as_deref()]
            .into_iter()
            .flatten()
            .find(|text| !text.is_empty())
            .unwrap_or(NO_ANSWER_TEXT)
    }
}
