//! Core types and structures for sodachat
//!
//! This crate provides the conversation model and the wire types shared by the
//! API client, the controller and both front-ends.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Constants
// ============================================================================

/// Title given to a conversation before its first message
pub const PLACEHOLDER_TITLE: &str = "New Conversation";

/// Titles derived from a first message keep at most this many characters
pub const TITLE_MAX_CHARS: usize = 30;

/// Appended to a title that was cut at `TITLE_MAX_CHARS`
pub const TITLE_ELLIPSIS: &str = "...";

/// Assistant message shown when the backend could not be reached
pub const ASSISTANT_APOLOGY: &str = "Sorry, I encountered an error. Please try again.";

pub type ConversationId = String;
pub type MessageId = String;

/// Generate a fresh identifier for a conversation or message
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Build a conversation title from the first message sent in it.
///
/// Content longer than `TITLE_MAX_CHARS` characters is cut to exactly that many
/// characters followed by `TITLE_ELLIPSIS`; shorter content is used verbatim.
pub fn title_from_first_message(content: &str) -> String {
    if content.chars().count() > TITLE_MAX_CHARS {
        let head: String = content.chars().take(TITLE_MAX_CHARS).collect();
        format!("{}{}", head, TITLE_ELLIPSIS)
    } else {
        content.to_string()
    }
}

// ============================================================================
// Conversation Types
// ============================================================================

/// A single utterance in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub is_user: bool,
}

impl Message {
    /// Message authored by the person at the keyboard
    pub fn from_user(content: impl Into<String>) -> Self {
        Self::new(content, true)
    }

    /// Message authored by the soda machine assistant
    pub fn from_assistant(content: impl Into<String>) -> Self {
        Self::new(content, false)
    }

    fn new(content: impl Into<String>, is_user: bool) -> Self {
        Self {
            id: new_id(),
            content: content.into(),
            timestamp: Utc::now(),
            is_user,
        }
    }

    pub fn author_label(&self) -> &'static str {
        if self.is_user {
            "you"
        } else {
            "assistant"
        }
    }
}

/// A named, timestamped thread of messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: ConversationId,
    pub title: String,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Empty conversation carrying the placeholder title
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            title: PLACEHOLDER_TITLE.to_string(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`; called on every mutation
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// Body of `POST /ask/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub message: String,
}

/// Successful response of `POST /ask/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub response: String,
}
