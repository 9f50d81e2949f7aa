//! Dialogue history value objects.
//!
//! History arrives from the browser and is forwarded to the completion
//! service as-is, so a turn keeps whatever role, content and extra fields
//! the client sent. Only the engine's own system and user turns are built
//! from known roles.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Who spoke a turn in the narration dialogue.
///
/// Unknown role names are kept verbatim in [`ConversationRole::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConversationRole {
    System,
    User,
    Assistant,
    Other(String),
}

impl ConversationRole {
    pub fn as_str(&self) -> &str {
        match self {
            ConversationRole::System => "system",
            ConversationRole::User => "user",
            ConversationRole::Assistant => "assistant",
            ConversationRole::Other(name) => name,
        }
    }
}

impl From<String> for ConversationRole {
    fn from(name: String) -> Self {
        match name.as_str() {
            "system" => ConversationRole::System,
            "user" => ConversationRole::User,
            "assistant" => ConversationRole::Assistant,
            _ => ConversationRole::Other(name),
        }
    }
}

impl From<ConversationRole> for String {
    fn from(role: ConversationRole) -> Self {
        match role {
            ConversationRole::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ConversationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the chronological dialogue history.
///
/// Absent `role` or `content` stays absent on the way out; unrecognised
/// fields ride along in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ConversationRole>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub content: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConversationTurn {
    pub fn new(role: ConversationRole, content: impl Into<String>) -> Self {
        Self {
            role: Some(role),
            content: Value::String(content.into()),
            extra: Map::new(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ConversationRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ConversationRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ConversationRole::Assistant, content)
    }

    /// Content when it is plain text.
    pub fn text(&self) -> Option<&str> {
        self.content.as_str()
    }
}
