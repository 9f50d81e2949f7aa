//! Shared story entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::StoryId;
use crate::sanitizer::{sanitize, sanitize_opt};
use crate::value_objects::Nickname;

/// Maximum length for story titles
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for story bodies
pub const MAX_CONTENT_LENGTH: usize = 20_000;

/// Maximum length for a social handle
pub const MAX_HANDLE_LENGTH: usize = 64;

/// A story a player published to the storyboard.
///
/// Field names match the `stories` table columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub likes: u32,
    pub created_at: DateTime<Utc>,
}

impl Story {
    /// Re-apply the sanitizer to every player-visible field.
    ///
    /// Rows written before a term was banned are cleaned on the way out.
    pub fn sanitized(self) -> Self {
        Self {
            title: sanitize(&self.title),
            content: sanitize(&self.content),
            author: sanitize(&self.author),
            handle: sanitize_opt(self.handle.as_deref()),
            ..self
        }
    }
}

/// A validated, sanitized story ready to insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewStory {
    title: String,
    content: String,
    author: Nickname,
    #[serde(skip_serializing_if = "Option::is_none")]
    handle: Option<String>,
}

impl NewStory {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - title or content is missing or blank
    /// - any field exceeds its length limit
    pub fn new(
        title: Option<&str>,
        content: Option<&str>,
        author: Option<&str>,
        handle: Option<&str>,
    ) -> Result<Self, DomainError> {
        let title = required(title, "title", MAX_TITLE_LENGTH)?;
        let content = required(content, "content", MAX_CONTENT_LENGTH)?;
        let author = Nickname::author_or_anonymous(author)?;

        let handle = match handle.map(str::trim).filter(|h| !h.is_empty()) {
            Some(h) if h.chars().count() > MAX_HANDLE_LENGTH => {
                return Err(DomainError::validation(format!(
                    "handle cannot exceed {} characters",
                    MAX_HANDLE_LENGTH
                )));
            }
            Some(h) => Some(sanitize(h)),
            None => None,
        };

        Ok(Self {
            title: sanitize(&title),
            content: sanitize(&content),
            author,
            handle,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    pub fn handle(&self) -> Option<&str> {
        self.handle.as_deref()
    }
}

/// Trimmed, non-blank, length-checked text.
pub(crate) fn required(value: Option<&str>, field: &str, max: usize) -> Result<String, DomainError> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{} is required", field)));
    }
    if trimmed.chars().count() > max {
        return Err(DomainError::validation(format!(
            "{} cannot exceed {} characters",
            field, max
        )));
    }
    Ok(trimmed.to_string())
}
