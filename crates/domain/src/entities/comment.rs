//! Comment on a shared story

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::story::required;
use crate::error::DomainError;
use crate::ids::{CommentId, StoryId};
use crate::sanitizer::sanitize;
use crate::value_objects::Nickname;

/// Maximum length for a comment body
pub const MAX_COMMENT_LENGTH: usize = 2_000;

/// A row of the `story_comments` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryComment {
    pub id: CommentId,
    pub story_id: StoryId,
    pub body: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl StoryComment {
    pub fn sanitized(self) -> Self {
        Self {
            body: sanitize(&self.body),
            author: sanitize(&self.author),
            ..self
        }
    }
}

/// A validated, sanitized comment ready to insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewComment {
    story_id: StoryId,
    body: String,
    author: Nickname,
}

impl NewComment {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the body is blank or longer than 2000 characters.
    pub fn new(story_id: StoryId, body: Option<&str>, author: Option<&str>) -> Result<Self, DomainError> {
        let body = required(body, "body", MAX_COMMENT_LENGTH)?;
        Ok(Self {
            story_id,
            body: sanitize(&body),
            author: Nickname::author_or_anonymous(author)?,
        })
    }

    pub fn story_id(&self) -> StoryId {
        self.story_id
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn author(&self) -> &str {
        self.author.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_is_required_and_sanitized() {
        let story_id = StoryId::new();
        assert!(NewComment::new(story_id, None, None).is_err());

        let comment = NewComment::new(story_id, Some(" what a dick move "), Some("Mo")).unwrap();
        assert_eq!(comment.body(), "what a d*ck move");
        assert_eq!(comment.author(), "Mo");
        assert_eq!(comment.story_id(), story_id);
    }

    #[test]
    fn insert_payload_carries_story_id() {
        let story_id = StoryId::new();
        let comment = NewComment::new(story_id, Some("nice"), None).unwrap();
        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["story_id"], story_id.to_string());
        assert_eq!(json["author"], "Anonymous");
    }
}
