//! Comments on shared stories.

use std::sync::Arc;

use storyloom_domain::{NewComment, StoryComment, StoryId};

use super::StoryboardError;
use crate::infrastructure::ports::{CommentRepo, StoryRepo};

/// Comment operations.
pub struct CommentOps {
    comments: Arc<dyn CommentRepo>,
    stories: Arc<dyn StoryRepo>,
}

impl CommentOps {
    pub fn new(comments: Arc<dyn CommentRepo>, stories: Arc<dyn StoryRepo>) -> Self {
        Self { comments, stories }
    }

    /// Oldest first.
    pub async fn list(&self, story_id: StoryId) -> Result<Vec<StoryComment>, StoryboardError> {
        let comments = self.comments.list_for_story(story_id).await?;
        Ok(comments.into_iter().map(StoryComment::sanitized).collect())
    }

    /// Validate, sanitize and store a comment on an existing story.
    pub async fn add(
        &self,
        story_id: StoryId,
        body: Option<&str>,
        author: Option<&str>,
    ) -> Result<StoryComment, StoryboardError> {
        let comment = NewComment::new(story_id, body, author)?;

        if self.stories.get(story_id).await?.is_none() {
            return Err(StoryboardError::StoryNotFound);
        }

        let stored = self.comments.insert(&comment).await?;
        tracing::debug!(story_id = %story_id, comment_id = %stored.id, "Comment added");
        Ok(stored.sanitized())
    }
}
