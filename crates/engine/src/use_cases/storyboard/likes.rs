//! Like a story.
//!
//! The reaction is upserted against the store's (story_id, client_id)
//! uniqueness constraint, then the story's `likes` column is rewritten from
//! a fresh count. Repeat likes from one client are idempotent.

use std::sync::Arc;

use storyloom_domain::{ClientId, StoryId, StoryReaction};

use super::StoryboardError;
use crate::infrastructure::ports::{ReactionRepo, StoryRepo};

pub struct LikeStory {
    reactions: Arc<dyn ReactionRepo>,
    stories: Arc<dyn StoryRepo>,
}

impl LikeStory {
    pub fn new(reactions: Arc<dyn ReactionRepo>, stories: Arc<dyn StoryRepo>) -> Self {
        Self { reactions, stories }
    }

    /// Record a like and return the story's new like count.
    pub async fn execute(
        &self,
        story_id: StoryId,
        client_id: Option<&str>,
    ) -> Result<u32, StoryboardError> {
        let client_id = ClientId::new(client_id.unwrap_or_default())?;

        if self.stories.get(story_id).await?.is_none() {
            return Err(StoryboardError::StoryNotFound);
        }

        self.reactions
            .upsert(&StoryReaction::like(story_id, client_id))
            .await?;
        let likes = self.reactions.count_for_story(story_id).await?;
        self.stories.set_likes(story_id, likes).await?;

        tracing::debug!(story_id = %story_id, likes, "Story liked");
        Ok(likes)
    }
}
