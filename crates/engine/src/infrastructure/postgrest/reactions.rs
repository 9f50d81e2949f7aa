//! `story_reactions` resource.
//!
//! Likes are deduplicated by the table's unique (story_id, client_id)
//! constraint; an upsert with `merge-duplicates` makes a repeat like a no-op.

use async_trait::async_trait;
use reqwest::Method;
use serde::de::IgnoredAny;
use storyloom_domain::{StoryId, StoryReaction};

use super::client::{eq, PostgrestClient, MERGE_DUPLICATES};
use crate::infrastructure::ports::{ReactionRepo, RepoError};

const RESOURCE: &str = "story_reactions";

pub struct PostgrestReactionRepo {
    client: PostgrestClient,
}

impl PostgrestReactionRepo {
    pub fn new(client: PostgrestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReactionRepo for PostgrestReactionRepo {
    async fn upsert(&self, reaction: &StoryReaction) -> Result<(), RepoError> {
        let request = self
            .client
            .request(
                Method::POST,
                RESOURCE,
                &[("on_conflict", "story_id,client_id".to_string())],
            )?
            .header("Prefer", MERGE_DUPLICATES)
            .json(reaction);
        self.client.send(RESOURCE, request).await?;
        Ok(())
    }

    async fn count_for_story(&self, story_id: StoryId) -> Result<u32, RepoError> {
        let request = self.client.request(
            Method::GET,
            RESOURCE,
            &[("select", "client_id".to_string()), ("story_id", eq(story_id))],
        )?;
        let rows: Vec<IgnoredAny> = self.client.fetch(RESOURCE, request).await?;
        u32::try_from(rows.len()).map_err(RepoError::serialization)
    }
}
