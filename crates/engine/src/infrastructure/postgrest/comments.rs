//! `story_comments` resource.

use async_trait::async_trait;
use reqwest::Method;
use storyloom_domain::{NewComment, StoryComment, StoryId};

use super::client::{eq, single_row, PostgrestClient, RETURN_REPRESENTATION};
use crate::infrastructure::ports::{CommentRepo, RepoError};

const RESOURCE: &str = "story_comments";

pub struct PostgrestCommentRepo {
    client: PostgrestClient,
}

impl PostgrestCommentRepo {
    pub fn new(client: PostgrestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CommentRepo for PostgrestCommentRepo {
    async fn list_for_story(&self, story_id: StoryId) -> Result<Vec<StoryComment>, RepoError> {
        let request = self.client.request(
            Method::GET,
            RESOURCE,
            &[
                ("select", "*".to_string()),
                ("story_id", eq(story_id)),
                ("order", "created_at.asc".to_string()),
            ],
        )?;
        self.client.fetch(RESOURCE, request).await
    }

    async fn insert(&self, comment: &NewComment) -> Result<StoryComment, RepoError> {
        let request = self
            .client
            .request(Method::POST, RESOURCE, &[])?
            .header("Prefer", RETURN_REPRESENTATION)
            .json(comment);
        let rows: Vec<StoryComment> = self.client.fetch(RESOURCE, request).await?;
        single_row(RESOURCE, rows)
    }
}
