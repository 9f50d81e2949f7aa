//! `stories` resource.

use async_trait::async_trait;
use reqwest::Method;
use storyloom_domain::{NewStory, Story, StoryId};

use super::client::{eq, single_row, PostgrestClient, RETURN_REPRESENTATION};
use crate::infrastructure::ports::{RepoError, StoryRepo};

const RESOURCE: &str = "stories";

pub struct PostgrestStoryRepo {
    client: PostgrestClient,
}

impl PostgrestStoryRepo {
    pub fn new(client: PostgrestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StoryRepo for PostgrestStoryRepo {
    async fn list(&self, limit: u32) -> Result<Vec<Story>, RepoError> {
        let request = self.client.request(
            Method::GET,
            RESOURCE,
            &[
                ("select", "*".to_string()),
                ("order", "created_at.desc".to_string()),
                ("limit", limit.to_string()),
            ],
        )?;
        self.client.fetch(RESOURCE, request).await
    }

    async fn get(&self, id: StoryId) -> Result<Option<Story>, RepoError> {
        let request = self.client.request(
            Method::GET,
            RESOURCE,
            &[("select", "*".to_string()), ("id", eq(id)), ("limit", "1".to_string())],
        )?;
        let rows: Vec<Story> = self.client.fetch(RESOURCE, request).await?;
        Ok(rows.into_iter().next())
    }

    async fn insert(&self, story: &NewStory) -> Result<Story, RepoError> {
        let request = self
            .client
            .request(Method::POST, RESOURCE, &[])?
            .header("Prefer", RETURN_REPRESENTATION)
            .json(story);
        let rows: Vec<Story> = self.client.fetch(RESOURCE, request).await?;
        single_row(RESOURCE, rows)
    }

    async fn set_likes(&self, id: StoryId, likes: u32) -> Result<(), RepoError> {
        let request = self
            .client
            .request(Method::PATCH, RESOURCE, &[("id", eq(id))])?
            .json(&serde_json::json!({ "likes": likes }));
        self.client.send(RESOURCE, request).await?;
        Ok(())
    }
}
