//! `profiles` resource.

use async_trait::async_trait;
use reqwest::Method;
use storyloom_domain::{ClientId, Profile, ProfileUpdate};

use super::client::{eq, single_row, PostgrestClient, MERGE_DUPLICATES};
use crate::infrastructure::ports::{ProfileRepo, RepoError};

const RESOURCE: &str = "profiles";

pub struct PostgrestProfileRepo {
    client: PostgrestClient,
}

impl PostgrestProfileRepo {
    pub fn new(client: PostgrestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileRepo for PostgrestProfileRepo {
    async fn get(&self, client_id: &ClientId) -> Result<Option<Profile>, RepoError> {
        let request = self.client.request(
            Method::GET,
            RESOURCE,
            &[
                ("select", "*".to_string()),
                ("client_id", eq(client_id)),
                ("limit", "1".to_string()),
            ],
        )?;
        let rows: Vec<Profile> = self.client.fetch(RESOURCE, request).await?;
        Ok(rows.into_iter().next())
    }

    async fn upsert(&self, update: &ProfileUpdate) -> Result<Profile, RepoError> {
        let request = self
            .client
            .request(Method::POST, RESOURCE, &[("on_conflict", "client_id".to_string())])?
            .header("Prefer", MERGE_DUPLICATES)
            .json(update);
        let rows: Vec<Profile> = self.client.fetch(RESOURCE, request).await?;
        single_row(RESOURCE, rows)
    }
}
