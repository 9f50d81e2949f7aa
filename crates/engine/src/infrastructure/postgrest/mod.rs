//! PostgREST data store implementations.

use std::sync::Arc;

use crate::infrastructure::config::DataStoreConfig;

mod client;

mod comments;
mod profiles;
mod reactions;
mod stories;

pub use client::PostgrestClient;
pub use comments::PostgrestCommentRepo;
pub use profiles::PostgrestProfileRepo;
pub use reactions::PostgrestReactionRepo;
pub use stories::PostgrestStoryRepo;

/// Create all PostgREST repositories over one shared client.
pub struct PostgrestRepositories {
    pub story: Arc<PostgrestStoryRepo>,
    pub comment: Arc<PostgrestCommentRepo>,
    pub reaction: Arc<PostgrestReactionRepo>,
    pub profile: Arc<PostgrestProfileRepo>,
}

impl PostgrestRepositories {
    pub fn new(config: Option<DataStoreConfig>) -> Self {
        let client = PostgrestClient::new(config);
        Self {
            story: Arc::new(PostgrestStoryRepo::new(client.clone())),
            comment: Arc::new(PostgrestCommentRepo::new(client.clone())),
            reaction: Arc::new(PostgrestReactionRepo::new(client.clone())),
            profile: Arc::new(PostgrestProfileRepo::new(client)),
        }
    }
}
