//! Data store port traits for the storyboard.

use async_trait::async_trait;
use storyloom_domain::{
    ClientId, NewComment, NewStory, Profile, ProfileUpdate, Story, StoryComment, StoryId,
    StoryReaction,
};

use super::error::RepoError;

// =============================================================================
// Stories
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoryRepo: Send + Sync {
    /// Newest first.
    async fn list(&self, limit: u32) -> Result<Vec<Story>, RepoError>;
    async fn get(&self, id: StoryId) -> Result<Option<Story>, RepoError>;
    async fn insert(&self, story: &NewStory) -> Result<Story, RepoError>;
    async fn set_likes(&self, id: StoryId, likes: u32) -> Result<(), RepoError>;
}

// =============================================================================
// Comments
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepo: Send + Sync {
    /// Oldest first.
    async fn list_for_story(&self, story_id: StoryId) -> Result<Vec<StoryComment>, RepoError>;
    async fn insert(&self, comment: &NewComment) -> Result<StoryComment, RepoError>;
}

// =============================================================================
// Reactions
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReactionRepo: Send + Sync {
    /// Insert, or merge into the existing row for the same (story, client).
    async fn upsert(&self, reaction: &StoryReaction) -> Result<(), RepoError>;
    async fn count_for_story(&self, story_id: StoryId) -> Result<u32, RepoError>;
}

// =============================================================================
// Profiles
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepo: Send + Sync {
    async fn get(&self, client_id: &ClientId) -> Result<Option<Profile>, RepoError>;
    async fn upsert(&self, update: &ProfileUpdate) -> Result<Profile, RepoError>;
}
