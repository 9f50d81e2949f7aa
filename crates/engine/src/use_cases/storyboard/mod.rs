//! Storyboard use cases.
//!
//! Sharing stories, commenting on them and liking them. Everything players
//! type is sanitized before it is stored and again when it is read back.

use std::sync::Arc;

mod comments;
mod likes;
mod stories;

pub use comments::CommentOps;
pub use likes::LikeStory;
pub use stories::{StoryOps, DEFAULT_STORY_LIMIT, MAX_STORY_LIMIT};

use storyloom_domain::DomainError;

use crate::infrastructure::ports::RepoError;

/// Errors from storyboard operations.
#[derive(Debug, thiserror::Error)]
pub enum StoryboardError {
    #[error("{0}")]
    Validation(String),
    #[error("Story not found")]
    StoryNotFound,
    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl From<DomainError> for StoryboardError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) | DomainError::InvalidId(msg) => Self::Validation(msg),
        }
    }
}

/// Container for storyboard use cases.
pub struct StoryboardUseCases {
    pub stories: Arc<StoryOps>,
    pub comments: Arc<CommentOps>,
    pub like: Arc<LikeStory>,
}

impl StoryboardUseCases {
    pub fn new(stories: Arc<StoryOps>, comments: Arc<CommentOps>, like: Arc<LikeStory>) -> Self {
        Self {
            stories,
            comments,
            like,
        }
    }
}
