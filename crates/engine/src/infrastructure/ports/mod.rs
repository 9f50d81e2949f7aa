//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Text completion (could swap OpenAI -> any Responses-compatible API)
//! - Storyboard persistence (could swap PostgREST -> direct Postgres)

mod error;
mod external;
mod repos;

pub use error::{CompletionError, RepoError};
pub use external::{CompletionPort, CompletionRequest};
pub use repos::{CommentRepo, ProfileRepo, ReactionRepo, StoryRepo};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::MockCompletionPort;

#[cfg(test)]
pub use repos::{MockCommentRepo, MockProfileRepo, MockReactionRepo, MockStoryRepo};
