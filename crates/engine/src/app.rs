//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    config::AppConfig,
    openai::OpenAiClient,
    ports::{CommentRepo, CompletionPort, ProfileRepo, ReactionRepo, StoryRepo},
    postgrest::PostgrestRepositories,
};
use crate::use_cases;

/// Main application state.
///
/// Holds all use cases. Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Storyboard persistence ports.
pub struct Repositories {
    pub story: Arc<dyn StoryRepo>,
    pub comment: Arc<dyn CommentRepo>,
    pub reaction: Arc<dyn ReactionRepo>,
    pub profile: Arc<dyn ProfileRepo>,
}

impl From<PostgrestRepositories> for Repositories {
    fn from(repos: PostgrestRepositories) -> Self {
        Self {
            story: repos.story,
            comment: repos.comment,
            reaction: repos.reaction,
            profile: repos.profile,
        }
    }
}

/// Container for all use cases.
pub struct UseCases {
    pub narration: use_cases::NarrationUseCases,
    pub storyboard: use_cases::StoryboardUseCases,
    pub profile: use_cases::ProfileUseCases,
}

impl App {
    pub fn new(completion: Arc<dyn CompletionPort>, repos: Repositories) -> Self {
        let narration = use_cases::NarrationUseCases::new(Arc::new(
            use_cases::narration::ContinueNarration::new(completion),
        ));

        let storyboard = use_cases::StoryboardUseCases::new(
            Arc::new(use_cases::storyboard::StoryOps::new(repos.story.clone())),
            Arc::new(use_cases::storyboard::CommentOps::new(
                repos.comment.clone(),
                repos.story.clone(),
            )),
            Arc::new(use_cases::storyboard::LikeStory::new(
                repos.reaction.clone(),
                repos.story.clone(),
            )),
        );

        let profile = use_cases::ProfileUseCases::new(Arc::new(
            use_cases::profile::ProfileOps::new(repos.profile.clone()),
        ));

        Self {
            use_cases: UseCases {
                narration,
                storyboard,
                profile,
            },
        }
    }

    /// Wire the real OpenAI and PostgREST adapters from configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let completion = Arc::new(OpenAiClient::new(&config.completion));
        let repos = PostgrestRepositories::new(config.data_store.clone());
        Self::new(completion, repos.into())
    }
}
