//! Story sharing and browsing.

use std::sync::Arc;

use storyloom_domain::{NewStory, Story, StoryId};

use super::StoryboardError;
use crate::infrastructure::ports::StoryRepo;

/// Stories returned when the client does not ask for a count.
pub const DEFAULT_STORY_LIMIT: u32 = 50;

/// Upper bound on stories per listing.
pub const MAX_STORY_LIMIT: u32 = 100;

/// Story operations.
pub struct StoryOps {
    repo: Arc<dyn StoryRepo>,
}

impl StoryOps {
    pub fn new(repo: Arc<dyn StoryRepo>) -> Self {
        Self { repo }
    }

    /// Newest stories first. `limit` is clamped to `1..=100`, default 50.
    pub async fn list(&self, limit: Option<u32>) -> Result<Vec<Story>, StoryboardError> {
        let limit = limit
            .unwrap_or(DEFAULT_STORY_LIMIT)
            .clamp(1, MAX_STORY_LIMIT);
        let stories = self.repo.list(limit).await?;
        Ok(stories.into_iter().map(Story::sanitized).collect())
    }

    pub async fn get(&self, id: StoryId) -> Result<Story, StoryboardError> {
        self.repo
            .get(id)
            .await?
            .map(Story::sanitized)
            .ok_or(StoryboardError::StoryNotFound)
    }

    /// Validate, sanitize and store a story.
    pub async fn share(
        &self,
        title: Option<&str>,
        content: Option<&str>,
        author: Option<&str>,
        handle: Option<&str>,
    ) -> Result<Story, StoryboardError> {
        let story = NewStory::new(title, content, author, handle)?;
        let stored = self.repo.insert(&story).await?;
        tracing::info!(story_id = %stored.id, "Story shared");
        Ok(stored.sanitized())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockStoryRepo, RepoError};
    use chrono::Utc;
    use mockall::predicate::eq;

    pub(crate) fn story(title: &str) -> Story {
        Story {
            id: StoryId::new(),
            title: title.to_string(),
            content: "Once upon a time.".to_string(),
            author: "Ada".to_string(),
            handle: None,
            likes: 0,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn list_clamps_limit() {
        let mut repo = MockStoryRepo::new();
        repo.expect_list().with(eq(50)).times(1).returning(|_| Ok(vec![]));
        repo.expect_list().with(eq(100)).times(1).returning(|_| Ok(vec![]));
        repo.expect_list().with(eq(1)).times(1).returning(|_| Ok(vec![]));

        let ops = StoryOps::new(Arc::new(repo));
        ops.list(None).await.unwrap();
        ops.list(Some(500)).await.unwrap();
        ops.list(Some(0)).await.unwrap();
    }

    #[tokio::test]
    async fn list_sanitizes_rows() {
        let mut repo = MockStoryRepo::new();
        repo.expect_list()
            .returning(|_| Ok(vec![story("Shit Happens")]));

        let stories = StoryOps::new(Arc::new(repo)).list(None).await.unwrap();
        assert_eq!(stories[0].title, "Sh*t Happens");
    }

    #[tokio::test]
    async fn get_missing_story_is_not_found() {
        let mut repo = MockStoryRepo::new();
        repo.expect_get().returning(|_| Ok(None));

        let err = StoryOps::new(Arc::new(repo))
            .get(StoryId::new())
            .await
            .unwrap_err();
        assert!(matches!(err, StoryboardError::StoryNotFound));
    }

    #[tokio::test]
    async fn share_stores_sanitized_story() {
        let mut repo = MockStoryRepo::new();
        repo.expect_insert()
            .withf(|s| s.title() == "F*ck Dragons" && s.author() == "Anonymous")
            .times(1)
            .returning(|s| Ok(story(s.title())));

        let stored = StoryOps::new(Arc::new(repo))
            .share(Some("Fuck Dragons"), Some("They burn."), None, None)
            .await
            .unwrap();
        assert_eq!(stored.title, "F*ck Dragons");
    }

    #[tokio::test]
    async fn share_rejects_missing_title_without_touching_store() {
        let repo = MockStoryRepo::new();
        let err = StoryOps::new(Arc::new(repo))
            .share(None, Some("body"), None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, StoryboardError::Validation(ref m) if m == "title is required"));
    }

    #[tokio::test]
    async fn store_errors_propagate() {
        let mut repo = MockStoryRepo::new();
        repo.expect_list().returning(|_| Err(RepoError::NotConfigured));

        let err = StoryOps::new(Arc::new(repo)).list(None).await.unwrap_err();
        assert!(matches!(err, StoryboardError::Repo(RepoError::NotConfigured)));
    }
}
