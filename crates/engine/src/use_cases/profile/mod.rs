//! Profile use cases.
//!
//! A profile is just a nickname keyed by the browser's client id.

use std::sync::Arc;

use storyloom_domain::{ClientId, DomainError, Nickname, Profile, ProfileUpdate};

use crate::infrastructure::ports::{ProfileRepo, RepoError};

/// Errors from profile operations.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("{0}")]
    Validation(String),
    #[error("Profile not found")]
    NotFound,
    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl From<DomainError> for ProfileError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) | DomainError::InvalidId(msg) => Self::Validation(msg),
        }
    }
}

/// Profile operations.
pub struct ProfileOps {
    repo: Arc<dyn ProfileRepo>,
}

impl ProfileOps {
    pub fn new(repo: Arc<dyn ProfileRepo>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, client_id: &str) -> Result<Profile, ProfileError> {
        let client_id = ClientId::new(client_id)?;
        self.repo
            .get(&client_id)
            .await?
            .map(Profile::sanitized)
            .ok_or(ProfileError::NotFound)
    }

    /// Create or replace the nickname for `client_id`.
    pub async fn set_nickname(
        &self,
        client_id: &str,
        nickname: Option<&str>,
    ) -> Result<Profile, ProfileError> {
        let update = ProfileUpdate {
            client_id: ClientId::new(client_id)?,
            nickname: Nickname::new(nickname.unwrap_or_default())?,
        };
        let stored = self.repo.upsert(&update).await?;
        Ok(stored.sanitized())
    }
}

/// Container for profile use cases.
pub struct ProfileUseCases {
    pub ops: Arc<ProfileOps>,
}

impl ProfileUseCases {
    pub fn new(ops: Arc<ProfileOps>) -> Self {
        Self { ops }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockProfileRepo;

    #[tokio::test]
    async fn set_nickname_sanitizes_before_upsert() {
        let mut repo = MockProfileRepo::new();
        repo.expect_upsert()
            .withf(|u| u.client_id.as_str() == "c-1" && u.nickname.as_str() == "Sl*t Slayer")
            .times(1)
            .returning(|u| {
                Ok(Profile {
                    client_id: u.client_id.clone(),
                    nickname: u.nickname.to_string(),
                    updated_at: None,
                })
            });

        let profile = ProfileOps::new(Arc::new(repo))
            .set_nickname("c-1", Some("Slut Slayer"))
            .await
            .unwrap();
        assert_eq!(profile.nickname, "Sl*t Slayer");
    }

    #[tokio::test]
    async fn nickname_is_required() {
        let err = ProfileOps::new(Arc::new(MockProfileRepo::new()))
            .set_nickname("c-1", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ProfileError::Validation(ref m) if m == "nickname is required"));
    }

    #[tokio::test]
    async fn overlong_client_id_is_a_validation_error() {
        let err = ProfileOps::new(Arc::new(MockProfileRepo::new()))
            .get(&"c".repeat(129))
            .await
            .unwrap_err();
        assert!(matches!(err, ProfileError::Validation(_)));
    }

    #[tokio::test]
    async fn missing_profile_is_not_found() {
        let mut repo = MockProfileRepo::new();
        repo.expect_get().returning(|_| Ok(None));

        let err = ProfileOps::new(Arc::new(repo)).get("c-1").await.unwrap_err();
        assert!(matches!(err, ProfileError::NotFound));
    }
}
