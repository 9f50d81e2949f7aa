//! Player profile keyed by browser client id

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sanitizer::sanitize;
use crate::value_objects::{ClientId, Nickname};

/// A row of the `profiles` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub client_id: ClientId,
    pub nickname: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    pub fn sanitized(self) -> Self {
        Self {
            nickname: sanitize(&self.nickname),
            ..self
        }
    }
}

/// Upsert payload for a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub client_id: ClientId,
    pub nickname: Nickname,
}
