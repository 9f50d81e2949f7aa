//! Story reactions (likes)

use serde::{Deserialize, Serialize};

use crate::ids::StoryId;
use crate::value_objects::ClientId;

/// One like. The store keeps at most one row per (story, client).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryReaction {
    pub story_id: StoryId,
    pub client_id: ClientId,
}

impl StoryReaction {
    pub fn like(story_id: StoryId, client_id: ClientId) -> Self {
        Self {
            story_id,
            client_id,
        }
    }
}
