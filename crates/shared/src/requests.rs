//! Request bodies and query strings accepted by the Engine's HTTP API.
//!
//! Every field is optional on the wire. Missing required values are reported
//! by the Engine as validation errors rather than as JSON rejections.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use storyloom_domain::ConversationTurn;

/// Body of `POST /api/continue`.
///
/// History turns are taken as sent. The scalar knobs accept any JSON value
/// and are coerced to text by the Engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinueRequest {
    #[serde(default)]
    pub history: Option<Vec<ConversationTurn>>,
    #[serde(default)]
    pub user_turn: Option<Value>,
    #[serde(default)]
    pub mood: Option<Value>,
    #[serde(default)]
    pub drama: Option<Value>,
}

/// Body of `POST /api/stories`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareStoryRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub handle: Option<String>,
}

/// Body of `POST /api/stories/{id}/comments`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCommentRequest {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

/// Body of `POST /api/stories/{id}/like`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeStoryRequest {
    #[serde(default)]
    pub client_id: Option<String>,
}

/// Body of `PUT /api/profiles/{clientId}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub nickname: Option<String>,
}

/// Query string of `GET /api/stories`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStoriesQuery {
    #[serde(default)]
    pub limit: Option<u32>,
}
