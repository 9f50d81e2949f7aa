//! Response bodies returned by the Engine's HTTP API.

use serde::{Deserialize, Serialize};

/// Text a client renders when narration failed outright.
pub const SERVER_FALLBACK_TEXT: &str = "(Server fallback)";

/// Successful narration turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrationResponse {
    pub text: String,
}

/// Error envelope used by every endpoint.
///
/// Narration failures also carry `text`, so a client always has something to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            text: None,
        }
    }

    /// Error envelope for a failed narration turn.
    pub fn narration(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            text: Some(SERVER_FALLBACK_TEXT.to_string()),
        }
    }
}

/// Like count after a like was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeResponse {
    pub likes: u32,
}
