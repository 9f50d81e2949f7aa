//! External service port: the text completion API.

use async_trait::async_trait;
use storyloom_domain::ConversationTurn;

use super::error::CompletionError;

/// One completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// System instruction, history, then the new user turn.
    pub messages: Vec<ConversationTurn>,
    /// Sampling temperature (0.0 - 1.0)
    pub temperature: f32,
    /// Hard cap on generated tokens
    pub max_output_tokens: u32,
}

impl CompletionRequest {
    pub fn new(messages: Vec<ConversationTurn>) -> Self {
        Self {
            messages,
            temperature: 0.7,
            max_output_tokens: storyloom_domain::MAX_NARRATION_TOKENS,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }
}

/// Text completion service.
///
/// Implementations return the raw success body; extracting text from it is
/// the caller's concern so malformed payloads can be recovered locally.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionPort: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError>;
}
