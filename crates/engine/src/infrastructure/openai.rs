//! OpenAI Responses API client

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use storyloom_domain::ConversationTurn;

use crate::infrastructure::config::CompletionConfig;
use crate::infrastructure::ports::{CompletionError, CompletionPort, CompletionRequest};

/// Client for the `/responses` endpoint.
///
/// No timeout or retry is configured; one call per narration turn.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    pub fn new(config: &CompletionConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/responses", self.base_url)
    }
}

#[async_trait]
impl CompletionPort for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        let api_key = self.api_key.as_deref().ok_or(CompletionError::NotConfigured)?;
        let api_request = ResponsesRequest::new(&self.model, &request);

        tracing::debug!(
            model = %self.model,
            temperature = request.temperature,
            messages = request.messages.len(),
            "Sending completion request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&api_request)
            .send()
            .await
            .map_err(|e| CompletionError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Completion service returned an error");
            return Err(CompletionError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

// =============================================================================
// Responses API types
// =============================================================================

/// Turns are serialized as they are, so caller history reaches the API untouched.
#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: &'a [ConversationTurn],
    max_output_tokens: u32,
    temperature: f32,
}

impl<'a> ResponsesRequest<'a> {
    fn new(model: &'a str, request: &'a CompletionRequest) -> Self {
        Self {
            model,
            input: &request.messages,
            max_output_tokens: request.max_output_tokens,
            temperature: request.temperature,
        }
    }
}
