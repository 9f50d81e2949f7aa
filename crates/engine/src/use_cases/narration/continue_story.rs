//! Continue narration use case.
//!
//! Builds the narrator prompt, makes one completion call and returns
//! sanitized, never-empty text.

use std::sync::Arc;

use storyloom_domain::{sanitize, NarrationRequest, MAX_NARRATION_TOKENS, NARRATOR_HESITATION};

use super::extract::extract_output_text;
use super::prompt::build_messages;
use crate::infrastructure::ports::{CompletionError, CompletionPort, CompletionRequest};

/// Errors that end a narration turn.
#[derive(Debug, thiserror::Error)]
pub enum NarrationError {
    #[error(transparent)]
    Completion(#[from] CompletionError),
}

/// Continue narration use case.
///
/// Orchestrates: prompt assembly, completion call, text extraction, sanitizing.
pub struct ContinueNarration {
    completion: Arc<dyn CompletionPort>,
}

impl ContinueNarration {
    pub fn new(completion: Arc<dyn CompletionPort>) -> Self {
        Self { completion }
    }

    /// Produce the next narration turn.
    ///
    /// # Returns
    /// * `Ok(text)` - Sanitized narration, or the hesitation line when the
    ///   service answered with nothing usable
    /// * `Err(NarrationError)` - The service call itself failed; not retried
    pub async fn execute(&self, request: NarrationRequest) -> Result<String, NarrationError> {
        let completion_request = CompletionRequest::new(build_messages(&request))
            .with_temperature(request.drama.temperature())
            .with_max_output_tokens(MAX_NARRATION_TOKENS);

        let body = self.completion.complete(completion_request).await?;

        let text = extract_output_text(&body).unwrap_or_else(|| {
            tracing::warn!(
                body_len = body.len(),
                "Completion body had no usable text, using fallback"
            );
            NARRATOR_HESITATION.to_string()
        });

        Ok(sanitize(&text))
    }
}
