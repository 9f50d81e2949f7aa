//! Error types for port operations.

/// Data store operation errors with context for debugging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoError {
    /// Base URL or service key missing; storyboard features are disabled.
    #[error("Data store is not configured: set SUPABASE_URL and SUPABASE_SERVICE_KEY")]
    NotConfigured,

    /// Transport failure before a response arrived.
    #[error("Data store request to {resource} failed: {message}")]
    Request {
        resource: &'static str,
        message: String,
    },

    /// The store answered with a non-success status.
    #[error("Data store returned {status} for {resource}: {body}")]
    Status {
        resource: &'static str,
        status: u16,
        body: String,
    },

    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    /// Create a Request error with resource context.
    pub fn request(resource: &'static str, message: impl ToString) -> Self {
        Self::Request {
            resource,
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }
}

/// Completion service errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError {
    /// No API key configured.
    #[error("Completion service is not configured: set OPENAI_API_KEY")]
    NotConfigured,

    /// Transport failure before a response arrived.
    #[error("Completion request failed: {0}")]
    RequestFailed(String),

    /// Non-success status; `body` is the raw diagnostic text from upstream.
    #[error("Completion service returned {status}: {body}")]
    Upstream { status: u16, body: String },
}
