//! Engine configuration from environment variables.
//!
//! `main` loads `.env.local` / `.env` first, so everything here reads the
//! process environment. Parsing goes through a lookup function so tests can
//! supply their own variables.

use std::net::SocketAddr;

/// Default completion API base URL.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default completion model.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Default listen port.
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Completion service settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionConfig {
    /// Bearer credential; narration fails fast without it.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

/// PostgREST data store settings. Both values are required together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataStoreConfig {
    pub url: String,
    pub service_key: String,
}

/// Everything the engine reads at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub completion: CompletionConfig,
    pub data_store: Option<DataStoreConfig>,
    /// `*` or a comma-separated origin list; `None` disables CORS.
    pub cors_allowed_origins: Option<String>,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let server_port = get("PORT")
            .or_else(|| get("SERVER_PORT"))
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_SERVER_PORT);

        let completion = CompletionConfig {
            api_key: get("OPENAI_API_KEY"),
            model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            base_url: get("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        };

        let data_store = match (
            get("SUPABASE_URL"),
            get("SUPABASE_SERVICE_KEY").or_else(|| get("SUPABASE_SERVICE_ROLE_KEY")),
        ) {
            (Some(url), Some(service_key)) => Some(DataStoreConfig {
                url: url.trim_end_matches('/').to_string(),
                service_key,
            }),
            _ => None,
        };

        Self {
            server_host: get("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port,
            completion,
            data_store,
            cors_allowed_origins: get("CORS_ALLOWED_ORIGINS"),
        }
    }

    /// Socket address to bind.
    pub fn listen_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.server_host, self.server_port).parse()
    }
}
