//! Storyloom Engine - Main entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storyloom_engine::infrastructure::config::AppConfig;
use storyloom_engine::{api, App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storyloom_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Storyloom Engine");

    let config = AppConfig::from_env();

    if config.completion.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; narration requests will fail");
    }
    tracing::info!(
        model = %config.completion.model,
        base_url = %config.completion.base_url,
        "Completion service configured"
    );
    match &config.data_store {
        Some(store) => tracing::info!(url = %store.url, "Storyboard data store configured"),
        None => tracing::warn!(
            "SUPABASE_URL / SUPABASE_SERVICE_KEY not set; storyboard requests will fail"
        ),
    }

    let app = Arc::new(App::from_config(&config));
    let router = api::router(app, config.cors_allowed_origins.as_deref());

    // Start server
    let addr = config.listen_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
