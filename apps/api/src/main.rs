mod advisor;
mod analysis;
mod config;
mod credits;
mod errors;
mod ingest;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::credits::CreditLedger;
use crate::llm_client::{CompletionProvider, GeminiProvider, OpenAiProvider, ProviderKind};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Herald API v{}", env!("CARGO_PKG_VERSION"));

    // Completion backend selected at startup via AI_PROVIDER. A missing
    // API key surfaces at call time, not here.
    let provider: Arc<dyn CompletionProvider> = match config.ai_provider {
        ProviderKind::OpenAi => Arc::new(OpenAiProvider::new(config.openai_api_key.clone())),
        ProviderKind::Gemini => Arc::new(GeminiProvider::new(config.gemini_api_key.clone())),
    };
    info!("Completion provider initialized: {}", provider.name());

    // Credit ledger, seeded with free credits on first run
    let credits = Arc::new(CreditLedger::open(
        config.credits_path.as_str(),
        config.free_credits,
    )?);
    info!("Credit ledger ready: {} credits", credits.balance());

    // Build app state
    let state = AppState { provider, credits };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
