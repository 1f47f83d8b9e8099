mod candidate;
mod config;
mod errors;
mod frontend;
mod interview;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::candidate::store::PgCandidateStore;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::{build_api_router, build_form_router};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Hiring Assistant v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and the candidate collection
    let store = PgCandidateStore::connect(&config.database_url).await?;
    store.ensure_schema().await?;

    // Initialize LLM client
    let llm = LlmClient::new(config.groq_api_key.clone(), config.groq_api_url.clone());
    info!(
        "LLM client initialized (model: {}, temperature: {})",
        llm_client::MODEL,
        llm_client::TEMPERATURE
    );

    let state = AppState {
        completer: Arc::new(llm),
        store: Arc::new(store),
    };

    let api = build_api_router(state.clone())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());
    let form = build_form_router(state).layer(TraceLayer::new_for_http());

    let api_addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let form_addr: SocketAddr = format!("0.0.0.0:{}", config.form_port).parse()?;

    let api_listener = tokio::net::TcpListener::bind(api_addr).await?;
    info!("API listening on {api_addr}");
    let form_listener = tokio::net::TcpListener::bind(form_addr).await?;
    info!("Form listening on {form_addr}");

    tokio::try_join!(
        async { axum::serve(api_listener, api).await },
        async { axum::serve(form_listener, form).await },
    )?;

    Ok(())
}
