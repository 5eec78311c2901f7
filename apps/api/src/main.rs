mod config;
mod errors;
mod extract;
mod llm_client;
mod models;
mod persona;
mod routes;
mod state;
mod store;
mod taxonomy;
#[cfg(test)]
mod testing;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::MySqlTraitStore;
use crate::taxonomy::load_taxonomy;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Wayfarer API v{}", env!("CARGO_PKG_VERSION"));

    // Static taxonomy: read once, immutable while serving
    let taxonomy = load_taxonomy(&config.traits_path)?;
    info!(
        "Loaded {} taxonomy entries from {}",
        taxonomy.len(),
        config.traits_path
    );

    // Initialize the Gemini client
    let llm = GeminiClient::new(config.gemini_api_key.clone());
    info!("Gemini client initialized (model: {})", llm_client::MODEL);

    // Trait store gateway (opens a fresh connection per query, no pool)
    let store = MySqlTraitStore::new(config.database_url());
    info!("Trait store gateway configured for database {}", config.db_name);

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        store: Arc::new(store),
        taxonomy: Arc::new(taxonomy),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
