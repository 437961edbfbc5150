mod config;
mod db;
mod errors;
mod flows;
mod genai;
mod models;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::genai::GenAiClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::memory::MemoryDocumentStore;
use crate::store::pg::PgDocumentStore;
use crate::store::DocumentStore;

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

    info!("Starting SkillSync API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the document store: Postgres when configured, otherwise
    // the in-memory demo store.
    let store: Arc<dyn DocumentStore> = match &config.database_url {
        Some(database_url) => {
            let pool = create_pool(database_url).await?;
            let pg = PgDocumentStore::new(pool);
            pg.ensure_schema().await?;
            info!("Document store: PostgreSQL");
            Arc::new(pg)
        }
        None => {
            warn!("DATABASE_URL not set — using in-memory document store (data is lost on restart)");
            Arc::new(MemoryDocumentStore::new())
        }
    };

    // Initialize Redis (profile read cache); absent = disabled
    let redis = match &config.redis_url {
        Some(redis_url) => {
            let client = redis::Client::open(redis_url.clone())?;
            info!("Redis profile cache enabled");
            Some(client)
        }
        None => {
            info!("REDIS_URL not set — profile cache disabled");
            None
        }
    };

    // Initialize the generative-model client
    let genai = GenAiClient::new(config.genai_api_key.clone());
    info!(
        "GenAI client initialized (text: {}, tts: {}, video: {})",
        genai::TEXT_MODEL,
        genai::TTS_MODEL,
        genai::VIDEO_MODEL
    );

    // Build app state
    let state = AppState {
        store,
        redis,
        genai,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()), // TODO: tighten CORS in production
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
