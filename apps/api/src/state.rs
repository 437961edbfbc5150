use std::sync::Arc;

use redis::Client as RedisClient;

use crate::config::Config;
use crate::genai::GenAiClient;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Document store seam — Postgres in production, in-memory in demo mode.
    pub store: Arc<dyn DocumentStore>,
    /// Redis client for the profile read cache. `None` = cache disabled.
    pub redis: Option<RedisClient>,
    pub genai: GenAiClient,
    pub config: Config,
}
