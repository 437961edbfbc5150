pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::flows::handlers as flow_handlers;
use crate::state::AppState;
use crate::store::handlers as store_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Freelancer catalog & profile settings
        .route(
            "/api/v1/freelancers",
            get(store_handlers::handle_list_freelancers),
        )
        .route(
            "/api/v1/freelancers/:id",
            get(store_handlers::handle_get_profile).put(store_handlers::handle_update_profile),
        )
        // Job catalog
        .route("/api/v1/jobs", get(flow_handlers::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(flow_handlers::handle_get_job))
        // AI orchestration actions
        .route(
            "/api/v1/jobs/describe",
            post(flow_handlers::handle_generate_job_description),
        )
        .route("/api/v1/jobs/match", post(flow_handlers::handle_match_jobs))
        .route(
            "/api/v1/skills/suggest",
            post(flow_handlers::handle_suggest_skills),
        )
        .route("/api/v1/chat/send", post(flow_handlers::handle_send_message))
        .route(
            "/api/v1/chat/:user_id/:freelancer_id/messages",
            get(flow_handlers::handle_chat_history),
        )
        .route(
            "/api/v1/video/generate",
            post(flow_handlers::handle_generate_video),
        )
        .with_state(state)
}
