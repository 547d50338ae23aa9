pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::advisor::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/pathways", post(handlers::handle_generate_pathway))
        .route("/api/v1/skills/gap", post(handlers::handle_skill_gap))
        .route(
            "/api/v1/coach/messages",
            post(handlers::handle_coach_message),
        )
        .with_state(state)
}
