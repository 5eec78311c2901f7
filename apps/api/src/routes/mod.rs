pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::persona::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate_question", get(handlers::handle_generate_question))
        .route("/analyze", post(handlers::handle_analyze))
        .route("/rag_recommend", post(handlers::handle_rag_recommend))
        .route("/recommend_tags", post(handlers::handle_recommend_tags))
        .route(
            "/analyze_and_recommend",
            post(handlers::handle_analyze_and_recommend),
        )
        .with_state(state)
}
