use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::session;
use crate::shared::AppState;

/// Builds the HTTP application with all score routes mounted
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/scores", post(session::record_session))
        .route("/api/scores/ranking", get(session::get_ranking))
        .route("/api/scores/player/:name", get(session::get_player_sessions))
        .route(
            "/api/scores/player/:name/best",
            get(session::get_player_best_score),
        )
        .route("/api/scores/health", get(session::health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
