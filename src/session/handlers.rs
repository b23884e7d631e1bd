use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use tracing::{info, instrument};

use super::{
    models::SessionRecord,
    types::{BestScoreResponse, RankingQuery, RecordSessionRequest},
};
use crate::shared::{ApiResponse, AppError, AppState};

/// HTTP handler for recording a finished game session
///
/// POST /api/scores
/// Returns the stored record with its id, timestamp and computed score
#[instrument(name = "record_session", skip(state, payload))]
pub async fn record_session(
    State(state): State<AppState>,
    payload: Result<Json<RecordSessionRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<SessionRecord>>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    info!(player_name = %request.player_name, "Recording session");

    let record = state.session_service.record_session(request).await?;

    Ok(Json(ApiResponse::ok("Session recorded successfully", record)))
}

/// HTTP handler for the global leaderboard
///
/// GET /api/scores/ranking?limit=N
#[instrument(name = "get_ranking", skip(state, query))]
pub async fn get_ranking(
    State(state): State<AppState>,
    query: Result<Query<RankingQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<SessionRecord>>>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let ranking = state.session_service.get_ranking(query.limit).await?;

    Ok(Json(ApiResponse::ok("Ranking retrieved", ranking)))
}

/// HTTP handler for a player's session history
///
/// GET /api/scores/player/:name
#[instrument(name = "get_player_sessions", skip(state, name))]
pub async fn get_player_sessions(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> Result<Json<ApiResponse<Vec<SessionRecord>>>, AppError> {
    let Path(name) = name.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let sessions = state.session_service.get_player_sessions(&name).await?;

    Ok(Json(ApiResponse::ok("Player sessions retrieved", sessions)))
}

/// GET /api/scores/player/:name/best
#[instrument(name = "get_player_best_score", skip(state, name))]
pub async fn get_player_best_score(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> Result<Json<ApiResponse<BestScoreResponse>>, AppError> {
    let Path(name) = name.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let best_score = state.session_service.get_player_best_score(&name).await?;

    Ok(Json(ApiResponse::ok(
        "Best score retrieved",
        BestScoreResponse {
            player_name: name,
            best_score,
        },
    )))
}

/// GET /api/scores/health
pub async fn health() -> Json<ApiResponse<String>> {
    Json(ApiResponse::ok("API is running", "OK".to_string()))
}
