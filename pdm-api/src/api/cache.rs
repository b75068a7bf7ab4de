//! Operator cache invalidation

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;

use crate::AppState;

/// Cache clear acknowledgement
#[derive(Debug, Serialize)]
pub struct CacheClearResponse {
    pub status: String,
    pub message: String,
}

/// POST /api/cache/clear
///
/// Drops every cached collection so the next reads refetch the sheets.
pub async fn clear_cache(State(state): State<AppState>) -> Json<CacheClearResponse> {
    state.goals.clear_cache();
    state.secretariats.clear_cache();
    Json(CacheClearResponse {
        status: "ok".to_string(),
        message: "cached sheet data cleared".to_string(),
    })
}

/// Build cache routes
pub fn cache_routes() -> Router<AppState> {
    Router::new().route("/api/cache/clear", post(clear_cache))
}
