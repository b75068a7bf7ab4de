//! Secretariat summary endpoints

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use pdm_common::model::SecretariatSummary;

use crate::api::ListResponse;
use crate::error::ApiResult;
use crate::AppState;

/// GET /api/secretariats
///
/// Per-secretariat budget summaries; answers 503 when the optional
/// secretariats sheet is not configured.
pub async fn list_secretariats(
    State(state): State<AppState>,
) -> ApiResult<Json<ListResponse<SecretariatSummary>>> {
    let summaries = state.secretariats.all().await?;
    Ok(Json(ListResponse::new((*summaries).clone())))
}

/// Build secretariat routes
pub fn secretariat_routes() -> Router<AppState> {
    Router::new().route("/api/secretariats", get(list_secretariats))
}
