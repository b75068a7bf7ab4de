//! Whole-plan overview endpoint

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use pdm_common::model::PlanOverview;

use crate::error::ApiResult;
use crate::AppState;

/// GET /api/overview
///
/// Distinct hierarchy counts and the derived-status distribution over
/// the whole plan.
pub async fn get_overview(State(state): State<AppState>) -> ApiResult<Json<PlanOverview>> {
    Ok(Json(state.goals.overview().await?))
}

/// Build overview routes
pub fn overview_routes() -> Router<AppState> {
    Router::new().route("/api/overview", get(get_overview))
}
