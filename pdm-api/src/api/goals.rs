//! Product-goal endpoints

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use pdm_common::model::ProductGoal;

use crate::api::ListResponse;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// GET /api/goals
///
/// The full mapped collection in sheet order.
pub async fn list_goals(
    State(state): State<AppState>,
) -> ApiResult<Json<ListResponse<ProductGoal>>> {
    let goals = state.goals.all().await?;
    Ok(Json(ListResponse::new((*goals).clone())))
}

/// GET /api/goals/:id
pub async fn get_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProductGoal>> {
    let id: u32 = id
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("goal id must be a number, got {:?}", id)))?;

    let goal = state
        .goals
        .by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no product goal with id {}", id)))?;
    Ok(Json(goal))
}

/// GET /api/goals/axis/:axis
///
/// Case-insensitive substring filter; an unmatched pattern is an empty
/// list, not an error.
pub async fn goals_by_axis(
    State(state): State<AppState>,
    Path(axis): Path<String>,
) -> ApiResult<Json<ListResponse<ProductGoal>>> {
    let goals = state.goals.by_axis(&axis).await?;
    Ok(Json(ListResponse::new(goals)))
}

/// GET /api/goals/program/:program
pub async fn goals_by_program(
    State(state): State<AppState>,
    Path(program): Path<String>,
) -> ApiResult<Json<ListResponse<ProductGoal>>> {
    let goals = state.goals.by_program(&program).await?;
    Ok(Json(ListResponse::new(goals)))
}

/// Build goal routes
pub fn goal_routes() -> Router<AppState> {
    Router::new()
        .route("/api/goals", get(list_goals))
        .route("/api/goals/:id", get(get_goal))
        .route("/api/goals/axis/:axis", get(goals_by_axis))
        .route("/api/goals/program/:program", get(goals_by_program))
}
