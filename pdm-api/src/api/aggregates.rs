//! Hierarchy rollup endpoints

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use pdm_common::model::{AggregationBucket, FiscalYear, HierarchyLevel};
use serde::Deserialize;

use crate::api::ListResponse;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Query parameters for the rollup endpoint
#[derive(Debug, Deserialize)]
pub struct AggregateQuery {
    /// Fiscal year, "2024" or "2025" (default 2025)
    pub year: Option<String>,
    /// Keep only the first N sorted buckets
    pub limit: Option<usize>,
}

/// GET /api/aggregates/:level?year=YYYY&limit=N
///
/// Buckets sorted descending by definitive appropriation, then planned
/// units; `limit` takes a prefix of that order.
pub async fn get_aggregates(
    State(state): State<AppState>,
    Path(level): Path<String>,
    Query(query): Query<AggregateQuery>,
) -> ApiResult<Json<ListResponse<AggregationBucket>>> {
    let level = HierarchyLevel::parse(&level).ok_or_else(|| {
        ApiError::BadRequest(format!(
            "unknown hierarchy level {:?} (expected axis, program, subprogram or goal)",
            level
        ))
    })?;

    let year = match query.year.as_deref() {
        None => FiscalYear::Y2025,
        Some(raw) => FiscalYear::parse(raw).ok_or_else(|| {
            ApiError::BadRequest(format!(
                "unknown fiscal year {:?} (expected 2024 or 2025)",
                raw
            ))
        })?,
    };

    let mut buckets = state.goals.aggregate(level, year).await?;
    if let Some(limit) = query.limit {
        buckets.truncate(limit);
    }

    Ok(Json(ListResponse::new(buckets)))
}

/// Build aggregate routes
pub fn aggregate_routes() -> Router<AppState> {
    Router::new().route("/api/aggregates/:level", get(get_aggregates))
}
