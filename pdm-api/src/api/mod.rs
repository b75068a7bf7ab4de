//! HTTP API handlers

pub mod aggregates;
pub mod cache;
pub mod goals;
pub mod health;
pub mod overview;
pub mod secretariats;

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};

/// Envelope shared by the collection endpoints.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub count: usize,
    pub timestamp: DateTime<Utc>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> ListResponse<T> {
        let count = data.len();
        ListResponse {
            data,
            count,
            timestamp: Utc::now(),
        }
    }
}

/// GET / - service banner with the endpoint map
pub async fn service_index() -> Json<Value> {
    Json(json!({
        "service": "pdm-api",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "goals": "/api/goals",
            "goal": "/api/goals/:id",
            "goals_by_axis": "/api/goals/axis/:axis",
            "goals_by_program": "/api/goals/program/:program",
            "aggregates": "/api/aggregates/:level?year=2024|2025&limit=N",
            "overview": "/api/overview",
            "secretariats": "/api/secretariats",
            "cache_clear": "POST /api/cache/clear",
        }
    }))
}
