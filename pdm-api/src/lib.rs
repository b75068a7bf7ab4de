//! pdm-api - HTTP service over the development-plan engine
//!
//! Exposes the application state and router builder so integration
//! tests can drive the full stack in process.

pub mod api;
pub mod config;
pub mod error;
pub mod services;

pub use error::{ApiError, ApiResult};

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use services::{GoalService, SecretariatService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub goals: Arc<GoalService>,
    pub secretariats: Arc<SecretariatService>,
}

impl AppState {
    pub fn new(goals: GoalService, secretariats: SecretariatService) -> AppState {
        AppState {
            goals: Arc::new(goals),
            secretariats: Arc::new(secretariats),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState, cors_origin: &str) -> Router {
    Router::new()
        .route("/", get(api::service_index))
        .merge(api::health::health_routes())
        .merge(api::goals::goal_routes())
        .merge(api::aggregates::aggregate_routes())
        .merge(api::overview::overview_routes())
        .merge(api::secretariats::secretariat_routes())
        .merge(api::cache::cache_routes())
        .with_state(state)
        .layer(cors_layer(cors_origin))
}

/// Permissive CORS for `"*"`, one exact allowed origin otherwise.
fn cors_layer(origin: &str) -> CorsLayer {
    if origin == "*" {
        return CorsLayer::permissive();
    }
    match origin.parse::<HeaderValue>() {
        Ok(value) => CorsLayer::new()
            .allow_origin(value)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => {
            tracing::warn!(origin, "invalid CORS origin, falling back to permissive");
            CorsLayer::permissive()
        }
    }
}
