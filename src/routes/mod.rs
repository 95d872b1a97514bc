// HTTP routes: dashboard pages, JSON data endpoint, static assets

mod api;
mod assets;
mod error;
mod pages;

pub use error::ApiError;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::telemetry_repo::TelemetryRepo;

/// Path of the JSON aggregation endpoint (polled by the client-rendered page).
pub const DATA_PATH: &str = "/api/dashboard";

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) repo: Arc<TelemetryRepo>,
    pub(crate) config: AppConfig,
}

pub fn app(repo: Arc<TelemetryRepo>, config: AppConfig) -> Router {
    let state = AppState { repo, config };
    Router::new()
        .route("/", get(pages::dashboard_page)) // GET /
        .route("/live", get(pages::live_page)) // GET /live
        .route(DATA_PATH, get(api::dashboard_handler)) // GET /api/dashboard
        .route("/version", get(api::version_handler)) // GET /version
        .route("/assets/style.css", get(assets::style_css))
        .route("/assets/dashboard.js", get(assets::dashboard_js))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
