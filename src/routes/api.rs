// GET handlers: dashboard JSON, version

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use super::AppState;
use super::error::{ApiError, UNINITIALIZED_MESSAGE};
use crate::models::DashboardState;
use crate::version::{DESCRIPTION, NAME, VERSION};

/// GET /api/dashboard — machine id -> { last_data, producao, status, alarmes },
/// histories oldest first.
pub(super) async fn dashboard_handler(State(state): State<AppState>) -> Result<Response, ApiError> {
    let response = match state.repo.load_dashboard().await? {
        DashboardState::Ready(dashboard) => {
            tracing::debug!(machines = dashboard.len(), "dashboard served");
            Json(dashboard).into_response()
        }
        DashboardState::Initializing => {
            Json(serde_json::json!({ "erro": UNINITIALIZED_MESSAGE })).into_response()
        }
    };
    Ok(response)
}

/// GET /version
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
        "description": DESCRIPTION,
    }))
}
