// HTML pages: server-rendered dashboard and client-rendered shell

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::{AppState, DATA_PATH};
use crate::render::{Page, render_error_page};

/// GET / — full dashboard, reloaded by the browser every `page_reload_secs`.
pub(super) async fn dashboard_page(State(state): State<AppState>) -> Response {
    let reload_secs = state.config.dashboard.page_reload_secs;
    match state.repo.load_dashboard().await {
        Ok(dashboard) => Html(
            Page::ServerRendered {
                state: &dashboard,
                reload_secs,
            }
            .render(),
        )
        .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "dashboard page: store read failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_error_page(&e.to_string(), reload_secs)),
            )
                .into_response()
        }
    }
}

/// GET /live — skeleton page; assets/dashboard.js polls the data endpoint.
pub(super) async fn live_page(State(state): State<AppState>) -> impl IntoResponse {
    Html(
        Page::ClientRendered {
            data_url: DATA_PATH,
            poll_secs: state.config.dashboard.client_poll_secs,
        }
        .render(),
    )
}
