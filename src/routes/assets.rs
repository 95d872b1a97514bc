// Static assets, compiled into the binary

use axum::{http::header, response::IntoResponse};

const STYLE_CSS: &str = include_str!("../../assets/style.css");
const DASHBOARD_JS: &str = include_str!("../../assets/dashboard.js");

pub(super) async fn style_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS)
}

pub(super) async fn dashboard_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        DASHBOARD_JS,
    )
}
