// JSON error responses for the data endpoint

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::telemetry_repo::StoreError;

/// Body returned while the telemetry table does not exist yet.
pub const UNINITIALIZED_MESSAGE: &str = "Tabela nao encontrada.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Erro ao buscar dados: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "data endpoint failed");
        let body = Json(serde_json::json!({ "erro": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
