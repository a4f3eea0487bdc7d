use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors on the plain-JSON read paths. Mutations report failure in-band
/// through the `MutationResponse` envelope instead.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Pedido no encontrado")]
    OrderNotFound,

    #[error("Error interno del servidor")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::OrderNotFound => StatusCode::NOT_FOUND,
            AppError::Internal(err) => {
                error!(error = %err, "internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
