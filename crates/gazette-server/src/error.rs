//! HTTP error mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gazette_upstream::UpstreamError;
use serde::Serialize;
use tracing::error;

/// Errores que un handler puede devolver.
///
/// Todos se traducen a 500 con body `{"message": "..."}`: desde el punto de
/// vista del cliente solo existe "no se pudieron obtener articulos".
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Fallo del proveedor (red, status no exitoso, body invalido).
    #[error("error fetching articles: {0}")]
    Upstream(#[from] UpstreamError),
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        error!(error = %message, "Request failed");

        let body = Json(ErrorResponse { message });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
