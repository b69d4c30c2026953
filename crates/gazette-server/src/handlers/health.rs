//! Liveness endpoint.

use axum::Json;
use serde::Serialize;

/// Body de `GET /health`.
///
/// Solo indica que el proceso atiende requests; no consulta al proveedor
/// ni al cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub const UP: Self = Self { status: "UP" };
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self::UP
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::UP)
}
