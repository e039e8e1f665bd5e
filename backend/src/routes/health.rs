//! Health check endpoints

use axum::Json;
use contact_manager_shared::types::MessageResponse;
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET / - service banner
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Contacts Management API is running".to_string(),
    })
}

/// GET /health - liveness; does not touch the store
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
