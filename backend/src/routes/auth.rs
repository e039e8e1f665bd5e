//! Authentication routes
//!
//! Registration and login. Both return the user together with a bearer
//! token for the contact routes.

use super::body::Payload;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use contact_manager_shared::types::{AuthResponse, LoginRequest, RegisterRequest};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// POST /api/auth/register
async fn register(
    State(state): State<AppState>,
    Payload(req): Payload<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let response = UserService::register(state.users(), state.jwt(), req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    Payload(req): Payload<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let response = UserService::login(state.users(), state.jwt(), req).await?;
    Ok(Json(response))
}
