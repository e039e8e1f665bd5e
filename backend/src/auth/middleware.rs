//! Authentication middleware
//!
//! `require_auth` is layered in front of every protected route. It
//! resolves the bearer token to a stored user and places an [`AuthUser`]
//! in the request extensions; handlers read it back with the `AuthUser`
//! extractor.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use contact_manager_shared::models::User;
use tracing::debug;
use uuid::Uuid;

const BEARER_PREFIX: &str = "Bearer ";

/// Authenticated caller, set by [`require_auth`]
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    /// The stored user with the password hash cleared
    pub user: User,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(ApiError::missing_token)
    }
}

/// Extract the token from `Authorization: Bearer <token>`
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
}

/// Reject the request with 401 unless it carries a valid token for an existing user
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // Header checks come first; nothing below runs without a token.
    let token = bearer_token(request.headers()).ok_or_else(ApiError::missing_token)?;

    let user_id = state.jwt().verify(token).map_err(|e| {
        debug!("Rejected bearer token: {}", e);
        ApiError::invalid_token()
    })?;

    let user = state
        .users()
        .find_by_id(user_id)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(ApiError::invalid_token)?;

    let user = User::from(user).without_password();
    request.extensions_mut().insert(AuthUser { user_id, user });

    Ok(next.run(request).await)
}
