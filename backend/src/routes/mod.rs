//! Route definitions for the Contact Manager API
//!
//! This module organizes all API routes and applies middleware.

use crate::auth::require_auth;
use crate::state::AppState;
use axum::{
    http::{header, Method, StatusCode},
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

mod auth;
mod body;
mod contacts;
mod health;


pub use auth::auth_routes;
pub use contacts::contact_routes;

/// Create the main application router with all middleware
///
/// No timeout layer: handlers must never be dropped mid-write.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .nest("/api", api_routes(state.clone()))
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes
///
/// `require_auth` wraps the whole contacts router, fallback included, so any
/// path under `/api/contacts` answers 401 before it can answer 404.
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new().nest("/auth", auth::auth_routes()).nest(
        "/contacts",
        contacts::contact_routes()
            .fallback(|| async { StatusCode::NOT_FOUND })
            .layer(middleware::from_fn_with_state(state, require_auth)),
    )
}
