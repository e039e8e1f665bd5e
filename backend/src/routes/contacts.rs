//! Contact routes
//!
//! All routes here expect `require_auth` to have run and read the caller
//! through the `AuthUser` extractor.

use super::body::Payload;
use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::ContactService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use contact_manager_shared::models::Contact;
use contact_manager_shared::types::{
    CreateContactRequest, DeleteContactResponse, UpdateContactRequest,
};
use std::future::Future;

/// Create contact routes
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_contacts).post(create_contact))
        .route(
            "/:id",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
}

/// Drive a write on its own task so that a dropped connection does not
/// cancel it halfway.
async fn run_to_completion<F, T>(task: F) -> ApiResult<T>
where
    F: Future<Output = ApiResult<T>> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(task)
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("Task join error: {}", e)))?
}

/// GET /api/contacts - the caller's contacts, newest first
async fn list_contacts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<Contact>>> {
    let contacts = ContactService::list(state.contacts(), auth.user_id).await?;
    Ok(Json(contacts))
}

/// POST /api/contacts
async fn create_contact(
    State(state): State<AppState>,
    auth: AuthUser,
    Payload(req): Payload<CreateContactRequest>,
) -> ApiResult<(StatusCode, Json<Contact>)> {
    let store = state.contacts.clone();

    let contact = run_to_completion(async move {
        ContactService::create(store.as_ref(), auth.user_id, req).await
    })
    .await?;

    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /api/contacts/:id
async fn get_contact(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Contact>> {
    let contact = ContactService::get(state.contacts(), auth.user_id, &id).await?;
    Ok(Json(contact))
}

/// PUT /api/contacts/:id - partial update
///
/// A request without a body changes nothing and returns the contact as stored.
async fn update_contact(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Payload(req): Payload<UpdateContactRequest>,
) -> ApiResult<Json<Contact>> {
    let store = state.contacts.clone();

    let contact = run_to_completion(async move {
        ContactService::update(store.as_ref(), auth.user_id, &id, req).await
    })
    .await?;

    Ok(Json(contact))
}

/// DELETE /api/contacts/:id
async fn delete_contact(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteContactResponse>> {
    let store = state.contacts.clone();

    let id = run_to_completion(async move {
        ContactService::delete(store.as_ref(), auth.user_id, &id).await
    })
    .await?;

    Ok(Json(DeleteContactResponse {
        message: "Contact removed".to_string(),
        id,
    }))
}
