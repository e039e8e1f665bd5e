//! Request body extractor shared by the auth and contact routes
//!
//! The body is decoded according to its `Content-Type`:
//! - `application/json` (or `+json`): parsed as JSON, an empty body reads as `{}`
//! - `application/x-www-form-urlencoded`: parsed as a form
//! - anything else, or no header at all: the body is ignored and every field is absent
//!
//! Only a body that claims a format and fails to parse is a 400.

use crate::error::ApiError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
    Form,
};
use serde::de::DeserializeOwned;

/// Decoded request body
#[derive(Debug)]
pub struct Payload<T>(pub T);

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Ignored,
}

fn body_kind(req: &Request) -> BodyKind {
    let Some(content_type) = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return BodyKind::Ignored;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json")) {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Ignored
    }
}

#[axum::async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Ignored => Ok(Self(T::default())),
            BodyKind::Form => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
                Ok(Self(value))
            }
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(Self(T::default()));
                }

                serde_json::from_slice(&bytes).map(Self).map_err(|e| {
                    ApiError::BadRequest(format!(
                        "Failed to parse the request body as JSON: {}",
                        e
                    ))
                })
            }
        }
    }
}
