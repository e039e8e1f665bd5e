//! API request and response types

use crate::models::User;
use crate::validation::scalar_string;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Plain message response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Registration request
///
/// Every field is optional on the wire so that presence is checked by the
/// service and reported as a 400 rather than a deserialization failure.
/// Scalars of any JSON type are accepted and kept as text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    #[serde(deserialize_with = "scalar_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    #[serde(deserialize_with = "scalar_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub password: Option<String>,
}

/// User profile response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Registration/login response: the user plus a bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub user: UserProfile,
    pub token: String,
}

/// Create contact request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateContactRequest {
    #[serde(deserialize_with = "scalar_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub phone: Option<String>,
}

/// Partial contact update request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateContactRequest {
    #[serde(deserialize_with = "scalar_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub phone: Option<String>,
}

/// Delete confirmation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteContactResponse {
    pub message: String,
    pub id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_deserializes_to_absent_fields() {
        let req: CreateContactRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_none());
        assert!(req.email.is_none());
        assert!(req.phone.is_none());
    }

    #[test]
    fn test_numeric_fields_are_kept_as_text() {
        let req: CreateContactRequest =
            serde_json::from_str(r#"{"name":"Ada","email":"a@a.com","phone":5551234}"#).unwrap();
        assert_eq!(req.phone.as_deref(), Some("5551234"));
    }

    #[test]
    fn test_nested_values_are_rejected() {
        let result: Result<UpdateContactRequest, _> = serde_json::from_str(r#"{"name":["a"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_response_is_enveloped() {
        let response = ErrorResponse {
            error: ErrorDetail {
                code: "NOT_FOUND".to_string(),
                message: "Contact not found".to_string(),
            },
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], "Contact not found");
    }

    #[test]
    fn test_auth_response_is_flat() {
        let response = AuthResponse {
            user: UserProfile {
                id: Uuid::nil(),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                created_at: Utc::now(),
            },
            token: "abc".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["token"], "abc");
        assert_eq!(json["name"], "Ada");
        assert!(json.get("user").is_none());
    }
}
