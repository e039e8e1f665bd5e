//! User service for registration and login

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{CreateUser, UserRecord, UserStore};
use contact_manager_shared::models::User;
use contact_manager_shared::types::{AuthResponse, LoginRequest, RegisterRequest};
use contact_manager_shared::validation::supplied;
use tracing::info;

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user and issue a token for it
    pub async fn register(
        users: &dyn UserStore,
        jwt_service: &JwtService,
        req: RegisterRequest,
    ) -> Result<AuthResponse, ApiError> {
        let (Some(name), Some(email), Some(password)) = (
            supplied(req.name),
            supplied(req.email),
            supplied(req.password),
        ) else {
            return Err(ApiError::missing_fields());
        };

        let password_hash = PasswordService::hash_async(password)
            .await
            .map_err(ApiError::Internal)?;

        let user = users
            .create(CreateUser {
                name,
                email,
                password_hash,
            })
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Conflict("User already exists".to_string()))?;

        info!(user_id = %user.id, "User registered");
        Self::auth_response(jwt_service, user)
    }

    /// Login with email and password
    pub async fn login(
        users: &dyn UserStore,
        jwt_service: &JwtService,
        req: LoginRequest,
    ) -> Result<AuthResponse, ApiError> {
        let invalid = || ApiError::Unauthorized("Invalid credentials".to_string());

        let (Some(email), Some(password)) = (supplied(req.email), supplied(req.password)) else {
            return Err(invalid());
        };

        let user = users
            .find_by_email(&email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(invalid)?;

        let valid = PasswordService::verify_async(password, user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(invalid());
        }

        Self::auth_response(jwt_service, user)
    }

    fn auth_response(jwt_service: &JwtService, user: UserRecord) -> Result<AuthResponse, ApiError> {
        let token = jwt_service.issue(user.id).map_err(ApiError::Internal)?;
        Ok(AuthResponse {
            user: User::from(user).into(),
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryStore;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn jwt() -> JwtService {
        JwtService::new("user-service-secret", 3600)
    }

    fn registration() -> RegisterRequest {
        RegisterRequest {
            name: Some(Name().fake()),
            email: Some(SafeEmail().fake()),
            password: Some("123456".to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_issues_token_for_new_user() {
        let store = InMemoryStore::new();
        let jwt = jwt();
        let req = registration();

        let response = UserService::register(&store, &jwt, req.clone()).await.unwrap();

        assert_eq!(Some(response.user.email.clone()), req.email);
        assert_eq!(jwt.verify(&response.token).unwrap(), response.user.id);
    }

    #[tokio::test]
    async fn test_register_requires_every_field() {
        let store = InMemoryStore::new();
        let mut req = registration();
        req.password = Some(String::new());

        let err = UserService::register(&store, &jwt(), req).await.unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let store = InMemoryStore::new();
        let req = registration();

        UserService::register(&store, &jwt(), req.clone()).await.unwrap();
        let err = UserService::register(&store, &jwt(), req).await.unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_login_round_trip() {
        let store = InMemoryStore::new();
        let jwt = jwt();
        let req = registration();
        let registered = UserService::register(&store, &jwt, req.clone()).await.unwrap();

        let login = LoginRequest {
            email: req.email,
            password: req.password,
        };
        let response = UserService::login(&store, &jwt, login).await.unwrap();
        assert_eq!(response.user.id, registered.user.id);
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password_and_unknown_email() {
        let store = InMemoryStore::new();
        let req = registration();
        UserService::register(&store, &jwt(), req.clone()).await.unwrap();

        let wrong_password = LoginRequest {
            email: req.email,
            password: Some("nope".to_string()),
        };
        let err = UserService::login(&store, &jwt(), wrong_password).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));

        let unknown = LoginRequest {
            email: Some("nobody@example.com".to_string()),
            password: Some("123456".to_string()),
        };
        let err = UserService::login(&store, &jwt(), unknown).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_login_missing_fields_is_unauthorized() {
        let store = InMemoryStore::new();
        let err = UserService::login(&store, &jwt(), LoginRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }
}
