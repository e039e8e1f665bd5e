//! JWT token issuance and verification
//!
//! Tokens are stateless HS256 JWTs whose subject is the user id.
//! Keys are derived once and shared behind `Arc`.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Pre-computed JWT keys
#[derive(Clone)]
struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// JWT service for token operations
///
/// Create once at startup and keep in `AppState`; cloning is cheap.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    expiry_secs: i64,
}

impl JwtService {
    pub fn new(secret: &str, expiry_secs: i64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            expiry_secs,
        }
    }

    /// Issue a bearer token for a user
    pub fn issue(&self, user_id: Uuid) -> Result<String> {
        self.issue_with_expiry(user_id, self.expiry_secs)
    }

    fn issue_with_expiry(&self, user_id: Uuid, expiry_secs: i64) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(expiry_secs);

        let claims = Claims {
            sub: user_id.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to generate token: {}", e))
    }

    /// Verify a token and return the user id it was issued for
    ///
    /// Malformed, expired, foreign-secret and non-UUID-subject tokens all
    /// fail; callers are not expected to tell them apart.
    pub fn verify(&self, token: &str) -> Result<Uuid> {
        let token_data = decode::<Claims>(token, &self.keys.decoding, &Validation::default())
            .map_err(|e| anyhow::anyhow!("Invalid token: {}", e))?;

        Uuid::parse_str(&token_data.claims.sub)
            .map_err(|_| anyhow::anyhow!("Invalid user ID in token"))
    }
}
