//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction. It is built
//! once at startup and is read-only while requests are handled.

use crate::auth::JwtService;
use crate::config::AppConfig;
use crate::repositories::{
    ContactStore, InMemoryStore, PgContactRepository, PgUserRepository, UserStore,
};
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
///
/// Every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Credential store
    pub users: Arc<dyn UserStore>,
    /// Contact store
    pub contacts: Arc<dyn ContactStore>,
    /// Pre-initialized JWT service with cached keys
    pub jwt: JwtService,
}

impl AppState {
    /// Create state backed by PostgreSQL
    pub fn new(db: PgPool, config: AppConfig) -> Self {
        Self::with_stores(
            Arc::new(PgUserRepository::new(db.clone())),
            Arc::new(PgContactRepository::new(db)),
            &config,
        )
    }

    /// Create state backed by a single in-memory store
    pub fn in_memory(store: InMemoryStore, config: AppConfig) -> Self {
        Self::with_stores(Arc::new(store.clone()), Arc::new(store), &config)
    }

    /// Create state from arbitrary store implementations
    pub fn with_stores(
        users: Arc<dyn UserStore>,
        contacts: Arc<dyn ContactStore>,
        config: &AppConfig,
    ) -> Self {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.expiry_secs);

        Self {
            users,
            contacts,
            jwt,
        }
    }

    #[inline]
    pub fn users(&self) -> &dyn UserStore {
        self.users.as_ref()
    }

    #[inline]
    pub fn contacts(&self) -> &dyn ContactStore {
        self.contacts.as_ref()
    }

    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }
}
