//! User repository for database operations

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use contact_manager_shared::models::User;
use sqlx::PgPool;
use uuid::Uuid;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            password_hash: record.password_hash,
            created_at: record.created_at,
        }
    }
}

/// Input for creating a user
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Credential store
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user. Returns `None` when the email is already registered.
    async fn create(&self, input: CreateUser) -> Result<Option<UserRecord>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>>;
}

/// PostgreSQL-backed credential store
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserRepository {
    async fn create(&self, input: CreateUser) -> Result<Option<UserRecord>> {
        // The unique index on email makes the duplicate check atomic.
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            ON CONFLICT (email) DO NOTHING
            RETURNING id, name, email, password_hash, created_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.password_hash)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
