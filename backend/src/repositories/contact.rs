//! Contact repository for database operations
//!
//! Every call that touches a single contact is addressed by an
//! [`OwnedContact`] key, so there is no way to read or write a contact
//! without naming its owner.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use contact_manager_shared::models::Contact;
use sqlx::PgPool;
use uuid::Uuid;

/// Appends the owner predicate. `$1` is the contact id, `$2` the owner id.
macro_rules! scoped_to_owner {
    ($sql:literal) => {
        concat!($sql, " WHERE id = $1 AND user_id = $2")
    };
    ($sql:literal, $tail:literal) => {
        concat!($sql, " WHERE id = $1 AND user_id = $2 ", $tail)
    };
}

/// Contact record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ContactRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContactRecord> for Contact {
    fn from(record: ContactRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            phone: record.phone,
            user_id: record.user_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// A contact as seen by one owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnedContact {
    pub id: Uuid,
    pub owner_id: Uuid,
}

impl OwnedContact {
    pub fn new(id: Uuid, owner_id: Uuid) -> Self {
        Self { id, owner_id }
    }

    /// Whether the record is this contact and belongs to this owner
    #[inline]
    pub fn matches(&self, record: &ContactRecord) -> bool {
        record.id == self.id && record.user_id == self.owner_id
    }
}

/// Input for creating a contact
#[derive(Debug, Clone)]
pub struct CreateContact {
    pub owner_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Field changes for a contact; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct UpdateContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Contact store
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn create(&self, input: CreateContact) -> Result<ContactRecord>;

    /// All contacts of an owner, newest first
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<ContactRecord>>;

    async fn find(&self, key: OwnedContact) -> Result<Option<ContactRecord>>;

    /// Apply changes. Returns `None` when the owner has no such contact.
    async fn update(&self, key: OwnedContact, changes: UpdateContact)
        -> Result<Option<ContactRecord>>;

    /// Returns `false` when the owner has no such contact.
    async fn delete(&self, key: OwnedContact) -> Result<bool>;
}

/// PostgreSQL-backed contact store
#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PgContactRepository {
    async fn create(&self, input: CreateContact) -> Result<ContactRecord> {
        let record = sqlx::query_as::<_, ContactRecord>(
            r#"
            INSERT INTO contacts (user_id, name, email, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, name, email, phone, created_at, updated_at
            "#,
        )
        .bind(input.owner_id)
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<ContactRecord>> {
        let records = sqlx::query_as::<_, ContactRecord>(
            r#"
            SELECT id, user_id, name, email, phone, created_at, updated_at
            FROM contacts
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn find(&self, key: OwnedContact) -> Result<Option<ContactRecord>> {
        let record = sqlx::query_as::<_, ContactRecord>(scoped_to_owner!(
            "SELECT id, user_id, name, email, phone, created_at, updated_at FROM contacts"
        ))
        .bind(key.id)
        .bind(key.owner_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn update(
        &self,
        key: OwnedContact,
        changes: UpdateContact,
    ) -> Result<Option<ContactRecord>> {
        let record = sqlx::query_as::<_, ContactRecord>(scoped_to_owner!(
            "UPDATE contacts SET \
                name = COALESCE($3, name), \
                email = COALESCE($4, email), \
                phone = COALESCE($5, phone), \
                updated_at = clock_timestamp()",
            "RETURNING id, user_id, name, email, phone, created_at, updated_at"
        ))
        .bind(key.id)
        .bind(key.owner_id)
        .bind(changes.name)
        .bind(changes.email)
        .bind(changes.phone)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn delete(&self, key: OwnedContact) -> Result<bool> {
        let result = sqlx::query(scoped_to_owner!("DELETE FROM contacts"))
            .bind(key.id)
            .bind(key.owner_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
