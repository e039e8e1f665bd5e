//! In-memory store
//!
//! Implements both the credential and contact stores on top of
//! `tokio::sync::RwLock`. Useful for tests and for running the API
//! without PostgreSQL. Not durable across restarts.

use super::contact::{ContactRecord, ContactStore, CreateContact, OwnedContact, UpdateContact};
use super::user::{CreateUser, UserRecord, UserStore};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Shared in-memory users and contacts. Clones share the same data.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    users: Arc<RwLock<Vec<UserRecord>>>,
    /// Insertion order
    contacts: Arc<RwLock<Vec<ContactRecord>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a user and their contacts, as `ON DELETE CASCADE` would
    pub async fn remove_user(&self, id: Uuid) -> bool {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != id);
        let removed = users.len() != before;
        drop(users);

        if removed {
            self.contacts.write().await.retain(|c| c.user_id != id);
        }
        removed
    }

    /// Number of stored contacts across all owners
    pub async fn contact_count(&self) -> usize {
        self.contacts.read().await.len()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn create(&self, input: CreateUser) -> Result<Option<UserRecord>> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == input.email) {
            return Ok(None);
        }

        let record = UserRecord {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            password_hash: input.password_hash,
            created_at: Utc::now(),
        };
        users.push(record.clone());
        Ok(Some(record))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl ContactStore for InMemoryStore {
    async fn create(&self, input: CreateContact) -> Result<ContactRecord> {
        let now = Utc::now();
        let record = ContactRecord {
            id: Uuid::new_v4(),
            user_id: input.owner_id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            created_at: now,
            updated_at: now,
        };
        self.contacts.write().await.push(record.clone());
        Ok(record)
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<ContactRecord>> {
        let contacts = self.contacts.read().await;
        // Walk newest-inserted first so the stable sort keeps ties newest first.
        let mut records: Vec<ContactRecord> = contacts
            .iter()
            .rev()
            .filter(|c| c.user_id == owner_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn find(&self, key: OwnedContact) -> Result<Option<ContactRecord>> {
        let contacts = self.contacts.read().await;
        Ok(contacts.iter().find(|c| key.matches(c)).cloned())
    }

    async fn update(
        &self,
        key: OwnedContact,
        changes: UpdateContact,
    ) -> Result<Option<ContactRecord>> {
        let mut contacts = self.contacts.write().await;
        let Some(record) = contacts.iter_mut().find(|c| key.matches(c)) else {
            return Ok(None);
        };

        if let Some(name) = changes.name {
            record.name = name;
        }
        if let Some(email) = changes.email {
            record.email = email;
        }
        if let Some(phone) = changes.phone {
            record.phone = phone;
        }
        record.updated_at = Utc::now();

        Ok(Some(record.clone()))
    }

    async fn delete(&self, key: OwnedContact) -> Result<bool> {
        let mut contacts = self.contacts.write().await;
        let before = contacts.len();
        contacts.retain(|c| !key.matches(c));
        Ok(contacts.len() != before)
    }
}
