//! Contact service
//!
//! Owner-scoped CRUD over the contact store. Every lookup goes through
//! [`OwnedContact`], so a contact owned by someone else behaves exactly
//! like one that does not exist.

use crate::error::ApiError;
use crate::repositories::{ContactStore, CreateContact, OwnedContact, UpdateContact};
use contact_manager_shared::models::Contact;
use contact_manager_shared::types::{CreateContactRequest, UpdateContactRequest};
use contact_manager_shared::validation::supplied;
use tracing::debug;
use uuid::Uuid;

/// Contact service for business logic
pub struct ContactService;

impl ContactService {
    /// Create a contact owned by `owner_id`
    pub async fn create(
        store: &dyn ContactStore,
        owner_id: Uuid,
        req: CreateContactRequest,
    ) -> Result<Contact, ApiError> {
        let (Some(name), Some(email), Some(phone)) =
            (supplied(req.name), supplied(req.email), supplied(req.phone))
        else {
            return Err(ApiError::missing_fields());
        };

        let record = store
            .create(CreateContact {
                owner_id,
                name,
                email,
                phone,
            })
            .await
            .map_err(ApiError::Internal)?;

        debug!(contact_id = %record.id, "Contact created");
        Ok(record.into())
    }

    /// All of the owner's contacts, newest first
    pub async fn list(store: &dyn ContactStore, owner_id: Uuid) -> Result<Vec<Contact>, ApiError> {
        let records = store
            .list_by_owner(owner_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(Contact::from).collect())
    }

    pub async fn get(
        store: &dyn ContactStore,
        owner_id: Uuid,
        id: &str,
    ) -> Result<Contact, ApiError> {
        let key = Self::owned(owner_id, id)?;

        store
            .find(key)
            .await
            .map_err(ApiError::Internal)?
            .map(Contact::from)
            .ok_or_else(ApiError::contact_not_found)
    }

    /// Overwrite the supplied fields and keep the rest
    ///
    /// Empty strings count as not supplied, so a field cannot be cleared.
    pub async fn update(
        store: &dyn ContactStore,
        owner_id: Uuid,
        id: &str,
        req: UpdateContactRequest,
    ) -> Result<Contact, ApiError> {
        let key = Self::owned(owner_id, id)?;
        let changes = UpdateContact {
            name: supplied(req.name),
            email: supplied(req.email),
            phone: supplied(req.phone),
        };

        store
            .update(key, changes)
            .await
            .map_err(ApiError::Internal)?
            .map(Contact::from)
            .ok_or_else(ApiError::contact_not_found)
    }

    /// Permanently delete a contact, returning its id
    pub async fn delete(
        store: &dyn ContactStore,
        owner_id: Uuid,
        id: &str,
    ) -> Result<Uuid, ApiError> {
        let key = Self::owned(owner_id, id)?;

        if store.delete(key).await.map_err(ApiError::Internal)? {
            debug!(contact_id = %key.id, "Contact deleted");
            Ok(key.id)
        } else {
            Err(ApiError::contact_not_found())
        }
    }

    /// Scope a path id to the caller. An id that is not a UUID cannot
    /// name any contact, so it is reported as not found.
    fn owned(owner_id: Uuid, id: &str) -> Result<OwnedContact, ApiError> {
        let id = Uuid::parse_str(id).map_err(|_| ApiError::contact_not_found())?;
        Ok(OwnedContact::new(id, owner_id))
    }
}
