//! Data models for the Contact Manager application

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Copy of the user with the password hash cleared.
    pub fn without_password(&self) -> Self {
        Self {
            password_hash: String::new(),
            ..self.clone()
        }
    }
}

/// A contact record owned by exactly one user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Owning user
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let json = serde_json::to_value(sample_user()).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "ada@example.com");
    }

    #[test]
    fn test_without_password_clears_hash() {
        let user = sample_user();
        let public = user.without_password();
        assert!(public.password_hash.is_empty());
        assert_eq!(public.id, user.id);
    }

    #[test]
    fn test_contact_serializes_owner() {
        let owner = Uuid::new_v4();
        let now = Utc::now();
        let contact = Contact {
            id: Uuid::new_v4(),
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            phone: "555-0100".to_string(),
            user_id: owner,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["user_id"], owner.to_string());
        assert_eq!(json["phone"], "555-0100");
    }
}
