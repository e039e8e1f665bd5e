//! Database repositories
//!
//! Provides the data access layer. Each store is a trait so that the
//! PostgreSQL implementation can be swapped for the in-memory one.

pub mod contact;
pub mod memory;
pub mod user;

pub use contact::{
    ContactRecord, ContactStore, CreateContact, OwnedContact, PgContactRepository, UpdateContact,
};
pub use memory::InMemoryStore;
pub use user::{CreateUser, PgUserRepository, UserRecord, UserStore};
