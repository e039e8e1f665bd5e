//! Contact Manager Shared Library
//!
//! This crate contains the models and wire types shared between the
//! backend and any API client.

pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use models::{Contact, User};
pub use types::*;
