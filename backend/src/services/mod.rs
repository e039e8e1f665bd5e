//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the token service.

pub mod contact;
pub mod user;

pub use contact::ContactService;
pub use user::UserService;
