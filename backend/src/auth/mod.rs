//! Authentication module
//!
//! Provides JWT bearer authentication with argon2 password hashing.

mod jwt;
mod middleware;
mod password;

pub use jwt::JwtService;
pub use middleware::{require_auth, AuthUser};
pub use password::PasswordService;
