/// Account Service Library
///
/// Signup and login for Nova accounts keyed by user name.
///
/// ## Modules
///
/// - `config`: Service configuration
/// - `db`: User record stores (PostgreSQL, in-memory)
/// - `error`: Error types
/// - `models`: Data models
/// - `security`: Password hashing
/// - `services`: Business logic (register, authenticate)
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod security;
pub mod services;

// Re-export commonly used types
pub use db::{InMemoryUserStore, PgUserStore, UserStore};
pub use error::{AccountError, ErrorCode, Result};
pub use models::{NewUserRecord, User, UserRecord};
pub use security::{Argon2PasswordHasher, PasswordHasher};
pub use services::AccountService;
