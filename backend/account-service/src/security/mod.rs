/// Security module for account credentials
///
/// - **password**: `PasswordHasher` seam and its Argon2id implementation
pub mod password;

pub use password::{Argon2PasswordHasher, PasswordHasher};
