/// Data models for accounts
pub mod user;

pub use user::{Credentials, NewUserRecord, User, UserRecord};
