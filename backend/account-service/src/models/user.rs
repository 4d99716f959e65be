use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// User record - persisted account row
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub user_name: String,
    pub password_hash: String,
    pub registered_at: DateTime<Utc>,
}

/// Insert payload for a new user; the store assigns `id` and `registered_at`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserRecord {
    pub user_name: String,
    pub password_hash: String,
}

/// Public view of an account, without credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub user_name: String,
    pub registered_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            user_name: record.user_name,
            registered_at: record.registered_at,
        }
    }
}

impl From<&UserRecord> for User {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            user_name: record.user_name.clone(),
            registered_at: record.registered_at,
        }
    }
}

/// User name / password pair as submitted for signup or login
#[derive(Debug, Validate)]
pub struct Credentials {
    #[validate(length(min = 1, message = "user name must not be empty"))]
    pub user_name: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

impl Credentials {
    pub fn new(user_name: &str, password: &str) -> Self {
        Self {
            user_name: user_name.to_string(),
            password: password.to_string(),
        }
    }
}
