use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AccountError>;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("User name already exists: {user_name}")]
    DuplicateUserName { user_name: String },

    #[error("User not found: {user_name}")]
    UserNotFound { user_name: String },

    #[error("Invalid password for user: {user_name}")]
    InvalidPassword { user_name: String },

    #[error("Store error for user {user_name}: {message}")]
    Store { user_name: String, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Password hashing failed: {0}")]
    PasswordHashing(String),
}

/// Stable error codes for callers that map failures onto their own responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    DuplicatedUserName,
    UserNotFound,
    InvalidPassword,
    StoreError,
    InvalidInput,
    PasswordHashing,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DuplicatedUserName => "DUPLICATED_USER_NAME",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::InvalidPassword => "INVALID_PASSWORD",
            ErrorCode::StoreError => "STORE_ERROR",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::PasswordHashing => "PASSWORD_HASHING",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AccountError {
    /// Wrap an underlying store failure for `user_name`
    pub fn store(user_name: &str, err: impl fmt::Display) -> Self {
        tracing::error!(user_name = %user_name, "Store error: {}", err);
        AccountError::Store {
            user_name: user_name.to_string(),
            message: err.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AccountError::DuplicateUserName { .. } => ErrorCode::DuplicatedUserName,
            AccountError::UserNotFound { .. } => ErrorCode::UserNotFound,
            AccountError::InvalidPassword { .. } => ErrorCode::InvalidPassword,
            AccountError::Store { .. } => ErrorCode::StoreError,
            AccountError::InvalidInput(_) => ErrorCode::InvalidInput,
            AccountError::PasswordHashing(_) => ErrorCode::PasswordHashing,
        }
    }

    /// User name the failure refers to, when the variant carries one
    pub fn user_name(&self) -> Option<&str> {
        match self {
            AccountError::DuplicateUserName { user_name }
            | AccountError::UserNotFound { user_name }
            | AccountError::InvalidPassword { user_name }
            | AccountError::Store { user_name, .. } => Some(user_name),
            AccountError::InvalidInput(_) | AccountError::PasswordHashing(_) => None,
        }
    }
}

impl From<validator::ValidationErrors> for AccountError {
    fn from(err: validator::ValidationErrors) -> Self {
        AccountError::InvalidInput(err.to_string())
    }
}
