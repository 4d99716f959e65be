/// Signup and login decisions over a user store and a password hasher
use crate::db::UserStore;
use crate::error::{AccountError, Result};
use crate::models::{Credentials, NewUserRecord, UserRecord};
use crate::security::PasswordHasher;
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

/// Account service
///
/// Holds no mutable state; clones share the same collaborators.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl AccountService {
    pub fn new(store: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    /// Register a new user
    ///
    /// Fails with `DuplicateUserName` if the user name is taken and writes
    /// nothing in that case.
    pub async fn register(&self, user_name: &str, password: &str) -> Result<UserRecord> {
        Credentials::new(user_name, password).validate()?;

        if self.store.find_by_user_name(user_name).await?.is_some() {
            warn!(user_name = %user_name, "Registration rejected: user name already taken");
            return Err(AccountError::DuplicateUserName {
                user_name: user_name.to_string(),
            });
        }

        let password_hash = self.hasher.hash_password(password)?;

        // A concurrent registration may still win the race; the store rejects it
        let user = self
            .store
            .save(NewUserRecord {
                user_name: user_name.to_string(),
                password_hash,
            })
            .await?;

        info!(
            user_id = user.id,
            user_name = %user.user_name,
            "User registered successfully"
        );

        Ok(user)
    }

    /// Authenticate a user by user name and password
    pub async fn authenticate(&self, user_name: &str, password: &str) -> Result<UserRecord> {
        Credentials::new(user_name, password).validate()?;

        let user = self
            .store
            .find_by_user_name(user_name)
            .await?
            .ok_or_else(|| {
                warn!(user_name = %user_name, "Login rejected: user not found");
                AccountError::UserNotFound {
                    user_name: user_name.to_string(),
                }
            })?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = user.id, user_name = %user_name, "Login rejected: invalid password");
            return Err(AccountError::InvalidPassword {
                user_name: user_name.to_string(),
            });
        }

        info!(user_id = user.id, user_name = %user.user_name, "User authenticated");

        Ok(user)
    }
}
