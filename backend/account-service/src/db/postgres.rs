//! PostgreSQL-backed user store

use super::UserStore;
use crate::config::DatabaseSettings;
use crate::error::{AccountError, Result};
use crate::models::{NewUserRecord, UserRecord};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::info;

/// User store over the `users` table
///
/// Uniqueness of `user_name` is enforced by the table's `UNIQUE` constraint.
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a connection pool from settings
    pub async fn connect(settings: &DatabaseSettings) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(Duration::from_secs(settings.acquire_timeout))
            .connect(&settings.url)
            .await?;

        info!(
            "Database pool initialized with {} max connections",
            settings.max_connections
        );

        Ok(Self::new(pool))
    }

    /// Apply the embedded migrations
    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Database migrations completed");
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl UserStore for PgUserStore {
    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            "SELECT id, user_name, password_hash, registered_at FROM users WHERE user_name = $1",
        )
        .bind(user_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::store(user_name, e))?;

        Ok(user)
    }

    async fn save(&self, user: NewUserRecord) -> Result<UserRecord> {
        let result = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (user_name, password_hash, registered_at)
            VALUES ($1, $2, CURRENT_TIMESTAMP)
            RETURNING id, user_name, password_hash, registered_at
            "#,
        )
        .bind(&user.user_name)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(record) => Ok(record),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AccountError::DuplicateUserName {
                    user_name: user.user_name,
                })
            }
            Err(e) => Err(AccountError::store(&user.user_name, e)),
        }
    }
}
