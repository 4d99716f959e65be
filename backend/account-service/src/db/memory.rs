//! In-process user store

use super::UserStore;
use crate::error::{AccountError, Result};
use crate::models::{NewUserRecord, UserRecord};
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// User store held in a concurrent map, keyed by user name
///
/// Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<DashMap<String, UserRecord>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<UserRecord>> {
        Ok(self.users.get(user_name).map(|entry| entry.value().clone()))
    }

    async fn save(&self, user: NewUserRecord) -> Result<UserRecord> {
        // The entry guard holds the shard lock, so check-and-insert is atomic
        match self.users.entry(user.user_name) {
            Entry::Occupied(entry) => Err(AccountError::DuplicateUserName {
                user_name: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                let record = UserRecord {
                    id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
                    user_name: entry.key().clone(),
                    password_hash: user.password_hash,
                    registered_at: Utc::now(),
                };
                entry.insert(record.clone());
                Ok(record)
            }
        }
    }
}
