/// User record stores for account service
use crate::error::Result;
use crate::models::{NewUserRecord, UserRecord};

mod memory;
mod postgres;

pub use memory::InMemoryUserStore;
pub use postgres::PgUserStore;

/// Persistence seam for user records.
///
/// Implementations own the at-most-one-record-per-user-name invariant: `save`
/// must reject a second record for the same user name atomically with
/// `AccountError::DuplicateUserName`, even when two saves race.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by exact user name
    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<UserRecord>>;

    /// Persist a new user and return the stored record
    async fn save(&self, user: NewUserRecord) -> Result<UserRecord>;
}
