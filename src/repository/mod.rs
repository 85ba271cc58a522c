pub mod clan;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

use crate::{constants::ClanSort, models::Clan};

pub use clan::MySqlClanStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// primary key already taken
    #[error("duplicate clan id")]
    Duplicate,

    #[error(transparent)]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => StoreError::Duplicate,
            _ => StoreError::Database(err),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Row-level access to the `clans` table. Ids passed in are canonical
/// hyphenated uuids; validation happens before a store is reached.
#[async_trait]
pub trait ClanStore: Send + Sync {
    async fn insert(&self, clan: &Clan) -> StoreResult<()>;

    /// Inserts every clan or none of them.
    async fn insert_many(&self, clans: &[Clan]) -> StoreResult<u64>;

    async fn fetch_all(&self, region: Option<&str>, sort: ClanSort) -> StoreResult<Vec<Clan>>;

    async fn fetch_by_id(&self, id: &str) -> StoreResult<Option<Clan>>;

    /// Returns the number of rows removed.
    async fn delete_by_id(&self, id: &str) -> StoreResult<u64>;
}
