//! In-memory `ClanStore` for tests

use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{ClanStore, StoreError, StoreResult};
use crate::{constants::ClanSort, models::Clan};

#[derive(Clone, Default)]
pub struct MockClanStore {
    clans: Arc<Mutex<Vec<Clan>>>,
    /// inserts left that will report a duplicate id regardless of content
    forced_collisions: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
    insert_attempts: Arc<AtomicUsize>,
}

impl MockClanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn force_collisions(&self, count: usize) {
        self.forced_collisions.store(count, Ordering::SeqCst);
    }

    /// Every call fails with a database error while set.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn insert_attempts(&self) -> usize {
        self.insert_attempts.load(Ordering::SeqCst)
    }

    pub async fn clans(&self) -> Vec<Clan> {
        self.clans.lock().await.clone()
    }

    fn check_failing(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }

        Ok(())
    }

    fn take_collision(&self) -> bool {
        self.forced_collisions
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl ClanStore for MockClanStore {
    async fn insert(&self, clan: &Clan) -> StoreResult<()> {
        self.check_failing()?;
        self.insert_attempts.fetch_add(1, Ordering::SeqCst);

        let mut clans = self.clans.lock().await;
        if self.take_collision() || clans.iter().any(|c| c.id == clan.id) {
            return Err(StoreError::Duplicate);
        }

        clans.push(clan.clone());
        Ok(())
    }

    async fn insert_many(&self, new_clans: &[Clan]) -> StoreResult<u64> {
        self.check_failing()?;

        let mut clans = self.clans.lock().await;
        for (i, clan) in new_clans.iter().enumerate() {
            let taken = clans.iter().any(|c| c.id == clan.id)
                || new_clans[..i].iter().any(|c| c.id == clan.id);
            if taken {
                return Err(StoreError::Duplicate);
            }
        }

        clans.extend(new_clans.iter().cloned());
        Ok(new_clans.len() as u64)
    }

    async fn fetch_all(&self, region: Option<&str>, sort: ClanSort) -> StoreResult<Vec<Clan>> {
        self.check_failing()?;

        let mut clans: Vec<Clan> = self
            .clans
            .lock()
            .await
            .iter()
            .filter(|c| region.is_none() || c.region.as_deref() == region)
            .cloned()
            .collect();

        match sort {
            ClanSort::Name => clans.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id))),
            ClanSort::CreatedAt => {
                clans.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)))
            },
        }

        Ok(clans)
    }

    async fn fetch_by_id(&self, id: &str) -> StoreResult<Option<Clan>> {
        self.check_failing()?;

        Ok(self.clans.lock().await.iter().find(|c| c.id == id).cloned())
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<u64> {
        self.check_failing()?;

        let mut clans = self.clans.lock().await;
        let before = clans.len();
        clans.retain(|c| c.id != id);

        Ok((before - clans.len()) as u64)
    }
}
