use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    constants::ClanSort,
    dto::clan::{ImportSummary, RawClan},
    error::{ClanError, ClanResult},
    models::{Clan, NewClan},
    repository::{ClanStore, StoreError},
    usecases::validate::validate_imported_clan,
};

/// first insert plus one retry with a fresh id
const CREATE_ATTEMPTS: usize = 2;

/// Turns validated clans and list parameters into store calls.
#[derive(Clone)]
pub struct ClanGateway {
    store: Arc<dyn ClanStore>,
}

impl ClanGateway {
    pub fn new(store: Arc<dyn ClanStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, new_clan: NewClan) -> ClanResult<String> {
        let now = now();

        for attempt in 1..=CREATE_ATTEMPTS {
            let clan = new_clan.clone().into_clan(Uuid::new_v4().to_string(), now);

            match self.store.insert(&clan).await {
                Ok(()) => {
                    tracing::info!(id = %clan.id, name = %clan.name, "clan created");
                    return Ok(clan.id);
                },
                Err(StoreError::Duplicate) => {
                    tracing::warn!(id = %clan.id, attempt, "generated clan id already taken");
                },
                Err(err) => return Err(storage_error("create", Some(&clan.id), err)),
            }
        }

        tracing::error!(attempts = CREATE_ATTEMPTS, "could not find a free clan id");
        Err(ClanError::Conflict)
    }

    pub async fn list(&self, region: Option<&str>, sort: ClanSort) -> ClanResult<Vec<Clan>> {
        // an empty region means no filter at all
        let region = region.filter(|r| !r.is_empty());

        self.store
            .fetch_all(region, sort)
            .await
            .map_err(|err| storage_error("list", None, err))
    }

    pub async fn get(&self, id: &str) -> ClanResult<Clan> {
        let id = parse_id(id)?;

        match self.store.fetch_by_id(&id).await {
            Ok(Some(clan)) => Ok(clan),
            Ok(None) => Err(ClanError::NotFound),
            Err(err) => Err(storage_error("get", Some(&id), err)),
        }
    }

    pub async fn delete(&self, id: &str) -> ClanResult<()> {
        let id = parse_id(id)?;

        let deleted = self
            .store
            .delete_by_id(&id)
            .await
            .map_err(|err| storage_error("delete", Some(&id), err))?;

        if deleted == 0 {
            return Err(ClanError::NotFound);
        }

        tracing::info!(id = %id, "clan deleted");
        Ok(())
    }

    /// Batch ingestion. Records that fail validation (including an
    /// unparseable `created_at`) are dropped and counted, the rest are
    /// written in one transaction.
    pub async fn import(&self, records: Vec<Value>) -> ClanResult<ImportSummary> {
        let now = now();
        let mut summary = ImportSummary::default();
        let mut clans = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            match RawClan::from_json(record).and_then(|raw| validate_imported_clan(&raw)) {
                Ok(new_clan) => clans.push(new_clan.into_clan(Uuid::new_v4().to_string(), now)),
                Err(err) => {
                    tracing::debug!(index, %err, "skipping clan record");
                    summary.skipped += 1;
                },
            }
        }

        if clans.is_empty() {
            return Ok(summary);
        }

        summary.imported = match self.store.insert_many(&clans).await {
            Ok(inserted) => inserted,
            Err(StoreError::Duplicate) => {
                tracing::error!(count = clans.len(), "clan id collision during import");
                return Err(ClanError::Conflict);
            },
            Err(err) => return Err(storage_error("import", None, err)),
        };

        tracing::info!(
            imported = summary.imported,
            skipped = summary.skipped,
            "clans imported"
        );

        Ok(summary)
    }
}

/// Accepts the hyphenated form only, in any case, and returns it lowercased
/// as stored.
fn parse_id(id: &str) -> ClanResult<String> {
    if id.len() != 36 {
        return Err(ClanError::invalid_field("id"));
    }

    Uuid::try_parse(id)
        .map(|uuid| uuid.hyphenated().to_string())
        .map_err(|_| ClanError::invalid_field("id"))
}

// the column has second precision
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

fn storage_error(operation: &'static str, id: Option<&str>, err: StoreError) -> ClanError {
    tracing::error!(operation, id, error = %err, "clan store failure");

    ClanError::Storage(err)
}
