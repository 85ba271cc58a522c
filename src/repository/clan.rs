use async_trait::async_trait;

use super::{ClanStore, StoreResult};
use crate::{constants::ClanSort, infrastructure::database::DbPoolManager, models::Clan};

const SELECT_CLANS: &str = "select id, name, region, created_at from clans";

/// Builds the list statement from fixed fragments only. The region value,
/// when there is one, is bound to the single placeholder.
pub fn list_query(filter_by_region: bool, sort: ClanSort) -> String {
    let mut query = String::from(SELECT_CLANS);

    // the column's default collation is case-insensitive
    if filter_by_region {
        query.push_str(" where region = ? collate utf8mb4_bin");
    }

    // id keeps ties (same name, same second) in a stable order
    query.push_str(" order by ");
    query.push_str(sort.column());
    query.push_str(", id");

    query
}

#[derive(Clone)]
pub struct MySqlClanStore {
    db: DbPoolManager,
}

impl MySqlClanStore {
    pub fn new(db: DbPoolManager) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClanStore for MySqlClanStore {
    async fn insert(&self, clan: &Clan) -> StoreResult<()> {
        sqlx::query("insert into clans (id, name, region, created_at) values (?, ?, ?, ?)")
            .bind(&clan.id)
            .bind(&clan.name)
            .bind(&clan.region)
            .bind(clan.created_at)
            .execute(self.db.as_ref())
            .await?;

        Ok(())
    }

    async fn insert_many(&self, clans: &[Clan]) -> StoreResult<u64> {
        let mut tx = self.db.begin().await?;
        let mut inserted = 0;

        for clan in clans {
            inserted += sqlx::query(
                "insert into clans (id, name, region, created_at) values (?, ?, ?, ?)",
            )
            .bind(&clan.id)
            .bind(&clan.name)
            .bind(&clan.region)
            .bind(clan.created_at)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }

        // dropping `tx` on an early return rolls everything back
        tx.commit().await?;

        Ok(inserted)
    }

    async fn fetch_all(&self, region: Option<&str>, sort: ClanSort) -> StoreResult<Vec<Clan>> {
        let query = list_query(region.is_some(), sort);

        let mut statement = sqlx::query_as::<_, Clan>(&query);
        if let Some(region) = region {
            statement = statement.bind(region);
        }

        let clans = statement.fetch_all(self.db.as_ref()).await?;

        Ok(clans)
    }

    async fn fetch_by_id(&self, id: &str) -> StoreResult<Option<Clan>> {
        let clan = sqlx::query_as::<_, Clan>(
            "select id, name, region, created_at from clans where id = ?",
        )
        .bind(id)
        .fetch_optional(self.db.as_ref())
        .await?;

        Ok(clan)
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<u64> {
        let deleted = sqlx::query("delete from clans where id = ?")
            .bind(id)
            .execute(self.db.as_ref())
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_without_filter() {
        assert_eq!(
            list_query(false, ClanSort::CreatedAt),
            "select id, name, region, created_at from clans order by created_at, id"
        );
    }

    #[test]
    fn list_with_region_filter_uses_placeholder() {
        assert_eq!(
            list_query(true, ClanSort::Name),
            "select id, name, region, created_at from clans \
             where region = ? collate utf8mb4_bin order by name, id"
        );
    }

    #[test]
    fn region_filter_compares_bytes() {
        for sort in [ClanSort::Name, ClanSort::CreatedAt] {
            assert!(list_query(true, sort).contains("region = ? collate utf8mb4_bin"));
        }
    }

    #[test]
    fn unknown_sort_builds_default_statement() {
        assert_eq!(
            list_query(false, ClanSort::from_param(Some("bogus"))),
            list_query(false, ClanSort::from_param(None))
        );
    }
}
