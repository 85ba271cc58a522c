use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use sqlx::FromRow;

/// `YYYY-MM-DDTHH:MM:SSZ`, the only shape `created_at` leaves the service in.
pub const API_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Clan {
    pub id: String,
    pub name: String,
    pub region: Option<String>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

/// A validated clan that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClan {
    pub name: String,
    pub region: Option<String>,
    /// only the import path carries a timestamp, otherwise the server picks one
    pub created_at: Option<DateTime<Utc>>,
}

impl NewClan {
    pub fn into_clan(self, id: String, now: DateTime<Utc>) -> Clan {
        Clan {
            id,
            name: self.name,
            region: self.region,
            created_at: self.created_at.unwrap_or(now),
        }
    }
}

fn serialize_timestamp<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&ts.format(API_TIMESTAMP_FORMAT))
}
