use chrono::{DateTime, NaiveDateTime, Utc};

use crate::{
    dto::clan::RawClan,
    error::{ClanError, ClanResult},
    models::NewClan,
};

pub const MAX_NAME_LENGTH: usize = 100;

/// `YYYY-MM-DD HH:MM:SS`, as stored in the `created_at` column.
pub const DB_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// bounds of a mysql TIMESTAMP column
const MIN_TIMESTAMP: i64 = 1;
const MAX_TIMESTAMP: i64 = 2_147_483_647;

pub fn validate_name(name: Option<Option<&str>>) -> ClanResult<String> {
    let name = name.flatten().map(str::trim).unwrap_or_default();

    if name.is_empty() || name.chars().count() > MAX_NAME_LENGTH {
        return Err(ClanError::invalid_field("name"));
    }

    Ok(name.to_string())
}

/// Exactly two ASCII uppercase letters. Nothing is trimmed or upper-cased.
pub fn validate_region(region: Option<Option<&str>>) -> ClanResult<Option<String>> {
    let Some(region) = region.flatten() else {
        return Ok(None);
    };

    let is_code = region.len() == 2 && region.bytes().all(|b| b.is_ascii_uppercase());
    if !is_code {
        return Err(ClanError::invalid_field("region"));
    }

    Ok(Some(region.to_string()))
}

/// Epoch seconds (as digits) or an already formatted `YYYY-MM-DD HH:MM:SS`.
pub fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    let timestamp = if let Ok(secs) = raw.parse::<i64>() {
        DateTime::from_timestamp(secs, 0)?
    } else if has_db_timestamp_shape(raw) {
        NaiveDateTime::parse_from_str(raw, DB_TIMESTAMP_FORMAT)
            .ok()?
            .and_utc()
    } else {
        return None;
    };

    (MIN_TIMESTAMP..=MAX_TIMESTAMP)
        .contains(&timestamp.timestamp())
        .then_some(timestamp)
}

// chrono accepts unpadded fields, the column format doesn't
fn has_db_timestamp_shape(raw: &str) -> bool {
    raw.len() == 19
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            10 => b == b' ',
            13 | 16 => b == b':',
            _ => b.is_ascii_digit(),
        })
}

/// Validates a clan coming through the regular API. Any `created_at` in the
/// payload is ignored; the server always picks the creation time.
pub fn validate_new_clan(raw: &RawClan) -> ClanResult<NewClan> {
    Ok(NewClan {
        name: validate_name(raw.get("name"))?,
        region: validate_region(raw.get("region"))?,
        created_at: None,
    })
}

/// Validates a clan coming through batch import, where `created_at` may be
/// supplied. A present but unparseable timestamp fails the record.
pub fn validate_imported_clan(raw: &RawClan) -> ClanResult<NewClan> {
    let created_at = match raw.get("created_at").flatten() {
        Some(value) => {
            Some(parse_created_at(value).ok_or_else(|| ClanError::invalid_field("created_at"))?)
        },
        None => None,
    };

    Ok(NewClan {
        created_at,
        ..validate_new_clan(raw)?
    })
}
