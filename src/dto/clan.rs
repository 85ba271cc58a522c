use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ClanError, ClanResult};

/// Loosely-typed clan payload narrowed to `field -> Option<String>`.
///
/// A missing key and an explicit `null` are kept apart: `get` returns
/// `None` for the former and `Some(None)` for the latter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawClan {
    fields: HashMap<String, Option<String>>,
}

impl RawClan {
    pub fn from_json(value: Value) -> ClanResult<Self> {
        match value {
            Value::Object(object) => Self::from_object(object),
            _ => Err(ClanError::InvalidBody("expected a JSON object")),
        }
    }

    pub fn from_object(object: Map<String, Value>) -> ClanResult<Self> {
        let mut fields = HashMap::with_capacity(object.len());

        for (key, value) in object {
            let value = match value {
                Value::Null => None,
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
                    return Err(ClanError::InvalidField(key));
                },
            };

            fields.insert(key, value);
        }

        Ok(Self { fields })
    }

    pub fn get(&self, field: &str) -> Option<Option<&str>> {
        self.fields.get(field).map(|v| v.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListClans {
    pub region: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClanCreated {
    pub id: String,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub imported: u64,
    pub skipped: u64,
}

#[derive(Debug, Serialize)]
pub struct ClansImported {
    #[serde(flatten)]
    pub summary: ImportSummary,
    pub message: &'static str,
}
