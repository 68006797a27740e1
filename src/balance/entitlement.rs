use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{de, Deserialize, Deserializer};
use tracing::debug;

use crate::errors::{Result, VacationError};

/// Vacation days granted for one year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct EntitlementRecord {
    #[serde(rename = "vacation_from_previous_year", default, deserialize_with = "day_count")]
    pub carried_over: u32,
    #[serde(rename = "vacation_from_this_year", default, deserialize_with = "day_count")]
    pub base_allowance: u32,
    #[serde(rename = "special_vacation", default, deserialize_with = "day_count")]
    pub special_allowance: u32,
}

impl EntitlementRecord {
    pub fn total(&self) -> i64 {
        i64::from(self.carried_over)
            + i64::from(self.base_allowance)
            + i64::from(self.special_allowance)
    }
}

/// Entitlements keyed by year, as stored in the entitlement JSON file.
///
/// Years are only validated when looked up, so a bad entry for one year does
/// not affect the others.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct EntitlementBook {
    years: BTreeMap<String, serde_json::Map<String, serde_json::Value>>,
    #[serde(skip)]
    source: PathBuf,
}

impl EntitlementBook {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(VacationError::MissingFile(path.to_path_buf()));
        }
        let data = fs::read_to_string(path)?;
        let mut book: Self = serde_json::from_str(&data)
            .map_err(|err| VacationError::malformed(path, err.to_string()))?;
        book.source = path.to_path_buf();
        debug!(path = %path.display(), years = book.years.len(), "entitlements loaded");
        Ok(book)
    }

    /// Entitlement for `year`; `Ok(None)` when the year is absent or empty.
    pub fn record_for(&self, year: i32) -> Result<Option<EntitlementRecord>> {
        let Some(fields) = self.years.get(&year.to_string()) else {
            return Ok(None);
        };
        if fields.is_empty() {
            return Ok(None);
        }
        parse_record(fields)
            .map(Some)
            .map_err(|err| VacationError::malformed(&self.source, format!("year {year}: {err}")))
    }
}

fn parse_record(
    fields: &serde_json::Map<String, serde_json::Value>,
) -> serde_json::Result<EntitlementRecord> {
    EntitlementRecord::deserialize(serde_json::Value::Object(fields.clone()))
}

/// Accepts `5` as well as `"5"`.
fn day_count<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.trim().parse().map_err(|_| {
            de::Error::custom(format!("`{text}` is not a non-negative whole number of days"))
        }),
    }
}
