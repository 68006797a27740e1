use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::VacationError;

/// Canonical text form used in ledgers and request forms.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Formats accepted from holiday lists. Unlike [`DateRecord::parse`] these
/// allow unpadded days and months.
const DAY_FIRST_FORMATS: &[&str] = &["%d.%m.%Y", "%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d"];

/// A calendar day, rendered as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateRecord(NaiveDate);

impl DateRecord {
    /// Strict `DD.MM.YYYY` parsing: two-digit day and month, four-digit year.
    pub fn parse(input: &str) -> Result<Self, VacationError> {
        let trimmed = input.trim();
        if !has_canonical_shape(trimmed) {
            return Err(VacationError::InvalidDate(trimmed.to_string()));
        }
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self)
            .map_err(|_| VacationError::InvalidDate(trimmed.to_string()))
    }

    /// Lenient day-first parsing for externally maintained holiday lists.
    pub fn parse_day_first(input: &str) -> Result<Self, VacationError> {
        let trimmed = input.trim();
        DAY_FIRST_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
            .map(Self)
            .ok_or_else(|| VacationError::InvalidDate(trimmed.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// The following calendar day, or `None` past chrono's supported range.
    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: DateRecord) -> i64 {
        (other.0 - self.0).num_days()
    }
}

fn has_canonical_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            2 | 5 => *byte == b'.',
            _ => byte.is_ascii_digit(),
        })
}

impl From<NaiveDate> for DateRecord {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for DateRecord {
    type Err = VacationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for DateRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateRecord::parse(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> DateRecord {
        NaiveDate::from_ymd_opt(year, month, day).unwrap().into()
    }

    #[test]
    fn display_is_day_first_with_padding() {
        let date = ymd(2024, 3, 1);
        assert_eq!(date.to_string(), "01.03.2024");
    }

    #[test]
    fn strict_parse_rejects_iso() {
        assert!(DateRecord::parse("2024-03-01").is_err());
        assert!(DateRecord::parse("31.02.2024").is_err());
        assert!(DateRecord::parse("1.7.2024").is_err());
        assert!(DateRecord::parse("01.07.24").is_err());
        assert_eq!(
            DateRecord::parse(" 29.02.2024 ").unwrap(),
            ymd(2024, 2, 29)
        );
    }

    #[test]
    fn day_first_accepts_common_variants() {
        let expected = ymd(2024, 12, 25);
        for raw in ["25.12.2024", "25/12/2024", "25-12-2024", "2024-12-25"] {
            assert_eq!(DateRecord::parse_day_first(raw).unwrap(), expected, "{raw}");
        }
        assert!(DateRecord::parse_day_first("12/25/2024").is_err());
        assert_eq!(
            DateRecord::parse_day_first("1.5.2024").unwrap(),
            ymd(2024, 5, 1)
        );
    }

    #[test]
    fn serde_uses_canonical_text() {
        let date = ymd(2025, 1, 6);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"06.01.2025\"");
        let back: DateRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
