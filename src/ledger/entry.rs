use chrono::NaiveDateTime;
use csv::StringRecord;

use super::{
    date::DateRecord,
    interval::{expand, DateRange},
};
use crate::errors::VacationError;

pub const RECORDED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Column order of every ledger this crate creates.
pub(crate) const LEDGER_HEADER: &[&str] = &[
    "from",
    "to",
    "days",
    "sign_date",
    "sign_location",
    "recorded_at",
];

/// Older ledgers name the timestamp column `datetime`.
const LEGACY_RECORDED_AT: &str = "datetime";

/// One row of a yearly ledger.
///
/// Columns are kept as the text found in the file because the ledger is also
/// edited by hand; the accessors parse on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerEntry {
    pub from: String,
    pub to: String,
    pub days: String,
    pub sign_date: String,
    pub sign_location: Option<String>,
    pub recorded_at: String,
}

impl LedgerEntry {
    pub fn new(
        from: DateRecord,
        to: DateRecord,
        days: u32,
        sign_date: DateRecord,
        sign_location: Option<String>,
        recorded_at: NaiveDateTime,
    ) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            days: days.to_string(),
            sign_date: sign_date.to_string(),
            sign_location,
            recorded_at: recorded_at.format(RECORDED_AT_FORMAT).to_string(),
        }
    }

    /// Whole days booked by this row; `None` when the column is empty or not
    /// a plain non-negative integer.
    pub fn days_taken(&self) -> Option<u64> {
        let raw = self.days.trim();
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        raw.parse().ok()
    }

    /// Every day between `from` and `to`; empty when the row is inverted.
    pub fn span(&self) -> Result<DateRange, VacationError> {
        let from = DateRecord::parse(&self.from)?;
        let to = DateRecord::parse(&self.to)?;
        Ok(expand(from, to))
    }

    /// Fields in [`LEDGER_HEADER`] order; a missing location is left empty.
    pub(crate) fn to_record(&self) -> Vec<&str> {
        LEDGER_HEADER.iter().map(|column| self.field(column)).collect()
    }

    /// Fields laid out to match an existing header. Unknown columns stay
    /// empty.
    pub(crate) fn record_for(&self, headers: &StringRecord) -> Vec<&str> {
        headers.iter().map(|column| self.field(column.trim())).collect()
    }

    fn field(&self, column: &str) -> &str {
        match column {
            "from" => self.from.as_str(),
            "to" => self.to.as_str(),
            "days" => self.days.as_str(),
            "sign_date" => self.sign_date.as_str(),
            "sign_location" => self.sign_location.as_deref().unwrap_or(""),
            "recorded_at" | LEGACY_RECORDED_AT => self.recorded_at.as_str(),
            _ => "",
        }
    }
}

/// Positions of the known columns within a ledger header.
#[derive(Debug, Clone, Default)]
pub(crate) struct ColumnIndex {
    from: Option<usize>,
    to: Option<usize>,
    days: Option<usize>,
    sign_date: Option<usize>,
    sign_location: Option<usize>,
    recorded_at: Option<usize>,
}

impl ColumnIndex {
    pub(crate) fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        Self {
            from: find("from"),
            to: find("to"),
            days: find("days"),
            sign_date: find("sign_date"),
            sign_location: find("sign_location"),
            recorded_at: find("recorded_at").or_else(|| find(LEGACY_RECORDED_AT)),
        }
    }

    /// Maps fields by position, like a dict reader: short rows leave columns
    /// empty and surplus fields are ignored.
    pub(crate) fn entry(&self, record: &StringRecord) -> LedgerEntry {
        let field = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .map(str::to_string)
                .unwrap_or_default()
        };
        LedgerEntry {
            from: field(self.from),
            to: field(self.to),
            days: field(self.days),
            sign_date: field(self.sign_date),
            sign_location: self
                .sign_location
                .and_then(|i| record.get(i))
                .filter(|value| !value.is_empty())
                .map(str::to_string),
            recorded_at: field(self.recorded_at),
        }
    }
}
