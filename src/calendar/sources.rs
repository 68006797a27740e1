use std::path::Path;

use csv::StringRecord;
use tracing::debug;

use super::classify::MembershipSet;
use crate::{
    errors::{Result, VacationError},
    ledger::{expand, DateRecord},
};

/// Loads legal holidays from a CSV with a `date` column.
///
/// Returns `None` when the file does not exist.
pub fn read_legal_holidays(path: &Path) -> Result<Option<MembershipSet>> {
    let Some((headers, rows)) = read_table(path)? else {
        return Ok(None);
    };
    let date_col = column(path, &headers, "date")?;

    let mut days = MembershipSet::new();
    for (line, row) in rows.iter().enumerate() {
        days.insert(parse_cell(path, row, date_col, line)?);
    }
    debug!(path = %path.display(), count = days.len(), "legal holidays loaded");
    Ok(Some(days))
}

/// Loads school holiday periods from a CSV with `start` and `end` columns,
/// expanding every period into its days.
///
/// Returns `None` when the file does not exist.
pub fn read_school_holidays(path: &Path) -> Result<Option<MembershipSet>> {
    let Some((headers, rows)) = read_table(path)? else {
        return Ok(None);
    };
    let start_col = column(path, &headers, "start")?;
    let end_col = column(path, &headers, "end")?;

    let mut days = MembershipSet::new();
    for (line, row) in rows.iter().enumerate() {
        let start = parse_cell(path, row, start_col, line)?;
        let end = parse_cell(path, row, end_col, line)?;
        days.extend(expand(start, end));
    }
    debug!(path = %path.display(), count = days.len(), "school holidays loaded");
    Ok(Some(days))
}

fn read_table(path: &Path) -> Result<Option<(StringRecord, Vec<StringRecord>)>> {
    if !path.exists() {
        return Ok(None);
    }
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let headers = reader.headers()?.clone();
    let rows = reader
        .records()
        .filter(|row| !matches!(row, Ok(record) if record.iter().all(str::is_empty)))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(Some((headers, rows)))
}

fn column(path: &Path, headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| VacationError::malformed(path, format!("missing `{name}` column")))
}

fn parse_cell(path: &Path, row: &StringRecord, col: usize, line: usize) -> Result<DateRecord> {
    let raw = row.get(col).unwrap_or_default();
    DateRecord::parse_day_first(raw).map_err(|err| {
        // +2: one for the header, one for 1-based numbering
        VacationError::malformed(path, format!("row {}: {err}", line + 2))
    })
}
