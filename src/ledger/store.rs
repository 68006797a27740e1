use std::{
    collections::HashSet,
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
};

use csv::StringRecord;
use tracing::{debug, info, warn};

use super::{
    date::DateRecord,
    entry::{ColumnIndex, LedgerEntry, LEDGER_HEADER},
};
use crate::errors::Result;

/// Reads and appends the yearly ledgers kept under `<root>/<year>/<year>.csv`.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    root: PathBuf,
}

impl LedgerStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding everything produced for `year`.
    pub fn year_dir(&self, year: i32) -> PathBuf {
        self.root.join(year.to_string())
    }

    pub fn ledger_path(&self, year: i32) -> PathBuf {
        self.year_dir(year).join(format!("{year}.csv"))
    }

    /// Loads every row of the ledger, or `None` when no ledger exists yet.
    pub fn load(&self, year: i32) -> Result<Option<Vec<LedgerEntry>>> {
        let path = self.ledger_path(year);
        if !path.exists() {
            debug!(path = %path.display(), "no ledger on disk");
            return Ok(None);
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_path(&path)?;
        let columns = ColumnIndex::from_headers(reader.headers()?);

        let mut entries = Vec::new();
        for record in reader.records() {
            entries.push(columns.entry(&record?));
        }
        debug!(path = %path.display(), rows = entries.len(), "ledger loaded");
        Ok(Some(entries))
    }

    /// Appends one row, creating the year directory and header on first use.
    ///
    /// New ledgers get the full six-column header. Rows added to an existing
    /// ledger are laid out to match the header already on disk.
    pub fn append(&self, year: i32, entry: &LedgerEntry) -> Result<PathBuf> {
        let dir = self.year_dir(year);
        fs::create_dir_all(&dir)?;
        let path = self.ledger_path(year);
        let is_new = !path.exists() || fs::metadata(&path)?.len() == 0;
        let existing = if is_new {
            None
        } else {
            Some(read_header(&path)?)
        };

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_writer(file);
        match &existing {
            None => {
                writer.write_record(LEDGER_HEADER)?;
                writer.write_record(entry.to_record())?;
            }
            Some(headers) => {
                if entry.sign_location.is_some()
                    && !headers.iter().any(|h| h.trim() == "sign_location")
                {
                    warn!(
                        path = %path.display(),
                        "ledger has no sign_location column, location not recorded"
                    );
                }
                writer.write_record(entry.record_for(headers))?;
            }
        }
        writer.flush()?;

        info!(path = %path.display(), from = %entry.from, to = %entry.to, "ledger row appended");
        Ok(path)
    }

    /// Every booked day of `year` as a membership set.
    ///
    /// Returns `None` when the ledger does not exist. Rows whose dates do not
    /// parse are skipped with a warning.
    pub fn taken_vacations(&self, year: i32) -> Result<Option<HashSet<DateRecord>>> {
        let Some(entries) = self.load(year)? else {
            return Ok(None);
        };
        let mut days = HashSet::new();
        for (idx, entry) in entries.iter().enumerate() {
            match entry.span() {
                Ok(span) => days.extend(span),
                Err(err) => warn!(row = idx + 1, %err, "skipping ledger row"),
            }
        }
        Ok(Some(days))
    }
}

fn read_header(path: &Path) -> Result<StringRecord> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    Ok(reader.headers()?.clone())
}
