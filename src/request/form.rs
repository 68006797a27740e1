use chrono::NaiveDateTime;

use crate::{
    errors::{Result, VacationError},
    ledger::{DateRecord, Interval, LedgerEntry},
};

const MIN_FIELDS: usize = 4;
const MAX_FIELDS: usize = 5;

/// A validated vacation request: `from to days sign_date [sign_location]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestForm {
    pub interval: Interval,
    pub days: u32,
    pub sign_date: DateRecord,
    pub sign_location: Option<String>,
    texts: Vec<String>,
}

impl RequestForm {
    pub fn parse(texts: &[String]) -> Result<Self> {
        if !(MIN_FIELDS..=MAX_FIELDS).contains(&texts.len()) {
            return Err(VacationError::InvalidInput(format!(
                "expected from, to, days, sign_date and an optional sign_location, got {} value(s)",
                texts.len()
            )));
        }

        let from = DateRecord::parse(&texts[0])?;
        let to = DateRecord::parse(&texts[1])?;
        let sign_date = DateRecord::parse(&texts[3])?;
        let interval = Interval::new(from, to)?;
        let days = texts[2].trim().parse::<u32>().map_err(|_| {
            VacationError::InvalidInput(format!(
                "days must be a whole number, got `{}`",
                texts[2]
            ))
        })?;

        Ok(Self {
            interval,
            days,
            sign_date,
            sign_location: texts.get(4).cloned(),
            texts: texts.to_vec(),
        })
    }

    /// The ledger the request belongs to, taken from its first day.
    pub fn year(&self) -> i32 {
        self.interval.start().year()
    }

    /// The values exactly as entered, in stamping order.
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn ledger_entry(&self, recorded_at: NaiveDateTime) -> LedgerEntry {
        LedgerEntry::new(
            self.interval.start(),
            self.interval.end(),
            self.days,
            self.sign_date,
            self.sign_location.clone(),
            recorded_at,
        )
    }

    /// `<prefix>_<from>_<days>d_<family_name>.pdf`
    pub fn output_file_name(&self, prefix: &str, family_name: &str) -> String {
        format!(
            "{prefix}_{}_{}d_{family_name}.pdf",
            self.interval.start(),
            self.days
        )
    }
}
