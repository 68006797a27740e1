//! Remaining vacation balance: entitlement minus the days booked in the ledger.

pub mod entitlement;

use std::fmt;

pub use entitlement::{EntitlementBook, EntitlementRecord};

use crate::{errors::Result, ledger::LedgerEntry};

/// Entitlement total minus every whole day booked in `ledger`.
///
/// Rows whose `days` column is empty or not numeric count as zero. A negative
/// result means the balance is overdrawn.
pub fn compute_remaining(entitlement: &EntitlementRecord, ledger: &[LedgerEntry]) -> i64 {
    entitlement.total().saturating_sub(taken_days(ledger))
}

pub fn taken_days(ledger: &[LedgerEntry]) -> i64 {
    ledger
        .iter()
        .filter_map(LedgerEntry::days_taken)
        .map(|days| i64::try_from(days).unwrap_or(i64::MAX))
        .fold(0, i64::saturating_add)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceReport {
    pub year: i32,
    pub total: i64,
    pub taken: i64,
    pub remaining: i64,
}

impl fmt::Display for BalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Year: {}", self.year)?;
        writeln!(f, "Total vacation entitlement: {:2}", self.total)?;
        writeln!(f, "Taken vacations:            {:2}", self.taken)?;
        write!(f, "Remaining vacations:        {:2}", self.remaining)
    }
}

/// Result of a balance lookup. `NoData` is not the same as a zero balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceOutcome {
    NoData { year: i32 },
    Report(BalanceReport),
}

/// Looks up `year` in `book` and settles it against `ledger`.
///
/// `ledger` is `None` when no ledger file exists, which counts as nothing
/// taken. Only the entry for `year` is validated.
pub fn balance_for_year(
    book: &EntitlementBook,
    year: i32,
    ledger: Option<&[LedgerEntry]>,
) -> Result<BalanceOutcome> {
    let Some(entitlement) = book.record_for(year)? else {
        return Ok(BalanceOutcome::NoData { year });
    };
    let ledger = ledger.unwrap_or_default();
    Ok(BalanceOutcome::Report(BalanceReport {
        year,
        total: entitlement.total(),
        taken: taken_days(ledger),
        remaining: compute_remaining(&entitlement, ledger),
    }))
}
