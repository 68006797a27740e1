//! Dates, intervals and the append-only yearly vacation ledger.

pub mod date;
pub mod entry;
pub mod interval;
pub mod store;

pub use date::{DateRecord, DATE_FORMAT};
pub use entry::{LedgerEntry, RECORDED_AT_FORMAT};
pub use interval::{expand, DateRange, Interval};
pub use store::LedgerStore;
