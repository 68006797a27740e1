#![doc(test(attr(deny(warnings))))]

//! Vacation Core keeps a personal vacation ledger: it expands booked and
//! school-holiday periods into days, classifies calendar days for display,
//! settles the yearly balance and stamps vacation request forms.

pub mod balance;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod request;
pub mod utils;

pub use errors::{Result, VacationError};

/// Initializes tracing for a binary run and logs startup at debug level.
pub fn init(verbosity: u8) {
    utils::init_tracing(verbosity);
    tracing::debug!("Vacation Core tracing initialized.");
}
