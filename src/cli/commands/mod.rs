//! One `run` function per binary.

pub mod balance;
pub mod calendar;
pub mod request;
