//! Argument parsing, user-facing output and the per-tool entry points.

pub mod args;
pub mod commands;
pub mod output;

pub use args::{BalanceArgs, CalendarArgs, CommonArgs, RequestArgs};
pub use output::{MessageKind, Output};
