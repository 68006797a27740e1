use std::path::PathBuf;

use clap::{ArgAction, Args, Parser};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " ",
    env!("VACATION_CORE_BUILD_INFO")
);

/// Flags shared by every tool.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Settings file (defaults to $VACATION_CORE_SETTINGS or the user config dir).
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Draw a yearly calendar with weekends, holidays and booked vacation highlighted.
#[derive(Parser, Debug)]
#[command(name = "vacation_calendar", version, long_version = LONG_VERSION)]
pub struct CalendarArgs {
    /// Year to draw.
    pub year: i32,

    /// CSV with a `date` column listing legal holidays.
    pub legal_holidays: Option<PathBuf>,

    /// CSV with `start` and `end` columns listing school holiday periods.
    pub school_holidays: Option<PathBuf>,

    /// Also write the calendar as an SVG image.
    #[arg(long, value_name = "PATH")]
    pub svg: Option<PathBuf>,

    /// Print without colors.
    #[arg(long)]
    pub plain: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Show the remaining vacation days for a year.
#[derive(Parser, Debug)]
#[command(name = "vacation_balance", version, long_version = LONG_VERSION)]
pub struct BalanceArgs {
    /// Year to settle.
    pub year: i32,

    /// JSON file with the yearly entitlements.
    pub entitlement: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Fill in a vacation request PDF and book it in the yearly ledger.
#[derive(Parser, Debug)]
#[command(name = "vacation_request", version, long_version = LONG_VERSION)]
pub struct RequestArgs {
    /// Request form template.
    pub pdf: PathBuf,

    /// JSON file with the text positions and output naming.
    pub config: PathBuf,

    /// from, to, days, sign_date and optionally sign_location.
    #[arg(required = true, num_args = 1..)]
    pub texts: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn argument_definitions_are_consistent() {
        CalendarArgs::command().debug_assert();
        BalanceArgs::command().debug_assert();
        RequestArgs::command().debug_assert();
    }

    #[test]
    fn calendar_positionals_are_optional() {
        let args = CalendarArgs::try_parse_from(["vacation_calendar", "2024", "-vv"]).unwrap();
        assert_eq!(args.year, 2024);
        assert!(args.legal_holidays.is_none());
        assert_eq!(args.common.verbose, 2);
    }

    #[test]
    fn request_collects_texts() {
        let args = RequestArgs::try_parse_from([
            "vacation_request",
            "form.pdf",
            "positions.json",
            "01.07.2024",
            "05.07.2024",
            "5",
            "20.06.2024",
        ])
        .unwrap();
        assert_eq!(args.texts.len(), 4);
        assert!(RequestArgs::try_parse_from(["vacation_request", "form.pdf", "positions.json"]).is_err());
    }
}
