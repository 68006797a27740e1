use crate::{
    balance::{balance_for_year, BalanceOutcome, EntitlementBook},
    cli::{args::BalanceArgs, output::Output},
    config::SettingsManager,
    errors::Result,
    ledger::LedgerStore,
};

/// Prints the four-line balance report for `args.year`.
pub fn run(args: BalanceArgs) -> Result<()> {
    let settings = SettingsManager::locate(args.common.settings.as_deref()).load()?;
    let output = Output::new(settings.color);
    let year = args.year;

    let entitlement_path = args.entitlement.unwrap_or(settings.entitlement);
    let book = EntitlementBook::load(&entitlement_path)?;
    let ledger = LedgerStore::new(settings.ledger_root).load(year)?;

    match balance_for_year(&book, year, ledger.as_deref())? {
        BalanceOutcome::NoData { year } => {
            output.info(format!("No vacation data available for the year {year}."));
        }
        BalanceOutcome::Report(report) => {
            if ledger.is_none() {
                output.info(format!(
                    "No data found for year {year}. Assuming no vacations have been taken."
                ));
            }
            println!("{report}");
        }
    }
    Ok(())
}
