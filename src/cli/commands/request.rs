use chrono::Local;

use crate::{
    cli::{args::RequestArgs, output::Output},
    config::SettingsManager,
    errors::Result,
    ledger::LedgerStore,
    request::{submit, RequestForm, StampConfig},
};

/// Stamps the request form and books it in the ledger.
pub fn run(args: RequestArgs) -> Result<()> {
    let settings = SettingsManager::locate(args.common.settings.as_deref()).load()?;
    let output = Output::new(settings.color);

    // texts are checked before the config file is read
    RequestForm::parse(&args.texts)?;
    let config = StampConfig::load(&args.config)?;
    let store = LedgerStore::new(settings.ledger_root);
    let submission = submit(
        &args.pdf,
        &config,
        &args.texts,
        &store,
        Local::now().naive_local(),
    )?;

    output.success(format!(
        "Text added to '{}' successfully.",
        submission.pdf_path.display()
    ));
    output.success(format!(
        "Text data written to '{}' successfully.",
        submission.ledger_path.display()
    ));
    Ok(())
}
