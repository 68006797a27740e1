//! Vacation request submission: validate, stamp the PDF form, book the ledger.

pub mod form;
pub mod stamp;

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;
use tracing::debug;

pub use form::RequestForm;
pub use stamp::{stamp_pdf, StampConfig, TextPosition};

use crate::{
    errors::{Result, VacationError},
    ledger::{LedgerEntry, LedgerStore},
};

/// What a successful submission wrote.
#[derive(Debug, Clone)]
pub struct Submission {
    pub form: RequestForm,
    pub pdf_path: PathBuf,
    pub ledger_path: PathBuf,
    pub entry: LedgerEntry,
}

/// Stamps `texts` onto `template` and books the request in the ledger.
///
/// All input is validated before anything touches the disk, and the ledger
/// row is only appended once the stamped PDF has been saved.
pub fn submit(
    template: &Path,
    config: &StampConfig,
    texts: &[String],
    store: &LedgerStore,
    recorded_at: NaiveDateTime,
) -> Result<Submission> {
    let form = RequestForm::parse(texts)?;
    config.check_text_count(texts.len())?;
    if !template.exists() {
        return Err(VacationError::MissingFile(template.to_path_buf()));
    }

    let year_dir = store.year_dir(form.year());
    fs::create_dir_all(&year_dir)?;
    let pdf_path = year_dir.join(form.output_file_name(&config.prefix, &config.family_name));
    debug!(pdf = %pdf_path.display(), "stamping request");

    stamp_pdf(template, &pdf_path, config, form.texts())?;

    let entry = form.ledger_entry(recorded_at);
    let ledger_path = store.append(form.year(), &entry)?;

    Ok(Submission {
        form,
        pdf_path,
        ledger_path,
        entry,
    })
}
