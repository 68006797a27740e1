use std::path::Path;

use tracing::debug;

use crate::{
    calendar::{
        read_legal_holidays, read_school_holidays, write_svg, Category, MembershipSet,
        Memberships, TerminalRenderer, YearCalendar,
    },
    cli::{args::CalendarArgs, output::Output},
    config::SettingsManager,
    errors::Result,
    ledger::LedgerStore,
};

/// Loads the three membership sets for `args.year` and prints the calendar.
pub fn run(args: CalendarArgs) -> Result<()> {
    let settings = SettingsManager::locate(args.common.settings.as_deref()).load()?;
    let output = Output::new(settings.color && !args.plain);
    let year = args.year;

    let legal_path = args.legal_holidays.unwrap_or(settings.legal_holidays);
    let legal_holidays = read_legal_holidays(&legal_path)?
        .unwrap_or_else(|| missing_list(&output, "Legal holiday", &legal_path));

    let school_path = args.school_holidays.unwrap_or(settings.school_holidays);
    let school_holidays = read_school_holidays(&school_path)?
        .unwrap_or_else(|| missing_list(&output, "School holiday", &school_path));

    let store = LedgerStore::new(settings.ledger_root);
    let taken_vacations = store.taken_vacations(year)?.unwrap_or_else(|| {
        output.info(format!(
            "No taken vacations found for year {year}. Assuming none."
        ));
        MembershipSet::new()
    });

    let memberships = Memberships {
        legal_holidays,
        taken_vacations,
        school_holidays,
    };
    let calendar = YearCalendar::build(year, &memberships);
    debug!(
        year,
        taken = calendar.tally(Category::TakenVacation),
        legal = calendar.tally(Category::LegalHoliday),
        "calendar built"
    );

    print!("{}", TerminalRenderer::new(output.color()).render(&calendar));

    if let Some(svg) = args.svg {
        write_svg(&calendar, &svg)?;
        output.success(format!("Calendar image written to '{}'.", svg.display()));
    }
    Ok(())
}

fn missing_list(output: &Output, what: &str, path: &Path) -> MembershipSet {
    output.warning(format!(
        "{what} file '{}' not found. Continuing without it.",
        path.display()
    ));
    MembershipSet::new()
}
