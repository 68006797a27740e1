use chrono::{Datelike, Month, NaiveDate};

use super::classify::{Category, Memberships};
use crate::ledger::{expand, DateRecord};

/// A classified day inside a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: DateRecord,
    pub category: Category,
}

impl DayCell {
    pub fn day(&self) -> u32 {
        self.date.date().day()
    }
}

/// A Monday-first week; `None` pads days belonging to adjacent months.
pub type Week = [Option<DayCell>; 7];

#[derive(Debug, Clone)]
pub struct MonthView {
    pub month: Month,
    pub weeks: Vec<Week>,
}

impl MonthView {
    pub fn build(year: i32, month: Month, memberships: &Memberships) -> Option<Self> {
        let number = month.number_from_month();
        let first = NaiveDate::from_ymd_opt(year, number, 1)?;
        let last = last_day_of_month(year, number)?;

        let mut weeks = Vec::new();
        let mut week: Week = [None; 7];
        for date in expand(first.into(), last.into()) {
            let slot = date.weekday().num_days_from_monday() as usize;
            week[slot] = Some(DayCell {
                date,
                category: memberships.classify(date),
            });
            if slot == 6 {
                weeks.push(week);
                week = [None; 7];
            }
        }
        if week.iter().any(Option::is_some) {
            weeks.push(week);
        }
        Some(Self { month, weeks })
    }

    pub fn name(&self) -> &'static str {
        self.month.name()
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten().flatten()
    }
}

/// Twelve classified month grids for one year.
#[derive(Debug, Clone)]
pub struct YearCalendar {
    pub year: i32,
    pub months: Vec<MonthView>,
}

impl YearCalendar {
    pub fn build(year: i32, memberships: &Memberships) -> Self {
        let months = (1..=12u8)
            .filter_map(|number| Month::try_from(number).ok())
            .filter_map(|month| MonthView::build(year, month, memberships))
            .collect();
        Self { year, months }
    }

    /// Number of days per category across the whole year.
    pub fn tally(&self, category: Category) -> usize {
        self.months
            .iter()
            .flat_map(MonthView::days)
            .filter(|cell| cell.category == category)
            .count()
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}
