use std::{collections::HashSet, fmt};

use chrono::Weekday;

use crate::ledger::DateRecord;

pub type MembershipSet = HashSet<DateRecord>;

/// Display category of a calendar day.
///
/// Variants are declared in priority order: when a day belongs to several
/// sets, the earliest matching variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Weekend,
    LegalHoliday,
    TakenVacation,
    SchoolHoliday,
    Regular,
}

/// How the presentation layer should draw a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderHint {
    pub background: Rgb,
    pub bold: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Weekend,
        Category::LegalHoliday,
        Category::TakenVacation,
        Category::SchoolHoliday,
        Category::Regular,
    ];

    pub fn hint(&self) -> RenderHint {
        let (background, bold) = match self {
            Category::Weekend => (Rgb(0xff, 0xcc, 0xcc), false),
            Category::LegalHoliday => (Rgb(0xcd, 0x1c, 0x18), false),
            Category::TakenVacation => (Rgb(0xcc, 0xe5, 0xff), false),
            Category::SchoolHoliday => (Rgb(0xff, 0xff, 0xcc), true),
            Category::Regular => (Rgb(0xff, 0xff, 0xff), false),
        };
        RenderHint { background, bold }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Weekend => "Weekend",
            Category::LegalHoliday => "Legal holiday",
            Category::TakenVacation => "Taken vacation",
            Category::SchoolHoliday => "School holiday",
            Category::Regular => "Regular day",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a single day. First match wins:
/// weekend, legal holiday, taken vacation, school holiday, regular.
pub fn classify(
    date: DateRecord,
    weekday: Weekday,
    legal_holidays: &MembershipSet,
    taken_vacations: &MembershipSet,
    school_holidays: &MembershipSet,
) -> Category {
    if matches!(weekday, Weekday::Sat | Weekday::Sun) {
        Category::Weekend
    } else if legal_holidays.contains(&date) {
        Category::LegalHoliday
    } else if taken_vacations.contains(&date) {
        Category::TakenVacation
    } else if school_holidays.contains(&date) {
        Category::SchoolHoliday
    } else {
        Category::Regular
    }
}

/// The three membership sets a calendar is drawn from.
#[derive(Debug, Clone, Default)]
pub struct Memberships {
    pub legal_holidays: MembershipSet,
    pub taken_vacations: MembershipSet,
    pub school_holidays: MembershipSet,
}

impl Memberships {
    pub fn classify(&self, date: DateRecord) -> Category {
        classify(
            date,
            date.weekday(),
            &self.legal_holidays,
            &self.taken_vacations,
            &self.school_holidays,
        )
    }
}
