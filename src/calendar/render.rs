use colored::{ColoredString, Colorize};

use super::{
    classify::{Category, RenderHint},
    layout::{DayCell, MonthView, YearCalendar},
};

const WEEKDAY_HEADER: &str = "Mo Tu We Th Fr Sa Su";
const MONTH_WIDTH: usize = WEEKDAY_HEADER.len();
const MONTHS_PER_ROW: usize = 3;
const MAX_WEEKS: usize = 6;
const GUTTER: &str = "   ";

/// Draws a [`YearCalendar`] as text, three months per row.
#[derive(Debug, Clone, Copy)]
pub struct TerminalRenderer {
    color: bool,
}

impl TerminalRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn render(&self, calendar: &YearCalendar) -> String {
        let total_width = MONTH_WIDTH * MONTHS_PER_ROW + GUTTER.len() * (MONTHS_PER_ROW - 1);
        let mut out = String::new();
        let title = format!("Calendar for {}", calendar.year);
        out.push_str(format!("{title:^total_width$}").trim_end());
        out.push_str("\n\n");

        for row in calendar.months.chunks(MONTHS_PER_ROW) {
            let blocks: Vec<Vec<String>> = row.iter().map(|month| self.month_lines(month)).collect();
            let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
            for line in 0..height {
                let joined = blocks
                    .iter()
                    .map(|block| block.get(line).map(String::as_str).unwrap_or(""))
                    .collect::<Vec<_>>()
                    .join(GUTTER);
                out.push_str(joined.trim_end());
                out.push('\n');
            }
            out.push('\n');
        }

        out.push_str(&self.legend());
        out.push('\n');
        out
    }

    fn month_lines(&self, month: &MonthView) -> Vec<String> {
        let mut lines = Vec::with_capacity(MAX_WEEKS + 2);
        lines.push(format!("{:^MONTH_WIDTH$}", month.name()));
        lines.push(WEEKDAY_HEADER.to_string());
        for week in &month.weeks {
            let cells: Vec<String> = week.iter().map(|cell| self.cell(cell.as_ref())).collect();
            lines.push(cells.join(" "));
        }
        while lines.len() < MAX_WEEKS + 2 {
            lines.push(" ".repeat(MONTH_WIDTH));
        }
        lines
    }

    fn cell(&self, cell: Option<&DayCell>) -> String {
        match cell {
            None => "  ".to_string(),
            Some(cell) => self
                .paint(&format!("{:>2}", cell.day()), cell.category.hint())
                .to_string(),
        }
    }

    fn paint(&self, text: &str, hint: RenderHint) -> ColoredString {
        if !self.color {
            return text.normal();
        }
        let bg = hint.background;
        let painted = text.black().on_truecolor(bg.0, bg.1, bg.2);
        if hint.bold {
            painted.bold()
        } else {
            painted
        }
    }

    fn legend(&self) -> String {
        Category::ALL
            .iter()
            .map(|category| {
                let hint = category.hint();
                let swatch = if self.color {
                    self.paint("  ", hint).to_string()
                } else {
                    match category {
                        Category::SchoolHoliday => "[bold]".to_string(),
                        _ => format!("[{}]", hint.background.hex()),
                    }
                };
                format!("{swatch} {}", category.label())
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}
