use std::{fmt::Write as _, fs, path::Path};

use tracing::info;

use super::layout::{MonthView, YearCalendar};
use crate::errors::Result;

const CELL_W: u32 = 36;
const CELL_H: u32 = 24;
const COLUMNS: u32 = 3;
const MARGIN: u32 = 24;
const TITLE_H: u32 = 56;
const WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Month block: name row, weekday row and up to six weeks.
const BLOCK_W: u32 = CELL_W * 7;
const BLOCK_H: u32 = CELL_H * 8;

/// Renders the calendar as a standalone SVG document.
pub fn render_svg(calendar: &YearCalendar) -> String {
    let rows = (calendar.months.len() as u32).div_ceil(COLUMNS);
    let width = MARGIN + COLUMNS * (BLOCK_W + MARGIN);
    let height = TITLE_H + rows * (BLOCK_H + MARGIN);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="sans-serif">"#
    );
    let _ = writeln!(svg, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##);
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="36" font-size="24" text-anchor="middle">Calendar for {}</text>"#,
        width / 2,
        calendar.year
    );

    for (idx, month) in calendar.months.iter().enumerate() {
        let idx = idx as u32;
        let x = MARGIN + (idx % COLUMNS) * (BLOCK_W + MARGIN);
        let y = TITLE_H + (idx / COLUMNS) * (BLOCK_H + MARGIN);
        month_block(&mut svg, month, x, y);
    }

    svg.push_str("</svg>\n");
    svg
}

/// Writes [`render_svg`] output to `path`.
pub fn write_svg(calendar: &YearCalendar, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_svg(calendar))?;
    info!(path = %path.display(), "calendar image written");
    Ok(())
}

fn month_block(svg: &mut String, month: &MonthView, x: u32, y: u32) {
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="{}" font-size="16" text-anchor="middle">{}</text>"#,
        x + BLOCK_W / 2,
        y + CELL_H - 6,
        month.name()
    );

    let header_y = y + CELL_H;
    for (col, label) in WEEKDAYS.iter().enumerate() {
        let cx = x + col as u32 * CELL_W;
        cell_rect(svg, cx, header_y, "#ffffff");
        cell_text(svg, cx, header_y, label, false);
    }

    for (row, week) in month.weeks.iter().enumerate() {
        let cy = header_y + (row as u32 + 1) * CELL_H;
        for (col, cell) in week.iter().enumerate() {
            let cx = x + col as u32 * CELL_W;
            match cell {
                Some(cell) => {
                    let hint = cell.category.hint();
                    cell_rect(svg, cx, cy, &hint.background.hex());
                    cell_text(svg, cx, cy, &format!("{:02}", cell.day()), hint.bold);
                }
                None => cell_rect(svg, cx, cy, "#ffffff"),
            }
        }
    }
}

fn cell_rect(svg: &mut String, x: u32, y: u32, fill: &str) {
    let _ = writeln!(
        svg,
        r##"<rect x="{x}" y="{y}" width="{CELL_W}" height="{CELL_H}" fill="{fill}" stroke="#000000" stroke-width="0.5"/>"##
    );
}

fn cell_text(svg: &mut String, x: u32, y: u32, text: &str, bold: bool) {
    let weight = if bold { "bold" } else { "normal" };
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="{}" font-size="11" font-weight="{weight}" text-anchor="middle">{text}</text>"#,
        x + CELL_W / 2,
        y + CELL_H / 2 + 4
    );
}
