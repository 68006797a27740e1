//! Day classification and the yearly calendar views built on top of it.

pub mod classify;
pub mod layout;
pub mod render;
pub mod sources;
pub mod svg;

pub use classify::{classify, Category, Memberships, MembershipSet, RenderHint, Rgb};
pub use layout::{DayCell, MonthView, Week, YearCalendar};
pub use render::TerminalRenderer;
pub use sources::{read_legal_holidays, read_school_holidays};
pub use svg::{render_svg, write_svg};
