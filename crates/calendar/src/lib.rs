//! Calendar names in Bangla
//!
//! Resolves Gregorian months, Bangla calendar months (Boishakh-Choitro)
//! and weekdays from an index or an English/romanized name.

pub mod resolver;
pub mod tables;

pub use resolver::{
    bangla_calendar_month, gregorian_month, resolve_month, weekday, weekday_from, CalendarInput,
    MonthCalendar, WeekStart,
};
pub use tables::{CalendarTable, BANGLA_CALENDAR_MONTHS, GREGORIAN_MONTHS, WEEKDAYS};
