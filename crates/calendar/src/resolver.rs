//! Month and weekday name resolution
//!
//! Inputs are either an index (1-12 for months, 0-6 for weekdays) or a
//! full/short English name. Weekday indices are rotated by the week start
//! day before lookup; weekday names are not.

use std::fmt;
use std::str::FromStr;

use bangla_utils_core::{parse_number, transliterate, Error, Result, Script, Strictness};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tables::{CalendarTable, BANGLA_CALENDAR_MONTHS, GREGORIAN_MONTHS, WEEKDAYS};

/// A month or day given by index or by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarInput {
    Index(i64),
    /// A whole number too wide for `i64`, in Western digits; never in range
    Oversized(String),
    Name(String),
}

impl CalendarInput {
    /// Classify text: whole numbers in either digit script are indices
    pub fn from_text(text: &str) -> Self {
        let western = transliterate(text.trim(), Script::Latin);
        match parse_number(&western) {
            Some(parsed) if parsed.fraction.is_none() => western
                .parse::<i64>()
                .map(Self::Index)
                .unwrap_or_else(|_| Self::Oversized(western.clone())),
            _ => Self::Name(text.to_string()),
        }
    }

    /// Convert a JSON value; only integers and strings are accepted
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) if n.is_u64() => Ok(n
                .as_i64()
                .map_or_else(|| Self::Oversized(n.to_string()), Self::Index)),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Index)
                .ok_or_else(|| Error::invalid_number(n.to_string())),
            Value::String(s) => Ok(Self::from_text(s)),
            _ => Err(Error::InvalidInputType),
        }
    }

    fn resolve(&self, table: &CalendarTable) -> Result<&'static str> {
        match self {
            Self::Index(index) => table.by_index(*index),
            Self::Oversized(digits) => Err(table.out_of_range(digits)),
            Self::Name(name) => table.by_name(name),
        }
    }
}

macro_rules! index_input {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for CalendarInput {
                fn from(value: $ty) -> Self {
                    Self::Index(i64::from(value))
                }
            }
        )*
    };
}

index_input!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for CalendarInput {
    fn from(value: usize) -> Self {
        i64::try_from(value)
            .map(Self::Index)
            .unwrap_or_else(|_| Self::Oversized(value.to_string()))
    }
}

impl From<&str> for CalendarInput {
    fn from(value: &str) -> Self {
        Self::from_text(value)
    }
}

impl From<String> for CalendarInput {
    fn from(value: String) -> Self {
        Self::from_text(&value)
    }
}

impl From<&String> for CalendarInput {
    fn from(value: &String) -> Self {
        Self::from_text(value)
    }
}

/// Which month table to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MonthCalendar {
    /// January-December, named in Bangla
    #[default]
    Gregorian,
    /// Boishakh-Choitro
    Bangla,
}

impl MonthCalendar {
    fn table(&self) -> &'static CalendarTable {
        match self {
            Self::Gregorian => &GREGORIAN_MONTHS,
            Self::Bangla => &BANGLA_CALENDAR_MONTHS,
        }
    }
}

/// The weekday treated as day 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekStart(u8);

impl WeekStart {
    pub const SUNDAY: Self = Self(0);
    pub const MONDAY: Self = Self(1);
    pub const SATURDAY: Self = Self(6);

    /// Resolve a full or short weekday name
    pub fn parse(name: &str) -> Result<Self> {
        WEEKDAYS
            .position_of(name)
            .map(|position| Self(position as u8))
            .ok_or_else(|| Error::UnrecognizedName {
                field: "week start day",
                name: name.to_string(),
            })
    }

    /// Offset added to a day index, 0-6
    pub fn offset(&self) -> u8 {
        self.0
    }

    /// Lowercase English full name
    pub fn name(&self) -> &'static str {
        WEEKDAYS.full_names[self.0 as usize]
    }

    /// Rotate a day index by this offset
    pub fn rotate(&self, day: i64) -> i64 {
        (day + i64::from(self.0)) % 7
    }
}

impl FromStr for WeekStart {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Bangla name of a month in the chosen calendar
pub fn resolve_month(
    month: impl Into<CalendarInput>,
    calendar: MonthCalendar,
    strict: bool,
) -> Result<String> {
    let result = month.into().resolve(calendar.table()).map(str::to_string);
    Strictness::from(strict).apply("resolve_month", result)
}

/// Bangla name of a Gregorian month
///
/// # Examples
/// ```
/// use bangla_utils_calendar::gregorian_month;
///
/// assert_eq!(gregorian_month(1, true).unwrap(), "জানুয়ারি");
/// assert_eq!(gregorian_month("JAN", true).unwrap(), "জানুয়ারি");
/// assert_eq!(gregorian_month(13, false).unwrap(), "");
/// ```
pub fn gregorian_month(month: impl Into<CalendarInput>, strict: bool) -> Result<String> {
    resolve_month(month, MonthCalendar::Gregorian, strict)
}

/// Bangla calendar month name (Boishakh = 1)
pub fn bangla_calendar_month(month: impl Into<CalendarInput>, strict: bool) -> Result<String> {
    resolve_month(month, MonthCalendar::Bangla, strict)
}

/// Bangla weekday name
///
/// `week_start_day` is resolved first, so an unknown week start fails
/// even when `day` is valid. An index is rotated by the week start; a
/// name is looked up directly.
///
/// # Examples
/// ```
/// use bangla_utils_calendar::weekday;
///
/// assert_eq!(weekday(0, "Sunday", true).unwrap(), "রবিবার");
/// assert_eq!(weekday(0, "Monday", true).unwrap(), "সোমবার");
/// assert_eq!(weekday("sun", "Monday", true).unwrap(), "রবিবার");
/// ```
pub fn weekday(
    day: impl Into<CalendarInput>,
    week_start_day: &str,
    strict: bool,
) -> Result<String> {
    let day = day.into();
    let result = WeekStart::parse(week_start_day).and_then(|start| weekday_from(&day, start));
    Strictness::from(strict).apply("weekday", result)
}

/// [`weekday`] with an already resolved week start
pub fn weekday_from(day: &CalendarInput, start: WeekStart) -> Result<String> {
    match day {
        CalendarInput::Index(index) => {
            // Range check happens before rotation
            WEEKDAYS.by_index(*index)?;
            let rotated = start.rotate(*index);
            tracing::trace!(index, offset = start.offset(), rotated, "Rotated weekday index");
            WEEKDAYS.by_index(rotated).map(str::to_string)
        }
        CalendarInput::Oversized(digits) => Err(WEEKDAYS.out_of_range(digits)),
        CalendarInput::Name(name) => WEEKDAYS.by_name(name).map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gregorian_month() {
        assert_eq!(gregorian_month(1, true).unwrap(), "জানুয়ারি");
        assert_eq!(gregorian_month(12, true).unwrap(), "ডিসেম্বর");
        assert_eq!(gregorian_month("January", true).unwrap(), "জানুয়ারি");
        assert_eq!(gregorian_month("jan", true).unwrap(), "জানুয়ারি");
        assert_eq!(gregorian_month("  DECEMBER ", true).unwrap(), "ডিসেম্বর");
    }

    #[test]
    fn test_month_errors() {
        let err = gregorian_month(13, true).unwrap_err();
        assert!(err.is_calendar_input());
        assert!(matches!(err, Error::OutOfRange { ref value, .. } if value == "13"));

        let err = gregorian_month("Smarch", true).unwrap_err();
        assert!(matches!(err, Error::UnrecognizedName { .. }));

        assert_eq!(gregorian_month(0, false).unwrap(), "");
        assert_eq!(gregorian_month("xyz", false).unwrap(), "");
    }

    #[test]
    fn test_bangla_calendar_month() {
        assert_eq!(bangla_calendar_month(1, true).unwrap(), "বৈশাখ");
        assert_eq!(bangla_calendar_month("Boishakh", true).unwrap(), "বৈশাখ");
        assert_eq!(bangla_calendar_month("BOI", true).unwrap(), "বৈশাখ");
        assert_eq!(bangla_calendar_month(12, true).unwrap(), "চৈত্র");
        assert_eq!(bangla_calendar_month(13, false).unwrap(), "");
    }

    #[test]
    fn test_numeric_strings_are_indices() {
        assert_eq!(CalendarInput::from("১"), CalendarInput::Index(1));
        assert_eq!(CalendarInput::from(" 12 "), CalendarInput::Index(12));
        assert_eq!(CalendarInput::from("1.5"), CalendarInput::Name("1.5".into()));
        assert_eq!(gregorian_month("১২", true).unwrap(), "ডিসেম্বর");
    }

    #[test]
    fn test_oversized_numbers_are_out_of_range() {
        let huge = "99999999999999999999";
        assert_eq!(
            CalendarInput::from(huge),
            CalendarInput::Oversized(huge.into())
        );

        let err = gregorian_month(huge, true).unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfRange { field: "month", ref value, min: 1, max: 12 } if value == huge
        ));
        assert!(matches!(
            bangla_calendar_month("-৯৯৯৯৯৯৯৯৯৯৯৯৯৯৯৯৯৯৯৯", true),
            Err(Error::OutOfRange { ref value, .. }) if value == "-99999999999999999999"
        ));
        assert!(matches!(
            weekday(huge, "Sunday", true),
            Err(Error::OutOfRange { field: "day", .. })
        ));
        assert_eq!(gregorian_month(huge, false).unwrap(), "");

        assert_eq!(
            CalendarInput::from_json(&json!(u64::MAX)).unwrap(),
            CalendarInput::Oversized(u64::MAX.to_string())
        );
    }

    #[test]
    fn test_weekday_default_start() {
        assert_eq!(weekday(0, "Sunday", true).unwrap(), "রবিবার");
        assert_eq!(weekday(6, "sun", true).unwrap(), "শনিবার");
        assert_eq!(weekday("Sunday", "Sunday", true).unwrap(), "রবিবার");
        assert_eq!(weekday("SUN", "Sunday", true).unwrap(), "রবিবার");
    }

    #[test]
    fn test_weekday_rotation() {
        assert_eq!(weekday(0, "Monday", true).unwrap(), "সোমবার");
        assert_eq!(weekday(0, "mon", true).unwrap(), "সোমবার");
        assert_eq!(weekday(6, "Monday", true).unwrap(), "রবিবার");
        assert_eq!(weekday(1, "Saturday", true).unwrap(), "রবিবার");
    }

    #[test]
    fn test_weekday_names_ignore_start() {
        assert_eq!(weekday("Friday", "Monday", true).unwrap(), "শুক্রবার");
    }

    #[test]
    fn test_weekday_errors() {
        assert!(matches!(
            weekday(7, "Sunday", true),
            Err(Error::OutOfRange { field: "day", .. })
        ));
        assert_eq!(weekday(7, "Sunday", false).unwrap(), "");
        assert!(matches!(
            weekday(0, "Funday", true),
            Err(Error::UnrecognizedName {
                field: "week start day",
                ..
            })
        ));
        assert_eq!(weekday(0, "Funday", false).unwrap(), "");
        assert_eq!(weekday("someday", "Sunday", false).unwrap(), "");
    }

    #[test]
    fn test_week_start() {
        assert_eq!(WeekStart::parse("Monday").unwrap(), WeekStart::MONDAY);
        assert_eq!("sat".parse::<WeekStart>().unwrap(), WeekStart::SATURDAY);
        assert_eq!(WeekStart::default(), WeekStart::SUNDAY);
        assert_eq!(WeekStart::MONDAY.to_string(), "monday");
    }

    #[test]
    fn test_from_json() {
        assert_eq!(
            CalendarInput::from_json(&json!(3)).unwrap(),
            CalendarInput::Index(3)
        );
        assert_eq!(
            CalendarInput::from_json(&json!("mar")).unwrap(),
            CalendarInput::Name("mar".into())
        );
        assert_eq!(
            CalendarInput::from_json(&json!(null)),
            Err(Error::InvalidInputType)
        );
        assert!(CalendarInput::from_json(&json!(1.5)).is_err());
    }

    #[test]
    fn test_month_calendar_serde() {
        let calendar: MonthCalendar = serde_json::from_str("\"bangla\"").unwrap();
        assert_eq!(calendar, MonthCalendar::Bangla);
        assert_eq!(
            resolve_month(4, MonthCalendar::Bangla, true).unwrap(),
            "শ্রাবণ"
        );
    }
}
