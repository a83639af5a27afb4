//! Calendar name tables
//!
//! Each table holds the Bangla names in calendar order plus the lowercase
//! English (or romanized) full and short source names at the same
//! positions. Lookup maps are built once on first use.

use std::collections::HashMap;

use bangla_utils_core::{Error, Result};
use once_cell::sync::Lazy;

/// One ordered set of calendar names
#[derive(Debug)]
pub struct CalendarTable {
    /// Used in error messages ("month", "day")
    pub field: &'static str,
    /// Index of the first entry (1 for months, 0 for weekdays)
    pub first_index: i64,
    pub names: &'static [&'static str],
    pub full_names: &'static [&'static str],
    pub short_names: &'static [&'static str],
    full_lookup: &'static Lazy<HashMap<&'static str, usize>>,
    short_lookup: &'static Lazy<HashMap<&'static str, usize>>,
}

impl CalendarTable {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Last valid index
    pub fn last_index(&self) -> i64 {
        self.first_index + self.names.len() as i64 - 1
    }

    /// Bangla name at a caller-facing index
    pub fn by_index(&self, index: i64) -> Result<&'static str> {
        if index < self.first_index || index > self.last_index() {
            return Err(self.out_of_range(index));
        }
        Ok(self.names[(index - self.first_index) as usize])
    }

    /// Range error for an index of this table
    pub fn out_of_range(&self, value: impl ToString) -> Error {
        Error::out_of_range(self.field, value, self.first_index, self.last_index())
    }

    /// Zero-based position of a full or short name
    ///
    /// The name is trimmed and compared case-insensitively; full names are
    /// checked before short names.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        let normalized = name.trim().to_lowercase();
        self.full_lookup
            .get(normalized.as_str())
            .or_else(|| self.short_lookup.get(normalized.as_str()))
            .copied()
    }

    /// Bangla name for a full or short name
    pub fn by_name(&self, name: &str) -> Result<&'static str> {
        self.position_of(name)
            .map(|position| self.names[position])
            .ok_or_else(|| Error::UnrecognizedName {
                field: self.field,
                name: name.to_string(),
            })
    }
}

fn index_names(names: &'static [&'static str]) -> HashMap<&'static str, usize> {
    names.iter().enumerate().map(|(i, name)| (*name, i)).collect()
}

macro_rules! calendar_table {
    ($table:ident, $field:literal, $first:literal, $names:ident, $full:ident, $short:ident) => {
        pub static $table: CalendarTable = CalendarTable {
            field: $field,
            first_index: $first,
            names: &$names,
            full_names: &$full,
            short_names: &$short,
            full_lookup: {
                static LOOKUP: Lazy<HashMap<&'static str, usize>> =
                    Lazy::new(|| index_names(&$full));
                &LOOKUP
            },
            short_lookup: {
                static LOOKUP: Lazy<HashMap<&'static str, usize>> =
                    Lazy::new(|| index_names(&$short));
                &LOOKUP
            },
        };
    };
}

const GREGORIAN_MONTH_NAMES: [&str; 12] = [
    "জানুয়ারি",
    "ফেব্রুয়ারি",
    "মার্চ",
    "এপ্রিল",
    "মে",
    "জুন",
    "জুলাই",
    "আগস্ট",
    "সেপ্টেম্বর",
    "অক্টোবর",
    "নভেম্বর",
    "ডিসেম্বর",
];

const GREGORIAN_MONTH_FULL: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const GREGORIAN_MONTH_SHORT: [&str; 12] = [
    "jan",
    "feb",
    "mar",
    "apr",
    "may",
    "jun",
    "jul",
    "aug",
    "sep",
    "oct",
    "nov",
    "dec",
];

const BANGLA_CALENDAR_MONTH_NAMES: [&str; 12] = [
    "বৈশাখ",
    "জ্যৈষ্ঠ",
    "আষাঢ়",
    "শ্রাবণ",
    "ভাদ্র",
    "আশ্বিন",
    "কার্তিক",
    "অগ্রহায়ণ",
    "পৌষ",
    "মাঘ",
    "ফাল্গুন",
    "চৈত্র",
];

const BANGLA_CALENDAR_MONTH_FULL: [&str; 12] = [
    "boishakh",
    "joishtho",
    "asharh",
    "shrabon",
    "bhadro",
    "ashwin",
    "kartik",
    "ogrohayon",
    "poush",
    "magh",
    "falgun",
    "choitro",
];

const BANGLA_CALENDAR_MONTH_SHORT: [&str; 12] = [
    "boi",
    "joi",
    "ash",
    "shra",
    "bha",
    "ashw",
    "kar",
    "ogro",
    "pou",
    "mag",
    "fal",
    "choi",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "রবিবার",
    "সোমবার",
    "মঙ্গলবার",
    "বুধবার",
    "বৃহস্পতিবার",
    "শুক্রবার",
    "শনিবার",
];

const WEEKDAY_FULL: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

const WEEKDAY_SHORT: [&str; 7] = [
    "sun",
    "mon",
    "tue",
    "wed",
    "thu",
    "fri",
    "sat",
];

calendar_table!(
    GREGORIAN_MONTHS,
    "month",
    1,
    GREGORIAN_MONTH_NAMES,
    GREGORIAN_MONTH_FULL,
    GREGORIAN_MONTH_SHORT
);

calendar_table!(
    BANGLA_CALENDAR_MONTHS,
    "month",
    1,
    BANGLA_CALENDAR_MONTH_NAMES,
    BANGLA_CALENDAR_MONTH_FULL,
    BANGLA_CALENDAR_MONTH_SHORT
);

calendar_table!(WEEKDAYS, "day", 0, WEEKDAY_NAMES, WEEKDAY_FULL, WEEKDAY_SHORT);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_parallel() {
        for table in [&GREGORIAN_MONTHS, &BANGLA_CALENDAR_MONTHS, &WEEKDAYS] {
            assert_eq!(table.names.len(), table.full_names.len());
            assert_eq!(table.names.len(), table.short_names.len());
        }
        assert_eq!(GREGORIAN_MONTHS.len(), 12);
        assert_eq!(BANGLA_CALENDAR_MONTHS.len(), 12);
        assert_eq!(WEEKDAYS.len(), 7);
    }

    #[test]
    fn test_by_index() {
        assert_eq!(GREGORIAN_MONTHS.by_index(1).unwrap(), "জানুয়ারি");
        assert_eq!(GREGORIAN_MONTHS.by_index(12).unwrap(), "ডিসেম্বর");
        assert_eq!(BANGLA_CALENDAR_MONTHS.by_index(1).unwrap(), "বৈশাখ");
        assert_eq!(WEEKDAYS.by_index(0).unwrap(), "রবিবার");
        assert_eq!(WEEKDAYS.by_index(6).unwrap(), "শনিবার");
    }

    #[test]
    fn test_by_index_out_of_range() {
        assert_eq!(
            GREGORIAN_MONTHS.by_index(13),
            Err(Error::OutOfRange {
                field: "month",
                value: "13".into(),
                min: 1,
                max: 12
            })
        );
        assert!(GREGORIAN_MONTHS.by_index(0).is_err());
        assert!(WEEKDAYS.by_index(7).is_err());
        assert!(WEEKDAYS.by_index(-1).is_err());
    }

    #[test]
    fn test_by_name_full_and_short() {
        assert_eq!(GREGORIAN_MONTHS.by_name("January").unwrap(), "জানুয়ারি");
        assert_eq!(GREGORIAN_MONTHS.by_name(" JAN ").unwrap(), "জানুয়ারি");
        assert_eq!(GREGORIAN_MONTHS.by_name("may").unwrap(), "মে");
        assert_eq!(BANGLA_CALENDAR_MONTHS.by_name("Boishakh").unwrap(), "বৈশাখ");
        assert_eq!(BANGLA_CALENDAR_MONTHS.by_name("ashw").unwrap(), "আশ্বিন");
        assert_eq!(WEEKDAYS.by_name("SUN").unwrap(), "রবিবার");
        assert_eq!(WEEKDAYS.position_of("Thursday"), Some(4));
    }

    #[test]
    fn test_by_name_unknown() {
        assert!(matches!(
            GREGORIAN_MONTHS.by_name("Janu"),
            Err(Error::UnrecognizedName { field: "month", .. })
        ));
        assert!(WEEKDAYS.by_name("").is_err());
    }
}
