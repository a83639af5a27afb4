//! South-Asian digit grouping
//!
//! The last three integer digits form one group, every group before that
//! has two digits: `1234567` becomes `12,34,567`.

use bangla_utils_core::{
    parse_number, transliterate, Error, Language, NumericInput, Result, Script, Strictness,
};

/// Largest integer a native float represents exactly (2^53 - 1)
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

const SEPARATOR: char = ',';

/// Insert separators into a run of integer digits
///
/// Existing separators are dropped first, so grouped input regroups to
/// the same string. Digits of either script are kept as they are.
pub fn group_digits(integer: &str) -> String {
    let digits: Vec<char> = integer.chars().filter(|c| *c != SEPARATOR).collect();
    if digits.len() <= 3 {
        return digits.into_iter().collect();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::with_capacity(digits.len() * 4 / 3 + 4);
    let lead = match head.len() % 2 {
        0 => 2,
        n => n,
    };

    grouped.extend(&head[..lead]);
    for pair in head[lead..].chunks(2) {
        grouped.push(SEPARATOR);
        grouped.extend(pair);
    }
    grouped.push(SEPARATOR);
    grouped.extend(tail);
    grouped
}

/// Formats a number with lakh/crore grouping
///
/// Whitespace is trimmed and existing commas are dropped before
/// validation. The sign and fractional digits are kept, redundant leading
/// zeros of the integer part are removed, and the result uses the digits
/// of `output`.
///
/// In non-strict mode invalid input yields an empty string.
///
/// # Examples
/// ```
/// use bangla_utils_core::Language;
/// use bangla_utils_number::format_number;
///
/// assert_eq!(format_number(12345, true, Language::Bangla).unwrap(), "১২,৩৪৫");
/// assert_eq!(format_number("  -১২৩৪৫ ", true, Language::English).unwrap(), "-12,345");
/// assert_eq!(format_number("abc", false, Language::Bangla).unwrap(), "");
/// ```
pub fn format_number(
    input: impl Into<NumericInput>,
    strict: bool,
    output: Language,
) -> Result<String> {
    Strictness::from(strict).apply("format_number", format_strict(input.into(), output))
}

fn format_strict(input: NumericInput, output: Language) -> Result<String> {
    let text = match &input {
        NumericInput::Text(s) => {
            let cleaned: String = s.trim().chars().filter(|c| *c != SEPARATOR).collect();
            transliterate(&cleaned, Script::Latin)
        }
        NumericInput::Integer(i) => {
            check_safe_range(*i)?;
            input.to_text()?
        }
        NumericInput::Float(f) => {
            let text = input.to_text()?;
            if f.abs() > MAX_SAFE_INTEGER as f64 {
                return Err(out_of_safe_range(&text));
            }
            text
        }
    };

    let parsed = parse_number(&text).ok_or_else(|| Error::invalid_number(text.as_str()))?;

    let integer = match parsed.integer.trim_start_matches('0') {
        "" => "0",
        significant => significant,
    };

    let mut formatted = String::new();
    if parsed.negative {
        formatted.push('-');
    }
    formatted.push_str(&group_digits(integer));
    if let Some(fraction) = parsed.fraction {
        formatted.push('.');
        formatted.push_str(fraction);
    }

    Ok(transliterate(&formatted, output.script()))
}

fn check_safe_range(value: i64) -> Result<()> {
    if (-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&value) {
        Ok(())
    } else {
        Err(out_of_safe_range(value))
    }
}

fn out_of_safe_range(value: impl ToString) -> Error {
    Error::out_of_range("number", value, -MAX_SAFE_INTEGER, MAX_SAFE_INTEGER)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BN: Language = Language::Bangla;
    const EN: Language = Language::English;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("5"), "5");
        assert_eq!(group_digits("123"), "123");
        assert_eq!(group_digits("1234"), "1,234");
        assert_eq!(group_digits("12345"), "12,345");
        assert_eq!(group_digits("1234567"), "12,34,567");
        assert_eq!(group_digits("1234567890"), "1,23,45,67,890");
        assert_eq!(group_digits("১২৩৪৫৬"), "১,২৩,৪৫৬");
    }

    #[test]
    fn test_group_digits_regroups() {
        assert_eq!(group_digits("1,234,567"), "12,34,567");
        assert_eq!(group_digits(&group_digits("98765432")), group_digits("98765432"));
    }

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(12345, true, BN).unwrap(), "১২,৩৪৫");
        assert_eq!(format_number("১২৩৪৫", true, BN).unwrap(), "১২,৩৪৫");
        assert_eq!(format_number("১২৩৪৫", false, EN).unwrap(), "12,345");
        assert_eq!(format_number(-12345, true, BN).unwrap(), "-১২,৩৪৫");
        assert_eq!(format_number("-১২৩৪৫", false, EN).unwrap(), "-12,345");
        assert_eq!(format_number(1234567890, true, EN).unwrap(), "1,23,45,67,890");
        assert_eq!(format_number(5, true, BN).unwrap(), "৫");
        assert_eq!(format_number("৫", true, EN).unwrap(), "5");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_number(12345.67, true, BN).unwrap(), "১২,৩৪৫.৬৭");
        assert_eq!(format_number("1234567.89", false, EN).unwrap(), "12,34,567.89");
        assert_eq!(format_number("১২৩৪৫৬৭.৮৯", true, BN).unwrap(), "১২,৩৪,৫৬৭.৮৯");
    }

    #[test]
    fn test_format_large_numbers() {
        assert_eq!(
            format_number(1234567890123456_i64, true, BN).unwrap(),
            "১,২৩,৪৫,৬৭,৮৯,০১,২৩,৪৫৬"
        );
        assert_eq!(
            format_number("১২৩৪৫৬৭৮৯০১২৩৪৫৬", true, EN).unwrap(),
            "1,23,45,67,89,01,23,456"
        );
    }

    #[test]
    fn test_reformats_existing_grouping() {
        assert_eq!(
            format_number("1,213,451,234,512,345", true, BN).unwrap(),
            "১,২১,৩৪,৫১,২৩,৪৫,১২,৩৪৫"
        );
        assert_eq!(
            format_number("১,২১৩,৪৫১,২৩৪,৫১২,৩৪৫", true, EN).unwrap(),
            "1,21,34,51,23,45,12,345"
        );
    }

    #[test]
    fn test_whitespace_and_leading_zeros() {
        assert_eq!(format_number("  12345 ", true, BN).unwrap(), "১২,৩৪৫");
        assert_eq!(format_number("  -১২৩৪৫  ", false, EN).unwrap(), "-12,345");
        assert_eq!(format_number("0012345", true, EN).unwrap(), "12,345");
        assert_eq!(format_number("000.50", true, EN).unwrap(), "0.50");
    }

    #[test]
    fn test_strict_rejects_invalid() {
        for input in ["abc", "12a34", "১২অ৩৪", "", "12.34.56", "১২.৩৪.৫৬"] {
            assert!(matches!(
                format_number(input, true, BN),
                Err(Error::InvalidNumberFormat { .. })
            ));
        }
        assert!(format_number(f64::NAN, true, BN).is_err());
        assert!(format_number(f64::INFINITY, true, BN).is_err());
    }

    #[test]
    fn test_safe_integer_bound() {
        assert!(format_number(MAX_SAFE_INTEGER, true, EN).is_ok());
        assert!(matches!(
            format_number(MAX_SAFE_INTEGER + 1, true, EN),
            Err(Error::OutOfRange { field: "number", .. })
        ));
        assert_eq!(format_number(1e20, false, EN).unwrap(), "");
    }

    #[test]
    fn test_out_of_range_float_reports_its_value() {
        assert!(matches!(
            format_number(1e20, true, EN),
            Err(Error::OutOfRange { ref value, .. }) if value == "100000000000000000000"
        ));
        assert!(matches!(
            format_number(-1e16, true, BN),
            Err(Error::OutOfRange { ref value, .. }) if value == "-10000000000000000"
        ));
        assert!(matches!(
            format_number(MAX_SAFE_INTEGER + 1, true, EN),
            Err(Error::OutOfRange { ref value, .. }) if value == "9007199254740992"
        ));
    }

    #[test]
    fn test_lenient_returns_empty() {
        assert_eq!(format_number("abc", false, BN).unwrap(), "");
        assert_eq!(format_number("কখগ", false, BN).unwrap(), "");
        assert_eq!(format_number("", false, EN).unwrap(), "");
    }
}
