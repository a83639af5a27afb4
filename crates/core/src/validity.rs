//! Number validity checks
//!
//! A well-formed number is an optional leading minus, one or more digits, and
//! optionally a single decimal point followed by one or more digits. Digits
//! may be Bangla or Western; surrounding whitespace is ignored.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::NumericInput;

static SIGNED_DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-)?([0-9]+)(?:\.([0-9]+))?$").expect("signed decimal pattern is valid")
});

/// A syntactically valid number split into its parts
///
/// Borrowed from a string that already uses Western digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedNumber<'a> {
    pub negative: bool,
    /// Integer digits, possibly with leading zeros
    pub integer: &'a str,
    /// Fraction digits after the decimal point, if present
    pub fraction: Option<&'a str>,
}

/// Split a Western-digit number string into sign, integer and fraction
///
/// Returns `None` unless the whole string is a well-formed number. No
/// trimming or digit normalization is done here.
pub fn parse_number(text: &str) -> Option<ParsedNumber<'_>> {
    let caps = SIGNED_DECIMAL.captures(text)?;
    Some(ParsedNumber {
        negative: caps.get(1).is_some(),
        integer: caps.get(2)?.as_str(),
        fraction: caps.get(3).map(|m| m.as_str()),
    })
}

/// Checks whether the input is a valid number in Bangla or Western digits
///
/// # Examples
/// ```
/// use bangla_utils_core::is_valid_number;
/// assert!(is_valid_number("-১২৩.৪৫"));
/// assert!(is_valid_number(12345));
/// assert!(!is_valid_number("12,345"));
/// assert!(!is_valid_number(f64::NAN));
/// ```
pub fn is_valid_number(input: impl Into<NumericInput>) -> bool {
    match input.into() {
        NumericInput::Integer(_) => true,
        NumericInput::Float(f) => f.is_finite(),
        NumericInput::Text(s) => {
            let normalized = crate::transliterate(s.trim(), crate::Script::Latin);
            parse_number(&normalized).is_some()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        assert!(is_valid_number("12345"));
        assert!(is_valid_number("১২৩৪৫"));
        assert!(is_valid_number("১২৩.৪৫"));
        assert!(is_valid_number("-12345"));
        assert!(is_valid_number("-১২৩.৪৫"));
        assert!(is_valid_number(-123.45));
        assert!(is_valid_number("00123"));
        assert!(is_valid_number("123.000"));
        assert!(is_valid_number("০"));
        assert!(is_valid_number(0));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert!(is_valid_number("   -12345   "));
        assert!(is_valid_number("   ১২৩৪৫  "));
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(!is_valid_number(""));
        assert!(!is_valid_number("-"));
        assert!(!is_valid_number("."));
        assert!(!is_valid_number("abc"));
        assert!(!is_valid_number("12abc"));
        assert!(!is_valid_number(" 12,345 "));
        assert!(!is_valid_number(".123"));
        assert!(!is_valid_number("123."));
        assert!(!is_valid_number("-123."));
        assert!(!is_valid_number("123.-"));
        assert!(!is_valid_number("123.45.67"));
        assert!(!is_valid_number("১২৩.৪৫.৬৭"));
        assert!(!is_valid_number("১২৩৪৫abc"));
        assert!(!is_valid_number("অআই"));
        assert!(!is_valid_number(f64::INFINITY));
        assert!(!is_valid_number(f64::NAN));
    }

    #[test]
    fn test_parse_number_parts() {
        let parsed = parse_number("-0012.340").unwrap();
        assert!(parsed.negative);
        assert_eq!(parsed.integer, "0012");
        assert_eq!(parsed.fraction, Some("340"));

        let parsed = parse_number("7").unwrap();
        assert!(!parsed.negative);
        assert_eq!(parsed.fraction, None);

        assert!(parse_number(" 7").is_none());
    }
}
