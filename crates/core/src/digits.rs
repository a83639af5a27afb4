//! Digit transliteration between Bangla and Western glyphs
//!
//! Character-level substitution: every digit is replaced by the glyph with the
//! same value in the target script, every other character passes through.

use crate::{is_valid_number, Error, NumericInput, Result, Script};

/// Bangla digit glyphs, indexed by value
pub const BANGLA_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

/// Western (ASCII) digit glyphs, indexed by value
pub const WESTERN_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

const BANGLA_ZERO: u32 = '০' as u32;

/// Numeric value of a Bangla or Western digit glyph
pub fn digit_value(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        '০'..='৯' => Some((c as u32 - BANGLA_ZERO) as u8),
        _ => None,
    }
}

/// Replace every digit in `text` with its glyph in `script`
pub fn transliterate(text: &str, script: Script) -> String {
    let glyphs = script.digits();
    text.chars()
        .map(|c| match digit_value(c) {
            Some(value) => glyphs[value as usize],
            None => c,
        })
        .collect()
}

/// Converts a number or numeric string to Bangla digits
///
/// Non-digit characters are retained. In strict mode the input must pass
/// [`is_valid_number`], otherwise [`Error::NonNumericInput`] is returned.
///
/// # Examples
/// ```
/// use bangla_utils_core::to_bangla_digits;
/// assert_eq!(to_bangla_digits(123, false).unwrap(), "১২৩");
/// assert_eq!(to_bangla_digits("abc123", false).unwrap(), "abc১২৩");
/// ```
pub fn to_bangla_digits(input: impl Into<NumericInput>, strict: bool) -> Result<String> {
    convert(input.into(), strict, Script::Bengali)
}

/// Converts a number or numeric string to Western digits
///
/// # Examples
/// ```
/// use bangla_utils_core::to_english_digits;
/// assert_eq!(to_english_digits("১২৩.৪৫", false).unwrap(), "123.45");
/// ```
pub fn to_english_digits(input: impl Into<NumericInput>, strict: bool) -> Result<String> {
    convert(input.into(), strict, Script::Latin)
}

fn convert(input: NumericInput, strict: bool, script: Script) -> Result<String> {
    let text = input.to_text()?;
    if strict && !is_valid_number(input) {
        return Err(Error::non_numeric(text));
    }
    Ok(transliterate(&text, script))
}

/// Which digit glyphs a string contains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitScript {
    Bangla,
    Western,
    Mixed,
    None,
}

/// Detect the digit script(s) used in `text`
pub fn detect_digit_script(text: &str) -> DigitScript {
    let has_bangla = text.chars().any(|c| ('০'..='৯').contains(&c));
    let has_western = text.chars().any(|c| c.is_ascii_digit());

    match (has_bangla, has_western) {
        (true, true) => DigitScript::Mixed,
        (true, false) => DigitScript::Bangla,
        (false, true) => DigitScript::Western,
        (false, false) => DigitScript::None,
    }
}
