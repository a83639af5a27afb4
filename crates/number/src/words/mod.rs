//! Number-to-words conversion
//!
//! Supports:
//! - Place-value reading over the Indian scale (hundred, thousand, lakh, crore)
//! - Digit-by-digit reading of fractions and whole digit sequences
//! - Bangla and English vocabularies
//!
//! # Example
//!
//! ```
//! use bangla_utils_core::Language;
//! use bangla_utils_number::words::{digit_wise_words_of, words_of};
//!
//! assert_eq!(words_of(1_000_000, Language::Bangla).unwrap(), "দশ লক্ষ");
//! assert_eq!(
//!     words_of("১২৩.৪৫", Language::English).unwrap(),
//!     "one hundred twenty-three point four five"
//! );
//! assert_eq!(digit_wise_words_of(100, Language::English).unwrap(), "one zero zero");
//! ```

pub mod vocabulary;

use bangla_utils_core::{parse_number, Error, Language, NumericInput, Result};
use serde_json::Value;

pub use vocabulary::{vocabulary, Scale, Vocabulary};

/// A non-negative whole number as a digit string without leading zeros
///
/// The empty string is zero. Decomposition works on the digits directly,
/// so any length is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Magnitude<'a>(&'a str);

impl<'a> Magnitude<'a> {
    /// Wrap a string of Western digits, dropping leading zeros
    pub fn new(digits: &'a str) -> Self {
        Self(digits.trim_start_matches('0'))
    }

    /// Significant digits; empty for zero
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// Spell the magnitude out; zero gives the zero word
    pub fn to_words(&self, vocab: &Vocabulary) -> String {
        if self.is_zero() {
            return vocab.zero.to_string();
        }
        spell(self.0, vocab)
    }
}

/// Place-value reading of a non-zero digit string
///
/// Everything above the crore is read in seven-digit chunks, each chunk
/// closed by another crore word, so input length never sets the depth.
fn spell(digits: &str, vocab: &Vocabulary) -> String {
    let [crore, smaller @ ..] = &vocab.scales;

    let head_len = match digits.len() % crore.exponent {
        0 => crore.exponent,
        n => n,
    };
    let (head, mut rest) = digits.split_at(head_len.min(digits.len()));
    let mut phrase = spell_within(head, smaller, vocab);

    while !rest.is_empty() {
        let (chunk, tail) = rest.split_at(crore.exponent.min(rest.len()));
        phrase.push_str(crore.separator);
        phrase.push_str(crore.word);

        let chunk = chunk.trim_start_matches('0');
        if !chunk.is_empty() {
            phrase.push(' ');
            phrase.push_str(&spell_within(chunk, smaller, vocab));
        }
        rest = tail;
    }
    phrase
}

/// Decomposition below the crore; `digits` is non-zero and at most seven long
fn spell_within(digits: &str, scales: &[Scale], vocab: &Vocabulary) -> String {
    for scale in scales {
        // value >= 10^exponent iff there are more than `exponent` digits
        if digits.len() > scale.exponent {
            let (quotient, remainder) = digits.split_at(digits.len() - scale.exponent);
            let mut phrase = spell_within(quotient, scales, vocab);
            phrase.push_str(scale.separator);
            phrase.push_str(scale.word);

            let remainder = remainder.trim_start_matches('0');
            if !remainder.is_empty() {
                phrase.push(' ');
                phrase.push_str(&spell_within(remainder, scales, vocab));
            }
            return phrase;
        }
    }

    // At most two digits remain
    let value = digits.bytes().fold(0u8, |acc, b| acc * 10 + (b - b'0'));
    vocab.below_hundred(value)
}

/// Read each digit as its own word, zero included
fn spell_digits(digits: &str, vocab: &Vocabulary) -> String {
    digits
        .bytes()
        .map(|b| vocab.digit(b - b'0'))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Integer and optional fraction digits of a non-negative number
fn split_unsigned(input: &NumericInput) -> Result<(String, Option<String>)> {
    let text = input.to_western_text()?;
    match parse_number(&text) {
        Some(parsed) if !parsed.negative => Ok((
            parsed.integer.to_string(),
            parsed.fraction.map(str::to_string),
        )),
        _ => Err(Error::invalid_number(text)),
    }
}

/// Converts a non-negative number to words
///
/// The integer part is read by place value over the lakh/crore scale; a
/// fractional part is read digit by digit after "point"/"দশমিক".
///
/// # Errors
///
/// [`Error::InvalidNumberFormat`] for anything other than digits with at
/// most one interior decimal point, including a sign and empty input.
pub fn words_of(input: impl Into<NumericInput>, language: Language) -> Result<String> {
    let input = input.into();
    let (integer, fraction) = split_unsigned(&input)?;
    let vocab = vocabulary(language);

    let mut phrase = Magnitude::new(&integer).to_words(vocab);
    if let Some(fraction) = fraction {
        phrase.push(' ');
        phrase.push_str(vocab.point);
        phrase.push(' ');
        phrase.push_str(&spell_digits(&fraction, vocab));
    }

    tracing::trace!(language = %language, digits = integer.len(), "Converted number to words");
    Ok(phrase)
}

/// Reads every digit as its own word, including leading and trailing zeros
///
/// `100` reads "one zero zero"; `100.05` reads "one zero zero point zero five".
pub fn digit_wise_words_of(input: impl Into<NumericInput>, language: Language) -> Result<String> {
    let input = input.into();
    let (integer, fraction) = split_unsigned(&input)?;
    let vocab = vocabulary(language);

    let mut phrase = spell_digits(&integer, vocab);
    if let Some(fraction) = fraction {
        phrase.push(' ');
        phrase.push_str(vocab.point);
        phrase.push(' ');
        phrase.push_str(&spell_digits(&fraction, vocab));
    }
    Ok(phrase)
}

/// [`digit_wise_words_of`] for a dynamically typed value
///
/// Null, booleans, arrays and objects fail with [`Error::InvalidInputType`].
pub fn digit_wise_words_of_value(value: &Value, language: Language) -> Result<String> {
    digit_wise_words_of(NumericInput::from_json(value)?, language)
}

/// [`words_of`] for a dynamically typed value
pub fn words_of_value(value: &Value, language: Language) -> Result<String> {
    words_of(NumericInput::from_json(value)?, language)
}
