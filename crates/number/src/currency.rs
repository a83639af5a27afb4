//! Taka/Poisha amount in words
//!
//! An amount is split into whole Taka and up to two Poisha digits
//! (1 Taka = 100 Poisha). Both parts are read with the place-value engine.

use bangla_utils_core::{parse_number, Error, Language, NumericInput, Result};
use serde::{Deserialize, Serialize};

use crate::words::{vocabulary, Magnitude};

/// Phrase options for [`currency_phrase`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyOptions {
    /// Append "only." / "মাত্র।"
    pub add_suffix: bool,
    /// Omit "and" / "এবং" between the Taka and Poisha clauses
    pub no_connector: bool,
}

impl CurrencyOptions {
    pub fn with_suffix(mut self) -> Self {
        self.add_suffix = true;
        self
    }

    pub fn without_connector(mut self) -> Self {
        self.no_connector = true;
        self
    }
}

/// A validated non-negative amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TakaAmount {
    /// Whole Taka as Western digits, leading zeros removed
    taka: String,
    /// 0-99
    poisha: u8,
}

impl TakaAmount {
    /// Parse an amount in either digit script
    ///
    /// Trailing zeros of the fraction are ignored, so `"123.450"` is
    /// 123 Taka 45 Poisha. A single fraction digit counts tens of Poisha.
    ///
    /// # Errors
    ///
    /// - [`Error::NegativeAmount`] if the amount is below zero
    /// - [`Error::InvalidNumberFormat`] if it is not a well-formed number
    /// - [`Error::PoishaPrecision`] if more than two significant fraction digits remain
    pub fn parse(input: impl Into<NumericInput>) -> Result<Self> {
        let input = input.into();
        if input.is_negative() {
            return Err(Error::NegativeAmount);
        }

        let text = input.to_western_text()?;
        let parsed = parse_number(&text).ok_or_else(|| Error::invalid_number(text.as_str()))?;

        let fraction = parsed.fraction.unwrap_or("");
        let significant = fraction.trim_end_matches('0');
        let poisha = match *significant.as_bytes() {
            [] => 0,
            [tens] => (tens - b'0') * 10,
            [tens, units] => (tens - b'0') * 10 + (units - b'0'),
            _ => {
                return Err(Error::PoishaPrecision {
                    digits: fraction.to_string(),
                })
            }
        };

        Ok(Self {
            taka: Magnitude::new(parsed.integer).as_str().to_string(),
            poisha,
        })
    }

    pub fn taka(&self) -> Magnitude<'_> {
        Magnitude::new(&self.taka)
    }

    pub fn poisha(&self) -> u8 {
        self.poisha
    }

    /// Render the amount as a phrase
    pub fn to_phrase(&self, language: Language, options: CurrencyOptions) -> String {
        let vocab = vocabulary(language);
        let words = &vocab.currency;

        let mut phrase = format!("{} {}", self.taka().to_words(vocab), words.taka);

        if self.poisha > 0 {
            if !options.no_connector {
                phrase.push(' ');
                phrase.push_str(words.connector);
            }
            let poisha = self.poisha.to_string();
            phrase.push(' ');
            phrase.push_str(&Magnitude::new(&poisha).to_words(vocab));
            phrase.push(' ');
            phrase.push_str(words.poisha);
        }

        if options.add_suffix {
            phrase.push(' ');
            phrase.push_str(words.suffix);
        }

        capitalize_first(&phrase)
    }
}

fn capitalize_first(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts an amount to a Taka/Poisha phrase
///
/// # Examples
/// ```
/// use bangla_utils_core::Language;
/// use bangla_utils_number::{currency_phrase, CurrencyOptions};
///
/// assert_eq!(
///     currency_phrase(123.45, Language::English, CurrencyOptions::default().with_suffix()).unwrap(),
///     "One hundred twenty-three taka and forty-five poisha only."
/// );
/// ```
pub fn currency_phrase(
    amount: impl Into<NumericInput>,
    language: Language,
    options: CurrencyOptions,
) -> Result<String> {
    let amount = TakaAmount::parse(amount)?;
    tracing::trace!(poisha = amount.poisha, ?options, "Parsed currency amount");
    Ok(amount.to_phrase(language, options))
}
