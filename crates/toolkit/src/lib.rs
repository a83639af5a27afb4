//! Bangla utilities toolkit
//!
//! [`BanglaToolkit`] binds a validated [`Settings`] to every operation of the
//! workspace crates: digit transliteration, number formatting, number and
//! currency words, calendar names and arithmetic. Settings supply the
//! defaults (strict mode, output language, week start, decimal places,
//! currency options); the calls forward to the underlying crates.
//!
//! # Example
//! ```
//! use bangla_utils_toolkit::{BanglaToolkit, Language};
//!
//! let toolkit = BanglaToolkit::default();
//! assert_eq!(toolkit.format_number(1234567).unwrap(), "১২,৩৪,৫৬৭");
//! assert_eq!(toolkit.number_to_words(21).unwrap(), "একুশ");
//!
//! let english = toolkit.with_output(Language::English);
//! assert_eq!(english.number_to_words(21).unwrap(), "twenty-one");
//! ```

use serde_json::Value;

pub use bangla_utils_calendar::{CalendarInput, MonthCalendar, WeekStart};
pub use bangla_utils_config::{load_settings, ConfigError, CurrencyOptions, Settings};
pub use bangla_utils_core::{DigitScript, Error, Language, NumericInput, Result, Strictness};

use bangla_utils_calendar as calendar;
use bangla_utils_core as digits;
use bangla_utils_math as math;
use bangla_utils_number as number;

/// Settings-driven entry point to all conversions
#[derive(Debug, Clone, PartialEq)]
pub struct BanglaToolkit {
    settings: Settings,
    week_start: WeekStart,
}

impl Default for BanglaToolkit {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            week_start: WeekStart::default(),
        }
    }
}

impl BanglaToolkit {
    /// Create a toolkit from validated settings
    pub fn new(settings: Settings) -> std::result::Result<Self, ConfigError> {
        settings.validate()?;
        let week_start = settings.week_start()?;

        tracing::debug!(
            strict = settings.strict,
            output = %settings.output,
            week_start = %week_start,
            decimal_places = settings.math.decimal_places,
            "Created toolkit"
        );

        Ok(Self {
            settings,
            week_start,
        })
    }

    /// Create a toolkit from `config/` files and `BANGLA_UTILS__*` variables
    pub fn from_env(env: Option<&str>) -> std::result::Result<Self, ConfigError> {
        Self::new(load_settings(env)?)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn output(&self) -> Language {
        self.settings.output
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn strictness(&self) -> Strictness {
        self.settings.strictness()
    }

    /// Same settings, different output language
    pub fn with_output(&self, output: Language) -> Self {
        let mut toolkit = self.clone();
        toolkit.settings.output = output;
        toolkit
    }

    /// Same settings, different failure mode
    pub fn with_strict(&self, strict: bool) -> Self {
        let mut toolkit = self.clone();
        toolkit.settings.strict = strict;
        toolkit
    }

    fn degrade(&self, operation: &'static str, result: Result<String>) -> Result<String> {
        self.strictness().apply(operation, result)
    }

    // =========================================================================
    // Digits
    // =========================================================================

    pub fn to_bangla_digits(&self, input: impl Into<NumericInput>) -> Result<String> {
        digits::to_bangla_digits(input, self.settings.digits.strict)
    }

    pub fn to_english_digits(&self, input: impl Into<NumericInput>) -> Result<String> {
        digits::to_english_digits(input, self.settings.digits.strict)
    }

    /// Transliterate into the digits of the configured output language
    pub fn to_output_digits(&self, input: impl Into<NumericInput>) -> Result<String> {
        match self.output() {
            Language::Bangla => self.to_bangla_digits(input),
            Language::English => self.to_english_digits(input),
        }
    }

    pub fn is_valid_number(&self, input: impl Into<NumericInput>) -> bool {
        digits::is_valid_number(input)
    }

    pub fn detect_digit_script(&self, text: &str) -> DigitScript {
        digits::detect_digit_script(text)
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Group with commas (2-2-3) in the output language's digits
    pub fn format_number(&self, input: impl Into<NumericInput>) -> Result<String> {
        number::format_number(input, self.settings.strict, self.output())
    }

    /// Read a non-negative number in words
    pub fn number_to_words(&self, input: impl Into<NumericInput>) -> Result<String> {
        self.number_to_words_in(input, self.output())
    }

    pub fn number_to_words_in(
        &self,
        input: impl Into<NumericInput>,
        language: Language,
    ) -> Result<String> {
        self.degrade("number_to_words", number::words_of(input, language))
    }

    /// Read a JSON number or string in words
    pub fn json_to_words(&self, value: &Value) -> Result<String> {
        self.degrade(
            "number_to_words",
            number::words_of_value(value, self.output()),
        )
    }

    /// Read every digit separately
    pub fn digit_wise_words(&self, input: impl Into<NumericInput>) -> Result<String> {
        self.degrade(
            "digit_wise_words",
            number::digit_wise_words_of(input, self.output()),
        )
    }

    /// Taka/Poisha phrase using the configured currency options
    pub fn currency_in_words(&self, amount: impl Into<NumericInput>) -> Result<String> {
        self.currency_in_words_with(amount, self.settings.currency)
    }

    pub fn currency_in_words_with(
        &self,
        amount: impl Into<NumericInput>,
        options: CurrencyOptions,
    ) -> Result<String> {
        self.degrade(
            "currency_in_words",
            number::currency_phrase(amount, self.output(), options),
        )
    }

    // =========================================================================
    // Calendar
    // =========================================================================

    pub fn gregorian_month(&self, month: impl Into<CalendarInput>) -> Result<String> {
        calendar::gregorian_month(month, self.settings.strict)
    }

    pub fn bangla_calendar_month(&self, month: impl Into<CalendarInput>) -> Result<String> {
        calendar::bangla_calendar_month(month, self.settings.strict)
    }

    /// Weekday name, rotating indices by the configured week start
    pub fn weekday(&self, day: impl Into<CalendarInput>) -> Result<String> {
        let day = day.into();
        self.degrade("weekday", calendar::weekday_from(&day, self.week_start))
    }

    /// Weekday name with a per-call week start
    pub fn weekday_starting(
        &self,
        day: impl Into<CalendarInput>,
        week_start_day: &str,
    ) -> Result<String> {
        calendar::weekday(day, week_start_day, self.settings.strict)
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    pub fn add<I, T>(&self, values: I) -> Result<String>
    where
        I: IntoIterator<Item = T>,
        T: Into<NumericInput>,
    {
        self.degrade("add", math::add(values, self.output()))
    }

    pub fn subtract(
        &self,
        a: impl Into<NumericInput>,
        b: impl Into<NumericInput>,
    ) -> Result<String> {
        self.degrade("subtract", math::subtract(a, b, self.output()))
    }

    pub fn multiply<I, T>(&self, values: I) -> Result<String>
    where
        I: IntoIterator<Item = T>,
        T: Into<NumericInput>,
    {
        self.degrade("multiply", math::multiply(values, self.output()))
    }

    /// Division rounded to the configured decimal places
    pub fn divide(&self, a: impl Into<NumericInput>, b: impl Into<NumericInput>) -> Result<String> {
        let places = self.settings.math.decimal_places;
        self.degrade("divide", math::divide(a, b, places, self.output()))
    }

    pub fn modulo(&self, a: impl Into<NumericInput>, b: impl Into<NumericInput>) -> Result<String> {
        self.degrade("modulo", math::modulo(a, b, self.output()))
    }

    pub fn abs(&self, a: impl Into<NumericInput>) -> Result<String> {
        self.degrade("abs", math::abs(a, self.output()))
    }

    pub fn sqrt(&self, a: impl Into<NumericInput>) -> Result<String> {
        let places = self.settings.math.decimal_places;
        self.degrade("sqrt", math::sqrt(a, places, self.output()))
    }

    pub fn factorial(&self, a: impl Into<NumericInput>) -> Result<String> {
        self.degrade("factorial", math::factorial(a, self.output()))
    }

    pub fn pow(&self, a: impl Into<NumericInput>, b: impl Into<NumericInput>) -> Result<String> {
        self.degrade("pow", math::pow(a, b, self.output()))
    }

    pub fn log(&self, a: impl Into<NumericInput>) -> Result<String> {
        self.degrade("log", math::log(a, self.output()))
    }

    pub fn log10(&self, a: impl Into<NumericInput>) -> Result<String> {
        self.degrade("log10", math::log10(a, self.output()))
    }

    pub fn log2(&self, a: impl Into<NumericInput>) -> Result<String> {
        self.degrade("log2", math::log2(a, self.output()))
    }

    pub fn sin(&self, a: impl Into<NumericInput>) -> Result<String> {
        let places = self.settings.math.decimal_places;
        self.degrade("sin", math::sin(a, places, self.output()))
    }

    pub fn cos(&self, a: impl Into<NumericInput>) -> Result<String> {
        let places = self.settings.math.decimal_places;
        self.degrade("cos", math::cos(a, places, self.output()))
    }

    pub fn tan(&self, a: impl Into<NumericInput>) -> Result<String> {
        let places = self.settings.math.decimal_places;
        self.degrade("tan", math::tan(a, places, self.output()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_toolkit() {
        let toolkit = BanglaToolkit::default();
        assert_eq!(toolkit.output(), Language::Bangla);
        assert_eq!(toolkit.week_start(), WeekStart::SUNDAY);
        assert!(toolkit.strictness().is_strict());
        assert_eq!(toolkit, BanglaToolkit::new(Settings::default()).unwrap());
    }

    #[test]
    fn test_new_rejects_invalid_settings() {
        let mut settings = Settings::default();
        settings.calendar.week_start_day = "Caturday".to_string();
        assert!(matches!(
            BanglaToolkit::new(settings),
            Err(ConfigError::InvalidValue { .. })
        ));

        let mut settings = Settings::default();
        settings.math.decimal_places = 99;
        assert!(BanglaToolkit::new(settings).is_err());
    }

    #[test]
    fn test_digit_conversion_passes_text_through_by_default() {
        let toolkit = BanglaToolkit::default();
        assert!(toolkit.strictness().is_strict());

        assert_eq!(toolkit.to_bangla_digits("12:30").unwrap(), "১২:৩০");
        assert_eq!(toolkit.to_english_digits("০১৭-১২৩").unwrap(), "017-123");
        assert_eq!(toolkit.to_bangla_digits("abc").unwrap(), "abc");
        assert_eq!(toolkit.to_output_digits("Page 7").unwrap(), "Page ৭");
    }

    #[test]
    fn test_strict_digit_conversion_from_settings() {
        let mut settings = Settings::default();
        settings.digits.strict = true;
        let toolkit = BanglaToolkit::new(settings).unwrap();

        assert!(matches!(
            toolkit.to_bangla_digits("12:30"),
            Err(Error::NonNumericInput { .. })
        ));
        assert!(matches!(
            toolkit.to_english_digits("abc"),
            Err(Error::NonNumericInput { .. })
        ));
        assert_eq!(toolkit.to_bangla_digits("-12.5").unwrap(), "-১২.৫");
    }

    #[test]
    fn test_configured_week_start() {
        let mut settings = Settings::default();
        settings.calendar.week_start_day = "Monday".to_string();
        let toolkit = BanglaToolkit::new(settings).unwrap();

        assert_eq!(toolkit.weekday(0).unwrap(), "সোমবার");
        assert_eq!(toolkit.weekday_starting(0, "Sunday").unwrap(), "রবিবার");
    }

    #[test]
    fn test_lenient_settings_degrade_every_family() {
        let toolkit = BanglaToolkit::default().with_strict(false);

        assert_eq!(toolkit.number_to_words("abc").unwrap(), "");
        assert_eq!(toolkit.currency_in_words(-1).unwrap(), "");
        assert_eq!(toolkit.gregorian_month(13).unwrap(), "");
        assert_eq!(toolkit.weekday(9).unwrap(), "");
        assert_eq!(toolkit.divide(1, 0).unwrap(), "");
        assert_eq!(toolkit.format_number("x").unwrap(), "");
    }

    #[test]
    fn test_output_language_follows_settings() {
        let english = BanglaToolkit::default().with_output(Language::English);
        assert_eq!(english.add(["১", "২"]).unwrap(), "3");
        assert_eq!(english.to_output_digits("১২৩").unwrap(), "123");
        assert_eq!(
            english.currency_in_words(5.5).unwrap(),
            "Five taka and fifty poisha"
        );
        assert_eq!(english.number_to_words_in(5, Language::Bangla).unwrap(), "পাঁচ");
    }

    #[test]
    fn test_configured_decimal_places() {
        let mut settings = Settings::default();
        settings.math.decimal_places = 2;
        let toolkit = BanglaToolkit::new(settings).unwrap();
        assert_eq!(toolkit.divide(10, 3).unwrap(), "৩.৩৩");
        assert_eq!(toolkit.sqrt(2).unwrap(), "১.৪১");
    }

    #[test]
    fn test_configured_currency_options() {
        let mut settings = Settings::default();
        settings.currency = CurrencyOptions::default().with_suffix();
        let toolkit = BanglaToolkit::new(settings).unwrap();
        assert_eq!(
            toolkit.currency_in_words(1000).unwrap(),
            "এক হাজার টাকা মাত্র।"
        );
        assert_eq!(
            toolkit
                .currency_in_words_with(1000, CurrencyOptions::default())
                .unwrap(),
            "এক হাজার টাকা"
        );
    }
}
