//! Arithmetic operations
//!
//! Every operation parses its operands after digit normalization and
//! renders the result with the shortest round-trip decimal form. Rounding
//! is half away from zero; negative zero renders as `0`.

use bangla_utils_core::{
    parse_number, render_f64, transliterate, Error, Language, NumericInput, Result, Script,
};

/// Rounding precision used when the caller gives none
pub const DEFAULT_DECIMAL_PLACES: u32 = 12;

/// Larger precisions are clamped; `f64` carries about 15-17 significant digits
pub const MAX_DECIMAL_PLACES: u32 = 15;

/// Parse one operand
fn operand(input: impl Into<NumericInput>) -> Result<f64> {
    match input.into() {
        NumericInput::Integer(i) => Ok(i as f64),
        NumericInput::Float(f) if f.is_finite() => Ok(f),
        NumericInput::Float(f) => Err(Error::invalid_number(f.to_string())),
        NumericInput::Text(s) => {
            let western = transliterate(s.trim(), Script::Latin);
            parse_number(&western)
                .and_then(|_| western.parse::<f64>().ok())
                .ok_or_else(|| Error::invalid_number(s))
        }
    }
}

/// Render a result in the output language's digits
fn render(operation: &'static str, value: f64, output: Language) -> Result<String> {
    if !value.is_finite() {
        tracing::debug!(operation, %value, "Result is not a finite number");
        return Err(Error::domain(operation, "result is not a finite number"));
    }
    Ok(transliterate(&render_f64(value), output.script()))
}

/// Round half away from zero to `decimal_places` (clamped to [`MAX_DECIMAL_PLACES`])
pub fn round_to(value: f64, decimal_places: u32) -> f64 {
    let factor = 10f64.powi(decimal_places.min(MAX_DECIMAL_PLACES) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

fn fold<I, T>(values: I, init: f64, f: impl Fn(f64, f64) -> f64) -> Result<f64>
where
    I: IntoIterator<Item = T>,
    T: Into<NumericInput>,
{
    let mut values = values.into_iter().peekable();
    if values.peek().is_none() {
        return Err(Error::invalid_number(""));
    }
    values.try_fold(init, |acc, value| -> Result<f64> { Ok(f(acc, operand(value)?)) })
}

/// Sum of one or more operands
///
/// # Examples
/// ```
/// use bangla_utils_core::Language;
/// use bangla_utils_math::add;
///
/// assert_eq!(add(["৫", "১০", "5"], Language::Bangla).unwrap(), "২০");
/// assert_eq!(add([5.5, 10.5], Language::English).unwrap(), "16");
/// ```
pub fn add<I, T>(values: I, output: Language) -> Result<String>
where
    I: IntoIterator<Item = T>,
    T: Into<NumericInput>,
{
    render("add", fold(values, 0.0, |acc, x| acc + x)?, output)
}

pub fn subtract(
    a: impl Into<NumericInput>,
    b: impl Into<NumericInput>,
    output: Language,
) -> Result<String> {
    render("subtract", operand(a)? - operand(b)?, output)
}

/// Product of one or more operands
pub fn multiply<I, T>(values: I, output: Language) -> Result<String>
where
    I: IntoIterator<Item = T>,
    T: Into<NumericInput>,
{
    render("multiply", fold(values, 1.0, |acc, x| acc * x)?, output)
}

/// `a / b` rounded to `decimal_places`
pub fn divide(
    a: impl Into<NumericInput>,
    b: impl Into<NumericInput>,
    decimal_places: u32,
    output: Language,
) -> Result<String> {
    let (a, b) = (operand(a)?, operand(b)?);
    if b == 0.0 {
        return Err(Error::DivisionByZero);
    }
    render("divide", round_to(a / b, decimal_places), output)
}

/// Remainder of `a / b`, carrying the sign of `a`
pub fn modulo(
    a: impl Into<NumericInput>,
    b: impl Into<NumericInput>,
    output: Language,
) -> Result<String> {
    let (a, b) = (operand(a)?, operand(b)?);
    if b == 0.0 {
        return Err(Error::DivisionByZero);
    }
    render("modulo", a % b, output)
}

pub fn abs(a: impl Into<NumericInput>, output: Language) -> Result<String> {
    render("abs", operand(a)?.abs(), output)
}

/// Square root rounded to `decimal_places`
pub fn sqrt(a: impl Into<NumericInput>, decimal_places: u32, output: Language) -> Result<String> {
    let a = operand(a)?;
    if a < 0.0 {
        return Err(Error::domain("sqrt", "input must not be negative"));
    }
    render("sqrt", round_to(a.sqrt(), decimal_places), output)
}

/// `a!` for a non-negative whole number
pub fn factorial(a: impl Into<NumericInput>, output: Language) -> Result<String> {
    let input = a.into();
    let n = operand(input.clone())?;
    if n < 0.0 || n.fract() != 0.0 {
        return Err(Error::invalid_number(input.to_text()?));
    }

    let mut result = 1.0_f64;
    let mut i = 2.0;
    while i <= n && result.is_finite() {
        result *= i;
        i += 1.0;
    }
    render("factorial", result, output)
}

pub fn pow(
    a: impl Into<NumericInput>,
    b: impl Into<NumericInput>,
    output: Language,
) -> Result<String> {
    render("pow", operand(a)?.powf(operand(b)?), output)
}

fn logarithm(
    operation: &'static str,
    a: impl Into<NumericInput>,
    f: fn(f64) -> f64,
    output: Language,
) -> Result<String> {
    let a = operand(a)?;
    if a <= 0.0 {
        return Err(Error::domain(operation, "input must be a positive number"));
    }
    render(operation, round_to(f(a), DEFAULT_DECIMAL_PLACES), output)
}

/// Natural logarithm, rounded to 12 places
pub fn log(a: impl Into<NumericInput>, output: Language) -> Result<String> {
    logarithm("log", a, f64::ln, output)
}

pub fn log10(a: impl Into<NumericInput>, output: Language) -> Result<String> {
    logarithm("log10", a, f64::log10, output)
}

pub fn log2(a: impl Into<NumericInput>, output: Language) -> Result<String> {
    logarithm("log2", a, f64::log2, output)
}

/// Sine of an angle in radians
pub fn sin(a: impl Into<NumericInput>, decimal_places: u32, output: Language) -> Result<String> {
    render("sin", round_to(operand(a)?.sin(), decimal_places), output)
}

pub fn cos(a: impl Into<NumericInput>, decimal_places: u32, output: Language) -> Result<String> {
    render("cos", round_to(operand(a)?.cos(), decimal_places), output)
}

pub fn tan(a: impl Into<NumericInput>, decimal_places: u32, output: Language) -> Result<String> {
    render("tan", round_to(operand(a)?.tan(), decimal_places), output)
}
