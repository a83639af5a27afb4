//! Numeric input accepted by every public operation
//!
//! Callers may pass native numbers or strings in either digit script.
//! Dynamically typed values (JSON) go through [`NumericInput::from_json`],
//! which is where non-number, non-string input is rejected.

use serde_json::Value;

use crate::{transliterate, Error, Result, Script};

/// A number or a numeric string
#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput {
    Integer(i64),
    Float(f64),
    /// Text in Bangla or Western digits; not yet validated
    Text(String),
}

impl NumericInput {
    /// Convert a JSON value, rejecting null, booleans, arrays and objects
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::Integer(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Self::Text(u.to_string()))
                } else {
                    n.as_f64().map(Self::Float).ok_or(Error::InvalidInputType)
                }
            }
            Value::String(s) => Ok(Self::Text(s.clone())),
            _ => Err(Error::InvalidInputType),
        }
    }

    /// The input as text, exactly as the caller supplied it
    ///
    /// Numbers use the shortest round-trip decimal form. Non-finite
    /// floats have no numeric text and are rejected.
    pub fn to_text(&self) -> Result<String> {
        match self {
            Self::Integer(i) => Ok(i.to_string()),
            Self::Float(f) if f.is_finite() => Ok(render_f64(*f)),
            Self::Float(f) => Err(Error::invalid_number(f.to_string())),
            Self::Text(s) => Ok(s.clone()),
        }
    }

    /// The input as text with every digit converted to Western glyphs
    pub fn to_western_text(&self) -> Result<String> {
        match self {
            Self::Text(s) => Ok(transliterate(s, Script::Latin)),
            _ => self.to_text(),
        }
    }

    /// True if the value is numerically below zero
    ///
    /// Text is inspected for a leading minus sign only.
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Integer(i) => *i < 0,
            Self::Float(f) => *f < 0.0,
            Self::Text(s) => s.starts_with('-'),
        }
    }
}

/// Render a finite float the way it reads: `123.0` as `"123"`, `-0.0` as `"0"`
pub fn render_f64(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

macro_rules! integer_input {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for NumericInput {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

integer_input!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for NumericInput {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(Self::Integer)
            .unwrap_or_else(|_| Self::Text(value.to_string()))
    }
}

impl From<usize> for NumericInput {
    fn from(value: usize) -> Self {
        Self::from(value as u64)
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for NumericInput {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for NumericInput {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}
