//! Error types

use thiserror::Error;

/// Errors raised by conversion, formatting, calendar and math operations
///
/// Every operation either succeeds with a complete result or fails with
/// exactly one of these kinds.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Input is neither a number nor a string (null, boolean, array, object)
    #[error("Input must be a number or string.")]
    InvalidInputType,

    #[error("Invalid input: '{input}' is not a valid number string")]
    InvalidNumberFormat { input: String },

    /// Strict-mode digit conversion of something that is not a number
    #[error("Invalid input: '{input}' must consist of only numeric digits")]
    NonNumericInput { input: String },

    #[error("Invalid {field}: {value} (must be between {min} and {max})")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: i64,
        max: i64,
    },

    #[error("Invalid {field}: '{name}' is not a valid full or short name")]
    UnrecognizedName { field: &'static str, name: String },

    #[error("Negative amounts are not allowed")]
    NegativeAmount,

    #[error("Poisha part cannot exceed 2 digits (got '{digits}')")]
    PoishaPrecision { digits: String },

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Invalid input for {operation}: {message}")]
    Domain {
        operation: &'static str,
        message: String,
    },
}

impl Error {
    pub fn invalid_number(input: impl Into<String>) -> Self {
        Self::InvalidNumberFormat {
            input: input.into(),
        }
    }

    pub fn non_numeric(input: impl Into<String>) -> Self {
        Self::NonNumericInput {
            input: input.into(),
        }
    }

    /// `value` is kept as written, so inputs wider than `i64` are reported exactly
    pub fn out_of_range(field: &'static str, value: impl ToString, min: i64, max: i64) -> Self {
        Self::OutOfRange {
            field,
            value: value.to_string(),
            min,
            max,
        }
    }

    pub fn domain(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Domain {
            operation,
            message: message.into(),
        }
    }

    /// True for the calendar input failures (out-of-range index or unknown name)
    pub fn is_calendar_input(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::UnrecognizedName { .. })
    }

    /// Stable short name of the error kind, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInputType => "invalid_input_type",
            Self::InvalidNumberFormat { .. } => "invalid_number_format",
            Self::NonNumericInput { .. } => "non_numeric_input",
            Self::OutOfRange { .. } => "out_of_range",
            Self::UnrecognizedName { .. } => "unrecognized_name",
            Self::NegativeAmount => "negative_amount",
            Self::PoishaPrecision { .. } => "poisha_precision",
            Self::DivisionByZero => "division_by_zero",
            Self::Domain { .. } => "domain",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
