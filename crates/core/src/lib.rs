//! Core types for Bangla/English numeric conversion
//!
//! This crate provides foundational types used by all other crates:
//! - Language definitions (Bangla, English) and their digit scripts
//! - Error types shared across the workspace
//! - Numeric input handling (native numbers, digit strings, JSON values)
//! - Digit transliteration between Bangla and Western glyphs
//! - Number validity checks
//! - Strict/lenient failure handling

pub mod digits;
pub mod error;
pub mod input;
pub mod language;
pub mod strict;
pub mod validity;

pub use digits::{
    detect_digit_script, to_bangla_digits, to_english_digits, transliterate, DigitScript,
    BANGLA_DIGITS,
};
pub use error::{Error, Result};
pub use input::{render_f64, NumericInput};
pub use language::{Language, Script};
pub use strict::Strictness;
pub use validity::{is_valid_number, parse_number, ParsedNumber};
