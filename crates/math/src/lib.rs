//! Arithmetic helpers over mixed-script numeric input
//!
//! Operands may be native numbers or strings in Bangla or Western digits.
//! Results are rendered in the digits of the requested output language.
//! Arithmetic is plain `f64`.

pub mod operations;

pub use operations::{
    abs, add, cos, divide, factorial, log, log10, log2, modulo, multiply, pow, round_to, sin,
    sqrt, subtract, tan, DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES,
};
