//! Number formatting and number-to-words conversion
//!
//! Features:
//! - Lakh/crore digit grouping (`12,34,567`)
//! - Place-value words over the Indian scale, Bangla and English
//! - Digit-by-digit reading
//! - Taka/Poisha currency phrases

pub mod currency;
pub mod format;
pub mod words;

pub use currency::{currency_phrase, CurrencyOptions, TakaAmount};
pub use format::{format_number, group_digits, MAX_SAFE_INTEGER};
pub use words::{
    digit_wise_words_of, digit_wise_words_of_value, words_of, words_of_value, Magnitude,
};
