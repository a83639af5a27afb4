//! Language definitions
//!
//! Two vocabularies are supported: Bangla (Bengali script) and English
//! (Latin script with Western digits).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Supported output languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "bn", alias = "bengali")]
    Bangla,
    #[serde(alias = "en")]
    English,
}

impl Language {
    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bangla => "Bangla",
            Self::English => "English",
        }
    }

    /// Get script used by this language
    pub fn script(&self) -> Script {
        match self {
            Self::Bangla => Script::Bengali,
            Self::English => Script::Latin,
        }
    }

    /// Map an "in English" flag onto a language
    pub fn from_english_flag(in_english: bool) -> Self {
        if in_english {
            Self::English
        } else {
            Self::Bangla
        }
    }

    /// All supported languages
    pub fn all() -> &'static [Language] {
        &[Self::Bangla, Self::English]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bn" | "bangla" | "bengali" => Ok(Self::Bangla),
            "en" | "english" => Ok(Self::English),
            _ => Err(Error::UnrecognizedName {
                field: "language",
                name: s.to_string(),
            }),
        }
    }
}

/// Writing systems used for digit output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Bengali,
    Latin,
}

impl Script {
    /// Digit glyphs of this script, indexed by numeric value
    pub fn digits(&self) -> &'static [char; 10] {
        match self {
            Self::Bengali => &crate::digits::BANGLA_DIGITS,
            Self::Latin => &crate::digits::WESTERN_DIGITS,
        }
    }
}
