//! Strict/lenient failure handling
//!
//! Strict calls surface the error. Lenient calls turn any error into the
//! neutral value of the return type (empty string, `false`), never a
//! partial result.

use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    #[default]
    Strict,
    Lenient,
}

impl Strictness {
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Strict)
    }

    /// Apply to a string-producing result
    pub fn apply(self, operation: &'static str, result: Result<String>) -> Result<String> {
        self.degrade(operation, result, String::new)
    }

    /// Apply to a predicate result
    pub fn apply_flag(self, operation: &'static str, result: Result<bool>) -> Result<bool> {
        self.degrade(operation, result, || false)
    }

    fn degrade<T>(
        self,
        operation: &'static str,
        result: Result<T>,
        neutral: impl FnOnce() -> T,
    ) -> Result<T> {
        match (self, result) {
            (Self::Lenient, Err(err)) => {
                tracing::trace!(
                    operation,
                    kind = err.kind(),
                    error = %err,
                    "Lenient mode, returning neutral value"
                );
                Ok(neutral())
            }
            (_, result) => result,
        }
    }
}

impl From<bool> for Strictness {
    fn from(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}
