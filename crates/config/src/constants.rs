//! Shared configuration constants
//!
//! Single source for the defaults and limits that settings, validation
//! and the toolkit agree on.

pub use bangla_utils_math::{DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES};
pub use bangla_utils_number::MAX_SAFE_INTEGER;

/// Week start used when none is configured
pub const DEFAULT_WEEK_START_DAY: &str = "Sunday";

/// Configuration sources
pub mod sources {
    /// Directory searched for configuration files
    pub const CONFIG_DIR: &str = "config";

    /// Base file name, loaded before the environment-specific file
    pub const DEFAULT_FILE: &str = "default";

    /// Prefix for environment overrides, e.g. `BANGLA_UTILS__MATH__DECIMAL_PLACES`
    pub const ENV_PREFIX: &str = "BANGLA_UTILS";

    /// Separator between nested keys in environment variable names
    pub const ENV_SEPARATOR: &str = "__";
}
