//! Main settings module

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

use bangla_utils_calendar::WeekStart;
use bangla_utils_core::{Language, Strictness};
use bangla_utils_number::CurrencyOptions;

use crate::constants::{
    sources, DEFAULT_DECIMAL_PLACES, DEFAULT_WEEK_START_DAY, MAX_DECIMAL_PLACES,
};
use crate::ConfigError;

/// Defaults applied by the toolkit to every call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Fail with an error (true) or return an empty result (false)
    #[serde(default = "default_strict")]
    pub strict: bool,

    /// Language of words and script of digits in results
    #[serde(default)]
    pub output: Language,

    #[serde(default)]
    pub digits: DigitsConfig,

    #[serde(default)]
    pub calendar: CalendarConfig,

    #[serde(default)]
    pub math: MathConfig,

    #[serde(default)]
    pub currency: CurrencyOptions,
}

fn default_strict() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strict: default_strict(),
            output: Language::default(),
            digits: DigitsConfig::default(),
            calendar: CalendarConfig::default(),
            math: MathConfig::default(),
            currency: CurrencyOptions::default(),
        }
    }
}

/// Digit transliteration settings
///
/// Lenient by default: text around the digits, such as `12:30` or a phone
/// number with dashes, is passed through with only the digits replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitsConfig {
    /// Reject anything that is not a number string
    #[serde(default)]
    pub strict: bool,
}

/// Calendar settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Full or short weekday name treated as day 0
    #[serde(default = "default_week_start_day")]
    pub week_start_day: String,
}

fn default_week_start_day() -> String {
    DEFAULT_WEEK_START_DAY.to_string()
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            week_start_day: default_week_start_day(),
        }
    }
}

/// Arithmetic settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathConfig {
    /// Rounding precision for division, roots and trigonometry
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

fn default_decimal_places() -> u32 {
    DEFAULT_DECIMAL_PLACES
}

impl Default for MathConfig {
    fn default() -> Self {
        Self {
            decimal_places: default_decimal_places(),
        }
    }
}

impl Settings {
    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_calendar()?;
        self.validate_math()?;
        Ok(())
    }

    fn validate_calendar(&self) -> Result<(), ConfigError> {
        self.week_start().map(|_| ())
    }

    fn validate_math(&self) -> Result<(), ConfigError> {
        if self.math.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConfigError::InvalidValue {
                field: "math.decimal_places".to_string(),
                message: format!(
                    "Must be between 0 and {}, got {}",
                    MAX_DECIMAL_PLACES, self.math.decimal_places
                ),
            });
        }
        Ok(())
    }

    /// Resolved week start
    pub fn week_start(&self) -> Result<WeekStart, ConfigError> {
        WeekStart::parse(&self.calendar.week_start_day).map_err(|err| ConfigError::InvalidValue {
            field: "calendar.week_start_day".to_string(),
            message: err.to_string(),
        })
    }

    pub fn strictness(&self) -> Strictness {
        Strictness::from(self.strict)
    }

    /// Serialize as TOML, e.g. to write a `config/default.toml`
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Load settings from `config/` and the environment
///
/// Sources, later ones overriding earlier ones:
/// 1. `config/default.{toml,yaml,json}` (optional)
/// 2. `config/{env}.{toml,yaml,json}` (optional)
/// 3. `BANGLA_UTILS__*` environment variables
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from(sources::CONFIG_DIR, env)
}

/// [`load_settings`] with an explicit configuration directory
pub fn load_settings_from(
    dir: impl AsRef<Path>,
    env: Option<&str>,
) -> Result<Settings, ConfigError> {
    let dir = dir.as_ref();
    let mut builder = Config::builder();

    // Load default config
    let default_path = dir.join(sources::DEFAULT_FILE);
    builder = builder.add_source(File::with_name(&default_path.to_string_lossy()).required(false));

    // Load environment-specific config
    if let Some(env_name) = env {
        validate_env_name(env_name)?;
        let env_path = dir.join(env_name);
        builder = builder.add_source(File::with_name(&env_path.to_string_lossy()).required(false));
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix(sources::ENV_PREFIX)
            .separator(sources::ENV_SEPARATOR)
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    // Validate
    settings.validate()?;

    tracing::debug!(
        dir = %dir.display(),
        env = env.unwrap_or("-"),
        strict = settings.strict,
        output = %settings.output,
        "Loaded settings"
    );

    Ok(settings)
}

/// Load settings from one file that must exist
pub fn load_settings_file(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let settings: Settings = Config::builder()
        .add_source(File::from(path))
        .build()?
        .try_deserialize()?;
    settings.validate()?;

    tracing::debug!(path = %path.display(), "Loaded settings file");
    Ok(settings)
}

/// Parse and validate settings from an in-memory document
pub fn parse_settings(contents: &str, format: FileFormat) -> Result<Settings, ConfigError> {
    let settings: Settings = Config::builder()
        .add_source(File::from_str(contents, format))
        .build()?
        .try_deserialize()?;
    settings.validate()?;
    Ok(settings)
}

fn validate_env_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
        return Err(ConfigError::Environment(format!(
            "'{}' is not a valid environment name",
            name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.strict);
        assert!(!settings.digits.strict);
        assert_eq!(settings.output, Language::Bangla);
        assert_eq!(settings.calendar.week_start_day, "Sunday");
        assert_eq!(settings.math.decimal_places, 12);
        assert!(!settings.currency.add_suffix);
        assert!(!settings.currency.no_connector);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = Settings::default();
        settings.math.decimal_places = 16; // Too high
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "math.decimal_places"
        ));

        settings.math.decimal_places = 0;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_week_start_validation() {
        let mut settings = Settings::default();
        settings.calendar.week_start_day = "Funday".to_string();
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "calendar.week_start_day"
        ));

        settings.calendar.week_start_day = "mon".to_string();
        assert_eq!(settings.week_start().unwrap(), WeekStart::MONDAY);
    }

    #[test]
    fn test_parse_partial_toml() {
        let settings = parse_settings(
            r#"
            strict = false
            output = "en"

            [digits]
            strict = true

            [currency]
            add_suffix = true
            "#,
            FileFormat::Toml,
        )
        .unwrap();

        assert!(!settings.strict);
        assert!(settings.digits.strict);
        assert_eq!(settings.output, Language::English);
        assert!(settings.currency.add_suffix);
        assert_eq!(settings.math.decimal_places, DEFAULT_DECIMAL_PLACES);
        assert_eq!(settings.strictness(), Strictness::Lenient);
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        let result = parse_settings(
            r#"{"calendar": {"week_start_day": "someday"}}"#,
            FileFormat::Json,
        );
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));

        let result = parse_settings(r#"output = "french""#, FileFormat::Toml);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut settings = Settings::default();
        settings.output = Language::English;
        settings.math.decimal_places = 4;

        let text = settings.to_toml_string().unwrap();
        assert_eq!(parse_settings(&text, FileFormat::Toml).unwrap(), settings);
    }

    #[test]
    fn test_load_layered_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "output = \"english\"\n[math]\ndecimal_places = 6\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("production.toml"),
            "[math]\ndecimal_places = 2\n",
        )
        .unwrap();

        let base = load_settings_from(dir.path(), None).unwrap();
        assert_eq!(base.output, Language::English);
        assert_eq!(base.math.decimal_places, 6);

        let production = load_settings_from(dir.path(), Some("production")).unwrap();
        assert_eq!(production.output, Language::English);
        assert_eq!(production.math.decimal_places, 2);
    }

    #[test]
    fn test_load_from_empty_dir_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(dir.path(), Some("staging")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bangla.toml");
        fs::write(&path, "strict = false\n").unwrap();
        assert!(!load_settings_file(&path).unwrap().strict);

        assert!(matches!(
            load_settings_file(dir.path().join("missing.toml")),
            Err(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_env_name() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_settings_from(dir.path(), Some("../etc")),
            Err(ConfigError::Environment(_))
        ));
        assert!(load_settings_from(dir.path(), Some("")).is_err());
    }
}
