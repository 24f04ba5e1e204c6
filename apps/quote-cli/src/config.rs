//! Quote CLI configuration.
//!
//! ## Configuration Sources (Priority Order, highest first)
//! 1. Command-line flags (`--locale`, `--display-currency`)
//! 2. Environment variables (`SITEDROP_*`, e.g. `SITEDROP_LOCALE=de-DE`)
//! 3. Config file (`--config FILE`, else `sitedrop.toml` if present)
//! 4. Defaults (this file)

use std::path::Path;

use ::config::{Config, Environment, File};
use serde::Deserialize;
use sitedrop_core::{
    CurrencyCode, DeliveryPolicy, DisplaySettings, Locale, RateUnit, ROUND_TRIP_FACTOR,
};

use crate::cli::Args;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "SITEDROP";

/// Looked up in the working directory when no `--config` is given.
const DEFAULT_CONFIG_NAME: &str = "sitedrop";

/// Raw configuration as loaded; [`QuoteConfig::display_settings`] turns it
/// into validated core types.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuoteConfig {
    /// Marketplace display currency (ISO 4217)
    pub display_currency: String,

    /// BCP 47 locale tag for money labels
    pub locale: String,

    /// Multiplier on the one-way distance
    pub round_trip_factor: f64,

    /// Unit of listings' `deliveryPricePerKm`
    pub rate_unit: RateUnit,

    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl QuoteConfig {
    /// Load configuration from defaults, file and `SITEDROP_*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let settings = Config::builder()
            .set_default("display_currency", "USD")?
            .set_default("locale", Locale::default().tag())?
            .set_default("round_trip_factor", ROUND_TRIP_FACTOR)?
            .set_default("rate_unit", "minor_per_km")?
            .set_default("log_level", "info")?
            .add_source(file)
            .add_source(Environment::with_prefix(env_prefix).try_parsing(true))
            .build()?;

        let config: QuoteConfig = settings.try_deserialize()?;

        // Fail at startup, not on the first quote
        config.display_settings()?;

        Ok(config)
    }

    /// Applies command-line flags on top of the loaded values.
    pub fn with_overrides(mut self, args: &Args) -> Self {
        if let Some(locale) = &args.locale {
            self.locale = locale.clone();
        }
        if let Some(currency) = &args.display_currency {
            self.display_currency = currency.clone();
        }
        self
    }

    /// Validated settings for [`sitedrop_core::ListingQuote::build`].
    pub fn display_settings(&self) -> Result<DisplaySettings, ConfigError> {
        let display_currency =
            CurrencyCode::parse(&self.display_currency).map_err(|e| ConfigError::InvalidValue {
                key: "display_currency",
                reason: e.to_string(),
            })?;

        let locale: Locale = self.locale.parse().map_err(|e: sitedrop_core::ValidationError| {
            ConfigError::InvalidValue {
                key: "locale",
                reason: e.to_string(),
            }
        })?;

        let policy = DeliveryPolicy::new(self.round_trip_factor, self.rate_unit).map_err(|e| {
            ConfigError::InvalidValue {
                key: "round_trip_factor",
                reason: e.to_string(),
            }
        })?;

        Ok(DisplaySettings {
            display_currency,
            locale,
            policy,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = QuoteConfig::load_with_prefix(None, "SITEDROP_TEST_DEFAULTS").unwrap();

        assert_eq!(config.display_currency, "USD");
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.round_trip_factor, 2.0);
        assert_eq!(config.rate_unit, RateUnit::MinorPerKm);
        assert_eq!(config.log_level, "info");

        assert_eq!(config.display_settings().unwrap(), DisplaySettings::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = toml_file(
            r#"
            display_currency = "EUR"
            locale = "de-DE"
            round_trip_factor = 1.0
            rate_unit = "major_per_km"
            "#,
        );

        let config =
            QuoteConfig::load_with_prefix(Some(file.path()), "SITEDROP_TEST_FILE").unwrap();
        let settings = config.display_settings().unwrap();

        assert_eq!(settings.display_currency, CurrencyCode::EUR);
        assert_eq!(settings.locale, Locale::DeDe);
        assert_eq!(settings.policy.round_trip_factor, 1.0);
        assert_eq!(settings.policy.rate_unit, RateUnit::MajorPerKm);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_env_overrides_file() {
        let file = toml_file(r#"locale = "de-DE""#);
        std::env::set_var("SITEDROP_TEST_ENV_LOCALE", "fi-FI");

        let config = QuoteConfig::load_with_prefix(Some(file.path()), "SITEDROP_TEST_ENV").unwrap();
        assert_eq!(config.locale, "fi-FI");

        std::env::remove_var("SITEDROP_TEST_ENV_LOCALE");
    }

    #[test]
    fn test_invalid_values_rejected_at_load() {
        let file = toml_file(r#"locale = "tlh-KLINGON""#);
        let err =
            QuoteConfig::load_with_prefix(Some(file.path()), "SITEDROP_TEST_BAD").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "locale", .. }));

        let file = toml_file(r#"round_trip_factor = -2.0"#);
        let err =
            QuoteConfig::load_with_prefix(Some(file.path()), "SITEDROP_TEST_BAD").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "round_trip_factor", .. }));

        let file = toml_file(r#"display_currency = "dollars""#);
        let err =
            QuoteConfig::load_with_prefix(Some(file.path()), "SITEDROP_TEST_BAD").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "display_currency", .. }));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let path = Path::new("/nonexistent/sitedrop.toml");
        let err = QuoteConfig::load_with_prefix(Some(path), "SITEDROP_TEST_MISSING").unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }
}
