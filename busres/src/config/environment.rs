//! Environment variable handling for configuration overrides.
//!
//! `BUSRES_*` environment variables override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Overrides the data directory.
pub const DATA_DIR_ENV: &str = "BUSRES_DATA_DIR";
/// Overrides `allow_duplicate_bookings`.
pub const ALLOW_DUPLICATE_BOOKINGS_ENV: &str = "BUSRES_ALLOW_DUPLICATE_BOOKINGS";
/// Overrides `output_format`.
pub const OUTPUT_FORMAT_ENV: &str = "BUSRES_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use busres::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., an unrecognized boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(dir) = Self::data_dir() {
            config.data_dir = Some(dir);
        }

        if let Ok(val) = env::var(ALLOW_DUPLICATE_BOOKINGS_ENV) {
            config.allow_duplicate_bookings =
                Some(Self::parse_bool(ALLOW_DUPLICATE_BOOKINGS_ENV, &val)?);
        }

        if let Ok(val) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(Self::parse_output_format(&val)?);
        }

        Ok(())
    }

    /// Returns the data directory named by `BUSRES_DATA_DIR`, if set and
    /// non-empty.
    #[must_use]
    pub fn data_dir() -> Option<PathBuf> {
        env::var_os(DATA_DIR_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    fn parse_output_format(s: &str) -> Result<OutputFormat> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message: format!("Invalid output format: '{s}' (expected table/json/csv)"),
            }),
        }
    }
}
