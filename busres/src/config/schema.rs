//! Configuration schema definitions.
//!
//! Every field is optional so that partial files and environment overrides
//! can be layered; accessors supply the built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::engine::EngineOptions;
use crate::error::{Error, Result};

/// Default bus file name inside the data directory.
pub const DEFAULT_BUS_FILE: &str = "buses.txt";
/// Default customer file name inside the data directory.
pub const DEFAULT_CUSTOMER_FILE: &str = "customers.txt";
/// Default reservations file name inside the data directory.
pub const DEFAULT_RESERVATION_FILE: &str = "reservations.txt";

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use busres::config::Config;
///
/// let config: Config = serde_yaml::from_str("allow_duplicate_bookings: false\n").unwrap();
/// assert!(!config.engine_options().allow_duplicate_bookings);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the data files (defaults to `~/.busres`).
    pub data_dir: Option<PathBuf>,

    /// Data file names, relative to the data directory.
    pub files: Option<FileNames>,

    /// Allow a customer to book several seats on one bus.
    pub allow_duplicate_bookings: Option<bool>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,
}

/// Data file names.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileNames {
    /// Bus registry file.
    pub buses: Option<String>,
    /// Customer registry file.
    pub customers: Option<String>,
    /// Reservations and waiting lists file.
    pub reservations: Option<String>,
}

/// Output format for list commands.
///
/// # Examples
///
/// ```
/// use busres::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Fully resolved data file locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    /// The data directory.
    pub data_dir: PathBuf,
    /// Bus registry file.
    pub buses: PathBuf,
    /// Customer registry file.
    pub customers: PathBuf,
    /// Reservations file.
    pub reservations: PathBuf,
}

/// Returns the default data directory, `~/.busres`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".busres"))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "Cannot determine home directory".into(),
        })
}

/// Expands a leading `~` to the home directory.
pub(crate) fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => home::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest)),
        Err(_) => path.to_path_buf(),
    }
}

impl Config {
    /// Returns the engine options this configuration selects.
    #[must_use]
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions::default()
            .with_allow_duplicate_bookings(self.allow_duplicate_bookings.unwrap_or(true))
    }

    /// Returns the configured output format, or the table format.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Resolves the data directory and the three data file paths.
    ///
    /// # Errors
    ///
    /// Returns an error if no data directory is configured and the home
    /// directory cannot be determined.
    pub fn data_files(&self) -> Result<DataFiles> {
        let data_dir = match &self.data_dir {
            Some(dir) => expand_home(dir),
            None => default_data_dir()?,
        };
        let files = self.files.clone().unwrap_or_default();
        let name = |value: &Option<String>, default: &str| {
            data_dir.join(value.as_deref().map_or(default, str::trim))
        };

        Ok(DataFiles {
            buses: name(&files.buses, DEFAULT_BUS_FILE),
            customers: name(&files.customers, DEFAULT_CUSTOMER_FILE),
            reservations: name(&files.reservations, DEFAULT_RESERVATION_FILE),
            data_dir,
        })
    }
}
