//! Configuration validation.

use crate::config::schema::{
    Config, FileNames, DEFAULT_BUS_FILE, DEFAULT_CUSTOMER_FILE, DEFAULT_RESERVATION_FILE,
};
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use busres::config::{Config, ConfigValidator, FileNames};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config {
///     files: Some(FileNames { buses: Some("../buses.txt".into()), ..Default::default() }),
///     ..Default::default()
/// };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref dir) = config.data_dir {
            if dir.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "data_dir".into(),
                    message: "Cannot be empty".into(),
                });
            }
        }

        if let Some(ref files) = config.files {
            Self::validate_file_names(files)?;
        }

        Ok(())
    }

    fn validate_file_names(files: &FileNames) -> Result<()> {
        let entries = [
            ("files.buses", &files.buses),
            ("files.customers", &files.customers),
            ("files.reservations", &files.reservations),
        ];

        for (field, value) in entries {
            if let Some(name) = value {
                Self::validate_file_name(field, name)?;
            }
        }

        let defaults = [DEFAULT_BUS_FILE, DEFAULT_CUSTOMER_FILE, DEFAULT_RESERVATION_FILE];
        let names: Vec<&str> = entries
            .iter()
            .zip(defaults)
            .map(|((_, value), default)| value.as_deref().map_or(default, str::trim))
            .collect();
        for (i, name) in names.iter().enumerate() {
            if names[i + 1..].contains(name) {
                return Err(Error::Validation {
                    field: "files".into(),
                    message: format!("File name '{name}' is used for more than one data file"),
                });
            }
        }

        Ok(())
    }

    /// Checks that a file name is a single, non-empty path component.
    fn validate_file_name(field: &str, name: &str) -> Result<()> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if trimmed.contains(['/', '\\', '\0']) {
            return Err(Error::Validation {
                field: field.into(),
                message: "Must be a plain file name without path separators".into(),
            });
        }

        if trimmed == "." || trimmed == ".." {
            return Err(Error::Validation {
                field: field.into(),
                message: "Must name a file".into(),
            });
        }

        Ok(())
    }
}
