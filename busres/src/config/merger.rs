//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, FileNames};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use busres::config::{Config, ConfigMerger};
///
/// let low = Config { allow_duplicate_bookings: Some(true), ..Default::default() };
/// let high = Config { allow_duplicate_bookings: Some(false), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.allow_duplicate_bookings, Some(false));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configuration sources, given lowest precedence first.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Simple fields are overwritten when set in the source; file names are
    /// merged field by field.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.data_dir.is_some() {
            target.data_dir.clone_from(&source.data_dir);
        }

        if source.allow_duplicate_bookings.is_some() {
            target.allow_duplicate_bookings = source.allow_duplicate_bookings;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_files) = source.files {
            target.files = Some(match &target.files {
                Some(target_files) => Self::merge_file_names(target_files, source_files),
                None => source_files.clone(),
            });
        }
    }

    fn merge_file_names(target: &FileNames, source: &FileNames) -> FileNames {
        FileNames {
            buses: source.buses.clone().or_else(|| target.buses.clone()),
            customers: source.customers.clone().or_else(|| target.customers.clone()),
            reservations: source
                .reservations
                .clone()
                .or_else(|| target.reservations.clone()),
        }
    }
}
