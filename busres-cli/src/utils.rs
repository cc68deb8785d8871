//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, opening the data files and resolving
//! customer names.

use crate::error::CliError;
use busres::store::RecordStore;
use busres::{
    BusRegistry, Config, ConfigBuilder, Customer, CustomerRegistry, Error as LibError,
    ReservationEngine,
};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,
}

/// The three file-backed components, opened together.
#[derive(Debug)]
pub struct AppState {
    /// The effective configuration.
    pub config: Config,
    /// Registered buses.
    pub buses: BusRegistry,
    /// Registered customers.
    pub customers: CustomerRegistry,
    /// Reservations and waiting lists.
    pub engine: ReservationEngine,
}

impl AppState {
    /// Looks up a registered customer by name.
    ///
    /// # Errors
    ///
    /// Returns `CustomerNotFound` if nobody is registered under `name`.
    pub fn customer(&self, name: &str) -> Result<Customer, CliError> {
        self.customers
            .lookup(name.trim())
            .cloned()
            .ok_or_else(|| {
                LibError::CustomerNotFound {
                    name: name.trim().to_string(),
                }
                .into()
            })
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir.clone());
    }

    builder.build().map_err(config_error)
}

/// Open the bus registry, customer registry and reservation engine.
///
/// A data file that exists but cannot be read is logged and treated as
/// empty, so the session continues with in-memory state.
pub fn open_state(global: &GlobalOptions) -> Result<AppState, CliError> {
    let config = load_configuration(global)?;
    let files = config.data_files().map_err(config_error)?;
    log::debug!("data directory: {}", files.data_dir.display());

    let buses = open_or_empty(&files.buses, BusRegistry::open, BusRegistry::new)?;
    let customers = open_or_empty(&files.customers, CustomerRegistry::open, CustomerRegistry::new)?;
    let options = config.engine_options();
    let engine = open_or_empty(
        &files.reservations,
        |store| ReservationEngine::open(store, options),
        |store| ReservationEngine::new(store, options),
    )?;

    Ok(AppState {
        config,
        buses,
        customers,
        engine,
    })
}

fn open_or_empty<T>(
    path: &Path,
    open: impl FnOnce(RecordStore) -> busres::Result<T>,
    empty: impl FnOnce(RecordStore) -> T,
) -> Result<T, CliError> {
    match open(RecordStore::new(path)) {
        Ok(component) => Ok(component),
        Err(e) if e.is_storage() => {
            log::warn!("could not load {}: {e}; starting empty", path.display());
            Ok(empty(RecordStore::new(path)))
        }
        Err(e) => Err(e.into()),
    }
}

fn config_error(e: LibError) -> CliError {
    match e {
        LibError::Configuration { .. } | LibError::InvalidPath { .. } => CliError::Library(e),
        other => CliError::Config(other.to_string()),
    }
}
