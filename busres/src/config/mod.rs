//! Configuration system for busres.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and project `busres.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Explicit data directory (via `ConfigBuilder::with_data_dir`)
//! 2. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 3. Environment variables (`BUSRES_*`)
//! 4. Project config (`busres.yaml`, nearest ancestor of the working directory)
//! 5. User config (`<data_dir>/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use busres::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! let files = config.data_files().unwrap();
//! println!("buses are stored in {}", files.buses.display());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{default_data_dir, Config, DataFiles, FileNames, OutputFormat};
pub use validator::ConfigValidator;
