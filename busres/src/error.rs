//! Error types for the busres library.
//!
//! This module provides the error hierarchy shared by the record store, the
//! registries and the reservation engine, using `thiserror` for ergonomic
//! error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a busres error.
///
/// # Examples
///
/// ```
/// use busres::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the busres library.
#[derive(Debug, Error)]
pub enum Error {
    /// A persisted record line could not be decoded.
    ///
    /// Loaders recover from this locally by skipping the offending line.
    #[error("malformed {kind} record '{line}': {reason}")]
    Format {
        /// The kind of record being decoded (e.g. "bus").
        kind: &'static str,
        /// The offending line.
        line: String,
        /// Why decoding failed.
        reason: String,
    },

    /// No bus is registered under the requested number.
    #[error("no bus registered with number {bus_number}")]
    BusNotFound {
        /// The unknown bus number.
        bus_number: String,
    },

    /// No customer is registered under the requested name.
    #[error("customer not found: {name}")]
    CustomerNotFound {
        /// The unknown customer name.
        name: String,
    },

    /// The customer holds no seat on the bus.
    #[error("{name} has no reservation on bus {bus_number}")]
    NotReserved {
        /// The customer name.
        name: String,
        /// The bus number.
        bus_number: String,
    },

    /// The customer already holds a seat and duplicate bookings are disabled.
    #[error("{name} already holds a seat on bus {bus_number}")]
    AlreadyReserved {
        /// The customer name.
        name: String,
        /// The bus number.
        bus_number: String,
    },

    /// A field failed validation when constructing an entity.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A temporary file could not be moved over its target.
    #[error("failed to replace data file: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// A record could not be encoded.
    #[error("record encoding error: {0}")]
    Csv(#[from] csv::Error),

    /// A configuration file is not valid YAML for the configuration schema.
    #[error("invalid configuration file {}: {source}", path.display())]
    Configuration {
        /// The configuration file.
        path: PathBuf,
        /// The parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },
}

impl From<crate::entity::ValidationError> for Error {
    fn from(err: crate::entity::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if the error reports a missing bus, customer or reservation.
    ///
    /// # Examples
    ///
    /// ```
    /// use busres::Error;
    ///
    /// let err = Error::BusNotFound { bus_number: "B1".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BusNotFound { .. } | Self::CustomerNotFound { .. } | Self::NotReserved { .. }
        )
    }

    /// Check if the error originated in file storage.
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Persist(_) | Self::Csv(_))
    }
}
