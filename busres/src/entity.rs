//! Bus and customer records.
//!
//! Both entities are immutable once built. Builders trim text fields and
//! validate them, so every value that reaches a registry can be written to
//! and read back from a one-record-per-line data file.

pub mod bus;
pub mod customer;

#[cfg(test)]
mod proptests;

pub use bus::{Bus, BusBuilder};
pub use customer::{Customer, CustomerBuilder};

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Trims a text field and rejects embedded line breaks.
pub(crate) fn text_field(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.contains(['\n', '\r']) {
        return Err(ValidationError::new(field, "must not contain line breaks"));
    }
    Ok(trimmed.to_string())
}

/// Like [`text_field`], but also rejects values that are empty after trimming.
pub(crate) fn key_field(field: &str, value: &str) -> Result<String, ValidationError> {
    let value = text_field(field, value)?;
    if value.is_empty() {
        return Err(ValidationError::new(
            field,
            "must be non-empty after trimming whitespace",
        ));
    }
    Ok(value)
}
