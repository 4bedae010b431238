//! Error types for the intake library
//!
//! - `ValidationErrors`: field-level problems found before any network call
//! - `RecordStoreError`: the record store rejected the write or could not be reached

use thiserror::Error;

use crate::domain::entities::FieldName;

/// A single field that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldName,
    pub message: String,
}

impl FieldError {
    pub fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field.key(), self.message)
    }
}

/// Every field-level error found in one validation pass, in schema order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed: {}", join_errors(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Error message for a specific field, if it failed
    pub fn for_field(&self, field: FieldName) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn has(&self, field: FieldName) -> bool {
        self.for_field(field).is_some()
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Record store (Airtable) errors
#[derive(Debug, Error)]
pub enum RecordStoreError {
    /// The service answered with a non-2xx status
    #[error("API error: {status} - {}", message_or_unknown(.message))]
    Api { status: u16, message: Option<String> },

    /// The request never completed
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

fn message_or_unknown(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or("Unknown error")
}
