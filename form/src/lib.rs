//! Lead-capture application intake
//!
//! Validates financing applications and writes each one as a single record to
//! Airtable. Uses hexagonal (ports & adapters) architecture:
//! - `domain`: application model, validation rules and port traits
//! - `adapters`: Airtable HTTP client
//! - `app`: submission service and the form controller state machine

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;

pub use adapters::AirtableClient;
pub use app::{FormController, FormSettings, FormState, SubmissionService, SubmitOutcome};
pub use config::Config;
pub use domain::entities::{
    ApplicationRecord, BusinessType, FieldKind, FieldName, FinancingAmount, FormValues,
    Notification, NotificationKind, SubmissionResult,
};
pub use domain::ports::{FormView, RecordStore};
pub use domain::validation::validate;
pub use error::{FieldError, RecordStoreError, ValidationErrors};
