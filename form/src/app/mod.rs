//! Application layer
//!
//! - `SubmissionService`: one write to the record store, folded into a `SubmissionResult`
//! - `FormController`: field state, the in-flight guard and the close lifecycle

pub mod form_controller;
pub mod submission_service;

pub use form_controller::{FormController, FormSettings, FormState, SubmitOutcome};
pub use submission_service::SubmissionService;
