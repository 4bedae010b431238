//! Domain entities

pub mod application;
pub mod submission;

pub use application::{
    ApplicationRecord, BusinessType, FieldKind, FieldName, FinancingAmount, FormValues,
};
pub use submission::{Notification, NotificationKind, SubmissionResult};
