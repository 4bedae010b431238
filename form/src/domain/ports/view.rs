//! Presentation port
//!
//! The surrounding UI (dialog, submit button, inline errors, toasts) as seen
//! by the form controller.

use crate::domain::entities::Notification;
use crate::error::FieldError;

pub trait FormView: Send + Sync {
    /// Show or dismiss the form
    fn set_open(&self, open: bool);

    /// Disable the submit control while a submission is in flight
    fn set_submitting(&self, submitting: bool);

    /// Replace the inline field errors; an empty slice clears them
    fn show_field_errors(&self, errors: &[FieldError]);

    /// Raise a transient status message
    fn notify(&self, notification: &Notification);
}
