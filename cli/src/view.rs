//! Terminal presentation of the application form

use leadform::{FieldError, FormView, Notification, NotificationKind};

#[derive(Default)]
pub struct TerminalView;

impl TerminalView {
    pub fn new() -> Self {
        Self
    }
}

impl FormView for TerminalView {
    fn set_open(&self, open: bool) {
        if open {
            eprintln!("Apply Now: submitting your application.");
        }
    }

    fn set_submitting(&self, submitting: bool) {
        if submitting {
            eprintln!("Submitting...");
        }
    }

    fn show_field_errors(&self, errors: &[FieldError]) {
        for error in errors {
            eprintln!("  {}: {}", error.field.label(), error.message);
        }
    }

    fn notify(&self, notification: &Notification) {
        match notification.kind {
            NotificationKind::Success => println!("{}", notification.message),
            NotificationKind::Error => eprintln!("error: {}", notification.message),
        }
    }
}
