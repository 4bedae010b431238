//! Form controller
//!
//! Owns the application form's field values and drives its lifecycle:
//!
//! ```text
//! Closed --open--> Idle --submit--> Submitting --failure--> Idle
//!                   ^                   |
//!                   |                success
//!                   |                   v
//!                 open <-- Closed <-- ClosePending (close_delay)
//! ```
//!
//! Only `Idle` accepts a submit, so at most one submission is ever in flight.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::app::SubmissionService;
use crate::domain::entities::submission::DEFAULT_NOTIFICATION_DURATION;
use crate::domain::entities::{FieldName, FormValues, Notification, SubmissionResult};
use crate::domain::ports::{FormView, RecordStore};
use crate::domain::validation::validate;
use crate::error::{FieldError, ValidationErrors};

/// Pause between the success message and the form closing
pub const DEFAULT_CLOSE_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSettings {
    pub close_delay: Duration,
    pub notification_duration: Duration,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            close_delay: DEFAULT_CLOSE_DELAY,
            notification_duration: DEFAULT_NOTIFICATION_DURATION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Not shown
    Closed,
    /// Shown and editable
    Idle,
    /// A submission is in flight
    Submitting,
    /// Submitted; waiting out the close delay
    ClosePending,
}

/// What a call to `submit` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Stored; the form has been reset and closed
    Submitted(SubmissionResult),
    /// The store rejected or never received the record; fields are kept
    Failed(SubmissionResult),
    /// Validation blocked the submission before any network call
    Invalid(ValidationErrors),
    /// The form was not idle (closed or already submitting)
    Ignored,
}

struct FormInner {
    state: FormState,
    values: FormValues,
    errors: Vec<FieldError>,
}

pub struct FormController<RS, V>
where
    RS: RecordStore,
    V: FormView,
{
    service: SubmissionService<RS>,
    view: Arc<V>,
    settings: FormSettings,
    inner: Mutex<FormInner>,
}

impl<RS, V> FormController<RS, V>
where
    RS: RecordStore + 'static,
    V: FormView + 'static,
{
    pub fn new(service: SubmissionService<RS>, view: Arc<V>, settings: FormSettings) -> Self {
        Self {
            service,
            view,
            settings,
            inner: Mutex::new(FormInner {
                state: FormState::Closed,
                values: FormValues::default(),
                errors: Vec::new(),
            }),
        }
    }

    // Never held across an await.
    fn lock(&self) -> MutexGuard<'_, FormInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> FormState {
        self.lock().state
    }

    pub fn is_open(&self) -> bool {
        self.state() != FormState::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.state() == FormState::Submitting
    }

    pub fn values(&self) -> FormValues {
        self.lock().values.clone()
    }

    pub fn field_errors(&self) -> Vec<FieldError> {
        self.lock().errors.clone()
    }

    /// Show the form. Values left from a dismissed session are kept.
    pub fn open(&self) {
        {
            let mut inner = self.lock();
            if inner.state != FormState::Closed {
                return;
            }
            inner.state = FormState::Idle;
        }
        tracing::debug!("Form opened");
        self.view.set_open(true);
    }

    /// User-initiated close. Refused while a submission is in flight.
    pub fn dismiss(&self) -> bool {
        {
            let mut inner = self.lock();
            match inner.state {
                FormState::Idle => inner.state = FormState::Closed,
                FormState::Closed => return true,
                FormState::Submitting | FormState::ClosePending => return false,
            }
        }
        tracing::debug!("Form dismissed");
        self.view.set_open(false);
        true
    }

    /// Update one field. Returns false when the form is not editable.
    pub fn set_field(&self, field: FieldName, value: impl Into<String>) -> bool {
        let remaining = {
            let mut inner = self.lock();
            if matches!(
                inner.state,
                FormState::Submitting | FormState::ClosePending
            ) {
                return false;
            }
            inner.values.set(field, value);

            let before = inner.errors.len();
            inner.errors.retain(|e| e.field != field);
            (inner.errors.len() != before).then(|| inner.errors.clone())
        };

        if let Some(remaining) = remaining {
            self.view.show_field_errors(&remaining);
        }
        true
    }

    /// Clear every field and error. Returns false when the form is not editable.
    pub fn reset(&self) -> bool {
        {
            let mut inner = self.lock();
            if matches!(
                inner.state,
                FormState::Submitting | FormState::ClosePending
            ) {
                return false;
            }
            inner.values = FormValues::default();
            inner.errors.clear();
        }
        self.view.show_field_errors(&[]);
        true
    }

    /// Validate and submit the current values.
    ///
    /// On success the future resolves only after the close delay has elapsed
    /// and the form has been reset and closed. Dropping it during the delay
    /// does not stop the close.
    pub async fn submit(self: &Arc<Self>) -> SubmitOutcome {
        let checked = {
            let mut inner = self.lock();
            if inner.state != FormState::Idle {
                tracing::debug!(state = ?inner.state, "Submit ignored");
                return SubmitOutcome::Ignored;
            }

            match validate(&inner.values) {
                Ok(record) => {
                    inner.state = FormState::Submitting;
                    inner.errors.clear();
                    Ok(record)
                }
                Err(errors) => {
                    inner.errors = errors.errors().to_vec();
                    Err(errors)
                }
            }
        };

        let record = match checked {
            Ok(record) => record,
            Err(errors) => {
                tracing::debug!(%errors, "Application failed validation");
                self.view.show_field_errors(errors.errors());
                return SubmitOutcome::Invalid(errors);
            }
        };

        self.view.show_field_errors(&[]);
        self.view.set_submitting(true);

        let result = self.service.submit(&record).await;

        self.view.set_submitting(false);
        self.view.notify(&Notification::from_result(
            &result,
            self.settings.notification_duration,
        ));

        if !result.success {
            self.lock().state = FormState::Idle;
            return SubmitOutcome::Failed(result);
        }

        self.lock().state = FormState::ClosePending;

        // The close runs on its own task so it completes even if this
        // future is dropped during the delay.
        let this = Arc::clone(self);
        let close = tokio::spawn(async move {
            tokio::time::sleep(this.settings.close_delay).await;
            this.finish_close();
        });
        if let Err(e) = close.await {
            tracing::error!(error = %e, "Delayed form close failed");
        }

        SubmitOutcome::Submitted(result)
    }

    fn finish_close(&self) {
        {
            let mut inner = self.lock();
            inner.values = FormValues::default();
            inner.errors.clear();
            inner.state = FormState::Closed;
        }
        tracing::debug!("Form reset and closed after submission");
        self.view.set_open(false);
    }
}
