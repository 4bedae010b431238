//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use tokio::sync::Notify;

use crate::domain::entities::{ApplicationRecord, Notification, NotificationKind};
use crate::domain::ports::{FormView, RecordStore};
use crate::error::{FieldError, RecordStoreError};

// ============================================================================
// Mock Record Store
// ============================================================================

#[derive(Default)]
pub struct MockRecordStore {
    calls: Arc<RwLock<Vec<ApplicationRecord>>>,
    rejection: RwLock<Option<(u16, Option<String>)>>,
    gate: Option<Arc<Notify>>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every write with a non-2xx status
    pub fn rejecting(self, status: u16, message: Option<&str>) -> Self {
        *self.rejection.write().unwrap() = Some((status, message.map(str::to_string)));
        self
    }

    /// Hold each write in flight until the gate is notified
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    pub fn calls(&self) -> Vec<ApplicationRecord> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn create_record(&self, record: &ApplicationRecord) -> Result<(), RecordStoreError> {
        self.calls.write().unwrap().push(record.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let rejection = self.rejection.read().unwrap().clone();
        match rejection {
            Some((status, message)) => Err(RecordStoreError::Api { status, message }),
            None => Ok(()),
        }
    }
}

// ============================================================================
// Recording Form View
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Open(bool),
    Submitting(bool),
    FieldErrors(Vec<FieldError>),
    Notified(NotificationKind, String),
}

#[derive(Default)]
pub struct RecordingFormView {
    events: RwLock<Vec<ViewEvent>>,
    notifications: RwLock<Vec<Notification>>,
}

impl RecordingFormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.read().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.read().unwrap().clone()
    }

    pub fn last_notification(&self) -> Option<Notification> {
        self.notifications.read().unwrap().last().cloned()
    }

    /// Whether the view was ever told to close
    pub fn was_closed(&self) -> bool {
        self.events().contains(&ViewEvent::Open(false))
    }
}

impl FormView for RecordingFormView {
    fn set_open(&self, open: bool) {
        self.events.write().unwrap().push(ViewEvent::Open(open));
    }

    fn set_submitting(&self, submitting: bool) {
        self.events
            .write()
            .unwrap()
            .push(ViewEvent::Submitting(submitting));
    }

    fn show_field_errors(&self, errors: &[FieldError]) {
        self.events
            .write()
            .unwrap()
            .push(ViewEvent::FieldErrors(errors.to_vec()));
    }

    fn notify(&self, notification: &Notification) {
        self.events.write().unwrap().push(ViewEvent::Notified(
            notification.kind,
            notification.message.clone(),
        ));
        self.notifications
            .write()
            .unwrap()
            .push(notification.clone());
    }
}
