//! Submission service
//!
//! Sends a validated application to the record store exactly once and turns
//! every outcome into a `SubmissionResult`, so callers never have to tell a
//! rejected record apart from a dropped connection.

use std::sync::Arc;

use tracing::Instrument;
use uuid::Uuid;

use crate::domain::entities::submission::UNEXPECTED_ERROR_MESSAGE;
use crate::domain::entities::{ApplicationRecord, SubmissionResult};
use crate::domain::ports::RecordStore;
use crate::error::RecordStoreError;

/// Service for submitting applications
pub struct SubmissionService<RS>
where
    RS: RecordStore,
{
    store: Arc<RS>,
}

impl<RS> SubmissionService<RS>
where
    RS: RecordStore,
{
    pub fn new(store: Arc<RS>) -> Self {
        Self { store }
    }

    /// Submit one application. Never retries.
    pub async fn submit(&self, record: &ApplicationRecord) -> SubmissionResult {
        let submission_id = Uuid::new_v4();

        async {
            match self.store.create_record(record).await {
                Ok(()) => {
                    tracing::info!("Application submitted");
                    SubmissionResult::succeeded()
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Application submission failed");
                    SubmissionResult::failed(failure_message(&e))
                }
            }
        }
        .instrument(tracing::info_span!("submission", %submission_id))
        .await
    }
}

/// User-facing message for a failed write
fn failure_message(err: &RecordStoreError) -> String {
    match err {
        RecordStoreError::Api { message, .. } => format!(
            "Error submitting: {}",
            message.as_deref().unwrap_or("Unknown error")
        ),
        RecordStoreError::Request(e) => {
            let text = e.to_string();
            if text.trim().is_empty() {
                UNEXPECTED_ERROR_MESSAGE.to_string()
            } else {
                text
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::AirtableClient;
    use crate::test_utils::{full_application, test_application, MockRecordStore};

    fn create_service(store: MockRecordStore) -> (SubmissionService<MockRecordStore>, Arc<MockRecordStore>) {
        let store = Arc::new(store);
        (SubmissionService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn accepted_record_is_success() {
        let (service, store) = create_service(MockRecordStore::new());

        let result = service.submit(&full_application()).await;

        assert_eq!(result, SubmissionResult::succeeded());
        assert_eq!(store.calls(), vec![full_application()]);
    }

    #[tokio::test]
    async fn rejected_record_reports_service_message() {
        let (service, _) =
            create_service(MockRecordStore::new().rejecting(422, Some("INVALID_REQUEST")));

        let result = service.submit(&test_application()).await;

        assert!(!result.success);
        assert_eq!(result.message, "Error submitting: INVALID_REQUEST");
    }

    #[tokio::test]
    async fn rejected_record_without_message_is_unknown_error() {
        let (service, _) = create_service(MockRecordStore::new().rejecting(503, None));

        let result = service.submit(&test_application()).await;

        assert_eq!(result, SubmissionResult::failed("Error submitting: Unknown error"));
    }

    #[tokio::test]
    async fn submits_exactly_once_even_on_failure() {
        let (service, store) = create_service(MockRecordStore::new().rejecting(500, None));

        service.submit(&test_application()).await;

        assert_eq!(store.call_count(), 1);
    }

    #[tokio::test]
    async fn transport_failure_reports_error_text() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = AirtableClient::new(format!("http://{}", addr), "pat-test".to_string());
        let service = SubmissionService::new(Arc::new(client));

        let result = service.submit(&test_application()).await;

        assert!(!result.success);
        assert!(!result.message.is_empty());
        assert!(!result.message.starts_with("Error submitting:"));
    }
}
