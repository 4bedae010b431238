//! Airtable API client implementation

use async_trait::async_trait;
use reqwest::Client;

use super::payload::{error_message, CreateRecordsRequest};
use crate::config::Config;
use crate::domain::entities::ApplicationRecord;
use crate::domain::ports::RecordStore;
use crate::error::RecordStoreError;

/// Base holding the applications table
pub const AIRTABLE_BASE_ID: &str = "appD4vwvSQDkhSaiZ";
/// Applications table
pub const AIRTABLE_TABLE_ID: &str = "tblkjDfKNB2uI00Oy";

/// Implementation of the Airtable record store
pub struct AirtableClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl AirtableClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.airtable_api_url.clone(),
            config.airtable_api_key.clone(),
        )
    }

    /// Endpoint for creating records in the applications table
    pub fn records_url(&self) -> String {
        format!(
            "{}/v0/{}/{}",
            self.base_url, AIRTABLE_BASE_ID, AIRTABLE_TABLE_ID
        )
    }

    async fn handle_empty_response(
        &self,
        response: reqwest::Response,
    ) -> Result<(), RecordStoreError> {
        let status = response.status();

        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "Airtable accepted record");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "Airtable API error");
            Err(RecordStoreError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            })
        }
    }
}

#[async_trait]
impl RecordStore for AirtableClient {
    async fn create_record(&self, record: &ApplicationRecord) -> Result<(), RecordStoreError> {
        let body = CreateRecordsRequest::for_application(record);
        tracing::debug!(
            payload = %serde_json::to_string(&body).unwrap_or_default(),
            "Sending application to Airtable"
        );

        let resp = self
            .http
            .post(self.records_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        self.handle_empty_response(resp).await
    }
}
