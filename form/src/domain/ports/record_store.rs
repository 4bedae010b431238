//! Record store port trait
//!
//! Defines the interface for persisting one application in the hosted
//! record-storage service.

use async_trait::async_trait;

use crate::domain::entities::ApplicationRecord;
use crate::error::RecordStoreError;

/// Write-only store for submitted applications
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Create exactly one record for the application. No retries.
    async fn create_record(&self, record: &ApplicationRecord) -> Result<(), RecordStoreError>;
}
