//! Airtable adapter
//!
//! Record store backed by the Airtable REST API.

pub mod client;
pub mod payload;

pub use client::{AirtableClient, AIRTABLE_BASE_ID, AIRTABLE_TABLE_ID};
pub use payload::{ApplicationFields, CreateRecordsRequest};
