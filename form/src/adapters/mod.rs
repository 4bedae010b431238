//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod airtable;

pub use airtable::AirtableClient;
