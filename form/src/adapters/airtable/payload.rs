//! Airtable wire types
//!
//! Maps an `ApplicationRecord` onto the table's field labels. Absent values
//! are skipped so existing cells are never overwritten with blanks.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ApplicationRecord, BusinessType, FinancingAmount};

/// Body of `POST /v0/{base}/{table}`
#[derive(Debug, Serialize)]
pub struct CreateRecordsRequest<'a> {
    pub records: Vec<NewRecord<'a>>,
}

impl<'a> CreateRecordsRequest<'a> {
    /// One-record request for a single application
    pub fn for_application(record: &'a ApplicationRecord) -> Self {
        Self {
            records: vec![NewRecord {
                fields: ApplicationFields::from(record),
            }],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NewRecord<'a> {
    pub fields: ApplicationFields<'a>,
}

/// Application columns keyed by their Airtable field names
#[derive(Debug, Serialize)]
pub struct ApplicationFields<'a> {
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    #[serde(rename = "Phone Number", skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'a str>,
    #[serde(rename = "Company Name", skip_serializing_if = "Option::is_none")]
    pub company_name: Option<&'a str>,
    #[serde(rename = "Zip Code", skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<&'a str>,
    #[serde(rename = "Industry", skip_serializing_if = "Option::is_none")]
    pub industry: Option<&'a str>,
    #[serde(rename = "Business Type", skip_serializing_if = "Option::is_none")]
    pub business_type: Option<BusinessType>,
    #[serde(
        rename = "Target Financing Amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub financing_amount: Option<FinancingAmount>,
    #[serde(rename = "Purpose of Financing", skip_serializing_if = "Option::is_none")]
    pub purpose: Option<&'a str>,
}

impl<'a> From<&'a ApplicationRecord> for ApplicationFields<'a> {
    fn from(r: &'a ApplicationRecord) -> Self {
        ApplicationFields {
            name: &r.name,
            email: non_empty(&r.email),
            phone: non_empty(&r.phone),
            company_name: non_empty(&r.company_name),
            zip_code: non_empty(&r.zip_code),
            industry: non_empty(&r.industry),
            business_type: r.business_type,
            financing_amount: r.financing_amount,
            purpose: non_empty(&r.purpose),
        }
    }
}

// Records built by hand may still carry Some("")
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Error body Airtable sends with non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    /// `{"error": {"type": "...", "message": "..."}}`
    Detailed { message: Option<String> },
    /// `{"error": "NOT_FOUND"}`
    Code(String),
}

/// Best-effort extraction of a human-readable message from an error body
pub fn error_message(body: &str) -> Option<String> {
    let envelope: ErrorEnvelope = serde_json::from_str(body).ok()?;
    let message = match envelope.error? {
        ErrorBody::Detailed { message } => message?,
        ErrorBody::Code(code) => code,
    };
    (!message.trim().is_empty()).then_some(message)
}
