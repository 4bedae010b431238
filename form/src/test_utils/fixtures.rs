//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{ApplicationRecord, BusinessType, FinancingAmount, FormValues};

/// Create a valid application with only the name set
pub fn test_application() -> ApplicationRecord {
    ApplicationRecord::named("Jane Doe")
}

/// Create an application with every field populated
pub fn full_application() -> ApplicationRecord {
    ApplicationRecord {
        name: "Jane Doe".to_string(),
        email: Some("jane@x.com".to_string()),
        phone: Some("(555) 010-0199".to_string()),
        company_name: Some("Acme Inc.".to_string()),
        zip_code: Some("10001".to_string()),
        business_type: Some(BusinessType::Borrower),
        industry: Some("Real Estate".to_string()),
        financing_amount: Some(FinancingAmount::From1MTo5M),
        purpose: Some("Acquire a second warehouse".to_string()),
    }
}

/// Raw form input that passes validation
pub fn test_form_values() -> FormValues {
    FormValues::from_pairs([
        ("name", "Jane Doe"),
        ("email", "jane@x.com"),
        ("financingAmount", "$1M–$5M"),
    ])
}
