//! Application form schema
//!
//! One predicate per field, evaluated against the raw `FormValues`. Every
//! rule runs so the applicant sees all problems at once.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::{
    ApplicationRecord, BusinessType, FieldName, FinancingAmount, FormValues,
};
use crate::error::{FieldError, ValidationErrors};

pub const NAME_MIN_CHARS: usize = 2;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern is valid")
});

/// Validate raw form input into a normalized record
pub fn validate(values: &FormValues) -> Result<ApplicationRecord, ValidationErrors> {
    let mut errors = Vec::new();

    let name = values.name.trim();
    if name.chars().count() < NAME_MIN_CHARS {
        errors.push(FieldError::new(FieldName::Name, "Name is required"));
    }

    let email = optional(&values.email);
    if let Some(email) = email {
        if !is_valid_email(email) {
            errors.push(FieldError::new(FieldName::Email, "Invalid email address"));
        }
    }

    let business_type = parse_choice::<BusinessType>(
        FieldName::BusinessType,
        &values.business_type,
        &mut errors,
    );
    let financing_amount = parse_choice::<FinancingAmount>(
        FieldName::FinancingAmount,
        &values.financing_amount,
        &mut errors,
    );

    if !errors.is_empty() {
        return Err(ValidationErrors(errors));
    }

    Ok(ApplicationRecord {
        name: name.to_string(),
        email: email.map(str::to_string),
        phone: optional(&values.phone).map(str::to_string),
        company_name: optional(&values.company_name).map(str::to_string),
        zip_code: optional(&values.zip_code).map(str::to_string),
        business_type,
        industry: optional(&values.industry).map(str::to_string),
        financing_amount,
        purpose: optional(&values.purpose).map(str::to_string),
    })
}

/// Empty and whitespace-only input both mean "not provided"
fn optional(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

fn parse_choice<T>(field: FieldName, raw: &str, errors: &mut Vec<FieldError>) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = optional(raw)?;
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            let allowed = field.choices().unwrap_or_default().join(", ");
            errors.push(FieldError::new(
                field,
                format!("{} must be one of: {}", field.label(), allowed),
            ));
            None
        }
    }
}
