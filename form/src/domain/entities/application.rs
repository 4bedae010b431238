//! Application domain entity
//!
//! An applicant's financing request, both as raw form input (`FormValues`)
//! and in its validated, normalized shape (`ApplicationRecord`).

use serde::{Deserialize, Serialize};

/// The fields recognised by the application form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Name,
    Email,
    Phone,
    CompanyName,
    ZipCode,
    Industry,
    BusinessType,
    FinancingAmount,
    Purpose,
}

/// How a field is presented to the applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Radio,
    Select,
    Textarea,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Radio => "radio",
            FieldKind::Select => "select",
            FieldKind::Textarea => "textarea",
        }
    }
}

impl FieldName {
    pub const ALL: [FieldName; 9] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::CompanyName,
        FieldName::ZipCode,
        FieldName::Industry,
        FieldName::BusinessType,
        FieldName::FinancingAmount,
        FieldName::Purpose,
    ];

    /// Input key used in raw key/value form data
    pub fn key(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::CompanyName => "companyName",
            FieldName::ZipCode => "zipCode",
            FieldName::Industry => "industry",
            FieldName::BusinessType => "businessType",
            FieldName::FinancingAmount => "financingAmount",
            FieldName::Purpose => "purpose",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Email => "Email",
            FieldName::Phone => "Phone Number",
            FieldName::CompanyName => "Company Name",
            FieldName::ZipCode => "Zip Code",
            FieldName::Industry => "Industry",
            FieldName::BusinessType => "Business Type",
            FieldName::FinancingAmount => "Target Financing Amount",
            FieldName::Purpose => "Purpose of Financing",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldName::Email => FieldKind::Email,
            FieldName::Phone => FieldKind::Tel,
            FieldName::BusinessType => FieldKind::Radio,
            FieldName::FinancingAmount => FieldKind::Select,
            FieldName::Purpose => FieldKind::Textarea,
            _ => FieldKind::Text,
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldName::Name => "John Doe",
            FieldName::Email => "john@example.com",
            FieldName::Phone => "(123) 456-7890",
            FieldName::CompanyName => "Acme Inc.",
            FieldName::ZipCode => "12345",
            FieldName::Industry => "Technology, Real Estate, etc.",
            FieldName::BusinessType => "",
            FieldName::FinancingAmount => "Select an amount range",
            FieldName::Purpose => "Please describe your financing needs...",
        }
    }

    /// Only the applicant's name blocks submission
    pub fn is_required(&self) -> bool {
        matches!(self, FieldName::Name)
    }

    /// Allowed values for enumerated fields
    pub fn choices(&self) -> Option<Vec<&'static str>> {
        match self {
            FieldName::BusinessType => Some(BusinessType::ALL.iter().map(|b| b.as_str()).collect()),
            FieldName::FinancingAmount => {
                Some(FinancingAmount::ALL.iter().map(|a| a.as_str()).collect())
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for FieldName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| format!("Unknown field: {}", s))
    }
}

/// Which side of the deal the applicant is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Borrower,
    Lender,
}

impl BusinessType {
    pub const ALL: [BusinessType; 2] = [BusinessType::Borrower, BusinessType::Lender];

    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessType::Borrower => "borrower",
            BusinessType::Lender => "lender",
        }
    }
}

impl std::fmt::Display for BusinessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BusinessType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "borrower" => Ok(BusinessType::Borrower),
            "lender" => Ok(BusinessType::Lender),
            _ => Err(format!("Unknown business type: {}", s)),
        }
    }
}

/// Target financing amount bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinancingAmount {
    #[serde(rename = "<$250K")]
    Under250K,
    #[serde(rename = "$250K–$1M")]
    From250KTo1M,
    #[serde(rename = "$1M–$5M")]
    From1MTo5M,
    #[serde(rename = "$5M+")]
    Over5M,
}

impl FinancingAmount {
    pub const ALL: [FinancingAmount; 4] = [
        FinancingAmount::Under250K,
        FinancingAmount::From250KTo1M,
        FinancingAmount::From1MTo5M,
        FinancingAmount::Over5M,
    ];

    /// Bucket label as stored downstream (ranges use an en dash)
    pub fn as_str(&self) -> &'static str {
        match self {
            FinancingAmount::Under250K => "<$250K",
            FinancingAmount::From250KTo1M => "$250K\u{2013}$1M",
            FinancingAmount::From1MTo5M => "$1M\u{2013}$5M",
            FinancingAmount::Over5M => "$5M+",
        }
    }
}

impl std::fmt::Display for FinancingAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FinancingAmount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FinancingAmount::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| format!("Unknown financing amount: {}", s))
    }
}

/// Raw form input, one string per field; empty means "not provided"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub zip_code: String,
    pub industry: String,
    pub business_type: String,
    pub financing_amount: String,
    pub purpose: String,
}

impl FormValues {
    /// Build from arbitrary key/value pairs; unrecognised keys are dropped
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut values = Self::default();
        for (key, value) in pairs {
            if let Ok(field) = key.as_ref().parse::<FieldName>() {
                values.set(field, value);
            }
        }
        values
    }

    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::CompanyName => &self.company_name,
            FieldName::ZipCode => &self.zip_code,
            FieldName::Industry => &self.industry,
            FieldName::BusinessType => &self.business_type,
            FieldName::FinancingAmount => &self.financing_amount,
            FieldName::Purpose => &self.purpose,
        }
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::CompanyName => &mut self.company_name,
            FieldName::ZipCode => &mut self.zip_code,
            FieldName::Industry => &mut self.industry,
            FieldName::BusinessType => &mut self.business_type,
            FieldName::FinancingAmount => &mut self.financing_amount,
            FieldName::Purpose => &mut self.purpose,
        };
        *slot = value.into();
    }

    pub fn is_blank(&self) -> bool {
        FieldName::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// A validated application, ready to be mapped onto the record store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationRecord {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub zip_code: Option<String>,
    pub business_type: Option<BusinessType>,
    pub industry: Option<String>,
    pub financing_amount: Option<FinancingAmount>,
    pub purpose: Option<String>,
}

impl ApplicationRecord {
    /// Record with only the mandatory name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            phone: None,
            company_name: None,
            zip_code: None,
            business_type: None,
            industry: None,
            financing_amount: None,
            purpose: None,
        }
    }
}
