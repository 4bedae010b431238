//! Command-line arguments

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use leadform::{FieldName, FormValues};
use serde_json::json;

#[derive(Parser)]
#[command(name = "leadform-cli", version, about = "Submit financing applications")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate and submit one application
    Submit(SubmitArgs),
    /// Describe the application form fields
    Fields {
        /// Print the schema as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub struct SubmitArgs {
    /// Applicant's full name (required, at least 2 characters)
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub company_name: Option<String>,

    #[arg(long)]
    pub zip_code: Option<String>,

    #[arg(long)]
    pub industry: Option<String>,

    /// borrower or lender
    #[arg(long)]
    pub business_type: Option<String>,

    /// One of: <$250K, $250K–$1M, $1M–$5M, $5M+
    #[arg(long)]
    pub financing_amount: Option<String>,

    /// Purpose of financing
    #[arg(long)]
    pub purpose: Option<String>,

    /// Read field values from a JSON object with camelCase keys; flags win
    #[arg(long, value_name = "PATH")]
    pub from_json: Option<PathBuf>,

    /// Print the Airtable payload instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

impl SubmitArgs {
    fn flags(&self) -> [(FieldName, &Option<String>); 9] {
        [
            (FieldName::Name, &self.name),
            (FieldName::Email, &self.email),
            (FieldName::Phone, &self.phone),
            (FieldName::CompanyName, &self.company_name),
            (FieldName::ZipCode, &self.zip_code),
            (FieldName::Industry, &self.industry),
            (FieldName::BusinessType, &self.business_type),
            (FieldName::FinancingAmount, &self.financing_amount),
            (FieldName::Purpose, &self.purpose),
        ]
    }

    /// Merge the JSON file (if any) with the flags
    pub fn form_values(&self) -> Result<FormValues> {
        let mut values = match &self.from_json {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                serde_json::from_str::<FormValues>(&raw)
                    .with_context(|| format!("Invalid application JSON in {}", path.display()))?
            }
            None => FormValues::default(),
        };

        for (field, flag) in self.flags() {
            if let Some(value) = flag {
                values.set(field, value.as_str());
            }
        }
        Ok(values)
    }
}

/// Print the form schema as a table or JSON
pub fn print_fields(as_json: bool) -> Result<()> {
    if as_json {
        let fields: Vec<_> = FieldName::ALL
            .iter()
            .map(|f| {
                json!({
                    "key": f.key(),
                    "label": f.label(),
                    "kind": f.kind(),
                    "required": f.is_required(),
                    "choices": f.choices(),
                    "placeholder": f.placeholder(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&fields)?);
        return Ok(());
    }

    for f in FieldName::ALL {
        let detail = match f.choices() {
            Some(choices) => choices.join(" | "),
            None => f.placeholder().to_string(),
        };
        println!(
            "{:<16} {:<24} {:<9} {:<9} {}",
            f.key(),
            f.label(),
            f.kind().as_str(),
            if f.is_required() { "required" } else { "optional" },
            detail
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_flags_parse_into_form_values() {
        let cli = Cli::parse_from([
            "leadform-cli",
            "submit",
            "--name",
            "Jane Doe",
            "--business-type",
            "lender",
            "--financing-amount",
            "$5M+",
        ]);

        let Command::Submit(args) = cli.command else {
            panic!("expected submit");
        };
        let values = args.form_values().unwrap();

        assert_eq!(values.name, "Jane Doe");
        assert_eq!(values.business_type, "lender");
        assert_eq!(values.financing_amount, "$5M+");
        assert_eq!(values.email, "");
        assert!(!args.dry_run);
    }

    #[test]
    fn flags_override_json_file() {
        let path = std::env::temp_dir().join(format!(
            "leadform-cli-test-{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"{"name":"From File","companyName":"Acme Inc.","email":"file@x.com"}"#,
        )
        .unwrap();

        let cli = Cli::parse_from([
            "leadform-cli",
            "submit",
            "--from-json",
            path.to_str().unwrap(),
            "--email",
            "flag@x.com",
            "--dry-run",
        ]);
        let Command::Submit(args) = cli.command else {
            panic!("expected submit");
        };
        let values = args.form_values().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(values.name, "From File");
        assert_eq!(values.company_name, "Acme Inc.");
        assert_eq!(values.email, "flag@x.com");
        assert!(args.dry_run);
    }

    #[test]
    fn missing_json_file_is_an_error() {
        let cli = Cli::parse_from([
            "leadform-cli",
            "submit",
            "--from-json",
            "/definitely/not/here.json",
        ]);
        let Command::Submit(args) = cli.command else {
            panic!("expected submit");
        };

        assert!(args.form_values().is_err());
    }
}
