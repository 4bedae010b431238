//! leadform-cli
//!
//! Terminal front end for the financing application form. Collects field
//! values from flags (or a JSON file), validates them and submits the
//! application to Airtable.
//!
//! Configuration comes from the environment (or `.env`):
//! - AIRTABLE_API_KEY: personal access token for the applications base
//! - AIRTABLE_API_URL: optional API host override

mod cli;
mod view;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use leadform::adapters::airtable::CreateRecordsRequest;
use leadform::{
    validate, AirtableClient, Config, FieldName, FormController, FormSettings, FormView,
    SubmissionService, SubmitOutcome,
};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, SubmitArgs};
use view::TerminalView;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr; stdout carries results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn,leadform=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Submit(args) => submit(args).await,
        Command::Fields { json } => {
            cli::print_fields(json)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn submit(args: SubmitArgs) -> Result<ExitCode> {
    let values = args.form_values()?;
    let view = Arc::new(TerminalView::new());

    if args.dry_run {
        return match validate(&values) {
            Ok(record) => {
                let payload = CreateRecordsRequest::for_application(&record);
                println!("{}", serde_json::to_string_pretty(&payload)?);
                Ok(ExitCode::SUCCESS)
            }
            Err(errors) => {
                view.show_field_errors(errors.errors());
                Ok(ExitCode::FAILURE)
            }
        };
    }

    let config = Config::from_env();
    tracing::debug!(?config, "Loaded configuration");

    let client = Arc::new(AirtableClient::from_config(&config));
    let controller = Arc::new(FormController::new(
        SubmissionService::new(client),
        view,
        FormSettings::default(),
    ));

    controller.open();
    for field in FieldName::ALL {
        controller.set_field(field, values.get(field));
    }

    let code = match controller.submit().await {
        SubmitOutcome::Submitted(_) => ExitCode::SUCCESS,
        SubmitOutcome::Failed(_) | SubmitOutcome::Invalid(_) | SubmitOutcome::Ignored => {
            ExitCode::FAILURE
        }
    };
    Ok(code)
}
