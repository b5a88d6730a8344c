//! hotel-forms CLI tool

#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use console::style;
use hotel_forms::observability::ObservabilityConfig;
use hotel_forms_cli_lib::{load_config, ArrivalWindowCommand, FormsCommand, ValidateCommand};

#[derive(Parser)]
#[command(name = "hotel-forms")]
#[command(version)]
#[command(about = "Inspect and exercise the hotel website forms", long_about = None)]
struct Cli {
    /// Configuration file (defaults to the standard search path)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log validation internals
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List configured forms and their field rules
    Forms,
    /// Validate a JSON object of field values against a form
    Validate {
        /// Form element id, e.g. `contact-form`
        form_id: String,
        /// JSON file: strings for text fields, booleans for checkboxes
        values: PathBuf,
    },
    /// Print today's bookable arrival dates
    ArrivalWindow,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        ObservabilityConfig::new("hotel-forms-cli")
            .with_pretty()
            .with_filter("hotel_forms=debug,hotel_forms_cli_lib=debug")
            .init()?;
    }

    let config = load_config(cli.config.as_deref())?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Forms => {
            FormsCommand::new(&config).execute(&mut out)?;
        }
        Commands::Validate { form_id, values } => {
            let outcome = ValidateCommand::new(&config, form_id).execute_file(&values, &mut out)?;
            if outcome.has_errors() {
                out.flush()?;
                bail!("{} field(s) failed validation", outcome.error_count());
            }
        }
        Commands::ArrivalWindow => {
            let today = chrono::Local::now().date_naive();
            ArrivalWindowCommand::new(today, config.booking.advance_years).execute(&mut out)?;
            writeln!(
                out,
                "{}",
                style(format!("{} year(s) ahead", config.booking.advance_years)).dim()
            )?;
        }
    }

    Ok(())
}
