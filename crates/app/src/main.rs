//! jira-auth - Main Entry Point
//!
//! Authenticates one user against a JIRA installation and prints the
//! resulting identity as JSON.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, exit_code, run};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing on stderr so stdout stays machine readable
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(identity) => match serde_json::to_string_pretty(&identity) {
            Ok(json) => {
                println!("{json}");
                exit_code(&identity)
            }
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::from(2)
            }
        },
        Err(e) => {
            tracing::debug!(error = ?e, "authentication run failed");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
