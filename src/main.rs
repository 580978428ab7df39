//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_audit` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - Dispatch to the server or a one-shot audit

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use seo_audit::cli::{Cli, Command, OutputFormat};
use seo_audit::render::render_text;
use seo_audit::server::{start_server, AppState};
use seo_audit::{analyze_url, init_client, init_logger_with};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), e.g. PORT
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = cli.config();

    init_logger_with(config.log_level.into(), config.log_format)
        .context("Failed to initialize logger")?;

    let client = init_client(&config).context("Failed to initialize HTTP client")?;

    match cli.command {
        Command::Serve { .. } => start_server(&config, AppState::new(client)).await,
        Command::Audit { url, format } => match analyze_url(&client, &url).await {
            Ok(report) => {
                match format {
                    OutputFormat::Text => print!("{}", render_text(&report)),
                    OutputFormat::Json => println!(
                        "{}",
                        serde_json::to_string_pretty(&report)
                            .context("Failed to serialize report")?
                    ),
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("seo_audit error: {e}");
                process::exit(1);
            }
        },
    }
}
