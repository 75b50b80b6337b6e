//! `devto-pub` CLI - republish one blog post to dev.to per invocation.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use devto_pub_rs::{Config, DevToClient, ErrorSeverity, Result};

#[derive(Parser)]
#[command(name = "devto-pub")]
#[command(about = "Republish a markdown blog post to dev.to as a draft")]
#[command(version)]
struct Cli {
    /// Path to the post's markdown file (YAML front-matter + body)
    path: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging; the report line is the only stdout output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(report_line) => {
            println!("{report_line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            match err.severity() {
                ErrorSeverity::Fatal => error!("{err} — fix the configuration and retry"),
                ErrorSeverity::Error => error!("{err}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<String> {
    let client = DevToClient::new(Config::from_env())?;
    let outcome = client.publish(&cli.path).await?;
    Ok(outcome.report_line())
}
