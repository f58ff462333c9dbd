//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use stats_tracker::{cli::App, commands};
use tracing_subscriber::{fmt, EnvFilter};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let app = App::parse();
    commands::run(app.command).await?;

    Ok(())
}
