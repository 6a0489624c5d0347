//! Spendwise CLI - Expense advisor
//!
//! Usage:
//!   spendwise advise --income 10000000 "Tiền nhà 5tr, Ăn sáng 30k"
//!   spendwise serve --port 3000       Start the web server
//!   spendwise status                  Check credential and backend

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Advise { income, expenses } => {
            commands::cmd_advise(income, expenses.as_deref()).await
        }
        Commands::Serve { port, host } => commands::cmd_serve(&host, port).await,
        Commands::Status => commands::cmd_status().await,
    }
}
