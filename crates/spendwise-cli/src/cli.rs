//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use clap::{Parser, Subcommand};

/// Spendwise - Turn an expense list into a budget report
#[derive(Parser)]
#[command(name = "spendwise")]
#[command(about = "Expense advisor backed by a hosted generation model", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one expense report from the terminal
    Advise {
        /// Total income in VNĐ
        #[arg(short, long, default_value = "10000000")]
        income: u64,

        /// Free-text expense list (read from stdin when omitted)
        expenses: Option<String>,
    },

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Show credential, backend reachability, and available models
    Status,
}
