//! CLI tests
//!
//! Argument parsing checks; command implementations are covered by the
//! core and server test suites through the injected mock backend.

use clap::Parser;

use crate::cli::{Cli, Commands};

#[test]
fn test_cli_parses() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

#[test]
fn test_advise_defaults() {
    let cli = Cli::parse_from(["spendwise", "advise", "Tiền nhà 5tr, Ăn sáng 30k"]);
    match cli.command {
        Commands::Advise { income, expenses } => {
            assert_eq!(income, 10_000_000);
            assert_eq!(expenses.as_deref(), Some("Tiền nhà 5tr, Ăn sáng 30k"));
        }
        _ => panic!("expected advise command"),
    }
}

#[test]
fn test_advise_income_override() {
    let cli = Cli::parse_from(["spendwise", "advise", "--income", "5000000", "Cà phê 25k"]);
    match cli.command {
        Commands::Advise { income, .. } => assert_eq!(income, 5_000_000),
        _ => panic!("expected advise command"),
    }
}

#[test]
fn test_advise_rejects_negative_income() {
    // u64 parsing refuses a negative amount at the CLI boundary
    let result = Cli::try_parse_from(["spendwise", "advise", "--income", "-1", "Cà phê 25k"]);
    assert!(result.is_err());
}

#[test]
fn test_advise_expenses_optional() {
    let cli = Cli::parse_from(["spendwise", "advise"]);
    match cli.command {
        Commands::Advise { expenses, .. } => assert!(expenses.is_none()),
        _ => panic!("expected advise command"),
    }
}

#[test]
fn test_serve_defaults() {
    let cli = Cli::parse_from(["spendwise", "serve"]);
    match cli.command {
        Commands::Serve { port, host } => {
            assert_eq!(port, 3000);
            assert_eq!(host, "127.0.0.1");
        }
        _ => panic!("expected serve command"),
    }
}

#[test]
fn test_verbose_flag_is_global() {
    let cli = Cli::parse_from(["spendwise", "status", "--verbose"]);
    assert!(cli.verbose);
    assert!(matches!(cli.command, Commands::Status));
}
