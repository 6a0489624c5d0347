//! One-shot advise command implementation

use std::io::Read;

use anyhow::{bail, Context, Result};

use spendwise_core::{Error, ExpenseAdvisor, REMEDIATION_HINT};

/// Generate one expense report and print the Markdown verbatim
pub async fn cmd_advise(income: u64, expenses: Option<&str>) -> Result<()> {
    let expenses = match expenses {
        Some(text) => text.to_string(),
        None => {
            // No argument: read the expense list from stdin
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read expense list from stdin")?;
            buffer
        }
    };

    let advisor = ExpenseAdvisor::from_env()?;

    match advisor.advise(income, &expenses).await {
        Ok(report) => {
            println!("{}", report.markdown);
            Ok(())
        }
        Err(Error::Validation(msg)) => bail!("{}", msg),
        Err(Error::Service(msg)) => {
            eprintln!("Generation call failed: {}", msg);
            eprintln!("Hint: {}", REMEDIATION_HINT);
            bail!("generation call failed")
        }
        Err(other) => Err(other.into()),
    }
}
