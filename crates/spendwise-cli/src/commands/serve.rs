//! Server command implementation

use anyhow::Result;

use spendwise_core::{ExpenseAdvisor, GenerationBackend};

pub async fn cmd_serve(host: &str, port: u16) -> Result<()> {
    // Credential load happens before anything is served: a missing key
    // halts the session here instead of failing on the first submission
    let advisor = ExpenseAdvisor::from_env()?;

    println!("🚀 Starting Spendwise web server...");
    println!("   Model: {}", advisor.model());
    println!("   Backend: {}", advisor.client().host());
    println!("   Listening: http://{}:{}", host, port);
    println!();
    println!("   Press Ctrl+C to stop");

    let config = spendwise_server::ServerConfig::default();
    spendwise_server::serve(advisor, host, port, config).await?;

    Ok(())
}
