//! Status command implementation

use anyhow::Result;

use spendwise_core::{AdvisorConfig, Error, GenClient, GenerationBackend, CREDENTIAL_VAR};

/// Show credential presence, backend reachability, and available models
pub async fn cmd_status() -> Result<()> {
    println!("🔍 Checking Spendwise configuration...\n");

    let config = match AdvisorConfig::from_env() {
        Ok(config) => config,
        Err(Error::Config(msg)) => {
            println!("  ❌ {}", msg);
            println!("\nTo set up Spendwise:");
            println!("  1. Create an API key in Google AI Studio");
            println!("  2. Export it: export {}=<your key>", CREDENTIAL_VAR);
            return Ok(());
        }
        Err(other) => return Err(other.into()),
    };

    println!("  {}: set", CREDENTIAL_VAR);
    println!("  Model: {}", config.model);
    println!("  API base: {}", config.api_base);

    let client = GenClient::from_config(&config);

    print!("\nChecking backend availability... ");
    if client.health_check().await {
        println!("✅ Connected");
    } else {
        println!("❌ Failed");
        println!("\n⚠️  Could not reach {} ", client.host());
        println!("   Check the network connection and the API key.");
        return Ok(());
    }

    if let GenClient::Gemini(ref backend) = client {
        println!("\n📋 Available models:\n");
        match backend.list_models().await {
            Ok(models) => {
                for model in models {
                    let marker = if model == config.model { " (selected)" } else { "" };
                    println!("  - {}{}", model, marker);
                }
            }
            Err(e) => println!("  ❌ Error listing models: {}", e),
        }
    }

    Ok(())
}
