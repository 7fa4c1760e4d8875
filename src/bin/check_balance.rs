//! Test binary for checking portfolio balance
//!
//! Fetches the account balance from the Kalshi trade API.
//!
//! Requires environment variables (or `.env`):
//!   - KALSHI_API_KEY_ID
//!   - KALSHI_PRIVATE_KEY_PEM (inline PEM or a path to a key file)
//!
//! Usage:
//!   cargo run --bin check-balance

use anyhow::Result;
use kalshi_client::{BotConfig, ExchangeDataClient};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!();
    println!("════════════════════════════════════════════════════════════════");
    println!("KALSHI BALANCE CHECK");
    println!("════════════════════════════════════════════════════════════════");
    println!();

    println!("Initializing exchange client...");
    let config = BotConfig::default();
    let client = ExchangeDataClient::from_env(&config.exchange)?;

    println!("Fetching balance...");
    println!();
    println!("BALANCE INFO:");
    println!("────────────────────────────────────────────────────────────────");
    match client.get_portfolio_balance().await {
        Some(balance) => println!("  Balance: ${:.2} USD", balance.dollars),
        None => println!("  Balance unavailable (see log output)"),
    }
    println!();
    println!("════════════════════════════════════════════════════════════════");

    Ok(())
}
