//! Test binary for fetching a single market's orderbook
//!
//! Usage:
//!   cargo run --bin orderbook-probe -- <market_ticker>
//!
//! Example:
//!   cargo run --bin orderbook-probe -- KXHIGHNY-25AUG06-B87.5

use anyhow::Result;
use kalshi_client::{BotConfig, ExchangeDataClient};
use kalshi_mm_bot::bin_common::parse_args;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = parse_args();

    let Some(ticker) = args.first() else {
        println!("Orderbook Probe");
        println!();
        println!("Usage: orderbook-probe <market_ticker>");
        println!();
        println!("Arguments:");
        println!("  market_ticker   Market to fetch, e.g. KXHIGHNY-25AUG06-B87.5");
        return Ok(());
    };

    let config = BotConfig::default();
    let client = ExchangeDataClient::from_env(&config.exchange)?;

    println!("Fetching orderbook for {}...", ticker);
    println!();

    match client.get_orderbook(ticker).await {
        Some(orderbook) => println!("{}", serde_json::to_string_pretty(&orderbook)?),
        None => println!("No orderbook available for {}", ticker),
    }

    Ok(())
}
