//! Exploratory walk over the exchange's market hierarchy
//!
//! Fetches series, then each series' events with nested markets, and prints
//! what it finds. Read-only; runs to completion.
//!
//! Requires environment variables (or `.env`):
//!   - KALSHI_API_KEY_ID
//!   - KALSHI_PRIVATE_KEY_PEM (inline PEM or a path to a key file)
//!
//! Usage:
//!   cargo run --bin explore-markets

use anyhow::Result;
use kalshi_client::{init_tracing, BotConfig, EventFilters, ExchangeDataClient, SeriesFilters};
use kalshi_mm_bot::bin_common::{load_config_from_env, ConfigType};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    info!("Starting Kalshi market explorer");

    let config_path = load_config_from_env(ConfigType::Bot);
    let config = if config_path.exists() {
        BotConfig::load(&config_path)?
    } else {
        info!("No config file at {}, using defaults", config_path.display());
        BotConfig::default()
    };

    let client = ExchangeDataClient::from_env(&config.exchange)?;
    info!("Exchange client initialized");

    let series_filters = SeriesFilters {
        limit: Some(config.explorer.max_series as u32),
        category: None,
    };
    let series = client.get_series(&series_filters).await;
    info!("Fetched {} series", series.len());

    for s in series.iter().take(config.explorer.max_series) {
        let ticker = match s.ticker.as_deref() {
            Some(t) => t,
            None => continue,
        };

        println!(
            "TITLE: {} | SERIES TICKER: {}",
            s.title.as_deref().unwrap_or("<untitled>"),
            ticker
        );

        let event_filters = EventFilters {
            status: None,
            limit: Some(config.explorer.events_per_series),
            series_ticker: Some(ticker.to_string()),
            with_nested_markets: true,
        };
        let (events, _cursor) = client.get_events(&event_filters, None).await;

        for event in &events {
            println!(
                "\tEVENT: {} | EVENT TICKER: {}",
                event.title.as_deref().unwrap_or("<untitled>"),
                event.event_ticker.as_deref().unwrap_or("<unknown>")
            );
            match &event.markets {
                Some(markets) => println!("\t{} markets", markets.len()),
                None => println!("\tNo markets found"),
            }
        }
    }

    info!("Market exploration complete");
    Ok(())
}
