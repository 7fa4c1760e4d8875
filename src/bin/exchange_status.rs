//! Exchange status snapshot
//!
//! Prints the exchange's operational flags, trading schedule, and current
//! announcements. Read-only; runs to completion.
//!
//! Usage:
//!   cargo run --bin exchange-status

use anyhow::Result;
use kalshi_client::{init_tracing, BotConfig, ExchangeDataClient};
use kalshi_mm_bot::bin_common::{load_config_from_env, ConfigType};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config_path = load_config_from_env(ConfigType::Bot);
    let config = if config_path.exists() {
        BotConfig::load(&config_path)?
    } else {
        BotConfig::default()
    };

    let client = ExchangeDataClient::from_env(&config.exchange)?;
    info!("Exchange client initialized");

    println!();
    println!("EXCHANGE STATUS");
    println!("────────────────────────────────────────");
    match client.get_exchange_status().await {
        Some(status) => {
            println!("  exchange_active: {}", status.exchange_active);
            println!("  trading_active:  {}", status.trading_active);
            if let Some(resume) = status.exchange_estimated_resume_time {
                println!("  estimated resume: {}", resume);
            }
        }
        None => println!("  unavailable"),
    }

    println!();
    println!("SCHEDULE");
    println!("────────────────────────────────────────");
    match client.get_exchange_schedule().await {
        Some(schedule) => {
            if let Some(hours) = &schedule.standard_hours {
                println!("  standard hours: {}", hours);
            }
            for window in &schedule.maintenance_windows {
                println!(
                    "  maintenance: {:?} -> {:?}",
                    window.start_datetime, window.end_datetime
                );
            }
        }
        None => println!("  unavailable"),
    }

    println!();
    println!("ANNOUNCEMENTS");
    println!("────────────────────────────────────────");
    let announcements = client.get_exchange_announcements().await;
    if announcements.is_empty() {
        println!("  none");
    }
    for a in &announcements {
        println!(
            "  [{}] {}",
            a.status.as_deref().unwrap_or("-"),
            a.message.as_deref().unwrap_or("<no message>")
        );
    }
    println!();

    Ok(())
}
