//! Kalshi exchange data client
//!
//! Typed, fail-soft read access to the exchange's REST API: portfolio
//! balance, series, events (cursor-paginated, optionally with nested
//! markets), per-event markets, orderbooks, and exchange-wide status
//! snapshots.

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod rest;
pub mod types;
pub mod utils;

pub use api::ExchangeApi;
pub use auth::{AuthError, RequestSigner};
pub use client::{orderbook_url, ExchangeDataClient};
pub use config::{BotConfig, ConfigError, ExchangeConfig, ExplorerConfig};
pub use credentials::Credentials;
pub use error::{ClientError, Result};
pub use rest::KalshiRest;
pub use types::{
    Announcement, Balance, Event, EventFilters, EventStatus, ExchangeSchedule, ExchangeStatus,
    MaintenanceWindow, Market, MarketStatus, Series, SeriesFilters,
};
pub use utils::init_tracing;
