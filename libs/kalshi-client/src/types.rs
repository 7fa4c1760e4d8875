//! Exchange data model
//!
//! Fetch-on-demand, immutable snapshots of exchange state. Wire structs stay
//! tolerant (Option-heavy, unknown enum values preserved as `Unknown`) because
//! the exchange schema moves faster than this crate. Prices are in cents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Open,
    Closed,
    Settled,
    Determined,
    /// Any wire value this crate does not know about.
    #[serde(other)]
    Unknown,
}

impl EventStatus {
    /// Whether this is a status the exchange accepts in market queries.
    /// Unrecognized statuses trip the exchange's enum validation.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, EventStatus::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Open => "open",
            EventStatus::Closed => "closed",
            EventStatus::Settled => "settled",
            EventStatus::Determined => "determined",
            EventStatus::Unknown => "unknown",
        }
    }
}

/// Market lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketStatus {
    Initialized,
    Active,
    Closed,
    Settled,
    Determined,
    Finalized,
    #[serde(other)]
    Unknown,
}

/// A recurring family of events, identified by ticker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub ticker: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub frequency: Option<String>,
    pub fee_type: Option<String>,
    pub fee_multiplier: Option<i64>,
    pub contract_url: Option<String>,
    pub contract_terms_url: Option<String>,
    pub additional_prohibitions: Option<Vec<String>>,
    pub settlement_sources: Option<serde_json::Value>,
    pub product_metadata: Option<serde_json::Value>,
}

/// One occurrence within a series, identified by event ticker.
///
/// `series_ticker` is a foreign key the exchange does not guarantee to
/// resolve against anything the caller has fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub event_ticker: Option<String>,
    pub series_ticker: Option<String>,
    pub title: Option<String>,
    pub sub_title: Option<String>,
    pub status: Option<EventStatus>,
    /// Present when the query asked for nested markets; page order preserved.
    pub markets: Option<Vec<Market>>,
}

/// A tradeable yes/no contract within an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Market {
    pub ticker: Option<String>,
    pub event_ticker: Option<String>,
    pub series_ticker: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub status: Option<MarketStatus>,
    pub open_time: Option<DateTime<Utc>>,
    pub close_time: Option<DateTime<Utc>>,
    pub expiration_time: Option<DateTime<Utc>>,
    pub yes_bid: Option<i64>,
    pub yes_ask: Option<i64>,
    pub no_bid: Option<i64>,
    pub no_ask: Option<i64>,
    pub last_price: Option<i64>,
    pub volume: Option<i64>,
    pub volume_24h: Option<i64>,
    pub result: Option<String>,
    pub can_close_early: Option<bool>,
    pub cap_count: Option<i64>,
}

/// Portfolio balance in major units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balance {
    pub dollars: f64,
}

impl Balance {
    /// The exchange reports balances in cents.
    pub fn from_cents(cents: i64) -> Self {
        Self {
            dollars: cents as f64 / 100.0,
        }
    }
}

/// Exchange-wide announcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub message: Option<String>,
    pub status: Option<String>,
    pub delivery_time: Option<DateTime<Utc>>,
}

/// Exchange-wide operational flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeStatus {
    pub exchange_active: bool,
    pub trading_active: bool,
    pub exchange_estimated_resume_time: Option<DateTime<Utc>>,
}

/// Trading-hours schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeSchedule {
    /// Weekly open/close windows; shape churns, kept opaque.
    pub standard_hours: Option<serde_json::Value>,
    #[serde(default)]
    pub maintenance_windows: Vec<MaintenanceWindow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceWindow {
    pub start_datetime: Option<DateTime<Utc>>,
    pub end_datetime: Option<DateTime<Utc>>,
}

/// Filters for listing series.
#[derive(Debug, Clone, Default)]
pub struct SeriesFilters {
    pub limit: Option<u32>,
    pub category: Option<String>,
}

impl SeriesFilters {
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }

        if let Some(ref category) = self.category {
            params.push(("category".to_string(), category.clone()));
        }

        params
    }
}

/// Filters for listing events.
#[derive(Debug, Clone, Default)]
pub struct EventFilters {
    pub status: Option<EventStatus>,
    pub limit: Option<u32>,
    pub series_ticker: Option<String>,
    /// Embed each event's markets inline, saving a round trip per event.
    pub with_nested_markets: bool,
}

impl EventFilters {
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(status) = self.status {
            params.push(("status".to_string(), status.as_str().to_string()));
        }

        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }

        if let Some(ref series_ticker) = self.series_ticker {
            params.push(("series_ticker".to_string(), series_ticker.clone()));
        }

        if self.with_nested_markets {
            params.push(("with_nested_markets".to_string(), "true".to_string()));
        }

        params
    }
}

// Response envelopes, matching the exchange's wire shapes.

#[derive(Debug, Clone, Deserialize)]
pub struct BalanceResponse {
    pub balance: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeriesResponse {
    #[serde(default)]
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventsResponse {
    #[serde(default)]
    pub events: Vec<Event>,
    /// Opaque continuation cursor; absent or empty on the last page.
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarketsResponse {
    #[serde(default)]
    pub markets: Vec<Market>,
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnnouncementsResponse {
    #[serde(default)]
    pub announcements: Vec<Announcement>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeScheduleResponse {
    pub schedule: ExchangeSchedule,
}
