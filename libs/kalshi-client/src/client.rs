//! Fail-soft exchange data client
//!
//! [`ExchangeDataClient`] wraps an [`ExchangeApi`] and reduces every fetch
//! failure to a caller-safe sentinel (`None` or an empty `Vec`), logging a
//! descriptive message instead of propagating. Exploratory callers iterate
//! whatever comes back and move on; `None` always means "unknown", never
//! "zero". Requests are strictly sequential — one in flight at a time.

use crate::api::ExchangeApi;
use crate::config::ExchangeConfig;
use crate::credentials::Credentials;
use crate::error::Result;
use crate::rest::KalshiRest;
use crate::types::{
    Announcement, Balance, Event, EventFilters, ExchangeSchedule, ExchangeStatus, Market, Series,
    SeriesFilters,
};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Read-side client over the exchange API capability.
pub struct ExchangeDataClient<A: ExchangeApi> {
    api: A,
    /// Separate plain HTTP client for the unauthenticated orderbook endpoint.
    http: Client,
    orderbook_base_url: String,
    page_delay: Duration,
}

impl ExchangeDataClient<KalshiRest> {
    /// Construct against the production REST API with credentials from the
    /// environment. Missing credentials fail here, before any network call.
    pub fn from_env(config: &ExchangeConfig) -> Result<Self> {
        let credentials = Credentials::from_env()?;
        let api = KalshiRest::new(config, &credentials)?;
        Self::new(api, config)
    }
}

impl<A: ExchangeApi> ExchangeDataClient<A> {
    /// Wrap an API capability. The orderbook client gets the same explicit
    /// timeouts as the signed transport.
    pub fn new(api: A, config: &ExchangeConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self {
            api,
            http,
            orderbook_base_url: config.orderbook_base_url.trim_end_matches('/').to_string(),
            page_delay: Duration::from_millis(config.page_delay_ms),
        })
    }

    /// Portfolio balance in dollars. `None` means "unknown", not "zero".
    pub async fn get_portfolio_balance(&self) -> Option<Balance> {
        match self.api.get_balance().await {
            Ok(response) => {
                let balance = Balance::from_cents(response.balance);
                info!("Portfolio balance: ${:.2}", balance.dollars);
                Some(balance)
            }
            Err(e) => {
                error!("Failed to fetch portfolio balance: {}", e);
                None
            }
        }
    }

    /// List series; empty on error so callers can iterate unconditionally.
    pub async fn get_series(&self, filters: &SeriesFilters) -> Vec<Series> {
        match self.api.get_series(filters).await {
            Ok(response) => {
                debug!("Fetched {} series", response.series.len());
                response.series
            }
            Err(e) => {
                error!("Failed to fetch series: {}", e);
                Vec::new()
            }
        }
    }

    /// One page of events plus the continuation cursor. `([], None)` on
    /// error. An empty cursor from the exchange means the last page.
    pub async fn get_events(
        &self,
        filters: &EventFilters,
        cursor: Option<&str>,
    ) -> (Vec<Event>, Option<String>) {
        match self.api.get_events(filters, cursor).await {
            Ok(response) => {
                debug!("Fetched {} events", response.events.len());
                let next = response.cursor.filter(|c| !c.is_empty());
                (response.events, next)
            }
            Err(e) => {
                error!("Failed to fetch events: {}", e);
                (Vec::new(), None)
            }
        }
    }

    /// Drive the event cursor to exhaustion, sequentially, preserving each
    /// page's order. A failed page ends the walk with what was collected.
    pub async fn get_all_events(&self, filters: &EventFilters) -> Vec<Event> {
        let mut all_events = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let (events, next) = self.get_events(filters, cursor.as_deref()).await;
            all_events.extend(events);

            match next {
                Some(c) => cursor = Some(c),
                None => break,
            }

            // Pace the walk for exchange rate limits.
            tokio::time::sleep(self.page_delay).await;
        }

        debug!("Fetched total of {} events", all_events.len());
        all_events
    }

    /// Markets belonging to an event.
    ///
    /// Only issues the request when the event status is one the exchange
    /// accepts in market queries; anything else (unrecognized or missing)
    /// returns `None` without touching the network, sidestepping the
    /// exchange's enum validation. A `Validation` rejection that gets
    /// through anyway is a benign skip, not a failure.
    pub async fn get_markets_for_event(&self, event: &Event) -> Option<Vec<Market>> {
        match event.status {
            Some(status) if status.is_recognized() => {}
            _ => {
                debug!(
                    "Skipping market fetch for event {:?}: status not queryable",
                    event.event_ticker
                );
                return None;
            }
        }

        let ticker = match event.event_ticker.as_deref() {
            Some(t) => t,
            None => {
                warn!("Event without ticker, cannot fetch markets");
                return None;
            }
        };

        match self.api.get_markets(ticker).await {
            Ok(response) => {
                debug!("Fetched {} markets for {}", response.markets.len(), ticker);
                Some(response.markets)
            }
            Err(e) if e.is_validation() => {
                debug!("Exchange rejected market query for {}: {}", ticker, e);
                None
            }
            Err(e) => {
                error!("Failed to fetch markets for {}: {}", ticker, e);
                None
            }
        }
    }

    /// Bid/ask levels for one market, parsed but otherwise verbatim.
    ///
    /// Goes straight to the public orderbook endpoint, bypassing the signed
    /// transport.
    pub async fn get_orderbook(&self, market_ticker: &str) -> Option<serde_json::Value> {
        let url = orderbook_url(&self.orderbook_base_url, market_ticker);

        debug!("Fetching orderbook from {}", url);

        let response = match self.http.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                error!("Failed to fetch orderbook for {}: {}", market_ticker, e);
                return None;
            }
        };

        if !response.status().is_success() {
            error!(
                "Failed to fetch orderbook for {}: HTTP {}",
                market_ticker,
                response.status()
            );
            return None;
        }

        match response.json().await {
            Ok(body) => Some(body),
            Err(e) => {
                error!("Failed to parse orderbook for {}: {}", market_ticker, e);
                None
            }
        }
    }

    /// Exchange-wide announcements; empty on error.
    pub async fn get_exchange_announcements(&self) -> Vec<Announcement> {
        match self.api.get_announcements().await {
            Ok(response) => response.announcements,
            Err(e) => {
                error!("Failed to fetch announcements: {}", e);
                Vec::new()
            }
        }
    }

    /// Exchange operational flags; `None` on error.
    pub async fn get_exchange_status(&self) -> Option<ExchangeStatus> {
        match self.api.get_exchange_status().await {
            Ok(status) => Some(status),
            Err(e) => {
                error!("Failed to fetch exchange status: {}", e);
                None
            }
        }
    }

    /// Trading-hours schedule; `None` on error.
    pub async fn get_exchange_schedule(&self) -> Option<ExchangeSchedule> {
        match self.api.get_exchange_schedule().await {
            Ok(response) => Some(response.schedule),
            Err(e) => {
                error!("Failed to fetch exchange schedule: {}", e);
                None
            }
        }
    }
}

/// Orderbook endpoint for a market ticker.
pub fn orderbook_url(base: &str, market_ticker: &str) -> String {
    format!(
        "{}/markets/{}/orderbook",
        base.trim_end_matches('/'),
        market_ticker
    )
}
