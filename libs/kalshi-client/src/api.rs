//! Exchange API capability
//!
//! The seam between the data client and the exchange's authenticated REST
//! surface. Production code uses [`crate::rest::KalshiRest`]; tests substitute
//! a scripted implementation.

use crate::error::Result;
use crate::types::{
    AnnouncementsResponse, BalanceResponse, EventFilters, EventsResponse, ExchangeScheduleResponse,
    ExchangeStatus, MarketsResponse, SeriesFilters, SeriesResponse,
};
use async_trait::async_trait;

/// Authenticated access to the exchange's read endpoints.
#[async_trait]
pub trait ExchangeApi: Send + Sync {
    /// Portfolio balance, in the exchange's minor units (cents).
    async fn get_balance(&self) -> Result<BalanceResponse>;

    /// List series matching the filters.
    async fn get_series(&self, filters: &SeriesFilters) -> Result<SeriesResponse>;

    /// List one page of events; `cursor` continues a previous page.
    async fn get_events(
        &self,
        filters: &EventFilters,
        cursor: Option<&str>,
    ) -> Result<EventsResponse>;

    /// List markets belonging to one event.
    async fn get_markets(&self, event_ticker: &str) -> Result<MarketsResponse>;

    /// Exchange-wide announcements.
    async fn get_announcements(&self) -> Result<AnnouncementsResponse>;

    /// Exchange-wide operational flags.
    async fn get_exchange_status(&self) -> Result<ExchangeStatus>;

    /// Trading-hours schedule.
    async fn get_exchange_schedule(&self) -> Result<ExchangeScheduleResponse>;
}
