//! Integration test: orderbook fetching
//!
//! Drives `ExchangeDataClient::get_orderbook` against a local canned-response
//! HTTP server: exact request path, verbatim body pass-through, and the
//! fail-soft paths for malformed bodies and dead servers.

mod common;

use async_trait::async_trait;
use common::MockHttpServer;
use kalshi_client::types::{
    AnnouncementsResponse, BalanceResponse, EventFilters, EventsResponse, ExchangeScheduleResponse,
    ExchangeStatus, MarketsResponse, SeriesFilters, SeriesResponse,
};
use kalshi_client::{ClientError, ExchangeApi, ExchangeConfig, ExchangeDataClient};

/// The orderbook endpoint bypasses the signed API, so these tests never need
/// a working one.
struct OfflineApi;

fn offline() -> ClientError {
    ClientError::Api {
        status: 503,
        message: "offline".to_string(),
    }
}

#[async_trait]
impl ExchangeApi for OfflineApi {
    async fn get_balance(&self) -> kalshi_client::Result<BalanceResponse> {
        Err(offline())
    }

    async fn get_series(&self, _filters: &SeriesFilters) -> kalshi_client::Result<SeriesResponse> {
        Err(offline())
    }

    async fn get_events(
        &self,
        _filters: &EventFilters,
        _cursor: Option<&str>,
    ) -> kalshi_client::Result<EventsResponse> {
        Err(offline())
    }

    async fn get_markets(&self, _event_ticker: &str) -> kalshi_client::Result<MarketsResponse> {
        Err(offline())
    }

    async fn get_announcements(&self) -> kalshi_client::Result<AnnouncementsResponse> {
        Err(offline())
    }

    async fn get_exchange_status(&self) -> kalshi_client::Result<ExchangeStatus> {
        Err(offline())
    }

    async fn get_exchange_schedule(&self) -> kalshi_client::Result<ExchangeScheduleResponse> {
        Err(offline())
    }
}

fn client_with_orderbook_base(base_url: String) -> ExchangeDataClient<OfflineApi> {
    let config = ExchangeConfig {
        orderbook_base_url: base_url,
        timeout_secs: 5,
        connect_timeout_secs: 5,
        ..Default::default()
    };
    ExchangeDataClient::new(OfflineApi, &config).unwrap()
}

#[tokio::test]
async fn test_orderbook_path_and_verbatim_body() {
    let body = r#"{"orderbook":{"yes":[[40,100],[39,250]],"no":[[55,50]]}}"#;
    let server = MockHttpServer::start(200, body).await;
    let client = client_with_orderbook_base(server.base_url());

    let orderbook = client.get_orderbook("ABCDEF").await.unwrap();

    let expected: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(orderbook, expected);

    assert_eq!(
        server.recorded_paths(),
        vec!["/trade-api/v2/markets/ABCDEF/orderbook".to_string()]
    );
}

#[tokio::test]
async fn test_orderbook_malformed_body_yields_none() {
    let server = MockHttpServer::start(200, "this is not json {").await;
    let client = client_with_orderbook_base(server.base_url());

    assert!(client.get_orderbook("ABCDEF").await.is_none());
}

#[tokio::test]
async fn test_orderbook_http_error_yields_none() {
    let server = MockHttpServer::start(500, r#"{"error":{"message":"boom"}}"#).await;
    let client = client_with_orderbook_base(server.base_url());

    assert!(client.get_orderbook("ABCDEF").await.is_none());
}

#[tokio::test]
async fn test_orderbook_unreachable_server_yields_none() {
    // Grab an ephemeral port and release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_with_orderbook_base(format!("http://{}/trade-api/v2", addr));

    assert!(client.get_orderbook("ABCDEF").await.is_none());
}
