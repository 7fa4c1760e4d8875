//! Authenticated REST implementation of [`ExchangeApi`]
//!
//! One `reqwest::Client` per instance, built with explicit timeouts. Every
//! request is signed over its URL path; non-success statuses are mapped into
//! the typed error taxonomy before anything else sees them.

use crate::api::ExchangeApi;
use crate::auth::RequestSigner;
use crate::config::ExchangeConfig;
use crate::credentials::Credentials;
use crate::error::{ClientError, Result};
use crate::types::*;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Production REST client for the exchange's trade API.
pub struct KalshiRest {
    base_url: String,
    /// Path component of `base_url`; the part of each request path covered
    /// by the signature together with the endpoint path.
    base_path: String,
    http: Client,
    signer: RequestSigner,
}

impl KalshiRest {
    /// Build a client from config and credentials.
    ///
    /// Fails on unusable credentials or an HTTP client that cannot be
    /// constructed; no network traffic is issued here.
    pub fn new(config: &ExchangeConfig, credentials: &Credentials) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        let base_url = config.api_base_url.trim_end_matches('/').to_string();
        let base_path = url_path(&base_url);

        Ok(Self {
            base_url,
            base_path,
            http,
            signer: RequestSigner::new(credentials),
        })
    }

    /// Signed GET returning a deserialized body.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let sign_path = format!("{}{}", self.base_path, endpoint);

        let headers = self.signer.headers("GET", &sign_path)?;

        debug!("GET {} with {} params", url, params.len());

        let mut request = self.http.get(&url);
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = with_headers(request, headers).send().await?;
        let response = require_success(response).await?;

        parse_json(response).await
    }
}

#[async_trait]
impl ExchangeApi for KalshiRest {
    async fn get_balance(&self) -> Result<BalanceResponse> {
        self.get_json("/portfolio/balance", &[]).await
    }

    async fn get_series(&self, filters: &SeriesFilters) -> Result<SeriesResponse> {
        self.get_json("/series", &filters.to_query_params()).await
    }

    async fn get_events(
        &self,
        filters: &EventFilters,
        cursor: Option<&str>,
    ) -> Result<EventsResponse> {
        let mut params = filters.to_query_params();
        if let Some(cursor) = cursor {
            params.push(("cursor".to_string(), cursor.to_string()));
        }

        self.get_json("/events", &params).await
    }

    async fn get_markets(&self, event_ticker: &str) -> Result<MarketsResponse> {
        let params = vec![("event_ticker".to_string(), event_ticker.to_string())];
        self.get_json("/markets", &params).await
    }

    async fn get_announcements(&self) -> Result<AnnouncementsResponse> {
        self.get_json("/exchange/announcements", &[]).await
    }

    async fn get_exchange_status(&self) -> Result<ExchangeStatus> {
        self.get_json("/exchange/status", &[]).await
    }

    async fn get_exchange_schedule(&self) -> Result<ExchangeScheduleResponse> {
        self.get_json("/exchange/schedule", &[]).await
    }
}

/// Extract the path component of a URL, without trailing slash.
fn url_path(url: &str) -> String {
    let after_scheme = match url.find("://") {
        Some(idx) => &url[idx + 3..],
        None => url,
    };

    match after_scheme.find('/') {
        Some(idx) => after_scheme[idx..].trim_end_matches('/').to_string(),
        None => String::new(),
    }
}

/// Add headers from a map to a request builder.
fn with_headers(req: RequestBuilder, headers: HashMap<String, String>) -> RequestBuilder {
    headers.into_iter().fold(req, |r, (k, v)| r.header(k, v))
}

/// Check status, mapping failures into the error taxonomy.
async fn require_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());

    Err(classify_failure(status, &body))
}

/// Deserialize a JSON response body.
async fn parse_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    response
        .json()
        .await
        .map_err(|e| ClientError::Deserialize(e.to_string()))
}

/// Error body shape used by the exchange.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

/// Map a non-success status and body to a [`ClientError`].
fn classify_failure(status: StatusCode, body: &str) -> ClientError {
    let message = error_message(body);

    match status.as_u16() {
        429 => ClientError::RateLimited,
        401 | 403 => ClientError::Auth(message),
        400 if is_enum_rejection(&message) => ClientError::Validation(message),
        s => ClientError::Api { status: s, message },
    }
}

/// Pull the human-readable message out of an error body, falling back to the
/// raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|e| e.message)
        .unwrap_or_else(|| body.to_string())
}

/// The exchange rejects certain status/enum combinations with this phrasing.
fn is_enum_rejection(message: &str) -> bool {
    message.contains("must be one of enum values")
}
