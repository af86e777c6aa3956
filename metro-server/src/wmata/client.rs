//! WMATA HTTP client.
//!
//! Provides async methods for the rail reference, rail prediction,
//! incident, and next-bus feeds. Handles authentication, rate limiting,
//! and status-code mapping to typed errors.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;

use crate::domain::{StationCode, StopId};

use super::error::WmataError;
use super::types::{
    BusIncident, BusIncidentsResponse, PredictionsResponse, RailIncident, RailIncidentsResponse,
    RailPrediction, Station, StationsResponse, StopArrivals,
};

/// Default base URL for the WMATA API.
const DEFAULT_BASE_URL: &str = "https://api.wmata.com";

/// Default maximum concurrent requests.
///
/// The default WMATA tier allows ten calls per second; a single query
/// issues at most three, so this leaves headroom for overlapping
/// queries.
const DEFAULT_MAX_CONCURRENT: usize = 10;

/// Configuration for the WMATA client.
#[derive(Debug, Clone)]
pub struct WmataConfig {
    /// API key for the `api_key` header
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl WmataConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// WMATA API client.
///
/// Uses a semaphore to limit concurrent requests and stay inside the
/// per-second rate limit.
#[derive(Debug, Clone)]
pub struct WmataClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl WmataClient {
    /// Create a new WMATA client with the given configuration.
    pub fn new(config: WmataConfig) -> Result<Self, WmataError> {
        let mut headers = HeaderMap::new();

        // WMATA authenticates with an "api_key" header
        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| WmataError::Api {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert(HeaderName::from_static("api_key"), api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Fetch the rail station reference list.
    ///
    /// Every platform appears as its own entry; two-platform stations
    /// are cross-linked via their sibling code.
    pub async fn rail_stations(&self) -> Result<Vec<Station>, WmataError> {
        let url = format!("{}/Rail.svc/json/jStations", self.base_url);
        let response: StationsResponse = self.get_json(&url, &[]).await?;
        Ok(response.stations)
    }

    /// Fetch live arrival predictions for one platform.
    pub async fn rail_predictions(
        &self,
        code: &StationCode,
    ) -> Result<Vec<RailPrediction>, WmataError> {
        let url = format!(
            "{}/StationPrediction.svc/json/GetPrediction/{}",
            self.base_url,
            code.as_str()
        );
        let response: PredictionsResponse = self.get_json(&url, &[]).await?;
        Ok(response.trains)
    }

    /// Fetch the active rail incident feed.
    pub async fn rail_incidents(&self) -> Result<Vec<RailIncident>, WmataError> {
        let url = format!("{}/Incidents.svc/json/Incidents", self.base_url);
        let response: RailIncidentsResponse = self.get_json(&url, &[]).await?;
        Ok(response.incidents)
    }

    /// Fetch the active bus incident feed.
    pub async fn bus_incidents(&self) -> Result<Vec<BusIncident>, WmataError> {
        let url = format!("{}/Incidents.svc/json/BusIncidents", self.base_url);
        let response: BusIncidentsResponse = self.get_json(&url, &[]).await?;
        Ok(response.incidents)
    }

    /// Fetch next-bus predictions for one stop.
    pub async fn bus_predictions(&self, stop: &StopId) -> Result<StopArrivals, WmataError> {
        let url = format!("{}/NextBusService.svc/json/jPredictions", self.base_url);
        self.get_json(&url, &[("StopID", stop.as_str())]).await
    }

    /// Issue a GET request and decode the JSON body.
    ///
    /// Maps auth and rate-limit statuses to their own error variants so
    /// callers can tell a misconfigured key from a flaky feed.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, WmataError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| WmataError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(WmataError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WmataError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WmataError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| WmataError::Json {
            message: format!("{} (body: {})", e, body.chars().take(200).collect::<String>()),
        })
    }
}
