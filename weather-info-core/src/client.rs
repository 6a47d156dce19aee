//! HTTP client for the OpenWeather current-weather and forecast endpoints.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

const CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// Upper bound on a single request, connection setup included. The provider
/// itself imposes no limit; without one a stalled connection would hang the
/// whole lookup.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Classified outcome of a failed fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The provider could not resolve the location (HTTP 404).
    #[error("location not found")]
    NotFound,
    /// Any non-200, non-404 status.
    #[error("request failed with status {0}")]
    Status(StatusCode),
    /// Network-level fault: DNS, connect, timeout, broken transfer.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Fetch abstraction over the two provider endpoints, so the orchestrator
/// can be exercised with canned bodies in tests.
#[async_trait]
pub trait FetchWeather: Send + Sync + std::fmt::Debug {
    async fn fetch_current(
        &self,
        location: &str,
        unit_system: &str,
    ) -> Result<String, FetchError>;

    async fn fetch_forecast(
        &self,
        location: &str,
        unit_system: &str,
    ) -> Result<String, FetchError>;
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { api_key, http })
    }

    async fn get(
        &self,
        url: &str,
        location: &str,
        unit_system: &str,
    ) -> Result<String, FetchError> {
        tracing::debug!(%url, %location, %unit_system, "sending weather request");

        let res = self
            .http
            .get(url)
            .query(&[
                ("q", location),
                ("appid", self.api_key.as_str()),
                ("units", unit_system),
            ])
            .send()
            .await?;

        match res.status() {
            StatusCode::OK => Ok(res.text().await?),
            StatusCode::NOT_FOUND => Err(FetchError::NotFound),
            status => Err(FetchError::Status(status)),
        }
    }
}

#[async_trait]
impl FetchWeather for WeatherClient {
    async fn fetch_current(
        &self,
        location: &str,
        unit_system: &str,
    ) -> Result<String, FetchError> {
        self.get(CURRENT_URL, location, unit_system).await
    }

    async fn fetch_forecast(
        &self,
        location: &str,
        unit_system: &str,
    ) -> Result<String, FetchError> {
        self.get(FORECAST_URL, location, unit_system).await
    }
}
