//! Core library for the `weather-info` app.
//!
//! This crate defines the whole lookup pipeline:
//! - Configuration & credentials handling
//! - HTTP client for the provider's current and forecast endpoints
//! - JSON-to-domain parsing, unit conversion, condition-to-icon mapping
//! - Bounded history of successful lookups
//! - The orchestrating service tying these together
//!
//! It is used by `weather-info-cli`, but can also be reused by other
//! binaries or services. No presentation concern lives here: the crate emits
//! icon identifiers and structured reports, never widgets or images.

pub mod client;
pub mod config;
pub mod history;
pub mod icon;
pub mod model;
pub mod parse;
pub mod service;
pub mod units;

pub use client::{FetchError, FetchWeather, WeatherClient};
pub use config::{API_KEY_ENV, Config};
pub use history::{HISTORY_CAPACITY, HistoryEntry, HistoryStore};
pub use icon::IconId;
pub use model::{
    CurrentWeather, ForecastEntry, ForecastRow, LocationQuery, Unit, WeatherReport,
};
pub use parse::ParseError;
pub use service::{LookupError, WeatherService};
