//! Lookup orchestration: fetch, parse, convert, map, record.

use thiserror::Error;

use crate::client::{FetchError, FetchWeather};
use crate::history::{HistoryEntry, HistoryStore};
use crate::icon::IconId;
use crate::model::{ForecastRow, LocationQuery, Unit, WeatherReport};
use crate::{parse, units};

/// How many forecast rows a report carries at most.
const FORECAST_LIMIT: usize = 3;

/// Classified outcome of a failed lookup. Every failure path maps onto one of
/// these; nothing else escapes [`WeatherService::lookup`].
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Location not found")]
    LocationNotFound,
    #[error("Weather request failed: {0}")]
    RequestFailed(String),
}

/// Orchestrates the lookup pipeline and owns the history of successful ones.
#[derive(Debug)]
pub struct WeatherService<F: FetchWeather> {
    fetcher: F,
    history: HistoryStore,
}

impl<F: FetchWeather> WeatherService<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            history: HistoryStore::new(),
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Look up current weather and a short forecast for a location.
    ///
    /// The current-weather leg decides the overall outcome. The forecast leg
    /// is fetched with the city name the provider resolved, not the raw user
    /// input, and its failure only empties the forecast rows; the report
    /// still comes back `Ok` with `forecast_error` set so the caller can
    /// surface a separate message.
    ///
    /// Each success is recorded into the history.
    pub async fn lookup(&self, query: &LocationQuery) -> Result<WeatherReport, LookupError> {
        let unit = query.unit();
        let unit_system = unit.unit_system();

        let body = self
            .fetcher
            .fetch_current(query.location(), unit_system)
            .await
            .map_err(classify_fetch)?;
        let current =
            parse::parse_current(&body).map_err(|e| LookupError::RequestFailed(e.to_string()))?;

        let (forecast, forecast_error) = match self
            .forecast_rows(&current.city_name, unit)
            .await
        {
            Ok(rows) => (rows, None),
            Err(detail) => {
                tracing::warn!(city = %current.city_name, %detail, "forecast leg failed");
                (Vec::new(), Some(detail))
            }
        };

        let icon = IconId::from_description(&current.condition);
        let (wind_speed, wind_label) = units::wind_speed_display(current.wind_speed_mps, unit);

        self.history.record(HistoryEntry::new(
            query.location(),
            current.temperature,
            unit,
            icon,
        ));

        Ok(WeatherReport {
            current,
            unit,
            wind_speed,
            wind_label,
            icon,
            forecast,
            forecast_error,
        })
    }

    async fn forecast_rows(&self, city: &str, unit: Unit) -> Result<Vec<ForecastRow>, String> {
        let body = self
            .fetcher
            .fetch_forecast(city, unit.unit_system())
            .await
            .map_err(|e| e.to_string())?;
        let entries = parse::parse_forecast(&body).map_err(|e| e.to_string())?;

        Ok(entries
            .into_iter()
            .take(FORECAST_LIMIT)
            .map(|entry| ForecastRow {
                icon: IconId::from_description(&entry.condition),
                temperature: units::forecast_temp_display(entry.temp_kelvin, unit),
                time_of_day: entry.time_of_day,
            })
            .collect())
    }
}

fn classify_fetch(err: FetchError) -> LookupError {
    match err {
        FetchError::NotFound => LookupError::LocationNotFound,
        other => LookupError::RequestFailed(other.to_string()),
    }
}
