//! Decoding of raw provider JSON bodies into domain values.

use serde::Deserialize;
use thiserror::Error;

use crate::model::{CurrentWeather, ForecastEntry};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed weather JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("weather response contained no condition entry")]
    MissingCondition,
    #[error("humidity {0}% is out of range")]
    HumidityOutOfRange(u8),
    #[error("temperature is not a finite number")]
    NonFiniteTemperature,
    #[error("forecast timestamp '{0}' is too short")]
    BadTimestamp(String),
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt_txt: String,
    main: OwForecastMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

/// Decode a current-weather body.
///
/// Field paths: `main.temp`, `main.humidity`, `wind.speed`,
/// `weather[0].description`, `name`.
pub fn parse_current(raw: &str) -> Result<CurrentWeather, ParseError> {
    let parsed: OwCurrentResponse = serde_json::from_str(raw)?;

    if !parsed.main.temp.is_finite() {
        return Err(ParseError::NonFiniteTemperature);
    }
    if parsed.main.humidity > 100 {
        return Err(ParseError::HumidityOutOfRange(parsed.main.humidity));
    }

    let condition = parsed
        .weather
        .into_iter()
        .next()
        .ok_or(ParseError::MissingCondition)?
        .description;

    Ok(CurrentWeather {
        temperature: parsed.main.temp,
        humidity_pct: parsed.main.humidity,
        wind_speed_mps: parsed.wind.speed,
        condition,
        city_name: parsed.name,
    })
}

/// Decode a forecast body into entries in provider (chronological) order.
///
/// `dt_txt` looks like `"2024-01-15 12:00:00"`; characters 11..16 carry the
/// "HH:MM" part shown to the user.
pub fn parse_forecast(raw: &str) -> Result<Vec<ForecastEntry>, ParseError> {
    let parsed: OwForecastResponse = serde_json::from_str(raw)?;

    parsed
        .list
        .into_iter()
        .map(|entry| {
            let time_of_day = entry
                .dt_txt
                .get(11..16)
                .ok_or_else(|| ParseError::BadTimestamp(entry.dt_txt.clone()))?
                .to_string();

            let condition = entry
                .weather
                .into_iter()
                .next()
                .ok_or(ParseError::MissingCondition)?
                .description;

            Ok(ForecastEntry {
                time_of_day,
                temp_kelvin: entry.main.temp,
                condition,
            })
        })
        .collect()
}
