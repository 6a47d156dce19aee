use serde::{Deserialize, Serialize};

use crate::icon::IconId;

/// Display unit chosen by the user. Distinct from the provider-level
/// `units` request parameter, see [`Unit::unit_system`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Celsius,
    Fahrenheit,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
        }
    }

    /// Provider-level `units` query parameter this display unit maps to.
    pub fn unit_system(&self) -> &'static str {
        match self {
            Unit::Celsius => "metric",
            Unit::Fahrenheit => "imperial",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
        }
    }

    pub const fn all() -> &'static [Unit] {
        &[Unit::Celsius, Unit::Fahrenheit]
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Celsius => f.write_str("Celsius"),
            Unit::Fahrenheit => f.write_str("Fahrenheit"),
        }
    }
}

impl TryFrom<&str> for Unit {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "celsius" | "c" => Ok(Unit::Celsius),
            "fahrenheit" | "f" => Ok(Unit::Fahrenheit),
            _ => Err(anyhow::anyhow!(
                "Unknown unit '{value}'. Supported units: celsius, fahrenheit."
            )),
        }
    }
}

/// Immutable lookup input: a free-text location plus the display unit.
#[derive(Debug, Clone)]
pub struct LocationQuery {
    location: String,
    unit: Unit,
}

impl LocationQuery {
    /// Rejects empty or whitespace-only locations.
    pub fn new(location: impl Into<String>, unit: Unit) -> anyhow::Result<Self> {
        let location = location.into();
        if location.trim().is_empty() {
            return Err(anyhow::anyhow!("Location must not be empty."));
        }
        Ok(Self { location, unit })
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }
}

/// Current conditions as parsed from the provider. The temperature is already
/// in the requested display unit because the fetch passed the matching
/// `units` parameter; wind speed stays in m/s as the provider sent it.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub condition: String,
    pub city_name: String,
}

/// One time-stamped forecast record, still in Kelvin. The forecast endpoint
/// ignores the `units` parameter for temperatures, unlike the current one.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    pub time_of_day: String,
    pub temp_kelvin: f64,
    pub condition: String,
}

/// A forecast row after unit conversion, ready to display.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRow {
    pub time_of_day: String,
    pub temperature: f64,
    pub icon: IconId,
}

/// Combined outcome of a successful lookup.
#[derive(Debug, Clone)]
pub struct WeatherReport {
    pub current: CurrentWeather,
    pub unit: Unit,
    pub wind_speed: f64,
    pub wind_label: &'static str,
    pub icon: IconId,
    /// At most three rows, in provider (chronological) order. Empty when the
    /// forecast leg failed; see `forecast_error`.
    pub forecast: Vec<ForecastRow>,
    /// Set when current weather succeeded but the forecast leg did not.
    pub forecast_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_maps_to_provider_unit_system() {
        assert_eq!(Unit::Celsius.unit_system(), "metric");
        assert_eq!(Unit::Fahrenheit.unit_system(), "imperial");
    }

    #[test]
    fn unit_parses_case_insensitively() {
        assert_eq!(Unit::try_from("Celsius").unwrap(), Unit::Celsius);
        assert_eq!(Unit::try_from("f").unwrap(), Unit::Fahrenheit);
        assert!(Unit::try_from("kelvin").is_err());
    }

    #[test]
    fn location_query_rejects_blank_location() {
        let err = LocationQuery::new("   ", Unit::Celsius).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));

        let query = LocationQuery::new("Paris", Unit::Celsius).unwrap();
        assert_eq!(query.location(), "Paris");
        assert_eq!(query.unit(), Unit::Celsius);
    }
}
