//! Pure unit conversions.
//!
//! Current-weather temperature is never converted here: the fetch request
//! already passed the matching provider unit system, so `main.temp` arrives
//! display-ready. Forecast temperatures always arrive in Kelvin regardless of
//! the requested unit system, and wind speed always arrives in m/s.

use crate::model::Unit;

const KELVIN_OFFSET: f64 = 273.15;

/// Convert a provider wind speed (m/s) into the display value and its label.
pub fn wind_speed_display(speed_ms: f64, unit: Unit) -> (f64, &'static str) {
    match unit {
        Unit::Celsius => (speed_ms * 3.6, "km/h"),
        Unit::Fahrenheit => (speed_ms * 2.237, "mph"),
    }
}

/// Convert a forecast temperature (Kelvin) into the display unit.
pub fn forecast_temp_display(temp_kelvin: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Celsius => temp_kelvin - KELVIN_OFFSET,
        Unit::Fahrenheit => (temp_kelvin - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wind_speed_metric_is_km_h() {
        let (value, label) = wind_speed_display(10.0, Unit::Celsius);
        assert_eq!(value, 36.0);
        assert_eq!(label, "km/h");
    }

    #[test]
    fn wind_speed_imperial_is_mph() {
        let (value, label) = wind_speed_display(10.0, Unit::Fahrenheit);
        assert!((value - 22.37).abs() < 1e-9);
        assert_eq!(label, "mph");
    }

    #[test]
    fn freezing_point_converts_exactly() {
        assert_eq!(forecast_temp_display(273.15, Unit::Celsius), 0.0);
        assert_eq!(forecast_temp_display(273.15, Unit::Fahrenheit), 32.0);
    }

    #[test]
    fn warm_forecast_converts_both_ways() {
        let c = forecast_temp_display(293.15, Unit::Celsius);
        let f = forecast_temp_display(293.15, Unit::Fahrenheit);
        assert!((c - 20.0).abs() < 1e-9);
        assert!((f - 68.0).abs() < 1e-9);
    }
}
