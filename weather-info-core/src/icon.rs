//! Mapping from free-text condition descriptions to icon identifiers.
//!
//! The identifiers correspond 1:1 to image assets shipped with the
//! presentation layer; this module only picks names, it never loads images.

/// Closed set of weather icon identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    Sun,
    NightClear,
    PartlyCloudy,
    Cloud,
    Overcast,
    HeavyRain,
    Rain,
    Thunderstorm,
    Snow,
    Fog,
    Wind,
    Default,
}

impl IconId {
    /// Pick an icon from a condition description.
    ///
    /// Rules are evaluated in order and the first match wins; several rules
    /// overlap ("few clouds" vs "cloudy", "heavy rain" vs "rain"), so the
    /// order is load-bearing. Matching is case-insensitive.
    ///
    /// The day/night split keys off the description text itself containing
    /// "night", which OpenWeather descriptions do not normally do, so
    /// `NightClear` is effectively dormant. Kept as-is pending a decision on
    /// driving it from actual daylight state.
    pub fn from_description(description: &str) -> Self {
        let desc = description.to_lowercase();

        if desc.contains("clear") && !desc.contains("night") {
            IconId::Sun
        } else if desc.contains("clear") && desc.contains("night") {
            IconId::NightClear
        } else if desc.contains("cloud") && desc.contains("few") {
            IconId::PartlyCloudy
        } else if desc.contains("cloud") {
            IconId::Cloud
        } else if desc.contains("overcast") {
            IconId::Overcast
        } else if desc.contains("rain") && desc.contains("heavy") {
            IconId::HeavyRain
        } else if desc.contains("rain") {
            IconId::Rain
        } else if desc.contains("thunderstorm") {
            IconId::Thunderstorm
        } else if desc.contains("snow") {
            IconId::Snow
        } else if desc.contains("fog") || desc.contains("mist") {
            IconId::Fog
        } else if desc.contains("wind") {
            IconId::Wind
        } else {
            IconId::Default
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IconId::Sun => "sun",
            IconId::NightClear => "night_clear",
            IconId::PartlyCloudy => "partly_cloudy",
            IconId::Cloud => "cloud",
            IconId::Overcast => "overcast",
            IconId::HeavyRain => "heavy_rain",
            IconId::Rain => "rain",
            IconId::Thunderstorm => "thunderstorm",
            IconId::Snow => "snow",
            IconId::Fog => "fog",
            IconId::Wind => "wind",
            IconId::Default => "default",
        }
    }

    /// Image asset file name the presentation layer resolves this icon to.
    pub fn file_name(&self) -> String {
        format!("{}.png", self.as_str())
    }
}

impl std::fmt::Display for IconId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heavy_rain_wins_over_rain() {
        assert_eq!(IconId::from_description("heavy rain"), IconId::HeavyRain);
        assert_eq!(
            IconId::from_description("heavy intensity rain"),
            IconId::HeavyRain
        );
        assert_eq!(IconId::from_description("light rain"), IconId::Rain);
    }

    #[test]
    fn few_clouds_wins_over_cloud() {
        assert_eq!(IconId::from_description("few clouds"), IconId::PartlyCloudy);
        assert_eq!(IconId::from_description("broken clouds"), IconId::Cloud);
        assert_eq!(IconId::from_description("scattered clouds"), IconId::Cloud);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(IconId::from_description("Clear Sky"), IconId::Sun);
        assert_eq!(IconId::from_description("SNOW"), IconId::Snow);
    }

    #[test]
    fn clear_with_night_text_maps_to_night_clear() {
        assert_eq!(
            IconId::from_description("clear night"),
            IconId::NightClear
        );
    }

    #[test]
    fn mist_and_fog_share_an_icon() {
        assert_eq!(IconId::from_description("mist"), IconId::Fog);
        assert_eq!(IconId::from_description("fog"), IconId::Fog);
    }

    #[test]
    fn unknown_description_falls_back_to_default() {
        assert_eq!(IconId::from_description("sand"), IconId::Default);
        assert_eq!(IconId::from_description(""), IconId::Default);
    }

    #[test]
    fn file_name_points_at_png_asset() {
        assert_eq!(IconId::PartlyCloudy.file_name(), "partly_cloudy.png");
        assert_eq!(IconId::Default.file_name(), "default.png");
    }
}
