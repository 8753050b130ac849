use std::fmt;

/// Weather glyphs shown by the dashboard panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Sun,
    SunBehindCloud,
    SunBehindSmallCloud,
    SunBehindRainCloud,
    Cloud,
    RainCloud,
    ThunderCloud,
    Snowflake,
    Fog,
}

impl Glyph {
    pub fn as_str(&self) -> &'static str {
        match self {
            Glyph::Sun => "☀️",
            Glyph::SunBehindCloud => "⛅",
            Glyph::SunBehindSmallCloud => "🌤️",
            Glyph::SunBehindRainCloud => "🌦️",
            Glyph::Cloud => "☁️",
            Glyph::RainCloud => "🌧️",
            Glyph::ThunderCloud => "⛈️",
            Glyph::Snowflake => "❄️",
            Glyph::Fog => "🌫️",
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered keyword rules for condition labels. Rules are checked top to
/// bottom and the first one with a matching keyword wins, so "Thunderstorm
/// with rain" resolves to rain.
const CONDITION_RULES: &[(&[&str], Glyph)] = &[
    (&["clear", "sunny"], Glyph::Sun),
    (&["cloud", "partly"], Glyph::SunBehindCloud),
    (&["rain", "drizzle"], Glyph::RainCloud),
    (&["thunder", "storm"], Glyph::ThunderCloud),
    (&["snow"], Glyph::Snowflake),
    (&["fog", "mist"], Glyph::Fog),
];

const CONDITION_FALLBACK: Glyph = Glyph::SunBehindSmallCloud;

/// Pick a glyph for a condition label by case-insensitive substring match.
pub fn condition_icon(label: &str) -> Glyph {
    let label = label.to_lowercase();

    CONDITION_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| label.contains(k)))
        .map(|(_, glyph)| *glyph)
        .unwrap_or(CONDITION_FALLBACK)
}

/// Pick a glyph for one hourly forecast entry. Precipitation is checked
/// before temperature.
pub fn hourly_icon(temperature: f64, precipitation: f64) -> Glyph {
    if precipitation > 0.5 {
        Glyph::RainCloud
    } else if precipitation > 0.1 {
        Glyph::SunBehindRainCloud
    } else if temperature > 30.0 {
        Glyph::Sun
    } else if temperature > 25.0 {
        Glyph::SunBehindCloud
    } else if temperature > 20.0 {
        Glyph::SunBehindSmallCloud
    } else {
        Glyph::Cloud
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_icon_matches_case_insensitive_substrings() {
        assert_eq!(condition_icon("Heavy Thunderstorm"), Glyph::ThunderCloud);
        assert_eq!(condition_icon("SUNNY"), Glyph::Sun);
        assert_eq!(condition_icon("Light Drizzle"), Glyph::RainCloud);
        assert_eq!(condition_icon("snow showers"), Glyph::Snowflake);
        assert_eq!(condition_icon("Morning mist"), Glyph::Fog);
    }

    #[test]
    fn condition_icon_first_rule_wins() {
        // "cloud" is listed before "rain" and "storm".
        assert_eq!(condition_icon("Rain clouds"), Glyph::SunBehindCloud);
        assert_eq!(condition_icon("Thunderstorm with rain"), Glyph::RainCloud);
        assert_eq!(condition_icon("Clear after snow"), Glyph::Sun);
    }

    #[test]
    fn condition_icon_falls_back_when_nothing_matches() {
        assert_eq!(condition_icon("Haze"), Glyph::SunBehindSmallCloud);
        assert_eq!(condition_icon(""), Glyph::SunBehindSmallCloud);
    }

    #[test]
    fn hourly_icon_precipitation_takes_priority() {
        assert_eq!(hourly_icon(22.0, 0.6), Glyph::RainCloud);
        assert_eq!(hourly_icon(35.0, 0.3), Glyph::SunBehindRainCloud);
        assert_eq!(hourly_icon(35.0, 0.1), Glyph::Sun);
    }

    #[test]
    fn hourly_icon_temperature_buckets() {
        assert_eq!(hourly_icon(30.5, 0.0), Glyph::Sun);
        assert_eq!(hourly_icon(30.0, 0.0), Glyph::SunBehindCloud);
        assert_eq!(hourly_icon(25.0, 0.0), Glyph::SunBehindSmallCloud);
        assert_eq!(hourly_icon(20.0, 0.0), Glyph::Cloud);
        assert_eq!(hourly_icon(-5.0, 0.0), Glyph::Cloud);
    }

    #[test]
    fn glyph_display_uses_emoji() {
        assert_eq!(Glyph::ThunderCloud.to_string(), "⛈️");
        assert_eq!(format!("{}", Glyph::Cloud), "☁️");
    }
}
