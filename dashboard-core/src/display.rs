//! Display text for the four dashboard panels.
//!
//! Builders take already-parsed data and return plain structs of strings,
//! each with a `Display` impl that lays the panel out as text.

use chrono::{DateTime, NaiveDateTime, Timelike};
use std::fmt;

use crate::gazetteer::{COUNTRY, location_name_for};
use crate::icon::{Glyph, hourly_icon};
use crate::metrics::DerivedMetrics;
use crate::model::{GeoCoordinate, HourlyPoint, ObservationSample};
use crate::placeholder::{AirQualityLevel, PlaceholderSource};

/// Shown in place of a value that is not known.
pub const NO_DATA: &str = "--";

pub const NO_TIME: &str = "--:--";

/// Fixed-point text with exact ties rounded away from zero, so 24.5 shows
/// as "25" and 0.25 as "0.3" at one decimal. `format!("{:.N}")` would round
/// those ties to even instead.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;

    format!("{rounded:.decimals$}")
}

/// `value` with `decimals` places, or [`NO_DATA`] when absent or not finite.
pub fn format_decimal(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => to_fixed(v, decimals),
        _ => NO_DATA.to_string(),
    }
}

fn format_plain(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => v.to_string(),
        _ => NO_DATA.to_string(),
    }
}

/// "HH:00" for an ISO-8601 timestamp, or [`NO_TIME`] when it does not
/// parse. Offset-carrying timestamps use their own offset's hour; naive
/// ones use their wall-clock hour.
pub fn hour_label(timestamp: &str) -> String {
    let hour = DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.hour())
        .or_else(|_| timestamp.parse::<NaiveDateTime>().map(|dt| dt.hour()));

    match hour {
        Ok(hour) => format!("{hour:02}:00"),
        Err(_) => NO_TIME.to_string(),
    }
}

/// "19.9000°N, 75.5000°E", with S/W for negative values.
pub fn format_coordinates(coordinate: GeoCoordinate) -> String {
    let lat = coordinate.latitude();
    let lon = coordinate.longitude();
    let ns = if lat < 0.0 { 'S' } else { 'N' };
    let ew = if lon < 0.0 { 'W' } else { 'E' };

    format!(
        "{}°{ns}, {}°{ew}",
        to_fixed(lat.abs(), 4),
        to_fixed(lon.abs(), 4)
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentPanel {
    pub icon: Glyph,
    pub temperature: String,
    pub condition: String,
    pub feels_like: String,
}

impl CurrentPanel {
    pub fn build(sample: &ObservationSample, derived: &DerivedMetrics) -> Self {
        let temperature = match sample.temperature {
            Some(t) => format!("{}°", to_fixed(t, 0)),
            None => NO_DATA.to_string(),
        };

        Self {
            icon: derived.condition_icon,
            temperature,
            condition: derived.condition_label.to_string(),
            feels_like: format_decimal(derived.feels_like, 1),
        }
    }
}

impl fmt::Display for CurrentPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}  {}", self.icon, self.temperature)?;
        writeln!(f, "{}", self.condition)?;
        write!(f, "Feels like {}°", self.feels_like)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
    pub description: String,
    /// Hex colour for the value, when it carries one.
    pub color: Option<&'static str>,
}

impl DetailRow {
    fn new(label: &'static str, value: String, description: impl Into<String>) -> Self {
        Self {
            label,
            value,
            description: description.into(),
            color: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailsPanel {
    pub rows: Vec<DetailRow>,
}

impl DetailsPanel {
    /// Wind direction and air quality are always drawn from `placeholders`;
    /// pressure and visibility only when the sample lacks them.
    pub fn build(
        sample: &ObservationSample,
        derived: &DerivedMetrics,
        placeholders: &mut dyn PlaceholderSource,
    ) -> Self {
        let humidity = match sample.humidity {
            Some(h) => format!("{h}%"),
            None => NO_DATA.to_string(),
        };

        let wind = format!("{} km/h", format_decimal(sample.wind_speed, 1));
        let wind_desc = format!(
            "{} - {}",
            placeholders.wind_direction(),
            derived.wind_descriptor
        );

        let pressure = match sample.pressure {
            Some(p) => p.to_string(),
            None => to_fixed(placeholders.pressure_mb(), 0),
        };

        let visibility = match sample.visibility {
            Some(v) => v.to_string(),
            None => to_fixed(placeholders.visibility_km(), 1),
        };

        let air_quality = placeholders.air_quality();

        let rows = vec![
            DetailRow::new("Humidity", humidity, "Moisture in air"),
            DetailRow::new("Wind", wind, wind_desc),
            DetailRow::new("Pressure", format!("{pressure} mb"), "Atmospheric pressure"),
            DetailRow::new(
                "Visibility",
                format!("{visibility} km"),
                "Clear view distance",
            ),
            DetailRow::new(
                "Dew Point",
                format!("{}°", format_decimal(Some(derived.dew_point), 1)),
                "Condensation temp",
            ),
            DetailRow::new(
                "UV Index",
                format_plain(Some(derived.uv_index)),
                derived.uv_level.as_str(),
            ),
            DetailRow {
                color: Some(air_quality.level.color()),
                ..DetailRow::new(
                    "Air Quality",
                    air_quality.index.to_string(),
                    air_quality.level.as_str(),
                )
            },
            DetailRow::new(
                "Solar Rad",
                format!("{} W/m²", format_plain(sample.radiation)),
                "Sunlight intensity",
            ),
        ];

        Self { rows }
    }

    pub fn row(&self, label: &str) -> Option<&DetailRow> {
        self.rows.iter().find(|row| row.label == label)
    }

    pub fn air_quality_level(&self) -> Option<AirQualityLevel> {
        let index = self.row("Air Quality")?.value.parse().ok()?;
        Some(AirQualityLevel::from_index(index))
    }
}

impl fmt::Display for DetailsPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:<12}{:>14}  {}", row.label, row.value, row.description)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyCard {
    pub hour: String,
    pub icon: Glyph,
    pub temperature: String,
    pub humidity: String,
    pub precipitation: String,
}

impl HourlyCard {
    pub fn build(point: &HourlyPoint) -> Self {
        Self {
            hour: hour_label(&point.time),
            icon: hourly_icon(point.temperature, point.precipitation),
            temperature: format!("{}°", to_fixed(point.temperature, 0)),
            humidity: format!("💧 {}%", to_fixed(point.humidity, 0)),
            precipitation: format!("🌧️ {}mm", to_fixed(point.precipitation, 1)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyPanel {
    pub cards: Vec<HourlyCard>,
}

impl HourlyPanel {
    pub const HEADER: &'static str = "Hourly Forecast";
    pub const EMPTY: &'static str = "No forecast data available";

    pub fn build(points: &[HourlyPoint]) -> Self {
        Self {
            cards: points.iter().map(HourlyCard::build).collect(),
        }
    }
}

impl fmt::Display for HourlyPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::HEADER)?;

        if self.cards.is_empty() {
            return write!(f, "\n{}", Self::EMPTY);
        }

        for card in &self.cards {
            write!(
                f,
                "\n{}  {}  {:>4}  {}  {}",
                card.hour, card.icon, card.temperature, card.humidity, card.precipitation
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationPanel {
    pub name: &'static str,
    pub country: &'static str,
    pub coordinates: Option<String>,
    pub device_id: Option<String>,
}

impl LocationPanel {
    pub fn build(coordinate: Option<GeoCoordinate>, device_id: Option<&str>) -> Self {
        Self {
            name: location_name_for(coordinate),
            country: COUNTRY,
            coordinates: coordinate.map(format_coordinates),
            device_id: device_id.filter(|id| !id.is_empty()).map(str::to_string),
        }
    }
}

impl fmt::Display for LocationPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "📍 {}\n{}", self.name, self.country)?;
        if let Some(coordinates) = &self.coordinates {
            write!(f, "\n{coordinates}")?;
        }
        if let Some(device) = &self.device_id {
            write!(f, "\n📡 {device}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::{CompassPoint, FixedPlaceholders};

    fn sample() -> ObservationSample {
        ObservationSample {
            temperature: Some(25.5),
            humidity: Some(60.0),
            wind_speed: Some(2.5),
            radiation: Some(400.0),
            ..Default::default()
        }
    }

    #[test]
    fn hour_label_parses_offsets_and_naive_timestamps() {
        assert_eq!(hour_label("2026-01-30T14:00:00+00:00"), "14:00");
        assert_eq!(hour_label("2026-01-30T07:30:00+05:30"), "07:00");
        assert_eq!(hour_label("2026-01-30T13:39:33.818660"), "13:00");
        assert_eq!(hour_label("not a time"), NO_TIME);
    }

    #[test]
    fn coordinates_use_hemisphere_letters() {
        let c = GeoCoordinate::new(19.9, 75.5).unwrap();
        assert_eq!(format_coordinates(c), "19.9000°N, 75.5000°E");

        let c = GeoCoordinate::new(-33.8688, -70.25).unwrap();
        assert_eq!(format_coordinates(c), "33.8688°S, 70.2500°W");
    }

    #[test]
    fn to_fixed_rounds_ties_away_from_zero() {
        assert_eq!(to_fixed(24.5, 0), "25");
        assert_eq!(to_fixed(22.5, 0), "23");
        assert_eq!(to_fixed(0.25, 1), "0.3");
        assert_eq!(to_fixed(-2.5, 0), "-3");
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(7.0, 1), "7.0");
    }

    #[test]
    fn panels_round_half_readings_up() {
        let sample = ObservationSample {
            temperature: Some(24.5),
            ..Default::default()
        };
        let panel = CurrentPanel::build(&sample, &DerivedMetrics::from_sample(&sample));
        assert_eq!(panel.temperature, "25°");

        let card = HourlyCard::build(&HourlyPoint {
            time: "2026-01-30T14:00:00+00:00".into(),
            temperature: 22.5,
            humidity: 64.5,
            wind_speed: 3.0,
            precipitation: 0.25,
            radiation: 400.0,
        });
        assert_eq!(card.temperature, "23°");
        assert_eq!(card.humidity, "💧 65%");
        assert_eq!(card.precipitation, "🌧️ 0.3mm");

        let sample = ObservationSample {
            wind_speed: Some(0.25),
            ..Default::default()
        };
        let derived = DerivedMetrics::from_sample(&sample);
        let mut placeholders = FixedPlaceholders {
            visibility_km: 4.25,
            pressure_mb: 1012.5,
            ..Default::default()
        };
        let panel = DetailsPanel::build(&sample, &derived, &mut placeholders);
        assert_eq!(panel.row("Wind").unwrap().value, "0.3 km/h");
        assert_eq!(panel.row("Visibility").unwrap().value, "4.3 km");
        assert_eq!(panel.row("Pressure").unwrap().value, "1013 mb");
    }

    #[test]
    fn current_panel_with_data() {
        let sample = sample();
        let panel = CurrentPanel::build(&sample, &DerivedMetrics::from_sample(&sample));

        assert_eq!(panel.icon, Glyph::SunBehindCloud);
        assert_eq!(panel.temperature, "26°");
        assert_eq!(panel.condition, "Partly Cloudy");
        assert_eq!(panel.feels_like, "22.5");
        assert!(panel.to_string().ends_with("Feels like 22.5°"));
    }

    #[test]
    fn current_panel_without_data() {
        let sample = ObservationSample::default();
        let panel = CurrentPanel::build(&sample, &DerivedMetrics::from_sample(&sample));

        assert_eq!(panel.temperature, NO_DATA);
        assert_eq!(panel.feels_like, NO_DATA);
        assert_eq!(panel.condition, "Cloudy");
    }

    #[test]
    fn details_panel_uses_placeholders_only_where_needed() {
        let sample = ObservationSample {
            pressure: Some(1009.5),
            ..sample()
        };
        let derived = DerivedMetrics::from_sample(&sample);
        let mut placeholders = FixedPlaceholders {
            wind_direction: CompassPoint::SE,
            air_quality_index: 120,
            pressure_mb: 1016.4,
            visibility_km: 5.26,
        };

        let panel = DetailsPanel::build(&sample, &derived, &mut placeholders);

        let value = |label: &str| panel.row(label).map(|r| r.value.clone()).unwrap();
        assert_eq!(value("Humidity"), "60%");
        assert_eq!(value("Wind"), "2.5 km/h");
        assert_eq!(panel.row("Wind").unwrap().description, "SE - Light breeze");
        assert_eq!(value("Pressure"), "1009.5 mb");
        assert_eq!(value("Visibility"), "5.3 km");
        assert_eq!(value("Dew Point"), "12.0°");
        assert_eq!(value("UV Index"), "8");
        assert_eq!(panel.row("UV Index").unwrap().description, "Very High");
        assert_eq!(value("Air Quality"), "120");
        assert_eq!(panel.row("Air Quality").unwrap().color, Some("#ff7e00"));
        assert_eq!(
            panel.air_quality_level(),
            Some(AirQualityLevel::UnhealthyForSensitive)
        );
        assert_eq!(value("Solar Rad"), "400 W/m²");
    }

    #[test]
    fn details_panel_for_empty_sample() {
        let sample = ObservationSample::default();
        let derived = DerivedMetrics::from_sample(&sample);
        let panel = DetailsPanel::build(&sample, &derived, &mut FixedPlaceholders::default());

        let value = |label: &str| panel.row(label).map(|r| r.value.clone()).unwrap();
        assert_eq!(value("Humidity"), NO_DATA);
        assert_eq!(value("Wind"), "-- km/h");
        assert_eq!(panel.row("Wind").unwrap().description, "N - Light air");
        assert_eq!(value("Pressure"), "1013 mb");
        assert_eq!(value("Visibility"), "7.0 km");
        assert_eq!(value("Dew Point"), "0.0°");
        assert_eq!(value("UV Index"), "0");
        assert_eq!(value("Solar Rad"), "-- W/m²");
        assert_eq!(panel.rows.len(), 8);
    }

    #[test]
    fn details_panel_hides_non_finite_dew_point() {
        let sample = ObservationSample {
            humidity: Some(0.0),
            ..Default::default()
        };
        let derived = DerivedMetrics::from_sample(&sample);
        let panel = DetailsPanel::build(&sample, &derived, &mut FixedPlaceholders::default());

        assert_eq!(panel.row("Dew Point").unwrap().value, "--°");
    }

    #[test]
    fn hourly_panel_cards() {
        let points = vec![
            HourlyPoint {
                time: "2026-01-30T14:00:00+00:00".into(),
                temperature: 22.0,
                humidity: 64.0,
                wind_speed: 3.3,
                precipitation: 0.6,
                radiation: 450.0,
            },
            HourlyPoint {
                time: "2026-01-30T15:00:00+00:00".into(),
                temperature: 31.2,
                humidity: 40.4,
                wind_speed: 3.6,
                precipitation: 0.0,
                radiation: 500.0,
            },
        ];

        let panel = HourlyPanel::build(&points);
        assert_eq!(panel.cards.len(), 2);

        let first = &panel.cards[0];
        assert_eq!(first.hour, "14:00");
        assert_eq!(first.icon, Glyph::RainCloud);
        assert_eq!(first.temperature, "22°");
        assert_eq!(first.humidity, "💧 64%");
        assert_eq!(first.precipitation, "🌧️ 0.6mm");

        assert_eq!(panel.cards[1].icon, Glyph::Sun);
        assert!(panel.to_string().starts_with(HourlyPanel::HEADER));
    }

    #[test]
    fn hourly_panel_empty_state() {
        let panel = HourlyPanel::build(&[]);
        assert_eq!(
            panel.to_string(),
            "Hourly Forecast\nNo forecast data available"
        );
    }

    #[test]
    fn location_panel() {
        let coordinate = GeoCoordinate::new(19.9, 75.5).ok();
        let panel = LocationPanel::build(coordinate, Some("station-001"));

        assert_eq!(panel.name, "Chhatrapati Sambhajinagar, Maharashtra");
        assert_eq!(panel.country, "India");
        assert_eq!(panel.coordinates.as_deref(), Some("19.9000°N, 75.5000°E"));
        assert!(panel.to_string().ends_with("📡 station-001"));

        let panel = LocationPanel::build(None, Some(""));
        assert_eq!(panel.name, "Unknown Location");
        assert_eq!(panel.coordinates, None);
        assert_eq!(panel.device_id, None);
        assert_eq!(panel.to_string(), "📍 Unknown Location\nIndia");
    }
}
