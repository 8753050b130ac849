//! Derived display metrics.
//!
//! Every function here is pure and total: missing input never fails, it
//! falls back to a documented value instead.

use std::fmt;

use crate::icon::{Glyph, condition_icon};
use crate::model::ObservationSample;

/// Humidity penalty applied per percentage point by [`feels_like`].
pub const FEELS_LIKE_HUMIDITY_FACTOR: f64 = 0.05;

/// Magnus coefficients.
pub const MAGNUS_A: f64 = 17.27;
pub const MAGNUS_B: f64 = 237.7;

/// Temperature [`dew_point`] evaluates the Magnus formula at, in place of
/// the ambient temperature.
pub const DEW_POINT_REFERENCE_C: f64 = 20.0;

/// Radiation (W/m²) per UV index step when no UV index was measured.
pub const RADIATION_PER_UV_STEP: f64 = 50.0;

/// Feels-like temperature: `temperature - 0.05 * humidity`, rounded to one
/// decimal. Humidity counts as 0 when absent; `None` when temperature is.
///
/// A linear humidity penalty, not a heat-index model.
pub fn feels_like(temperature: Option<f64>, humidity: Option<f64>) -> Option<f64> {
    let temperature = temperature?;
    let penalty = humidity.unwrap_or(0.0) * FEELS_LIKE_HUMIDITY_FACTOR;

    Some(round_to_tenth(temperature - penalty))
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConditionLabel {
    Clear,
    PartlyCloudy,
    Cloudy,
    /// Condition text supplied by the station, kept verbatim.
    Reported(String),
}

impl ConditionLabel {
    pub fn as_str(&self) -> &str {
        match self {
            ConditionLabel::Clear => "Clear",
            ConditionLabel::PartlyCloudy => "Partly Cloudy",
            ConditionLabel::Cloudy => "Cloudy",
            ConditionLabel::Reported(text) => text.as_str(),
        }
    }

    pub fn icon(&self) -> Glyph {
        condition_icon(self.as_str())
    }
}

impl fmt::Display for ConditionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Use the reported condition when there is one, otherwise bucket by
/// temperature. An empty report counts as no report.
pub fn condition_label(temperature: Option<f64>, explicit: Option<&str>) -> ConditionLabel {
    if let Some(text) = explicit.filter(|t| !t.is_empty()) {
        return ConditionLabel::Reported(text.to_string());
    }

    match temperature {
        Some(t) if t > 30.0 => ConditionLabel::Clear,
        Some(t) if t > 20.0 => ConditionLabel::PartlyCloudy,
        _ => ConditionLabel::Cloudy,
    }
}

/// Dew point as the dashboard has always shown it: the Magnus formula
/// evaluated at a fixed 20 °C instead of the measured temperature, and 0
/// when humidity is unknown.
///
/// The fixed reference makes this wrong whenever the air is not at 20 °C.
/// The output is kept as is for compatibility; [`dew_point_at`] takes the
/// real temperature.
pub fn dew_point(humidity: Option<f64>) -> f64 {
    match humidity {
        Some(h) => dew_point_at(DEW_POINT_REFERENCE_C, h),
        None => 0.0,
    }
}

/// Magnus dew point for an ambient temperature (°C) and relative humidity
/// (%). Non-positive humidity gives a non-finite result.
pub fn dew_point_at(temperature: f64, humidity: f64) -> f64 {
    let alpha = (MAGNUS_A * temperature) / (MAGNUS_B + temperature) + (humidity / 100.0).ln();
    (MAGNUS_B * alpha) / (MAGNUS_A - alpha)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UvLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvLevel {
    pub fn from_index(index: f64) -> Self {
        if index <= 2.0 {
            UvLevel::Low
        } else if index <= 5.0 {
            UvLevel::Moderate
        } else if index <= 7.0 {
            UvLevel::High
        } else if index <= 10.0 {
            UvLevel::VeryHigh
        } else {
            UvLevel::Extreme
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UvLevel::Low => "Low",
            UvLevel::Moderate => "Moderate",
            UvLevel::High => "High",
            UvLevel::VeryHigh => "Very High",
            UvLevel::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for UvLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The UV value shown on the dashboard: the measured index, else an
/// estimate of `round(radiation / 50)`, else 0.
pub fn uv_value(uv_index: Option<f64>, radiation: Option<f64>) -> f64 {
    uv_index.unwrap_or_else(|| {
        radiation
            .map(|r| round_half_up(r / RADIATION_PER_UV_STEP))
            .unwrap_or(0.0)
    })
}

pub fn uv_level(uv_index: Option<f64>, radiation: Option<f64>) -> UvLevel {
    UvLevel::from_index(uv_value(uv_index, radiation))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindDescriptor {
    /// No wind reading at all; not the same as [`WindDescriptor::Calm`].
    LightAir,
    Calm,
    LightBreeze,
    Moderate,
    Fresh,
    Strong,
    VeryStrong,
}

impl WindDescriptor {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindDescriptor::LightAir => "Light air",
            WindDescriptor::Calm => "Calm",
            WindDescriptor::LightBreeze => "Light breeze",
            WindDescriptor::Moderate => "Moderate",
            WindDescriptor::Fresh => "Fresh",
            WindDescriptor::Strong => "Strong",
            WindDescriptor::VeryStrong => "Very strong",
        }
    }
}

impl fmt::Display for WindDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describe a wind speed in km/h.
pub fn wind_descriptor(wind_speed: Option<f64>) -> WindDescriptor {
    let Some(speed) = wind_speed else {
        return WindDescriptor::LightAir;
    };

    if speed < 1.0 {
        WindDescriptor::Calm
    } else if speed < 6.0 {
        WindDescriptor::LightBreeze
    } else if speed < 12.0 {
        WindDescriptor::Moderate
    } else if speed < 20.0 {
        WindDescriptor::Fresh
    } else if speed < 29.0 {
        WindDescriptor::Strong
    } else {
        WindDescriptor::VeryStrong
    }
}

/// Everything the panels derive from one [`ObservationSample`].
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetrics {
    pub feels_like: Option<f64>,
    pub dew_point: f64,
    pub uv_index: f64,
    pub uv_level: UvLevel,
    pub wind_descriptor: WindDescriptor,
    pub condition_label: ConditionLabel,
    pub condition_icon: Glyph,
}

impl DerivedMetrics {
    pub fn from_sample(sample: &ObservationSample) -> Self {
        let condition_label = condition_label(sample.temperature, sample.condition.as_deref());
        let condition_icon = condition_label.icon();
        let uv_index = uv_value(sample.uv_index, sample.radiation);

        Self {
            feels_like: feels_like(sample.temperature, sample.humidity),
            dew_point: dew_point(sample.humidity),
            uv_index,
            uv_level: UvLevel::from_index(uv_index),
            wind_descriptor: wind_descriptor(sample.wind_speed),
            condition_label,
            condition_icon,
        }
    }
}

impl From<&ObservationSample> for DerivedMetrics {
    fn from(sample: &ObservationSample) -> Self {
        Self::from_sample(sample)
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// Ties go towards +inf, so -2.5 rounds to -2 rather than -3.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
