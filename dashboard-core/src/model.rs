use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// One instant of station data. Every field is independently optional;
/// `None` means "unknown", never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationSample {
    /// Air temperature, °C.
    pub temperature: Option<f64>,
    /// Relative humidity, %.
    pub humidity: Option<f64>,
    /// Wind speed, km/h.
    pub wind_speed: Option<f64>,
    /// Pressure, mb.
    pub pressure: Option<f64>,
    /// Visibility, km.
    pub visibility: Option<f64>,
    /// Solar radiation, W/m².
    pub radiation: Option<f64>,
    pub uv_index: Option<f64>,
    pub condition: Option<String>,
}

/// One entry of an hourly forecast sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPoint {
    /// ISO-8601 timestamp as sent by the backend.
    pub time: String,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub precipitation: f64,
    pub radiation: f64,
}

/// A validated latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ModelError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(ModelError::CoordinateOutOfRange {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Body of the backend `/api/v1/latest` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestReading {
    pub device_id: String,
    pub ts: String,
    #[serde(default)]
    pub precipitation: Option<f64>,
    #[serde(flatten)]
    pub sample: ObservationSample,
}

impl LatestReading {
    pub fn into_sample(self) -> ObservationSample {
        self.sample
    }
}

/// Body of the backend `/api/v1/predict` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPayload {
    pub device_id: String,
    pub pred_ts: String,
    #[serde(default)]
    pub for_ts: Vec<String>,
    #[serde(default)]
    pub predictions: HashMap<String, Vec<f64>>,
    pub model_version: String,
}

impl ForecastPayload {
    /// Zip `for_ts` with the five prediction series into hourly points.
    ///
    /// An empty `for_ts` yields an empty sequence regardless of
    /// `predictions`; the backend answers that way for `no_data` and
    /// failed model runs.
    pub fn hourly_points(&self) -> Result<Vec<HourlyPoint>, ModelError> {
        if self.for_ts.is_empty() {
            debug!(
                device = %self.device_id,
                model_version = %self.model_version,
                "forecast payload has no timestamps"
            );
            return Ok(Vec::new());
        }

        let temperature = self.series("temperature")?;
        let humidity = self.series("humidity")?;
        let wind_speed = self.series("wind_speed")?;
        let precipitation = self.series("precipitation")?;
        let radiation = self.series("radiation")?;

        let points: Vec<HourlyPoint> = self
            .for_ts
            .iter()
            .enumerate()
            .map(|(i, time)| HourlyPoint {
                time: time.clone(),
                temperature: temperature[i],
                humidity: humidity[i],
                wind_speed: wind_speed[i],
                precipitation: precipitation[i],
                radiation: radiation[i],
            })
            .collect();

        debug!(
            device = %self.device_id,
            points = points.len(),
            "converted forecast payload"
        );

        Ok(points)
    }

    fn series(&self, name: &'static str) -> Result<&[f64], ModelError> {
        let values = self
            .predictions
            .get(name)
            .ok_or(ModelError::MissingSeries(name))?;

        if values.len() != self.for_ts.len() {
            return Err(ModelError::SeriesLength {
                name,
                expected: self.for_ts.len(),
                actual: values.len(),
            });
        }

        Ok(values)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("coordinate ({latitude}, {longitude}) is outside [-90,90] x [-180,180]")]
    CoordinateOutOfRange { latitude: f64, longitude: f64 },

    #[error("forecast payload is missing the '{0}' series")]
    MissingSeries(&'static str),

    #[error("forecast series '{name}' has {actual} values but there are {expected} timestamps")]
    SeriesLength {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
}
