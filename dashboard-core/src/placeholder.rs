//! Values the dashboard shows without a measurement behind them.
//!
//! Wind direction and air-quality index are never derived from input, and
//! pressure and visibility fall back to a plausible value when a station
//! does not report them. All of these come from a [`PlaceholderSource`] so
//! callers choose between real randomness, a seeded generator, or fixed
//! values.

use rand::{Rng, SeedableRng, rngs::StdRng};
use std::fmt::{self, Debug};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassPoint {
    pub const fn all() -> &'static [CompassPoint] {
        &[
            CompassPoint::N,
            CompassPoint::NE,
            CompassPoint::E,
            CompassPoint::SE,
            CompassPoint::S,
            CompassPoint::SW,
            CompassPoint::W,
            CompassPoint::NW,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::NE => "NE",
            CompassPoint::E => "E",
            CompassPoint::SE => "SE",
            CompassPoint::S => "S",
            CompassPoint::SW => "SW",
            CompassPoint::W => "W",
            CompassPoint::NW => "NW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AirQualityLevel {
    Good,
    Moderate,
    UnhealthyForSensitive,
    Unhealthy,
    VeryUnhealthy,
}

impl AirQualityLevel {
    pub fn from_index(index: u16) -> Self {
        match index {
            0..=50 => AirQualityLevel::Good,
            51..=100 => AirQualityLevel::Moderate,
            101..=150 => AirQualityLevel::UnhealthyForSensitive,
            151..=200 => AirQualityLevel::Unhealthy,
            _ => AirQualityLevel::VeryUnhealthy,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AirQualityLevel::Good => "Good",
            AirQualityLevel::Moderate => "Moderate",
            AirQualityLevel::UnhealthyForSensitive => "Unhealthy for Sensitive",
            AirQualityLevel::Unhealthy => "Unhealthy",
            AirQualityLevel::VeryUnhealthy => "Very Unhealthy",
        }
    }

    /// Hex colour the index is painted in.
    pub fn color(&self) -> &'static str {
        match self {
            AirQualityLevel::Good => "#00e400",
            AirQualityLevel::Moderate => "#ffff00",
            AirQualityLevel::UnhealthyForSensitive => "#ff7e00",
            AirQualityLevel::Unhealthy => "#ff0000",
            AirQualityLevel::VeryUnhealthy => "#8f3f97",
        }
    }
}

impl fmt::Display for AirQualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AirQuality {
    pub index: u16,
    pub level: AirQualityLevel,
}

impl AirQuality {
    pub fn from_index(index: u16) -> Self {
        Self {
            index,
            level: AirQualityLevel::from_index(index),
        }
    }
}

/// Source of the non-deterministic dashboard values. Each call may return
/// something different; callers must not cache or compare them.
pub trait PlaceholderSource: Debug {
    fn wind_direction(&mut self) -> CompassPoint;

    /// Air-quality index in `50..=199`.
    fn air_quality_index(&mut self) -> u16;

    /// Stand-in pressure in mb, within `1008..1018`.
    fn pressure_mb(&mut self) -> f64;

    /// Stand-in visibility in km, within `4..10`.
    fn visibility_km(&mut self) -> f64;

    fn air_quality(&mut self) -> AirQuality {
        AirQuality::from_index(self.air_quality_index())
    }
}

/// Uniformly random placeholders.
#[derive(Debug, Clone)]
pub struct RandomPlaceholders<R = StdRng> {
    rng: R,
}

impl RandomPlaceholders<StdRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Same seed, same sequence of values.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomPlaceholders<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Debug> PlaceholderSource for RandomPlaceholders<R> {
    fn wind_direction(&mut self) -> CompassPoint {
        let points = CompassPoint::all();
        let point = points[self.rng.gen_range(0..points.len())];
        trace!(%point, "drew wind direction");
        point
    }

    fn air_quality_index(&mut self) -> u16 {
        let index = self.rng.gen_range(50..200);
        trace!(index, "drew air quality index");
        index
    }

    fn pressure_mb(&mut self) -> f64 {
        1013.0 + self.rng.gen_range(-5.0..5.0)
    }

    fn visibility_km(&mut self) -> f64 {
        self.rng.gen_range(4.0..10.0)
    }
}

/// Placeholders that never change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPlaceholders {
    pub wind_direction: CompassPoint,
    pub air_quality_index: u16,
    pub pressure_mb: f64,
    pub visibility_km: f64,
}

impl Default for FixedPlaceholders {
    fn default() -> Self {
        Self {
            wind_direction: CompassPoint::N,
            air_quality_index: 75,
            pressure_mb: 1013.0,
            visibility_km: 7.0,
        }
    }
}

impl PlaceholderSource for FixedPlaceholders {
    fn wind_direction(&mut self) -> CompassPoint {
        self.wind_direction
    }

    fn air_quality_index(&mut self) -> u16 {
        self.air_quality_index
    }

    fn pressure_mb(&mut self) -> f64 {
        self.pressure_mb
    }

    fn visibility_km(&mut self) -> f64 {
        self.visibility_km
    }
}

/// Seeded when `seed` is set, entropy-backed otherwise.
pub fn placeholder_source(seed: Option<u64>) -> Box<dyn PlaceholderSource> {
    match seed {
        Some(seed) => Box::new(RandomPlaceholders::seeded(seed)),
        None => Box::new(RandomPlaceholders::from_entropy()),
    }
}
