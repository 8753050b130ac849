//! Core library for the weather `dashboard`.
//!
//! This crate defines:
//! - Derived display metrics (feels-like, dew point, UV, wind, condition)
//! - Icon selection and the static location gazetteer
//! - Injectable placeholder values for fields with no measurement behind them
//! - Display text for the current, details, hourly and location panels
//! - Backend payload models and on-disk configuration
//!
//! It is used by `dashboard-cli`, but the derivation functions are pure and
//! can be reused by any other front end.

pub mod config;
pub mod display;
pub mod gazetteer;
pub mod icon;
pub mod metrics;
pub mod model;
pub mod placeholder;

pub use config::Config;
pub use display::{CurrentPanel, DetailsPanel, HourlyPanel, LocationPanel};
pub use gazetteer::location_name;
pub use icon::{Glyph, condition_icon, hourly_icon};
pub use metrics::{
    ConditionLabel, DerivedMetrics, UvLevel, WindDescriptor, condition_label, dew_point,
    feels_like, uv_level, wind_descriptor,
};
pub use model::{
    ForecastPayload, GeoCoordinate, HourlyPoint, LatestReading, ModelError, ObservationSample,
};
pub use placeholder::{FixedPlaceholders, PlaceholderSource, RandomPlaceholders};
