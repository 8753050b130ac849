use crate::model::GeoCoordinate;

pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// All stations shown on the dashboard are in India.
pub const COUNTRY: &str = "India";

/// An inclusive latitude/longitude box with the place name it maps to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub name: &'static str,
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl Region {
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&latitude)
            && (self.lon_min..=self.lon_max).contains(&longitude)
    }
}

/// Checked in order; the first containing box names the location. New
/// entries go at the end so existing lookups keep their names.
pub const REGIONS: &[Region] = &[
    Region {
        name: "Chhatrapati Sambhajinagar, Maharashtra",
        lat_min: 19.5,
        lat_max: 20.5,
        lon_min: 75.0,
        lon_max: 76.0,
    },
    Region {
        name: "Bangalore, Karnataka",
        lat_min: 12.5,
        lat_max: 13.5,
        lon_min: 77.0,
        lon_max: 78.0,
    },
    Region {
        name: "Mumbai, Maharashtra",
        lat_min: 19.0,
        lat_max: 19.5,
        lon_min: 72.5,
        lon_max: 73.5,
    },
    Region {
        name: "Delhi",
        lat_min: 28.5,
        lat_max: 29.0,
        lon_min: 77.0,
        lon_max: 78.0,
    },
];

/// Name the place at the given coordinates, or [`UNKNOWN_LOCATION`] when
/// either coordinate is missing or no region contains the point.
pub fn location_name(latitude: Option<f64>, longitude: Option<f64>) -> &'static str {
    let (Some(lat), Some(lon)) = (latitude, longitude) else {
        return UNKNOWN_LOCATION;
    };

    REGIONS
        .iter()
        .find(|region| region.contains(lat, lon))
        .map_or(UNKNOWN_LOCATION, |region| region.name)
}

pub fn location_name_for(coordinate: Option<GeoCoordinate>) -> &'static str {
    location_name(
        coordinate.map(|c| c.latitude()),
        coordinate.map(|c| c.longitude()),
    )
}
