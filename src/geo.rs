use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Errors raised while building geometry from untrusted numbers.
#[derive(Debug, PartialEq)]
pub enum GeoError {
    InvertedLatitude,
    InvertedLongitude,
}

impl Display for GeoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoError::InvertedLatitude => write!(
                f,
                "[InvertedLatitude]: [south-west latitude is above north-east latitude]"
            ),
            GeoError::InvertedLongitude => write!(
                f,
                "[InvertedLongitude]: [south-west longitude is east of north-east longitude]"
            ),
        }
    }
}

impl std::error::Error for GeoError {}

/// Rectangular region used both for framing the camera and for clamping points.
///
/// `south_west` must not lie above or to the right of `north_east`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

impl BoundingBox {
    pub fn new(south_west: GeoPoint, north_east: GeoPoint) -> Result<Self, GeoError> {
        if south_west.latitude > north_east.latitude {
            return Err(GeoError::InvertedLatitude);
        }
        if south_west.longitude > north_east.longitude {
            return Err(GeoError::InvertedLongitude);
        }
        Ok(Self {
            south_west,
            north_east,
        })
    }

    /// Inclusive on every edge.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.latitude >= self.south_west.latitude
            && point.latitude <= self.north_east.latitude
            && point.longitude >= self.south_west.longitude
            && point.longitude <= self.north_east.longitude
    }

    /// Pulls each axis independently back into range. Points already inside are returned as-is.
    pub fn clamp(&self, point: GeoPoint) -> GeoPoint {
        GeoPoint {
            latitude: point
                .latitude
                .min(self.north_east.latitude)
                .max(self.south_west.latitude),
            longitude: point
                .longitude
                .min(self.north_east.longitude)
                .max(self.south_west.longitude),
        }
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint {
            latitude: (self.south_west.latitude + self.north_east.latitude) / 2.0,
            longitude: (self.south_west.longitude + self.north_east.longitude) / 2.0,
        }
    }
}

/// Camera region in the shape map widgets expect: a center plus zoom deltas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Region {
    pub fn covering(bounds: &BoundingBox, latitude_delta: f64, longitude_delta: f64) -> Self {
        let center = bounds.center();
        Self {
            latitude: center.latitude,
            longitude: center.longitude,
            latitude_delta,
            longitude_delta,
        }
    }

    /// Corners of the area the camera shows, for widgets that frame by bounds.
    pub fn visible_bounds(&self) -> BoundingBox {
        let half_lat = self.latitude_delta / 2.0;
        let half_lng = self.longitude_delta / 2.0;
        BoundingBox {
            south_west: GeoPoint::new(self.latitude - half_lat, self.longitude - half_lng),
            north_east: GeoPoint::new(self.latitude + half_lat, self.longitude + half_lng),
        }
    }
}
