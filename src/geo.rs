//! Great-circle distance and walking-time helpers.

use crate::error::GuidanceError;
use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
pub const WALKING_SPEED_KMH: f64 = 5.0;

/// A WGS84 coordinate in degrees. Ranges are not validated, only finiteness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LatLng", into = "LatLng")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

/// Wire shape of a [`GeoPoint`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GuidanceError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(GuidanceError::InvalidInput(format!(
                "coordinates must be finite numbers (lat={latitude}, lng={longitude})"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// For built-in reference data whose coordinates are known to be finite.
    pub(crate) const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl TryFrom<LatLng> for GeoPoint {
    type Error = GuidanceError;

    fn try_from(value: LatLng) -> Result<Self, Self::Error> {
        GeoPoint::new(value.lat, value.lng)
    }
}

impl From<GeoPoint> for LatLng {
    fn from(point: GeoPoint) -> Self {
        LatLng {
            lat: point.latitude,
            lng: point.longitude,
        }
    }
}

/// Haversine distance in meters.
pub fn calculate_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlng = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// Walking time in whole minutes at a constant 5 km/h, rounded up.
pub fn estimate_walking_time(distance_meters: f64) -> u32 {
    if !distance_meters.is_finite() || distance_meters <= 0.0 {
        return 0;
    }
    (distance_meters * 60.0 / (WALKING_SPEED_KMH * 1000.0)).ceil() as u32
}
