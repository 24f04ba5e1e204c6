//! # Geo Module
//!
//! Great-circle distance between a listing and a construction site.
//!
//! ```text
//!   listing.geolocation ●───────── haversine ─────────● construction site
//!                        \________ distance_km _______/
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::validation::validate_point;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
///
/// Same JSON shape as the marketplace API's `geolocation`:
/// `{ "lat": 40.7128, "lng": -74.006 }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GeoPoint {
    /// Latitude, expected in [-90, 90].
    pub lat: f64,
    /// Longitude, expected in [-180, 180].
    pub lng: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }
}

/// Haversine distance in kilometers, without input checks.
///
/// The intermediate term is clamped to [0, 1] so floating-point drift near
/// antipodal points cannot produce NaN.
#[inline]
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = ((delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance from `origin` to an optional `destination`, in kilometers.
///
/// ## Rules
/// - No destination → `0.0`
/// - Any NaN/infinite coordinate → `InvalidCoordinate`
/// - Ranges are not checked (see [`crate::validation::validate_geo_range`])
///
/// ## Example
/// ```rust
/// use sitedrop_core::geo::{distance_km, GeoPoint};
///
/// let london = GeoPoint::new(51.5074, -0.1278);
/// let paris = GeoPoint::new(48.8566, 2.3522);
///
/// let km = distance_km(london, Some(paris)).unwrap();
/// assert!((km - 343.6).abs() < 1.0);
/// assert_eq!(distance_km(london, None).unwrap(), 0.0);
/// ```
pub fn distance_km(origin: GeoPoint, destination: Option<GeoPoint>) -> CoreResult<f64> {
    validate_point("origin", origin)?;

    let Some(destination) = destination else {
        return Ok(0.0);
    };
    validate_point("destination", destination)?;

    Ok(haversine_km(origin, destination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;

    const NEW_YORK: GeoPoint = GeoPoint::new(40.7128, -74.0060);
    const EAST_VILLAGE: GeoPoint = GeoPoint::new(40.7306, -73.9352);

    #[test]
    fn test_haversine_known_distance() {
        let km = distance_km(NEW_YORK, Some(EAST_VILLAGE)).unwrap();
        assert!((km - 6.286).abs() < 0.01, "expected ~6.29 km, got {km}");
    }

    #[test]
    fn test_absent_destination_is_zero() {
        assert_eq!(distance_km(NEW_YORK, None).unwrap(), 0.0);
    }

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(distance_km(NEW_YORK, Some(NEW_YORK)).unwrap(), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let there = distance_km(NEW_YORK, Some(EAST_VILLAGE)).unwrap();
        let back = distance_km(EAST_VILLAGE, Some(NEW_YORK)).unwrap();
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_antipodal_points() {
        let km = haversine_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0));
        assert!((km - 20015.087).abs() < 0.01);

        let km = haversine_km(GeoPoint::new(90.0, 0.0), GeoPoint::new(-90.0, 0.0));
        assert!(!km.is_nan());
    }

    #[test]
    fn test_nan_coordinate_rejected() {
        let bad = GeoPoint::new(f64::NAN, 0.0);

        let err = distance_km(NEW_YORK, Some(bad)).unwrap_err();
        assert!(matches!(err, PricingError::InvalidCoordinate { .. }));

        // Origin is checked even without a destination
        let err = distance_km(bad, None).unwrap_err();
        assert!(matches!(err, PricingError::InvalidCoordinate { .. }));
    }

    #[test]
    fn test_out_of_range_is_not_an_error() {
        assert!(distance_km(GeoPoint::new(95.0, 200.0), Some(NEW_YORK)).is_ok());
    }

    #[test]
    fn test_geolocation_json_shape() {
        let point: GeoPoint = serde_json::from_str(r#"{"lat":40.7128,"lng":-74.006}"#).unwrap();
        assert_eq!(point, GeoPoint::new(40.7128, -74.006));
    }
}
