use serde::{Deserialize, Serialize};

/// Maximum distance between a field technician and the ticket location at
/// completion time. The boundary itself passes.
pub const GEOFENCE_RADIUS_METERS: f64 = 100.0;

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Great-circle distance in meters between two points.
pub fn haversine_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}

pub fn within_geofence(distance_meters: f64) -> bool {
    distance_meters <= GEOFENCE_RADIUS_METERS
}
