//! Great-circle distance and nearby-store selection.

use crate::catalog::{Coordinates, Store};
use crate::filters::{DistanceFilter, Filter};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default search radius for nearby stores.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 50.0;

/// Haversine distance between two points in kilometres.
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Returns the stores reachable from `user_location`.
///
/// Online stores always qualify. Physical stores qualify only when they have
/// a location within `max_distance_km`.
pub fn get_nearby_stores(
    stores: &[Store],
    user_location: Coordinates,
    max_distance_km: f64,
) -> Vec<&Store> {
    let filter = DistanceFilter::new(user_location, max_distance_km);
    stores.iter().filter(|s| filter.matches(s)).collect()
}
