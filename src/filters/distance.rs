//! Distance-from-user filter.

use super::Filter;
use crate::catalog::{Coordinates, Store};
use crate::compare::haversine_km;

/// Keeps stores reachable from a point: online stores and physical stores
/// within a radius.
pub struct DistanceFilter {
    origin: Coordinates,
    max_distance_km: f64,
}

impl DistanceFilter {
    /// Creates a new distance filter.
    pub fn new(origin: Coordinates, max_distance_km: f64) -> Self {
        Self { origin, max_distance_km }
    }

    /// Distance from the origin to a store, if it has a location.
    pub fn distance_to(&self, store: &Store) -> Option<f64> {
        store.location.as_ref().map(|l| haversine_km(self.origin, l.coordinates))
    }
}

impl Filter for DistanceFilter {
    fn matches(&self, store: &Store) -> bool {
        if store.is_online() {
            return true;
        }

        // Physical stores without a location can't be placed
        let Some(distance) = self.distance_to(store) else {
            return false;
        };

        distance <= self.max_distance_km
    }

    fn description(&self) -> String {
        format!(
            "Within {:.0} km of {:.4},{:.4}",
            self.max_distance_km, self.origin.lat, self.origin.lon
        )
    }
}
