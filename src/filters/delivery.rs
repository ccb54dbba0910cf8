//! Delivery-only filter.

use super::Filter;
use crate::catalog::Store;

/// Filters to only include stores that deliver.
pub struct DeliveryFilter;

impl DeliveryFilter {
    /// Creates a new delivery filter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for DeliveryFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for DeliveryFilter {
    fn matches(&self, store: &Store) -> bool {
        store.has_delivery
    }

    fn description(&self) -> String {
        "Delivery only".to_string()
    }
}
