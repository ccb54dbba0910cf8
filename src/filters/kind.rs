//! Store type filter.

use super::Filter;
use crate::catalog::{Store, StoreType};

/// Filters stores by type (physical or online).
pub struct StoreTypeFilter {
    store_type: StoreType,
}

impl StoreTypeFilter {
    pub fn new(store_type: StoreType) -> Self {
        Self { store_type }
    }
}

impl Filter for StoreTypeFilter {
    fn matches(&self, store: &Store) -> bool {
        store.store_type == self.store_type
    }

    fn description(&self) -> String {
        format!("Type: {}", self.store_type)
    }
}
