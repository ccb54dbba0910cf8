//! Store filtering system with composable filters.

pub mod delivery;
pub mod distance;
pub mod kind;

use crate::catalog::{Store, StoreType};

pub use delivery::DeliveryFilter;
pub use distance::DistanceFilter;
pub use kind::StoreTypeFilter;

/// Trait for filtering stores.
pub trait Filter: Send + Sync {
    /// Returns true if the store passes the filter.
    fn matches(&self, store: &Store) -> bool;

    /// Returns a description of this filter.
    fn description(&self) -> String;
}

/// A chain of filters that must all pass.
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    /// Creates an empty filter chain.
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// Adds a filter to the chain.
    pub fn add(&mut self, filter: impl Filter + 'static) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Checks if a store passes all filters.
    pub fn matches(&self, store: &Store) -> bool {
        self.filters.iter().all(|f| f.matches(store))
    }

    /// Filters a store directory, keeping catalog order.
    pub fn apply<'a>(&self, stores: &'a [Store]) -> Vec<&'a Store> {
        stores.iter().filter(|s| self.matches(s)).collect()
    }

    /// Returns true if no filters are configured.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns the number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns descriptions of all filters.
    pub fn descriptions(&self) -> Vec<String> {
        self.filters.iter().map(|f| f.description()).collect()
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a FilterChain from configuration.
pub struct FilterChainBuilder {
    chain: FilterChain,
}

impl FilterChainBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self { chain: FilterChain::new() }
    }

    /// Adds a delivery-only filter.
    pub fn delivery_only(mut self, enabled: bool) -> Self {
        if enabled {
            self.chain.add(DeliveryFilter::new());
        }
        self
    }

    /// Adds a store type filter.
    pub fn store_type(mut self, store_type: Option<StoreType>) -> Self {
        if let Some(store_type) = store_type {
            self.chain.add(StoreTypeFilter::new(store_type));
        }
        self
    }

    /// Builds the filter chain.
    pub fn build(self) -> FilterChain {
        self.chain
    }
}

impl Default for FilterChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}
