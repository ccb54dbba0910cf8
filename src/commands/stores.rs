//! Store listing command implementation.

use crate::catalog::{CatalogSource, JsonFileSource, Store};
use crate::compare::get_nearby_stores;
use crate::config::Config;
use crate::filters::FilterChainBuilder;
use crate::format::{Formatter, StoreRow};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Lists catalog stores, optionally restricted to those near the user.
pub struct StoresCommand {
    config: Config,
}

impl StoresCommand {
    /// Creates a new stores command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the listing and returns formatted output.
    pub async fn execute(&self) -> Result<String> {
        let source = JsonFileSource::new(&self.config.catalog);
        self.execute_with_source(&source).await
    }

    /// Executes the listing with a provided catalog source (for testing).
    pub async fn execute_with_source(&self, source: &impl CatalogSource) -> Result<String> {
        let catalog = source.load().await.context("Failed to load catalog")?;

        let candidates: Vec<&Store> = match self.config.location {
            Some(location) => {
                debug!(
                    "Limiting to stores within {} km of {},{}",
                    self.config.max_distance_km, location.lat, location.lon
                );
                get_nearby_stores(&catalog.stores, location, self.config.max_distance_km)
            }
            None => catalog.stores.iter().collect(),
        };

        let filter_chain = FilterChainBuilder::new()
            .delivery_only(self.config.delivery_only)
            .store_type(self.config.store_type)
            .build();

        if !filter_chain.is_empty() {
            debug!("Active filters: {:?}", filter_chain.descriptions());
        }

        let stores: Vec<&Store> =
            candidates.into_iter().filter(|s| filter_chain.matches(s)).collect();

        info!("Listing {} of {} stores", stores.len(), catalog.stores.len());

        let rows = StoreRow::from_stores(&stores, self.config.location);
        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_stores(&rows))
    }
}
