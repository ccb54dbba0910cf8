//! Shopping list planning command implementation.

use crate::catalog::{CatalogSource, JsonFileSource, ProductIndex, StoreDirectory};
use crate::config::Config;
use crate::format::{Formatter, PlanReport};
use crate::shopping::{calculate_total, estimate_savings, group_by_store};
use anyhow::{Context, Result};
use tracing::{info, warn};

/// Splits a shopping list across the stores with the best prices.
pub struct ListCommand {
    config: Config,
}

impl ListCommand {
    /// Creates a new list command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the planning and returns formatted output.
    pub async fn execute(&self, list: &str) -> Result<String> {
        let source = JsonFileSource::new(&self.config.catalog);
        self.execute_with_source(&source, list).await
    }

    /// Executes the planning with a provided catalog source (for testing).
    pub async fn execute_with_source(
        &self,
        source: &impl CatalogSource,
        list: &str,
    ) -> Result<String> {
        let catalog = source.load().await.context("Failed to load catalog")?;

        let shopping_list = catalog
            .shopping_list(list)
            .with_context(|| format!("Shopping list '{}' not found in catalog", list))?;

        let products = ProductIndex::new(&catalog.products);
        let stores = StoreDirectory::new(&catalog.stores);

        let plan = group_by_store(&shopping_list.items, &products, &stores);
        if plan.skipped > 0 {
            warn!(
                "{} of {} items on '{}' could not be priced",
                plan.skipped,
                shopping_list.items.len(),
                shopping_list.name
            );
        }

        let total = calculate_total(&shopping_list.items, &products, &stores);
        let savings = estimate_savings(&shopping_list.items, &products, &stores);

        info!(
            "Planned {} items across {} stores for '{}'",
            plan.item_count(),
            plan.groups.len(),
            shopping_list.name
        );

        let report = PlanReport {
            list_name: &shopping_list.name,
            currency: plan.currency().unwrap_or(&self.config.currency),
            plan: &plan,
            total,
            delivery_total: plan.delivery_total(),
            savings,
        };

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_plan(&report))
    }
}
