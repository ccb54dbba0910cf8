//! Price comparison command implementation.

use crate::catalog::{CatalogSource, JsonFileSource, StoreDirectory};
use crate::compare::{compare_variant, VariantComparison};
use crate::config::Config;
use crate::format::Formatter;
use anyhow::{bail, Context, Result};
use tracing::info;

/// Compares prices for one product across stores.
pub struct CompareCommand {
    config: Config,
}

impl CompareCommand {
    /// Creates a new compare command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the comparison and returns formatted output.
    pub async fn execute(&self, product_id: &str, variant_id: Option<&str>) -> Result<String> {
        let source = JsonFileSource::new(&self.config.catalog);
        self.execute_with_source(&source, product_id, variant_id).await
    }

    /// Executes the comparison with a provided catalog source (for testing).
    pub async fn execute_with_source(
        &self,
        source: &impl CatalogSource,
        product_id: &str,
        variant_id: Option<&str>,
    ) -> Result<String> {
        let catalog = source.load().await.context("Failed to load catalog")?;
        let stores = StoreDirectory::new(&catalog.stores);

        let product = catalog
            .product(product_id)
            .with_context(|| format!("Product {} not found in catalog", product_id))?;

        let variants: Vec<_> = match variant_id {
            Some(id) => vec![product
                .variant(id)
                .with_context(|| format!("Variant {} not found on product {}", id, product.name))?],
            None => product.variants.iter().collect(),
        };

        if variants.is_empty() {
            bail!("Product {} has no variants to compare", product.name);
        }

        let comparisons: Vec<VariantComparison> = variants
            .into_iter()
            .map(|v| compare_variant(product, v, &stores, self.config.include_delivery))
            .collect();

        let offers: usize = comparisons.iter().map(VariantComparison::len).sum();
        info!(
            "Compared {} offers across {} variants of {}",
            offers,
            comparisons.len(),
            product.name
        );

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_comparisons(&comparisons))
    }
}
