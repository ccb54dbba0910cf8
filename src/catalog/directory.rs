//! Identifier lookup tables for resolving weak references.

use super::models::{Product, ProductVariant, ShoppingListItem, Store};
use std::collections::HashMap;
use tracing::debug;

/// Store lookup by identifier.
#[derive(Debug, Clone, Default)]
pub struct StoreDirectory<'a> {
    stores: HashMap<&'a str, &'a Store>,
}

impl<'a> StoreDirectory<'a> {
    /// Builds a directory; the first store with a given id wins.
    pub fn new(stores: &'a [Store]) -> Self {
        let mut map = HashMap::with_capacity(stores.len());
        for store in stores {
            map.entry(store.id.as_str()).or_insert(store);
        }
        Self { stores: map }
    }

    pub fn get(&self, id: &str) -> Option<&'a Store> {
        self.stores.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

/// Product lookup by identifier.
#[derive(Debug, Clone, Default)]
pub struct ProductIndex<'a> {
    products: HashMap<&'a str, &'a Product>,
}

impl<'a> ProductIndex<'a> {
    /// Builds an index; the first product with a given id wins.
    pub fn new(products: &'a [Product]) -> Self {
        let mut map = HashMap::with_capacity(products.len());
        for product in products {
            map.entry(product.id.as_str()).or_insert(product);
        }
        Self { products: map }
    }

    pub fn get(&self, id: &str) -> Option<&'a Product> {
        self.products.get(id).copied()
    }

    /// Resolves a shopping-list item to its product and variant.
    ///
    /// Returns `None` when either reference no longer exists.
    pub fn resolve(&self, item: &ShoppingListItem) -> Option<(&'a Product, &'a ProductVariant)> {
        let Some(product) = self.get(&item.product_id) else {
            debug!("Dropping item: product {} not in catalog", item.product_id);
            return None;
        };

        let Some(variant) = product.variant(&item.variant_id) else {
            debug!("Dropping item: variant {} not on product {}", item.variant_id, product.id);
            return None;
        };

        Some((product, variant))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
