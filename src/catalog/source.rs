//! Catalog snapshots and the sources they are loaded from.

use super::models::{Product, ShoppingList, Store};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while loading a catalog snapshot.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// In-memory snapshot of everything the comparison engine reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub stores: Vec<Store>,
    #[serde(default)]
    pub shopping_lists: Vec<ShoppingList>,
}

impl Catalog {
    /// Parses a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json)
            .map_err(|source| CatalogError::Parse { origin: "<inline>".to_string(), source })
    }

    /// Looks up a product by identifier.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Finds a shopping list by id, falling back to a case-insensitive name match.
    pub fn shopping_list(&self, id_or_name: &str) -> Option<&ShoppingList> {
        self.shopping_lists.iter().find(|l| l.id == id_or_name).or_else(|| {
            let needle = id_or_name.to_lowercase();
            self.shopping_lists.iter().find(|l| l.name.to_lowercase() == needle)
        })
    }
}

/// Trait for loading catalog snapshots - enables in-memory sources for tests.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Loads the current snapshot.
    async fn load(&self) -> Result<Catalog, CatalogError>;
}

/// Loads a snapshot exported as a JSON file.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        debug!("Loading catalog from: {}", self.path.display());

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Io { path: self.path.clone(), source })?;

        let catalog: Catalog = serde_json::from_str(&content).map_err(|source| {
            CatalogError::Parse { origin: self.path.display().to_string(), source }
        })?;

        info!(
            "Loaded {} products, {} stores, {} shopping lists",
            catalog.products.len(),
            catalog.stores.len(),
            catalog.shopping_lists.len()
        );

        Ok(catalog)
    }
}
