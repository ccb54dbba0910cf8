//! Catalog data model, lookup tables, and snapshot loading.

pub mod directory;
pub mod models;
pub mod source;

pub use directory::{ProductIndex, StoreDirectory};
pub use models::{
    Coordinates, Location, Price, Priority, Product, ProductVariant, ShoppingList,
    ShoppingListItem, Store, StoreType,
};
pub use source::{Catalog, CatalogError, CatalogSource, JsonFileSource};
