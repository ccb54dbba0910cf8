//! pricewise - Compare product prices across stores from a catalog snapshot
//!
//! Finds the cheapest offer per product variant (optionally including
//! delivery), splits shopping lists across stores, and filters stores
//! by distance from the user.

pub mod catalog;
pub mod commands;
pub mod compare;
pub mod config;
pub mod currency;
pub mod filters;
pub mod format;
pub mod shopping;

pub use catalog::{Catalog, Coordinates, Price, Product, ProductVariant, Store, StoreType};
pub use config::Config;
pub use currency::format_price;
