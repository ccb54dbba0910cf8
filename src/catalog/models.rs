//! Data models for products, variants, prices, stores, and shopping lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A catalogued product with its purchasable variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Category (free-form)
    pub category: String,
    /// Brand if known
    #[serde(default)]
    pub brand: Option<String>,
    /// Variants in display order
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Looks up a variant by identifier.
    pub fn variant(&self, id: &str) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| v.id == id)
    }
}

/// A specific configuration of a product (size, colour, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    pub name: String,
    /// Free-form specification key/value pairs
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
    /// Prices recorded at different stores
    #[serde(default)]
    pub prices: Vec<Price>,
}

impl ProductVariant {
    /// Records a store's price, replacing any existing price from the same store.
    ///
    /// Returns the replaced price, if there was one. When the variant already
    /// carries duplicates for the store, the first one is replaced and the
    /// rest are dropped.
    pub fn upsert_price(&mut self, price: Price) -> Option<Price> {
        let Some(pos) = self.prices.iter().position(|p| p.store_id == price.store_id) else {
            self.prices.push(price);
            return None;
        };

        let store_id = price.store_id.clone();
        let replaced = std::mem::replace(&mut self.prices[pos], price);

        let mut index = 0;
        self.prices.retain(|p| {
            let keep = index <= pos || p.store_id != store_id;
            index += 1;
            keep
        });

        Some(replaced)
    }

    /// Returns the prices that are currently available.
    pub fn available_prices(&self) -> impl Iterator<Item = &Price> {
        self.prices.iter().filter(|p| p.is_available)
    }
}

/// A price for a variant at one store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub id: String,
    /// Store that offers this price (weak reference)
    pub store_id: String,
    /// Amount paid for one unit
    pub price: f64,
    /// Currency code (USD, EUR, ...)
    pub currency: String,
    /// Unavailable prices never take part in comparisons
    pub is_available: bool,
    pub last_updated: DateTime<Utc>,
    /// Discount percentage already applied to `price`
    #[serde(default)]
    pub discount: Option<f64>,
}

impl Price {
    /// Returns the pre-discount amount when a discount is recorded.
    pub fn original_price(&self) -> Option<f64> {
        self.discount
            .filter(|d| *d > 0.0 && *d < 100.0)
            .map(|d| self.price / (1.0 - d / 100.0))
    }
}

/// Whether a store has a physical location or sells online only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreType {
    Physical,
    Online,
}

impl fmt::Display for StoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreType::Physical => write!(f, "physical"),
            StoreType::Online => write!(f, "online"),
        }
    }
}

impl FromStr for StoreType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "physical" | "store" | "local" => Ok(StoreType::Physical),
            "online" | "web" => Ok(StoreType::Online),
            _ => Err(format!("Unknown store type: {}. Use: physical, online", s)),
        }
    }
}

/// Geographic coordinates in decimal degrees, stored as `[lat, lon]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lat, c.lon]
    }
}

impl FromStr for Coordinates {
    type Err = String;

    /// Parses `"lat,lon"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| format!("Invalid coordinates '{}'. Expected: LAT,LON", s))?;

        let lat: f64 = lat.trim().parse().map_err(|_| format!("Invalid latitude: {}", lat))?;
        let lon: f64 = lon.trim().parse().map_err(|_| format!("Invalid longitude: {}", lon))?;

        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(format!("Coordinates out of range: {}", s));
        }

        Ok(Self { lat, lon })
    }
}

/// Physical location of a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub city: String,
    pub coordinates: Coordinates,
}

/// A store that offers prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub store_type: StoreType,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub has_delivery: bool,
    /// Delivery radius in kilometres
    #[serde(default)]
    pub delivery_radius: Option<f64>,
    /// Flat delivery fee per order
    #[serde(default)]
    pub delivery_fee: Option<f64>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Store {
    /// Delivery fee charged once per order, or 0 without delivery.
    pub fn effective_delivery_fee(&self) -> f64 {
        if self.has_delivery {
            self.delivery_fee.unwrap_or(0.0)
        } else {
            0.0
        }
    }

    pub fn is_online(&self) -> bool {
        self.store_type == StoreType::Online
    }
}

/// How urgently an item is needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// An entry on a shopping list, referencing a product variant by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    pub product_id: String,
    pub variant_id: String,
    pub quantity: u32,
    #[serde(default)]
    pub priority: Priority,
    pub added_at: DateTime<Utc>,
}

/// A named shopping list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<ShoppingListItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
