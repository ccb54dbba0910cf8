//! Cheapest-offer selection over a variant's prices.

use crate::catalog::{Price, Store, StoreDirectory};
use serde::Serialize;
use tracing::debug;

/// The lowest available goods price and the store offering it.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheapestPrice<'a> {
    pub price: &'a Price,
    /// `None` when the price references a store missing from the directory
    pub store: Option<&'a Store>,
}

/// An offer priced at its landed cost (goods price plus delivery).
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandedOffer<'a> {
    pub price: &'a Price,
    pub store: Option<&'a Store>,
    /// Fee the store charges per order, 0 without delivery
    pub delivery_fee: f64,
    /// Goods price plus `delivery_fee`
    pub total_price: f64,
}

/// Computes the landed cost of a single price.
///
/// A price whose store cannot be resolved carries no delivery fee.
pub fn landed_offer<'a>(price: &'a Price, stores: &StoreDirectory<'a>) -> LandedOffer<'a> {
    let store = stores.get(&price.store_id);
    if store.is_none() {
        debug!("Price {} references unknown store {}", price.id, price.store_id);
    }

    let delivery_fee = store.map(Store::effective_delivery_fee).unwrap_or(0.0);
    LandedOffer { price, store, delivery_fee, total_price: price.price + delivery_fee }
}

/// Returns the available price with the lowest amount.
///
/// Ties keep the first price encountered. Returns `None` when no price is
/// available.
pub fn find_cheapest_price<'a>(
    prices: &'a [Price],
    stores: &StoreDirectory<'a>,
) -> Option<CheapestPrice<'a>> {
    let mut best: Option<&Price> = None;

    for price in prices.iter().filter(|p| p.is_available) {
        match best {
            Some(current) if price.price >= current.price => {}
            _ => best = Some(price),
        }
    }

    best.map(|price| CheapestPrice { price, store: stores.get(&price.store_id) })
}

/// Returns the available offer with the lowest landed cost.
///
/// Every available price is compared on `price + delivery fee`, so a store
/// with a lower shelf price can lose to one without delivery charges. Ties
/// keep the first offer encountered.
pub fn find_cheapest_price_with_delivery<'a>(
    prices: &'a [Price],
    stores: &StoreDirectory<'a>,
) -> Option<LandedOffer<'a>> {
    let mut best: Option<LandedOffer<'a>> = None;

    for price in prices.iter().filter(|p| p.is_available) {
        let offer = landed_offer(price, stores);
        match best {
            Some(current) if offer.total_price >= current.total_price => {}
            _ => best = Some(offer),
        }
    }

    best
}

/// Returns the aggregate difference between two price lists.
///
/// The lists are summed independently; they need not be the same length.
pub fn calculate_total_savings(original: &[f64], optimized: &[f64]) -> f64 {
    original.iter().sum::<f64>() - optimized.iter().sum::<f64>()
}
