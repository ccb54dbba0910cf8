//! Side-by-side comparison of every offer for one variant.

use super::cheapest::{landed_offer, LandedOffer};
use crate::catalog::{Product, ProductVariant, StoreDirectory};
use serde::Serialize;

/// Available offers for a variant, sorted by the ranking basis.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantComparison<'a> {
    pub product: &'a Product,
    pub variant: &'a ProductVariant,
    /// Offers sorted cheapest first; equal prices keep catalog order
    pub offers: Vec<LandedOffer<'a>>,
    /// Whether offers are ranked by landed cost rather than goods price
    pub includes_delivery: bool,
}

/// Builds a comparison of all available offers for a variant.
///
/// With `include_delivery` off, offers are ranked on the shelf price alone.
/// Each offer still carries its store's delivery fee and landed total.
pub fn compare_variant<'a>(
    product: &'a Product,
    variant: &'a ProductVariant,
    stores: &StoreDirectory<'a>,
    include_delivery: bool,
) -> VariantComparison<'a> {
    let mut offers: Vec<LandedOffer<'a>> =
        variant.available_prices().map(|price| landed_offer(price, stores)).collect();

    offers.sort_by(|a, b| {
        ranked_price(a, include_delivery).total_cmp(&ranked_price(b, include_delivery))
    });

    VariantComparison { product, variant, offers, includes_delivery: include_delivery }
}

fn ranked_price(offer: &LandedOffer, include_delivery: bool) -> f64 {
    if include_delivery {
        offer.total_price
    } else {
        offer.price.price
    }
}

impl<'a> VariantComparison<'a> {
    /// Price an offer is ranked by: landed total or goods price.
    pub fn ranked_price(&self, offer: &LandedOffer) -> f64 {
        ranked_price(offer, self.includes_delivery)
    }

    /// Returns the cheapest offer.
    pub fn cheapest(&self) -> Option<&LandedOffer<'a>> {
        self.offers.first()
    }

    /// Returns the most expensive offer.
    pub fn most_expensive(&self) -> Option<&LandedOffer<'a>> {
        self.offers.last()
    }

    /// Amount saved by picking the cheapest offer over the most expensive.
    pub fn max_savings(&self) -> Option<f64> {
        match (self.cheapest(), self.most_expensive()) {
            (Some(cheap), Some(expensive)) => {
                Some(self.ranked_price(expensive) - self.ranked_price(cheap))
            }
            _ => None,
        }
    }

    /// Savings as a percentage of the most expensive offer.
    pub fn max_savings_percent(&self) -> Option<f64> {
        let expensive = self.ranked_price(self.most_expensive()?);
        if expensive > 0.0 {
            self.max_savings().map(|savings| savings / expensive * 100.0)
        } else {
            None
        }
    }

    /// Total number of offers compared.
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}
