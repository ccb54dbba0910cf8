//! Price-comparison engine.
//!
//! Every function here is a pure read over a catalog snapshot: missing
//! prices, stores, or products yield `None` or are skipped, never errors.

mod cheapest;
mod comparison;
mod geo;

pub use cheapest::{
    calculate_total_savings, find_cheapest_price, find_cheapest_price_with_delivery,
    landed_offer, CheapestPrice, LandedOffer,
};
pub use comparison::{compare_variant, VariantComparison};
pub use geo::{get_nearby_stores, haversine_km, DEFAULT_MAX_DISTANCE_KM, EARTH_RADIUS_KM};
