//! Grouping shopping-list items by the store with the best landed price.

use crate::catalog::{
    Price, Product, ProductIndex, ProductVariant, ShoppingListItem, Store, StoreDirectory,
};
use crate::compare::{calculate_total_savings, find_cheapest_price_with_delivery, landed_offer};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// A shopping-list item resolved against the catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedItem<'a> {
    pub item: &'a ShoppingListItem,
    pub product: &'a Product,
    pub variant: &'a ProductVariant,
    /// Winning price for this variant
    pub price: &'a Price,
    /// Goods price for one unit
    pub unit_price: f64,
    /// Goods price plus the store's delivery fee, used to pick the store
    pub landed_unit_price: f64,
}

impl ResolvedItem<'_> {
    /// Goods cost of the line (unit price times quantity).
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.item.quantity)
    }
}

/// Items bought from one store.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreGroup<'a> {
    pub store_id: String,
    /// `None` when the winning price points at an unknown store
    pub store: Option<&'a Store>,
    pub items: Vec<ResolvedItem<'a>>,
    /// Charged once for the whole group
    pub delivery_fee: f64,
}

impl StoreGroup<'_> {
    /// Goods cost of every item in the group.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(ResolvedItem::line_total).sum()
    }

    /// Subtotal plus delivery.
    pub fn total(&self) -> f64 {
        self.subtotal() + self.delivery_fee
    }

    /// Display name, falling back to the store id.
    pub fn store_name(&self) -> &str {
        self.store.map(|s| s.name.as_str()).unwrap_or(&self.store_id)
    }
}

/// A shopping list split into per-store groups.
///
/// Groups are kept in the order their store first won an item.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingPlan<'a> {
    pub groups: Vec<StoreGroup<'a>>,
    /// Items dropped because they did not resolve or had no available price
    pub skipped: usize,
}

impl<'a> ShoppingPlan<'a> {
    /// Looks up the group for a store.
    pub fn get(&self, store_id: &str) -> Option<&StoreGroup<'a>> {
        self.groups.iter().find(|g| g.store_id == store_id)
    }

    /// Grand total including one delivery fee per store.
    pub fn total(&self) -> f64 {
        self.groups.iter().map(StoreGroup::total).sum()
    }

    /// Total delivery charges across all stores.
    pub fn delivery_total(&self) -> f64 {
        self.groups.iter().map(|g| g.delivery_fee).sum()
    }

    /// Number of resolved items.
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Currency of the first resolved price, used to display totals.
    pub fn currency(&self) -> Option<&'a str> {
        self.groups
            .iter()
            .flat_map(|g| g.items.iter())
            .map(|i| i.price)
            .next()
            .map(|p| p.currency.as_str())
    }
}

fn resolve_item<'a>(
    item: &'a ShoppingListItem,
    products: &ProductIndex<'a>,
    stores: &StoreDirectory<'a>,
) -> Option<(ResolvedItem<'a>, Option<&'a Store>)> {
    let (product, variant) = products.resolve(item)?;

    let Some(offer) = find_cheapest_price_with_delivery(&variant.prices, stores) else {
        debug!("Dropping item: no available price for variant {}", variant.id);
        return None;
    };

    let resolved = ResolvedItem {
        item,
        product,
        variant,
        price: offer.price,
        unit_price: offer.price.price,
        landed_unit_price: offer.total_price,
    };

    Some((resolved, offer.store))
}

/// Groups list items by the store offering each item's lowest landed cost.
///
/// Items whose product or variant is missing, or that have no available
/// price, are skipped.
pub fn group_by_store<'a>(
    items: &'a [ShoppingListItem],
    products: &ProductIndex<'a>,
    stores: &StoreDirectory<'a>,
) -> ShoppingPlan<'a> {
    let mut plan = ShoppingPlan::default();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();

    for item in items {
        let Some((resolved, store)) = resolve_item(item, products, stores) else {
            plan.skipped += 1;
            continue;
        };

        let store_id = resolved.price.store_id.as_str();
        let index = *positions.entry(store_id).or_insert_with(|| {
            plan.groups.push(StoreGroup {
                store_id: store_id.to_string(),
                store,
                items: Vec::new(),
                delivery_fee: store.map(Store::effective_delivery_fee).unwrap_or(0.0),
            });
            plan.groups.len() - 1
        });

        plan.groups[index].items.push(resolved);
    }

    plan
}

/// Total cost of a list: goods for every resolvable item plus one delivery
/// fee per winning store.
///
/// Always equal to `group_by_store(..).total()`.
pub fn calculate_total<'a>(
    items: &'a [ShoppingListItem],
    products: &ProductIndex<'a>,
    stores: &StoreDirectory<'a>,
) -> f64 {
    let mut charged: HashSet<&str> = HashSet::new();
    let mut total = 0.0;

    for item in items {
        let Some((resolved, store)) = resolve_item(item, products, stores) else {
            continue;
        };

        total += resolved.line_total();

        if charged.insert(resolved.price.store_id.as_str()) {
            total += store.map(Store::effective_delivery_fee).unwrap_or(0.0);
        }
    }

    total
}

/// Savings of the chosen plan over buying each item on its own order from
/// the store with the most expensive landed cost for that line.
///
/// Both sides include delivery: the baseline pays each line's goods plus that
/// store's fee, the plan pays `calculate_total`. Never negative.
pub fn estimate_savings<'a>(
    items: &'a [ShoppingListItem],
    products: &ProductIndex<'a>,
    stores: &StoreDirectory<'a>,
) -> f64 {
    let mut original = Vec::new();

    for item in items {
        let Some((resolved, _)) = resolve_item(item, products, stores) else {
            continue;
        };

        let quantity = f64::from(item.quantity);
        let worst = resolved
            .variant
            .available_prices()
            .map(|p| landed_offer(p, stores))
            .map(|offer| offer.price.price * quantity + offer.delivery_fee)
            .fold(0.0, f64::max);

        original.push(worst);
    }

    calculate_total_savings(&original, &[calculate_total(items, products, stores)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Priority, StoreType};
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn make_price(store_id: &str, price: f64) -> Price {
        Price {
            id: format!("price-{}-{}", store_id, price),
            store_id: store_id.to_string(),
            price,
            currency: "EUR".to_string(),
            is_available: true,
            last_updated: Utc::now(),
            discount: None,
        }
    }

    fn make_store(id: &str, delivery_fee: Option<f64>) -> Store {
        Store {
            id: id.to_string(),
            name: format!("Store {}", id.to_uppercase()),
            store_type: StoreType::Online,
            location: None,
            has_delivery: delivery_fee.is_some(),
            delivery_radius: None,
            delivery_fee,
            website: None,
            phone: None,
        }
    }

    fn make_product(id: &str, prices: Vec<Price>) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            category: "Groceries".to_string(),
            brand: None,
            variants: vec![ProductVariant {
                id: format!("{}-v", id),
                name: "Default".to_string(),
                specifications: BTreeMap::new(),
                prices,
            }],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn make_item(product_id: &str, quantity: u32) -> ShoppingListItem {
        ShoppingListItem {
            product_id: product_id.to_string(),
            variant_id: format!("{}-v", product_id),
            quantity,
            priority: Priority::Medium,
            added_at: Utc::now(),
        }
    }

    fn fixture() -> (Vec<Product>, Vec<Store>) {
        let stores =
            vec![make_store("a", Some(4.0)), make_store("b", None), make_store("c", Some(2.0))];
        let products = vec![
            // a wins on landed cost: 3 + 4 = 7 < 8
            make_product("milk", vec![make_price("a", 3.0), make_price("b", 8.0)]),
            // b wins: 5 < 4 + 4.5
            make_product("bread", vec![make_price("a", 4.5), make_price("b", 5.0)]),
            // c wins: 2 + 2 = 4 < 1 + 4
            make_product("eggs", vec![make_price("a", 1.0), make_price("c", 2.0)]),
            make_product("jam", vec![make_price("a", 2.0), make_price("b", 9.0)]),
        ];
        (products, stores)
    }

    #[test]
    fn test_group_by_store() {
        let (products, stores) = fixture();
        let products_idx = ProductIndex::new(&products);
        let directory = StoreDirectory::new(&stores);
        let items = vec![
            make_item("milk", 2),
            make_item("bread", 1),
            make_item("eggs", 12),
            make_item("jam", 1),
        ];

        let plan = group_by_store(&items, &products_idx, &directory);
        let order: Vec<_> = plan.groups.iter().map(|g| g.store_id.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
        assert_eq!(plan.item_count(), 4);
        assert_eq!(plan.skipped, 0);

        let a = plan.get("a").unwrap();
        assert_eq!(a.items.len(), 2);
        assert_eq!(a.delivery_fee, 4.0);
        assert_eq!(a.subtotal(), 3.0 * 2.0 + 2.0);
        assert_eq!(a.total(), 12.0);
        assert_eq!(a.items[0].landed_unit_price, 7.0);

        let b = plan.get("b").unwrap();
        assert_eq!(b.delivery_fee, 0.0);
        assert_eq!(b.total(), 5.0);

        let c = plan.get("c").unwrap();
        assert_eq!(c.store_name(), "Store C");
        assert_eq!(c.total(), 2.0 * 12.0 + 2.0);

        assert_eq!(plan.currency(), Some("EUR"));
        assert_eq!(plan.delivery_total(), 6.0);
        assert_eq!(plan.total(), 12.0 + 5.0 + 26.0);
    }

    #[test]
    fn test_group_by_store_skips_unresolvable() {
        let (mut products, stores) = fixture();
        products.push(make_product("sold-out", vec![Price {
            is_available: false,
            ..make_price("a", 1.0)
        }]));
        let products_idx = ProductIndex::new(&products);
        let directory = StoreDirectory::new(&stores);

        let mut wrong_variant = make_item("milk", 1);
        wrong_variant.variant_id = "deleted".to_string();
        let items = vec![
            make_item("deleted-product", 1),
            wrong_variant,
            make_item("sold-out", 1),
            make_item("jam", 1),
        ];

        let plan = group_by_store(&items, &products_idx, &directory);
        assert_eq!(plan.skipped, 3);
        assert_eq!(plan.item_count(), 1);
        assert_eq!(calculate_total(&items, &products_idx, &directory), 2.0 + 4.0);
    }

    #[test]
    fn test_group_with_dangling_store() {
        let products = vec![make_product("milk", vec![make_price("gone", 3.0)])];
        let products_idx = ProductIndex::new(&products);
        let directory = StoreDirectory::new(&[]);
        let items = vec![make_item("milk", 2)];

        let plan = group_by_store(&items, &products_idx, &directory);
        let group = plan.get("gone").unwrap();
        assert!(group.store.is_none());
        assert_eq!(group.store_name(), "gone");
        assert_eq!(group.delivery_fee, 0.0);
        assert_eq!(plan.total(), 6.0);
    }

    #[test]
    fn test_calculate_total_matches_plan() {
        let (products, stores) = fixture();
        let products_idx = ProductIndex::new(&products);
        let directory = StoreDirectory::new(&stores);
        let items = vec![
            make_item("milk", 3),
            make_item("jam", 2),
            make_item("eggs", 6),
            make_item("bread", 4),
            make_item("milk", 1),
        ];

        let plan = group_by_store(&items, &products_idx, &directory);
        let by_groups: f64 = plan.groups.iter().map(|g| g.subtotal() + g.delivery_fee).sum();
        let total = calculate_total(&items, &products_idx, &directory);

        assert!((total - by_groups).abs() < 1e-9);
        assert!((total - plan.total()).abs() < 1e-9);
    }

    #[test]
    fn test_delivery_counted_once_per_store() {
        let stores = vec![make_store("a", Some(5.0))];
        let products = vec![
            make_product("x", vec![make_price("a", 1.0)]),
            make_product("y", vec![make_price("a", 2.0)]),
        ];
        let products_idx = ProductIndex::new(&products);
        let directory = StoreDirectory::new(&stores);
        let items = vec![make_item("x", 3), make_item("y", 2)];

        assert_eq!(calculate_total(&items, &products_idx, &directory), 3.0 + 4.0 + 5.0);
    }

    #[test]
    fn test_empty_list() {
        let (products, stores) = fixture();
        let products_idx = ProductIndex::new(&products);
        let directory = StoreDirectory::new(&stores);

        let plan = group_by_store(&[], &products_idx, &directory);
        assert!(plan.is_empty());
        assert!(plan.currency().is_none());
        assert_eq!(plan.total(), 0.0);
        assert_eq!(calculate_total(&[], &products_idx, &directory), 0.0);
    }

    #[test]
    fn test_estimate_savings() {
        let (products, stores) = fixture();
        let products_idx = ProductIndex::new(&products);
        let directory = StoreDirectory::new(&stores);
        let items = vec![make_item("milk", 2), make_item("bread", 1)];

        // worst lines: milk b 8 * 2 = 16 vs a 3 * 2 + 4 = 10; bread a 4.5 + 4 = 8.5 vs b 5
        // plan: a (6 + 4) + b 5 = 15
        let savings = estimate_savings(&items, &products_idx, &directory);
        assert!((savings - (16.0 + 8.5 - 15.0)).abs() < 1e-9);
    }

    #[test]
    fn test_estimate_savings_counts_delivery_paid() {
        // a: 1 + 4 delivery, b: 6 with no delivery; the plan picks a for 5
        let stores = vec![make_store("a", Some(4.0)), make_store("b", None)];
        let products = vec![make_product("milk", vec![make_price("a", 1.0), make_price("b", 6.0)])];
        let products_idx = ProductIndex::new(&products);
        let directory = StoreDirectory::new(&stores);
        let items = vec![make_item("milk", 1)];

        assert_eq!(calculate_total(&items, &products_idx, &directory), 5.0);
        assert_eq!(estimate_savings(&items, &products_idx, &directory), 1.0);
    }

    #[test]
    fn test_estimate_savings_single_store_is_zero() {
        let stores = vec![make_store("a", Some(5.0))];
        let products = vec![make_product("x", vec![make_price("a", 2.0)])];
        let products_idx = ProductIndex::new(&products);
        let directory = StoreDirectory::new(&stores);
        let items = vec![make_item("x", 3)];

        assert_eq!(estimate_savings(&items, &products_idx, &directory), 0.0);
    }

    #[test]
    fn test_estimate_savings_never_negative() {
        let (products, stores) = fixture();
        let products_idx = ProductIndex::new(&products);
        let directory = StoreDirectory::new(&stores);
        let items = vec![
            make_item("milk", 3),
            make_item("jam", 2),
            make_item("eggs", 6),
            make_item("bread", 4),
        ];

        assert!(estimate_savings(&items, &products_idx, &directory) >= 0.0);
        assert_eq!(estimate_savings(&[], &products_idx, &directory), 0.0);
    }

    #[test]
    fn test_grouping_is_deterministic() {
        let (products, stores) = fixture();
        let products_idx = ProductIndex::new(&products);
        let directory = StoreDirectory::new(&stores);
        let items = vec![make_item("eggs", 1), make_item("bread", 1), make_item("milk", 1)];

        let first: Vec<_> = group_by_store(&items, &products_idx, &directory)
            .groups
            .iter()
            .map(|g| g.store_id.clone())
            .collect();
        let second: Vec<_> = group_by_store(&items, &products_idx, &directory)
            .groups
            .iter()
            .map(|g| g.store_id.clone())
            .collect();
        assert_eq!(first, vec!["c", "b", "a"]);
        assert_eq!(first, second);
    }
}
