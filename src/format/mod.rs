//! Output formatting for comparisons, shopping plans, and stores (table, JSON, markdown, CSV).

use crate::catalog::{Coordinates, Store};
use crate::compare::{haversine_km, VariantComparison};
use crate::config::OutputFormat;
use crate::currency::format_price;
use crate::shopping::ShoppingPlan;
use serde::Serialize;

/// Shopping plan plus the figures derived from it, as rendered to the user.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport<'a> {
    pub list_name: &'a str,
    pub currency: &'a str,
    pub plan: &'a ShoppingPlan<'a>,
    pub total: f64,
    pub delivery_total: f64,
    pub savings: f64,
}

/// A store with its distance from the user, if known.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRow<'a> {
    #[serde(flatten)]
    pub store: &'a Store,
    pub distance_km: Option<f64>,
}

impl<'a> StoreRow<'a> {
    /// Pairs each store with its distance from `origin`.
    pub fn from_stores(stores: &[&'a Store], origin: Option<Coordinates>) -> Vec<Self> {
        stores
            .iter()
            .map(|&store| StoreRow {
                store,
                distance_km: origin
                    .zip(store.location.as_ref())
                    .map(|(o, l)| haversine_km(o, l.coordinates)),
            })
            .collect()
    }
}

/// Formats results for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a per-variant price comparison.
    pub fn format_comparison(&self, comparison: &VariantComparison) -> String {
        match self.format {
            OutputFormat::Json => Self::json(comparison, "{}"),
            OutputFormat::Table => self.table_comparison(comparison),
            OutputFormat::Markdown => self.markdown_comparison(comparison),
            OutputFormat::Csv => self.csv_comparison(comparison),
        }
    }

    /// Formats comparisons for several variants of one product.
    pub fn format_comparisons(&self, comparisons: &[VariantComparison]) -> String {
        match self.format {
            OutputFormat::Json => Self::json(comparisons, "[]"),
            OutputFormat::Csv => {
                let mut lines = Vec::new();
                for (i, comparison) in comparisons.iter().enumerate() {
                    let csv = self.csv_comparison(comparison);
                    // Keep a single header row
                    lines.extend(csv.lines().skip(usize::from(i > 0)).map(str::to_string));
                }
                lines.join("\n")
            }
            _ => comparisons
                .iter()
                .map(|c| self.format_comparison(c))
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }

    /// Formats a shopping plan grouped by store.
    pub fn format_plan(&self, report: &PlanReport) -> String {
        match self.format {
            OutputFormat::Json => Self::json(report, "{}"),
            OutputFormat::Table => self.table_plan(report),
            OutputFormat::Markdown => self.markdown_plan(report),
            OutputFormat::Csv => self.csv_plan(report),
        }
    }

    /// Formats a list of stores.
    pub fn format_stores(&self, rows: &[StoreRow]) -> String {
        if rows.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => Self::csv_store_header(),
                _ => "No stores found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => Self::json(rows, "[]"),
            OutputFormat::Table => self.table_stores(rows),
            OutputFormat::Markdown => self.markdown_stores(rows),
            OutputFormat::Csv => self.csv_stores(rows),
        }
    }

    // JSON formatting

    fn json<T: Serialize + ?Sized>(value: &T, fallback: &str) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| fallback.to_string())
    }

    // Table formatting

    fn table_comparison(&self, data: &VariantComparison) -> String {
        let mut lines = Vec::new();

        lines.push(format!("{} - {}", data.product.name, data.variant.name));
        if let Some(brand) = &data.product.brand {
            lines.push(format!("Brand:   {}", brand));
        }
        for (key, value) in &data.variant.specifications {
            lines.push(format!("{}: {}", key, value));
        }
        lines.push(String::new());

        if data.is_empty() {
            lines.push("No available prices.".to_string());
            return lines.join("\n");
        }

        let basis =
            if data.includes_delivery { "total incl. delivery" } else { "price, goods only" };
        lines.push(format!(
            "{:<3} {:<24} {:>12} {:>10} {:>12}",
            "#", "Store", "Price", "Delivery", "Total"
        ));
        lines.push(format!("{:-<3} {:-<24} {:-<12} {:-<10} {:-<12}", "", "", "", "", ""));

        for (i, offer) in data.offers.iter().enumerate() {
            let currency = &offer.price.currency;
            let store = offer.store.map(|s| s.name.as_str()).unwrap_or(&offer.price.store_id);
            let marker = if i == 0 { "*" } else { "" };

            lines.push(format!(
                "{:<3} {:<24} {:>12} {:>10} {:>12}",
                format!("{}{}", i + 1, marker),
                Self::truncate(store, 24),
                format_price(offer.price.price, currency),
                format_price(offer.delivery_fee, currency),
                format_price(offer.total_price, currency)
            ));
        }

        lines.push(String::new());
        lines.push(format!("Ranked by {}", basis));

        if let (Some(cheapest), Some(savings), Some(pct)) =
            (data.cheapest(), data.max_savings(), data.max_savings_percent())
        {
            if savings > 0.0 {
                lines.push(format!(
                    "Max savings: {} ({:.0}%)",
                    format_price(savings, &cheapest.price.currency),
                    pct
                ));
            }
        }

        lines.join("\n")
    }

    fn table_plan(&self, report: &PlanReport) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Shopping list: {}", report.list_name));
        lines.push("=".repeat(72));

        if report.plan.is_empty() {
            lines.push("No items could be priced.".to_string());
        }

        for group in &report.plan.groups {
            lines.push(String::new());
            lines.push(format!("{} ({} items)", group.store_name(), group.items.len()));
            lines.push("-".repeat(72));

            for item in &group.items {
                let currency = &item.price.currency;
                lines.push(format!(
                    "  {:<36} {:>4} x {:>10} = {:>12}  [{}]",
                    Self::truncate(&format!("{} ({})", item.product.name, item.variant.name), 36),
                    item.item.quantity,
                    format_price(item.unit_price, currency),
                    format_price(item.line_total(), currency),
                    item.item.priority
                ));
            }

            if group.delivery_fee > 0.0 {
                lines.push(format!(
                    "  {:<55} {:>12}",
                    "Delivery",
                    format_price(group.delivery_fee, report.currency)
                ));
            }
            lines.push(format!(
                "  {:<55} {:>12}",
                "Store total",
                format_price(group.total(), report.currency)
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total:    {}", format_price(report.total, report.currency)));
        if report.delivery_total > 0.0 {
            lines.push(format!(
                "Delivery: {}",
                format_price(report.delivery_total, report.currency)
            ));
        }
        if report.savings > 0.0 {
            lines.push(format!("Savings:  {}", format_price(report.savings, report.currency)));
        }
        if report.plan.skipped > 0 {
            lines.push(format!("Skipped:  {} items without an available price", report.plan.skipped));
        }

        lines.join("\n")
    }

    fn table_stores(&self, rows: &[StoreRow]) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "{:<12} {:<24} {:<9} {:<16} {:>10} {:>9}",
            "ID", "Name", "Type", "City", "Delivery", "Distance"
        ));
        lines.push(format!("{:-<12} {:-<24} {:-<9} {:-<16} {:-<10} {:-<9}", "", "", "", "", "", ""));

        for row in rows {
            let store = row.store;
            let city = store.location.as_ref().map(|l| l.city.as_str()).unwrap_or("-");
            let delivery = match (store.has_delivery, store.delivery_fee) {
                (true, Some(fee)) => format!("{:.2}", fee),
                (true, None) => "free".to_string(),
                (false, _) => "no".to_string(),
            };
            let distance =
                row.distance_km.map(|d| format!("{:.1} km", d)).unwrap_or_else(|| "-".to_string());

            lines.push(format!(
                "{:<12} {:<24} {:<9} {:<16} {:>10} {:>9}",
                Self::truncate(&store.id, 12),
                Self::truncate(&store.name, 24),
                store.store_type,
                Self::truncate(city, 16),
                delivery,
                distance
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} stores", rows.len()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_comparison(&self, data: &VariantComparison) -> String {
        let mut lines = Vec::new();

        lines.push(format!("## {} - {}", data.product.name, data.variant.name));
        lines.push(String::new());

        if data.is_empty() {
            lines.push("*No available prices.*".to_string());
            return lines.join("\n");
        }

        lines.push("| Store | Price | Delivery | Total |".to_string());
        lines.push("|-------|-------|----------|-------|".to_string());

        for offer in &data.offers {
            let currency = &offer.price.currency;
            let store = offer.store.map(|s| s.name.as_str()).unwrap_or(&offer.price.store_id);
            lines.push(format!(
                "| {} | {} | {} | {} |",
                store,
                format_price(offer.price.price, currency),
                format_price(offer.delivery_fee, currency),
                format_price(offer.total_price, currency)
            ));
        }

        if let Some(cheapest) = data.cheapest() {
            let store = cheapest.store.map(|s| s.name.as_str()).unwrap_or(&cheapest.price.store_id);
            lines.push(String::new());
            lines.push(format!(
                "**Best:** {} at {}",
                store,
                format_price(data.ranked_price(cheapest), &cheapest.price.currency)
            ));
        }

        lines.join("\n")
    }

    fn markdown_plan(&self, report: &PlanReport) -> String {
        let mut lines = Vec::new();

        lines.push(format!("## {}", report.list_name));

        for group in &report.plan.groups {
            lines.push(String::new());
            lines.push(format!("### {}", group.store_name()));
            lines.push(String::new());
            lines.push("| Item | Qty | Unit | Line total |".to_string());
            lines.push("|------|-----|------|------------|".to_string());

            for item in &group.items {
                let currency = &item.price.currency;
                lines.push(format!(
                    "| {} ({}) | {} | {} | {} |",
                    item.product.name,
                    item.variant.name,
                    item.item.quantity,
                    format_price(item.unit_price, currency),
                    format_price(item.line_total(), currency)
                ));
            }

            lines.push(String::new());
            if group.delivery_fee > 0.0 {
                lines.push(format!(
                    "- Delivery: {}",
                    format_price(group.delivery_fee, report.currency)
                ));
            }
            lines.push(format!("- Store total: {}", format_price(group.total(), report.currency)));
        }

        lines.push(String::new());
        lines.push(format!("**Total:** {}", format_price(report.total, report.currency)));
        if report.savings > 0.0 {
            lines.push(format!(
                "*Saving {} against the most expensive stores*",
                format_price(report.savings, report.currency)
            ));
        }

        lines.join("\n")
    }

    fn markdown_stores(&self, rows: &[StoreRow]) -> String {
        let mut lines = Vec::new();

        lines.push("| Store | Type | City | Delivery | Distance |".to_string());
        lines.push("|-------|------|------|----------|----------|".to_string());

        for row in rows {
            let store = row.store;
            let name = match &store.website {
                Some(url) => format!("[{}]({})", store.name, url),
                None => store.name.clone(),
            };
            let city = store.location.as_ref().map(|l| l.city.as_str()).unwrap_or("");
            let delivery = if store.has_delivery { "✓" } else { "" };
            let distance = row.distance_km.map(|d| format!("{:.1} km", d)).unwrap_or_default();

            lines.push(format!(
                "| {} | {} | {} | {} | {} |",
                name, store.store_type, city, delivery, distance
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} stores found*", rows.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_comparison(&self, data: &VariantComparison) -> String {
        let mut lines = Vec::new();
        lines.push("product,variant,store_id,store,price,delivery_fee,total,currency".to_string());

        for offer in &data.offers {
            let store = offer.store.map(|s| s.name.as_str()).unwrap_or("");
            lines.push(format!(
                "{},{},{},{},{:.2},{:.2},{:.2},{}",
                Self::csv_escape(&data.product.name),
                Self::csv_escape(&data.variant.name),
                Self::csv_escape(&offer.price.store_id),
                Self::csv_escape(store),
                offer.price.price,
                offer.delivery_fee,
                offer.total_price,
                offer.price.currency
            ));
        }

        lines.join("\n")
    }

    fn csv_plan(&self, report: &PlanReport) -> String {
        let mut lines = Vec::new();
        lines.push(
            "store_id,store,product,variant,quantity,priority,unit_price,line_total,currency"
                .to_string(),
        );

        for group in &report.plan.groups {
            for item in &group.items {
                lines.push(format!(
                    "{},{},{},{},{},{},{:.2},{:.2},{}",
                    Self::csv_escape(&group.store_id),
                    Self::csv_escape(group.store_name()),
                    Self::csv_escape(&item.product.name),
                    Self::csv_escape(&item.variant.name),
                    item.item.quantity,
                    item.item.priority,
                    item.unit_price,
                    item.line_total(),
                    item.price.currency
                ));
            }
        }

        lines.join("\n")
    }

    fn csv_store_header() -> String {
        "id,name,type,city,has_delivery,delivery_fee,distance_km,website".to_string()
    }

    fn csv_stores(&self, rows: &[StoreRow]) -> String {
        let mut lines = Vec::new();
        lines.push(Self::csv_store_header());

        for row in rows {
            let store = row.store;
            let city = store.location.as_ref().map(|l| Self::csv_escape(&l.city)).unwrap_or_default();
            let fee = store.delivery_fee.map(|f| f.to_string()).unwrap_or_default();
            let distance = row.distance_km.map(|d| format!("{:.3}", d)).unwrap_or_default();
            let website = store.website.as_deref().map(Self::csv_escape).unwrap_or_default();

            lines.push(format!(
                "{},{},{},{},{},{},{},{}",
                Self::csv_escape(&store.id),
                Self::csv_escape(&store.name),
                store.store_type,
                city,
                store.has_delivery,
                fee,
                distance,
                website
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }

    fn truncate(s: &str, width: usize) -> String {
        if s.chars().count() > width {
            let cut: String = s.chars().take(width.saturating_sub(3)).collect();
            format!("{}...", cut)
        } else {
            s.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        Location, Price, Priority, Product, ProductIndex, ProductVariant, ShoppingListItem,
        StoreDirectory, StoreType,
    };
    use crate::compare::compare_variant;
    use crate::shopping::group_by_store;
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn make_store(id: &str, name: &str, delivery_fee: Option<f64>) -> Store {
        Store {
            id: id.to_string(),
            name: name.to_string(),
            store_type: StoreType::Physical,
            location: Some(Location {
                address: "Main St 1".to_string(),
                city: "Lund".to_string(),
                coordinates: Coordinates::new(55.70, 13.19),
            }),
            has_delivery: delivery_fee.is_some(),
            delivery_radius: Some(10.0),
            delivery_fee,
            website: Some("https://example.com".to_string()),
            phone: None,
        }
    }

    fn make_price(store_id: &str, price: f64) -> Price {
        Price {
            id: format!("price-{}", store_id),
            store_id: store_id.to_string(),
            price,
            currency: "SEK".to_string(),
            is_available: true,
            last_updated: Utc::now(),
            discount: None,
        }
    }

    fn make_product() -> Product {
        let mut specifications = BTreeMap::new();
        specifications.insert("Weight".to_string(), "1 kg".to_string());

        Product {
            id: "p1".to_string(),
            name: "Coffee, dark roast".to_string(),
            category: "Groceries".to_string(),
            brand: Some("Roastery".to_string()),
            variants: vec![ProductVariant {
                id: "v1".to_string(),
                name: "1 kg".to_string(),
                specifications,
                prices: vec![make_price("a", 100.0), make_price("b", 110.0)],
            }],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn make_item(quantity: u32) -> ShoppingListItem {
        ShoppingListItem {
            product_id: "p1".to_string(),
            variant_id: "v1".to_string(),
            quantity,
            priority: Priority::High,
            added_at: Utc::now(),
        }
    }

    fn stores() -> Vec<Store> {
        vec![make_store("a", "Alpha Market", Some(29.0)), make_store("b", "Beta Shop", None)]
    }

    #[test]
    fn test_table_comparison() {
        let stores = stores();
        let directory = StoreDirectory::new(&stores);
        let product = make_product();
        let comparison = compare_variant(&product, &product.variants[0], &directory, true);

        let output = Formatter::new(OutputFormat::Table).format_comparison(&comparison);
        assert!(output.contains("Coffee, dark roast - 1 kg"));
        assert!(output.contains("Brand:   Roastery"));
        assert!(output.contains("Weight: 1 kg"));
        assert!(output.contains("Beta Shop"));
        assert!(output.contains("110.00 kr"));
        assert!(output.contains("129.00 kr"));
        assert!(output.contains("Ranked by total incl. delivery"));
        assert!(output.contains("Max savings: 19.00 kr (15%)"));

        // Beta wins on landed cost, so it's listed first
        let beta = output.find("Beta Shop").unwrap();
        let alpha = output.find("Alpha Market").unwrap();
        assert!(beta < alpha);
    }

    #[test]
    fn test_table_comparison_empty() {
        let directory = StoreDirectory::new(&[]);
        let mut product = make_product();
        product.variants[0].prices.clear();
        let comparison = compare_variant(&product, &product.variants[0], &directory, true);

        let output = Formatter::new(OutputFormat::Table).format_comparison(&comparison);
        assert!(output.contains("No available prices."));
    }

    #[test]
    fn test_json_comparison() {
        let stores = stores();
        let directory = StoreDirectory::new(&stores);
        let product = make_product();
        let comparison = compare_variant(&product, &product.variants[0], &directory, true);

        let output = Formatter::new(OutputFormat::Json).format_comparison(&comparison);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["offers"].as_array().unwrap().len(), 2);
        assert_eq!(value["offers"][0]["totalPrice"], 110.0);
        assert_eq!(value["offers"][1]["deliveryFee"], 29.0);
        assert_eq!(value["includesDelivery"], true);
    }

    #[test]
    fn test_csv_comparison_escapes() {
        let stores = stores();
        let directory = StoreDirectory::new(&stores);
        let product = make_product();
        let comparison = compare_variant(&product, &product.variants[0], &directory, false);

        let output = Formatter::new(OutputFormat::Csv).format_comparison(&comparison);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("product,variant"));
        assert_eq!(lines[1], "\"Coffee, dark roast\",1 kg,a,Alpha Market,100.00,29.00,129.00,SEK");
    }

    #[test]
    fn test_table_comparison_goods_only_keeps_fee() {
        let stores = stores();
        let directory = StoreDirectory::new(&stores);
        let product = make_product();
        let comparison = compare_variant(&product, &product.variants[0], &directory, false);

        let output = Formatter::new(OutputFormat::Table).format_comparison(&comparison);
        assert!(output.contains("Ranked by price, goods only"));
        assert!(output.contains("29.00 kr"));
        assert!(output.contains("129.00 kr"));
        assert!(output.contains("Max savings: 10.00 kr (9%)"));

        // Alpha wins on shelf price despite its delivery fee
        let alpha = output.find("Alpha Market").unwrap();
        let beta = output.find("Beta Shop").unwrap();
        assert!(alpha < beta);

        let markdown = Formatter::new(OutputFormat::Markdown).format_comparison(&comparison);
        assert!(markdown.contains("| Alpha Market | 100.00 kr | 29.00 kr | 129.00 kr |"));
        assert!(markdown.contains("**Best:** Alpha Market at 100.00 kr"));
    }

    #[test]
    fn test_markdown_comparison() {
        let stores = stores();
        let directory = StoreDirectory::new(&stores);
        let product = make_product();
        let comparison = compare_variant(&product, &product.variants[0], &directory, true);

        let output = Formatter::new(OutputFormat::Markdown).format_comparison(&comparison);
        assert!(output.starts_with("## Coffee, dark roast - 1 kg"));
        assert!(output.contains("| Beta Shop | 110.00 kr | 0.00 kr | 110.00 kr |"));
        assert!(output.contains("**Best:** Beta Shop at 110.00 kr"));
    }

    #[test]
    fn test_plan_formats() {
        let stores = stores();
        let directory = StoreDirectory::new(&stores);
        let products = vec![make_product()];
        let index = ProductIndex::new(&products);
        let items = vec![make_item(2)];
        let plan = group_by_store(&items, &index, &directory);

        let report = PlanReport {
            list_name: "Weekly",
            currency: "SEK",
            plan: &plan,
            total: plan.total(),
            delivery_total: plan.delivery_total(),
            savings: 0.0,
        };

        let table = Formatter::new(OutputFormat::Table).format_plan(&report);
        assert!(table.contains("Shopping list: Weekly"));
        assert!(table.contains("Beta Shop (1 items)"));
        assert!(table.contains("220.00 kr"));
        assert!(table.contains("[high]"));
        assert!(table.contains("Total:    220.00 kr"));

        let markdown = Formatter::new(OutputFormat::Markdown).format_plan(&report);
        assert!(markdown.contains("### Beta Shop"));
        assert!(markdown.contains("**Total:** 220.00 kr"));

        let csv = Formatter::new(OutputFormat::Csv).format_plan(&report);
        assert!(csv.contains("b,Beta Shop,\"Coffee, dark roast\",1 kg,2,high,110.00,220.00,SEK"));

        let json = Formatter::new(OutputFormat::Json).format_plan(&report);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total"], 220.0);
        assert_eq!(value["plan"]["groups"][0]["storeId"], "b");
        assert_eq!(value["listName"], "Weekly");
        assert_eq!(value["deliveryTotal"], 0.0);
    }

    #[test]
    fn test_plan_with_delivery_and_savings() {
        let stores = vec![make_store("a", "Alpha Market", Some(5.0))];
        let directory = StoreDirectory::new(&stores);
        let products = vec![make_product()];
        let index = ProductIndex::new(&products);
        let items = vec![make_item(1)];
        let plan = group_by_store(&items, &index, &directory);

        let report = PlanReport {
            list_name: "Weekly",
            currency: "SEK",
            plan: &plan,
            total: plan.total(),
            delivery_total: plan.delivery_total(),
            savings: 10.0,
        };

        let table = Formatter::new(OutputFormat::Table).format_plan(&report);
        assert!(table.contains("Delivery: 5.00 kr"));
        assert!(table.contains("Savings:  10.00 kr"));
    }

    #[test]
    fn test_store_formats() {
        let stores = stores();
        let refs: Vec<&Store> = stores.iter().collect();
        let rows = StoreRow::from_stores(&refs, Some(Coordinates::new(55.70, 13.19)));

        assert_eq!(rows[0].distance_km, Some(0.0));

        let table = Formatter::new(OutputFormat::Table).format_stores(&rows);
        assert!(table.contains("Alpha Market"));
        assert!(table.contains("29.00"));
        assert!(table.contains("0.0 km"));
        assert!(table.contains("Total: 2 stores"));

        let markdown = Formatter::new(OutputFormat::Markdown).format_stores(&rows);
        assert!(markdown.contains("[Alpha Market](https://example.com)"));

        let csv = Formatter::new(OutputFormat::Csv).format_stores(&rows);
        assert!(csv.lines().nth(1).unwrap().starts_with("a,Alpha Market,physical,Lund,true,29,"));

        let json = Formatter::new(OutputFormat::Json).format_stores(&rows);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["id"], "a");
        assert_eq!(value[0]["distanceKm"], 0.0);
        assert_eq!(value[0]["hasDelivery"], true);
    }

    #[test]
    fn test_store_formats_empty() {
        assert_eq!(Formatter::new(OutputFormat::Json).format_stores(&[]), "[]");
        assert_eq!(Formatter::new(OutputFormat::Table).format_stores(&[]), "No stores found.");
        assert!(Formatter::new(OutputFormat::Csv).format_stores(&[]).starts_with("id,name"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(Formatter::truncate("short", 10), "short");
        assert_eq!(Formatter::truncate("a very long store name", 10), "a very ...");
        assert_eq!(Formatter::truncate("åäöåäöåäöåäö", 6), "åäö...");
    }
}
