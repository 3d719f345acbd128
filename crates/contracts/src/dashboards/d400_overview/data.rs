use crate::domain::common::contains_ignore_case;
use crate::shared::csv::CsvExportable;
use serde::{Deserialize, Serialize};

/// Monthly sales value for the line chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub month: String,
    pub value: f64,
}

/// Row of the "Top Products" table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub id: u32,
    pub name: String,
    pub sold: u32,
    /// Preformatted, e.g. "$4,200"
    pub revenue: String,
}

impl TopProduct {
    /// Catalogue code shown under the product name
    pub fn sku(&self) -> String {
        format!("SKU: AGR-{}", 1000 + self.id)
    }
}

impl CsvExportable for TopProduct {
    fn headers() -> Vec<&'static str> {
        vec!["Product", "Sold", "Revenue"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![self.name.clone(), self.sold.to_string(), self.revenue.clone()]
    }
}

/// Headline figure card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpi {
    pub label: String,
    pub value: String,
    pub icon: String,
    /// Rendered in the brand colour
    pub highlight: bool,
}

/// Vendor awaiting approval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingVendor {
    pub name: String,
    pub location: String,
}

/// Options of the date-range select
pub const RANGE_OPTIONS: [&str; 4] = ["Last 7 days", "Last 30 days", "Last 90 days", "Year to date"];

pub const DEFAULT_RANGE: &str = "Last 30 days";

pub fn sample_sales() -> Vec<SalesPoint> {
    [
        ("Jan", 200.0),
        ("Feb", 220.0),
        ("Mar", 300.0),
        ("Apr", 285.0),
        ("May", 420.0),
        ("Jun", 360.0),
        ("Jul", 410.0),
    ]
    .into_iter()
    .map(|(month, value)| SalesPoint {
        month: month.to_string(),
        value,
    })
    .collect()
}

pub fn top_products() -> Vec<TopProduct> {
    [
        (1, "Organic Paddy Seeds", 320, "$4,200"),
        (2, "Drip Irrigation Kit", 190, "$3,400"),
        (3, "Eco Fertilizer", 150, "$2,300"),
    ]
    .into_iter()
    .map(|(id, name, sold, revenue)| TopProduct {
        id,
        name: name.to_string(),
        sold,
        revenue: revenue.to_string(),
    })
    .collect()
}

/// Top products whose name contains `query` (case-insensitive)
pub fn filter_top_products(products: &[TopProduct], query: &str) -> Vec<TopProduct> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| needle.is_empty() || contains_ignore_case(&p.name, &needle))
        .cloned()
        .collect()
}

pub fn kpis() -> Vec<Kpi> {
    [
        ("Total Products", "128", "package", false),
        ("Vendors", "32", "users", false),
        ("Categories", "14", "tag", false),
        ("Monthly Revenue", "$24,800", "dollar-sign", true),
    ]
    .into_iter()
    .map(|(label, value, icon, highlight)| Kpi {
        label: label.to_string(),
        value: value.to_string(),
        icon: icon.to_string(),
        highlight,
    })
    .collect()
}

/// (action, subject) pairs of the activity feed
pub fn recent_activity() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Added new product", "Organic Paddy Seeds"),
        ("Updated product price", "Drip Irrigation Kit"),
        ("New vendor", "GreenFarm Co."),
        ("Low stock alert", "Eco Fertilizer"),
    ]
}

pub fn pending_vendors() -> Vec<PendingVendor> {
    vec![
        PendingVendor {
            name: "GreenFarm Co.".to_string(),
            location: "Kerala".to_string(),
        },
        PendingVendor {
            name: "AgroPlus".to_string(),
            location: "Punjab".to_string(),
        },
    ]
}

pub fn quick_insights() -> Vec<&'static str> {
    vec![
        "Consider promoting \"Drip Irrigation Kit\": strong units sold but low conversion rate.",
        "Restock \"Eco Fertilizer\" (low inventory)",
        "Run a vendor verification audit for recently onboarded vendors.",
    ]
}
