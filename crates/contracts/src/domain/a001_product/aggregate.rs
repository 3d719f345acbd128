use super::sku::SkuIds;
use crate::domain::common::{
    contains_ignore_case, parse_number_or_zero, require, EntityField, EntityRecord, InputKind,
    RecordId, ValidationError,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Prefix of externally visible product codes
pub const SKU_PREFIX: &str = "AGR-";

/// Product code, e.g. "AGR-1001"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn from_number(number: u32) -> Self {
        Self(format!("{}{}", SKU_PREFIX, number))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Placeholder carried by drafts until `save()` assigns a code
    fn unassigned() -> Self {
        Self(String::new())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl RecordId for ProductId {}

// ============================================================================
// Record
// ============================================================================

/// Product offered on the marketplace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub vendor: String,
    pub category: String,
    /// Free text ("1200 units", "Vendor Stock")
    pub stock: String,
    pub price: f64,
    pub status: String,
    pub sustainability: String,
}

impl Product {
    /// Price as shown in the table, e.g. "$75.5"
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    Vendor,
    Category,
    Stock,
    Price,
    Status,
    Sustainability,
}

impl EntityField for ProductField {
    fn all() -> &'static [Self] {
        &[
            ProductField::Name,
            ProductField::Vendor,
            ProductField::Category,
            ProductField::Stock,
            ProductField::Price,
            ProductField::Status,
            ProductField::Sustainability,
        ]
    }

    fn key(&self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Vendor => "vendor",
            ProductField::Category => "category",
            ProductField::Stock => "stock",
            ProductField::Price => "price",
            ProductField::Status => "status",
            ProductField::Sustainability => "sustainability",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ProductField::Name => "Product Name",
            ProductField::Vendor => "Vendor",
            ProductField::Category => "Category",
            ProductField::Stock => "Stock",
            ProductField::Price => "Price",
            ProductField::Status => "Status",
            ProductField::Sustainability => "Sustainability",
        }
    }

    fn input_kind(&self) -> InputKind {
        match self {
            ProductField::Price => InputKind::Number,
            _ => InputKind::Text,
        }
    }
}

impl EntityRecord for Product {
    type Id = ProductId;
    type Field = ProductField;
    type Allocator = SkuIds;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn set_id(&mut self, id: ProductId) {
        self.id = id;
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle)
    }

    fn set_field(&mut self, field: ProductField, raw: &str) {
        match field {
            ProductField::Name => self.name = raw.to_string(),
            ProductField::Vendor => self.vendor = raw.to_string(),
            ProductField::Category => self.category = raw.to_string(),
            ProductField::Stock => self.stock = raw.to_string(),
            ProductField::Price => self.price = parse_number_or_zero(raw),
            ProductField::Status => self.status = raw.to_string(),
            ProductField::Sustainability => self.sustainability = raw.to_string(),
        }
    }

    fn field_value(&self, field: ProductField) -> String {
        match field {
            ProductField::Name => self.name.clone(),
            ProductField::Vendor => self.vendor.clone(),
            ProductField::Category => self.category.clone(),
            ProductField::Stock => self.stock.clone(),
            ProductField::Price => self.price.to_string(),
            ProductField::Status => self.status.clone(),
            ProductField::Sustainability => self.sustainability.clone(),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, ProductField::Name)
    }

    fn empty_template() -> Self {
        Self {
            id: ProductId::unassigned(),
            name: String::new(),
            vendor: String::new(),
            category: String::new(),
            stock: String::new(),
            price: 0.0,
            status: String::new(),
            sustainability: String::new(),
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            seed_product("AGR-1001", "Organic Paddy Seeds", "GreenFarm Co.", "Seeds", "1200 units", 50.0, "Active", "Organic"),
            seed_product("AGR-1002", "Pest-Guard Pesticide 5L", "ChemAgro Corp.", "Pesticides", "50 units", 75.5, "Active", "-"),
            seed_product("AGR-1003", "Drip Irrigation Kit", "AquaFlow Tools", "Equipment", "Vendor Stock", 350.0, "Pending", "-"),
        ]
    }

    fn allocator_for(_items: &[Self]) -> SkuIds {
        SkuIds::default()
    }

    fn entity_index() -> &'static str {
        "a001"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

#[allow(clippy::too_many_arguments)]
fn seed_product(
    id: &str,
    name: &str,
    vendor: &str,
    category: &str,
    stock: &str,
    price: f64,
    status: &str,
    sustainability: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        vendor: vendor.to_string(),
        category: category.to_string(),
        stock: stock.to_string(),
        price,
        status: status.to_string(),
        sustainability: sustainability.to_string(),
    }
}

// ============================================================================
// Sorting
// ============================================================================

/// Sort options of the product table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
    #[default]
    None,
    Name,
    Price,
}

impl ProductSort {
    pub fn all() -> &'static [ProductSort] {
        &[ProductSort::None, ProductSort::Name, ProductSort::Price]
    }

    pub fn key(&self) -> &'static str {
        match self {
            ProductSort::None => "",
            ProductSort::Name => "name",
            ProductSort::Price => "price",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductSort::None => "Sort By",
            ProductSort::Name => "Name",
            ProductSort::Price => "Price",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "name" => ProductSort::Name,
            "price" => ProductSort::Price,
            _ => ProductSort::None,
        }
    }

    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            ProductSort::None => Ordering::Equal,
            ProductSort::Name => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
            ProductSort::Price => a.price.total_cmp(&b.price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityListManager;

    fn is_sku(id: &ProductId) -> bool {
        let Some(digits) = id.value().strip_prefix(SKU_PREFIX) else {
            return false;
        };
        digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit())
    }

    #[test]
    fn test_add_assigns_sku() {
        let mut m = EntityListManager::<Product>::new();
        m.open_add();
        m.update_draft_field(ProductField::Name, "Neem Oil 1L");
        m.update_draft_field(ProductField::Price, "12.25");
        let id = m.save().unwrap();

        assert!(is_sku(&id), "unexpected id {}", id);
        assert_eq!(m.len(), 4);
        let added = m.get(&id).unwrap();
        assert_eq!(added.name, "Neem Oil 1L");
        assert_eq!(added.price, 12.25);
    }

    #[test]
    fn test_many_adds_keep_ids_unique() {
        let mut m = EntityListManager::<Product>::new();
        for i in 0..50 {
            m.open_add();
            m.update_draft_field(ProductField::Name, &format!("Item {}", i));
            m.save().unwrap();
        }
        let mut ids: Vec<&str> = m.items().iter().map(|p| p.id.value()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 53);
    }

    #[test]
    fn test_product_requires_name() {
        let mut m = EntityListManager::<Product>::new();
        m.open_add();
        m.update_draft_field(ProductField::Vendor, "GreenFarm Co.");
        assert!(m.save().is_err());
        assert!(m.is_editing());
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn test_price_parse_failure_is_zero() {
        let mut m = EntityListManager::<Product>::new();
        m.open_edit(&ProductId::new("AGR-1002"));
        m.update_draft_field(ProductField::Price, "cheap");
        assert_eq!(m.session().unwrap().draft.price, 0.0);
    }

    #[test]
    fn test_edit_keeps_code() {
        let mut m = EntityListManager::<Product>::new();
        m.open_edit(&ProductId::new("AGR-1003"));
        m.update_draft_field(ProductField::Status, "Active");
        let id = m.save().unwrap();
        assert_eq!(id, ProductId::new("AGR-1003"));
        assert_eq!(m.get(&id).unwrap().status, "Active");
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn test_search_by_name_only() {
        let mut m = EntityListManager::<Product>::new();
        m.set_search_text("kit");
        let ids: Vec<&str> = m.filtered_items().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec!["AGR-1003"]);

        // vendor names are not searchable
        m.set_search_text("chemagro");
        assert_eq!(m.filtered_items().count(), 0);
    }

    #[test]
    fn test_sort_by_price_and_name() {
        let m = EntityListManager::<Product>::new();
        let by_price: Vec<f64> = m
            .sorted_filtered_items(|a, b| ProductSort::Price.compare(a, b))
            .into_iter()
            .map(|p| p.price)
            .collect();
        assert_eq!(by_price, vec![50.0, 75.5, 350.0]);

        let by_name: Vec<&str> = m
            .sorted_filtered_items(|a, b| ProductSort::Name.compare(a, b))
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(
            by_name,
            vec!["Drip Irrigation Kit", "Organic Paddy Seeds", "Pest-Guard Pesticide 5L"]
        );

        let unsorted: Vec<&str> = m
            .sorted_filtered_items(|a, b| ProductSort::None.compare(a, b))
            .into_iter()
            .map(|p| p.id.value())
            .collect();
        assert_eq!(unsorted, vec!["AGR-1001", "AGR-1002", "AGR-1003"]);
    }

    #[test]
    fn test_sort_keys() {
        for sort in ProductSort::all() {
            assert_eq!(ProductSort::from_key(sort.key()), *sort);
        }
        assert_eq!(ProductSort::from_key("bogus"), ProductSort::None);
    }

    #[test]
    fn test_price_label() {
        let products = Product::seed();
        assert_eq!(products[0].price_label(), "$50");
        assert_eq!(products[1].price_label(), "$75.5");
    }
}
