use crate::domain::common::{
    contains_ignore_case, parse_count_or_zero, require, EntityField, EntityRecord, InputKind,
    RecordId, SequentialIds, ValidationError,
};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Locally assigned category id
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

impl CategoryId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for CategoryId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl RecordId for CategoryId {}

// ============================================================================
// Record
// ============================================================================

/// Product category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Number of products in the category
    pub products: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryField {
    Name,
    Products,
}

impl EntityField for CategoryField {
    fn all() -> &'static [Self] {
        &[CategoryField::Name, CategoryField::Products]
    }

    fn key(&self) -> &'static str {
        match self {
            CategoryField::Name => "name",
            CategoryField::Products => "products",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CategoryField::Name => "Category Name",
            CategoryField::Products => "No. of Products",
        }
    }

    fn input_kind(&self) -> InputKind {
        match self {
            CategoryField::Name => InputKind::Text,
            CategoryField::Products => InputKind::Number,
        }
    }
}

impl EntityRecord for Category {
    type Id = CategoryId;
    type Field = CategoryField;
    type Allocator = SequentialIds;

    fn id(&self) -> &CategoryId {
        &self.id
    }

    fn set_id(&mut self, id: CategoryId) {
        self.id = id;
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle)
    }

    fn set_field(&mut self, field: CategoryField, raw: &str) {
        match field {
            CategoryField::Name => self.name = raw.to_string(),
            CategoryField::Products => self.products = parse_count_or_zero(raw),
        }
    }

    fn field_value(&self, field: CategoryField) -> String {
        match field {
            CategoryField::Name => self.name.clone(),
            CategoryField::Products => self.products.to_string(),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, CategoryField::Name)
    }

    fn empty_template() -> Self {
        Self {
            id: CategoryId(0),
            name: String::new(),
            products: 0,
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            Category {
                id: CategoryId(1),
                name: "Fertilizers".into(),
                products: 12,
            },
            Category {
                id: CategoryId(2),
                name: "Seeds".into(),
                products: 8,
            },
            Category {
                id: CategoryId(3),
                name: "Farm Equipment".into(),
                products: 5,
            },
        ]
    }

    fn allocator_for(items: &[Self]) -> SequentialIds {
        SequentialIds::after(items.iter().map(|c| c.id.value()))
    }

    fn entity_index() -> &'static str {
        "a003"
    }

    fn element_name() -> &'static str {
        "Category"
    }

    fn list_name() -> &'static str {
        "Categories"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityListManager;

    #[test]
    fn test_products_count_parsing() {
        let mut c = Category::empty_template();
        c.set_field(CategoryField::Products, "15");
        assert_eq!(c.products, 15);
        c.set_field(CategoryField::Products, "");
        assert_eq!(c.products, 0);
        c.set_field(CategoryField::Products, "3 boxes");
        assert_eq!(c.products, 3);
    }

    #[test]
    fn test_whitespace_name_is_missing() {
        let mut c = Category::empty_template();
        c.set_field(CategoryField::Name, "   ");
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_manager_over_explicit_items() {
        let items = vec![Category {
            id: CategoryId(1),
            name: "Fertilizers".into(),
            products: 12,
        }];
        let mut m = EntityListManager::with_items(items);
        m.set_search_text("fert");
        assert_eq!(m.filtered_items().count(), 1);

        m.open_add();
        m.update_draft_field(CategoryField::Name, "Irrigation");
        assert_eq!(m.save(), Ok(CategoryId(2)));
    }

    #[test]
    fn test_manager_starting_empty() {
        let mut m = EntityListManager::<Category>::with_items(Vec::new());
        assert!(m.is_empty());
        m.open_add();
        m.update_draft_field(CategoryField::Name, "Seeds");
        assert_eq!(m.save(), Ok(CategoryId(1)));
    }
}
