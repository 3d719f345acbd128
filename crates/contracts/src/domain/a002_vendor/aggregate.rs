use crate::domain::common::{
    contains_ignore_case, parse_number_or_zero, require, EntityField, EntityRecord, InputKind,
    RecordId, SequentialIds, ValidationError,
};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Locally assigned vendor id
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorId(pub u32);

impl VendorId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for VendorId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl RecordId for VendorId {}

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VendorStatus {
    #[default]
    Active,
    Inactive,
}

impl VendorStatus {
    pub const OPTIONS: &'static [&'static str] = &["Active", "Inactive"];

    pub fn as_str(&self) -> &'static str {
        match self {
            VendorStatus::Active => "Active",
            VendorStatus::Inactive => "Inactive",
        }
    }

    /// Select value to status; anything unknown is `Active`
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("inactive") {
            VendorStatus::Inactive
        } else {
            VendorStatus::Active
        }
    }
}

impl fmt::Display for VendorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Record
// ============================================================================

/// Supplier selling through the marketplace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub contact: String,
    pub rating: f64,
    pub location: String,
    pub status: VendorStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorField {
    Name,
    Contact,
    Rating,
    Location,
    Status,
}

impl EntityField for VendorField {
    fn all() -> &'static [Self] {
        &[
            VendorField::Name,
            VendorField::Contact,
            VendorField::Rating,
            VendorField::Location,
            VendorField::Status,
        ]
    }

    fn key(&self) -> &'static str {
        match self {
            VendorField::Name => "name",
            VendorField::Contact => "contact",
            VendorField::Rating => "rating",
            VendorField::Location => "location",
            VendorField::Status => "status",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            VendorField::Name => "Vendor Name",
            VendorField::Contact => "Contact",
            VendorField::Rating => "Rating",
            VendorField::Location => "Location",
            VendorField::Status => "Status",
        }
    }

    fn input_kind(&self) -> InputKind {
        match self {
            VendorField::Rating => InputKind::Number,
            VendorField::Status => InputKind::Choice(VendorStatus::OPTIONS),
            _ => InputKind::Text,
        }
    }
}

impl EntityRecord for Vendor {
    type Id = VendorId;
    type Field = VendorField;
    type Allocator = SequentialIds;

    fn id(&self) -> &VendorId {
        &self.id
    }

    fn set_id(&mut self, id: VendorId) {
        self.id = id;
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle) || contains_ignore_case(&self.location, needle)
    }

    fn set_field(&mut self, field: VendorField, raw: &str) {
        match field {
            VendorField::Name => self.name = raw.to_string(),
            VendorField::Contact => self.contact = raw.to_string(),
            VendorField::Rating => self.rating = parse_number_or_zero(raw),
            VendorField::Location => self.location = raw.to_string(),
            VendorField::Status => self.status = VendorStatus::from_label(raw),
        }
    }

    fn field_value(&self, field: VendorField) -> String {
        match field {
            VendorField::Name => self.name.clone(),
            VendorField::Contact => self.contact.clone(),
            VendorField::Rating => self.rating.to_string(),
            VendorField::Location => self.location.clone(),
            VendorField::Status => self.status.as_str().to_string(),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, VendorField::Name)?;
        require(&self.contact, VendorField::Contact)
    }

    fn empty_template() -> Self {
        Self {
            id: VendorId(0),
            name: String::new(),
            contact: String::new(),
            rating: 0.0,
            location: String::new(),
            status: VendorStatus::Active,
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            Vendor {
                id: VendorId(1),
                name: "GreenGrow Farms".into(),
                contact: "9876543210".into(),
                rating: 4.8,
                location: "Hyderabad".into(),
                status: VendorStatus::Active,
            },
            Vendor {
                id: VendorId(2),
                name: "AgriSupply Co.".into(),
                contact: "9123456780".into(),
                rating: 4.2,
                location: "Delhi".into(),
                status: VendorStatus::Inactive,
            },
            Vendor {
                id: VendorId(3),
                name: "FarmFresh Organics".into(),
                contact: "9988776655".into(),
                rating: 4.5,
                location: "Bangalore".into(),
                status: VendorStatus::Active,
            },
        ]
    }

    fn allocator_for(items: &[Self]) -> SequentialIds {
        SequentialIds::after(items.iter().map(|v| v.id.value()))
    }

    fn entity_index() -> &'static str {
        "a002"
    }

    fn element_name() -> &'static str {
        "Vendor"
    }

    fn list_name() -> &'static str {
        "Vendors"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_label() {
        assert_eq!(VendorStatus::from_label("Inactive"), VendorStatus::Inactive);
        assert_eq!(VendorStatus::from_label("inactive "), VendorStatus::Inactive);
        assert_eq!(VendorStatus::from_label("Active"), VendorStatus::Active);
        assert_eq!(VendorStatus::from_label(""), VendorStatus::Active);
    }

    #[test]
    fn test_status_serializes_as_label() {
        let json = serde_json::to_string(&VendorStatus::Inactive).unwrap();
        assert_eq!(json, "\"Inactive\"");
    }

    #[test]
    fn test_rating_parse_failure_is_zero() {
        let mut v = Vendor::empty_template();
        v.set_field(VendorField::Rating, "4.7");
        assert_eq!(v.rating, 4.7);
        v.set_field(VendorField::Rating, "great");
        assert_eq!(v.rating, 0.0);
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut v = Vendor::empty_template();
        assert_eq!(
            v.validate(),
            Err(ValidationError::MissingField { field: "Vendor Name" })
        );
        v.set_field(VendorField::Name, "Soil & Co");
        assert_eq!(
            v.validate(),
            Err(ValidationError::MissingField { field: "Contact" })
        );
        v.set_field(VendorField::Contact, "12345");
        assert_eq!(v.validate(), Ok(()));
    }

    #[test]
    fn test_template_defaults() {
        let v = Vendor::empty_template();
        assert_eq!(v.status, VendorStatus::Active);
        assert_eq!(v.field_value(VendorField::Status), "Active");
        assert_eq!(v.field_value(VendorField::Rating), "0");
    }

    #[test]
    fn test_seed_ids_unique() {
        let seed = Vendor::seed();
        let mut ids: Vec<u32> = seed.iter().map(|v| v.id.value()).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
