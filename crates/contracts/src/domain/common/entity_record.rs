use super::{IdAllocator, RecordId, ValidationError};
use std::fmt;

/// How a field is edited in the modal form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    /// Parsed on input; unparsable text becomes 0
    Number,
    /// Closed set of values rendered as a select
    Choice(&'static [&'static str]),
}

/// Editable field of a record
pub trait EntityField: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// All editable fields in form order
    fn all() -> &'static [Self];

    /// Machine name (matches the serialized field name)
    fn key(&self) -> &'static str;

    /// Form label / placeholder
    fn label(&self) -> &'static str;

    fn input_kind(&self) -> InputKind {
        InputKind::Text
    }
}

/// Trait for a record managed by [`super::EntityListManager`]
///
/// One implementation per entity; the list manager is written once against
/// this trait.
pub trait EntityRecord: Clone + fmt::Debug + Send + Sync + Sized + 'static {
    /// Identifier type
    type Id: RecordId;

    /// Editable field enum
    type Field: EntityField;

    /// Strategy for ids of newly added records
    type Allocator: IdAllocator<Self::Id> + fmt::Debug + Send + Sync;

    // ============================================================================
    // Instance methods
    // ============================================================================

    fn id(&self) -> &Self::Id;

    fn set_id(&mut self, id: Self::Id);

    /// Case-insensitive substring match; `needle` is already lowercased
    /// and never empty.
    fn matches_search(&self, needle: &str) -> bool;

    /// Write raw form input into a field
    fn set_field(&mut self, field: Self::Field, raw: &str);

    /// Current field value as form text
    fn field_value(&self, field: Self::Field) -> String;

    /// Presence checks run by `save()`
    fn validate(&self) -> Result<(), ValidationError>;

    // ============================================================================
    // Class-level data
    // ============================================================================

    /// Draft used when adding a record
    fn empty_template() -> Self;

    /// Records the manager starts with
    fn seed() -> Vec<Self>;

    /// Allocator primed with the ids already in `items`
    fn allocator_for(items: &[Self]) -> Self::Allocator;

    /// Entity index (e.g. "a002"), used as the log key
    fn entity_index() -> &'static str;

    /// Singular UI name (e.g. "Vendor")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Vendors")
    fn list_name() -> &'static str;
}

/// Case-insensitive substring test against an already lowercased needle
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Presence check used by `EntityRecord::validate` implementations
pub fn require<F: EntityField>(value: &str, field: F) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField {
            field: field.label(),
        });
    }
    Ok(())
}
