//! Common types and traits for all list-managed entities

pub mod edit_session;
pub mod entity_record;
pub mod errors;
pub mod field_parse;
pub mod id_allocator;
pub mod list_manager;
pub mod record_id;

// Re-exports
pub use edit_session::{EditMode, EditSession};
pub use entity_record::{contains_ignore_case, require, EntityField, EntityRecord, InputKind};
pub use errors::{ListError, ValidationError};
pub use field_parse::{parse_count_or_zero, parse_number_or_zero};
pub use id_allocator::{IdAllocator, RandomSource, SequentialIds, UuidRandom};
pub use list_manager::EntityListManager;
pub use record_id::RecordId;
