/// Presence-check failure on a draft
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },
}

/// Failure of a list operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No record is being edited")]
    NoSession,

    #[error("Record {id} no longer exists")]
    RecordMissing { id: String },

    #[error("No free id left for a new record")]
    IdsExhausted,
}

impl ListError {
    /// Validation failures keep the modal open for correction
    pub fn is_validation(&self) -> bool {
        matches!(self, ListError::Validation(_))
    }
}
