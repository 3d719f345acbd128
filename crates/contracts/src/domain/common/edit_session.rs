/// Whether the modal creates or updates a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Add,
    Edit,
}

impl EditMode {
    pub fn verb(&self) -> &'static str {
        match self {
            EditMode::Add => "Add",
            EditMode::Edit => "Edit",
        }
    }

    /// Caption of the commit button
    pub fn commit_verb(&self) -> &'static str {
        match self {
            EditMode::Add => "Save",
            EditMode::Edit => "Update",
        }
    }
}

/// Open modal: a draft that is only applied by `save()`
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession<R> {
    pub mode: EditMode,
    pub draft: R,
}

impl<R> EditSession<R> {
    pub fn adding(draft: R) -> Self {
        Self {
            mode: EditMode::Add,
            draft,
        }
    }

    pub fn editing(draft: R) -> Self {
        Self {
            mode: EditMode::Edit,
            draft,
        }
    }
}
