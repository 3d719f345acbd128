use super::{EditMode, EditSession, EntityRecord, IdAllocator, ListError, RecordId};
use std::cmp::Ordering;

/// In-memory list with a search filter and a modal editing session.
///
/// `items` is the single source of truth. The filtered view is derived on
/// every call and the draft only reaches `items` through [`save`].
///
/// [`save`]: EntityListManager::save
#[derive(Debug)]
pub struct EntityListManager<R: EntityRecord> {
    items: Vec<R>,
    search_text: String,
    session: Option<EditSession<R>>,
    ids: R::Allocator,
}

impl<R: EntityRecord> EntityListManager<R> {
    /// Manager over the entity's seed records
    pub fn new() -> Self {
        Self::with_items(R::seed())
    }

    /// Manager over explicit records; ids must already be unique
    pub fn with_items(items: Vec<R>) -> Self {
        let ids = R::allocator_for(&items);
        Self {
            items,
            search_text: String::new(),
            session: None,
            ids,
        }
    }

    // ============================================================================
    // Collection
    // ============================================================================

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    // ============================================================================
    // Search
    // ============================================================================

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Items whose searchable fields contain the search text, ignoring case.
    /// Empty search text yields every item in order.
    pub fn filtered_items(&self) -> impl Iterator<Item = &R> + '_ {
        let needle = self.search_text.to_lowercase();
        self.items
            .iter()
            .filter(move |item| needle.is_empty() || item.matches_search(&needle))
    }

    /// Filtered view, stably sorted by `compare`
    pub fn sorted_filtered_items<F>(&self, mut compare: F) -> Vec<&R>
    where
        F: FnMut(&R, &R) -> Ordering,
    {
        let mut rows: Vec<&R> = self.filtered_items().collect();
        rows.sort_by(|a, b| compare(a, b));
        rows
    }

    // ============================================================================
    // Editing session
    // ============================================================================

    pub fn session(&self) -> Option<&EditSession<R>> {
        self.session.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    /// Open the modal with an empty template
    pub fn open_add(&mut self) {
        log::debug!("{}: open add", R::entity_index());
        self.session = Some(EditSession::adding(R::empty_template()));
    }

    /// Open the modal with a copy of the record. Returns `false` when the
    /// id is unknown.
    pub fn open_edit(&mut self, id: &R::Id) -> bool {
        let Some(record) = self.get(id).cloned() else {
            log::warn!("{}: open edit for unknown id {}", R::entity_index(), id);
            return false;
        };
        log::debug!("{}: open edit {}", R::entity_index(), id);
        self.session = Some(EditSession::editing(record));
        true
    }

    /// Write raw input into the draft; no-op without a session
    pub fn update_draft_field(&mut self, field: R::Field, raw: &str) {
        if let Some(session) = self.session.as_mut() {
            session.draft.set_field(field, raw);
        }
    }

    /// Close the modal, discarding the draft
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            log::debug!("{}: edit cancelled", R::entity_index());
        }
    }

    /// Commit the draft.
    ///
    /// On error `items` is unchanged and the session stays open.
    pub fn save(&mut self) -> Result<R::Id, ListError> {
        let session = self.session.as_ref().ok_or(ListError::NoSession)?;
        session.draft.validate()?;

        let saved_id = match session.mode {
            EditMode::Add => {
                let taken: Vec<R::Id> = self.items.iter().map(|item| item.id().clone()).collect();
                let id = self.ids.allocate(&taken).ok_or(ListError::IdsExhausted)?;
                let mut record = session.draft.clone();
                record.set_id(id.clone());
                self.items.push(record);
                id
            }
            EditMode::Edit => {
                let id = session.draft.id().clone();
                let slot = self
                    .items
                    .iter_mut()
                    .find(|item| item.id() == &id)
                    .ok_or_else(|| ListError::RecordMissing { id: id.as_string() })?;
                *slot = session.draft.clone();
                id
            }
        };

        log::debug!(
            "{}: saved {} ({} items)",
            R::entity_index(),
            saved_id,
            self.items.len()
        );
        self.session = None;
        Ok(saved_id)
    }

    /// Remove the record; unknown ids are a no-op. Returns whether a record
    /// was removed.
    pub fn delete(&mut self, id: &R::Id) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        let removed = self.items.len() != before;
        if removed {
            log::debug!("{}: deleted {}", R::entity_index(), id);
        }
        removed
    }
}

impl<R: EntityRecord> Default for EntityListManager<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_vendor::aggregate::{Vendor, VendorField, VendorId};
    use crate::domain::a003_category::aggregate::{Category, CategoryField, CategoryId};
    use crate::domain::common::ValidationError;

    fn names<R: EntityRecord>(rows: impl Iterator<Item = R>, name: impl Fn(&R) -> String) -> Vec<String> {
        rows.map(|r| name(&r)).collect()
    }

    #[test]
    fn test_empty_search_returns_all_in_order() {
        let m = EntityListManager::<Vendor>::new();
        let ids: Vec<u32> = m.filtered_items().map(|v| v.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive_subset() {
        let mut m = EntityListManager::<Vendor>::new();
        m.set_search_text("FARM");
        let found = names(m.filtered_items().cloned(), |v: &Vendor| v.name.clone());
        assert_eq!(found, vec!["GreenGrow Farms", "FarmFresh Organics"]);

        for v in m.items() {
            let expected = v.name.to_lowercase().contains("farm")
                || v.location.to_lowercase().contains("farm");
            assert_eq!(m.filtered_items().any(|f| f.id == v.id), expected);
        }
    }

    #[test]
    fn test_vendor_search_matches_location() {
        let mut m = EntityListManager::<Vendor>::new();
        m.set_search_text("delhi");
        let found: Vec<&Vendor> = m.filtered_items().collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "AgriSupply Co.");
    }

    #[test]
    fn test_category_search_scenario() {
        let mut m = EntityListManager::<Category>::new();
        m.set_search_text("fert");
        let found: Vec<&Category> = m.filtered_items().collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, CategoryId(1));
        assert_eq!(found[0].name, "Fertilizers");
        assert_eq!(found[0].products, 12);

        m.set_search_text("xyz");
        assert_eq!(m.filtered_items().count(), 0);
    }

    #[test]
    fn test_filtering_does_not_touch_items() {
        let mut m = EntityListManager::<Category>::new();
        m.set_search_text("seeds");
        assert_eq!(m.filtered_items().count(), 1);
        assert_eq!(m.len(), 3);
        m.set_search_text("");
        assert_eq!(m.filtered_items().count(), 3);
    }

    #[test]
    fn test_search_whitespace_is_literal() {
        let mut m = EntityListManager::<Category>::new();
        m.set_search_text("fert ");
        assert_eq!(m.filtered_items().count(), 0);
        m.set_search_text("farm ");
        let found: Vec<&str> = m.filtered_items().map(|c| c.name.as_str()).collect();
        assert_eq!(found, vec!["Farm Equipment"]);
    }

    #[test]
    fn test_vendor_delete_then_add_scenario() {
        let mut m = EntityListManager::<Vendor>::new();
        assert_eq!(m.len(), 3);

        assert!(m.delete(&VendorId(2)));
        assert_eq!(m.len(), 2);
        assert!(m.filtered_items().all(|v| v.id != VendorId(2)));

        m.open_add();
        m.update_draft_field(VendorField::Name, "NewCo");
        m.update_draft_field(VendorField::Contact, "12345");
        let id = m.save().expect("save should succeed");

        assert_eq!(m.len(), 3);
        assert_eq!(m.items().last().map(|v| v.name.as_str()), Some("NewCo"));
        assert!(!m.is_editing());

        // ids stay unique
        let mut ids: Vec<u32> = m.items().iter().map(|v| v.id.value()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
        assert_eq!(id, VendorId(4));
    }

    #[test]
    fn test_delete_last_then_add_does_not_collide() {
        let mut m = EntityListManager::<Category>::new();
        m.delete(&CategoryId(3));
        m.open_add();
        m.update_draft_field(CategoryField::Name, "Tools");
        let id = m.save().unwrap();
        assert_eq!(id, CategoryId(4));
        assert_eq!(m.items().iter().filter(|c| c.id == id).count(), 1);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut m = EntityListManager::<Vendor>::new();
        let before: Vec<Vendor> = m.items().to_vec();
        assert!(!m.delete(&VendorId(42)));
        assert_eq!(m.items(), before.as_slice());
    }

    #[test]
    fn test_add_appends_draft_fields() {
        let mut m = EntityListManager::<Vendor>::new();
        m.open_add();
        m.update_draft_field(VendorField::Name, "Rootstock Ltd");
        m.update_draft_field(VendorField::Contact, "9000000000");
        m.update_draft_field(VendorField::Rating, "3.9");
        m.update_draft_field(VendorField::Location, "Pune");
        m.update_draft_field(VendorField::Status, "Inactive");
        let draft = m.session().unwrap().draft.clone();

        m.save().unwrap();
        assert_eq!(m.len(), 4);

        let added = m.items().last().unwrap();
        let mut expected = draft;
        expected.id = added.id;
        assert_eq!(added, &expected);
    }

    #[test]
    fn test_edit_replaces_only_matching_record() {
        let mut m = EntityListManager::<Vendor>::new();
        let untouched: Vec<Vendor> = m.items().iter().filter(|v| v.id != VendorId(2)).cloned().collect();

        assert!(m.open_edit(&VendorId(2)));
        m.update_draft_field(VendorField::Rating, "4.9");
        m.update_draft_field(VendorField::Status, "Active");
        m.save().unwrap();

        assert_eq!(m.len(), 3);
        let edited = m.get(&VendorId(2)).unwrap();
        assert_eq!(edited.rating, 4.9);
        assert_eq!(edited.name, "AgriSupply Co.");
        let others: Vec<Vendor> = m.items().iter().filter(|v| v.id != VendorId(2)).cloned().collect();
        assert_eq!(others, untouched);
        // position preserved
        assert_eq!(m.items()[1].id, VendorId(2));
    }

    #[test]
    fn test_draft_does_not_leak_before_save() {
        let mut m = EntityListManager::<Category>::new();
        m.open_edit(&CategoryId(1));
        m.update_draft_field(CategoryField::Name, "Organic Fertilizers");
        assert_eq!(m.get(&CategoryId(1)).unwrap().name, "Fertilizers");
        m.cancel();
        assert!(!m.is_editing());
        assert_eq!(m.get(&CategoryId(1)).unwrap().name, "Fertilizers");
    }

    #[test]
    fn test_empty_name_keeps_session_open() {
        let mut m = EntityListManager::<Category>::new();
        m.open_add();
        m.update_draft_field(CategoryField::Products, "4");
        let err = m.save().unwrap_err();
        assert_eq!(
            err,
            ListError::Validation(ValidationError::MissingField {
                field: "Category Name"
            })
        );
        assert!(err.is_validation());
        assert_eq!(m.len(), 3);
        assert!(m.is_editing());
        assert_eq!(m.session().unwrap().draft.products, 4);
    }

    #[test]
    fn test_vendor_requires_contact() {
        let mut m = EntityListManager::<Vendor>::new();
        m.open_add();
        m.update_draft_field(VendorField::Name, "NoPhone Farms");
        assert!(m.save().is_err());
        assert_eq!(m.len(), 3);
        assert!(m.is_editing());

        m.update_draft_field(VendorField::Contact, "   ");
        assert!(m.save().is_err());

        m.update_draft_field(VendorField::Contact, "9111111111");
        assert!(m.save().is_ok());
        assert_eq!(m.len(), 4);
    }

    #[test]
    fn test_edit_of_vanished_record_reports_missing() {
        let mut m = EntityListManager::<Category>::new();
        m.open_edit(&CategoryId(2));
        m.delete(&CategoryId(2));
        let err = m.save().unwrap_err();
        assert_eq!(err, ListError::RecordMissing { id: "2".to_string() });
        assert!(m.is_editing());
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_save_without_session() {
        let mut m = EntityListManager::<Category>::new();
        assert_eq!(m.save(), Err(ListError::NoSession));
    }

    #[test]
    fn test_open_edit_unknown_id() {
        let mut m = EntityListManager::<Category>::new();
        assert!(!m.open_edit(&CategoryId(99)));
        assert!(!m.is_editing());
    }

    #[test]
    fn test_update_without_session_is_noop() {
        let mut m = EntityListManager::<Category>::new();
        m.update_draft_field(CategoryField::Name, "Ghost");
        assert!(!m.is_editing());
        assert!(m.items().iter().all(|c| c.name != "Ghost"));
    }

    #[test]
    fn test_sorted_view_leaves_items_order() {
        let m = EntityListManager::<Category>::new();
        let sorted: Vec<&str> = m
            .sorted_filtered_items(|a, b| a.name.cmp(&b.name))
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(sorted, vec!["Farm Equipment", "Fertilizers", "Seeds"]);
        assert_eq!(m.items()[0].name, "Fertilizers");
    }

    #[test]
    fn test_add_after_max_id_fails_without_looping() {
        let items = vec![Category {
            id: CategoryId(u32::MAX),
            name: "Overflow".into(),
            products: 0,
        }];
        let mut m = EntityListManager::with_items(items);
        m.open_add();
        m.update_draft_field(CategoryField::Name, "Seeds");
        assert_eq!(m.save(), Err(ListError::IdsExhausted));
        assert_eq!(m.len(), 1);
        assert!(m.is_editing());
    }
}
