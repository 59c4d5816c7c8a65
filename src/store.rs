//! The extension store: owner of the collection and the current filter.
//!
//! All mutation goes through [`ExtensionStore::dispatch`] or the three intent
//! methods it forwards to. The visible list is recomputed on every read so it
//! can never lag behind a mutation.

use crate::catalog::{self, Extension, ExtensionId};
use crate::error::ManagerResult;
use crate::filter::{self, Filter};

/// A user request to change the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    SetFilter(Filter),
    Delete(ExtensionId),
    Toggle(ExtensionId),
}

/// Number of extensions each filter would show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterCounts {
    pub all: usize,
    pub active: usize,
    pub inactive: usize,
}

impl FilterCounts {
    pub fn get(&self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.all,
            Filter::Active => self.active,
            Filter::Inactive => self.inactive,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExtensionStore {
    extensions: Vec<Extension>,
    filter: Filter,
    // Bumped on every change that alters state
    version: u64,
}

impl ExtensionStore {
    /// Build a store over `extensions`, rejecting duplicate ids.
    pub fn new(extensions: Vec<Extension>) -> ManagerResult<Self> {
        Self::with_filter(extensions, Filter::All)
    }

    pub fn with_filter(extensions: Vec<Extension>, filter: Filter) -> ManagerResult<Self> {
        catalog::validate(&extensions)?;
        Ok(Self {
            extensions,
            filter,
            version: 0,
        })
    }

    /// Store seeded with the compiled-in catalog.
    pub fn builtin(filter: Filter) -> Self {
        Self {
            extensions: catalog::builtin(),
            filter,
            version: 0,
        }
    }

    /// Apply one intent in full.
    pub fn dispatch(&mut self, intent: Intent) {
        log::debug!("Dispatching {:?}", intent);
        match intent {
            Intent::SetFilter(filter) => self.set_filter(filter),
            Intent::Delete(id) => self.delete_extension(id),
            Intent::Toggle(id) => self.toggle_extension(id),
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        if self.filter != filter {
            self.filter = filter;
            self.version += 1;
        }
    }

    /// Remove the extension with `id`. Unknown ids are ignored.
    pub fn delete_extension(&mut self, id: ExtensionId) {
        let before = self.extensions.len();
        self.extensions.retain(|e| e.id != id);
        if self.extensions.len() != before {
            self.version += 1;
        }
    }

    /// Flip `is_active` on the extension with `id`. Unknown ids are ignored.
    ///
    /// Toggling can move an extension out of the visible list when the
    /// current filter is `Active` or `Inactive`.
    pub fn toggle_extension(&mut self, id: ExtensionId) {
        if let Some(ext) = self.extensions.iter_mut().find(|e| e.id == id) {
            ext.is_active = !ext.is_active;
            self.version += 1;
        }
    }

    /// Extensions passing the current filter, in collection order.
    pub fn visible_extensions(&self) -> Vec<&Extension> {
        filter::apply(&self.extensions, self.filter)
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// The full collection regardless of filter.
    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    pub fn get(&self, id: ExtensionId) -> Option<&Extension> {
        self.extensions.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn counts(&self) -> FilterCounts {
        let active = self.extensions.iter().filter(|e| e.is_active).count();
        FilterCounts {
            all: self.extensions.len(),
            active,
            inactive: self.extensions.len() - active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ManagerError;

    fn two_item_store() -> ExtensionStore {
        ExtensionStore::new(vec![
            Extension::new(1, "A", "", "", true),
            Extension::new(2, "B", "", "", false),
        ])
        .unwrap()
    }

    fn visible_ids(store: &ExtensionStore) -> Vec<u32> {
        store.visible_extensions().iter().map(|e| e.id.0).collect()
    }

    #[test]
    fn test_all_filter_shows_collection_in_order() {
        let store = ExtensionStore::builtin(Filter::All);
        let expected: Vec<u32> = catalog::builtin().iter().map(|e| e.id.0).collect();
        assert_eq!(visible_ids(&store), expected);
    }

    #[test]
    fn test_toggle_hides_item_under_active_filter() {
        let mut store = two_item_store();

        store.dispatch(Intent::SetFilter(Filter::Active));
        assert_eq!(visible_ids(&store), vec![1]);

        store.dispatch(Intent::Toggle(ExtensionId(1)));
        assert!(store.visible_extensions().is_empty());

        store.dispatch(Intent::SetFilter(Filter::All));
        let visible = store.visible_extensions();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].id, ExtensionId(1));
        assert!(!visible[0].is_active);
        assert_eq!(visible[1].id, ExtensionId(2));
        assert!(!visible[1].is_active);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = ExtensionStore::builtin(Filter::All);
        store.set_filter(Filter::Active);
        let before: Vec<Extension> = store.extensions().to_vec();
        let visible_before = visible_ids(&store);
        let version = store.version();

        store.dispatch(Intent::Delete(ExtensionId(999)));

        assert_eq!(store.extensions(), before.as_slice());
        assert_eq!(visible_ids(&store), visible_before);
        assert_eq!(store.version(), version);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut once = ExtensionStore::builtin(Filter::All);
        once.delete_extension(ExtensionId(3));

        let mut twice = ExtensionStore::builtin(Filter::All);
        twice.delete_extension(ExtensionId(3));
        twice.delete_extension(ExtensionId(3));

        assert_eq!(once.extensions(), twice.extensions());
        assert!(once.get(ExtensionId(3)).is_none());
    }

    #[test]
    fn test_delete_preserves_relative_order() {
        let mut store = ExtensionStore::builtin(Filter::All);
        store.delete_extension(ExtensionId(5));

        let ids: Vec<u32> = store.extensions().iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 6, 7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_toggle_is_self_inverse() {
        let original = catalog::builtin();
        let mut store = ExtensionStore::new(original.clone()).unwrap();

        store.toggle_extension(ExtensionId(4));
        assert_eq!(
            store.get(ExtensionId(4)).map(|e| e.is_active),
            Some(!original[3].is_active)
        );
        // Only the toggled entry changes
        for (a, b) in store.extensions().iter().zip(&original) {
            if a.id != ExtensionId(4) {
                assert_eq!(a, b);
            }
        }

        store.toggle_extension(ExtensionId(4));
        assert_eq!(store.extensions(), original.as_slice());
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut store = two_item_store();
        store.toggle_extension(ExtensionId(42));
        assert_eq!(store.version(), 0);
        assert_eq!(store.counts().active, 1);
    }

    #[test]
    fn test_filter_switch_does_not_mutate_collection() {
        let mut store = ExtensionStore::builtin(Filter::All);
        store.set_filter(Filter::Inactive);
        let before = visible_ids(&store);
        let collection = store.extensions().to_vec();

        store.set_filter(Filter::Active);
        store.set_filter(Filter::Inactive);

        assert_eq!(visible_ids(&store), before);
        assert_eq!(store.extensions(), collection.as_slice());
    }

    #[test]
    fn test_set_same_filter_keeps_version() {
        let mut store = two_item_store();
        store.set_filter(Filter::All);
        assert_eq!(store.version(), 0);
        store.set_filter(Filter::Inactive);
        assert_eq!(store.version(), 1);
        assert_eq!(store.filter(), Filter::Inactive);
    }

    #[test]
    fn test_counts_track_mutations() {
        let mut store = two_item_store();
        assert_eq!(
            store.counts(),
            FilterCounts {
                all: 2,
                active: 1,
                inactive: 1
            }
        );

        store.toggle_extension(ExtensionId(2));
        assert_eq!(store.counts().get(Filter::Active), 2);

        store.delete_extension(ExtensionId(1));
        assert_eq!(store.counts().get(Filter::All), 1);
        assert_eq!(store.counts().get(Filter::Inactive), 0);
    }

    #[test]
    fn test_delete_everything() {
        let mut store = two_item_store();
        store.dispatch(Intent::Delete(ExtensionId(1)));
        store.dispatch(Intent::Delete(ExtensionId(2)));
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.visible_extensions().is_empty());
    }

    #[test]
    fn test_with_initial_filter() {
        let store = ExtensionStore::builtin(Filter::Inactive);
        assert!(store.visible_extensions().iter().all(|e| !e.is_active));
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let result = ExtensionStore::new(vec![
            Extension::new(1, "A", "", "", true),
            Extension::new(1, "B", "", "", true),
        ]);

        match result {
            Err(ManagerError::DuplicateId(id)) => assert_eq!(id, ExtensionId(1)),
            other => panic!("Expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn test_builtin_matches_validated_catalog() {
        let validated = ExtensionStore::new(catalog::builtin()).unwrap();
        let builtin = ExtensionStore::builtin(Filter::All);
        assert_eq!(validated.extensions(), builtin.extensions());
    }
}
