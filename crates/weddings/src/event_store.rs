//! Collection of all weddings, with copy-on-write updates.

use wedplan_core::{DomainError, DomainResult, UniqueList};

use crate::wedding::{Wedding, WeddingName};

/// Top-level container of weddings, unique by [`WeddingName`].
///
/// Weddings are stored as snapshots; [`EventStore::update_wedding`] edits a
/// copy and publishes it back only when the edit succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStore {
    weddings: UniqueList<Wedding>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.weddings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weddings.is_empty()
    }

    pub fn weddings(&self) -> &[Wedding] {
        self.weddings.as_slice()
    }

    pub fn has_wedding(&self, name: &WeddingName) -> bool {
        self.weddings.contains_id(name)
    }

    pub fn add_wedding(&mut self, wedding: Wedding) -> DomainResult<()> {
        let name = wedding.name().clone();
        self.weddings.add(wedding)?;
        tracing::debug!(wedding = %name, "wedding created");
        Ok(())
    }

    /// Create an empty wedding named `name`.
    pub fn create_wedding(&mut self, name: WeddingName) -> DomainResult<()> {
        self.add_wedding(Wedding::new(name))
    }

    pub fn find_wedding(&self, name: &WeddingName) -> DomainResult<&Wedding> {
        self.weddings.find(name)
    }

    pub fn delete_wedding(&mut self, name: &WeddingName) -> DomainResult<Wedding> {
        let removed = self.weddings.remove_by_id(name)?;
        tracing::debug!(wedding = %name, "wedding deleted");
        Ok(removed)
    }

    pub fn replace_wedding(&mut self, target: &Wedding, edited: Wedding) -> DomainResult<Wedding> {
        self.weddings.replace(target, edited)
    }

    /// Give a wedding a new (unused) name, keeping its guests and tables.
    pub fn rename_wedding(&mut self, name: &WeddingName, new_name: WeddingName) -> DomainResult<()> {
        let current = self.weddings.find(name)?.clone();
        self.weddings.replace_by_id(name, current.with_name(new_name))?;
        Ok(())
    }

    /// Apply `op` to the wedding named `name`.
    ///
    /// The change is published only if `op` succeeds. `op` must not rename the
    /// wedding; use [`EventStore::rename_wedding`] for that.
    pub fn update_wedding<T>(
        &mut self,
        name: &WeddingName,
        op: impl FnOnce(&mut Wedding) -> DomainResult<T>,
    ) -> DomainResult<T> {
        let mut draft = self.weddings.find(name)?.clone();
        let out = op(&mut draft)?;
        if draft.name() != name {
            return Err(DomainError::invariant(format!(
                "wedding `{name}` cannot be renamed while editing it"
            )));
        }
        self.weddings.replace_by_id(name, draft)?;
        Ok(out)
    }

    /// Bulk replace (storage path); fails if two weddings share a name.
    pub fn set_weddings(&mut self, weddings: Vec<Wedding>) -> DomainResult<()> {
        self.weddings.set_all(weddings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wedding::tests::{guest, name, wedding};
    use wedplan_core::EntityKind;

    fn wname(raw: &str) -> WeddingName {
        WeddingName::new(raw).unwrap()
    }

    #[test]
    fn create_then_find_and_delete() {
        let mut store = EventStore::new();
        store.create_wedding(wname("W")).unwrap();
        assert!(store.has_wedding(&wname("W")));

        assert!(store.create_wedding(wname("W")).unwrap_err().is_duplicate());

        store.delete_wedding(&wname("W")).unwrap();
        let err = store.find_wedding(&wname("W")).unwrap_err();
        assert_eq!(err, DomainError::not_found(EntityKind::Wedding, "W"));
        assert!(store.delete_wedding(&wname("W")).unwrap_err().is_not_found());
    }

    #[test]
    fn update_wedding_publishes_only_on_success() {
        let mut store = EventStore::new();
        store.add_wedding(wedding("W")).unwrap();

        store
            .update_wedding(&wname("W"), |w| w.add_guest(guest("Alice")))
            .unwrap();
        assert!(store.find_wedding(&wname("W")).unwrap().has_guest(&name("Alice")));

        let err = store
            .update_wedding(&wname("W"), |w| {
                w.add_guest(guest("Bob"))?;
                w.add_guest(guest("Alice"))
            })
            .unwrap_err();
        assert!(err.is_duplicate());
        assert!(!store.find_wedding(&wname("W")).unwrap().has_guest(&name("Bob")));
    }

    #[test]
    fn update_wedding_refuses_renames() {
        let mut store = EventStore::new();
        store.add_wedding(wedding("W")).unwrap();

        let err = store
            .update_wedding(&wname("W"), |w| {
                *w = w.clone().with_name(wname("V"));
                Ok(())
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert!(store.has_wedding(&wname("W")));
    }

    #[test]
    fn rename_wedding_keeps_contents_and_checks_collisions() {
        let mut store = EventStore::new();
        store.add_wedding(wedding("W")).unwrap();
        store.add_wedding(wedding("X")).unwrap();
        store
            .update_wedding(&wname("W"), |w| w.add_guest(guest("Alice")))
            .unwrap();

        assert!(store.rename_wedding(&wname("W"), wname("X")).unwrap_err().is_duplicate());

        store.rename_wedding(&wname("W"), wname("V")).unwrap();
        assert!(!store.has_wedding(&wname("W")));
        assert!(store.find_wedding(&wname("V")).unwrap().has_guest(&name("Alice")));
        assert_eq!(store.weddings()[0].name(), &wname("V"));
    }

    #[test]
    fn replace_wedding_swaps_snapshot() {
        let mut store = EventStore::new();
        store.add_wedding(wedding("W")).unwrap();

        let mut edited = wedding("W");
        edited.add_guest(guest("Alice")).unwrap();
        let old = store.replace_wedding(&wedding("W"), edited).unwrap();

        assert!(old.guests().is_empty());
        assert!(store.find_wedding(&wname("W")).unwrap().has_guest(&name("Alice")));
        assert!(store.replace_wedding(&wedding("Z"), wedding("Z")).unwrap_err().is_not_found());
    }

    #[test]
    fn set_weddings_rejects_duplicate_names() {
        let mut store = EventStore::new();
        let err = store
            .set_weddings(vec![wedding("W"), wedding("W")])
            .unwrap_err();
        assert_eq!(err, DomainError::DuplicateEntries(EntityKind::Wedding));
        assert!(store.is_empty());
    }
}
