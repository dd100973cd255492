//! Ordered collection of entities that never holds two *same* entities.

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};

/// An insertion-ordered list of entities, unique under [`Entity::is_same`].
///
/// Mutation only happens through the methods below; consumers get a read-only
/// slice via [`UniqueList::as_slice`] / [`UniqueList::iter`]. Order is kept
/// stable so list views render predictably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> UniqueList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from `items`, failing if any two are the same entity.
    pub fn from_vec(items: Vec<T>) -> DomainResult<Self> {
        let mut list = Self::new();
        list.set_all(items)?;
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether an element with the same identity as `item` is stored.
    pub fn contains(&self, item: &T) -> bool {
        self.contains_id(item.id())
    }

    pub fn contains_id(&self, id: &T::Id) -> bool {
        self.position(id).is_some()
    }

    /// Index of the element identified by `id`.
    pub fn position(&self, id: &T::Id) -> Option<usize> {
        self.items.iter().position(|it| it.id() == id)
    }

    /// Append `item`, rejecting identity collisions.
    pub fn add(&mut self, item: T) -> DomainResult<()> {
        if self.contains(&item) {
            return Err(DomainError::duplicate(T::KIND, item.id()));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn find(&self, id: &T::Id) -> DomainResult<&T> {
        self.items
            .iter()
            .find(|it| it.id() == id)
            .ok_or_else(|| DomainError::not_found(T::KIND, id))
    }

    /// Replace the element identified like `target` with `replacement`.
    ///
    /// `replacement` may keep the target's identity (edit in place) but must not
    /// take the identity of another stored element. Returns the replaced element.
    pub fn replace(&mut self, target: &T, replacement: T) -> DomainResult<T> {
        self.replace_by_id(target.id(), replacement)
    }

    pub fn replace_by_id(&mut self, id: &T::Id, replacement: T) -> DomainResult<T> {
        let index = self
            .position(id)
            .ok_or_else(|| DomainError::not_found(T::KIND, id))?;

        if replacement.id() != id && self.contains(&replacement) {
            return Err(DomainError::duplicate(T::KIND, replacement.id()));
        }

        Ok(core::mem::replace(&mut self.items[index], replacement))
    }

    /// Remove the element identified like `item`; other fields are ignored.
    pub fn remove(&mut self, item: &T) -> DomainResult<T> {
        self.remove_by_id(item.id())
    }

    pub fn remove_by_id(&mut self, id: &T::Id) -> DomainResult<T> {
        let index = self
            .position(id)
            .ok_or_else(|| DomainError::not_found(T::KIND, id))?;
        Ok(self.items.remove(index))
    }

    /// Replace the whole contents at once.
    ///
    /// Leaves the list untouched when `items` is not pairwise unique.
    pub fn set_all(&mut self, items: Vec<T>) -> DomainResult<()> {
        if !are_unique(&items) {
            return Err(DomainError::DuplicateEntries(T::KIND));
        }
        self.items = items;
        Ok(())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> From<UniqueList<T>> for Vec<T> {
    fn from(list: UniqueList<T>) -> Self {
        list.items
    }
}

/// Pairwise identity check (quadratic; lists are small).
pub fn are_unique<T: Entity>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(i, a)| items[i + 1..].iter().all(|b| !a.is_same(b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EntityKind;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Item {
        key: u32,
        label: &'static str,
    }

    impl Entity for Item {
        type Id = u32;
        const KIND: EntityKind = EntityKind::Guest;

        fn id(&self) -> &u32 {
            &self.key
        }
    }

    fn item(key: u32, label: &'static str) -> Item {
        Item { key, label }
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut list = UniqueList::new();
        list.add(item(3, "c")).unwrap();
        list.add(item(1, "a")).unwrap();
        list.add(item(2, "b")).unwrap();

        let keys: Vec<u32> = list.iter().map(|it| it.key).collect();
        assert_eq!(keys, vec![3, 1, 2]);
    }

    #[test]
    fn add_rejects_same_identity_even_if_fields_differ() {
        let mut list = UniqueList::new();
        list.add(item(1, "a")).unwrap();

        let err = list.add(item(1, "other")).unwrap_err();
        match err {
            DomainError::Duplicate { kind, key } => {
                assert_eq!(kind, EntityKind::Guest);
                assert_eq!(key, "1");
            }
            _ => panic!("Expected Duplicate error"),
        }
        assert_eq!(list.as_slice(), &[item(1, "a")]);
    }

    #[test]
    fn find_misses_with_not_found() {
        let list: UniqueList<Item> = UniqueList::new();
        assert!(list.find(&9).unwrap_err().is_not_found());
    }

    #[test]
    fn replace_onto_itself_is_an_edit_in_place() {
        let mut list = UniqueList::from_vec(vec![item(1, "a"), item(2, "b")]).unwrap();

        let old = list.replace(&item(1, "ignored"), item(1, "edited")).unwrap();
        assert_eq!(old, item(1, "a"));
        assert_eq!(list.as_slice(), &[item(1, "edited"), item(2, "b")]);
    }

    #[test]
    fn replace_can_change_identity_to_a_free_key() {
        let mut list = UniqueList::from_vec(vec![item(1, "a"), item(2, "b")]).unwrap();

        list.replace(&item(1, "a"), item(5, "a")).unwrap();
        assert_eq!(list.as_slice(), &[item(5, "a"), item(2, "b")]);
    }

    #[test]
    fn replace_rejects_collision_with_another_element() {
        let mut list = UniqueList::from_vec(vec![item(1, "a"), item(2, "b")]).unwrap();

        let err = list.replace(&item(1, "a"), item(2, "x")).unwrap_err();
        assert!(matches!(err, DomainError::Duplicate { .. }));
        assert_eq!(list.as_slice(), &[item(1, "a"), item(2, "b")]);
    }

    #[test]
    fn replace_missing_target_is_not_found() {
        let mut list = UniqueList::from_vec(vec![item(1, "a")]).unwrap();
        let err = list.replace(&item(4, "d"), item(4, "d")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn remove_uses_identity_only() {
        let mut list = UniqueList::from_vec(vec![item(1, "a"), item(2, "b")]).unwrap();

        let removed = list.remove(&item(1, "whatever")).unwrap();
        assert_eq!(removed, item(1, "a"));
        assert_eq!(list.as_slice(), &[item(2, "b")]);

        assert!(list.remove(&item(1, "a")).unwrap_err().is_not_found());
    }

    #[test]
    fn set_all_rejects_duplicates_and_keeps_old_contents() {
        let mut list = UniqueList::from_vec(vec![item(1, "a")]).unwrap();

        let err = list
            .set_all(vec![item(2, "b"), item(3, "c"), item(2, "z")])
            .unwrap_err();
        assert_eq!(err, DomainError::DuplicateEntries(EntityKind::Guest));
        assert_eq!(list.as_slice(), &[item(1, "a")]);

        list.set_all(vec![item(2, "b"), item(3, "c")]).unwrap();
        assert_eq!(list.len(), 2);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: no sequence of adds ever stores two same entities,
            /// and a rejected add leaves the list unchanged.
            #[test]
            fn adds_preserve_uniqueness(keys in proptest::collection::vec(0u32..20, 0..60)) {
                let mut list = UniqueList::new();
                for key in keys {
                    let before = list.clone();
                    match list.add(item(key, "x")) {
                        Ok(()) => prop_assert!(!before.contains_id(&key)),
                        Err(err) => {
                            prop_assert!(err.is_duplicate());
                            prop_assert_eq!(&list, &before);
                        }
                    }
                    prop_assert!(are_unique(list.as_slice()));
                }
            }

            /// Property: lookups never mutate and always agree with each other.
            #[test]
            fn find_is_idempotent(keys in proptest::collection::btree_set(0u32..50, 0..20), probe in 0u32..50) {
                let items: Vec<Item> = keys.iter().map(|k| item(*k, "x")).collect();
                let list = UniqueList::from_vec(items).unwrap();
                let snapshot = list.clone();

                let first = list.find(&probe).cloned();
                let second = list.find(&probe).cloned();
                prop_assert_eq!(first, second);
                prop_assert_eq!(&list, &snapshot);
            }
        }
    }
}
