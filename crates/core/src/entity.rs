//! Entity trait: identity + continuity across state changes.

use crate::error::EntityKind;

/// Entity marker + minimal interface.
///
/// Two entities are *the same entity* when their identifiers are equal, even
/// if every other attribute differs. Full equality (`PartialEq`) is a separate,
/// stronger notion.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::fmt::Debug + core::fmt::Display;

    /// Which collection this entity lives in (used when reporting errors).
    const KIND: EntityKind;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Weak (identity) equality.
    fn is_same(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
