//! Domain error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Which kind of entity collection an error refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Guest,
    Table,
    Wedding,
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            EntityKind::Guest => "guest",
            EntityKind::Table => "table",
            EntityKind::Wedding => "wedding",
        })
    }
}

/// Domain-level error.
///
/// Every variant is recoverable: the calling layer is expected to render it
/// as a user-facing message and carry on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An aggregate invariant would be violated by the requested change.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An entity with the same identity already exists.
    #[error("{kind} `{key}` already exists")]
    Duplicate { kind: EntityKind, key: String },

    /// A bulk replacement contained two entities with the same identity.
    #[error("operation would result in duplicate {0}s")]
    DuplicateEntries(EntityKind),

    /// A key lookup missed.
    #[error("{kind} `{key}` not found")]
    NotFound { kind: EntityKind, key: String },

    /// The table has no free seat left.
    #[error("table {table} is full (capacity {capacity})")]
    TableFull { table: String, capacity: u32 },

    /// A wedding-scoped operation was requested without a selected wedding.
    #[error("no wedding is currently selected")]
    NoCurrentWedding,

    /// Stored data could not be turned back into a valid model.
    #[error("illegal stored data: {0}")]
    DataLoad(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn duplicate(kind: EntityKind, key: impl ToString) -> Self {
        Self::Duplicate {
            kind,
            key: key.to_string(),
        }
    }

    pub fn not_found(kind: EntityKind, key: impl ToString) -> Self {
        Self::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    pub fn table_full(table: impl ToString, capacity: u32) -> Self {
        Self::TableFull {
            table: table.to_string(),
            capacity,
        }
    }

    pub fn data_load(msg: impl Into<String>) -> Self {
        Self::DataLoad(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. } | Self::DuplicateEntries(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_entity_and_key() {
        let err = DomainError::not_found(EntityKind::Table, 7);
        assert_eq!(err.to_string(), "table `7` not found");

        let err = DomainError::duplicate(EntityKind::Guest, "Alice");
        assert_eq!(err.to_string(), "guest `Alice` already exists");

        let err = DomainError::table_full(3, 8);
        assert_eq!(err.to_string(), "table 3 is full (capacity 8)");
    }

    #[test]
    fn predicates_classify_variants() {
        assert!(DomainError::not_found(EntityKind::Wedding, "W").is_not_found());
        assert!(DomainError::duplicate(EntityKind::Wedding, "W").is_duplicate());
        assert!(DomainError::DuplicateEntries(EntityKind::Guest).is_duplicate());
        assert!(!DomainError::NoCurrentWedding.is_not_found());
    }
}
