//! Flat storage records and JSON file persistence.
//!
//! `Stored*` types mirror the model with raw field values. Turning them back
//! into a model re-runs every constructor and bulk-load check; whatever goes
//! wrong first is reported as a single [`DomainError::DataLoad`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use wedplan_core::{DomainError, DomainResult, ValueObject};
use wedplan_guests::{
    Address, ContactInfo, DietaryRestriction, Email, Guest, Name, Phone, RsvpStatus, TableId, Tag,
};
use wedplan_seating::{Capacity, Table};

use crate::event_store::EventStore;
use crate::wedding::{Wedding, WeddingName};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredGuest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub dietary: String,
    #[serde(default)]
    pub rsvp: String,
    /// Seated table; absent or `-1` means unseated.
    #[serde(default)]
    pub table_id: Option<i64>,
}

/// Stored marker for "not seated", accepted on read alongside an absent field.
const UNSEATED: i64 = -1;

impl From<&Guest> for StoredGuest {
    fn from(guest: &Guest) -> Self {
        Self {
            name: guest.name().to_string(),
            phone: guest.phone().to_string(),
            email: guest.email().to_string(),
            address: guest.address().to_string(),
            tags: guest.tags().iter().map(ToString::to_string).collect(),
            dietary: guest.dietary().to_string(),
            rsvp: guest.rsvp().to_string(),
            table_id: guest.table_id().map(|id| i64::from(id.get())),
        }
    }
}

impl StoredGuest {
    pub fn to_model(&self) -> DomainResult<Guest> {
        let contact = ContactInfo {
            phone: Phone::new(&self.phone)?,
            email: Email::new(&self.email)?,
            address: Address::new(&self.address)?,
        };
        let tags = self
            .tags
            .iter()
            .map(|t| Tag::new(t))
            .collect::<DomainResult<Vec<_>>>()?;
        let table_id = match self.table_id {
            None | Some(UNSEATED) => None,
            Some(raw) => {
                let raw = u32::try_from(raw).map_err(|_| {
                    DomainError::validation(format!(
                        "table id `{raw}` should be a positive number, or {UNSEATED} for unseated"
                    ))
                })?;
                Some(TableId::new(raw)?)
            }
        };

        Ok(Guest::new(Name::new(&self.name)?, contact)
            .with_tags(tags)
            .with_dietary(parse_field::<DietaryRestriction>(&self.dietary)?)
            .with_rsvp(parse_field::<RsvpStatus>(&self.rsvp)?)
            .with_table_id(table_id))
    }
}

/// A table with its members referenced by guest name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTable {
    pub id: u32,
    pub capacity: u32,
    #[serde(default)]
    pub guests: Vec<String>,
}

impl From<&Table> for StoredTable {
    fn from(table: &Table) -> Self {
        Self {
            id: table.id().get(),
            capacity: table.capacity().get(),
            guests: table.guests().iter().map(|g| g.name().to_string()).collect(),
        }
    }
}

impl StoredTable {
    /// Rebuild the table, resolving member names against `guests`.
    pub fn to_model(&self, guests: &[Guest]) -> DomainResult<Table> {
        let id = TableId::new(self.id)?;
        let capacity = Capacity::new(self.capacity)?;
        let members = self
            .guests
            .iter()
            .map(|raw| {
                let name = Name::new(raw)?;
                guests
                    .iter()
                    .find(|g| g.name() == &name)
                    .cloned()
                    .ok_or_else(|| {
                        DomainError::invariant(format!(
                            "table {id} seats `{name}` who is not on the guest list"
                        ))
                    })
            })
            .collect::<DomainResult<Vec<_>>>()?;
        Table::with_members(id, capacity, members)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredWedding {
    pub name: String,
    #[serde(default)]
    pub guests: Vec<StoredGuest>,
    #[serde(default)]
    pub tables: Vec<StoredTable>,
}

impl From<&Wedding> for StoredWedding {
    fn from(wedding: &Wedding) -> Self {
        Self {
            name: wedding.name().to_string(),
            guests: wedding.guests().iter().map(StoredGuest::from).collect(),
            tables: wedding.tables().iter().map(StoredTable::from).collect(),
        }
    }
}

impl StoredWedding {
    pub fn to_model(&self) -> DomainResult<Wedding> {
        self.build()
            .map_err(|e| into_load_error(e, Some(self.name.as_str())))
    }

    fn build(&self) -> DomainResult<Wedding> {
        let name = WeddingName::new(&self.name)?;
        let guests = self
            .guests
            .iter()
            .map(StoredGuest::to_model)
            .collect::<DomainResult<Vec<_>>>()?;
        let tables = self
            .tables
            .iter()
            .map(|t| t.to_model(&guests))
            .collect::<DomainResult<Vec<_>>>()?;
        Wedding::from_parts(name, guests, tables)
    }
}

/// Top-level document written to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEventStore {
    #[serde(default)]
    pub weddings: Vec<StoredWedding>,
}

impl From<&EventStore> for StoredEventStore {
    fn from(store: &EventStore) -> Self {
        Self {
            weddings: store.weddings().iter().map(StoredWedding::from).collect(),
        }
    }
}

impl StoredEventStore {
    pub fn to_model(&self) -> DomainResult<EventStore> {
        let weddings = self
            .weddings
            .iter()
            .map(StoredWedding::to_model)
            .collect::<DomainResult<Vec<_>>>()?;
        let mut store = EventStore::new();
        store
            .set_weddings(weddings)
            .map_err(|e| into_load_error(e, None))?;
        Ok(store)
    }
}

fn parse_field<T: ValueObject>(raw: &str) -> DomainResult<T> {
    raw.parse()
}

fn into_load_error(err: DomainError, wedding: Option<&str>) -> DomainError {
    match (err, wedding) {
        (err @ DomainError::DataLoad(_), _) => err,
        (err, Some(name)) => DomainError::data_load(format!("wedding `{name}`: {err}")),
        (err, None) => DomainError::data_load(err.to_string()),
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Data(#[from] DomainError),
}

/// Reads and writes an [`EventStore`] as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the store; `Ok(None)` if the file does not exist yet.
    pub fn read(&self) -> Result<Option<EventStore>, StorageError> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "data file not found");
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let stored: StoredEventStore = serde_json::from_str(&raw)?;
        let store = stored.to_model()?;
        tracing::debug!(path = %self.path.display(), weddings = store.len(), "data file loaded");
        Ok(Some(store))
    }

    pub fn save(&self, store: &EventStore) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&StoredEventStore::from(store))?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), weddings = store.len(), "data file saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wedding::tests::{guest, id, name, table, wedding};

    fn stored_guest(name: &str, table_id: Option<i64>) -> StoredGuest {
        StoredGuest {
            name: name.to_string(),
            phone: "94351253".to_string(),
            email: "guest@example.com".to_string(),
            address: "123, Jurong West Ave 6".to_string(),
            tags: vec!["friends".to_string()],
            dietary: "vegan".to_string(),
            rsvp: "yes".to_string(),
            table_id,
        }
    }

    #[test]
    fn stored_guest_validates_fields() {
        let guest = stored_guest("Alice", Some(2)).to_model().unwrap();
        assert_eq!(guest.table_id(), Some(id(2)));
        assert_eq!(guest.dietary(), &DietaryRestriction::Vegan);

        let mut bad = stored_guest("Alice", None);
        bad.phone = "12".to_string();
        assert!(matches!(bad.to_model(), Err(DomainError::Validation(_))));

        assert!(stored_guest("Alice", Some(0)).to_model().is_err());
    }

    #[test]
    fn minus_one_table_id_reads_as_unseated() {
        let json = r#"{"weddings":[{"name":"W","guests":[{"name":"Alice","phone":"123","email":"a@bc","address":"x","table_id":-1}]}]}"#;
        let stored: StoredEventStore = serde_json::from_str(json).unwrap();
        let store = stored.to_model().unwrap();
        let alice = store.weddings()[0].find_guest(&name("Alice")).unwrap();
        assert_eq!(alice.table_id(), None);
    }

    #[test]
    fn other_non_positive_or_oversized_table_ids_fail_to_load() {
        for raw in [0, -5, i64::from(u32::MAX) + 1] {
            assert!(
                matches!(stored_guest("Alice", Some(raw)).to_model(), Err(DomainError::Validation(_))),
                "table id {raw} should be rejected"
            );

            let stored = StoredWedding {
                name: "W".to_string(),
                guests: vec![stored_guest("Alice", Some(raw))],
                tables: vec![],
            };
            match stored.to_model().unwrap_err() {
                DomainError::DataLoad(msg) => assert!(msg.contains("wedding `W`")),
                other => panic!("Expected DataLoad error, got {other:?}"),
            }
        }
    }

    #[test]
    fn duplicate_guests_surface_as_single_data_load_error() {
        let stored = StoredWedding {
            name: "W".to_string(),
            guests: vec![stored_guest("Alice", None), stored_guest("Alice", None)],
            tables: vec![],
        };
        match stored.to_model().unwrap_err() {
            DomainError::DataLoad(msg) => assert!(msg.contains("wedding `W`")),
            other => panic!("Expected DataLoad error, got {other:?}"),
        }
    }

    #[test]
    fn table_members_must_be_known_guests() {
        let stored = StoredWedding {
            name: "W".to_string(),
            guests: vec![],
            tables: vec![StoredTable {
                id: 1,
                capacity: 2,
                guests: vec!["Ghost".to_string()],
            }],
        };
        assert!(matches!(stored.to_model(), Err(DomainError::DataLoad(_))));
    }

    #[test]
    fn over_capacity_table_is_rejected() {
        let stored = StoredWedding {
            name: "W".to_string(),
            guests: vec![stored_guest("Alice", Some(1)), stored_guest("Bob", Some(1))],
            tables: vec![StoredTable {
                id: 1,
                capacity: 1,
                guests: vec!["Alice".to_string(), "Bob".to_string()],
            }],
        };
        assert!(matches!(stored.to_model(), Err(DomainError::DataLoad(_))));
    }

    #[test]
    fn duplicate_wedding_names_are_rejected() {
        let w = StoredWedding {
            name: "W".to_string(),
            guests: vec![],
            tables: vec![],
        };
        let stored = StoredEventStore {
            weddings: vec![w.clone(), w],
        };
        assert!(matches!(stored.to_model(), Err(DomainError::DataLoad(_))));
    }

    #[test]
    fn flattening_and_rebuilding_reproduces_wedding() {
        let mut w = wedding("W");
        w.add_table(table(1, 2)).unwrap();
        w.add_table(table(2, 2)).unwrap();
        for g in ["Alice", "Bob", "Carl"] {
            w.add_guest(guest(g)).unwrap();
        }
        w.seat_guest(&name("Alice"), id(2)).unwrap();
        w.seat_guest(&name("Bob"), id(2)).unwrap();

        let rebuilt = StoredWedding::from(&w).to_model().unwrap();
        assert_eq!(rebuilt, w);
    }

    #[test]
    fn custom_dietary_needs_survive_rebuilding() {
        let mut w = wedding("W");
        for (g, text) in [("Alice", " kosher "), ("Bob", "no nuts"), ("Carl", "Vegan-ish")] {
            let diet = DietaryRestriction::other(text).unwrap();
            w.add_guest(guest(g).with_dietary(diet)).unwrap();
        }

        let rebuilt = StoredWedding::from(&w).to_model().unwrap();
        assert_eq!(rebuilt, w);
        assert_eq!(rebuilt.find_guest(&name("Alice")).unwrap().dietary().to_string(), "kosher");
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let json = r#"{"weddings":[{"name":"W","guests":[{"name":"Alice","phone":"123","email":"a@bc","address":"x"}]}]}"#;
        let stored: StoredEventStore = serde_json::from_str(json).unwrap();
        let store = stored.to_model().unwrap();
        let alice = store.weddings()[0].find_guest(&name("Alice")).unwrap();
        assert_eq!(alice.rsvp(), RsvpStatus::NoResponse);
        assert!(!alice.is_seated());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn any_dietary_text_survives_rebuilding(raw in ".{0,24}", seated in any::<bool>()) {
                let diet: DietaryRestriction = raw.parse().unwrap();
                let mut w = wedding("W");
                w.add_table(table(1, 2)).unwrap();
                w.add_guest(guest("Alice").with_dietary(diet)).unwrap();
                if seated {
                    w.seat_guest(&name("Alice"), id(1)).unwrap();
                }

                let rebuilt = StoredWedding::from(&w).to_model().unwrap();
                prop_assert_eq!(rebuilt, w);
            }
        }
    }
}
