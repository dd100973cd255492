//! Tables and their capacity.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use wedplan_core::{DomainError, DomainResult, Entity, EntityKind, UniqueList, ValueObject};
use wedplan_guests::{Guest, Name, TableId};

/// Number of seats at a table, `1..=Capacity::MAX`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Capacity(u32);

impl Capacity {
    /// Largest table the venue can set up.
    pub const MAX: u32 = 50;

    pub fn new(value: u32) -> DomainResult<Self> {
        if value == 0 || value > Self::MAX {
            return Err(DomainError::validation(format!(
                "table capacity must be between 1 and {}",
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for Capacity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Capacity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|_| DomainError::validation(format!("capacity `{s}` is not a positive integer")))?;
        Self::new(value)
    }
}

impl TryFrom<u32> for Capacity {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Capacity> for u32 {
    fn from(value: Capacity) -> Self {
        value.0
    }
}

impl ValueObject for Capacity {}

/// A seating table: an id, a capacity and the guests seated at it.
///
/// Tables are immutable snapshots. Membership changes return a new `Table`
/// which the owner publishes in place of the old one.
///
/// Invariants:
/// - `occupancy() <= capacity()`
/// - every member's `table_id()` is `Some(self.id())`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    id: TableId,
    capacity: Capacity,
    guests: UniqueList<Guest>,
}

impl Table {
    /// An empty table.
    pub fn new(id: TableId, capacity: Capacity) -> Self {
        Self {
            id,
            capacity,
            guests: UniqueList::new(),
        }
    }

    /// Rebuild a table with existing members (storage path).
    pub fn with_members(id: TableId, capacity: Capacity, guests: Vec<Guest>) -> DomainResult<Self> {
        if guests.len() > capacity.get() as usize {
            return Err(DomainError::table_full(id, capacity.get()));
        }
        if let Some(stray) = guests.iter().find(|g| g.table_id() != Some(id)) {
            return Err(DomainError::invariant(format!(
                "guest `{}` is listed at table {id} but assigned to {}",
                stray.name(),
                describe_seat(stray.table_id())
            )));
        }
        Ok(Self {
            id,
            capacity,
            guests: UniqueList::from_vec(guests)?,
        })
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn guests(&self) -> &[Guest] {
        self.guests.as_slice()
    }

    pub fn occupancy(&self) -> usize {
        self.guests.len()
    }

    pub fn has_room(&self) -> bool {
        self.occupancy() < self.capacity.get() as usize
    }

    pub fn is_full(&self) -> bool {
        !self.has_room()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    pub fn contains_guest(&self, name: &Name) -> bool {
        self.guests.contains_id(name)
    }

    pub fn find_guest(&self, name: &Name) -> DomainResult<&Guest> {
        self.guests.find(name)
    }

    /// Whether [`Table::seat`] would accept `guest`.
    pub fn check_seat(&self, guest: &Guest) -> DomainResult<()> {
        if self.guests.contains(guest) || self.has_room() {
            Ok(())
        } else {
            Err(DomainError::table_full(self.id, self.capacity.get()))
        }
    }

    /// Seat `guest` here.
    ///
    /// A guest already seated here (same name) is overwritten in place, so
    /// edits to a seated guest keep their seat. A new guest needs a free seat.
    pub fn seat(&self, guest: Guest) -> DomainResult<Self> {
        self.check_seat(&guest)?;

        let guest = guest.with_table_id(Some(self.id));
        let mut guests = self.guests.clone();
        if guests.contains(&guest) {
            guests.replace_by_id(guest.name(), guest.clone())?;
        } else {
            guests.add(guest)?;
        }
        Ok(Self {
            id: self.id,
            capacity: self.capacity,
            guests,
        })
    }

    pub fn unseat(&self, name: &Name) -> DomainResult<Self> {
        let mut guests = self.guests.clone();
        guests.remove_by_id(name)?;
        Ok(Self {
            id: self.id,
            capacity: self.capacity,
            guests,
        })
    }

    /// Same table with a different capacity; cannot drop below occupancy.
    pub fn with_capacity(&self, capacity: Capacity) -> DomainResult<Self> {
        if (capacity.get() as usize) < self.occupancy() {
            return Err(DomainError::invariant(format!(
                "table {} seats {} guests; capacity {capacity} is too small",
                self.id,
                self.occupancy()
            )));
        }
        Ok(Self {
            id: self.id,
            capacity,
            guests: self.guests.clone(),
        })
    }
}

impl Entity for Table {
    type Id = TableId;
    const KIND: EntityKind = EntityKind::Table;

    fn id(&self) -> &TableId {
        &self.id
    }
}

impl core::fmt::Display for Table {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Table {} ({}/{})", self.id, self.occupancy(), self.capacity)
    }
}

fn describe_seat(table_id: Option<TableId>) -> String {
    match table_id {
        Some(id) => format!("table {id}"),
        None => "no table".to_string(),
    }
}
