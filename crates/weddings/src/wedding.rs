//! The wedding aggregate: one guest list plus one table registry.
//!
//! A guest's `table_id` is stored twice: on the guest record in the guest list
//! and implicitly by membership of the table. Every mutation below keeps the
//! two in agreement, and every mutation is all-or-nothing.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use wedplan_core::{DomainError, DomainResult, Entity, EntityKind, UniqueList, ValueObject};
use wedplan_guests::{Category, Guest, Name, RsvpStatus, TableId};
use wedplan_seating::{Capacity, Table, TableList};

/// Name of a wedding; its identity within an [`EventStore`](crate::EventStore).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeddingName(String);

impl WeddingName {
    pub fn new(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("wedding name should not be blank"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for WeddingName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for WeddingName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for WeddingName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<WeddingName> for String {
    fn from(value: WeddingName) -> Self {
        value.0
    }
}

impl ValueObject for WeddingName {}

/// RSVP head count of a wedding.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RsvpSummary {
    pub yes: usize,
    pub no: usize,
    pub no_response: usize,
}

impl RsvpSummary {
    pub fn total(&self) -> usize {
        self.yes + self.no + self.no_response
    }
}

/// Aggregate root: a single wedding.
///
/// Invariants (checked by [`Wedding::check_consistency`]):
/// - every table member is a guest whose `table_id` is that table, and the
///   member record equals the guest-list record
/// - every guest with `table_id = Some(t)` is a member of table `t` and of no other
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wedding {
    name: WeddingName,
    guests: UniqueList<Guest>,
    tables: TableList,
}

impl Wedding {
    pub fn new(name: WeddingName) -> Self {
        Self {
            name,
            guests: UniqueList::new(),
            tables: TableList::new(),
        }
    }

    /// Bulk-load a wedding, then verify the cross-list invariants.
    pub fn from_parts(name: WeddingName, guests: Vec<Guest>, tables: Vec<Table>) -> DomainResult<Self> {
        let mut wedding = Self::new(name);
        wedding.guests.set_all(guests)?;
        wedding.tables.set_tables(tables)?;
        wedding.check_consistency()?;
        Ok(wedding)
    }

    pub fn name(&self) -> &WeddingName {
        &self.name
    }

    /// Same wedding under another name.
    pub fn with_name(self, name: WeddingName) -> Self {
        Self { name, ..self }
    }

    pub fn guests(&self) -> &[Guest] {
        self.guests.as_slice()
    }

    pub fn tables(&self) -> &[Table] {
        self.tables.tables()
    }

    pub fn has_guest(&self, name: &Name) -> bool {
        self.guests.contains_id(name)
    }

    pub fn find_guest(&self, name: &Name) -> DomainResult<&Guest> {
        self.guests.find(name)
    }

    pub fn find_table(&self, id: TableId) -> DomainResult<&Table> {
        self.tables.find_table(id)
    }

    pub fn guests_at(&self, id: TableId) -> DomainResult<&[Guest]> {
        Ok(self.tables.find_table(id)?.guests())
    }

    pub fn unseated_guests(&self) -> Vec<&Guest> {
        self.guests.iter().filter(|g| !g.is_seated()).collect()
    }

    pub fn filter_guests(&self, category: &Category) -> Vec<&Guest> {
        self.guests.iter().filter(|g| category.matches(g)).collect()
    }

    pub fn rsvp_summary(&self) -> RsvpSummary {
        self.guests.iter().fold(RsvpSummary::default(), |mut acc, g| {
            match g.rsvp() {
                RsvpStatus::Yes => acc.yes += 1,
                RsvpStatus::No => acc.no += 1,
                RsvpStatus::NoResponse => acc.no_response += 1,
            }
            acc
        })
    }

    /// Add a guest. A guest that already carries a table id is seated there too.
    pub fn add_guest(&mut self, guest: Guest) -> DomainResult<()> {
        self.transact(|w| {
            w.guests.add(guest.clone())?;
            if let Some(table_id) = guest.table_id() {
                w.tables.seat_guest_at(guest.clone(), table_id)?;
            }
            tracing::debug!(wedding = %w.name, guest = %guest.name(), "guest added");
            Ok(())
        })
    }

    /// Remove a guest from the guest list and from their table.
    pub fn remove_guest(&mut self, name: &Name) -> DomainResult<Guest> {
        self.transact(|w| {
            let removed = w.guests.remove_by_id(name)?;
            if let Some(table_id) = removed.table_id() {
                w.vacate(name, table_id);
            }
            tracing::debug!(wedding = %w.name, guest = %name, "guest removed");
            Ok(removed)
        })
    }

    /// Replace a guest's record with `edited`.
    ///
    /// `edited` may carry a new name (must be free) and a different table; the
    /// table memberships follow whatever `edited.table_id()` says.
    pub fn edit_guest(&mut self, name: &Name, edited: Guest) -> DomainResult<Guest> {
        let current = self.guests.find(name)?.clone();
        self.transact(|w| w.reassign(&current, edited))
    }

    /// Seat a guest at `table_id`, moving them off their previous table.
    pub fn seat_guest(&mut self, name: &Name, table_id: TableId) -> DomainResult<Guest> {
        let current = self.guests.find(name)?.clone();
        let candidate = current.clone().with_table_id(Some(table_id));
        self.transact(|w| w.reassign(&current, candidate))
    }

    pub fn unseat_guest(&mut self, name: &Name) -> DomainResult<Guest> {
        let current = self.guests.find(name)?.clone();
        let candidate = current.clone().with_table_id(None);
        self.transact(|w| w.reassign(&current, candidate))
    }

    /// Add an empty table.
    pub fn add_table(&mut self, table: Table) -> DomainResult<()> {
        if !table.is_empty() {
            return Err(DomainError::invariant(format!(
                "table {} must be empty when added; seat guests through the wedding",
                table.id()
            )));
        }
        self.tables.add_table(table)
    }

    pub fn resize_table(&mut self, id: TableId, capacity: Capacity) -> DomainResult<Table> {
        let target = self.tables.find_table(id)?.clone();
        let resized = target.with_capacity(capacity)?;
        self.tables.replace_table(&target, resized.clone())?;
        Ok(resized)
    }

    /// Delete a table; anyone still seated there becomes unseated.
    pub fn delete_table(&mut self, id: TableId) -> DomainResult<Table> {
        self.transact(|w| {
            let removed = w.tables.delete_table_by_id(id)?;
            for member in removed.guests() {
                let current = w.guests.find(member.name())?.clone();
                if current.table_id() == Some(id) {
                    w.guests
                        .replace(&current, current.clone().with_table_id(None))?;
                }
            }
            tracing::debug!(
                wedding = %w.name,
                table_id = %id,
                unseated = removed.occupancy(),
                "table deleted"
            );
            Ok(removed)
        })
    }

    /// Verify that guest-list assignments and table memberships agree.
    pub fn check_consistency(&self) -> DomainResult<()> {
        for table in self.tables.iter() {
            if table.occupancy() > table.capacity().get() as usize {
                return Err(DomainError::table_full(table.id(), table.capacity().get()));
            }
            for member in table.guests() {
                let guest = self.guests.find(member.name()).map_err(|_| {
                    DomainError::invariant(format!(
                        "table {} seats `{}` who is not on the guest list",
                        table.id(),
                        member.name()
                    ))
                })?;
                if guest.table_id() != Some(table.id()) || member.table_id() != Some(table.id()) {
                    return Err(DomainError::invariant(format!(
                        "`{}` is seated at table {} but assigned elsewhere",
                        member.name(),
                        table.id()
                    )));
                }
                if member != guest {
                    return Err(DomainError::invariant(format!(
                        "table {} holds a stale record of `{}`",
                        table.id(),
                        member.name()
                    )));
                }
            }
        }

        for guest in self.guests.iter() {
            let Some(table_id) = guest.table_id() else {
                continue;
            };
            let table = self.tables.find_table(table_id).map_err(|_| {
                DomainError::invariant(format!(
                    "`{}` is assigned to missing table {table_id}",
                    guest.name()
                ))
            })?;
            if !table.contains_guest(guest.name()) {
                return Err(DomainError::invariant(format!(
                    "`{}` is assigned to table {table_id} but not seated there",
                    guest.name()
                )));
            }
        }
        Ok(())
    }

    /// Reseat protocol shared by seat/unseat/edit.
    ///
    /// Must run inside [`Wedding::transact`]: a failure in the final seat step
    /// leaves the guest list already updated.
    fn reassign(&mut self, current: &Guest, candidate: Guest) -> DomainResult<Guest> {
        self.guests.replace(current, candidate.clone())?;

        if let Some(previous) = current.table_id() {
            let moved = candidate.table_id() != Some(previous);
            let renamed = candidate.name() != current.name();
            if moved || renamed {
                self.vacate(current.name(), previous);
            }
        }

        if let Some(next) = candidate.table_id() {
            self.tables.seat_guest_at(candidate.clone(), next)?;
        }

        tracing::debug!(
            wedding = %self.name,
            guest = %candidate.name(),
            from = ?current.table_id().map(TableId::get),
            to = ?candidate.table_id().map(TableId::get),
            "guest reassigned"
        );
        Ok(candidate)
    }

    /// Drop `name` from table `table_id`; a missing table or member is not an error.
    fn vacate(&mut self, name: &Name, table_id: TableId) {
        if let Err(err) = self.tables.unseat_guest_from(name, table_id) {
            tracing::warn!(
                wedding = %self.name,
                guest = %name,
                table_id = %table_id,
                error = %err,
                "previous seat already gone"
            );
        }
    }

    /// Run `op`; on failure restore the guest list and tables as they were.
    fn transact<T>(&mut self, op: impl FnOnce(&mut Self) -> DomainResult<T>) -> DomainResult<T> {
        let guests = self.guests.clone();
        let tables = self.tables.clone();

        let result = op(self);
        if let Err(err) = &result {
            tracing::debug!(wedding = %self.name, error = %err, "rolling back");
            self.guests = guests;
            self.tables = tables;
        }
        result
    }
}

impl Entity for Wedding {
    type Id = WeddingName;
    const KIND: EntityKind = EntityKind::Wedding;

    fn id(&self) -> &WeddingName {
        &self.name
    }
}
