//! Registry of a wedding's tables, unique by table id.

use wedplan_core::{DomainResult, UniqueList};
use wedplan_guests::{Guest, Name, TableId};

use crate::table::Table;

/// Registry of the tables of one wedding, unique by [`TableId`].
///
/// Every membership change produces a new [`Table`] snapshot which replaces
/// the stored one at the same index, so readers never see a half-applied edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableList {
    tables: UniqueList<Table>,
}

impl TableList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn tables(&self) -> &[Table] {
        self.tables.as_slice()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Table> {
        self.tables.iter()
    }

    pub fn contains(&self, id: TableId) -> bool {
        self.tables.contains_id(&id)
    }

    pub fn add_table(&mut self, table: Table) -> DomainResult<()> {
        let id = table.id();
        self.tables.add(table)?;
        tracing::debug!(table_id = %id, "table added");
        Ok(())
    }

    pub fn delete_table(&mut self, table: &Table) -> DomainResult<Table> {
        self.delete_table_by_id(table.id())
    }

    pub fn delete_table_by_id(&mut self, id: TableId) -> DomainResult<Table> {
        let removed = self.tables.remove_by_id(&id)?;
        tracing::debug!(table_id = %id, "table deleted");
        Ok(removed)
    }

    pub fn find_table(&self, id: TableId) -> DomainResult<&Table> {
        self.tables.find(&id)
    }

    /// The table whose membership contains `name`, if any.
    pub fn table_of(&self, name: &Name) -> Option<&Table> {
        self.tables.iter().find(|t| t.contains_guest(name))
    }

    /// Replace `target` with `edited`; `edited` may keep the id or move to a free one.
    pub fn replace_table(&mut self, target: &Table, edited: Table) -> DomainResult<Table> {
        self.tables.replace(target, edited)
    }

    /// Seat (or re-publish) `guest` at table `id`.
    pub fn seat_guest_at(&mut self, guest: Guest, id: TableId) -> DomainResult<()> {
        let name = guest.name().clone();
        let updated = self.find_table(id)?.seat(guest)?;
        self.tables.replace_by_id(&id, updated)?;
        tracing::debug!(guest = %name, table_id = %id, "guest seated");
        Ok(())
    }

    pub fn unseat_guest_from(&mut self, name: &Name, id: TableId) -> DomainResult<()> {
        let updated = self.find_table(id)?.unseat(name)?;
        self.tables.replace_by_id(&id, updated)?;
        tracing::debug!(guest = %name, table_id = %id, "guest unseated");
        Ok(())
    }

    /// Bulk replace (storage path); fails if two tables share an id.
    pub fn set_tables(&mut self, tables: Vec<Table>) -> DomainResult<()> {
        self.tables.set_all(tables)
    }
}

impl<'a> IntoIterator for &'a TableList {
    type Item = &'a Table;
    type IntoIter = core::slice::Iter<'a, Table>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}
