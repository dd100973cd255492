//! Application session: the event store plus the "current wedding" selection.
//!
//! Guest and table operations coming from the command layer always target the
//! current wedding, so "nothing selected" is reported separately from "the
//! selected wedding has no such guest/table".

use wedplan_core::{DomainError, DomainResult};

use crate::event_store::EventStore;
use crate::wedding::{Wedding, WeddingName};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    store: EventStore,
    current: Option<WeddingName>,
}

impl Session {
    pub fn new(store: EventStore) -> Self {
        Self {
            store,
            current: None,
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn into_store(self) -> EventStore {
        self.store
    }

    pub fn current_name(&self) -> Option<&WeddingName> {
        self.current.as_ref()
    }

    /// Select an existing wedding as the target of later operations.
    pub fn set_current_wedding(&mut self, name: &WeddingName) -> DomainResult<()> {
        self.store.find_wedding(name)?;
        self.current = Some(name.clone());
        tracing::debug!(wedding = %name, "current wedding selected");
        Ok(())
    }

    pub fn clear_current_wedding(&mut self) {
        self.current = None;
    }

    pub fn current_wedding(&self) -> DomainResult<&Wedding> {
        let name = self.current.as_ref().ok_or(DomainError::NoCurrentWedding)?;
        self.store
            .find_wedding(name)
            .map_err(|_| DomainError::NoCurrentWedding)
    }

    /// Run `op` against the current wedding; published only on success.
    pub fn with_current_wedding<T>(
        &mut self,
        op: impl FnOnce(&mut Wedding) -> DomainResult<T>,
    ) -> DomainResult<T> {
        let name = self.current.clone().ok_or(DomainError::NoCurrentWedding)?;
        if !self.store.has_wedding(&name) {
            return Err(DomainError::NoCurrentWedding);
        }
        self.store.update_wedding(&name, op)
    }

    pub fn create_wedding(&mut self, name: WeddingName) -> DomainResult<()> {
        self.store.create_wedding(name)
    }

    pub fn find_wedding(&self, name: &WeddingName) -> DomainResult<&Wedding> {
        self.store.find_wedding(name)
    }

    /// Rename a wedding; the selection follows it.
    pub fn rename_wedding(&mut self, name: &WeddingName, new_name: WeddingName) -> DomainResult<()> {
        self.store.rename_wedding(name, new_name.clone())?;
        if self.current.as_ref() == Some(name) {
            self.current = Some(new_name);
        }
        Ok(())
    }

    /// Delete a wedding; deleting the selected one clears the selection.
    pub fn delete_wedding(&mut self, name: &WeddingName) -> DomainResult<Wedding> {
        let removed = self.store.delete_wedding(name)?;
        if self.current.as_ref() == Some(name) {
            self.current = None;
        }
        Ok(removed)
    }
}
