//! Weddings domain module.
//!
//! The [`Wedding`] aggregate (guest list + table registry kept mutually
//! consistent), the [`EventStore`] of all weddings, the per-user [`Session`]
//! holding the current-wedding selection, and the flat storage records used to
//! persist and reload them.

pub mod event_store;
pub mod session;
pub mod storage;
pub mod wedding;

pub use event_store::EventStore;
pub use session::Session;
pub use storage::{
    JsonFileStorage, StorageError, StoredEventStore, StoredGuest, StoredTable, StoredWedding,
};
pub use wedding::{RsvpSummary, Wedding, WeddingName};
