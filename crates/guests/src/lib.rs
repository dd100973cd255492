//! Guests domain module.
//!
//! Validated guest fields, planning attributes (dietary needs, RSVP) and the
//! immutable [`Guest`] entity. Pure domain logic: no IO, no storage.

pub mod attributes;
pub mod fields;
pub mod guest;

pub use attributes::{Category, CustomDiet, DietaryRestriction, RsvpStatus};
pub use fields::{Address, Email, Name, Phone, TableId, Tag};
pub use guest::{ContactInfo, Guest};
