//! `wedplan-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, entity/value-object traits and the identity-unique list
//! every wedding collection is built on.

pub mod entity;
pub mod error;
pub mod unique_list;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, EntityKind};
pub use unique_list::{UniqueList, are_unique};
pub use value_object::ValueObject;
