//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Every scalar in the wedding model (names, phones, table
//! ids, capacities, ...) is one: validated once at construction, immutable
//! afterwards. To "change" one, build a new one.

use core::str::FromStr;

use crate::error::DomainError;

/// Marker trait for value objects.
///
/// Value objects parse from their textual form and render back to it, so the
/// command and storage layers can treat them uniformly:
///
/// ```ignore
/// let phone: Phone = "91234567".parse()?;
/// assert_eq!(phone.to_string(), "91234567");
/// ```
pub trait ValueObject:
    Clone + PartialEq + core::fmt::Debug + core::fmt::Display + FromStr<Err = DomainError>
{
}
