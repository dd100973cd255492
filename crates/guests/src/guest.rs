//! The guest entity: validated contact details plus planning attributes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use wedplan_core::{Entity, EntityKind};

use crate::attributes::{DietaryRestriction, RsvpStatus};
use crate::fields::{Address, Email, Name, Phone, TableId, Tag};

/// Contact details for a guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
}

/// A wedding guest.
///
/// Guests are immutable values: every "edit" builds a new `Guest` (see the
/// `with_*` methods) which then replaces the old one in its owning list.
/// Identity is the [`Name`]; full equality compares every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    name: Name,
    contact: ContactInfo,
    tags: BTreeSet<Tag>,
    dietary: DietaryRestriction,
    rsvp: RsvpStatus,
    table_id: Option<TableId>,
}

impl Guest {
    /// A new, unseated guest with no tags, no dietary restriction and no RSVP yet.
    pub fn new(name: Name, contact: ContactInfo) -> Self {
        Self {
            name,
            contact,
            tags: BTreeSet::new(),
            dietary: DietaryRestriction::default(),
            rsvp: RsvpStatus::default(),
            table_id: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn phone(&self) -> &Phone {
        &self.contact.phone
    }

    pub fn email(&self) -> &Email {
        &self.contact.email
    }

    pub fn address(&self) -> &Address {
        &self.contact.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn dietary(&self) -> &DietaryRestriction {
        &self.dietary
    }

    pub fn rsvp(&self) -> RsvpStatus {
        self.rsvp
    }

    /// Table this guest is seated at, `None` when unseated.
    pub fn table_id(&self) -> Option<TableId> {
        self.table_id
    }

    pub fn is_seated(&self) -> bool {
        self.table_id.is_some()
    }

    pub fn with_name(self, name: Name) -> Self {
        Self { name, ..self }
    }

    pub fn with_contact(self, contact: ContactInfo) -> Self {
        Self { contact, ..self }
    }

    pub fn with_tags(self, tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
            ..self
        }
    }

    pub fn with_dietary(self, dietary: DietaryRestriction) -> Self {
        Self { dietary, ..self }
    }

    pub fn with_rsvp(self, rsvp: RsvpStatus) -> Self {
        Self { rsvp, ..self }
    }

    pub fn with_table_id(self, table_id: Option<TableId>) -> Self {
        Self { table_id, ..self }
    }
}

impl Entity for Guest {
    type Id = Name;
    const KIND: EntityKind = EntityKind::Guest;

    fn id(&self) -> &Name {
        &self.name
    }
}

impl core::fmt::Display for Guest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Dietary: {}; RSVP: {}",
            self.name, self.contact.phone, self.contact.email, self.contact.address, self.dietary, self.rsvp
        )?;
        match self.table_id {
            Some(id) => write!(f, "; Table: {id}")?,
            None => f.write_str("; Table: unassigned")?,
        }
        if !self.tags.is_empty() {
            f.write_str("; Tags:")?;
            for tag in &self.tags {
                write!(f, " [{tag}]")?;
            }
        }
        Ok(())
    }
}
