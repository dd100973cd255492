//! Guest attributes used for planning: dietary needs and RSVP state.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use wedplan_core::{DomainError, DomainResult, ValueObject};

use crate::guest::Guest;

/// Dietary restriction of a guest.
///
/// The fixed variants cover the common cases; anything else is kept as
/// trimmed free text. Free text that names a fixed variant, or is blank, is
/// never an `Other`, so every value reads back as itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DietaryRestriction {
    #[default]
    NoRestriction,
    Vegetarian,
    Vegan,
    Halal,
    Other(CustomDiet),
}

/// Free-text dietary need. Only built by parsing, see [`DietaryRestriction::other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomDiet(String);

impl CustomDiet {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CustomDiet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl DietaryRestriction {
    /// Free-text restriction; fails on blank text or one of the fixed names.
    pub fn other(text: &str) -> DomainResult<Self> {
        match text.parse::<Self>()? {
            diet @ DietaryRestriction::Other(_) => Ok(diet),
            DietaryRestriction::NoRestriction if text.trim().is_empty() => Err(
                DomainError::validation("custom dietary restriction should not be blank"),
            ),
            fixed => Err(DomainError::validation(format!(
                "`{}` is a standard dietary restriction, use `{fixed}` instead",
                text.trim()
            ))),
        }
    }
}

impl core::fmt::Display for DietaryRestriction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DietaryRestriction::NoRestriction => f.write_str("none"),
            DietaryRestriction::Vegetarian => f.write_str("vegetarian"),
            DietaryRestriction::Vegan => f.write_str("vegan"),
            DietaryRestriction::Halal => f.write_str("halal"),
            DietaryRestriction::Other(text) => f.write_str(text.as_str()),
        }
    }
}

impl FromStr for DietaryRestriction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.to_ascii_lowercase().as_str() {
            "" | "none" => DietaryRestriction::NoRestriction,
            "vegetarian" => DietaryRestriction::Vegetarian,
            "vegan" => DietaryRestriction::Vegan,
            "halal" => DietaryRestriction::Halal,
            _ => DietaryRestriction::Other(CustomDiet(trimmed.to_string())),
        })
    }
}

impl TryFrom<String> for DietaryRestriction {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DietaryRestriction> for String {
    fn from(value: DietaryRestriction) -> Self {
        value.to_string()
    }
}

impl ValueObject for DietaryRestriction {}

/// Whether a guest has replied to the invitation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RsvpStatus {
    Yes,
    No,
    #[default]
    NoResponse,
}

impl core::fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            RsvpStatus::Yes => "yes",
            RsvpStatus::No => "no",
            RsvpStatus::NoResponse => "no response",
        })
    }
}

impl FromStr for RsvpStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Ok(RsvpStatus::Yes),
            "no" | "n" => Ok(RsvpStatus::No),
            "" | "no response" | "no_response" | "nr" => Ok(RsvpStatus::NoResponse),
            other => Err(DomainError::validation(format!(
                "rsvp status `{other}` should be one of: yes, no, no response"
            ))),
        }
    }
}

impl TryFrom<String> for RsvpStatus {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RsvpStatus> for String {
    fn from(value: RsvpStatus) -> Self {
        value.to_string()
    }
}

impl ValueObject for RsvpStatus {}

/// Filter criterion over guests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Dietary(DietaryRestriction),
    Rsvp(RsvpStatus),
}

impl Category {
    pub fn matches(&self, guest: &Guest) -> bool {
        match self {
            Category::Dietary(d) => guest.dietary() == d,
            Category::Rsvp(r) => guest.rsvp() == *r,
        }
    }
}

impl From<DietaryRestriction> for Category {
    fn from(value: DietaryRestriction) -> Self {
        Category::Dietary(value)
    }
}

impl From<RsvpStatus> for Category {
    fn from(value: RsvpStatus) -> Self {
        Category::Rsvp(value)
    }
}
