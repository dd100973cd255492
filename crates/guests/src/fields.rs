//! Validated scalar fields of a guest.

use core::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use wedplan_core::{DomainError, DomainResult, ValueObject};

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N}][\p{L}\p{N} ]*$").unwrap());

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{3,}$").unwrap());

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9](?:[A-Za-z0-9+_.-]*[A-Za-z0-9])?",
        r"@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)*",
        r"[A-Za-z0-9][A-Za-z0-9-]*[A-Za-z0-9]$",
    ))
    .unwrap()
});

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\p{L}\p{N}]+$").unwrap());

/// Guest name; the identity key of a guest within a wedding.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if !NAME_REGEX.is_match(trimmed) {
            return Err(DomainError::validation(
                "names should only contain alphanumeric characters and spaces, and it should not be blank",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// Phone number: digits only, at least three of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if !PHONE_REGEX.is_match(trimmed) {
            return Err(DomainError::validation(
                "phone numbers should only contain digits, and be at least 3 digits long",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// Email address of the form `local-part@domain`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if !EMAIL_REGEX.is_match(trimmed) {
            return Err(DomainError::validation(format!(
                "`{trimmed}` is not a valid email of the form local-part@domain"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// Postal address; any non-blank text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn new(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("addresses can take any values, but should not be blank"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// Single-word alphanumeric label attached to a guest.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if !TAG_REGEX.is_match(trimmed) {
            return Err(DomainError::validation(format!(
                "tag `{trimmed}` should be a single alphanumeric word"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }
}

macro_rules! impl_string_value {
    ($t:ty) => {
        impl $t {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$t>::new(s)
            }
        }

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                <$t>::new(&value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl ValueObject for $t {}
    };
}

impl_string_value!(Name);
impl_string_value!(Phone);
impl_string_value!(Email);
impl_string_value!(Address);
impl_string_value!(Tag);

/// Identifier of a seating table: a positive integer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TableId(u32);

impl TableId {
    pub fn new(value: u32) -> DomainResult<Self> {
        if value == 0 {
            return Err(DomainError::validation("table id must be a positive integer"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for TableId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TableId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|_| DomainError::validation(format!("table id `{s}` is not a positive integer")))?;
        Self::new(value)
    }
}

impl TryFrom<u32> for TableId {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TableId> for u32 {
    fn from(value: TableId) -> Self {
        value.0
    }
}

impl ValueObject for TableId {}
