// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scalar types shared by every document.
//!
//! `Oid` and `Phid` are opaque identifiers: no format is enforced and no
//! referential integrity is implied. `DateTime` is the only scalar with a
//! format check, and it is enforced at construction and deserialization.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// The timestamp every default state starts from.
pub const EPOCH: &str = "1970-01-01T00:00:00.000Z";

/// An object identifier, unique within its owning collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Oid(String);

impl Oid {
    /// Creates a new `Oid`.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Oid {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Oid {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Oid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A document identifier referencing another document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phid(String);

impl Phid {
    /// Creates a new `Phid`.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Phid {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Phid {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Phid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An RFC 3339 timestamp.
///
/// The original string is kept as-is so that states round-trip byte for
/// byte; parsing only establishes that the value is well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DateTime(String);

impl DateTime {
    /// Parses and validates a timestamp.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateTime` if the value is not RFC 3339.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        OffsetDateTime::parse(value, &Rfc3339).map_err(|err| DomainError::InvalidDateTime {
            value: value.to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self(value.to_string()))
    }

    /// Returns the Unix epoch, `1970-01-01T00:00:00.000Z`.
    #[must_use]
    pub fn epoch() -> Self {
        Self(String::from(EPOCH))
    }

    /// Formats an `OffsetDateTime` as a timestamp.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateTime` if the value cannot be
    /// represented in RFC 3339 (e.g. a year outside 0..=9999).
    pub fn from_offset(value: OffsetDateTime) -> Result<Self, DomainError> {
        let formatted: String = value.format(&Rfc3339).map_err(|err| DomainError::InvalidDateTime {
            value: value.to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self(formatted))
    }

    /// Returns the timestamp as an `OffsetDateTime`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateTime` if the stored value no longer
    /// parses, which only happens for values built outside `parse`.
    pub fn to_offset(&self) -> Result<OffsetDateTime, DomainError> {
        OffsetDateTime::parse(&self.0, &Rfc3339).map_err(|err| DomainError::InvalidDateTime {
            value: self.0.clone(),
            reason: err.to_string(),
        })
    }

    /// Returns the timestamp string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DateTime {
    fn default() -> Self {
        Self::epoch()
    }
}

impl FromStr for DateTime {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for DateTime {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: String = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
