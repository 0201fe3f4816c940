// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised while validating scalar fields or entity collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A datetime scalar did not parse as RFC 3339.
    InvalidDateTime {
        /// The rejected value.
        value: String,
        /// The parser's explanation.
        reason: String,
    },
    /// A literal is not a member of the enumeration.
    InvalidEnumValue {
        /// The enumeration that rejected the literal.
        enum_name: &'static str,
        /// The rejected literal.
        value: String,
    },
    /// A collection keyed by a natural key holds the same key twice.
    DuplicateKey {
        /// The collection holding the duplicate.
        collection: &'static str,
        /// The duplicated key.
        key: String,
    },
    /// An explicit ordering does not name the same ids as the collection.
    InvalidOrdering {
        /// The collection being reordered.
        collection: &'static str,
        /// What is wrong with the ordering.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateTime { value, reason } => {
                write!(f, "Invalid datetime '{value}': {reason}")
            }
            Self::InvalidEnumValue { enum_name, value } => {
                write!(f, "'{value}' is not a valid {enum_name}")
            }
            Self::DuplicateKey { collection, key } => {
                write!(f, "Duplicate key '{key}' in {collection}")
            }
            Self::InvalidOrdering { collection, reason } => {
                write!(f, "Invalid ordering for {collection}: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
