// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use resource_services_domain::RequestStatus;

/// What an operation reducer did with an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The state transition took place.
    Applied,
    /// The action referred to something it could not act on and was
    /// ignored. Field stamps such as `lastModified` may still have been
    /// written.
    Ignored(NoOp),
    /// The action is not part of the document's catalogue and was handed
    /// back to the host untouched.
    Passthrough,
}

impl Outcome {
    /// Returns true if the transition took place.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Why an action was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoOp {
    /// No entity with the given key exists.
    NotFound {
        /// The kind of entity looked up.
        entity: &'static str,
        /// The key that was not found.
        key: String,
    },
    /// The request has already been processed.
    NotPending {
        /// The request id.
        request_id: String,
        /// The request's current status.
        status: RequestStatus,
    },
    /// An entity with the given key already exists.
    Duplicate {
        /// The kind of entity.
        entity: &'static str,
        /// The key that already exists.
        key: String,
    },
}

impl NoOp {
    /// Creates a `NotFound` no-op.
    #[must_use]
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// Creates a `Duplicate` no-op.
    #[must_use]
    pub fn duplicate(entity: &'static str, key: impl ToString) -> Self {
        Self::Duplicate {
            entity,
            key: key.to_string(),
        }
    }
}

impl std::fmt::Display for NoOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, key } => write!(f, "{entity} '{key}' not found"),
            Self::NotPending { request_id, status } => {
                write!(f, "request '{request_id}' is {status}, not PENDING")
            }
            Self::Duplicate { entity, key } => write!(f, "{entity} '{key}' already exists"),
        }
    }
}
