// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::any::UnknownDocumentKind;
use resource_services_domain::DomainError;
use resource_services_oplog::ValidationError;

/// A declared guard rejected an operation.
///
/// The document records the operation with this error's message and leaves
/// the state as it was before the operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducerError {
    /// Stable error code, e.g. `FaqNotFoundError`.
    pub code: &'static str,
    /// Human-readable description.
    pub message: String,
}

impl ReducerError {
    /// Creates a new `ReducerError`.
    ///
    /// # Arguments
    ///
    /// * `code` - Stable error code
    /// * `message` - Human-readable description
    #[must_use]
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ReducerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ReducerError {}

/// Errors that can occur while applying actions to documents or loading them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An action input failed validation; nothing was applied.
    Validation(ValidationError),
    /// An operation was rejected by its reducer; it was logged with the error.
    Reducer(ReducerError),
    /// A state or document failed a domain invariant.
    DomainViolation(DomainError),
    /// A document or state could not be (de)serialized.
    Serialization(String),
    /// A document of another type was supplied.
    DocumentTypeMismatch {
        /// The document type that was required.
        expected: String,
        /// The document type that was found.
        found: String,
    },
    /// No model claims the document type.
    UnknownDocumentKind(UnknownDocumentKind),
    /// Replaying a saved operation log did not reproduce the saved state.
    ReplayDiverged {
        /// The document whose log diverged.
        document_id: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Reducer(err) => write!(f, "Operation rejected: {err}"),
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            Self::DocumentTypeMismatch { expected, found } => {
                write!(f, "Expected a {expected} document, found {found}")
            }
            Self::UnknownDocumentKind(err) => write!(f, "{err}"),
            Self::ReplayDiverged { document_id } => write!(
                f,
                "Replaying the operations of document {document_id} does not reproduce its saved state"
            ),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<ValidationError> for CoreError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<ReducerError> for CoreError {
    fn from(err: ReducerError) -> Self {
        Self::Reducer(err)
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<UnknownDocumentKind> for CoreError {
    fn from(err: UnknownDocumentKind) -> Self {
        Self::UnknownDocumentKind(err)
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
