// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use resource_services::CoreError;
use thiserror::Error;

/// Errors raised by a reactor while managing documents and drives.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReactorError {
    /// No document has the given id.
    #[error("Document {document_id} not found")]
    DocumentNotFound { document_id: String },

    /// No drive has the given id.
    #[error("Drive {drive_id} not found")]
    DriveNotFound { drive_id: String },

    /// The drive already holds a file for the document.
    #[error("Document {document_id} is already part of {drive_id}")]
    DuplicateFile {
        document_id: String,
        drive_id: String,
    },

    /// The document layer failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// API-level errors.
///
/// Messages match what clients of the per-document-type API expect.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// A query or mutation was called without a document id.
    #[error("Document id is required")]
    DocumentIdRequired,

    /// The document exists but the drive does not list it.
    #[error("Document with id {document_id} is not part of {drive_id}")]
    NotInDrive {
        document_id: String,
        drive_id: String,
    },

    /// No document has the given id.
    #[error("Document not found")]
    DocumentNotFound,

    /// The document belongs to another document type than the one addressed.
    #[error("Document {document_id} is a {found} document, not {expected}")]
    WrongDocumentType {
        document_id: String,
        expected: String,
        found: String,
    },

    /// The mutation name does not match any document type and action.
    #[error("Unknown mutation '{mutation}'")]
    UnknownMutation { mutation: String },

    /// The reactor refused the action.
    #[error("{message}")]
    ActionFailed { action: String, message: String },

    /// The reactor failed while managing documents or drives.
    #[error(transparent)]
    Reactor(#[from] ReactorError),

    /// A document could not be rendered.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Translates a core error into an API error.
pub fn translate_core_error(err: &CoreError) -> ApiError {
    ApiError::Internal {
        message: err.to_string(),
    }
}
