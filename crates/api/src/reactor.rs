// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The host side: where documents live and how actions reach them.

use crate::error::ReactorError;
use crate::request_response::ActionResult;
use resource_services::{ActionRecord, AnyDocument, CoreError, DocumentKind, Outcome};
use resource_services_domain::Phid;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// A file entry in a drive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveNode {
    pub id: Phid,
    pub name: String,
    pub document_type: String,
}

/// A document host.
///
/// Implementations own documents, group them into drives, and apply action
/// records to them one at a time.
pub trait Reactor {
    /// Returns the document with `document_id`.
    fn get_document(&self, document_id: &str) -> Option<&AnyDocument>;

    /// Returns the ids of the documents in a drive, in insertion order.
    /// An unknown drive lists nothing.
    fn get_documents(&self, drive_id: &str) -> Vec<Phid>;

    /// Creates a new empty document of `kind` and returns its id.
    ///
    /// # Errors
    ///
    /// Returns `ReactorError` if the document cannot be created.
    fn add_document(&mut self, kind: DocumentKind) -> Result<Phid, ReactorError>;

    /// Lists a document in a drive.
    ///
    /// # Errors
    ///
    /// Returns `ReactorError` if the drive is unknown or already lists the
    /// document.
    fn add_file(&mut self, drive_id: &str, node: DriveNode) -> Result<(), ReactorError>;

    /// Applies an action record to a document.
    fn add_action(&mut self, document_id: &str, record: ActionRecord) -> ActionResult;
}

/// A single-writer reactor holding everything in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReactor {
    documents: BTreeMap<String, AnyDocument>,
    drives: BTreeMap<String, Vec<DriveNode>>,
}

impl InMemoryReactor {
    /// Creates an empty reactor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty drive. Existing drives are left as they are.
    pub fn add_drive(&mut self, drive_id: impl Into<String>) {
        let drive_id: String = drive_id.into();
        info!(drive_id = %drive_id, "Adding drive");
        self.drives.entry(drive_id).or_default();
    }

    /// Stores an existing document, replacing any document with the same id.
    pub fn insert_document(&mut self, document: AnyDocument) {
        self.documents.insert(document.id().to_string(), document);
    }

    /// Returns the files listed in a drive.
    #[must_use]
    pub fn drive(&self, drive_id: &str) -> Option<&[DriveNode]> {
        self.drives.get(drive_id).map(Vec::as_slice)
    }

    /// Returns the number of documents held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if no documents are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Reactor for InMemoryReactor {
    fn get_document(&self, document_id: &str) -> Option<&AnyDocument> {
        self.documents.get(document_id)
    }

    fn get_documents(&self, drive_id: &str) -> Vec<Phid> {
        self.drives
            .get(drive_id)
            .map(|nodes| nodes.iter().map(|node| node.id.clone()).collect())
            .unwrap_or_default()
    }

    fn add_document(&mut self, kind: DocumentKind) -> Result<Phid, ReactorError> {
        let document: AnyDocument = AnyDocument::create(kind)?;
        let id: Phid = document.id().clone();
        info!(document_id = %id, document_type = kind.document_type(), "Adding document");
        self.documents.insert(id.to_string(), document);
        Ok(id)
    }

    fn add_file(&mut self, drive_id: &str, node: DriveNode) -> Result<(), ReactorError> {
        let nodes: &mut Vec<DriveNode> =
            self.drives
                .get_mut(drive_id)
                .ok_or_else(|| ReactorError::DriveNotFound {
                    drive_id: drive_id.to_string(),
                })?;
        if nodes.iter().any(|existing| existing.id == node.id) {
            return Err(ReactorError::DuplicateFile {
                document_id: node.id.to_string(),
                drive_id: drive_id.to_string(),
            });
        }
        info!(drive_id, document_id = %node.id, name = %node.name, "Adding file to drive");
        nodes.push(node);
        Ok(())
    }

    fn add_action(&mut self, document_id: &str, record: ActionRecord) -> ActionResult {
        let Some(document) = self.documents.get_mut(document_id) else {
            let err: ReactorError = ReactorError::DocumentNotFound {
                document_id: document_id.to_string(),
            };
            warn!(error = %err, "Rejecting action");
            return ActionResult::error(err.to_string());
        };

        let action_type: String = record.action_type.clone();
        let result: Result<Outcome, CoreError> = document.apply_record(record);
        match result {
            Ok(outcome) => {
                debug!(document_id, action_type = %action_type, ?outcome, "Action applied");
                ActionResult::success()
            }
            Err(err) => {
                warn!(document_id, action_type = %action_type, error = %err, "Action failed");
                ActionResult::error(action_error_message(&err))
            }
        }
    }
}

/// The message reported to clients: reducer and validation errors are
/// reported bare, without the core layer's prefix.
fn action_error_message(err: &CoreError) -> String {
    match err {
        CoreError::Reducer(reducer) => reducer.message.clone(),
        CoreError::Validation(validation) => validation.to_string(),
        other => other.to_string(),
    }
}
