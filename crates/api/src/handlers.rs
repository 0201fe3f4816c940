// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query and mutation handlers, generic over the reactor.
//!
//! Every document type exposes the same surface under its own prefix:
//! `getDocument`, `getDocuments`, `<Prefix>_createDocument` and one
//! `<Prefix>_<actionName>` mutation per action, where `actionName` is the
//! camelCase form of the action type (`SET_CONFIGURATION` ->
//! `setConfiguration`).

use crate::error::{ApiError, translate_core_error};
use crate::reactor::{DriveNode, Reactor};
use crate::request_response::{ActionResult, DocumentView};
use resource_services::{ActionRecord, AnyDocument, DocumentKind, SET_NAME};
use resource_services_domain::Phid;
use serde_json::Value;
use tracing::{info, warn};

/// Converts an action type to its mutation name, e.g. `ADD_ADDON` to
/// `addAddon`.
#[must_use]
pub fn action_name(action_type: &str) -> String {
    let mut name: String = String::with_capacity(action_type.len());
    for (index, word) in action_type.split('_').filter(|word| !word.is_empty()).enumerate() {
        let lower: String = word.to_ascii_lowercase();
        if index == 0 {
            name.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            name.push(first.to_ascii_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}

/// Converts a mutation's action name to its action type, e.g.
/// `recordUsage` to `RECORD_USAGE`.
///
/// The conversion is not checked; names that are not camelCase convert to
/// something [`action_name`] does not map back.
#[must_use]
pub fn action_type_for(action_name: &str) -> String {
    let mut action_type: String = String::with_capacity(action_name.len() + 4);
    for (index, ch) in action_name.chars().enumerate() {
        if ch.is_ascii_uppercase() && index > 0 {
            action_type.push('_');
        }
        action_type.push(ch.to_ascii_uppercase());
    }
    action_type
}

/// Lists every mutation a document type exposes, `createDocument` first.
#[must_use]
pub fn mutation_names(kind: DocumentKind) -> Vec<String> {
    std::iter::once(String::from("createDocument"))
        .chain(kind.action_types().iter().map(|action_type| action_name(action_type)))
        .map(|name| format!("{}_{name}", kind.graphql_name()))
        .collect()
}

fn view(document: &AnyDocument, drive_id: Option<&str>) -> Result<DocumentView, ApiError> {
    DocumentView::from_document(document, drive_id).map_err(|err| translate_core_error(&err))
}

fn ensure_kind(document: &AnyDocument, kind: DocumentKind) -> Result<(), ApiError> {
    if document.kind() == kind {
        return Ok(());
    }
    Err(ApiError::WrongDocumentType {
        document_id: document.id().to_string(),
        expected: String::from(kind.document_type()),
        found: String::from(document.kind().document_type()),
    })
}

/// Returns one document of `kind`.
///
/// # Arguments
///
/// * `reactor` - The document host
/// * `kind` - The document type being queried
/// * `document_id` - The document to return
/// * `drive_id` - If given, the drive that must list the document
///
/// # Errors
///
/// Returns an error if:
/// - The document id is empty
/// - The drive does not list the document
/// - No document has that id, or it is of another type
pub fn get_document<R: Reactor>(
    reactor: &R,
    kind: DocumentKind,
    document_id: &str,
    drive_id: Option<&str>,
) -> Result<DocumentView, ApiError> {
    if document_id.is_empty() {
        return Err(ApiError::DocumentIdRequired);
    }

    let drive_id: Option<&str> = drive_id.filter(|drive_id| !drive_id.is_empty());
    if let Some(drive_id) = drive_id {
        let listed: Vec<Phid> = reactor.get_documents(drive_id);
        if !listed.iter().any(|id| id.as_str() == document_id) {
            return Err(ApiError::NotInDrive {
                document_id: document_id.to_string(),
                drive_id: drive_id.to_string(),
            });
        }
    }

    let document: &AnyDocument = reactor
        .get_document(document_id)
        .ok_or(ApiError::DocumentNotFound)?;
    ensure_kind(document, kind)?;
    view(document, drive_id)
}

/// Returns every document of `kind` listed in a drive, in drive order.
///
/// Listed ids without a document are skipped.
///
/// # Errors
///
/// Returns `ApiError::Internal` if a document cannot be rendered.
pub fn get_documents<R: Reactor>(
    reactor: &R,
    kind: DocumentKind,
    drive_id: &str,
) -> Result<Vec<DocumentView>, ApiError> {
    reactor
        .get_documents(drive_id)
        .iter()
        .filter_map(|id| reactor.get_document(id.as_str()))
        .filter(|document| document.kind() == kind)
        .map(|document| view(document, Some(drive_id)))
        .collect()
}

/// Creates a document of `kind`, optionally listing it in a drive and
/// naming it, and returns its id.
///
/// # Errors
///
/// Returns an error if the reactor cannot create the document, the drive
/// is unknown, or the name is refused.
pub fn create_document<R: Reactor>(
    reactor: &mut R,
    kind: DocumentKind,
    name: &str,
    drive_id: Option<&str>,
) -> Result<Phid, ApiError> {
    let id: Phid = reactor.add_document(kind)?;

    if let Some(drive_id) = drive_id.filter(|drive_id| !drive_id.is_empty()) {
        reactor.add_file(
            drive_id,
            DriveNode {
                id: id.clone(),
                name: name.to_string(),
                document_type: String::from(kind.document_type()),
            },
        )?;
    }

    if !name.is_empty() {
        let result: ActionResult = reactor.add_action(
            id.as_str(),
            ActionRecord::global(SET_NAME, Value::String(name.to_string())),
        );
        if !result.is_success() {
            return Err(ApiError::ActionFailed {
                action: String::from("setName"),
                message: result
                    .error
                    .unwrap_or_else(|| String::from("Failed to setName")),
            });
        }
    }

    info!(document_id = %id, document_type = kind.document_type(), name, "Created document");
    Ok(id)
}

/// Executes a `<Prefix>_<actionName>` mutation against a document.
///
/// # Arguments
///
/// * `reactor` - The document host
/// * `mutation` - The mutation name, e.g. `ResourceInstance_recordUsage`
/// * `document_id` - The document to change
/// * `input` - The action input
///
/// # Returns
///
/// * `Ok(true)` once the reactor has applied the action
///
/// # Errors
///
/// Returns an error if:
/// - The mutation names no known document type and action
/// - No document has that id, or it is of another type
/// - The reactor refuses the action; the message is the reactor's, or
///   `Failed to <actionName>` if it gave none
pub fn execute_mutation<R: Reactor>(
    reactor: &mut R,
    mutation: &str,
    document_id: &str,
    input: Value,
) -> Result<bool, ApiError> {
    let unknown = || ApiError::UnknownMutation {
        mutation: mutation.to_string(),
    };
    let (prefix, name) = mutation.split_once('_').ok_or_else(unknown)?;
    let kind: DocumentKind = DocumentKind::from_graphql_name(prefix).map_err(|_| unknown())?;
    let action_type: String = action_type_for(name);
    if action_name(&action_type) != name || !kind.accepts(&action_type) {
        return Err(unknown());
    }

    if document_id.is_empty() {
        return Err(ApiError::DocumentIdRequired);
    }
    let document: &AnyDocument = reactor
        .get_document(document_id)
        .ok_or(ApiError::DocumentNotFound)?;
    ensure_kind(document, kind)?;

    info!(document_id, mutation, action_type = %action_type, "Executing mutation");
    let result: ActionResult =
        reactor.add_action(document_id, ActionRecord::global(action_type, input));
    if result.is_success() {
        return Ok(true);
    }

    let message: String = result
        .error
        .unwrap_or_else(|| format!("Failed to {name}"));
    warn!(document_id, mutation, error = %message, "Mutation failed");
    Err(ApiError::ActionFailed {
        action: name.to_string(),
        message,
    })
}
