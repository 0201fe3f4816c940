// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Factories, type predicates and persistence helpers, generic over the
//! document model.

use crate::document::Document;
use crate::error::CoreError;
use crate::model::DocumentModel;
use resource_services_domain::{DateTime, DomainError, Phid};
use serde_json::Value;
use std::io::{Read, Write};
use time::OffsetDateTime;

/// Returns the current time, truncated to milliseconds.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if the clock reports a time that
/// RFC 3339 cannot represent.
pub fn now_utc() -> Result<DateTime, CoreError> {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let truncated: OffsetDateTime = now.replace_millisecond(now.millisecond()).map_err(|err| {
        DomainError::InvalidDateTime {
            value: now.to_string(),
            reason: err.to_string(),
        }
    })?;
    Ok(DateTime::from_offset(truncated)?)
}

/// Builds a state from the model's defaults, overridden field by field by
/// `partial`.
///
/// # Arguments
///
/// * `partial` - A JSON object whose fields replace the default ones
///
/// # Errors
///
/// Returns `CoreError::Serialization` if `partial` is not an object or the
/// merged fields do not form a valid state, and
/// `CoreError::DomainViolation` if the state breaks a model invariant.
pub fn create_state<M: DocumentModel>(partial: Option<&Value>) -> Result<M::State, CoreError> {
    let mut merged: Value = serde_json::to_value(M::State::default())?;
    match (partial, &mut merged) {
        (None, _) => {}
        (Some(Value::Object(overrides)), Value::Object(fields)) => {
            for (key, value) in overrides {
                fields.insert(key.clone(), value.clone());
            }
        }
        (Some(_), _) => {
            return Err(CoreError::Serialization(String::from(
                "partial state must be a JSON object",
            )));
        }
    }
    let state: M::State = serde_json::from_value(merged)?;
    M::validate_state(&state)?;
    Ok(state)
}

/// Creates a new document with a random id, created now.
///
/// # Arguments
///
/// * `initial` - Starting global state; the model's default if `None`
///
/// # Errors
///
/// Returns `CoreError` if the current time cannot be represented.
pub fn create_document<M: DocumentModel>(
    initial: Option<M::State>,
) -> Result<Document<M>, CoreError> {
    let id: Phid = Phid::new(uuid::Uuid::new_v4().to_string());
    let created: DateTime = now_utc()?;
    Ok(Document::with_state(id, created, initial.unwrap_or_default()))
}

/// Returns true if `value` is a valid global state of the model.
#[must_use]
pub fn is_state_of_type<M: DocumentModel>(value: &Value) -> bool {
    assert_is_state_of_type::<M>(value).is_ok()
}

/// Parses `value` as a global state of the model.
///
/// # Errors
///
/// Returns `CoreError::Serialization` if the value does not have the
/// state's shape and `CoreError::DomainViolation` if it breaks a model
/// invariant.
pub fn assert_is_state_of_type<M: DocumentModel>(value: &Value) -> Result<M::State, CoreError> {
    let state: M::State = serde_json::from_value(value.clone())?;
    M::validate_state(&state)?;
    Ok(state)
}

/// Returns true if `value` is a document of the model.
#[must_use]
pub fn is_document_of_type<M: DocumentModel>(value: &Value) -> bool {
    assert_is_document_of_type::<M>(value).is_ok()
}

/// Parses `value` as a document of the model.
///
/// # Errors
///
/// Returns `CoreError::DocumentTypeMismatch` if the header names another
/// document type, `CoreError::Serialization` if the document is malformed,
/// and `CoreError::DomainViolation` if its state breaks a model invariant.
pub fn assert_is_document_of_type<M: DocumentModel>(
    value: &Value,
) -> Result<Document<M>, CoreError> {
    let found: &str = value
        .pointer("/header/documentType")
        .and_then(Value::as_str)
        .unwrap_or("<missing>");
    if found != M::DOCUMENT_TYPE {
        return Err(CoreError::DocumentTypeMismatch {
            expected: String::from(M::DOCUMENT_TYPE),
            found: found.to_string(),
        });
    }
    let document: Document<M> = serde_json::from_value(value.clone())?;
    M::validate_state(&document.state.global)?;
    Ok(document)
}

/// Writes a document as pretty-printed JSON.
///
/// # Errors
///
/// Returns `CoreError::Serialization` if writing fails.
pub fn save_to_writer<M: DocumentModel, W: Write>(
    document: &Document<M>,
    writer: W,
) -> Result<(), CoreError> {
    serde_json::to_writer_pretty(writer, document)?;
    Ok(())
}

/// Reads a document written by [`save_to_writer`] and verifies that its
/// operation log reproduces its saved state.
///
/// # Errors
///
/// Returns `CoreError` if the document is malformed, of another type, or
/// its log diverges from its state.
pub fn load_from_reader<M: DocumentModel, R: Read>(reader: R) -> Result<Document<M>, CoreError> {
    let value: Value = serde_json::from_reader(reader)?;
    let document: Document<M> = assert_is_document_of_type(&value)?;
    document.verify()?;
    Ok(document)
}
