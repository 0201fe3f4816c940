// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use resource_services::{AnyDocument, CoreError, DocumentHeader};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether the reactor applied an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionStatus {
    Success,
    Error,
}

/// The reactor's answer to `add_action`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub status: ActionStatus,
    /// Why the action was refused; `None` on success.
    pub error: Option<String>,
}

impl ActionResult {
    /// Creates a successful result.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            status: ActionStatus::Success,
            error: None,
        }
    }

    /// Creates a failed result.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ActionStatus::Error,
            error: Some(message.into()),
        }
    }

    /// Returns true if the action was applied.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == ActionStatus::Success
    }
}

/// A document as returned by `getDocument` and `getDocuments`: the header
/// flattened next to the global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView {
    pub drive_id: Option<String>,
    pub id: String,
    pub name: String,
    pub document_type: String,
    pub created: String,
    pub last_modified: String,
    /// Global revision.
    pub revision: u64,
    pub state: Value,
    #[serde(rename = "stateJSON")]
    pub state_json: Value,
}

impl DocumentView {
    /// Builds the view of `document`.
    ///
    /// # Arguments
    ///
    /// * `document` - The document to render
    /// * `drive_id` - The drive the document was looked up in, if any
    ///
    /// # Errors
    ///
    /// Returns the serialization error if the state cannot be rendered.
    pub fn from_document(
        document: &AnyDocument,
        drive_id: Option<&str>,
    ) -> Result<Self, CoreError> {
        let state: Value = document.global_state_json()?;
        let header: &DocumentHeader = document.header();
        Ok(Self {
            drive_id: drive_id.map(String::from),
            id: header.id.to_string(),
            name: header.name.clone(),
            document_type: header.document_type.clone(),
            created: header.created_at_utc_iso.to_string(),
            last_modified: header.last_modified_at_utc_iso.to_string(),
            revision: header.revision.global,
            state: state.clone(),
            state_json: state,
        })
    }
}
