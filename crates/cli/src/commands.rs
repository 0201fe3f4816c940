// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The work behind each `rsvc` subcommand, kept free of I/O where possible
//! so it can be exercised directly.

use crate::error::CliError;
use resource_services::{ActionRecord, AnyDocument, DocumentHeader, DocumentKind, Outcome};
use resource_services_api::action_name;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info, warn};

/// Counts of what happened to each record during a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub ignored: usize,
    pub passed_through: usize,
    pub failed: usize,
}

/// A verified document, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    pub header: DocumentHeader,
    pub operations: usize,
    pub rejected: usize,
    pub state: Value,
}

impl std::fmt::Display for Inspection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "id:            {}", self.header.id)?;
        writeln!(f, "name:          {}", self.header.name)?;
        writeln!(f, "document type: {}", self.header.document_type)?;
        writeln!(f, "created:       {}", self.header.created_at_utc_iso)?;
        writeln!(f, "last modified: {}", self.header.last_modified_at_utc_iso)?;
        writeln!(
            f,
            "revision:      {} global, {} local",
            self.header.revision.global, self.header.revision.local
        )?;
        writeln!(
            f,
            "operations:    {} ({} rejected)",
            self.operations, self.rejected
        )?;
        let state: String =
            serde_json::to_string_pretty(&self.state).map_err(|_| std::fmt::Error)?;
        write!(f, "state:\n{state}")
    }
}

/// Reads a file as JSON.
///
/// # Errors
///
/// Returns `CliError::Read` if the file cannot be read and `CliError::Json`
/// if it is not JSON.
pub fn read_json(path: &Path) -> Result<Value, CliError> {
    let raw: String = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

/// Reads a JSON array of action records.
///
/// # Errors
///
/// As [`read_json`], plus `CliError::Json` if an element is not an action
/// record.
pub fn read_records(path: &Path) -> Result<Vec<ActionRecord>, CliError> {
    Ok(serde_json::from_value(read_json(path)?)?)
}

/// Writes `contents` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns `CliError::Write` if the file cannot be written.
pub fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    std::fs::write(path, contents).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "Document written");
    Ok(())
}

/// Applies `records` in order to a fresh document of `kind`.
///
/// A record that fails is logged and skipped; the replay carries on with
/// the next one, as a host would.
///
/// # Errors
///
/// Returns `CliError::Core` if the document cannot be created.
pub fn replay(
    kind: DocumentKind,
    records: Vec<ActionRecord>,
) -> Result<(AnyDocument, ReplaySummary), CliError> {
    let mut document: AnyDocument = AnyDocument::create(kind)?;
    let mut summary: ReplaySummary = ReplaySummary::default();
    info!(
        document_id = %document.id(),
        document_type = kind.document_type(),
        records = records.len(),
        "Replaying actions"
    );

    for (position, record) in records.into_iter().enumerate() {
        let action_type: String = record.action_type.clone();
        match document.apply_record(record) {
            Ok(Outcome::Applied) => {
                summary.applied += 1;
                debug!(position, action_type = %action_type, "Applied");
            }
            Ok(Outcome::Ignored(reason)) => {
                summary.ignored += 1;
                info!(position, action_type = %action_type, %reason, "Ignored");
            }
            Ok(Outcome::Passthrough) => {
                summary.passed_through += 1;
                info!(position, action_type = %action_type, "Not handled by this document");
            }
            Err(err) => {
                summary.failed += 1;
                warn!(position, action_type = %action_type, error = %err, "Failed");
            }
        }
    }

    Ok((document, summary))
}

/// Loads a saved document and checks it against its operation log.
///
/// # Errors
///
/// Returns `CliError::Core` if the document cannot be loaded or its log
/// does not reproduce its state.
pub fn inspect(value: &Value) -> Result<Inspection, CliError> {
    let document: AnyDocument = AnyDocument::from_json(value)?;
    document.verify()?;

    let operations = &document.operations().global;
    Ok(Inspection {
        header: document.header().clone(),
        operations: operations.len(),
        rejected: operations
            .iter()
            .filter(|operation| operation.is_rejected())
            .count(),
        state: document.global_state_json()?,
    })
}

/// One line per action: the action type and its mutation name.
#[must_use]
pub fn list_actions(kind: DocumentKind) -> Vec<String> {
    kind.action_types()
        .iter()
        .map(|action_type| {
            format!(
                "{action_type:<32} {}_{}",
                kind.graphql_name(),
                action_name(action_type)
            )
        })
        .collect()
}
