// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{CoreError, ReducerError};
use crate::model::{ActionType, DocumentModel};
use crate::outcome::Outcome;
use crate::utils::now_utc;
use resource_services_domain::{DateTime, Phid};
use resource_services_oplog::{
    ActionRecord, Operation, Operations, Revision, Scope, ValidationError,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// The document-level action that renames a document.
///
/// Its input is the new name as a bare string. It changes the header only
/// and is not recorded in the global operation log.
pub const SET_NAME: &str = "SET_NAME";

/// Identity and bookkeeping of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHeader {
    pub id: Phid,
    pub name: String,
    pub document_type: String,
    pub created_at_utc_iso: DateTime,
    pub last_modified_at_utc_iso: DateTime,
    pub revision: Revision,
}

/// The scoped state of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentState<S> {
    pub global: S,
    #[serde(default)]
    pub local: Map<String, Value>,
}

/// A document of one model: header, state and operation log.
///
/// The state is a projection of the log: replaying `operations.global`
/// from `initial_state` reproduces `state.global`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "", rename_all = "camelCase")]
pub struct Document<M: DocumentModel> {
    pub header: DocumentHeader,
    #[serde(default)]
    pub initial_state: M::State,
    pub state: DocumentState<M::State>,
    pub operations: Operations,
}

impl<M: DocumentModel> Document<M> {
    /// Creates an empty document with the model's default state.
    ///
    /// # Arguments
    ///
    /// * `id` - The document id
    /// * `created` - Creation time, also used as the last-modified time
    #[must_use]
    pub fn new(id: Phid, created: DateTime) -> Self {
        Self::with_state(id, created, M::State::default())
    }

    /// Creates a document starting from an existing global state.
    ///
    /// The state becomes the document's initial state, from which the log
    /// is replayed.
    #[must_use]
    pub fn with_state(id: Phid, created: DateTime, global: M::State) -> Self {
        Self {
            header: DocumentHeader {
                id,
                name: String::new(),
                document_type: String::from(M::DOCUMENT_TYPE),
                created_at_utc_iso: created.clone(),
                last_modified_at_utc_iso: created,
                revision: Revision::default(),
            },
            initial_state: global.clone(),
            state: DocumentState {
                global,
                local: Map::new(),
            },
            operations: Operations::new(),
        }
    }

    /// Returns the document id.
    #[must_use]
    pub const fn id(&self) -> &Phid {
        &self.header.id
    }

    /// Returns the current global state.
    #[must_use]
    pub const fn global_state(&self) -> &M::State {
        &self.state.global
    }

    /// Renames the document.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.header.name = name.into();
    }

    /// Applies a typed action now.
    ///
    /// # Errors
    ///
    /// See [`Document::apply_at`].
    pub fn apply(&mut self, action: impl Into<M::Action>) -> Result<Outcome, CoreError> {
        let timestamp: DateTime = now_utc()?;
        self.apply_at(action, timestamp)
    }

    /// Applies a typed action, stamping the operation with `timestamp`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the input fails validation (nothing
    /// is recorded), or `CoreError::Reducer` if the reducer rejects it (the
    /// operation is recorded with its error and the state is unchanged).
    pub fn apply_at(
        &mut self,
        action: impl Into<M::Action>,
        timestamp: DateTime,
    ) -> Result<Outcome, CoreError> {
        let action: M::Action = action.into();
        M::validate_action(&action)
            .map_err(|err| ValidationError::new(action.action_type(), err.to_string()))?;
        let record: ActionRecord = ActionRecord::from_action(&action, Scope::Global)?;
        self.reduce_and_record(&action, record, timestamp)
    }

    /// Applies an action record now.
    ///
    /// # Errors
    ///
    /// See [`Document::apply_record_at`].
    pub fn apply_record(&mut self, record: ActionRecord) -> Result<Outcome, CoreError> {
        let timestamp: DateTime = now_utc()?;
        self.apply_record_at(record, timestamp)
    }

    /// Applies an action record, stamping the operation with `timestamp`.
    ///
    /// `SET_NAME` renames the document. Types outside the model's catalogue
    /// are passed through untouched. Everything else is decoded, validated,
    /// reduced and appended to the log.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the record targets the local scope
    /// or its input fails validation (nothing is recorded), or
    /// `CoreError::Reducer` if the reducer rejects it (the operation is
    /// recorded with its error and the state is unchanged).
    pub fn apply_record_at(
        &mut self,
        record: ActionRecord,
        timestamp: DateTime,
    ) -> Result<Outcome, CoreError> {
        if record.action_type == SET_NAME {
            let Value::String(name) = record.input else {
                return Err(ValidationError::new(SET_NAME, "input must be a string").into());
            };
            self.header.name = name;
            return Ok(Outcome::Applied);
        }

        if !M::Action::is_known(&record.action_type) {
            debug!(
                document_id = %self.header.id,
                document_type = M::DOCUMENT_TYPE,
                action_type = %record.action_type,
                "Passing through action outside the catalogue"
            );
            return Ok(Outcome::Passthrough);
        }

        if record.scope != Scope::Global {
            return Err(ValidationError::new(
                &record.action_type,
                format!("action applies to the global scope, not {}", record.scope),
            )
            .into());
        }

        let action: M::Action = record.decode()?;
        M::validate_action(&action)
            .map_err(|err| ValidationError::new(&record.action_type, err.to_string()))?;
        self.reduce_and_record(&action, record, timestamp)
    }

    fn reduce_and_record(
        &mut self,
        action: &M::Action,
        record: ActionRecord,
        timestamp: DateTime,
    ) -> Result<Outcome, CoreError> {
        let mut next: M::State = self.state.global.clone();
        let result: Result<Outcome, ReducerError> = M::reduce(&mut next, action);
        let error: Option<String> = match &result {
            Ok(_) => {
                self.state.global = next;
                None
            }
            Err(err) => Some(err.message.clone()),
        };

        let scope: Scope = record.scope;
        let index: u64 = self
            .operations
            .append(record, timestamp.clone(), error)
            .index;
        self.header.revision.increment(scope);
        self.header.last_modified_at_utc_iso = timestamp;

        match &result {
            Ok(Outcome::Ignored(reason)) => debug!(
                document_id = %self.header.id,
                action_type = action.action_type(),
                index,
                %reason,
                "Operation ignored"
            ),
            Err(err) => debug!(
                document_id = %self.header.id,
                action_type = action.action_type(),
                index,
                code = err.code,
                "Operation rejected"
            ),
            Ok(_) => {}
        }

        result.map_err(CoreError::from)
    }

    /// Rebuilds the global state by replaying the global log from the
    /// initial state. Rejected operations are skipped.
    ///
    /// # Errors
    ///
    /// Returns `CoreError` if a logged action no longer decodes or a
    /// previously accepted operation is now rejected.
    pub fn replay(&self) -> Result<M::State, CoreError> {
        let mut state: M::State = self.initial_state.clone();
        for operation in &self.operations.global {
            if operation.is_rejected() {
                continue;
            }
            let action: M::Action = operation.action.decode()?;
            M::reduce(&mut state, &action)?;
        }
        Ok(state)
    }

    /// Checks that the document is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ReplayDiverged` if the log is not contiguous or
    /// does not reproduce the global state, and `CoreError::DomainViolation`
    /// if the state breaks a model invariant.
    pub fn verify(&self) -> Result<(), CoreError> {
        let diverged = || CoreError::ReplayDiverged {
            document_id: self.header.id.to_string(),
        };
        if !self.operations.is_contiguous() {
            return Err(diverged());
        }
        if self.replay()? != self.state.global {
            return Err(diverged());
        }
        M::validate_state(&self.state.global)?;
        Ok(())
    }

    /// Returns the last operation of the global log.
    #[must_use]
    pub fn last_operation(&self) -> Option<&Operation> {
        self.operations.global.last()
    }
}
