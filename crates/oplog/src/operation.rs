// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::record::ActionRecord;
use crate::scope::Scope;
use resource_services_domain::DateTime;
use serde::{Deserialize, Serialize};

/// A reduced action, as stored in the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Position of this operation in its scope's log, starting at 0.
    pub index: u64,
    /// When the operation was applied.
    pub timestamp_utc_ms: DateTime,
    /// The action exactly as it was submitted.
    pub action: ActionRecord,
    /// Set when the reducer rejected the action; the state was left as it
    /// was before the operation.
    #[serde(default)]
    pub error: Option<String>,
}

impl Operation {
    /// Returns true if the reducer rejected this operation.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        self.error.is_some()
    }
}

/// The per-scope operation logs of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operations {
    #[serde(default)]
    pub global: Vec<Operation>,
    #[serde(default)]
    pub local: Vec<Operation>,
}

impl Operations {
    /// Creates empty logs.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            global: Vec::new(),
            local: Vec::new(),
        }
    }

    /// Returns the log of one scope.
    #[must_use]
    pub fn scope(&self, scope: Scope) -> &[Operation] {
        match scope {
            Scope::Global => &self.global,
            Scope::Local => &self.local,
        }
    }

    /// Returns the index the next operation in `scope` will receive.
    #[must_use]
    pub fn next_index(&self, scope: Scope) -> u64 {
        self.scope(scope).len() as u64
    }

    /// Appends an operation to the log of the action's scope.
    ///
    /// # Arguments
    ///
    /// * `action` - The submitted action
    /// * `timestamp` - When the action was applied
    /// * `error` - The reducer's rejection message, if any
    pub fn append(
        &mut self,
        action: ActionRecord,
        timestamp: DateTime,
        error: Option<String>,
    ) -> &Operation {
        let scope: Scope = action.scope;
        let index: u64 = self.next_index(scope);
        let log: &mut Vec<Operation> = match scope {
            Scope::Global => &mut self.global,
            Scope::Local => &mut self.local,
        };
        log.push(Operation {
            index,
            timestamp_utc_ms: timestamp,
            action,
            error,
        });
        &log[log.len() - 1]
    }

    /// Checks that every log is numbered 0, 1, 2, ... without gaps.
    #[must_use]
    pub fn is_contiguous(&self) -> bool {
        Scope::ALL.iter().all(|scope| {
            self.scope(*scope)
                .iter()
                .zip(0_u64..)
                .all(|(operation, expected)| operation.index == expected)
        })
    }
}

/// Number of operations applied per scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision {
    #[serde(default)]
    pub global: u64,
    #[serde(default)]
    pub local: u64,
}

impl Revision {
    /// Returns the revision of one scope.
    #[must_use]
    pub const fn get(&self, scope: Scope) -> u64 {
        match scope {
            Scope::Global => self.global,
            Scope::Local => self.local,
        }
    }

    /// Increments the revision of one scope and returns the new value.
    pub const fn increment(&mut self, scope: Scope) -> u64 {
        let slot: &mut u64 = match scope {
            Scope::Global => &mut self.global,
            Scope::Local => &mut self.local,
        };
        *slot += 1;
        *slot
    }
}
