// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ReducerError;
use crate::outcome::Outcome;
use resource_services_domain::DomainError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// A closed catalogue of actions.
pub trait ActionType {
    /// Every action type literal in the catalogue.
    const TYPES: &'static [&'static str];

    /// Returns the type literal of this action.
    fn action_type(&self) -> &'static str;

    /// Returns true if `action_type` belongs to the catalogue.
    #[must_use]
    fn is_known(action_type: &str) -> bool {
        Self::TYPES.contains(&action_type)
    }
}

/// A document type: its state, its actions and how one changes the other.
pub trait DocumentModel {
    /// The document type identifier, e.g. `powerhouse/facet`.
    const DOCUMENT_TYPE: &'static str;
    /// The prefix of the document's query and mutation names, e.g. `Facet`.
    const GRAPHQL_NAME: &'static str;

    /// The global state of the document.
    type State: Clone + Default + PartialEq + Debug + Serialize + DeserializeOwned;
    /// The document's action catalogue.
    type Action: ActionType + Clone + PartialEq + Debug + Serialize + DeserializeOwned;

    /// Applies one action to the state in place.
    ///
    /// # Errors
    ///
    /// Returns `ReducerError` if a declared guard rejects the action. The
    /// state may have been partially modified; callers must discard it.
    fn reduce(state: &mut Self::State, action: &Self::Action) -> Result<Outcome, ReducerError>;

    /// Checks state invariants that the type system does not encode.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` naming the first violated invariant.
    fn validate_state(_state: &Self::State) -> Result<(), DomainError> {
        Ok(())
    }

    /// Checks action inputs beyond their declared shape.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if the input is well formed but unusable.
    fn validate_action(_action: &Self::Action) -> Result<(), DomainError> {
        Ok(())
    }
}
