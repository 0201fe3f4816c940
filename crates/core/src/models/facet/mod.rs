// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A reusable set of options, e.g. a region or a support level, that
//! services bind to and subscribers choose from.

pub mod actions;
mod reducers;

use crate::error::ReducerError;
use crate::model::DocumentModel;
use crate::outcome::Outcome;
use actions::FacetAction;
use resource_services_domain::{
    DateTime, DomainError, FacetOption, Oid, validate_ordering, validate_unique_keys,
};
use serde::{Deserialize, Serialize};

/// Global state of a facet document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetState {
    pub name: String,
    pub description: Option<String>,
    pub options: Vec<FacetOption>,
    pub last_modified: DateTime,
}

impl FacetState {
    /// Returns the option with `id`.
    #[must_use]
    pub fn option(&self, id: &Oid) -> Option<&FacetOption> {
        self.options.iter().find(|option| &option.id == id)
    }

    /// Returns the options flagged as default.
    pub fn default_options(&self) -> impl Iterator<Item = &FacetOption> {
        self.options.iter().filter(|option| option.is_default)
    }
}

/// The `powerhouse/facet` document model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Facet;

impl DocumentModel for Facet {
    const DOCUMENT_TYPE: &'static str = "powerhouse/facet";
    const GRAPHQL_NAME: &'static str = "Facet";

    type State = FacetState;
    type Action = FacetAction;

    fn reduce(state: &mut FacetState, action: &FacetAction) -> Result<Outcome, ReducerError> {
        use FacetAction as A;

        let outcome: Outcome = match action {
            A::SetFacetName(input) => reducers::set_facet_name(state, input),
            A::SetFacetDescription(input) => reducers::set_facet_description(state, input),
            A::AddOption(input) => reducers::add_option(state, input),
            A::UpdateOption(input) => reducers::update_option(state, input),
            A::RemoveOption(input) => reducers::remove_option(state, input),
            A::ReorderOptions(input) => reducers::reorder_options(state, input),
        };
        Ok(outcome)
    }

    fn validate_state(state: &FacetState) -> Result<(), DomainError> {
        validate_unique_keys("options", &state.options, |option| &option.id)
    }

    fn validate_action(action: &FacetAction) -> Result<(), DomainError> {
        match action {
            FacetAction::ReorderOptions(input) => validate_ordering("optionIds", &input.option_ids),
            _ => Ok(()),
        }
    }
}
