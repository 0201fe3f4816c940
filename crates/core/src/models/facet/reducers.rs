// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::FacetState;
use super::actions::{
    AddOptionInput, RemoveOptionInput, ReorderOptionsInput, SetFacetDescriptionInput,
    SetFacetNameInput, UpdateOptionInput,
};
use crate::list::{next_display_order, remove_by, reorder_by};
use crate::outcome::{NoOp, Outcome};
use resource_services_domain::FacetOption;

// Facet

pub fn set_facet_name(state: &mut FacetState, input: &SetFacetNameInput) -> Outcome {
    state.name.clone_from(&input.name);
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

/// A missing description clears the current one.
pub fn set_facet_description(state: &mut FacetState, input: &SetFacetDescriptionInput) -> Outcome {
    state.description.clone_from(&input.description);
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

// Options

pub fn add_option(state: &mut FacetState, input: &AddOptionInput) -> Outcome {
    if state.option(&input.id).is_some() {
        return Outcome::Ignored(NoOp::duplicate("option", &input.id));
    }
    let display_order: i64 = input
        .display_order
        .unwrap_or_else(|| next_display_order(&state.options));
    state.options.push(FacetOption {
        id: input.id.clone(),
        label: input.label.clone(),
        description: input.description.clone(),
        display_order,
        is_default: input.is_default.unwrap_or(false),
    });
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

pub fn update_option(state: &mut FacetState, input: &UpdateOptionInput) -> Outcome {
    let outcome: Outcome = match state.options.iter_mut().find(|option| option.id == input.id) {
        Some(option) => {
            if let Some(label) = &input.label {
                option.label.clone_from(label);
            }
            if input.description.is_some() {
                option.description.clone_from(&input.description);
            }
            if let Some(display_order) = input.display_order {
                option.display_order = display_order;
            }
            if let Some(is_default) = input.is_default {
                option.is_default = is_default;
            }
            Outcome::Applied
        }
        None => Outcome::Ignored(NoOp::not_found("option", &input.id)),
    };
    state.last_modified.clone_from(&input.last_modified);
    outcome
}

pub fn remove_option(state: &mut FacetState, input: &RemoveOptionInput) -> Outcome {
    let outcome: Outcome = match remove_by(&mut state.options, |option| option.id == input.id) {
        Some(_) => Outcome::Applied,
        None => Outcome::Ignored(NoOp::not_found("option", &input.id)),
    };
    state.last_modified.clone_from(&input.last_modified);
    outcome
}

/// Options named in the ordering move to the front; the rest follow in
/// their current order. Display orders are renumbered from zero.
pub fn reorder_options(state: &mut FacetState, input: &ReorderOptionsInput) -> Outcome {
    reorder_by(
        &mut state.options,
        &input.option_ids,
        |option| &option.id,
        |option, position| option.display_order = position,
    );
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}
