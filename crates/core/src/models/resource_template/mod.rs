// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The customer-facing description of a resource: its FAQ and the facet
//! choices it comes preconfigured with.
//!
//! Unlike the other models, this one declares its failures: an action on
//! a missing FAQ item or preset is rejected with a [`ReducerError`] rather
//! than ignored.

pub mod actions;
mod reducers;

use crate::error::ReducerError;
use crate::model::DocumentModel;
use crate::outcome::Outcome;
use actions::ResourceTemplateAction;
use resource_services_domain::{
    DateTime, DomainError, FacetPreset, FaqItem, Oid, Phid, validate_ordering,
    validate_unique_keys,
};
use serde::{Deserialize, Serialize};

/// Error codes raised by the template reducers.
pub mod codes {
    pub const DUPLICATE_FAQ_ID: &str = "DuplicateFaqIdError";
    pub const FAQ_NOT_FOUND: &str = "FaqNotFoundError";
    pub const DELETE_FAQ_NOT_FOUND: &str = "DeleteFaqNotFoundError";
    pub const FACET_PRESET_NOT_FOUND: &str = "FacetPresetNotFoundError";
    pub const ADD_PRESET_OPTION_NOT_FOUND: &str = "AddPresetOptionNotFoundError";
    pub const REMOVE_PRESET_OPTION_NOT_FOUND: &str = "RemovePresetOptionNotFoundError";
}

/// Global state of a resource template document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTemplateState {
    pub id: Phid,
    pub title: String,
    pub summary: String,
    pub faq_fields: Vec<FaqItem>,
    pub facet_presets: Vec<FacetPreset>,
    pub last_modified: DateTime,
}

impl ResourceTemplateState {
    /// Returns the FAQ item with `id`.
    #[must_use]
    pub fn faq_item(&self, id: &Oid) -> Option<&FaqItem> {
        self.faq_fields.iter().find(|item| &item.id == id)
    }

    /// Returns the preset for `category_key`.
    #[must_use]
    pub fn facet_preset(&self, category_key: &str) -> Option<&FacetPreset> {
        self.facet_presets
            .iter()
            .find(|preset| preset.category_key == category_key)
    }
}

/// The `powerhouse/resource-template` document model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourceTemplate;

impl DocumentModel for ResourceTemplate {
    const DOCUMENT_TYPE: &'static str = "powerhouse/resource-template";
    const GRAPHQL_NAME: &'static str = "ResourceTemplate";

    type State = ResourceTemplateState;
    type Action = ResourceTemplateAction;

    fn reduce(
        state: &mut ResourceTemplateState,
        action: &ResourceTemplateAction,
    ) -> Result<Outcome, ReducerError> {
        use ResourceTemplateAction as A;

        match action {
            A::UpdateTemplateInfo(input) => Ok(reducers::update_template_info(state, input)),
            A::AddFaqItem(input) => reducers::add_faq_item(state, input),
            A::UpdateFaqItem(input) => reducers::update_faq_item(state, input),
            A::DeleteFaqItem(input) => reducers::delete_faq_item(state, input),
            A::ReorderFaqItems(input) => Ok(reducers::reorder_faq_items(state, input)),
            A::SetFacetPreset(input) => Ok(reducers::set_facet_preset(state, input)),
            A::RemoveFacetPreset(input) => reducers::remove_facet_preset(state, input),
            A::AddPresetOption(input) => reducers::add_preset_option(state, input),
            A::RemovePresetOption(input) => reducers::remove_preset_option(state, input),
        }
    }

    fn validate_state(state: &ResourceTemplateState) -> Result<(), DomainError> {
        validate_unique_keys("faqFields", &state.faq_fields, |item| &item.id)?;
        validate_unique_keys("facetPresets", &state.facet_presets, |preset| {
            preset.category_key.as_str()
        })
    }

    fn validate_action(action: &ResourceTemplateAction) -> Result<(), DomainError> {
        match action {
            ResourceTemplateAction::ReorderFaqItems(input) => {
                validate_ordering("faqIds", &input.faq_ids)
            }
            ResourceTemplateAction::SetFacetPreset(input) => {
                validate_ordering("selectedOptions", &input.selected_options)
            }
            _ => Ok(()),
        }
    }
}
