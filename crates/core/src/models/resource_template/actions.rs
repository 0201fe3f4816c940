// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use resource_services_domain::{DateTime, Oid};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTemplateInfoInput {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFaqItemInput {
    pub id: Oid,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub display_order: Option<i64>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFaqItemInput {
    pub id: Oid,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub display_order: Option<i64>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFaqItemInput {
    pub id: Oid,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderFaqItemsInput {
    pub faq_ids: Vec<Oid>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFacetPresetInput {
    pub category_key: String,
    pub category_label: String,
    pub selected_options: Vec<Oid>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFacetPresetInput {
    pub category_key: String,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPresetOptionInput {
    pub category_key: String,
    pub option_id: Oid,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovePresetOptionInput {
    pub category_key: String,
    pub option_id: Oid,
    pub last_modified: DateTime,
}

document_actions! {
    /// Actions accepted by a resource template document.
    pub enum ResourceTemplateAction {
        UpdateTemplateInfo(UpdateTemplateInfoInput) => "UPDATE_TEMPLATE_INFO",
        AddFaqItem(AddFaqItemInput) => "ADD_FAQ_ITEM",
        UpdateFaqItem(UpdateFaqItemInput) => "UPDATE_FAQ_ITEM",
        DeleteFaqItem(DeleteFaqItemInput) => "DELETE_FAQ_ITEM",
        ReorderFaqItems(ReorderFaqItemsInput) => "REORDER_FAQ_ITEMS",
        SetFacetPreset(SetFacetPresetInput) => "SET_FACET_PRESET",
        RemoveFacetPreset(RemoveFacetPresetInput) => "REMOVE_FACET_PRESET",
        AddPresetOption(AddPresetOptionInput) => "ADD_PRESET_OPTION",
        RemovePresetOption(RemovePresetOptionInput) => "REMOVE_PRESET_OPTION",
    }
}
