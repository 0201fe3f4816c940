// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use resource_services_domain::{DateTime, Oid};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFacetNameInput {
    pub name: String,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFacetDescriptionInput {
    pub description: Option<String>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOptionInput {
    pub id: Oid,
    pub label: String,
    pub description: Option<String>,
    pub display_order: Option<i64>,
    pub is_default: Option<bool>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOptionInput {
    pub id: Oid,
    pub label: Option<String>,
    pub description: Option<String>,
    pub display_order: Option<i64>,
    pub is_default: Option<bool>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveOptionInput {
    pub id: Oid,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderOptionsInput {
    pub option_ids: Vec<Oid>,
    pub last_modified: DateTime,
}

document_actions! {
    /// Actions accepted by a facet document.
    pub enum FacetAction {
        SetFacetName(SetFacetNameInput) => "SET_FACET_NAME",
        SetFacetDescription(SetFacetDescriptionInput) => "SET_FACET_DESCRIPTION",
        AddOption(AddOptionInput) => "ADD_OPTION",
        UpdateOption(UpdateOptionInput) => "UPDATE_OPTION",
        RemoveOption(RemoveOptionInput) => "REMOVE_OPTION",
        ReorderOptions(ReorderOptionsInput) => "REORDER_OPTIONS",
    }
}
