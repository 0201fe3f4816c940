// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Content attached to a resource template.

use crate::scalars::Oid;
use serde::{Deserialize, Serialize};

/// A frequently asked question shown alongside the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    pub id: Oid,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub display_order: i64,
}

/// Options pre-selected for one facet category, keyed by `category_key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetPreset {
    pub category_key: String,
    pub category_label: String,
    pub selected_options: Vec<Oid>,
}
