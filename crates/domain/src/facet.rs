// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::scalars::Oid;
use serde::{Deserialize, Serialize};

/// One selectable option of a facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetOption {
    pub id: Oid,
    pub label: String,
    pub description: Option<String>,
    pub display_order: i64,
    pub is_default: bool,
}
