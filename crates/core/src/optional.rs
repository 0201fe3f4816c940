// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Optional input fields where an empty value means "not given".

use resource_services_domain::Oid;

/// Returns the text, or `None` if it is absent or empty.
#[must_use]
pub fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|text| !text.is_empty()).map(String::from)
}

/// Returns the identifier, or `None` if it is absent or empty.
#[must_use]
pub fn non_empty_id(value: Option<&Oid>) -> Option<Oid> {
    value.filter(|id| !id.as_str().is_empty()).cloned()
}

/// Returns the number, or `None` if it is absent or zero.
#[must_use]
pub fn non_zero(value: Option<i64>) -> Option<i64> {
    value.filter(|number| *number != 0)
}
