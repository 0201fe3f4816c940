// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{InvalidScope, Scope};
use std::str::FromStr;

#[test]
fn test_scope_defaults_to_global() {
    assert_eq!(Scope::default(), Scope::Global);
}

#[test]
fn test_scope_wire_literals_are_lowercase() {
    assert_eq!(serde_json::to_string(&Scope::Local).unwrap(), "\"local\"");
    let parsed: Scope = serde_json::from_str("\"global\"").unwrap();
    assert_eq!(parsed, Scope::Global);
}

#[test]
fn test_scope_from_str_rejects_unknown() {
    assert_eq!(Scope::from_str("local"), Ok(Scope::Local));
    assert_eq!(
        Scope::from_str("GLOBAL"),
        Err(InvalidScope(String::from("GLOBAL")))
    );
}
