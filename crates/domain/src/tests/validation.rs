// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Oid, validate_ordering, validate_unique_keys};

struct Keyed {
    key: String,
}

fn keyed(key: &str) -> Keyed {
    Keyed {
        key: key.to_string(),
    }
}

#[test]
fn test_validate_unique_keys_accepts_distinct_keys() {
    let items: Vec<Keyed> = vec![keyed("a"), keyed("b"), keyed("c")];
    let result: Result<(), DomainError> =
        validate_unique_keys("configuration", &items, |item| item.key.as_str());
    assert!(result.is_ok());
}

#[test]
fn test_validate_unique_keys_accepts_empty_collection() {
    let items: Vec<Keyed> = Vec::new();
    assert!(validate_unique_keys("configuration", &items, |item| item.key.as_str()).is_ok());
}

#[test]
fn test_validate_unique_keys_reports_first_duplicate() {
    let items: Vec<Keyed> = vec![keyed("a"), keyed("b"), keyed("a"), keyed("b")];
    let result: Result<(), DomainError> =
        validate_unique_keys("usageMetrics", &items, |item| item.key.as_str());
    assert_eq!(
        result,
        Err(DomainError::DuplicateKey {
            collection: "usageMetrics",
            key: String::from("a"),
        })
    );
}

#[test]
fn test_validate_ordering_rejects_repeated_id() {
    let ordering: Vec<Oid> = vec![Oid::from("x"), Oid::from("y"), Oid::from("x")];
    let result: Result<(), DomainError> = validate_ordering("options", &ordering);
    assert!(matches!(
        result,
        Err(DomainError::InvalidOrdering { collection: "options", .. })
    ));
}

#[test]
fn test_validate_ordering_accepts_permutation() {
    let ordering: Vec<Oid> = vec![Oid::from("y"), Oid::from("x")];
    assert!(validate_ordering("options", &ordering).is_ok());
}
