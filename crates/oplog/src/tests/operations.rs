// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ActionRecord, Operation, Operations, Revision, Scope};
use resource_services_domain::DateTime;
use serde_json::{Value, json};

fn record(scope: Scope) -> ActionRecord {
    ActionRecord::new("NOOP", json!({}), scope)
}

fn timestamp() -> DateTime {
    DateTime::parse("2024-01-01T00:00:00.000Z").unwrap()
}

#[test]
fn test_append_numbers_each_scope_independently() {
    let mut operations: Operations = Operations::new();

    operations.append(record(Scope::Global), timestamp(), None);
    operations.append(record(Scope::Local), timestamp(), None);
    let third: &Operation = operations.append(record(Scope::Global), timestamp(), None);

    assert_eq!(third.index, 1);
    assert_eq!(operations.scope(Scope::Global).len(), 2);
    assert_eq!(operations.scope(Scope::Local).len(), 1);
    assert_eq!(operations.scope(Scope::Local)[0].index, 0);
    assert!(operations.is_contiguous());
}

#[test]
fn test_rejected_operation_keeps_error() {
    let mut operations: Operations = Operations::new();
    operations.append(
        record(Scope::Global),
        timestamp(),
        Some(String::from("FAQ item not found")),
    );

    let operation: &Operation = &operations.global[0];
    assert!(operation.is_rejected());
    assert_eq!(operation.error.as_deref(), Some("FAQ item not found"));
}

#[test]
fn test_gaps_are_detected() {
    let mut operations: Operations = Operations::new();
    operations.append(record(Scope::Global), timestamp(), None);
    operations.global[0].index = 3;

    assert!(!operations.is_contiguous());
}

#[test]
fn test_operation_serializes_camel_case() {
    let mut operations: Operations = Operations::new();
    operations.append(record(Scope::Global), timestamp(), None);

    let value: Value = serde_json::to_value(&operations).unwrap();
    assert_eq!(value["global"][0]["index"], 0);
    assert_eq!(
        value["global"][0]["timestampUtcMs"],
        "2024-01-01T00:00:00.000Z"
    );
    assert_eq!(value["global"][0]["action"]["type"], "NOOP");
    assert_eq!(value["local"], json!([]));
}

#[test]
fn test_operations_deserialize_without_local_log() {
    let operations: Operations = serde_json::from_value(json!({"global": []})).unwrap();
    assert!(operations.local.is_empty());
}

#[test]
fn test_revision_increments_per_scope() {
    let mut revision: Revision = Revision::default();

    assert_eq!(revision.increment(Scope::Global), 1);
    assert_eq!(revision.increment(Scope::Global), 2);
    assert_eq!(revision.increment(Scope::Local), 1);
    assert_eq!(revision.get(Scope::Global), 2);
    assert_eq!(revision.get(Scope::Local), 1);
}
