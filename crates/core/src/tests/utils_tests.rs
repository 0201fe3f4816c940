// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{minute, new_document};
use crate::models::resource_instance::ResourceInstanceState;
use crate::models::resource_instance::actions::SetConfigurationInput;
use crate::{
    CoreError, Document, Facet, ResourceInstance, assert_is_document_of_type,
    assert_is_state_of_type, create_document, create_state, is_document_of_type,
    is_state_of_type, load_from_reader, now_utc, save_to_writer,
};
use resource_services_domain::{ConfigSource, DateTime, InstanceStatus, Oid};
use serde_json::{Value, json};

fn configured() -> Document<ResourceInstance> {
    let mut document: Document<ResourceInstance> = new_document();
    for (at, key) in (1_u32..).zip(["region", "size"]) {
        document
            .apply_at(
                SetConfigurationInput {
                    id: Oid::new(key),
                    key: String::from(key),
                    value: String::from("value"),
                    source: ConfigSource::System,
                    last_modified: minute(at),
                },
                minute(at),
            )
            .unwrap();
    }
    document
}

#[test]
fn test_now_utc_has_millisecond_precision() {
    let now: DateTime = now_utc().unwrap();

    assert!(now.as_str().ends_with('Z'));
    assert_eq!(now.to_offset().unwrap().nanosecond() % 1_000_000, 0);
}

#[test]
fn test_create_state_merges_over_defaults() {
    let state: ResourceInstanceState =
        create_state::<ResourceInstance>(Some(&json!({ "name": "Node", "status": "ACTIVE" })))
            .unwrap();

    assert_eq!(state.name, "Node");
    assert_eq!(state.status, InstanceStatus::Active);
    assert!(state.configuration.is_empty());
    assert_eq!(state.last_modified.as_str(), "1970-01-01T00:00:00.000Z");
}

#[test]
fn test_create_state_rejects_duplicate_keys() {
    let partial: Value = json!({
        "configuration": [
            { "id": "a", "key": "region", "value": "eu", "source": "SYSTEM" },
            { "id": "b", "key": "region", "value": "us", "source": "SYSTEM" }
        ]
    });

    let result = create_state::<ResourceInstance>(Some(&partial));

    assert!(matches!(result, Err(CoreError::DomainViolation(_))));
}

#[test]
fn test_create_state_rejects_non_objects() {
    let result = create_state::<ResourceInstance>(Some(&json!([1, 2])));

    assert!(matches!(result, Err(CoreError::Serialization(_))));
}

#[test]
fn test_create_document_uses_fresh_ids() {
    let first: Document<Facet> = create_document(None).unwrap();
    let second: Document<Facet> = create_document(None).unwrap();

    assert_ne!(first.id(), second.id());
    assert_eq!(first.header.document_type, "powerhouse/facet");
    assert_eq!(
        first.header.created_at_utc_iso,
        first.header.last_modified_at_utc_iso
    );
}

#[test]
fn test_state_type_predicates() {
    let valid: Value = serde_json::to_value(ResourceInstanceState::default()).unwrap();
    let invalid: Value = json!({ "status": "SLEEPING" });

    assert!(is_state_of_type::<ResourceInstance>(&valid));
    assert!(!is_state_of_type::<ResourceInstance>(&invalid));
    assert!(assert_is_state_of_type::<ResourceInstance>(&invalid).is_err());
}

#[test]
fn test_document_type_predicates() {
    let value: Value = serde_json::to_value(configured()).unwrap();

    assert!(is_document_of_type::<ResourceInstance>(&value));
    assert!(!is_document_of_type::<Facet>(&value));
    let err: CoreError = assert_is_document_of_type::<Facet>(&value).unwrap_err();
    assert_eq!(
        err,
        CoreError::DocumentTypeMismatch {
            expected: String::from("powerhouse/facet"),
            found: String::from("powerhouse/resource-instance"),
        }
    );
}

#[test]
fn test_save_and_load_round_trip() {
    let document: Document<ResourceInstance> = configured();
    let mut buffer: Vec<u8> = Vec::new();

    save_to_writer(&document, &mut buffer).unwrap();
    let loaded: Document<ResourceInstance> = load_from_reader(buffer.as_slice()).unwrap();

    assert_eq!(loaded, document);
}

#[test]
fn test_load_detects_diverged_log() {
    let mut value: Value = serde_json::to_value(configured()).unwrap();
    value["state"]["global"]["configuration"][0]["value"] = json!("edited by hand");
    let bytes: Vec<u8> = serde_json::to_vec(&value).unwrap();

    let result = load_from_reader::<ResourceInstance, _>(bytes.as_slice());

    assert!(matches!(result, Err(CoreError::ReplayDiverged { .. })));
}

#[test]
fn test_load_detects_missing_operation() {
    let mut value: Value = serde_json::to_value(configured()).unwrap();
    value["operations"]["global"]
        .as_array_mut()
        .unwrap()
        .remove(0);
    let bytes: Vec<u8> = serde_json::to_vec(&value).unwrap();

    let result = load_from_reader::<ResourceInstance, _>(bytes.as_slice());

    assert!(matches!(result, Err(CoreError::ReplayDiverged { .. })));
}
