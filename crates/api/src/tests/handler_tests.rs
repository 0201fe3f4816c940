// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    DRIVE, create_in_drive, create_test_reactor, initialize_instance_input, record_usage_input,
};
use crate::{
    ApiError, DocumentView, InMemoryReactor, Reactor, create_document, execute_mutation,
    get_document, get_documents,
};
use resource_services::DocumentKind;
use resource_services_domain::Phid;
use serde_json::{Value, json};

#[test]
fn test_create_document_names_and_files_it() {
    let mut reactor: InMemoryReactor = create_test_reactor();

    let id: Phid = create_in_drive(&mut reactor, DocumentKind::Facet, "Region");

    let view: DocumentView =
        get_document(&reactor, DocumentKind::Facet, id.as_str(), Some(DRIVE)).unwrap();
    assert_eq!(view.name, "Region");
    assert_eq!(view.document_type, "powerhouse/facet");
    assert_eq!(view.drive_id.as_deref(), Some(DRIVE));
    assert_eq!(view.revision, 0);
    assert_eq!(view.state, view.state_json);
    assert_eq!(reactor.drive(DRIVE).unwrap()[0].name, "Region");
}

#[test]
fn test_create_document_without_drive_or_name() {
    let mut reactor: InMemoryReactor = create_test_reactor();

    let id: Phid = create_document(&mut reactor, DocumentKind::Facet, "", None).unwrap();

    assert!(reactor.get_documents(DRIVE).is_empty());
    assert_eq!(reactor.get_document(id.as_str()).unwrap().header().name, "");
}

#[test]
fn test_get_document_requires_id() {
    let reactor: InMemoryReactor = create_test_reactor();

    let err: ApiError = get_document(&reactor, DocumentKind::Facet, "", None).unwrap_err();

    assert_eq!(err.to_string(), "Document id is required");
}

#[test]
fn test_get_document_checks_drive_membership() {
    let mut reactor: InMemoryReactor = create_test_reactor();
    reactor.add_drive("drive-2");
    let id: Phid = create_in_drive(&mut reactor, DocumentKind::Facet, "Region");

    let err: ApiError =
        get_document(&reactor, DocumentKind::Facet, id.as_str(), Some("drive-2")).unwrap_err();

    assert_eq!(
        err.to_string(),
        format!("Document with id {id} is not part of drive-2")
    );
}

#[test]
fn test_get_document_rejects_other_types() {
    let mut reactor: InMemoryReactor = create_test_reactor();
    let id: Phid = create_in_drive(&mut reactor, DocumentKind::Facet, "Region");

    let result = get_document(&reactor, DocumentKind::ServiceOffering, id.as_str(), None);

    assert!(matches!(result, Err(ApiError::WrongDocumentType { .. })));
}

#[test]
fn test_get_documents_filters_by_type() {
    let mut reactor: InMemoryReactor = create_test_reactor();
    create_in_drive(&mut reactor, DocumentKind::Facet, "Region");
    create_in_drive(&mut reactor, DocumentKind::ServiceOffering, "Hosting");
    create_in_drive(&mut reactor, DocumentKind::Facet, "Support");

    let views: Vec<DocumentView> = get_documents(&reactor, DocumentKind::Facet, DRIVE).unwrap();

    let names: Vec<&str> = views.iter().map(|view| view.name.as_str()).collect();
    assert_eq!(names, vec!["Region", "Support"]);
}

#[test]
fn test_execute_mutation_applies_action() {
    let mut reactor: InMemoryReactor = create_test_reactor();
    let id: Phid = create_in_drive(&mut reactor, DocumentKind::ResourceInstance, "Node");

    let applied: bool = execute_mutation(
        &mut reactor,
        "ResourceInstance_initializeInstance",
        id.as_str(),
        initialize_instance_input(),
    )
    .unwrap();
    execute_mutation(
        &mut reactor,
        "ResourceInstance_recordUsage",
        id.as_str(),
        record_usage_input(42),
    )
    .unwrap();

    assert!(applied);
    let view: DocumentView =
        get_document(&reactor, DocumentKind::ResourceInstance, id.as_str(), None).unwrap();
    assert_eq!(view.revision, 2);
    assert_eq!(view.state["usageMetrics"][0]["currentValue"], 42);
    assert_eq!(view.state["usageMetrics"][0]["limit"], Value::Null);
}

#[test]
fn test_non_camel_case_mutation_appends_nothing() {
    let mut reactor: InMemoryReactor = create_test_reactor();
    let id: Phid = create_in_drive(&mut reactor, DocumentKind::Facet, "Region");

    let result = execute_mutation(
        &mut reactor,
        "Facet_set_facet_name",
        id.as_str(),
        json!({ "name": "Region", "lastModified": "2024-01-01T00:00:00.000Z" }),
    );

    assert!(matches!(result, Err(ApiError::UnknownMutation { .. })));
    let view: DocumentView =
        get_document(&reactor, DocumentKind::Facet, id.as_str(), None).unwrap();
    assert_eq!(view.revision, 0);
}

#[test]
fn test_empty_optional_inputs_are_stored_as_null() {
    let mut reactor: InMemoryReactor = create_test_reactor();
    let id: Phid = create_in_drive(&mut reactor, DocumentKind::ResourceInstance, "Node");
    let mut usage: Value = record_usage_input(5);
    usage["limit"] = json!(0);

    execute_mutation(
        &mut reactor,
        "ResourceInstance_recordUsage",
        id.as_str(),
        usage,
    )
    .unwrap();
    execute_mutation(
        &mut reactor,
        "ResourceInstance_suspendInstance",
        id.as_str(),
        json!({
            "suspendedAt": "2024-01-01T00:06:00.000Z",
            "reason": "",
            "lastModified": "2024-01-01T00:06:00.000Z"
        }),
    )
    .unwrap();

    let view: DocumentView =
        get_document(&reactor, DocumentKind::ResourceInstance, id.as_str(), None).unwrap();
    assert_eq!(view.state["usageMetrics"][0]["limit"], Value::Null);
    assert_eq!(view.state["suspensionReason"], Value::Null);
    assert_eq!(view.state["status"], "SUSPENDED");
}

#[test]
fn test_execute_mutation_on_missing_document() {
    let mut reactor: InMemoryReactor = create_test_reactor();

    let err: ApiError = execute_mutation(
        &mut reactor,
        "ResourceInstance_recordUsage",
        "missing",
        record_usage_input(1),
    )
    .unwrap_err();

    assert_eq!(err, ApiError::DocumentNotFound);
    assert_eq!(err.to_string(), "Document not found");
}

#[test]
fn test_execute_mutation_rejects_unknown_names() {
    let mut reactor: InMemoryReactor = create_test_reactor();
    let id: Phid = create_in_drive(&mut reactor, DocumentKind::Facet, "Region");

    for mutation in [
        "Facet_addTier",
        "Invoice_addLine",
        "addOption",
        "Facet_createDocument",
        "Facet_set_facet_name",
        "Facet_SET_FACET_NAME",
        "Facet_SetFacetName",
    ] {
        let result = execute_mutation(&mut reactor, mutation, id.as_str(), json!({}));
        assert!(
            matches!(result, Err(ApiError::UnknownMutation { .. })),
            "{mutation} should be unknown"
        );
    }
}

#[test]
fn test_execute_mutation_reports_reactor_message() {
    let mut reactor: InMemoryReactor = create_test_reactor();
    let id: Phid = create_in_drive(&mut reactor, DocumentKind::ResourceTemplate, "Postgres");

    let err: ApiError = execute_mutation(
        &mut reactor,
        "ResourceTemplate_updateFaqItem",
        id.as_str(),
        json!({ "id": "faq-1", "lastModified": "2024-01-01T00:00:00.000Z" }),
    )
    .unwrap_err();

    assert_eq!(
        err,
        ApiError::ActionFailed {
            action: String::from("updateFaqItem"),
            message: String::from("FAQ item with ID faq-1 not found"),
        }
    );
    let view: DocumentView =
        get_document(&reactor, DocumentKind::ResourceTemplate, id.as_str(), None).unwrap();
    assert_eq!(view.revision, 1);
}
