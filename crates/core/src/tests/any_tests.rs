// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{CREATED, minute, phid, ts};
use crate::{
    ActionRecord, AnyDocument, CoreError, DocumentKind, Outcome, ServiceOffering,
    UnknownDocumentKind, create_document,
};
use serde_json::{Value, json};

#[test]
fn test_kinds_round_trip_through_names() {
    for &kind in DocumentKind::ALL {
        assert_eq!(DocumentKind::from_document_type(kind.document_type()), Ok(kind));
        assert_eq!(DocumentKind::from_graphql_name(kind.graphql_name()), Ok(kind));
        assert_eq!(kind.graphql_name().parse::<DocumentKind>(), Ok(kind));
        assert_eq!(kind.to_string(), kind.document_type());
    }
    assert_eq!(DocumentKind::ALL.len(), 6);
}

#[test]
fn test_unknown_kind() {
    let err: UnknownDocumentKind = "powerhouse/invoice".parse::<DocumentKind>().unwrap_err();

    assert_eq!(err.to_string(), "Unknown document type 'powerhouse/invoice'");
}

#[test]
fn test_kind_lists_its_actions() {
    assert!(DocumentKind::Facet.accepts("REORDER_OPTIONS"));
    assert!(!DocumentKind::Facet.accepts("ADD_TIER"));
    assert_eq!(DocumentKind::SubscriptionInstance.action_types().len(), 6);
    assert_eq!(DocumentKind::ServiceOffering.action_types().len(), 22);
}

#[test]
fn test_any_document_applies_records() {
    let mut document: AnyDocument =
        AnyDocument::new(DocumentKind::SubscriptionInstance, phid("doc-1"), ts(CREATED));

    let outcome: Outcome = document
        .apply_record_at(
            ActionRecord::global(
                "SET_CUSTOMER_TYPE",
                json!({ "customerType": "TEAM", "teamMemberCount": 4 }),
            ),
            minute(1),
        )
        .unwrap();

    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(document.kind(), DocumentKind::SubscriptionInstance);
    assert_eq!(document.operations().global.len(), 1);
    let state: Value = document.global_state_json().unwrap();
    assert_eq!(state["customerType"], "TEAM");
    assert_eq!(state["teamMemberCount"], 4);
}

#[test]
fn test_any_document_json_round_trip() {
    let mut document: AnyDocument = create_document::<ServiceOffering>(None).unwrap().into();
    document.set_name("Hosting");

    let value: Value = document.to_json().unwrap();
    let parsed: AnyDocument = AnyDocument::from_json(&value).unwrap();

    assert_eq!(parsed, document);
    assert_eq!(parsed.header().name, "Hosting");
    parsed.verify().unwrap();
}

#[test]
fn test_from_json_rejects_unknown_type() {
    let value: Value = json!({ "header": { "documentType": "powerhouse/invoice" } });

    let result = AnyDocument::from_json(&value);

    assert!(matches!(result, Err(CoreError::UnknownDocumentKind(_))));
}

#[test]
fn test_create_every_kind() {
    for &kind in DocumentKind::ALL {
        let document: AnyDocument = AnyDocument::create(kind).unwrap();
        assert_eq!(document.kind(), kind);
        assert_eq!(document.header().document_type, kind.document_type());
    }
}
