// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the `rsvc` commands.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crate::commands::{
    Inspection, ReplaySummary, inspect, list_actions, read_records, replay, write_file,
};
use crate::error::CliError;
use resource_services::{ActionRecord, AnyDocument, CoreError, DocumentKind};
use serde_json::{Value, json};
use std::path::PathBuf;

fn facet_records() -> Vec<ActionRecord> {
    vec![
        ActionRecord::global("SET_NAME", json!("Region")),
        ActionRecord::global(
            "SET_FACET_NAME",
            json!({ "name": "Region", "lastModified": "2024-01-01T00:00:00.000Z" }),
        ),
        ActionRecord::global(
            "ADD_OPTION",
            json!({
                "id": "eu",
                "label": "Europe",
                "lastModified": "2024-01-01T00:01:00.000Z"
            }),
        ),
        ActionRecord::global(
            "ADD_OPTION",
            json!({
                "id": "eu",
                "label": "Europe again",
                "lastModified": "2024-01-01T00:02:00.000Z"
            }),
        ),
        ActionRecord::global("ADD_TIER", json!({})),
        ActionRecord::global("REMOVE_OPTION", json!({ "id": "eu" })),
    ]
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("rsvc-{}-{name}", std::process::id()))
}

#[test]
fn test_replay_counts_outcomes() {
    let (document, summary): (AnyDocument, ReplaySummary) =
        replay(DocumentKind::Facet, facet_records()).unwrap();

    assert_eq!(
        summary,
        ReplaySummary {
            applied: 3,
            ignored: 1,
            passed_through: 1,
            failed: 1,
        }
    );
    assert_eq!(document.header().name, "Region");
    assert_eq!(document.operations().global.len(), 3);

    let state: Value = document.global_state_json().unwrap();
    assert_eq!(state["options"][0]["label"], "Europe");
}

#[test]
fn test_replayed_document_passes_inspection() {
    let (document, _) = replay(DocumentKind::Facet, facet_records()).unwrap();

    let inspection: Inspection = inspect(&document.to_json().unwrap()).unwrap();

    assert_eq!(inspection.header.document_type, "powerhouse/facet");
    assert_eq!(inspection.header.revision.global, 3);
    assert_eq!(inspection.operations, 3);
    assert_eq!(inspection.rejected, 0);
    assert!(inspection.to_string().contains("name:          Region"));
}

#[test]
fn test_inspect_rejects_tampered_state() {
    let (document, _) = replay(DocumentKind::Facet, facet_records()).unwrap();
    let mut value: Value = document.to_json().unwrap();
    value["state"]["global"]["name"] = json!("Tampered");

    let result = inspect(&value);

    assert!(matches!(
        result,
        Err(CliError::Core(CoreError::ReplayDiverged { .. }))
    ));
}

#[test]
fn test_inspect_rejects_unknown_document_type() {
    let value: Value = json!({ "header": { "documentType": "powerhouse/invoice" } });

    let err: CliError = inspect(&value).unwrap_err();

    assert_eq!(err.to_string(), "Unknown document type 'powerhouse/invoice'");
}

#[test]
fn test_list_actions_shows_mutation_names() {
    let lines: Vec<String> = list_actions(DocumentKind::ResourceInstance);

    assert_eq!(
        lines.len(),
        DocumentKind::ResourceInstance.action_types().len()
    );
    assert!(
        lines
            .iter()
            .any(|line| line.starts_with("RECORD_USAGE ")
                && line.ends_with("ResourceInstance_recordUsage"))
    );
}

#[test]
fn test_records_file_round_trip() {
    let path: PathBuf = temp_path("records.json");
    let records: Vec<ActionRecord> = facet_records();
    write_file(&path, &serde_json::to_string(&records).unwrap()).unwrap();

    let loaded: Vec<ActionRecord> = read_records(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded, records);
}

#[test]
fn test_records_default_to_global_scope() {
    let path: PathBuf = temp_path("scopeless.json");
    write_file(&path, r#"[{ "type": "SET_NAME", "input": "Region" }]"#).unwrap();

    let loaded: Vec<ActionRecord> = read_records(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded, vec![ActionRecord::global("SET_NAME", json!("Region"))]);
}

#[test]
fn test_missing_file_reports_path() {
    let path: PathBuf = temp_path("missing.json");

    let err: CliError = read_records(&path).unwrap_err();

    assert!(matches!(err, CliError::Read { .. }));
    assert!(err.to_string().contains("missing.json"));
}
