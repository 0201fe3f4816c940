// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{minute, new_document, oid, phid};
use crate::models::resource_instance::ResourceInstanceState;
use crate::models::resource_instance::actions::{
    ActivateInstanceInput, InitializeInstanceInput, RecordUsageInput, RemoveConfigurationInput,
    ResetUsageInput, SetConfigurationInput, SuspendInstanceInput, TerminateInstanceInput,
    UpdateInstanceNameInput, UpdateInstanceStatusInput,
};
use crate::{Document, NoOp, Outcome, ResourceInstance};
use resource_services_domain::{ConfigSource, InstanceStatus, ResetPeriod};

fn initialized() -> Document<ResourceInstance> {
    let mut document: Document<ResourceInstance> = new_document();
    document
        .apply_at(
            InitializeInstanceInput {
                id: phid("instance-1"),
                subscription_id: phid("sub-1"),
                resource_template_id: phid("template-1"),
                customer_id: phid("customer-1"),
                name: String::from("Primary node"),
                created_at: minute(0),
                last_modified: minute(0),
            },
            minute(0),
        )
        .unwrap();
    document
}

fn set_configuration(key: &str, value: &str, at: u32) -> SetConfigurationInput {
    SetConfigurationInput {
        id: oid(&format!("config-{key}")),
        key: String::from(key),
        value: String::from(value),
        source: ConfigSource::CustomerInput,
        last_modified: minute(at),
    }
}

fn record_usage(metric_key: &str, value: i64, at: u32) -> RecordUsageInput {
    RecordUsageInput {
        id: oid(&format!("metric-{metric_key}")),
        metric_key: String::from(metric_key),
        value,
        limit: Some(100),
        reset_period: Some(ResetPeriod::Monthly),
        recorded_at: minute(at),
        last_modified: minute(at),
    }
}

#[test]
fn test_initialize_sets_identity_and_provisioning_status() {
    let document: Document<ResourceInstance> = initialized();
    let state: &ResourceInstanceState = document.global_state();

    assert_eq!(state.id, phid("instance-1"));
    assert_eq!(state.customer_id, phid("customer-1"));
    assert_eq!(state.name, "Primary node");
    assert_eq!(state.status, InstanceStatus::Provisioning);
    assert_eq!(state.created_at, minute(0));
}

#[test]
fn test_activate_sets_status_and_timestamp() {
    let mut document: Document<ResourceInstance> = initialized();

    let outcome: Outcome = document
        .apply_at(
            ActivateInstanceInput {
                activated_at: minute(5),
                last_modified: minute(5),
            },
            minute(5),
        )
        .unwrap();

    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(document.global_state().status, InstanceStatus::Active);
    assert_eq!(document.global_state().activated_at, Some(minute(5)));
    assert_eq!(document.global_state().last_modified, minute(5));
}

#[test]
fn test_activate_is_not_guarded_on_current_status() {
    let mut document: Document<ResourceInstance> = initialized();
    document
        .apply_at(
            TerminateInstanceInput {
                terminated_at: minute(1),
                reason: Some(String::from("Contract ended")),
                last_modified: minute(1),
            },
            minute(1),
        )
        .unwrap();

    document
        .apply_at(
            ActivateInstanceInput {
                activated_at: minute(2),
                last_modified: minute(2),
            },
            minute(2),
        )
        .unwrap();

    let state: &ResourceInstanceState = document.global_state();
    assert_eq!(state.status, InstanceStatus::Active);
    assert_eq!(state.terminated_at, Some(minute(1)));
    assert_eq!(state.termination_reason.as_deref(), Some("Contract ended"));
}

#[test]
fn test_suspend_records_reason() {
    let mut document: Document<ResourceInstance> = initialized();

    document
        .apply_at(
            SuspendInstanceInput {
                suspended_at: minute(3),
                reason: Some(String::from("Payment overdue")),
                last_modified: minute(3),
            },
            minute(3),
        )
        .unwrap();

    let state: &ResourceInstanceState = document.global_state();
    assert_eq!(state.status, InstanceStatus::Suspended);
    assert_eq!(state.suspended_at, Some(minute(3)));
    assert_eq!(state.suspension_reason.as_deref(), Some("Payment overdue"));
}

#[test]
fn test_empty_reasons_are_stored_as_none() {
    let mut document: Document<ResourceInstance> = initialized();

    document
        .apply_at(
            SuspendInstanceInput {
                suspended_at: minute(3),
                reason: Some(String::new()),
                last_modified: minute(3),
            },
            minute(3),
        )
        .unwrap();
    document
        .apply_at(
            TerminateInstanceInput {
                terminated_at: minute(4),
                reason: Some(String::new()),
                last_modified: minute(4),
            },
            minute(4),
        )
        .unwrap();

    let state: &ResourceInstanceState = document.global_state();
    assert_eq!(state.status, InstanceStatus::Terminated);
    assert_eq!(state.suspension_reason, None);
    assert_eq!(state.termination_reason, None);
}

#[test]
fn test_suspend_without_reason_clears_previous_reason() {
    let mut document: Document<ResourceInstance> = initialized();
    for (at, reason) in [(1_u32, Some(String::from("Payment overdue"))), (2, None)] {
        document
            .apply_at(
                SuspendInstanceInput {
                    suspended_at: minute(at),
                    reason,
                    last_modified: minute(at),
                },
                minute(at),
            )
            .unwrap();
    }

    assert_eq!(document.global_state().suspension_reason, None);
    assert_eq!(document.global_state().suspended_at, Some(minute(2)));
}

#[test]
fn test_update_status_accepts_any_status() {
    let mut document: Document<ResourceInstance> = initialized();

    for (at, &status) in (1_u32..).zip(InstanceStatus::ALL) {
        document
            .apply_at(
                UpdateInstanceStatusInput {
                    status,
                    last_modified: minute(at),
                },
                minute(at),
            )
            .unwrap();
        assert_eq!(document.global_state().status, status);
    }
}

#[test]
fn test_update_name() {
    let mut document: Document<ResourceInstance> = initialized();

    document
        .apply_at(
            UpdateInstanceNameInput {
                name: String::from("Renamed node"),
                last_modified: minute(1),
            },
            minute(1),
        )
        .unwrap();

    assert_eq!(document.global_state().name, "Renamed node");
}

#[test]
fn test_set_configuration_upserts_by_key() {
    let mut document: Document<ResourceInstance> = initialized();

    document.apply_at(set_configuration("region", "eu", 1), minute(1)).unwrap();
    document.apply_at(set_configuration("size", "large", 2), minute(2)).unwrap();
    document.apply_at(set_configuration("region", "us", 3), minute(3)).unwrap();

    let state: &ResourceInstanceState = document.global_state();
    assert_eq!(state.configuration.len(), 2);
    assert_eq!(state.configuration[0].key, "region");
    assert_eq!(state.configuration[0].value, "us");
    assert_eq!(state.configuration_value("size").unwrap().value, "large");
}

#[test]
fn test_set_configuration_is_idempotent() {
    let mut document: Document<ResourceInstance> = initialized();

    document.apply_at(set_configuration("region", "eu", 1), minute(1)).unwrap();
    let once: ResourceInstanceState = document.global_state().clone();
    document.apply_at(set_configuration("region", "eu", 1), minute(2)).unwrap();

    assert_eq!(document.global_state(), &once);
}

#[test]
fn test_remove_missing_configuration_only_stamps_last_modified() {
    let mut document: Document<ResourceInstance> = initialized();
    document.apply_at(set_configuration("region", "eu", 1), minute(1)).unwrap();
    let before: ResourceInstanceState = document.global_state().clone();

    let outcome: Outcome = document
        .apply_at(
            RemoveConfigurationInput {
                key: String::from("missing"),
                last_modified: minute(9),
            },
            minute(9),
        )
        .unwrap();

    assert_eq!(outcome, Outcome::Ignored(NoOp::not_found("configuration", "missing")));
    let mut expected: ResourceInstanceState = before;
    expected.last_modified = minute(9);
    assert_eq!(document.global_state(), &expected);
}

#[test]
fn test_remove_configuration() {
    let mut document: Document<ResourceInstance> = initialized();
    document.apply_at(set_configuration("region", "eu", 1), minute(1)).unwrap();

    let outcome: Outcome = document
        .apply_at(
            RemoveConfigurationInput {
                key: String::from("region"),
                last_modified: minute(2),
            },
            minute(2),
        )
        .unwrap();

    assert_eq!(outcome, Outcome::Applied);
    assert!(document.global_state().configuration.is_empty());
}

#[test]
fn test_record_usage_overwrites_existing_metric() {
    let mut document: Document<ResourceInstance> = initialized();

    document.apply_at(record_usage("api-calls", 42, 1), minute(1)).unwrap();
    let mut second: RecordUsageInput = record_usage("api-calls", 99, 2);
    second.id = oid("ignored-id");
    second.limit = Some(500);
    document.apply_at(second, minute(2)).unwrap();

    let state: &ResourceInstanceState = document.global_state();
    assert_eq!(state.usage_metrics.len(), 1);
    let metric = state.usage_metric("api-calls").unwrap();
    assert_eq!(metric.id, oid("metric-api-calls"));
    assert_eq!(metric.current_value, 99);
    assert_eq!(metric.limit, Some(100));
    assert_eq!(metric.last_updated, minute(2));
}

#[test]
fn test_record_usage_without_limit_creates_unlimited_metric() {
    let mut document: Document<ResourceInstance> = initialized();
    let mut input: RecordUsageInput = record_usage("storage", 7, 1);
    input.limit = None;
    input.reset_period = None;

    document.apply_at(input, minute(1)).unwrap();

    let metric = document.global_state().usage_metric("storage").unwrap();
    assert_eq!(metric.limit, None);
    assert_eq!(metric.reset_period, None);
    assert!(!metric.is_exhausted());
}

#[test]
fn test_record_usage_with_zero_limit_creates_unlimited_metric() {
    let mut document: Document<ResourceInstance> = initialized();
    let mut input: RecordUsageInput = record_usage("storage", 7, 1);
    input.limit = Some(0);

    document.apply_at(input, minute(1)).unwrap();

    let metric = document.global_state().usage_metric("storage").unwrap();
    assert_eq!(metric.limit, None);
    assert_eq!(metric.reset_period, Some(ResetPeriod::Monthly));
    assert!(!metric.is_exhausted());
    document.verify().unwrap();
}

#[test]
fn test_reset_usage_zeroes_metric() {
    let mut document: Document<ResourceInstance> = initialized();
    document.apply_at(record_usage("api-calls", 42, 1), minute(1)).unwrap();

    document
        .apply_at(
            ResetUsageInput {
                metric_key: String::from("api-calls"),
                reset_at: minute(30),
                last_modified: minute(30),
            },
            minute(30),
        )
        .unwrap();

    let metric = document.global_state().usage_metric("api-calls").unwrap();
    assert_eq!(metric.current_value, 0);
    assert_eq!(metric.last_updated, minute(30));
}

#[test]
fn test_reset_missing_metric_is_ignored() {
    let mut document: Document<ResourceInstance> = initialized();

    let outcome: Outcome = document
        .apply_at(
            ResetUsageInput {
                metric_key: String::from("missing"),
                reset_at: minute(4),
                last_modified: minute(4),
            },
            minute(4),
        )
        .unwrap();

    assert!(matches!(outcome, Outcome::Ignored(NoOp::NotFound { .. })));
    assert!(document.global_state().usage_metrics.is_empty());
    assert_eq!(document.global_state().last_modified, minute(4));
}

#[test]
fn test_config_keys_stay_distinct_across_many_sets() {
    let mut document: Document<ResourceInstance> = initialized();
    let keys: [&str; 5] = ["a", "b", "a", "c", "b"];

    for (at, key) in (1_u32..).zip(keys) {
        document
            .apply_at(set_configuration(key, "v", at), minute(at))
            .unwrap();
    }

    assert_eq!(document.global_state().configuration.len(), 3);
    document.verify().unwrap();
}
