// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ClientRequest, ConfigSource, DateTime, InstanceConfiguration, Oid, RequestStatus,
    RequestType, ResetPeriod, UsageMetric,
};
use serde_json::{Value, json};

#[test]
fn test_configuration_uses_camel_case_fields() {
    let config: InstanceConfiguration = InstanceConfiguration {
        id: Oid::from("cfg-1"),
        key: String::from("region"),
        value: String::from("eu-west"),
        source: ConfigSource::System,
    };

    let value: Value = serde_json::to_value(&config).unwrap();
    assert_eq!(
        value,
        json!({"id": "cfg-1", "key": "region", "value": "eu-west", "source": "SYSTEM"})
    );
}

#[test]
fn test_usage_metric_serializes_missing_optionals_as_null() {
    let metric: UsageMetric = UsageMetric {
        id: Oid::from("u1"),
        metric_key: String::from("cpu"),
        current_value: 3,
        limit: None,
        reset_period: None,
        last_updated: DateTime::epoch(),
    };

    let value: Value = serde_json::to_value(&metric).unwrap();
    assert_eq!(value["metricKey"], "cpu");
    assert_eq!(value["limit"], Value::Null);
    assert_eq!(value["resetPeriod"], Value::Null);
}

#[test]
fn test_usage_metric_exhaustion() {
    let mut metric: UsageMetric = UsageMetric {
        id: Oid::from("u1"),
        metric_key: String::from("api-calls"),
        current_value: 99,
        limit: Some(100),
        reset_period: Some(ResetPeriod::Monthly),
        last_updated: DateTime::epoch(),
    };
    assert!(!metric.is_exhausted());

    metric.current_value = 100;
    assert!(metric.is_exhausted());

    metric.limit = None;
    assert!(!metric.is_exhausted());
}

#[test]
fn test_client_request_type_field_is_renamed() {
    let request: ClientRequest = ClientRequest {
        id: Oid::from("req1"),
        request_type: RequestType::ChangeTier,
        status: RequestStatus::Pending,
        requested_at: DateTime::parse("2024-01-01T00:00:00.000Z").unwrap(),
        requested_by: None,
        reason: None,
        service_id: None,
        metric_id: None,
        requested_limit: None,
        requested_tier_name: Some(String::from("Pro")),
        requested_team_size: None,
        processed_at: None,
        processed_by: None,
        operator_response: None,
    };

    let value: Value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["type"], "CHANGE_TIER");
    assert_eq!(value["requestedTierName"], "Pro");

    let parsed: ClientRequest = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, request);
}
