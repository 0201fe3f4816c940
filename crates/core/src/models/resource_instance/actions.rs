// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use resource_services_domain::{ConfigSource, DateTime, InstanceStatus, Oid, Phid, ResetPeriod};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeInstanceInput {
    pub id: Phid,
    pub subscription_id: Phid,
    pub resource_template_id: Phid,
    pub customer_id: Phid,
    pub name: String,
    pub created_at: DateTime,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstanceStatusInput {
    pub status: InstanceStatus,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivateInstanceInput {
    pub activated_at: DateTime,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuspendInstanceInput {
    pub suspended_at: DateTime,
    pub reason: Option<String>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminateInstanceInput {
    pub terminated_at: DateTime,
    pub reason: Option<String>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstanceNameInput {
    pub name: String,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetConfigurationInput {
    pub id: Oid,
    pub key: String,
    pub value: String,
    pub source: ConfigSource,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveConfigurationInput {
    pub key: String,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordUsageInput {
    pub id: Oid,
    pub metric_key: String,
    pub value: i64,
    pub limit: Option<i64>,
    pub reset_period: Option<ResetPeriod>,
    pub recorded_at: DateTime,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetUsageInput {
    pub metric_key: String,
    pub reset_at: DateTime,
    pub last_modified: DateTime,
}

document_actions! {
    /// Actions accepted by a resource instance document.
    pub enum ResourceInstanceAction {
        InitializeInstance(InitializeInstanceInput) => "INITIALIZE_INSTANCE",
        UpdateInstanceStatus(UpdateInstanceStatusInput) => "UPDATE_INSTANCE_STATUS",
        ActivateInstance(ActivateInstanceInput) => "ACTIVATE_INSTANCE",
        SuspendInstance(SuspendInstanceInput) => "SUSPEND_INSTANCE",
        TerminateInstance(TerminateInstanceInput) => "TERMINATE_INSTANCE",
        UpdateInstanceName(UpdateInstanceNameInput) => "UPDATE_INSTANCE_NAME",
        SetConfiguration(SetConfigurationInput) => "SET_CONFIGURATION",
        RemoveConfiguration(RemoveConfigurationInput) => "REMOVE_CONFIGURATION",
        RecordUsage(RecordUsageInput) => "RECORD_USAGE",
        ResetUsage(ResetUsageInput) => "RESET_USAGE",
    }
}
