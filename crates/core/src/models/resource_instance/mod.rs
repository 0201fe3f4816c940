// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A provisioned resource: lifecycle, configuration and usage counters.

pub mod actions;
mod reducers;

use crate::error::ReducerError;
use crate::model::DocumentModel;
use crate::outcome::Outcome;
use actions::ResourceInstanceAction;
use resource_services_domain::{
    DateTime, DomainError, InstanceConfiguration, InstanceStatus, Phid, UsageMetric,
    validate_unique_keys,
};
use serde::{Deserialize, Serialize};

/// Global state of a resource instance document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceInstanceState {
    pub id: Phid,
    pub subscription_id: Phid,
    pub resource_template_id: Phid,
    pub customer_id: Phid,
    pub name: String,
    pub status: InstanceStatus,
    pub configuration: Vec<InstanceConfiguration>,
    pub usage_metrics: Vec<UsageMetric>,
    pub activated_at: Option<DateTime>,
    pub suspended_at: Option<DateTime>,
    pub suspension_reason: Option<String>,
    pub terminated_at: Option<DateTime>,
    pub termination_reason: Option<String>,
    pub created_at: DateTime,
    pub last_modified: DateTime,
}

impl ResourceInstanceState {
    /// Returns the configuration entry for `key`.
    #[must_use]
    pub fn configuration_value(&self, key: &str) -> Option<&InstanceConfiguration> {
        self.configuration.iter().find(|entry| entry.key == key)
    }

    /// Returns the usage metric for `metric_key`.
    #[must_use]
    pub fn usage_metric(&self, metric_key: &str) -> Option<&UsageMetric> {
        self.usage_metrics
            .iter()
            .find(|metric| metric.metric_key == metric_key)
    }
}

/// The `powerhouse/resource-instance` document model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourceInstance;

impl DocumentModel for ResourceInstance {
    const DOCUMENT_TYPE: &'static str = "powerhouse/resource-instance";
    const GRAPHQL_NAME: &'static str = "ResourceInstance";

    type State = ResourceInstanceState;
    type Action = ResourceInstanceAction;

    fn reduce(
        state: &mut ResourceInstanceState,
        action: &ResourceInstanceAction,
    ) -> Result<Outcome, ReducerError> {
        let outcome: Outcome = match action {
            ResourceInstanceAction::InitializeInstance(input) => {
                reducers::initialize_instance(state, input)
            }
            ResourceInstanceAction::UpdateInstanceStatus(input) => {
                reducers::update_instance_status(state, input)
            }
            ResourceInstanceAction::ActivateInstance(input) => {
                reducers::activate_instance(state, input)
            }
            ResourceInstanceAction::SuspendInstance(input) => {
                reducers::suspend_instance(state, input)
            }
            ResourceInstanceAction::TerminateInstance(input) => {
                reducers::terminate_instance(state, input)
            }
            ResourceInstanceAction::UpdateInstanceName(input) => {
                reducers::update_instance_name(state, input)
            }
            ResourceInstanceAction::SetConfiguration(input) => {
                reducers::set_configuration(state, input)
            }
            ResourceInstanceAction::RemoveConfiguration(input) => {
                reducers::remove_configuration(state, input)
            }
            ResourceInstanceAction::RecordUsage(input) => reducers::record_usage(state, input),
            ResourceInstanceAction::ResetUsage(input) => reducers::reset_usage(state, input),
        };
        Ok(outcome)
    }

    fn validate_state(state: &ResourceInstanceState) -> Result<(), DomainError> {
        validate_unique_keys("configuration", &state.configuration, |entry| {
            entry.key.as_str()
        })?;
        validate_unique_keys("usageMetrics", &state.usage_metrics, |metric| {
            metric.metric_key.as_str()
        })
    }
}
