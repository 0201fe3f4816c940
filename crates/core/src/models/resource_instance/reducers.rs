// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::ResourceInstanceState;
use super::actions::{
    ActivateInstanceInput, InitializeInstanceInput, RecordUsageInput, RemoveConfigurationInput,
    ResetUsageInput, SetConfigurationInput, SuspendInstanceInput, TerminateInstanceInput,
    UpdateInstanceNameInput, UpdateInstanceStatusInput,
};
use crate::list::{remove_by, upsert_by};
use crate::optional::{non_empty, non_zero};
use crate::outcome::{NoOp, Outcome};
use resource_services_domain::{InstanceConfiguration, InstanceStatus, UsageMetric};

// Instance management

pub fn initialize_instance(
    state: &mut ResourceInstanceState,
    input: &InitializeInstanceInput,
) -> Outcome {
    state.id.clone_from(&input.id);
    state.subscription_id.clone_from(&input.subscription_id);
    state.resource_template_id.clone_from(&input.resource_template_id);
    state.customer_id.clone_from(&input.customer_id);
    state.name.clone_from(&input.name);
    state.status = InstanceStatus::Provisioning;
    state.created_at.clone_from(&input.created_at);
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

pub fn update_instance_status(
    state: &mut ResourceInstanceState,
    input: &UpdateInstanceStatusInput,
) -> Outcome {
    state.status = input.status;
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

pub fn activate_instance(
    state: &mut ResourceInstanceState,
    input: &ActivateInstanceInput,
) -> Outcome {
    state.status = InstanceStatus::Active;
    state.activated_at = Some(input.activated_at.clone());
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

pub fn suspend_instance(
    state: &mut ResourceInstanceState,
    input: &SuspendInstanceInput,
) -> Outcome {
    state.status = InstanceStatus::Suspended;
    state.suspended_at = Some(input.suspended_at.clone());
    state.suspension_reason = non_empty(input.reason.as_deref());
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

pub fn terminate_instance(
    state: &mut ResourceInstanceState,
    input: &TerminateInstanceInput,
) -> Outcome {
    state.status = InstanceStatus::Terminated;
    state.terminated_at = Some(input.terminated_at.clone());
    state.termination_reason = non_empty(input.reason.as_deref());
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

pub fn update_instance_name(
    state: &mut ResourceInstanceState,
    input: &UpdateInstanceNameInput,
) -> Outcome {
    state.name.clone_from(&input.name);
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

// Configuration management

pub fn set_configuration(
    state: &mut ResourceInstanceState,
    input: &SetConfigurationInput,
) -> Outcome {
    let entry: InstanceConfiguration = InstanceConfiguration {
        id: input.id.clone(),
        key: input.key.clone(),
        value: input.value.clone(),
        source: input.source,
    };
    upsert_by(&mut state.configuration, entry, |existing| existing.key.as_str());
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

pub fn remove_configuration(
    state: &mut ResourceInstanceState,
    input: &RemoveConfigurationInput,
) -> Outcome {
    let removed: Option<InstanceConfiguration> =
        remove_by(&mut state.configuration, |entry| entry.key == input.key);
    state.last_modified.clone_from(&input.last_modified);
    match removed {
        Some(_) => Outcome::Applied,
        None => Outcome::Ignored(NoOp::not_found("configuration", &input.key)),
    }
}

// Usage tracking

pub fn record_usage(state: &mut ResourceInstanceState, input: &RecordUsageInput) -> Outcome {
    match state
        .usage_metrics
        .iter_mut()
        .find(|metric| metric.metric_key == input.metric_key)
    {
        Some(metric) => {
            metric.current_value = input.value;
            metric.last_updated.clone_from(&input.recorded_at);
        }
        None => state.usage_metrics.push(UsageMetric {
            id: input.id.clone(),
            metric_key: input.metric_key.clone(),
            current_value: input.value,
            limit: non_zero(input.limit),
            reset_period: input.reset_period,
            last_updated: input.recorded_at.clone(),
        }),
    }
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

pub fn reset_usage(state: &mut ResourceInstanceState, input: &ResetUsageInput) -> Outcome {
    let outcome: Outcome = match state
        .usage_metrics
        .iter_mut()
        .find(|metric| metric.metric_key == input.metric_key)
    {
        Some(metric) => {
            metric.current_value = 0;
            metric.last_updated.clone_from(&input.reset_at);
            Outcome::Applied
        }
        None => Outcome::Ignored(NoOp::not_found("usage metric", &input.metric_key)),
    };
    state.last_modified.clone_from(&input.last_modified);
    outcome
}
