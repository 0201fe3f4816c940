// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::ServiceOfferingState;
use super::actions::{
    AddFacetBindingInput, AddOptionGroupInput, AddServiceInput, AddServiceLevelInput,
    AddTierInput, AddUsageLimitInput, DeleteOptionGroupInput, DeleteServiceInput,
    DeleteTierInput, RemoveFacetBindingInput, RemoveServiceLevelInput, RemoveUsageLimitInput,
    SetOfferingIdInput, SetOperatorInput, UpdateOfferingInfoInput, UpdateOfferingStatusInput,
    UpdateOptionGroupInput, UpdateServiceInput, UpdateServiceLevelInput, UpdateTierInput,
    UpdateTierPricingInput, UpdateUsageLimitInput,
};
use crate::list::remove_by;
use crate::outcome::{NoOp, Outcome};
use resource_services_domain::{
    DateTime, Oid, OptionGroup, ResourceFacetBinding, Service, ServiceLevelBinding,
    ServicePricing, ServiceSubscriptionTier, ServiceUsageLimit,
};

/// Overwrites `target` if a new value was supplied.
fn update<T: Clone>(target: &mut T, value: Option<&T>) {
    if let Some(value) = value {
        target.clone_from(value);
    }
}

/// Overwrites an optional field if a new value was supplied. A missing
/// value never clears the field.
fn update_optional<T: Clone>(target: &mut Option<T>, value: Option<&T>) {
    if let Some(value) = value {
        *target = Some(value.clone());
    }
}

fn removed_or_not_found<T>(removed: Option<T>, entity: &'static str, key: &Oid) -> Outcome {
    match removed {
        Some(_) => Outcome::Applied,
        None => Outcome::Ignored(NoOp::not_found(entity, key)),
    }
}

/// Runs `change` on the tier with `tier_id`, then stamps `last_modified`
/// whether or not the tier exists.
fn in_tier<F>(
    state: &mut ServiceOfferingState,
    tier_id: &Oid,
    last_modified: &DateTime,
    change: F,
) -> Outcome
where
    F: FnOnce(&mut ServiceSubscriptionTier) -> Outcome,
{
    let outcome: Outcome = match state.tiers.iter_mut().find(|tier| &tier.id == tier_id) {
        Some(tier) => change(tier),
        None => Outcome::Ignored(NoOp::not_found("tier", tier_id)),
    };
    state.last_modified.clone_from(last_modified);
    outcome
}

/// Runs `change` on the service with `service_id`, then stamps
/// `last_modified` whether or not the service exists.
fn in_service<F>(
    state: &mut ServiceOfferingState,
    service_id: &Oid,
    last_modified: &DateTime,
    change: F,
) -> Outcome
where
    F: FnOnce(&mut Service) -> Outcome,
{
    let outcome: Outcome = match state
        .services
        .iter_mut()
        .find(|service| &service.id == service_id)
    {
        Some(service) => change(service),
        None => Outcome::Ignored(NoOp::not_found("service", service_id)),
    };
    state.last_modified.clone_from(last_modified);
    outcome
}

// Offering management

/// Empty titles and summaries are ignored; an info link is taken as given.
pub fn update_offering_info(
    state: &mut ServiceOfferingState,
    input: &UpdateOfferingInfoInput,
) -> Outcome {
    if let Some(title) = input.title.as_ref().filter(|title| !title.is_empty()) {
        state.title.clone_from(title);
    }
    if let Some(summary) = input.summary.as_ref().filter(|summary| !summary.is_empty()) {
        state.summary.clone_from(summary);
    }
    update_optional(&mut state.info_link, input.info_link.as_ref());
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

pub fn update_offering_status(
    state: &mut ServiceOfferingState,
    input: &UpdateOfferingStatusInput,
) -> Outcome {
    state.status = input.status;
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

pub fn set_operator(state: &mut ServiceOfferingState, input: &SetOperatorInput) -> Outcome {
    state.operator_id.clone_from(&input.operator_id);
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

pub fn set_offering_id(state: &mut ServiceOfferingState, input: &SetOfferingIdInput) -> Outcome {
    state.id.clone_from(&input.id);
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

// Service management

pub fn add_service(state: &mut ServiceOfferingState, input: &AddServiceInput) -> Outcome {
    if state.service(&input.id).is_some() {
        return Outcome::Ignored(NoOp::duplicate("service", &input.id));
    }
    state.services.push(Service {
        id: input.id.clone(),
        title: input.title.clone(),
        description: input.description.clone(),
        display_order: input.display_order,
        parent_service_id: input.parent_service_id.clone(),
        is_setup_formation: input.is_setup_formation.unwrap_or(false),
        facet_bindings: Vec::new(),
    });
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

pub fn update_service(state: &mut ServiceOfferingState, input: &UpdateServiceInput) -> Outcome {
    in_service(state, &input.id, &input.last_modified, |service| {
        update(&mut service.title, input.title.as_ref());
        update_optional(&mut service.description, input.description.as_ref());
        update_optional(&mut service.display_order, input.display_order.as_ref());
        update_optional(
            &mut service.parent_service_id,
            input.parent_service_id.as_ref(),
        );
        update(
            &mut service.is_setup_formation,
            input.is_setup_formation.as_ref(),
        );
        Outcome::Applied
    })
}

/// Removes the service only; tier bindings that reference it are kept.
pub fn delete_service(state: &mut ServiceOfferingState, input: &DeleteServiceInput) -> Outcome {
    let removed: Option<Service> = remove_by(&mut state.services, |service| service.id == input.id);
    state.last_modified.clone_from(&input.last_modified);
    removed_or_not_found(removed, "service", &input.id)
}

pub fn add_facet_binding(
    state: &mut ServiceOfferingState,
    input: &AddFacetBindingInput,
) -> Outcome {
    in_service(state, &input.service_id, &input.last_modified, |service| {
        if service
            .facet_bindings
            .iter()
            .any(|binding| binding.id == input.binding_id)
        {
            return Outcome::Ignored(NoOp::duplicate("facet binding", &input.binding_id));
        }
        service.facet_bindings.push(ResourceFacetBinding {
            id: input.binding_id.clone(),
            facet_name: input.facet_name.clone(),
            facet_type: input.facet_type.clone(),
            supported_options: input.supported_options.clone(),
        });
        Outcome::Applied
    })
}

pub fn remove_facet_binding(
    state: &mut ServiceOfferingState,
    input: &RemoveFacetBindingInput,
) -> Outcome {
    in_service(state, &input.service_id, &input.last_modified, |service| {
        let removed: Option<ResourceFacetBinding> =
            remove_by(&mut service.facet_bindings, |binding| {
                binding.id == input.binding_id
            });
        removed_or_not_found(removed, "facet binding", &input.binding_id)
    })
}

// Option groups

pub fn add_option_group(state: &mut ServiceOfferingState, input: &AddOptionGroupInput) -> Outcome {
    if state.option_groups.iter().any(|group| group.id == input.id) {
        return Outcome::Ignored(NoOp::duplicate("option group", &input.id));
    }
    state.option_groups.push(OptionGroup {
        id: input.id.clone(),
        name: input.name.clone(),
        description: input.description.clone(),
        is_add_on: input.is_add_on,
        default_selected: input.default_selected,
    });
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

pub fn update_option_group(
    state: &mut ServiceOfferingState,
    input: &UpdateOptionGroupInput,
) -> Outcome {
    let outcome: Outcome = match state
        .option_groups
        .iter_mut()
        .find(|group| group.id == input.id)
    {
        Some(group) => {
            update(&mut group.name, input.name.as_ref());
            update_optional(&mut group.description, input.description.as_ref());
            update(&mut group.is_add_on, input.is_add_on.as_ref());
            update(&mut group.default_selected, input.default_selected.as_ref());
            Outcome::Applied
        }
        None => Outcome::Ignored(NoOp::not_found("option group", &input.id)),
    };
    state.last_modified.clone_from(&input.last_modified);
    outcome
}

pub fn delete_option_group(
    state: &mut ServiceOfferingState,
    input: &DeleteOptionGroupInput,
) -> Outcome {
    let removed: Option<OptionGroup> =
        remove_by(&mut state.option_groups, |group| group.id == input.id);
    state.last_modified.clone_from(&input.last_modified);
    removed_or_not_found(removed, "option group", &input.id)
}

// Tier management

pub fn add_tier(state: &mut ServiceOfferingState, input: &AddTierInput) -> Outcome {
    if state.tier(&input.id).is_some() {
        return Outcome::Ignored(NoOp::duplicate("tier", &input.id));
    }
    state.tiers.push(ServiceSubscriptionTier {
        id: input.id.clone(),
        name: input.name.clone(),
        description: input.description.clone(),
        is_custom_pricing: input.is_custom_pricing.unwrap_or(false),
        pricing: ServicePricing {
            amount: input.amount,
            billing_cycle: input.billing_cycle,
            currency: input.currency.clone(),
            setup_fee: input.setup_fee,
        },
        service_levels: Vec::new(),
        usage_limits: Vec::new(),
    });
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

pub fn update_tier(state: &mut ServiceOfferingState, input: &UpdateTierInput) -> Outcome {
    in_tier(state, &input.id, &input.last_modified, |tier| {
        update(&mut tier.name, input.name.as_ref());
        update_optional(&mut tier.description, input.description.as_ref());
        update(&mut tier.is_custom_pricing, input.is_custom_pricing.as_ref());
        Outcome::Applied
    })
}

pub fn update_tier_pricing(
    state: &mut ServiceOfferingState,
    input: &UpdateTierPricingInput,
) -> Outcome {
    in_tier(state, &input.tier_id, &input.last_modified, |tier| {
        let pricing: &mut ServicePricing = &mut tier.pricing;
        update_optional(&mut pricing.amount, input.amount.as_ref());
        update(&mut pricing.currency, input.currency.as_ref());
        update(&mut pricing.billing_cycle, input.billing_cycle.as_ref());
        update_optional(&mut pricing.setup_fee, input.setup_fee.as_ref());
        Outcome::Applied
    })
}

pub fn delete_tier(state: &mut ServiceOfferingState, input: &DeleteTierInput) -> Outcome {
    let removed: Option<ServiceSubscriptionTier> =
        remove_by(&mut state.tiers, |tier| tier.id == input.id);
    state.last_modified.clone_from(&input.last_modified);
    removed_or_not_found(removed, "tier", &input.id)
}

pub fn add_service_level(
    state: &mut ServiceOfferingState,
    input: &AddServiceLevelInput,
) -> Outcome {
    in_tier(state, &input.tier_id, &input.last_modified, |tier| {
        if tier
            .service_levels
            .iter()
            .any(|level| level.id == input.service_level_id)
        {
            return Outcome::Ignored(NoOp::duplicate("service level", &input.service_level_id));
        }
        tier.service_levels.push(ServiceLevelBinding {
            id: input.service_level_id.clone(),
            service_id: input.service_id.clone(),
            level: input.level,
            option_group_id: input.option_group_id.clone(),
            setup_fee: input.setup_fee,
            custom_value: input.custom_value.clone(),
            variations: input.variations.clone(),
            annexes: input.annexes.clone(),
        });
        Outcome::Applied
    })
}

pub fn update_service_level(
    state: &mut ServiceOfferingState,
    input: &UpdateServiceLevelInput,
) -> Outcome {
    in_tier(state, &input.tier_id, &input.last_modified, |tier| {
        let Some(binding) = tier
            .service_levels
            .iter_mut()
            .find(|level| level.id == input.service_level_id)
        else {
            return Outcome::Ignored(NoOp::not_found("service level", &input.service_level_id));
        };
        update(&mut binding.level, input.level.as_ref());
        update_optional(&mut binding.option_group_id, input.option_group_id.as_ref());
        update_optional(&mut binding.setup_fee, input.setup_fee.as_ref());
        update_optional(&mut binding.custom_value, input.custom_value.as_ref());
        update_optional(&mut binding.variations, input.variations.as_ref());
        update_optional(&mut binding.annexes, input.annexes.as_ref());
        Outcome::Applied
    })
}

pub fn remove_service_level(
    state: &mut ServiceOfferingState,
    input: &RemoveServiceLevelInput,
) -> Outcome {
    in_tier(state, &input.tier_id, &input.last_modified, |tier| {
        let removed: Option<ServiceLevelBinding> =
            remove_by(&mut tier.service_levels, |level| {
                level.id == input.service_level_id
            });
        removed_or_not_found(removed, "service level", &input.service_level_id)
    })
}

pub fn add_usage_limit(state: &mut ServiceOfferingState, input: &AddUsageLimitInput) -> Outcome {
    in_tier(state, &input.tier_id, &input.last_modified, |tier| {
        if tier
            .usage_limits
            .iter()
            .any(|limit| limit.id == input.limit_id)
        {
            return Outcome::Ignored(NoOp::duplicate("usage limit", &input.limit_id));
        }
        tier.usage_limits.push(ServiceUsageLimit {
            id: input.limit_id.clone(),
            service_id: input.service_id.clone(),
            metric: input.metric.clone(),
            limit: input.limit,
            reset_period: input.reset_period,
            notes: input.notes.clone(),
        });
        Outcome::Applied
    })
}

pub fn update_usage_limit(
    state: &mut ServiceOfferingState,
    input: &UpdateUsageLimitInput,
) -> Outcome {
    in_tier(state, &input.tier_id, &input.last_modified, |tier| {
        let Some(usage_limit) = tier
            .usage_limits
            .iter_mut()
            .find(|limit| limit.id == input.limit_id)
        else {
            return Outcome::Ignored(NoOp::not_found("usage limit", &input.limit_id));
        };
        update(&mut usage_limit.metric, input.metric.as_ref());
        update_optional(&mut usage_limit.limit, input.limit.as_ref());
        update_optional(&mut usage_limit.reset_period, input.reset_period.as_ref());
        update_optional(&mut usage_limit.notes, input.notes.as_ref());
        Outcome::Applied
    })
}

pub fn remove_usage_limit(
    state: &mut ServiceOfferingState,
    input: &RemoveUsageLimitInput,
) -> Outcome {
    in_tier(state, &input.tier_id, &input.last_modified, |tier| {
        let removed: Option<ServiceUsageLimit> =
            remove_by(&mut tier.usage_limits, |limit| limit.id == input.limit_id);
        removed_or_not_found(removed, "usage limit", &input.limit_id)
    })
}
