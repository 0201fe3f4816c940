// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::ServiceSubscriptionState;
use super::actions::{
    ActivateSubscriptionInput, AddAddonInput, CancelSubscriptionInput, ChangeTierInput,
    InitializeSubscriptionInput, RemoveAddonInput, RemoveFacetSelectionInput,
    RenewSubscriptionInput, SetFacetSelectionInput, SetPricingInput,
    UpdateSubscriptionStatusInput,
};
use crate::list::{remove_by, upsert_by};
use crate::optional::non_empty;
use crate::outcome::{NoOp, Outcome};
use resource_services_domain::{
    FacetSelection, SelectedAddon, SubscriptionPricing, SubscriptionStatus,
};

// Subscription management

pub fn initialize_subscription(
    state: &mut ServiceSubscriptionState,
    input: &InitializeSubscriptionInput,
) -> Outcome {
    state.id.clone_from(&input.id);
    state.customer_id.clone_from(&input.customer_id);
    state.service_offering_id.clone_from(&input.service_offering_id);
    state.resource_template_id.clone_from(&input.resource_template_id);
    state.selected_tier_id.clone_from(&input.selected_tier_id);
    state.status = SubscriptionStatus::Pending;
    state.created_at.clone_from(&input.created_at);
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

pub fn update_subscription_status(
    state: &mut ServiceSubscriptionState,
    input: &UpdateSubscriptionStatusInput,
) -> Outcome {
    state.status = input.status;
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

pub fn activate_subscription(
    state: &mut ServiceSubscriptionState,
    input: &ActivateSubscriptionInput,
) -> Outcome {
    state.status = SubscriptionStatus::Active;
    state.start_date = Some(input.start_date.clone());
    state.current_period_start = Some(input.current_period_start.clone());
    state.current_period_end = Some(input.current_period_end.clone());
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

pub fn cancel_subscription(
    state: &mut ServiceSubscriptionState,
    input: &CancelSubscriptionInput,
) -> Outcome {
    state.status = SubscriptionStatus::Cancelled;
    state.cancelled_at = Some(input.cancelled_at.clone());
    state.cancellation_reason = non_empty(input.reason.as_deref());
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

/// Moves the billing period; the status is left as it is.
pub fn renew_subscription(
    state: &mut ServiceSubscriptionState,
    input: &RenewSubscriptionInput,
) -> Outcome {
    state.current_period_start = Some(input.period_start.clone());
    state.current_period_end = Some(input.period_end.clone());
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

// Tier selection

pub fn change_tier(state: &mut ServiceSubscriptionState, input: &ChangeTierInput) -> Outcome {
    state.selected_tier_id.clone_from(&input.new_tier_id);
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

pub fn set_pricing(state: &mut ServiceSubscriptionState, input: &SetPricingInput) -> Outcome {
    state.pricing = Some(SubscriptionPricing {
        amount: input.amount,
        billing_cycle: input.billing_cycle,
        currency: input.currency.clone(),
        setup_fee: input.setup_fee,
    });
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

// Add-on management

pub fn add_addon(state: &mut ServiceSubscriptionState, input: &AddAddonInput) -> Outcome {
    if state.has_addon(&input.id) {
        return Outcome::Ignored(NoOp::duplicate("add-on", &input.id));
    }
    state.selected_addons.push(SelectedAddon {
        id: input.id.clone(),
        option_group_id: input.option_group_id.clone(),
        added_at: input.added_at.clone(),
    });
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

pub fn remove_addon(state: &mut ServiceSubscriptionState, input: &RemoveAddonInput) -> Outcome {
    let removed: Option<SelectedAddon> =
        remove_by(&mut state.selected_addons, |addon| addon.id == input.id);
    state.last_modified.clone_from(&input.last_modified);
    match removed {
        Some(_) => Outcome::Applied,
        None => Outcome::Ignored(NoOp::not_found("add-on", &input.id)),
    }
}

// Facet selection

pub fn set_facet_selection(
    state: &mut ServiceSubscriptionState,
    input: &SetFacetSelectionInput,
) -> Outcome {
    let selection: FacetSelection = FacetSelection {
        id: input.id.clone(),
        category_key: input.category_key.clone(),
        selected_option_id: input.selected_option_id.clone(),
    };
    upsert_by(&mut state.facet_selections, selection, |existing| {
        existing.category_key.as_str()
    });
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

pub fn remove_facet_selection(
    state: &mut ServiceSubscriptionState,
    input: &RemoveFacetSelectionInput,
) -> Outcome {
    let removed: Option<FacetSelection> = remove_by(&mut state.facet_selections, |selection| {
        selection.category_key == input.category_key
    });
    state.last_modified.clone_from(&input.last_modified);
    match removed {
        Some(_) => Outcome::Applied,
        None => Outcome::Ignored(NoOp::not_found("facet selection", &input.category_key)),
    }
}
