// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use resource_services_domain::{BillingCycle, DateTime, Oid, Phid, SubscriptionStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeSubscriptionInput {
    pub id: Phid,
    pub customer_id: Phid,
    pub service_offering_id: Phid,
    pub resource_template_id: Phid,
    pub selected_tier_id: Oid,
    pub created_at: DateTime,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriptionStatusInput {
    pub status: SubscriptionStatus,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivateSubscriptionInput {
    pub start_date: DateTime,
    pub current_period_start: DateTime,
    pub current_period_end: DateTime,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelSubscriptionInput {
    pub cancelled_at: DateTime,
    pub reason: Option<String>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewSubscriptionInput {
    pub period_start: DateTime,
    pub period_end: DateTime,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeTierInput {
    pub new_tier_id: Oid,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPricingInput {
    pub amount: f64,
    pub billing_cycle: BillingCycle,
    pub currency: String,
    pub setup_fee: Option<f64>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAddonInput {
    pub id: Oid,
    pub option_group_id: Oid,
    pub added_at: DateTime,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveAddonInput {
    pub id: Oid,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFacetSelectionInput {
    pub id: Oid,
    pub category_key: String,
    pub selected_option_id: String,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFacetSelectionInput {
    pub category_key: String,
    pub last_modified: DateTime,
}

document_actions! {
    /// Actions accepted by a service subscription document.
    pub enum ServiceSubscriptionAction {
        InitializeSubscription(InitializeSubscriptionInput) => "INITIALIZE_SUBSCRIPTION",
        UpdateSubscriptionStatus(UpdateSubscriptionStatusInput) => "UPDATE_SUBSCRIPTION_STATUS",
        ActivateSubscription(ActivateSubscriptionInput) => "ACTIVATE_SUBSCRIPTION",
        CancelSubscription(CancelSubscriptionInput) => "CANCEL_SUBSCRIPTION",
        RenewSubscription(RenewSubscriptionInput) => "RENEW_SUBSCRIPTION",
        ChangeTier(ChangeTierInput) => "CHANGE_TIER",
        SetPricing(SetPricingInput) => "SET_PRICING",
        AddAddon(AddAddonInput) => "ADD_ADDON",
        RemoveAddon(RemoveAddonInput) => "REMOVE_ADDON",
        SetFacetSelection(SetFacetSelectionInput) => "SET_FACET_SELECTION",
        RemoveFacetSelection(RemoveFacetSelectionInput) => "REMOVE_FACET_SELECTION",
    }
}
