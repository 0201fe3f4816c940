// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use resource_services_domain::{
    BillingCycle, DateTime, Oid, Phid, ResetPeriod, ServiceLevel, ServiceStatus,
};
use serde::{Deserialize, Serialize};

// Offering management

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOfferingInfoInput {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub info_link: Option<String>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOfferingStatusInput {
    pub status: ServiceStatus,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetOperatorInput {
    pub operator_id: Phid,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetOfferingIdInput {
    pub id: Phid,
    pub last_modified: DateTime,
}

// Service management

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddServiceInput {
    pub id: Oid,
    pub title: String,
    pub description: Option<String>,
    pub display_order: Option<i64>,
    pub parent_service_id: Option<Oid>,
    pub is_setup_formation: Option<bool>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceInput {
    pub id: Oid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub display_order: Option<i64>,
    pub parent_service_id: Option<Oid>,
    pub is_setup_formation: Option<bool>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteServiceInput {
    pub id: Oid,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFacetBindingInput {
    pub service_id: Oid,
    pub binding_id: Oid,
    pub facet_name: String,
    pub facet_type: Phid,
    pub supported_options: Vec<Oid>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFacetBindingInput {
    pub service_id: Oid,
    pub binding_id: Oid,
    pub last_modified: DateTime,
}

// Option groups

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOptionGroupInput {
    pub id: Oid,
    pub name: String,
    pub description: Option<String>,
    pub is_add_on: bool,
    pub default_selected: bool,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOptionGroupInput {
    pub id: Oid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_add_on: Option<bool>,
    pub default_selected: Option<bool>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOptionGroupInput {
    pub id: Oid,
    pub last_modified: DateTime,
}

// Tier management

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTierInput {
    pub id: Oid,
    pub name: String,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub currency: String,
    pub billing_cycle: BillingCycle,
    pub setup_fee: Option<f64>,
    pub is_custom_pricing: Option<bool>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTierInput {
    pub id: Oid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_custom_pricing: Option<bool>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTierPricingInput {
    pub tier_id: Oid,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub billing_cycle: Option<BillingCycle>,
    pub setup_fee: Option<f64>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTierInput {
    pub id: Oid,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddServiceLevelInput {
    pub tier_id: Oid,
    pub service_level_id: Oid,
    pub service_id: Oid,
    pub level: ServiceLevel,
    pub option_group_id: Option<Oid>,
    pub setup_fee: Option<f64>,
    pub custom_value: Option<String>,
    pub variations: Option<String>,
    pub annexes: Option<String>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceLevelInput {
    pub tier_id: Oid,
    pub service_level_id: Oid,
    pub level: Option<ServiceLevel>,
    pub option_group_id: Option<Oid>,
    pub setup_fee: Option<f64>,
    pub custom_value: Option<String>,
    pub variations: Option<String>,
    pub annexes: Option<String>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveServiceLevelInput {
    pub tier_id: Oid,
    pub service_level_id: Oid,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUsageLimitInput {
    pub tier_id: Oid,
    pub limit_id: Oid,
    pub service_id: Oid,
    pub metric: String,
    pub limit: Option<i64>,
    pub reset_period: Option<ResetPeriod>,
    pub notes: Option<String>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUsageLimitInput {
    pub tier_id: Oid,
    pub limit_id: Oid,
    pub metric: Option<String>,
    pub limit: Option<i64>,
    pub reset_period: Option<ResetPeriod>,
    pub notes: Option<String>,
    pub last_modified: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveUsageLimitInput {
    pub tier_id: Oid,
    pub limit_id: Oid,
    pub last_modified: DateTime,
}

document_actions! {
    /// Actions accepted by a service offering document.
    pub enum ServiceOfferingAction {
        UpdateOfferingInfo(UpdateOfferingInfoInput) => "UPDATE_OFFERING_INFO",
        UpdateOfferingStatus(UpdateOfferingStatusInput) => "UPDATE_OFFERING_STATUS",
        SetOperator(SetOperatorInput) => "SET_OPERATOR",
        SetOfferingId(SetOfferingIdInput) => "SET_OFFERING_ID",
        AddService(AddServiceInput) => "ADD_SERVICE",
        UpdateService(UpdateServiceInput) => "UPDATE_SERVICE",
        DeleteService(DeleteServiceInput) => "DELETE_SERVICE",
        AddFacetBinding(AddFacetBindingInput) => "ADD_FACET_BINDING",
        RemoveFacetBinding(RemoveFacetBindingInput) => "REMOVE_FACET_BINDING",
        AddOptionGroup(AddOptionGroupInput) => "ADD_OPTION_GROUP",
        UpdateOptionGroup(UpdateOptionGroupInput) => "UPDATE_OPTION_GROUP",
        DeleteOptionGroup(DeleteOptionGroupInput) => "DELETE_OPTION_GROUP",
        AddTier(AddTierInput) => "ADD_TIER",
        UpdateTier(UpdateTierInput) => "UPDATE_TIER",
        UpdateTierPricing(UpdateTierPricingInput) => "UPDATE_TIER_PRICING",
        DeleteTier(DeleteTierInput) => "DELETE_TIER",
        AddServiceLevel(AddServiceLevelInput) => "ADD_SERVICE_LEVEL",
        UpdateServiceLevel(UpdateServiceLevelInput) => "UPDATE_SERVICE_LEVEL",
        RemoveServiceLevel(RemoveServiceLevelInput) => "REMOVE_SERVICE_LEVEL",
        AddUsageLimit(AddUsageLimitInput) => "ADD_USAGE_LIMIT",
        UpdateUsageLimit(UpdateUsageLimitInput) => "UPDATE_USAGE_LIMIT",
        RemoveUsageLimit(RemoveUsageLimitInput) => "REMOVE_USAGE_LIMIT",
    }
}
