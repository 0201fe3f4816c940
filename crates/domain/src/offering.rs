// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The service catalogue: services, option groups and subscription tiers.
//!
//! Entities reference each other by `Oid` only. A `ServiceLevelBinding`
//! names a `Service` and optionally an `OptionGroup`, but nothing checks
//! that either exists.

use crate::instance::ResetPeriod;
use crate::scalars::{Oid, Phid};
use crate::subscription::BillingCycle;
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Publication status of an offering.
    #[derive(Default)]
    pub enum ServiceStatus {
        #[default]
        Draft => "DRAFT",
        ComingSoon => "COMING_SOON",
        Active => "ACTIVE",
        Deprecated => "DEPRECATED",
    }
}

wire_enum! {
    /// How a service is provided within a tier.
    pub enum ServiceLevel {
        Included => "INCLUDED",
        NotIncluded => "NOT_INCLUDED",
        Optional => "OPTIONAL",
        Custom => "CUSTOM",
        Variable => "VARIABLE",
        NotApplicable => "NOT_APPLICABLE",
    }
}

/// Binds a facet document to a service, restricting its usable options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceFacetBinding {
    pub id: Oid,
    pub facet_name: String,
    pub facet_type: Phid,
    pub supported_options: Vec<Oid>,
}

/// A service listed in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Oid,
    pub title: String,
    pub description: Option<String>,
    pub display_order: Option<i64>,
    pub parent_service_id: Option<Oid>,
    pub is_setup_formation: bool,
    pub facet_bindings: Vec<ResourceFacetBinding>,
}

/// A group of options, optionally sold as an add-on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionGroup {
    pub id: Oid,
    pub name: String,
    pub description: Option<String>,
    pub is_add_on: bool,
    pub default_selected: bool,
}

/// Price of a tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePricing {
    pub amount: Option<f64>,
    pub billing_cycle: BillingCycle,
    pub currency: String,
    pub setup_fee: Option<f64>,
}

/// The level at which a tier provides one service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLevelBinding {
    pub id: Oid,
    pub service_id: Oid,
    pub level: ServiceLevel,
    pub option_group_id: Option<Oid>,
    pub setup_fee: Option<f64>,
    pub custom_value: Option<String>,
    pub variations: Option<String>,
    pub annexes: Option<String>,
}

/// A usage cap a tier places on one service metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUsageLimit {
    pub id: Oid,
    pub service_id: Oid,
    pub metric: String,
    pub limit: Option<i64>,
    pub reset_period: Option<ResetPeriod>,
    pub notes: Option<String>,
}

/// A purchasable tier of an offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSubscriptionTier {
    pub id: Oid,
    pub name: String,
    pub description: Option<String>,
    pub is_custom_pricing: bool,
    pub pricing: ServicePricing,
    pub service_levels: Vec<ServiceLevelBinding>,
    pub usage_limits: Vec<ServiceUsageLimit>,
}
