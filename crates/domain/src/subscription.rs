// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Records owned by a service subscription.

use crate::scalars::{DateTime, Oid};
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Lifecycle of a customer's subscription.
    #[derive(Default)]
    pub enum SubscriptionStatus {
        #[default]
        Pending => "PENDING",
        Active => "ACTIVE",
        Paused => "PAUSED",
        Cancelled => "CANCELLED",
        Expired => "EXPIRED",
    }
}

wire_enum! {
    /// Billing frequency of a price.
    pub enum BillingCycle {
        Monthly => "MONTHLY",
        Quarterly => "QUARTERLY",
        SemiAnnual => "SEMI_ANNUAL",
        Annual => "ANNUAL",
        OneTime => "ONE_TIME",
    }
}

/// An add-on option group the customer opted into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedAddon {
    pub id: Oid,
    pub option_group_id: Oid,
    pub added_at: DateTime,
}

/// The option chosen for one facet category, keyed by `category_key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetSelection {
    pub id: Oid,
    pub category_key: String,
    pub selected_option_id: String,
}

/// The price agreed for a subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPricing {
    pub amount: f64,
    pub billing_cycle: BillingCycle,
    pub currency: String,
    pub setup_fee: Option<f64>,
}
