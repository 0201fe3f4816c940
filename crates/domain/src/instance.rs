// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Records owned by a resource instance.

use crate::scalars::{DateTime, Oid};
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Operational status of a provisioned resource.
    #[derive(Default)]
    pub enum InstanceStatus {
        /// Created, not yet serving.
        #[default]
        Provisioning => "PROVISIONING",
        /// Serving the customer.
        Active => "ACTIVE",
        /// Temporarily disabled by an operator.
        Suspended => "SUSPENDED",
        /// Permanently shut down.
        Terminated => "TERMINATED",
        /// Provisioning or operation failed.
        Error => "ERROR",
    }
}

wire_enum! {
    /// Where a configuration value came from.
    pub enum ConfigSource {
        CustomerInput => "CUSTOMER_INPUT",
        FacetSelection => "FACET_SELECTION",
        System => "SYSTEM",
        TierDefault => "TIER_DEFAULT",
    }
}

wire_enum! {
    /// How often a usage counter rolls over.
    pub enum ResetPeriod {
        Hourly => "HOURLY",
        Daily => "DAILY",
        Weekly => "WEEKLY",
        Monthly => "MONTHLY",
        Quarterly => "QUARTERLY",
        SemiAnnual => "SEMI_ANNUAL",
        Annual => "ANNUAL",
    }
}

/// A single configuration entry, keyed by `key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceConfiguration {
    pub id: Oid,
    pub key: String,
    pub value: String,
    pub source: ConfigSource,
}

/// A usage counter, keyed by `metric_key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetric {
    pub id: Oid,
    pub metric_key: String,
    pub current_value: i64,
    pub limit: Option<i64>,
    pub reset_period: Option<ResetPeriod>,
    pub last_updated: DateTime,
}

impl UsageMetric {
    /// Returns true once the counter has reached its limit.
    ///
    /// Metrics without a limit are never exhausted.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.limit.is_some_and(|limit| self.current_value >= limit)
    }
}
