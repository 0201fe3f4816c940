// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

#[macro_use]
mod wire_enum;

mod error;
mod facet;
mod instance;
mod offering;
mod request;
mod scalars;
mod subscription;
mod template;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use facet::FacetOption;
pub use instance::{ConfigSource, InstanceConfiguration, InstanceStatus, ResetPeriod, UsageMetric};
pub use offering::{
    OptionGroup, ResourceFacetBinding, Service, ServiceLevel, ServiceLevelBinding,
    ServicePricing, ServiceStatus, ServiceSubscriptionTier, ServiceUsageLimit,
};
pub use request::{ClientRequest, CustomerType, RequestStatus, RequestType};
pub use scalars::{DateTime, EPOCH, Oid, Phid};
pub use subscription::{
    BillingCycle, FacetSelection, SelectedAddon, SubscriptionPricing, SubscriptionStatus,
};
pub use template::{FacetPreset, FaqItem};
pub use validation::{validate_ordering, validate_unique_keys};
