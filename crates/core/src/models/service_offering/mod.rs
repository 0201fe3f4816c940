// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! An operator's service catalogue: services, option groups and tiers.
//!
//! Entities reference each other by id only. Deleting a service or option
//! group leaves any tier bindings that name it in place.

pub mod actions;
mod reducers;

use crate::error::ReducerError;
use crate::model::DocumentModel;
use crate::outcome::Outcome;
use actions::ServiceOfferingAction;
use resource_services_domain::{
    DateTime, DomainError, Oid, OptionGroup, Phid, Service, ServiceStatus,
    ServiceSubscriptionTier, validate_unique_keys,
};
use serde::{Deserialize, Serialize};

/// Global state of a service offering document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOfferingState {
    pub id: Phid,
    pub operator_id: Phid,
    pub title: String,
    pub summary: String,
    pub info_link: Option<String>,
    pub status: ServiceStatus,
    pub last_modified: DateTime,
    pub services: Vec<Service>,
    pub option_groups: Vec<OptionGroup>,
    pub tiers: Vec<ServiceSubscriptionTier>,
}

impl ServiceOfferingState {
    /// Returns the service with `id`.
    #[must_use]
    pub fn service(&self, id: &Oid) -> Option<&Service> {
        self.services.iter().find(|service| &service.id == id)
    }

    /// Returns the tier with `id`.
    #[must_use]
    pub fn tier(&self, id: &Oid) -> Option<&ServiceSubscriptionTier> {
        self.tiers.iter().find(|tier| &tier.id == id)
    }
}

/// The `powerhouse/service-offering` document model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceOffering;

impl DocumentModel for ServiceOffering {
    const DOCUMENT_TYPE: &'static str = "powerhouse/service-offering";
    const GRAPHQL_NAME: &'static str = "ServiceOffering";

    type State = ServiceOfferingState;
    type Action = ServiceOfferingAction;

    fn reduce(
        state: &mut ServiceOfferingState,
        action: &ServiceOfferingAction,
    ) -> Result<Outcome, ReducerError> {
        use ServiceOfferingAction as A;

        let outcome: Outcome = match action {
            A::UpdateOfferingInfo(input) => reducers::update_offering_info(state, input),
            A::UpdateOfferingStatus(input) => reducers::update_offering_status(state, input),
            A::SetOperator(input) => reducers::set_operator(state, input),
            A::SetOfferingId(input) => reducers::set_offering_id(state, input),
            A::AddService(input) => reducers::add_service(state, input),
            A::UpdateService(input) => reducers::update_service(state, input),
            A::DeleteService(input) => reducers::delete_service(state, input),
            A::AddFacetBinding(input) => reducers::add_facet_binding(state, input),
            A::RemoveFacetBinding(input) => reducers::remove_facet_binding(state, input),
            A::AddOptionGroup(input) => reducers::add_option_group(state, input),
            A::UpdateOptionGroup(input) => reducers::update_option_group(state, input),
            A::DeleteOptionGroup(input) => reducers::delete_option_group(state, input),
            A::AddTier(input) => reducers::add_tier(state, input),
            A::UpdateTier(input) => reducers::update_tier(state, input),
            A::UpdateTierPricing(input) => reducers::update_tier_pricing(state, input),
            A::DeleteTier(input) => reducers::delete_tier(state, input),
            A::AddServiceLevel(input) => reducers::add_service_level(state, input),
            A::UpdateServiceLevel(input) => reducers::update_service_level(state, input),
            A::RemoveServiceLevel(input) => reducers::remove_service_level(state, input),
            A::AddUsageLimit(input) => reducers::add_usage_limit(state, input),
            A::UpdateUsageLimit(input) => reducers::update_usage_limit(state, input),
            A::RemoveUsageLimit(input) => reducers::remove_usage_limit(state, input),
        };
        Ok(outcome)
    }

    fn validate_state(state: &ServiceOfferingState) -> Result<(), DomainError> {
        validate_unique_keys("services", &state.services, |service| &service.id)?;
        validate_unique_keys("optionGroups", &state.option_groups, |group| &group.id)?;
        validate_unique_keys("tiers", &state.tiers, |tier| &tier.id)?;
        for tier in &state.tiers {
            validate_unique_keys("serviceLevels", &tier.service_levels, |level| &level.id)?;
            validate_unique_keys("usageLimits", &tier.usage_limits, |limit| &limit.id)?;
        }
        for service in &state.services {
            validate_unique_keys("facetBindings", &service.facet_bindings, |binding| {
                &binding.id
            })?;
        }
        Ok(())
    }
}
