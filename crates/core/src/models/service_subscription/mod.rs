// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A customer's subscription to a service offering.

pub mod actions;
mod reducers;

use crate::error::ReducerError;
use crate::model::DocumentModel;
use crate::outcome::Outcome;
use actions::ServiceSubscriptionAction;
use resource_services_domain::{
    DateTime, DomainError, FacetSelection, Oid, Phid, SelectedAddon, SubscriptionPricing,
    SubscriptionStatus, validate_unique_keys,
};
use serde::{Deserialize, Serialize};

/// Global state of a service subscription document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSubscriptionState {
    pub id: Phid,
    pub customer_id: Phid,
    pub service_offering_id: Phid,
    pub resource_template_id: Phid,
    pub selected_tier_id: Oid,
    pub status: SubscriptionStatus,
    pub start_date: Option<DateTime>,
    pub current_period_start: Option<DateTime>,
    pub current_period_end: Option<DateTime>,
    pub cancelled_at: Option<DateTime>,
    pub cancellation_reason: Option<String>,
    pub pricing: Option<SubscriptionPricing>,
    pub selected_addons: Vec<SelectedAddon>,
    pub facet_selections: Vec<FacetSelection>,
    pub created_at: DateTime,
    pub last_modified: DateTime,
}

impl ServiceSubscriptionState {
    /// Returns the option selected for `category_key`.
    #[must_use]
    pub fn selected_option(&self, category_key: &str) -> Option<&str> {
        self.facet_selections
            .iter()
            .find(|selection| selection.category_key == category_key)
            .map(|selection| selection.selected_option_id.as_str())
    }

    /// Returns true if the add-on with `id` is selected.
    #[must_use]
    pub fn has_addon(&self, id: &Oid) -> bool {
        self.selected_addons.iter().any(|addon| &addon.id == id)
    }
}

/// The `powerhouse/service-subscription` document model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceSubscription;

impl DocumentModel for ServiceSubscription {
    const DOCUMENT_TYPE: &'static str = "powerhouse/service-subscription";
    const GRAPHQL_NAME: &'static str = "ServiceSubscription";

    type State = ServiceSubscriptionState;
    type Action = ServiceSubscriptionAction;

    fn reduce(
        state: &mut ServiceSubscriptionState,
        action: &ServiceSubscriptionAction,
    ) -> Result<Outcome, ReducerError> {
        use ServiceSubscriptionAction as A;

        let outcome: Outcome = match action {
            A::InitializeSubscription(input) => reducers::initialize_subscription(state, input),
            A::UpdateSubscriptionStatus(input) => {
                reducers::update_subscription_status(state, input)
            }
            A::ActivateSubscription(input) => reducers::activate_subscription(state, input),
            A::CancelSubscription(input) => reducers::cancel_subscription(state, input),
            A::RenewSubscription(input) => reducers::renew_subscription(state, input),
            A::ChangeTier(input) => reducers::change_tier(state, input),
            A::SetPricing(input) => reducers::set_pricing(state, input),
            A::AddAddon(input) => reducers::add_addon(state, input),
            A::RemoveAddon(input) => reducers::remove_addon(state, input),
            A::SetFacetSelection(input) => reducers::set_facet_selection(state, input),
            A::RemoveFacetSelection(input) => reducers::remove_facet_selection(state, input),
        };
        Ok(outcome)
    }

    fn validate_state(state: &ServiceSubscriptionState) -> Result<(), DomainError> {
        validate_unique_keys("selectedAddons", &state.selected_addons, |addon| &addon.id)?;
        validate_unique_keys("facetSelections", &state.facet_selections, |selection| {
            selection.category_key.as_str()
        })
    }
}
