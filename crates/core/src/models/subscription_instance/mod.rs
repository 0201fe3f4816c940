// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The customer side of a running subscription: who the customer is and
//! the requests they raise for an operator to process.
//!
//! Requests move `PENDING -> APPROVED | REJECTED | WITHDRAWN`. Approval and
//! rejection are not guarded on the current status; withdrawal is.

pub mod actions;
mod reducers;

use crate::error::ReducerError;
use crate::model::DocumentModel;
use crate::outcome::Outcome;
use actions::SubscriptionInstanceAction;
use resource_services_domain::{
    ClientRequest, CustomerType, DomainError, Oid, RequestStatus, validate_unique_keys,
};
use serde::{Deserialize, Serialize};

/// Global state of a subscription instance document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionInstanceState {
    pub customer_type: Option<CustomerType>,
    pub team_member_count: Option<i64>,
    pub pending_requests: Vec<ClientRequest>,
}

impl SubscriptionInstanceState {
    /// Returns the request with `id`.
    #[must_use]
    pub fn request(&self, id: &Oid) -> Option<&ClientRequest> {
        self.pending_requests.iter().find(|request| &request.id == id)
    }

    /// Returns the requests still awaiting an operator.
    pub fn open_requests(&self) -> impl Iterator<Item = &ClientRequest> {
        self.pending_requests
            .iter()
            .filter(|request| request.status == RequestStatus::Pending)
    }
}

/// The `powerhouse/subscription-instance` document model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubscriptionInstance;

impl DocumentModel for SubscriptionInstance {
    const DOCUMENT_TYPE: &'static str = "powerhouse/subscription-instance";
    const GRAPHQL_NAME: &'static str = "SubscriptionInstance";

    type State = SubscriptionInstanceState;
    type Action = SubscriptionInstanceAction;

    fn reduce(
        state: &mut SubscriptionInstanceState,
        action: &SubscriptionInstanceAction,
    ) -> Result<Outcome, ReducerError> {
        use SubscriptionInstanceAction as A;

        let outcome: Outcome = match action {
            A::SetCustomerType(input) => reducers::set_customer_type(state, input),
            A::UpdateTeamMemberCount(input) => reducers::update_team_member_count(state, input),
            A::CreateClientRequest(input) => reducers::create_client_request(state, input),
            A::ApproveRequest(input) => reducers::approve_request(state, input),
            A::RejectRequest(input) => reducers::reject_request(state, input),
            A::WithdrawRequest(input) => reducers::withdraw_request(state, input),
        };
        Ok(outcome)
    }

    fn validate_state(state: &SubscriptionInstanceState) -> Result<(), DomainError> {
        validate_unique_keys("pendingRequests", &state.pending_requests, |request| {
            &request.id
        })
    }
}
