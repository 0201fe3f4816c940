// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::SubscriptionInstanceState;
use super::actions::{
    ApproveRequestInput, CreateClientRequestInput, RejectRequestInput, SetCustomerTypeInput,
    UpdateTeamMemberCountInput, WithdrawRequestInput,
};
use crate::optional::{non_empty, non_empty_id};
use crate::outcome::{NoOp, Outcome};
use resource_services_domain::{ClientRequest, Oid, RequestStatus};

fn find_request<'a>(
    state: &'a mut SubscriptionInstanceState,
    request_id: &Oid,
) -> Result<&'a mut ClientRequest, NoOp> {
    state
        .pending_requests
        .iter_mut()
        .find(|request| &request.id == request_id)
        .ok_or_else(|| NoOp::not_found("request", request_id))
}

// Customer

/// The team member count is only overwritten when one is supplied.
pub fn set_customer_type(
    state: &mut SubscriptionInstanceState,
    input: &SetCustomerTypeInput,
) -> Outcome {
    state.customer_type = Some(input.customer_type);
    if input.team_member_count.is_some() {
        state.team_member_count = input.team_member_count;
    }
    Outcome::Applied
}

pub fn update_team_member_count(
    state: &mut SubscriptionInstanceState,
    input: &UpdateTeamMemberCountInput,
) -> Outcome {
    state.team_member_count = Some(input.team_member_count);
    Outcome::Applied
}

// Requests

pub fn create_client_request(
    state: &mut SubscriptionInstanceState,
    input: &CreateClientRequestInput,
) -> Outcome {
    if state.request(&input.request_id).is_some() {
        return Outcome::Ignored(NoOp::duplicate("request", &input.request_id));
    }
    state.pending_requests.push(ClientRequest {
        id: input.request_id.clone(),
        request_type: input.request_type,
        status: RequestStatus::Pending,
        requested_at: input.requested_at.clone(),
        requested_by: non_empty(input.requested_by.as_deref()),
        reason: non_empty(input.reason.as_deref()),
        service_id: non_empty_id(input.service_id.as_ref()),
        metric_id: non_empty_id(input.metric_id.as_ref()),
        requested_limit: input.requested_limit,
        requested_tier_name: non_empty(input.requested_tier_name.as_deref()),
        requested_team_size: input.requested_team_size,
        processed_at: None,
        processed_by: None,
        operator_response: None,
    });
    Outcome::Applied
}

pub fn approve_request(
    state: &mut SubscriptionInstanceState,
    input: &ApproveRequestInput,
) -> Outcome {
    let request: &mut ClientRequest = match find_request(state, &input.request_id) {
        Ok(request) => request,
        Err(reason) => return Outcome::Ignored(reason),
    };
    request.status = RequestStatus::Approved;
    request.processed_at = Some(input.processed_at.clone());
    request.processed_by = non_empty(input.processed_by.as_deref());
    request.operator_response = non_empty(input.operator_response.as_deref());
    Outcome::Applied
}

pub fn reject_request(
    state: &mut SubscriptionInstanceState,
    input: &RejectRequestInput,
) -> Outcome {
    let request: &mut ClientRequest = match find_request(state, &input.request_id) {
        Ok(request) => request,
        Err(reason) => return Outcome::Ignored(reason),
    };
    request.status = RequestStatus::Rejected;
    request.processed_at = Some(input.processed_at.clone());
    request.processed_by = non_empty(input.processed_by.as_deref());
    request.operator_response = Some(input.operator_response.clone());
    Outcome::Applied
}

/// Only a pending request can be withdrawn.
pub fn withdraw_request(
    state: &mut SubscriptionInstanceState,
    input: &WithdrawRequestInput,
) -> Outcome {
    let request: &mut ClientRequest = match find_request(state, &input.request_id) {
        Ok(request) => request,
        Err(reason) => return Outcome::Ignored(reason),
    };
    if request.status != RequestStatus::Pending {
        return Outcome::Ignored(NoOp::NotPending {
            request_id: request.id.to_string(),
            status: request.status,
        });
    }
    request.status = RequestStatus::Withdrawn;
    request.processed_at = Some(input.withdrawn_at.clone());
    Outcome::Applied
}
