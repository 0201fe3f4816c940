// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use resource_services_domain::{CustomerType, DateTime, Oid, RequestType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCustomerTypeInput {
    pub customer_type: CustomerType,
    pub team_member_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamMemberCountInput {
    pub team_member_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequestInput {
    pub request_id: Oid,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub requested_at: DateTime,
    pub requested_by: Option<String>,
    pub reason: Option<String>,
    pub service_id: Option<Oid>,
    pub metric_id: Option<Oid>,
    pub requested_limit: Option<i64>,
    pub requested_tier_name: Option<String>,
    pub requested_team_size: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveRequestInput {
    pub request_id: Oid,
    pub processed_at: DateTime,
    pub processed_by: Option<String>,
    pub operator_response: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectRequestInput {
    pub request_id: Oid,
    pub processed_at: DateTime,
    pub processed_by: Option<String>,
    pub operator_response: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawRequestInput {
    pub request_id: Oid,
    pub withdrawn_at: DateTime,
}

document_actions! {
    /// Actions accepted by a subscription instance document.
    pub enum SubscriptionInstanceAction {
        SetCustomerType(SetCustomerTypeInput) => "SET_CUSTOMER_TYPE",
        UpdateTeamMemberCount(UpdateTeamMemberCountInput) => "UPDATE_TEAM_MEMBER_COUNT",
        CreateClientRequest(CreateClientRequestInput) => "CREATE_CLIENT_REQUEST",
        ApproveRequest(ApproveRequestInput) => "APPROVE_REQUEST",
        RejectRequest(RejectRequestInput) => "REJECT_REQUEST",
        WithdrawRequest(WithdrawRequestInput) => "WITHDRAW_REQUEST",
    }
}
