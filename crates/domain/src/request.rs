// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client requests raised against a subscription instance.

use crate::scalars::{DateTime, Oid};
use serde::{Deserialize, Serialize};

wire_enum! {
    /// What the client is asking for.
    pub enum RequestType {
        PauseSubscription => "PAUSE_SUBSCRIPTION",
        ResumeSubscription => "RESUME_SUBSCRIPTION",
        CancelSubscription => "CANCEL_SUBSCRIPTION",
        IncreaseMetricLimit => "INCREASE_METRIC_LIMIT",
        AddService => "ADD_SERVICE",
        RemoveService => "REMOVE_SERVICE",
        ChangeTier => "CHANGE_TIER",
        UpdateTeamSize => "UPDATE_TEAM_SIZE",
    }
}

wire_enum! {
    /// Processing state of a client request.
    ///
    /// `Pending` is the only non-terminal state.
    pub enum RequestStatus {
        Pending => "PENDING",
        Approved => "APPROVED",
        Rejected => "REJECTED",
        Withdrawn => "WITHDRAWN",
    }
}

impl RequestStatus {
    /// Returns true if the request can no longer change state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

wire_enum! {
    /// Whether the subscriber is a single person or a team.
    pub enum CustomerType {
        Individual => "INDIVIDUAL",
        Team => "TEAM",
    }
}

/// A request raised by the client and processed by an operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRequest {
    pub id: Oid,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub status: RequestStatus,
    pub requested_at: DateTime,
    pub requested_by: Option<String>,
    pub reason: Option<String>,
    pub service_id: Option<Oid>,
    pub metric_id: Option<Oid>,
    pub requested_limit: Option<i64>,
    pub requested_tier_name: Option<String>,
    pub requested_team_size: Option<i64>,
    pub processed_at: Option<DateTime>,
    pub processed_by: Option<String>,
    pub operator_response: Option<String>,
}
