// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{InMemoryReactor, create_document};
use resource_services::DocumentKind;
use resource_services_domain::Phid;
use serde_json::{Value, json};

pub const DRIVE: &str = "drive-1";

pub fn create_test_reactor() -> InMemoryReactor {
    let mut reactor: InMemoryReactor = InMemoryReactor::new();
    reactor.add_drive(DRIVE);
    reactor
}

pub fn create_in_drive(reactor: &mut InMemoryReactor, kind: DocumentKind, name: &str) -> Phid {
    create_document(reactor, kind, name, Some(DRIVE)).unwrap()
}

pub fn initialize_instance_input() -> Value {
    json!({
        "id": "instance-1",
        "subscriptionId": "sub-1",
        "resourceTemplateId": "template-1",
        "customerId": "customer-1",
        "name": "Primary node",
        "createdAt": "2024-01-01T00:00:00.000Z",
        "lastModified": "2024-01-01T00:00:00.000Z"
    })
}

pub fn record_usage_input(value: i64) -> Value {
    json!({
        "id": "metric-1",
        "metricKey": "api-calls",
        "value": value,
        "recordedAt": "2024-01-01T00:05:00.000Z",
        "lastModified": "2024-01-01T00:05:00.000Z"
    })
}
