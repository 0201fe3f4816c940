// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Document, DocumentModel};
use resource_services_domain::{DateTime, Oid, Phid};

pub const CREATED: &str = "2024-01-01T00:00:00.000Z";

pub fn ts(value: &str) -> DateTime {
    DateTime::parse(value).unwrap()
}

/// Returns a timestamp `minute` minutes after `CREATED`.
pub fn minute(minute: u32) -> DateTime {
    ts(&format!("2024-01-01T00:{minute:02}:00.000Z"))
}

pub fn oid(value: &str) -> Oid {
    Oid::new(value)
}

pub fn phid(value: &str) -> Phid {
    Phid::new(value)
}

pub fn new_document<M: DocumentModel>() -> Document<M> {
    Document::new(phid("doc-1"), ts(CREATED))
}
