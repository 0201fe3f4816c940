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

//! The boundary between a host and the document models.
//!
//! A [`Reactor`] owns documents and drives and routes action records to
//! them. The query and mutation adapters sit on top of any reactor and
//! translate the per-document-type API (`Facet_addOption`, `getDocument`,
//! ...) into reactor calls, mapping failures to [`ApiError`].

mod error;
mod handlers;
mod reactor;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, ReactorError};
pub use handlers::{
    action_name, action_type_for, create_document, execute_mutation, get_document,
    get_documents, mutation_names,
};
pub use reactor::{DriveNode, InMemoryReactor, Reactor};
pub use request_response::{ActionResult, ActionStatus, DocumentView};
