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

//! The append-only side of a document.
//!
//! Every change to a document is requested through an [`ActionRecord`] and,
//! once reduced, recorded as an [`Operation`] in the log of the action's
//! [`Scope`]. The log is never rewritten: a rejected operation is still
//! appended, carrying its error, so that replaying the log reproduces the
//! exact same state.

mod operation;
mod record;
mod scope;

#[cfg(test)]
mod tests;

pub use operation::{Operation, Operations, Revision};
pub use record::{ActionRecord, ValidationError};
pub use scope::{InvalidScope, Scope};
