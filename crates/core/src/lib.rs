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

//! Event-sourced reducers for resource service documents.
//!
//! Each document type is a [`DocumentModel`]: a default state, a closed
//! catalogue of actions and one operation reducer per action. A
//! [`Document`] wraps a model's state with its header and operation log and
//! is the only way state changes: actions are validated, reduced, and
//! appended to the log in a single step.

/// Declares a document's action catalogue.
///
/// Generates, from one list of `Variant(Input) => "ACTION_TYPE"` entries:
/// - the action enum, serialized as `{ "type": ..., "input": ... }`
/// - its [`ActionType`] impl listing every type literal
/// - `From<Input>` for each variant
/// - a snake_case creator function per variant, e.g. `set_configuration`
///
/// Every variant must carry a distinct input type.
macro_rules! document_actions {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident($input:ty) => $tag:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(tag = "type", content = "input")]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $tag)]
                $variant($input),
            )+
        }

        impl $crate::ActionType for $name {
            const TYPES: &'static [&'static str] = &[$($tag),+];

            fn action_type(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => $tag,)+
                }
            }
        }

        $(
            impl From<$input> for $name {
                fn from(input: $input) -> Self {
                    Self::$variant(input)
                }
            }
        )+

        pastey::paste! {
            $(
                #[doc = concat!("Creates a `", $tag, "` action.")]
                #[must_use]
                $vis fn [<$variant:snake>](input: $input) -> $name {
                    $name::$variant(input)
                }
            )+
        }
    };
}

mod any;
mod document;
mod error;
mod list;
mod model;
pub mod models;
mod optional;
mod outcome;
mod utils;

#[cfg(test)]
mod tests;

pub use any::{AnyDocument, DocumentKind, UnknownDocumentKind};
pub use document::{Document, DocumentHeader, DocumentState, SET_NAME};
pub use error::{CoreError, ReducerError};
pub use model::{ActionType, DocumentModel};
pub use models::{
    Facet, ResourceInstance, ResourceTemplate, ServiceOffering, ServiceSubscription,
    SubscriptionInstance,
};
pub use outcome::{NoOp, Outcome};
pub use utils::{
    assert_is_document_of_type, assert_is_state_of_type, create_document, create_state,
    is_document_of_type, is_state_of_type, load_from_reader, now_utc, save_to_writer,
};

pub use resource_services_oplog::{
    ActionRecord, Operation, Operations, Revision, Scope, ValidationError,
};
