// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Type-erased documents, for hosts that hold documents of every model in
//! one collection and route actions by document type.

use crate::document::{Document, DocumentHeader};
use crate::error::CoreError;
use crate::model::{ActionType, DocumentModel};
use crate::models::{
    Facet, ResourceInstance, ResourceTemplate, ServiceOffering, ServiceSubscription,
    SubscriptionInstance,
};
use crate::outcome::Outcome;
use crate::utils::{assert_is_document_of_type, create_document};
use resource_services_domain::{DateTime, Phid};
use resource_services_oplog::{ActionRecord, Operations};
use serde_json::Value;
use std::str::FromStr;

/// A document type name that no model claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDocumentKind(pub String);

impl std::fmt::Display for UnknownDocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown document type '{}'", self.0)
    }
}

impl std::error::Error for UnknownDocumentKind {}

/// Declares the document kinds and their models in one place.
macro_rules! document_kinds {
    ($($kind:ident => $model:ty),+ $(,)?) => {
        /// One of the document models.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum DocumentKind {
            $($kind,)+
        }

        impl DocumentKind {
            /// Every document kind.
            pub const ALL: &'static [Self] = &[$(Self::$kind),+];

            /// Returns the document type identifier, e.g. `powerhouse/facet`.
            #[must_use]
            pub const fn document_type(self) -> &'static str {
                match self {
                    $(Self::$kind => <$model as DocumentModel>::DOCUMENT_TYPE,)+
                }
            }

            /// Returns the prefix of the kind's query and mutation names.
            #[must_use]
            pub const fn graphql_name(self) -> &'static str {
                match self {
                    $(Self::$kind => <$model as DocumentModel>::GRAPHQL_NAME,)+
                }
            }

            /// Returns every action type the kind accepts.
            #[must_use]
            pub const fn action_types(self) -> &'static [&'static str] {
                match self {
                    $(Self::$kind => <<$model as DocumentModel>::Action as ActionType>::TYPES,)+
                }
            }
        }

        /// A document of any model.
        #[derive(Debug, Clone, PartialEq)]
        pub enum AnyDocument {
            $($kind(Document<$model>),)+
        }

        impl AnyDocument {
            /// Creates a new document of `kind` with a random id, created now.
            ///
            /// # Errors
            ///
            /// Returns `CoreError` if the current time cannot be represented.
            pub fn create(kind: DocumentKind) -> Result<Self, CoreError> {
                Ok(match kind {
                    $(DocumentKind::$kind => Self::$kind(create_document::<$model>(None)?),)+
                })
            }

            /// Creates an empty document of `kind`.
            #[must_use]
            pub fn new(kind: DocumentKind, id: Phid, created: DateTime) -> Self {
                match kind {
                    $(DocumentKind::$kind => Self::$kind(Document::new(id, created)),)+
                }
            }

            /// Returns the document's kind.
            #[must_use]
            pub const fn kind(&self) -> DocumentKind {
                match self {
                    $(Self::$kind(_) => DocumentKind::$kind,)+
                }
            }

            /// Parses a serialized document, picking the model from its
            /// header.
            ///
            /// # Errors
            ///
            /// Returns `CoreError::UnknownDocumentKind` if no model claims
            /// the document type, or any error of
            /// [`assert_is_document_of_type`].
            pub fn from_json(value: &Value) -> Result<Self, CoreError> {
                let document_type: &str = value
                    .pointer("/header/documentType")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                let kind: DocumentKind = DocumentKind::from_document_type(document_type)?;
                Ok(match kind {
                    $(DocumentKind::$kind => {
                        Self::$kind(assert_is_document_of_type::<$model>(value)?)
                    })+
                })
            }
        }

        macro_rules! dispatch {
            ($value:expr, $document:ident => $body:expr) => {
                match $value {
                    $(Self::$kind($document) => $body,)+
                }
            };
        }
    };
}

document_kinds! {
    ResourceInstance => ResourceInstance,
    ServiceSubscription => ServiceSubscription,
    ServiceOffering => ServiceOffering,
    SubscriptionInstance => SubscriptionInstance,
    Facet => Facet,
    ResourceTemplate => ResourceTemplate,
}

impl DocumentKind {
    /// Looks up a kind by its document type identifier.
    ///
    /// # Errors
    ///
    /// Returns `UnknownDocumentKind` if no model has that document type.
    pub fn from_document_type(document_type: &str) -> Result<Self, UnknownDocumentKind> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.document_type() == document_type)
            .ok_or_else(|| UnknownDocumentKind(document_type.to_string()))
    }

    /// Looks up a kind by its query and mutation prefix, e.g. `Facet`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownDocumentKind` if no model has that name.
    pub fn from_graphql_name(name: &str) -> Result<Self, UnknownDocumentKind> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.graphql_name() == name)
            .ok_or_else(|| UnknownDocumentKind(name.to_string()))
    }

    /// Returns true if the kind accepts `action_type`.
    #[must_use]
    pub fn accepts(self, action_type: &str) -> bool {
        self.action_types().contains(&action_type)
    }
}

/// Accepts either the document type identifier or the query prefix.
impl FromStr for DocumentKind {
    type Err = UnknownDocumentKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_document_type(s).or_else(|_| Self::from_graphql_name(s))
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.document_type())
    }
}

impl AnyDocument {
    /// Returns the document header.
    #[must_use]
    pub const fn header(&self) -> &DocumentHeader {
        dispatch!(self, document => &document.header)
    }

    /// Returns the document id.
    #[must_use]
    pub const fn id(&self) -> &Phid {
        &self.header().id
    }

    /// Returns the operation log.
    #[must_use]
    pub const fn operations(&self) -> &Operations {
        dispatch!(self, document => &document.operations)
    }

    /// Renames the document.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name: String = name.into();
        dispatch!(self, document => document.set_name(name));
    }

    /// Applies an action record now.
    ///
    /// # Errors
    ///
    /// See [`Document::apply_record_at`].
    pub fn apply_record(&mut self, record: ActionRecord) -> Result<Outcome, CoreError> {
        dispatch!(self, document => document.apply_record(record))
    }

    /// Applies an action record, stamping the operation with `timestamp`.
    ///
    /// # Errors
    ///
    /// See [`Document::apply_record_at`].
    pub fn apply_record_at(
        &mut self,
        record: ActionRecord,
        timestamp: DateTime,
    ) -> Result<Outcome, CoreError> {
        dispatch!(self, document => document.apply_record_at(record, timestamp))
    }

    /// Returns the global state as JSON.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Serialization` if the state cannot be serialized.
    pub fn global_state_json(&self) -> Result<Value, CoreError> {
        dispatch!(self, document => Ok(serde_json::to_value(document.global_state())?))
    }

    /// Returns the whole document as JSON.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Serialization` if the document cannot be
    /// serialized.
    pub fn to_json(&self) -> Result<Value, CoreError> {
        dispatch!(self, document => Ok(serde_json::to_value(document)?))
    }

    /// Checks that the document's log reproduces its state.
    ///
    /// # Errors
    ///
    /// See [`Document::verify`].
    pub fn verify(&self) -> Result<(), CoreError> {
        dispatch!(self, document => document.verify())
    }
}

macro_rules! impl_from_document {
    ($($kind:ident),+) => {
        $(
            impl From<Document<$kind>> for AnyDocument {
                fn from(document: Document<$kind>) -> Self {
                    Self::$kind(document)
                }
            }
        )+
    };
}

impl_from_document!(
    ResourceInstance,
    ServiceSubscription,
    ServiceOffering,
    SubscriptionInstance,
    Facet,
    ResourceTemplate
);
