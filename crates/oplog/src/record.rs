// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::scope::Scope;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An action input failed to decode into its declared shape.
///
/// Raised for missing required fields, wrongly typed fields, malformed
/// datetimes and enum literals outside their declared set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The action type whose input was rejected.
    pub action_type: String,
    /// What was wrong with the input.
    pub message: String,
}

impl ValidationError {
    /// Creates a new `ValidationError`.
    ///
    /// # Arguments
    ///
    /// * `action_type` - The action type whose input was rejected
    /// * `message` - What was wrong with the input
    #[must_use]
    pub fn new(action_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid input for {}: {}", self.action_type, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// The wire form of an action: `{ "type", "input", "scope" }`.
///
/// Records are untyped so that callers can submit any action to any
/// document; each document decodes the records it understands into its own
/// action type and passes the rest through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The SCREAMING_SNAKE_CASE action type.
    #[serde(rename = "type")]
    pub action_type: String,
    /// The action input, decoded by the target document.
    #[serde(default)]
    pub input: Value,
    /// The state partition the action targets.
    #[serde(default)]
    pub scope: Scope,
}

impl ActionRecord {
    /// Creates a new `ActionRecord`.
    ///
    /// # Arguments
    ///
    /// * `action_type` - The action type literal
    /// * `input` - The raw action input
    /// * `scope` - The targeted scope
    #[must_use]
    pub fn new(action_type: impl Into<String>, input: Value, scope: Scope) -> Self {
        Self {
            action_type: action_type.into(),
            input,
            scope,
        }
    }

    /// Creates a record targeting the global scope.
    #[must_use]
    pub fn global(action_type: impl Into<String>, input: Value) -> Self {
        Self::new(action_type, input, Scope::Global)
    }

    /// Builds a record from a typed action.
    ///
    /// The action must serialize as an adjacently tagged object,
    /// `{ "type": ..., "input": ... }`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the action does not serialize to that
    /// shape.
    pub fn from_action<A: Serialize>(action: &A, scope: Scope) -> Result<Self, ValidationError> {
        let value: Value = serde_json::to_value(action)
            .map_err(|err| ValidationError::new("<unknown>", err.to_string()))?;
        let Value::Object(mut envelope) = value else {
            return Err(ValidationError::new(
                "<unknown>",
                "action did not serialize to an object",
            ));
        };
        let Some(Value::String(action_type)) = envelope.remove("type") else {
            return Err(ValidationError::new(
                "<unknown>",
                "action did not serialize with a type tag",
            ));
        };
        let input: Value = envelope.remove("input").unwrap_or(Value::Null);
        Ok(Self::new(action_type, input, scope))
    }

    /// Decodes the record into a typed action.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the type is not a variant of `A` or the
    /// input does not match the variant's declared shape.
    pub fn decode<A: DeserializeOwned>(&self) -> Result<A, ValidationError> {
        let mut envelope: Map<String, Value> = Map::with_capacity(2);
        envelope.insert(
            String::from("type"),
            Value::String(self.action_type.clone()),
        );
        envelope.insert(String::from("input"), self.input.clone());
        serde_json::from_value(Value::Object(envelope))
            .map_err(|err| ValidationError::new(&self.action_type, err.to_string()))
    }
}
