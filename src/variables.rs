//! Typed request structs to GraphQL variables.
//!
//! Requests are plain `serde::Serialize` structs whose wire names are fixed by
//! `#[serde(rename...)]` attributes, so the mapping to the API's camelCase
//! variable names is checked at compile time and lives next to the field
//! declaration. [`flatten`] turns such a struct into the top-level variables
//! map sent with a GraphQL operation.
//!
//! Nested structs become nested maps and `Vec`s become arrays. Optional
//! fields follow a single policy across the crate: `None` is omitted from the
//! map (every `Option` field carries `skip_serializing_if = "Option::is_none"`).
//!
//! # Example
//!
//! ```rust
//! use serde::Serialize;
//! use wiz_provider::variables::flatten;
//!
//! #[derive(Serialize)]
//! #[serde(rename_all = "camelCase")]
//! struct Input {
//!     project_id: String,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     description: Option<String>,
//! }
//!
//! let vars = flatten(&Input { project_id: "p-1".into(), description: None }).unwrap();
//! assert_eq!(vars["projectId"], "p-1");
//! assert!(!vars.contains_key("description"));
//! ```

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// A GraphQL variables map.
pub type Variables = Map<String, Value>;

/// Errors produced while flattening a request.
#[derive(Debug, Error)]
pub enum VariablesError {
    /// The value could not be serialized.
    #[error("failed to serialize variables: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The value did not serialize to an object.
    #[error("variables must serialize to an object, got {kind}")]
    NotAnObject {
        /// JSON kind the value serialized to.
        kind: &'static str,
    },
}

/// Flattens a request into a GraphQL variables map.
///
/// The output is deterministic: `serde_json`'s map keeps keys sorted, so the
/// same request always yields the same map.
///
/// # Errors
///
/// Returns [`VariablesError::NotAnObject`] if `request` is not a struct or
/// map, and [`VariablesError::Serialize`] if a field fails to serialize.
pub fn flatten<T: Serialize + ?Sized>(request: &T) -> Result<Variables, VariablesError> {
    match serde_json::to_value(request)? {
        Value::Object(map) => Ok(map),
        other => Err(VariablesError::NotAnObject {
            kind: kind_of(&other),
        }),
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
