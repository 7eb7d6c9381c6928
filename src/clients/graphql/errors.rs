//! GraphQL-specific error types.
//!
//! A GraphQL call can fail at several layers:
//!
//! - [`GraphqlError::Http`]: transport failure or non-2xx status
//! - [`GraphqlError::Response`]: the server answered with an `errors` array
//! - [`GraphqlError::MissingData`]: neither `data` nor `errors` was present
//! - [`GraphqlError::Decode`]: `data` did not match the expected shape
//! - [`GraphqlError::Variables`]: the request could not be flattened
//!
//! This layer only reports what happened. Deciding whether an error means
//! "not found" is left to [`crate::projects::classify`].

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::clients::HttpError;
use crate::variables::VariablesError;

/// One entry of a GraphQL `errors` array.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GraphqlErrorDetail {
    /// Human-readable message.
    pub message: String,
    /// Path of the field that failed, if reported.
    #[serde(default)]
    pub path: Option<Vec<Value>>,
    /// Vendor extensions, e.g. `{"code": "NOT_FOUND"}`.
    #[serde(default)]
    pub extensions: Option<Map<String, Value>>,
}

impl GraphqlErrorDetail {
    /// Returns `extensions.code`, if present.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .and_then(Value::as_str)
    }
}

fn join_messages(errors: &[GraphqlErrorDetail]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error type for GraphQL operations.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response carried a non-empty `errors` array.
    #[error("graphql: {}", join_messages(.errors))]
    Response {
        /// The reported errors, in server order.
        errors: Vec<GraphqlErrorDetail>,
    },

    /// The response had no `data` member.
    #[error("graphql: response contained no data")]
    MissingData,

    /// `data` could not be decoded into the expected type.
    #[error("graphql: failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request variables could not be built.
    #[error(transparent)]
    Variables(#[from] VariablesError),
}

// Verify GraphqlError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;
    use serde_json::json;

    fn detail(message: &str, code: Option<&str>) -> GraphqlErrorDetail {
        GraphqlErrorDetail {
            message: message.to_string(),
            path: None,
            extensions: code.map(|c| {
                let mut ext = Map::new();
                ext.insert("code".to_string(), json!(c));
                ext
            }),
        }
    }

    #[test]
    fn test_response_error_joins_messages() {
        let error = GraphqlError::Response {
            errors: vec![detail("first", None), detail("second", None)],
        };
        assert_eq!(error.to_string(), "graphql: first; second");
    }

    #[test]
    fn test_detail_exposes_extension_code() {
        assert_eq!(detail("x", Some("NOT_FOUND")).code(), Some("NOT_FOUND"));
        assert_eq!(detail("x", None).code(), None);
    }

    #[test]
    fn test_detail_deserializes_from_wire_shape() {
        let detail: GraphqlErrorDetail = serde_json::from_value(json!({
            "message": "Resource not found",
            "path": ["updateProject"],
            "extensions": {"code": "NOT_FOUND", "exception": {"message": "x"}}
        }))
        .unwrap();

        assert_eq!(detail.message, "Resource not found");
        assert_eq!(detail.path, Some(vec![json!("updateProject")]));
        assert_eq!(detail.code(), Some("NOT_FOUND"));
    }

    #[test]
    fn test_from_http_error_conversion() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 500,
            message: r#"{"error":"Internal Server Error"}"#.to_string(),
        });

        let graphql_error: GraphqlError = http_error.into();

        assert!(matches!(graphql_error, GraphqlError::Http(_)));
        assert!(graphql_error.to_string().contains("Internal Server Error"));
    }
}
