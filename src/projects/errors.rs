//! Classification of project operation failures.
//!
//! Every failed project call is turned into a [`ResourceError`] scoped to the
//! operation that failed. Not-found is recognized from the structured
//! `extensions.code` of a GraphQL error. The `not found` marker in the error
//! text is only consulted when no code is attached.

use std::fmt;

use thiserror::Error;

use crate::clients::graphql::{GraphqlError, GraphqlErrorDetail};
use crate::clients::HttpError;

/// Resource type name used in messages.
pub const PROJECT_RESOURCE: &str = "project";

const NOT_FOUND_CODE: &str = "NOT_FOUND";
const NOT_FOUND_MARKER: &str = "not found";
const NO_PARENT: &str = "<none>";

/// The operation a failure happened in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// `CreateProject`.
    Create,
    /// `GraphSearch` read.
    Read,
    /// `UpdateProject`.
    Update,
}

impl ResourceOperation {
    const fn verb(self) -> &'static str {
        match self {
            Self::Create => "creating",
            Self::Read => "reading",
            Self::Update => "updating",
        }
    }

    // Create fails with not-found when the parent is missing; the others when
    // the resource itself is.
    const fn missing(self) -> &'static str {
        match self {
            Self::Create => "parent resource not found",
            Self::Read | Self::Update => "resource not found",
        }
    }
}

impl fmt::Display for ResourceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
        };
        f.write_str(name)
    }
}

/// Class of a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The resource, or its parent on create, does not exist.
    NotFound,
    /// Anything else.
    Other,
}

/// A classified, operation-scoped failure.
///
/// # Example
///
/// ```rust
/// use wiz_provider::projects::{ErrorKind, ResourceError, ResourceOperation, PROJECT_RESOURCE};
///
/// let err = ResourceError::not_found(ResourceOperation::Read, PROJECT_RESOURCE, Some("missing-id"));
/// assert_eq!(err.kind(), ErrorKind::NotFound);
/// assert_eq!(err.to_string(), "error reading project: resource not found: missing-id");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ResourceError {
    operation: ResourceOperation,
    kind: ErrorKind,
    resource_type: &'static str,
    reference: Option<String>,
    message: String,
    #[source]
    source: Option<GraphqlError>,
}

impl ResourceError {
    /// Builds a not-found error without an underlying transport error.
    ///
    /// Used when the call succeeded but returned nothing to read.
    #[must_use]
    pub fn not_found(
        operation: ResourceOperation,
        resource_type: &'static str,
        reference: Option<&str>,
    ) -> Self {
        Self {
            operation,
            kind: ErrorKind::NotFound,
            resource_type,
            reference: reference.map(str::to_string),
            message: not_found_message(operation, resource_type, reference),
            source: None,
        }
    }

    /// The operation that failed.
    #[must_use]
    pub const fn operation(&self) -> ResourceOperation {
        self.operation
    }

    /// The failure class.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns `true` for [`ErrorKind::NotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }

    /// Resource type named in the message.
    #[must_use]
    pub const fn resource_type(&self) -> &'static str {
        self.resource_type
    }

    /// Parent reference on create, resource reference otherwise.
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// The user-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

fn not_found_message(
    operation: ResourceOperation,
    resource_type: &str,
    reference: Option<&str>,
) -> String {
    format!(
        "error {} {}: {}: {}",
        operation.verb(),
        resource_type,
        operation.missing(),
        reference.unwrap_or(NO_PARENT)
    )
}

/// Returns `true` if `text` carries the API's not-found marker.
#[must_use]
pub fn is_not_found_message(text: &str) -> bool {
    text.to_lowercase().contains(NOT_FOUND_MARKER)
}

// A code, when present, decides. The text marker only applies to uncoded errors.
fn detail_is_not_found(detail: &GraphqlErrorDetail) -> bool {
    match detail.code() {
        Some(code) => code.eq_ignore_ascii_case(NOT_FOUND_CODE),
        None => is_not_found_message(&detail.message),
    }
}

/// Returns `true` if `error` matches the not-found signature.
///
/// Matches a GraphQL error whose `extensions.code` is `NOT_FOUND`, or an
/// uncoded GraphQL error whose message contains `not found`. Also matches an
/// HTTP 404 or an HTTP error body that contains `not found`.
#[must_use]
pub fn is_not_found(error: &GraphqlError) -> bool {
    match error {
        GraphqlError::Response { errors } => errors.iter().any(detail_is_not_found),
        GraphqlError::Http(HttpError::Response(response)) => {
            response.code == 404 || is_not_found_message(&response.message)
        }
        _ => false,
    }
}

/// Classifies a failed call.
///
/// `reference` is the parent project on create and the project id on read
/// and update. The raw error text is embedded verbatim for anything that is
/// not a not-found.
#[must_use]
pub fn classify(
    operation: ResourceOperation,
    resource_type: &'static str,
    reference: Option<&str>,
    error: GraphqlError,
) -> ResourceError {
    let (kind, message) = if is_not_found(&error) {
        (
            ErrorKind::NotFound,
            not_found_message(operation, resource_type, reference),
        )
    } else {
        (
            ErrorKind::Other,
            format!("error {} {}: {}", operation.verb(), resource_type, error),
        )
    };

    tracing::warn!(
        operation = %operation,
        reference = reference.unwrap_or(NO_PARENT),
        kind = ?kind,
        "{message}"
    );

    ResourceError {
        operation,
        kind,
        resource_type,
        reference: reference.map(str::to_string),
        message,
        source: Some(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;
    use serde_json::{json, Map};
    use std::error::Error as _;

    fn graphql_error(message: &str, code: Option<&str>) -> GraphqlError {
        GraphqlError::Response {
            errors: vec![GraphqlErrorDetail {
                message: message.to_string(),
                path: None,
                extensions: code.map(|c| {
                    let mut ext = Map::new();
                    ext.insert("code".to_string(), json!(c));
                    ext
                }),
            }],
        }
    }

    fn http_error(code: u16, message: &str) -> GraphqlError {
        GraphqlError::Http(HttpError::Response(HttpResponseError {
            code,
            message: message.to_string(),
        }))
    }

    #[test]
    fn test_read_not_found_message() {
        let err = classify(
            ResourceOperation::Read,
            PROJECT_RESOURCE,
            Some("missing-id"),
            graphql_error("Resource not found", None),
        );

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(
            err.to_string(),
            "error reading project: resource not found: missing-id"
        );
        assert_eq!(err.reference(), Some("missing-id"));
    }

    #[test]
    fn test_update_not_found_message() {
        let err = classify(
            ResourceOperation::Update,
            PROJECT_RESOURCE,
            Some("proj-id"),
            graphql_error("project does not exist", Some("NOT_FOUND")),
        );

        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "error updating project: resource not found: proj-id"
        );
    }

    #[test]
    fn test_create_not_found_names_parent() {
        let err = classify(
            ResourceOperation::Create,
            PROJECT_RESOURCE,
            Some("folder-1"),
            graphql_error("Parent Not Found", None),
        );
        assert_eq!(
            err.to_string(),
            "error creating project: parent resource not found: folder-1"
        );

        let err = classify(
            ResourceOperation::Create,
            PROJECT_RESOURCE,
            None,
            graphql_error("x", Some("not_found")),
        );
        assert_eq!(
            err.to_string(),
            "error creating project: parent resource not found: <none>"
        );
    }

    #[test]
    fn test_other_errors_embed_raw_text_verbatim() {
        let raw = graphql_error("Invalid input: name too long", Some("BAD_USER_INPUT"));
        let raw_text = raw.to_string();

        let err = classify(ResourceOperation::Create, PROJECT_RESOURCE, None, raw);

        assert_eq!(err.kind(), ErrorKind::Other);
        assert_eq!(err.to_string(), format!("error creating project: {raw_text}"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_http_not_found_signatures() {
        assert!(is_not_found(&http_error(404, "HTTP status 404")));
        assert!(is_not_found(&http_error(400, r#"{"errors":"project not found"}"#)));
        assert!(!is_not_found(&http_error(500, "Internal Server Error")));
        assert!(!is_not_found(&GraphqlError::MissingData));
    }

    #[test]
    fn test_code_takes_precedence_over_message_text() {
        let schema_error = graphql_error(
            "Cannot query field \"owner\": type not found",
            Some("GRAPHQL_VALIDATION_FAILED"),
        );
        assert!(!is_not_found(&schema_error));

        let err = classify(
            ResourceOperation::Read,
            PROJECT_RESOURCE,
            Some("proj-id"),
            schema_error,
        );
        assert_eq!(err.kind(), ErrorKind::Other);

        assert!(is_not_found(&graphql_error("Project not found", None)));
        assert!(is_not_found(&graphql_error("gone", Some("NOT_FOUND"))));
    }

    #[test]
    fn test_any_matching_detail_counts() {
        let error = GraphqlError::Response {
            errors: vec![
                GraphqlErrorDetail {
                    message: "first".to_string(),
                    path: None,
                    extensions: None,
                },
                GraphqlErrorDetail {
                    message: "Entity NOT FOUND".to_string(),
                    path: None,
                    extensions: None,
                },
            ],
        };
        assert!(is_not_found(&error));
    }

    #[test]
    fn test_not_found_constructor_has_no_source() {
        let err = ResourceError::not_found(ResourceOperation::Read, PROJECT_RESOURCE, Some("p"));
        assert!(err.source().is_none());
        assert_eq!(err.operation(), ResourceOperation::Read);
        assert_eq!(err.resource_type(), "project");
    }
}
