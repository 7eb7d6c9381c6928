//! HTTP-specific error types.
//!
//! - [`HttpResponseError`]: non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use wiz_provider::clients::HttpError;
//!
//! match client.request(&ctx, request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::DeadlineExceeded(_)) => println!("timed out"),
//!     Err(other) => println!("{other}"),
//! }
//! ```

use thiserror::Error;

use crate::context::DeadlineExceeded;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message is a JSON object carrying whichever of `errors`, `error` and
/// `error_description` the response body contained.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The caller's deadline passed before the response arrived.
    #[error("Request aborted: {0}")]
    DeadlineExceeded(#[from] DeadlineExceeded),
}
