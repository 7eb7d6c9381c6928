//! HTTP and GraphQL client types.
//!
//! # Overview
//!
//! - [`HttpClient`]: async HTTP client bound to one endpoint
//! - [`HttpRequest`]: a request to be sent
//! - [`HttpResponse`]: a parsed response
//! - [`HttpMethod`]: supported HTTP methods
//! - [`DataType`]: content types for request bodies (JSON, form)
//! - [`graphql::GraphqlClient`]: authenticated GraphQL transport
//! - [`graphql::GraphqlError`]: GraphQL-specific error types
//!
//! Requests are never retried. Every call is raced against the caller's
//! [`Context`](crate::Context) deadline.

mod errors;
pub mod graphql;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use graphql::{GraphqlClient, GraphqlError};
