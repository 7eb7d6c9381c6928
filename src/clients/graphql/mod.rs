//! GraphQL transport for the Wiz API.
//!
//! - [`GraphqlClient`]: authenticated client with `query`, `run` and `execute`
//! - [`GraphqlOperation`]: a typed, named query or mutation
//! - [`GraphqlError`]: error type for GraphQL operations
//!
//! Every request is a POST of `{"query": ..., "variables": ...}` to the
//! configured endpoint carrying `Authorization: Bearer <token>` and
//! `Cache-Control: no-cache`.
//!
//! # Response Structure
//!
//! - `data`: decoded into the caller's type
//! - `errors`: any entry turns the call into [`GraphqlError::Response`]

mod client;
mod errors;
mod operation;

pub use client::{GraphqlClient, GraphqlResponse};
pub use errors::{GraphqlError, GraphqlErrorDetail};
pub use operation::GraphqlOperation;
