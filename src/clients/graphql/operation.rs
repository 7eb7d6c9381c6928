//! Declarative GraphQL operations.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A named GraphQL query or mutation with typed variables and response.
///
/// Implementors are usually unit structs; the document and both shapes are
/// fixed at compile time.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use wiz_provider::clients::graphql::GraphqlOperation;
///
/// #[derive(Serialize)]
/// struct NoVariables {}
///
/// #[derive(Deserialize)]
/// struct Typename {
///     #[serde(rename = "__typename")]
///     typename: String,
/// }
///
/// struct Ping;
///
/// impl GraphqlOperation for Ping {
///     const NAME: &'static str = "Ping";
///     const DOCUMENT: &'static str = "query Ping { __typename }";
///     type Variables = NoVariables;
///     type Response = Typename;
/// }
/// ```
pub trait GraphqlOperation {
    /// Operation name, used for logging.
    const NAME: &'static str;
    /// The GraphQL document sent as `query`.
    const DOCUMENT: &'static str;
    /// Variables, flattened into the `variables` map.
    type Variables: Serialize;
    /// Shape of the `data` member of a successful response.
    type Response: DeserializeOwned;
}
