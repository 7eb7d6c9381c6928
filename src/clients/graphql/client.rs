//! GraphQL client implementation for the Wiz API.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::auth::AccessToken;
use crate::clients::graphql::{GraphqlError, GraphqlErrorDetail, GraphqlOperation};
use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{EndpointUrl, WizConfig};
use crate::context::Context;
use crate::variables::{self, Variables};

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    /// Result data, absent when the operation failed entirely.
    pub data: Option<T>,
    /// Errors reported by the server.
    #[serde(default)]
    pub errors: Vec<GraphqlErrorDetail>,
}

impl<T> GraphqlResponse<T> {
    /// Converts the envelope into its data, failing on any reported error.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Response`] if `errors` is non-empty and
    /// [`GraphqlError::MissingData`] if `data` is absent.
    pub fn into_result(self) -> Result<T, GraphqlError> {
        if !self.errors.is_empty() {
            return Err(GraphqlError::Response {
                errors: self.errors,
            });
        }
        self.data.ok_or(GraphqlError::MissingData)
    }
}

/// Authenticated GraphQL client.
///
/// Holds no mutable state after construction, so a single instance can be
/// shared by concurrent operations.
///
/// # Example
///
/// ```rust,ignore
/// use wiz_provider::clients::graphql::GraphqlClient;
/// use wiz_provider::Context;
///
/// let client = GraphqlClient::new(config.endpoint(), &token, Some(&config))?;
/// let response = client
///     .query(&Context::background(), "query { __typename }", None)
///     .await?;
/// println!("{}", response.body["data"]);
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client for `endpoint` using `token`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(
        endpoint: &EndpointUrl,
        token: &AccessToken,
        config: Option<&WizConfig>,
    ) -> Result<Self, HttpError> {
        let http_client = HttpClient::new(endpoint, Some(token), config)?;
        Ok(Self { http_client })
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.http_client.url()
    }

    /// Sends a raw GraphQL document and returns the undecoded response.
    ///
    /// GraphQL-level errors arrive with HTTP 200 and are left in
    /// `response.body["errors"]`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] for HTTP-level errors.
    pub async fn query(
        &self,
        ctx: &Context,
        query: &str,
        variables: Option<Variables>,
    ) -> Result<HttpResponse, GraphqlError> {
        let body = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        let request = HttpRequest::builder(HttpMethod::Post)
            .body(body)
            .body_type(DataType::Json)
            .header("Cache-Control", "no-cache")
            .build()
            .map_err(|e| GraphqlError::Http(e.into()))?;

        self.http_client
            .request(ctx, request)
            .await
            .map_err(Into::into)
    }

    /// Sends a GraphQL document and decodes `data` into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] for transport failures, reported GraphQL
    /// errors, a missing `data` member, or a shape mismatch.
    pub async fn run<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        query: &str,
        variables: Variables,
    ) -> Result<T, GraphqlError> {
        let response = self.query(ctx, query, Some(variables)).await?;
        let envelope: GraphqlResponse<T> =
            serde_json::from_value(response.body).map_err(GraphqlError::Decode)?;
        envelope.into_result()
    }

    /// Executes a typed operation.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run), plus [`GraphqlError::Variables`] if the
    /// variables cannot be flattened.
    pub async fn execute<O: GraphqlOperation>(
        &self,
        ctx: &Context,
        variables: &O::Variables,
    ) -> Result<O::Response, GraphqlError> {
        let variables = variables::flatten(variables)?;
        tracing::debug!("Executing GraphQL operation {}", O::NAME);
        self.run(ctx, O::DOCUMENT, variables).await
    }
}
