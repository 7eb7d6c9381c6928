//! The authenticated Wiz API client.

use crate::auth::oauth::exchange_client_credentials;
use crate::auth::AccessToken;
use crate::clients::graphql::GraphqlClient;
use crate::config::{EndpointUrl, WizConfig};
use crate::context::Context;
use crate::error::WizError;

/// A logged-in client for one Wiz tenant.
///
/// Holds one access token, obtained once by [`connect`](Self::connect) and
/// never refreshed, and a GraphQL transport bound to the configured
/// endpoint. Nothing is mutated after construction, so a single instance can
/// serve concurrent operations by shared reference.
///
/// # Example
///
/// ```rust,ignore
/// use wiz_provider::{Context, WizClient, WizConfig};
///
/// let config = WizConfig::builder()
///     .client_id(client_id)
///     .client_secret(client_secret)
///     .endpoint(endpoint)
///     .build()?;
///
/// let client = WizClient::connect(&Context::background(), &config).await?;
/// let project = client.read_project(&Context::background(), "proj-id").await?;
/// ```
#[derive(Debug)]
pub struct WizClient {
    token: AccessToken,
    graphql: GraphqlClient,
}

// Verify WizClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WizClient>();
};

impl WizClient {
    /// Exchanges the configured credentials for a token and builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`WizError::Authentication`] if the token exchange fails for
    /// any reason, including an expired `ctx`, and [`WizError::Transport`]
    /// if the GraphQL transport cannot be built.
    pub async fn connect(ctx: &Context, config: &WizConfig) -> Result<Self, WizError> {
        let token = exchange_client_credentials(ctx, config).await?;
        let graphql = GraphqlClient::new(config.endpoint(), &token, Some(config))?;
        tracing::info!(endpoint = %config.endpoint(), "Connected to Wiz");
        Ok(Self { token, graphql })
    }

    /// Builds a client from an already obtained token.
    ///
    /// # Errors
    ///
    /// Returns [`WizError::Transport`] if the HTTP client cannot be built.
    pub fn from_token(
        endpoint: &EndpointUrl,
        token: AccessToken,
        config: Option<&WizConfig>,
    ) -> Result<Self, WizError> {
        let graphql = GraphqlClient::new(endpoint, &token, config)?;
        Ok(Self { token, graphql })
    }

    /// The access token this client authenticates with.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.token
    }

    /// The underlying GraphQL transport.
    #[must_use]
    pub const fn graphql(&self) -> &GraphqlClient {
        &self.graphql
    }
}
