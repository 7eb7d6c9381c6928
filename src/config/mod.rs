//! Configuration types for the Wiz provider client.
//!
//! # Overview
//!
//! - [`WizConfig`]: validated settings for the identity and GraphQL endpoints
//! - [`WizConfigBuilder`]: builder for [`WizConfig`]
//! - [`ProviderConfig`]: the raw, optional values a provider host supplies
//! - [`ClientId`], [`ClientSecret`], [`EndpointUrl`]: validated newtypes
//!
//! # Example
//!
//! ```rust
//! use wiz_provider::{ClientId, ClientSecret, EndpointUrl, WizConfig};
//!
//! let config = WizConfig::builder()
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .endpoint(EndpointUrl::new("https://api.us17.app.wiz.io/graphql").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.audience(), "beyond-api");
//! ```

mod newtypes;

pub use newtypes::{ClientId, ClientSecret, EndpointUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Identity endpoint used for the client credentials exchange.
pub const DEFAULT_AUTH_URL: &str = "https://auth.wiz.io/oauth/token";

/// Audience requested for the access token.
pub const DEFAULT_AUDIENCE: &str = "beyond-api";

/// Settings for talking to the Wiz identity and GraphQL endpoints.
///
/// Built once per provider configuration and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct WizConfig {
    client_id: ClientId,
    client_secret: ClientSecret,
    endpoint: EndpointUrl,
    auth_url: EndpointUrl,
    audience: String,
    user_agent_prefix: Option<String>,
    request_timeout: Option<Duration>,
}

impl WizConfig {
    /// Creates a new builder for constructing a `WizConfig`.
    #[must_use]
    pub fn builder() -> WizConfigBuilder {
        WizConfigBuilder::new()
    }

    /// Returns the service account client id.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the service account client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Returns the identity endpoint used to obtain the access token.
    #[must_use]
    pub const fn auth_url(&self) -> &EndpointUrl {
        &self.auth_url
    }

    /// Returns the token audience.
    #[must_use]
    pub fn audience(&self) -> &str {
        &self.audience
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout applied by the HTTP layer, if any.
    #[must_use]
    pub const fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }
}

// Verify WizConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WizConfig>();
};

/// Builder for constructing [`WizConfig`] instances.
///
/// `client_id`, `client_secret` and `endpoint` are required. The identity
/// URL defaults to [`DEFAULT_AUTH_URL`] and the audience to
/// [`DEFAULT_AUDIENCE`].
#[derive(Debug, Default)]
pub struct WizConfigBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    endpoint: Option<EndpointUrl>,
    auth_url: Option<EndpointUrl>,
    audience: Option<String>,
    user_agent_prefix: Option<String>,
    request_timeout: Option<Duration>,
}

impl WizConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the client id (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Sets the GraphQL endpoint (required).
    #[must_use]
    pub fn endpoint(mut self, endpoint: EndpointUrl) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Overrides the identity endpoint.
    #[must_use]
    pub fn auth_url(mut self, url: EndpointUrl) -> Self {
        self.auth_url = Some(url);
        self
    }

    /// Overrides the token audience.
    #[must_use]
    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a timeout applied to every HTTP request.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Builds the [`WizConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id`,
    /// `client_secret` or `endpoint` are not set.
    pub fn build(self) -> Result<WizConfig, ConfigError> {
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;
        let endpoint = self
            .endpoint
            .ok_or(ConfigError::MissingRequiredField { field: "endpoint" })?;
        let auth_url = match self.auth_url {
            Some(url) => url,
            None => EndpointUrl::new(DEFAULT_AUTH_URL)?,
        };

        Ok(WizConfig {
            client_id,
            client_secret,
            endpoint,
            auth_url,
            audience: self
                .audience
                .unwrap_or_else(|| DEFAULT_AUDIENCE.to_string()),
            user_agent_prefix: self.user_agent_prefix,
            request_timeout: self.request_timeout,
        })
    }
}

/// Raw provider configuration as supplied by the host.
///
/// Every value is optional because the host schema marks them optional;
/// [`ProviderConfig::into_config`] turns this into a validated [`WizConfig`].
#[derive(Clone, Debug, Default)]
pub struct ProviderConfig {
    /// The base URL of the Wiz GraphQL API.
    pub endpoint: Option<String>,
    /// Service account client id.
    pub client_id: Option<String>,
    /// Service account client secret.
    pub client_secret: Option<String>,
    /// Identity endpoint override; [`DEFAULT_AUTH_URL`] when unset.
    pub auth_url: Option<String>,
}

impl ProviderConfig {
    /// Validates the host values and builds a [`WizConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] when either credential is
    /// absent, and the newtype validation errors for empty or malformed values.
    pub fn into_config(self) -> Result<WizConfig, ConfigError> {
        let (Some(client_id), Some(client_secret)) = (self.client_id, self.client_secret) else {
            return Err(ConfigError::MissingCredentials);
        };
        let endpoint = self
            .endpoint
            .ok_or(ConfigError::MissingRequiredField { field: "endpoint" })?;

        let mut builder = WizConfig::builder()
            .client_id(ClientId::new(client_id)?)
            .client_secret(ClientSecret::new(client_secret)?)
            .endpoint(EndpointUrl::new(endpoint)?);
        if let Some(auth_url) = self.auth_url {
            builder = builder.auth_url(EndpointUrl::new(auth_url)?);
        }
        builder.build()
    }
}
