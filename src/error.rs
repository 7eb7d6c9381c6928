//! Error types for the Wiz provider client.
//!
//! [`ConfigError`] covers validation of configuration values and is returned
//! before any network traffic happens. [`WizError`] is the crate-level error
//! returned from client construction and from every project operation; it
//! wraps the layer-specific errors so callers can match on the failure class.
//!
//! # Example
//!
//! ```rust
//! use wiz_provider::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

use crate::auth::oauth::OAuthError;
use crate::clients::HttpError;
use crate::projects::{ResourceError, SubscriptionDecodeError};

/// Errors that can occur while validating configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client id cannot be empty.
    #[error("Client ID cannot be empty. Please provide a valid Wiz service account client_id.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide a valid Wiz service account client_secret.")]
    EmptyClientSecret,

    /// A URL is missing its scheme or host.
    #[error("Invalid URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.us1.app.wiz.io/graphql').")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required builder field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The host did not supply both halves of the service account credentials.
    #[error("No valid credentials provided. Both client_id and client_secret are needed.")]
    MissingCredentials,
}

/// Crate-level error for client construction and project operations.
#[derive(Debug, Error)]
pub enum WizError {
    /// Configuration was rejected before any request was made.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The client credentials exchange failed; the client cannot be built.
    #[error("failed to authenticate with Wiz: {0}")]
    Authentication(#[from] OAuthError),

    /// The HTTP transport could not be set up.
    #[error("failed to set up the Wiz API client: {0}")]
    Transport(#[from] HttpError),

    /// A project operation failed and was classified.
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// The stringified subscriptions property could not be decoded.
    #[error(transparent)]
    Decode(#[from] SubscriptionDecodeError),
}

impl WizError {
    /// Returns `true` when the error is a classified "not found".
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Resource(err) if err.is_not_found())
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConfigError>();
    assert_send_sync::<WizError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_client_id_error_message() {
        let message = ConfigError::EmptyClientId.to_string();
        assert!(message.contains("Client ID cannot be empty"));
        assert!(message.contains("client_id"));
    }

    #[test]
    fn test_missing_credentials_matches_provider_diagnostic() {
        assert_eq!(
            ConfigError::MissingCredentials.to_string(),
            "No valid credentials provided. Both client_id and client_secret are needed."
        );
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "endpoint" };
        let message = error.to_string();
        assert!(message.contains("endpoint"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_config_error_converts_into_wiz_error() {
        let error: WizError = ConfigError::EmptyClientSecret.into();
        assert!(matches!(error, WizError::Config(ConfigError::EmptyClientSecret)));
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_authentication_error_is_prefixed() {
        let error: WizError = OAuthError::ClientCredentialsFailed {
            status: 401,
            message: "access_denied".to_string(),
        }
        .into();
        let message = error.to_string();
        assert!(message.starts_with("failed to authenticate with Wiz"));
        assert!(message.contains("access_denied"));
    }
}
