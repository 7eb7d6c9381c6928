//! OAuth-specific error types.
//!
//! # Error Types
//!
//! - [`OAuthError::ClientCredentialsFailed`]: the identity endpoint rejected the request
//! - [`OAuthError::InvalidTokenResponse`]: the token payload could not be used
//! - [`OAuthError::HttpError`]: wrapped HTTP client error (network, deadline)
//!
//! # Example
//!
//! ```rust
//! use wiz_provider::auth::oauth::OAuthError;
//!
//! let error = OAuthError::ClientCredentialsFailed {
//!     status: 401,
//!     message: "access_denied".to_string(),
//! };
//! assert!(error.to_string().contains("401"));
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Errors that can occur during the client credentials exchange.
///
/// Every variant is fatal to client construction; the provider cannot
/// operate without a token.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// The identity endpoint returned a non-success HTTP status.
    #[error("Client credentials exchange failed with status {status}: {message}")]
    ClientCredentialsFailed {
        /// The HTTP status code returned.
        status: u16,
        /// The error message from the response.
        message: String,
    },

    /// The token payload could not be parsed or carried no token.
    #[error("Invalid token response: {reason}")]
    InvalidTokenResponse {
        /// What was wrong with the payload.
        reason: String,
    },

    /// Wrapped HTTP client error.
    #[error(transparent)]
    HttpError(#[from] HttpError),
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};
