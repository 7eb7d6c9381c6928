//! Access token types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Token payload returned by the identity endpoint.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct TokenResponse {
    /// The bearer token.
    pub access_token: String,
    /// Scopes granted to the token.
    #[serde(default)]
    pub scope: String,
}

/// An access token held by the client.
///
/// The `Debug` implementation masks the token value so it never ends up in
/// logs.
///
/// # Example
///
/// ```rust
/// use wiz_provider::AccessToken;
///
/// let token = AccessToken::new("eyJhbGciOi", "read:projects");
/// assert_eq!(token.bearer_header(), "Bearer eyJhbGciOi");
/// assert!(!format!("{token:?}").contains("eyJhbGciOi"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    token: String,
    scope: String,
}

impl AccessToken {
    /// Creates a token from its raw parts.
    #[must_use]
    pub fn new(token: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            scope: scope.into(),
        }
    }

    /// Returns the raw token string.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.token
    }

    /// Returns the scopes granted to the token.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Returns the value for the `Authorization` header.
    #[must_use]
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl From<TokenResponse> for AccessToken {
    fn from(response: TokenResponse) -> Self {
        Self::new(response.access_token, response.scope)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"*****")
            .field("scope", &self.scope)
            .finish()
    }
}
