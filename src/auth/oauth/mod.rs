//! OAuth 2.0 client credentials grant against the Wiz identity endpoint.
//!
//! - [`exchange_client_credentials`]: trades the service account id and
//!   secret for an [`AccessToken`](crate::auth::AccessToken)
//! - [`OAuthError`]: why the exchange failed
//!
//! # Example
//!
//! ```rust,ignore
//! use wiz_provider::auth::oauth::exchange_client_credentials;
//! use wiz_provider::Context;
//!
//! let token = exchange_client_credentials(&Context::background(), &config).await?;
//! println!("scope: {}", token.scope());
//! ```

mod client_credentials;
mod error;

pub use client_credentials::exchange_client_credentials;
pub use error::OAuthError;
