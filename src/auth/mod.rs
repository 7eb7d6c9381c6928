//! Authentication for the Wiz API.
//!
//! Wiz service accounts authenticate with the OAuth 2.0 client credentials
//! grant. [`oauth::exchange_client_credentials`] performs the one-shot login
//! and returns an [`AccessToken`] that is held for the lifetime of the
//! [`WizClient`](crate::WizClient). There is no refresh: one token per client.

pub mod oauth;
mod token;

pub use token::{AccessToken, TokenResponse};
