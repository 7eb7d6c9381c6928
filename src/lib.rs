//! # Wiz Provider
//!
//! API client and resource layer for managing Wiz projects from a
//! Terraform-style provider host.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`WizConfig`] and [`WizConfigBuilder`]
//! - Validated newtypes for service account credentials and endpoints
//! - OAuth 2.0 client credentials login via [`auth::oauth`]
//! - An authenticated GraphQL transport via [`clients::graphql`]
//! - Typed project requests and responses via [`projects`], including the
//!   stringified `subscriptions` property
//! - Not-found classification scoped to create, read and update
//! - The host-facing `wiz_project` resource via [`resource`]
//!
//! ## Quick Start
//!
//! ```rust
//! use wiz_provider::{ClientId, ClientSecret, EndpointUrl, WizConfig};
//!
//! let config = WizConfig::builder()
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .client_secret(ClientSecret::new("your-client-secret").unwrap())
//!     .endpoint(EndpointUrl::new("https://api.us17.app.wiz.io/graphql").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.audience(), "beyond-api");
//! ```
//!
//! ## Managing Projects
//!
//! ```rust,ignore
//! use wiz_provider::resource::{configure, CloudAccountLinkState, ProjectResource, ProjectState};
//! use wiz_provider::{Context, ProviderConfig};
//!
//! let ctx = Context::with_timeout(std::time::Duration::from_secs(30));
//! let client = configure(&ctx, ProviderConfig {
//!     endpoint: Some("https://api.us17.app.wiz.io/graphql".into()),
//!     client_id: Some(client_id),
//!     client_secret: Some(client_secret),
//!     auth_url: None,
//! })
//! .await?;
//!
//! let state = ProjectResource::create(&client, &ctx, ProjectState {
//!     id: None,
//!     name: "proj-a".into(),
//!     cloud_account_links: vec![CloudAccountLinkState {
//!         cloud_account_guid: "acct-1".into(),
//!         environment: "PROD".into(),
//!         shared: true,
//!     }],
//! })
//! .await?;
//!
//! match ProjectResource::read(&client, &ctx, &state).await {
//!     Ok(current) => println!("{current:?}"),
//!     Err(err) if err.is_not_found() => println!("project is gone"),
//!     Err(err) => return Err(err),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the logged-in [`WizClient`] is passed explicitly
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Cancellable**: every HTTP call honors the caller's [`Context`]
//! - **No retries**: every failure is returned to the caller as a value

pub mod auth;
mod client;
pub mod clients;
pub mod config;
mod context;
pub mod error;
pub mod projects;
pub mod resource;
pub mod variables;

// Re-export public types at crate root for convenience
pub use client::WizClient;
pub use config::{
    ClientId, ClientSecret, EndpointUrl, ProviderConfig, WizConfig, WizConfigBuilder,
};
pub use context::{Context, DeadlineExceeded};
pub use error::{ConfigError, WizError};

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

// Re-export OAuth types for convenience
pub use auth::oauth::{exchange_client_credentials, OAuthError};
pub use auth::{AccessToken, TokenResponse};
