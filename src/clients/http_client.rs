//! HTTP client for Wiz endpoint communication.
//!
//! This module provides the [`HttpClient`] type shared by the token exchange
//! and the GraphQL transport.

use std::collections::HashMap;

use crate::auth::AccessToken;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{EndpointUrl, WizConfig};
use crate::context::Context;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client bound to a single endpoint URL.
///
/// The client handles:
/// - Default headers including User-Agent and, when given a token, the
///   `Authorization: Bearer` header
/// - The optional per-request timeout from [`WizConfig`]
/// - Racing every round trip against the caller's [`Context`] deadline
///
/// No retries are performed.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Full URL every request is sent to.
    url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for `endpoint`.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The URL every request is sent to
    /// * `access_token` - Bearer token attached to every request, if any
    /// * `config` - Optional configuration for `user_agent_prefix` and `request_timeout`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(
        endpoint: &EndpointUrl,
        access_token: Option<&AccessToken>,
        config: Option<&WizConfig>,
    ) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .and_then(WizConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Wiz Terraform Provider v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if let Some(token) = access_token {
            default_headers.insert("Authorization".to_string(), token.bearer_header());
        }

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.and_then(WizConfig::request_timeout) {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            url: endpoint.as_ref().to_string(),
            default_headers,
        })
    }

    /// Returns the URL requests are sent to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - The context deadline passes (`DeadlineExceeded`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(
        &self,
        ctx: &Context,
        request: HttpRequest,
    ) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let mut headers = self.default_headers.clone();
        if request.body_type == Some(DataType::Json) {
            headers.insert(
                "Content-Type".to_string(),
                DataType::Json.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Post => self.client.post(&self.url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = &request.body {
            req_builder = match request.body_type {
                // reqwest sets the form Content-Type itself
                Some(DataType::Form) => req_builder.form(body),
                _ => req_builder.body(body.to_string()),
            };
        }

        let (code, res_headers, body_text) = ctx
            .run(async move {
                let res = req_builder.send().await?;
                let code = res.status().as_u16();
                let res_headers = Self::parse_response_headers(res.headers());
                let body_text = res.text().await?;
                Ok::<_, reqwest::Error>((code, res_headers, body_text))
            })
            .await??;

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        tracing::debug!("Request to {} failed with status {}", self.url, code);

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes the error-bearing fields of a response body to JSON.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for key in ["errors", "error", "error_description", "raw_body"] {
            if let Some(value) = response.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }

        if error_body.is_empty() {
            error_body.insert(
                "error".to_string(),
                serde_json::json!(format!("HTTP status {}", response.code)),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
