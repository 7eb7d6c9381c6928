//! OAuth 2.0 Client Credentials Grant for Wiz service accounts.
//!
//! The exchange is a single form-encoded POST to the identity endpoint:
//!
//! ```text
//! POST https://auth.wiz.io/oauth/token
//! Content-Type: application/x-www-form-urlencoded
//!
//! grant_type=client_credentials&client_id=...&client_secret=...&audience=beyond-api
//! ```
//!
//! The response carries `access_token` and `scope`. No retry is attempted;
//! every failure is returned as an [`OAuthError`] so the host can report it
//! as a configuration diagnostic.

use serde::Serialize;

use crate::auth::oauth::OAuthError;
use crate::auth::{AccessToken, TokenResponse};
use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::config::WizConfig;
use crate::context::Context;

/// Grant type for client credentials.
const CLIENT_CREDENTIALS_GRANT_TYPE: &str = "client_credentials";

/// Form body for the client credentials exchange.
#[derive(Debug, Serialize)]
struct ClientCredentialsRequest<'a> {
    grant_type: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
    audience: &'a str,
}

/// Exchanges the configured client credentials for an access token.
///
/// # Errors
///
/// - [`OAuthError::ClientCredentialsFailed`] if the identity endpoint returns a non-2xx status
/// - [`OAuthError::InvalidTokenResponse`] if the payload is not a token response or the token is empty
/// - [`OAuthError::HttpError`] for network failures and an expired `ctx`
pub async fn exchange_client_credentials(
    ctx: &Context,
    config: &WizConfig,
) -> Result<AccessToken, OAuthError> {
    let request_body = ClientCredentialsRequest {
        grant_type: CLIENT_CREDENTIALS_GRANT_TYPE,
        client_id: config.client_id().as_ref(),
        client_secret: config.client_secret().as_ref(),
        audience: config.audience(),
    };
    let body = serde_json::to_value(&request_body).map_err(|e| OAuthError::InvalidTokenResponse {
        reason: format!("failed to encode token request: {e}"),
    })?;

    let client = HttpClient::new(config.auth_url(), None, Some(config))?;
    let request = HttpRequest::builder(HttpMethod::Post)
        .body(body)
        .body_type(DataType::Form)
        .build()
        .map_err(HttpError::from)?;

    tracing::debug!("Requesting Wiz access token from {}", config.auth_url());

    let response = match client.request(ctx, request).await {
        Ok(response) => response,
        Err(HttpError::Response(e)) => {
            tracing::warn!("Wiz authentication rejected with status {}", e.code);
            return Err(OAuthError::ClientCredentialsFailed {
                status: e.code,
                message: e.message,
            });
        }
        Err(e) => return Err(e.into()),
    };

    let token_response: TokenResponse =
        serde_json::from_value(response.body).map_err(|e| OAuthError::InvalidTokenResponse {
            reason: format!("Failed to parse token response: {e}"),
        })?;

    if token_response.access_token.is_empty() {
        return Err(OAuthError::InvalidTokenResponse {
            reason: "access_token is empty".to_string(),
        });
    }

    tracing::info!("Obtained Wiz access token");

    Ok(token_response.into())
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientCredentialsRequest<'_>>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientId, ClientSecret, EndpointUrl};
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_config(auth_uri: &str, secret: &str) -> WizConfig {
        WizConfig::builder()
            .client_id(ClientId::new("test-client-id").unwrap())
            .client_secret(ClientSecret::new(secret).unwrap())
            .endpoint(EndpointUrl::new("https://api.us17.app.wiz.io/graphql").unwrap())
            .auth_url(EndpointUrl::new(format!("{auth_uri}/oauth/token")).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_request_body_contains_correct_fields() {
        let request = ClientCredentialsRequest {
            grant_type: CLIENT_CREDENTIALS_GRANT_TYPE,
            client_id: "test-client-id",
            client_secret: "test-client-secret",
            audience: "beyond-api",
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"grant_type\":\"client_credentials\""));
        assert!(json.contains("\"client_id\":\"test-client-id\""));
        assert!(json.contains("\"client_secret\":\"test-client-secret\""));
        assert!(json.contains("\"audience\":\"beyond-api\""));
    }

    #[tokio::test]
    async fn test_successful_exchange_returns_token() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("grant_type=client_credentials"))
            .and(body_string_contains("client_id=test-client-id"))
            .and(body_string_contains("client_secret=test-secret"))
            .and(body_string_contains("audience=beyond-api"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "test-access-token",
                "scope": "read:projects write:projects"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = create_config(&mock_server.uri(), "test-secret");
        let token = exchange_client_credentials(&Context::background(), &config)
            .await
            .unwrap();

        assert_eq!(token.secret(), "test-access-token");
        assert_eq!(token.scope(), "read:projects write:projects");
    }

    #[tokio::test]
    async fn test_rejected_credentials_map_to_client_credentials_failed() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": "access_denied",
                "error_description": "Unauthorized"
            })))
            .mount(&mock_server)
            .await;

        let config = create_config(&mock_server.uri(), "wrong-secret");
        let result = exchange_client_credentials(&Context::background(), &config).await;

        match result {
            Err(OAuthError::ClientCredentialsFailed { status, message }) => {
                assert_eq!(status, 401);
                assert!(message.contains("access_denied"));
            }
            other => panic!("Expected ClientCredentialsFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_payload_maps_to_invalid_token_response() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let config = create_config(&mock_server.uri(), "test-secret");
        let result = exchange_client_credentials(&Context::background(), &config).await;

        assert!(matches!(
            result,
            Err(OAuthError::InvalidTokenResponse { .. })
        ));
    }

    #[tokio::test]
    async fn test_empty_token_is_rejected() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "",
                "scope": ""
            })))
            .mount(&mock_server)
            .await;

        let config = create_config(&mock_server.uri(), "test-secret");
        let result = exchange_client_credentials(&Context::background(), &config).await;

        match result {
            Err(OAuthError::InvalidTokenResponse { reason }) => {
                assert!(reason.contains("empty"));
            }
            other => panic!("Expected InvalidTokenResponse, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_network_errors_map_to_http_error() {
        // Nothing listens on port 9 locally
        let config = create_config("http://127.0.0.1:9", "test-secret");
        let result = exchange_client_credentials(&Context::background(), &config).await;

        assert!(matches!(
            result,
            Err(OAuthError::HttpError(HttpError::Network(_)))
        ));
    }

    #[test]
    fn test_client_credentials_request_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClientCredentialsRequest<'_>>();
    }
}
