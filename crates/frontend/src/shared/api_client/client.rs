use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::extract_message;
use super::{ApiError, ApiRequest, HttpMethod, HttpTransport, Navigator, RawResponse};
use crate::system::auth::storage::TokenStore;

pub type SharedTransport = Arc<dyn HttpTransport + Send + Sync>;
pub type SharedTokenStore = Arc<dyn TokenStore + Send + Sync>;
pub type SharedNavigator = Arc<dyn Navigator + Send + Sync>;

/// JSON client bound to one API base URL.
///
/// Cloning is cheap; all clones share the same transport, token store and
/// navigator.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: SharedTransport,
    tokens: SharedTokenStore,
    navigator: SharedNavigator,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: SharedTransport,
        tokens: SharedTokenStore,
        navigator: SharedNavigator,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            tokens,
            navigator,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &SharedTokenStore {
        &self.tokens
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(HttpMethod::Get, path, None).await?;
        decode(&response)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .execute(HttpMethod::Post, path, Some(encode(body)?))
            .await?;
        decode(&response)
    }

    /// POST without a request body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(HttpMethod::Post, path, None).await?;
        decode(&response)
    }

    /// Sends a mutation and discards whatever the server returns on success.
    pub async fn send<B>(&self, method: HttpMethod, path: &str, body: Option<&B>) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let body = body.map(encode).transpose()?;
        self.execute(method, path, body).await.map(|_| ())
    }

    async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<RawResponse, ApiError> {
        let url = self.url(path);
        let mut headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        // Read per request: login and logout change the token between calls.
        if let Some(token) = self.tokens.get() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let request = ApiRequest {
            method,
            url: url.clone(),
            headers,
            body,
        };

        log::debug!("{} {}", method.as_str(), url);
        let response = self
            .transport
            .send(request)
            .await
            .map_err(ApiError::Network)?;

        if response.is_success() {
            return Ok(response);
        }

        let message = extract_message(&response.body);
        match response.status {
            401 => {
                log::warn!("401 from {}, clearing session", url);
                self.tokens.clear();
                self.navigator.redirect_to_login();
                Err(ApiError::Unauthorized { message })
            }
            404 => {
                log::error!("API endpoint not found: {}", url);
                Err(ApiError::NotFound { url, message })
            }
            status => Err(ApiError::Http { status, message }),
        }
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Serialize(e.to_string()))
}

fn decode<T: DeserializeOwned>(response: &RawResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{test_client, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_attaches_json_headers_and_bearer_token() {
        let (client, transport, tokens, _) = test_client();
        tokens.set("tok-1");
        transport.push_json(200, json!([]));

        let _: Vec<serde_json::Value> = client.get("/api/neighborhoods").await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "https://api.test/api/neighborhoods");
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("accept"), Some("application/json"));
        assert_eq!(request.header("authorization"), Some("Bearer tok-1"));
    }

    #[tokio::test]
    async fn test_no_authorization_header_without_token() {
        let (client, transport, _, _) = test_client();
        transport.push_json(200, json!([]));

        let _: Vec<serde_json::Value> = client.get("/api/users").await.unwrap();

        assert_eq!(transport.last_request().unwrap().header("authorization"), None);
    }

    #[tokio::test]
    async fn test_token_is_read_per_request() {
        let (client, transport, tokens, _) = test_client();
        transport.push_json(200, json!([]));
        transport.push_json(200, json!([]));

        let _: Vec<serde_json::Value> = client.get("/api/users").await.unwrap();
        tokens.set("fresh");
        let _: Vec<serde_json::Value> = client.get("/api/users").await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].header("authorization"), None);
        assert_eq!(requests[1].header("authorization"), Some("Bearer fresh"));
    }

    #[tokio::test]
    async fn test_401_clears_token_and_redirects() {
        let (client, transport, tokens, navigator) = test_client();
        tokens.set("stale");
        transport.push_json(401, json!({"message": "Token expired"}));

        let err = client
            .get::<Vec<serde_json::Value>>("/api/houses")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ApiError::Unauthorized {
                message: Some("Token expired".into())
            }
        );
        assert_eq!(tokens.get(), None);
        assert_eq!(navigator.redirects(), 1);
    }

    #[tokio::test]
    async fn test_404_is_reported_with_url() {
        let (client, transport, tokens, navigator) = test_client();
        tokens.set("keep");
        transport.push(404, "");

        let err = client
            .get::<Vec<serde_json::Value>>("/api/missing")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ApiError::NotFound {
                url: "https://api.test/api/missing".into(),
                message: None
            }
        );
        assert_eq!(tokens.get(), Some("keep".into()));
        assert_eq!(navigator.redirects(), 0);
    }

    #[tokio::test]
    async fn test_other_status_carries_server_message() {
        let (client, transport, _, _) = test_client();
        transport.push_json(400, json!({"error": "name taken"}));

        let err = client
            .send(HttpMethod::Post, "/api/neighborhoods", Some(&json!({"name": "x"})))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ApiError::Http {
                status: 400,
                message: Some("name taken".into())
            }
        );
    }

    #[tokio::test]
    async fn test_network_failure() {
        let (client, transport, _, _) = test_client();
        transport.push_failure("connection refused");

        let err = client.get::<serde_json::Value>("/api/users").await.unwrap_err();
        assert_eq!(err, ApiError::Network("connection refused".into()));
    }

    #[tokio::test]
    async fn test_undecodable_body() {
        let (client, transport, _, _) = test_client();
        transport.push(200, "<html></html>");

        let err = client.get::<Vec<String>>("/api/users").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_send_serializes_body_and_ignores_response() {
        let (client, transport, _, _) = test_client();
        transport.push(201, "not json at all");

        client
            .send(HttpMethod::Put, "/api/squares/s1", Some(&json!({"name": "A"})))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.body.as_deref(), Some(r#"{"name":"A"}"#));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new(
            "https://api.test/",
            Arc::new(MockTransport::default()),
            Arc::new(crate::system::auth::storage::MemoryTokenStore::default()),
            Arc::new(crate::shared::api_client::testing::RecordingNavigator::default()),
        );
        assert_eq!(client.url("/api/users"), "https://api.test/api/users");
    }
}
