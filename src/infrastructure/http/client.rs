//! Marketplace API client.
//!
//! One `reqwest::Client`, one base URL and one place where the bearer token
//! is attached. Every port trait is implemented on top of the helpers here.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::ApiSettings;
use crate::infrastructure::storage::{keys, KeyValueStore};
use crate::shared::error::AppError;
use crate::shared::validation::server_message;

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Whether a request carries the stored access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Attach `Authorization: Bearer <access>` when a token is stored.
    Bearer,
    /// Never attach a token. Public endpoints reject stale tokens with 401,
    /// so they are always called anonymously.
    Anonymous,
}

/// HTTP client for the marketplace REST API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    store: Arc<dyn KeyValueStore>,
}

impl ApiClient {
    /// Build a client from settings; tokens are read from `store` per request.
    pub fn new(settings: &ApiSettings, store: Arc<dyn KeyValueStore>) -> Result<Self, AppError> {
        let base_url = settings.url()?;
        let http = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| AppError::Config(format!("HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            store,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path such as `items/42/` against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| AppError::Config(format!("invalid endpoint {:?}: {}", path, e)))
    }

    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        auth: AuthMode,
    ) -> Result<R, AppError> {
        let builder = self.request(Method::GET, path)?.query(query);
        self.execute(builder, auth).await
    }

    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        auth: AuthMode,
    ) -> Result<R, AppError> {
        let builder = self.request(Method::POST, path)?.json(body);
        self.execute(builder, auth).await
    }

    pub async fn put<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, AppError> {
        let builder = self.request(Method::PUT, path)?.json(body);
        self.execute(builder, AuthMode::Bearer).await
    }

    pub async fn patch<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, AppError> {
        let builder = self.request(Method::PATCH, path)?.json(body);
        self.execute(builder, AuthMode::Bearer).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, AppError> {
        let builder = self.request(Method::DELETE, path)?;
        self.execute(builder, AuthMode::Bearer).await
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, AppError> {
        Ok(self.http.request(method, self.endpoint(path)?))
    }

    /// The only place a token is attached.
    fn authorize(&self, builder: RequestBuilder, auth: AuthMode) -> Result<RequestBuilder, AppError> {
        match auth {
            AuthMode::Anonymous => Ok(builder),
            AuthMode::Bearer => match self.store.get(keys::ACCESS_TOKEN)? {
                Some(token) if !token.is_empty() => Ok(builder.bearer_auth(token)),
                _ => Ok(builder),
            },
        }
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        auth: AuthMode,
    ) -> Result<R, AppError> {
        let request_id = Uuid::new_v4();
        let request = self
            .authorize(builder, auth)?
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .build()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%request_id, %method, url = %url, "Sending request");

        let response = self.http.execute(request).await.map_err(|e| {
            warn!(%request_id, %method, url = %url, error = %e, "Request failed");
            AppError::Network(e.to_string())
        })?;

        let status = response.status();
        debug!(%request_id, status = status.as_u16(), "Received response");

        parse(response, status).await
    }
}

/// Map a response to the typed body or an `AppError`.
async fn parse<R: DeserializeOwned>(response: Response, status: StatusCode) -> Result<R, AppError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    // Empty bodies (204, bare DELETE) decode as JSON null.
    let body: Value = if bytes.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(_) if !status.is_success() => Value::String(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) => return Err(AppError::Decode(format!("response body: {}", e))),
        }
    };

    if !status.is_success() {
        return Err(map_status(status, body));
    }

    serde_json::from_value(body).map_err(|e| AppError::Decode(format!("response body: {}", e)))
}

fn map_status(status: StatusCode, body: Value) -> AppError {
    match status {
        StatusCode::UNAUTHORIZED => AppError::Unauthorized(server_message(&body).unwrap_or_default()),
        StatusCode::NOT_FOUND => AppError::NotFound(server_message(&body).unwrap_or_default()),
        _ => AppError::Api {
            status: status.as_u16(),
            body,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryStore;
    use serde_json::json;

    fn create_test_client(base_url: &str) -> ApiClient {
        let settings = ApiSettings {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        };
        ApiClient::new(&settings, Arc::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn test_endpoint_keeps_api_prefix() {
        let client = create_test_client("http://localhost:8000/api");

        assert_eq!(
            client.endpoint("items/7/").unwrap().as_str(),
            "http://localhost:8000/api/items/7/"
        );
        assert_eq!(
            client.endpoint("/cart/").unwrap().as_str(),
            "http://localhost:8000/api/cart/"
        );
    }

    #[test]
    fn test_map_status() {
        let err = map_status(StatusCode::UNAUTHORIZED, json!({"detail": "Token expired"}));
        assert!(matches!(err, AppError::Unauthorized(ref m) if m == "Token expired"));

        let err = map_status(StatusCode::NOT_FOUND, json!({"detail": "Not found."}));
        assert!(matches!(err, AppError::NotFound(_)));

        let err = map_status(StatusCode::BAD_REQUEST, json!({"error": "Cannot add your own item to cart"}));
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.server_message().as_deref(), Some("Cannot add your own item to cart"));
    }

    #[test]
    fn test_anonymous_mode_never_attaches_token() {
        let store = Arc::new(MemoryStore::with_entries([(keys::ACCESS_TOKEN, "abc")]));
        let settings = ApiSettings {
            base_url: "http://localhost:8000/api".into(),
            timeout_secs: 5,
        };
        let client = ApiClient::new(&settings, store).unwrap();

        let anon = client
            .authorize(client.request(Method::GET, "items/").unwrap(), AuthMode::Anonymous)
            .unwrap()
            .build()
            .unwrap();
        assert!(anon.headers().get(reqwest::header::AUTHORIZATION).is_none());

        let bearer = client
            .authorize(client.request(Method::GET, "cart/").unwrap(), AuthMode::Bearer)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            bearer.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer abc"
        );
    }
}
