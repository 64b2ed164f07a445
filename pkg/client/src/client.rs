//! reqwest client for the secret-requests backend.

use async_trait::async_trait;
use pkg_constants::api::{HEALTH_PATH, SECRET_REQUESTS_PATH};
use pkg_panel::SecretRequestApi;
use pkg_types::{NewSecretRequest, SecretRequest};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
}

/// Backend client. No timeout and no retry: each call is a single
/// request/response pair.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Send `Authorization: Bearer <token>` on every call.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let resp = builder.send().await.map_err(|e| {
            if e.is_connect() {
                ApiError::Connection(format!("Cannot connect to {}", self.base_url))
            } else {
                ApiError::Http(e)
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp)
    }

    /// `GET /api/secret-requests`
    pub async fn list_requests(&self) -> Result<Vec<SecretRequest>, ApiError> {
        debug!("GET {}{}", self.base_url, SECRET_REQUESTS_PATH);
        let resp = self
            .send(self.request(Method::GET, SECRET_REQUESTS_PATH))
            .await?;
        resp.json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// `POST /api/secret-requests`. The response body is discarded.
    pub async fn create_request(&self, body: &NewSecretRequest) -> Result<(), ApiError> {
        debug!(
            secret_name = %body.secret_name,
            secret_type = %body.secret_type,
            "POST {}{}",
            self.base_url,
            SECRET_REQUESTS_PATH
        );
        self.send(self.request(Method::POST, SECRET_REQUESTS_PATH).json(body))
            .await?;
        Ok(())
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<Health, ApiError> {
        let resp = self.send(self.request(Method::GET, HEALTH_PATH)).await?;
        resp.json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl SecretRequestApi for HttpClient {
    type Error = ApiError;

    async fn list_requests(&self) -> Result<Vec<SecretRequest>, Self::Error> {
        HttpClient::list_requests(self).await
    }

    async fn create_request(&self, body: &NewSecretRequest) -> Result<(), Self::Error> {
        HttpClient::create_request(self, body).await
    }
}
