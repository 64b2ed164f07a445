use async_trait::async_trait;
use pkg_types::{NewSecretRequest, SecretRequest};

/// The two backend calls the panel depends on.
#[async_trait]
pub trait SecretRequestApi: Send + Sync {
    type Error: std::fmt::Display + Send + 'static;

    /// Read the full collection (`GET /api/secret-requests`).
    async fn list_requests(&self) -> Result<Vec<SecretRequest>, Self::Error>;

    /// Create a request (`POST /api/secret-requests`). The response body is not consumed.
    async fn create_request(&self, body: &NewSecretRequest) -> Result<(), Self::Error>;
}
