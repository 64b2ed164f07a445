use dioxus::prelude::*;
use pkg_types::{NewSecretRequest, SecretRequest};

/// Backend client built from the UI server's config file.
/// Merge: config file > defaults.
#[cfg(feature = "server")]
fn backend() -> Result<pkg_client::HttpClient, ServerFnError> {
    use pkg_constants::api::DEFAULT_API_URL;
    use pkg_constants::paths::{DEFAULT_UI_CONFIG, UI_CONFIG_ENV};
    use pkg_types::config::{ClientConfigFile, load_config_file};

    let path = std::env::var(UI_CONFIG_ENV).unwrap_or_else(|_| DEFAULT_UI_CONFIG.to_string());
    let cfg: ClientConfigFile =
        load_config_file(&path).map_err(|e| ServerFnError::new(e.to_string()))?;
    let api_url = cfg.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let client = pkg_client::HttpClient::new(api_url)
        .map_err(|e| ServerFnError::new(e.to_string()))?
        .with_token(cfg.token);
    Ok(client)
}

// ============================================================
// Server functions: run on the server, called from the WASM client
// ============================================================

#[get("/api/ui/secret-requests")]
pub async fn list_secret_requests() -> Result<Vec<SecretRequest>> {
    let requests = backend()?
        .list_requests()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(requests)
}

#[post("/api/ui/secret-requests/create")]
pub async fn create_secret_request(body: NewSecretRequest) -> Result<()> {
    backend()?
        .create_request(&body)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(())
}
