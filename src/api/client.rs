use log::debug;
use std::sync::Arc;

use super::auth::CredentialProvider;
use super::error::ApiError;

/// HTTP client bound to the configured base address.
///
/// The base address is optional at construction: per the configuration
/// contract we only fail when a call is actually attempted, so the app can
/// start (and render a sensible error) on an unconfigured machine.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Option<String>,
    credentials: Arc<dyn CredentialProvider>,
}

impl ApiClient {
    pub fn new(base_url: Option<String>, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            credentials,
        }
    }

    /// Issues a GET to `path` (relative to the base address).
    ///
    /// Resolves the bearer credential immediately before dispatch; when no
    /// credential is available the request goes out without an
    /// `Authorization` header. Status handling is the caller's job.
    pub async fn get(&self, path: &str) -> Result<reqwest::Response, ApiError> {
        let base = self.base_url.as_deref().ok_or_else(|| {
            ApiError::Config(
                "no API base address configured (set API_BASE_URL or LOCAL_DOMAIN)".to_string(),
            )
        })?;

        let url = format!("{}{}", base.trim_end_matches('/'), path);
        let mut request = self.http.get(&url);

        if let Some(token) = self.credentials.bearer_token() {
            request = request.header("Authorization", format!("Bearer {}", token));
        } else {
            debug!("No credential resolved, dispatching unauthenticated");
        }

        debug!("GET {}", url);
        request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
}
