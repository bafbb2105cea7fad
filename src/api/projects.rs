//! Project listing service.
//!
//! `ProjectService` is the seam between the TUI and the network: the event
//! loop only ever sees the trait object, so tests swap in a stub without a
//! server. The canonical collection path is `/project/` with the trailing
//! slash — the backend redirects the slashless form and a redirect would
//! drop the `Authorization` header.

use async_trait::async_trait;
use log::{info, warn};

use super::client::ApiClient;
use super::error::ApiError;
use super::types::Project;

pub const PROJECTS_PATH: &str = "/project/";

#[async_trait]
pub trait ProjectService: Send + Sync {
    /// Fetches the full project collection. Exactly one network call per
    /// invocation, no caching, no retry.
    async fn fetch_projects(&self) -> Result<Vec<Project>, ApiError>;
}

/// The real implementation, backed by the authenticated `ApiClient`.
pub struct HttpProjectService {
    client: ApiClient,
}

impl HttpProjectService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProjectService for HttpProjectService {
    async fn fetch_projects(&self) -> Result<Vec<Project>, ApiError> {
        let response = self.client.get(PROJECTS_PATH).await?;
        let status = response.status();

        if !status.is_success() {
            warn!("Project listing failed with HTTP {}", status.as_u16());
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            });
        }

        // Read the body first so a transfer failure stays a Network error
        // and only a shape mismatch becomes a Decode error.
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let projects: Vec<Project> =
            serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))?;

        info!("Fetched {} projects", projects.len());
        Ok(projects)
    }
}
