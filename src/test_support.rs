//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{ApiError, Project, ProjectService};
use crate::core::state::App;

/// A canned `ProjectService` for tests that don't need a real server.
pub enum StubProjectService {
    Projects(Vec<Project>),
    Error(String),
    /// Never resolves; for exercising cancellation.
    Pending,
}

impl StubProjectService {
    pub fn with_projects(projects: Vec<Project>) -> Self {
        StubProjectService::Projects(projects)
    }

    pub fn with_error(reason: &str) -> Self {
        StubProjectService::Error(reason.to_string())
    }

    pub fn pending() -> Self {
        StubProjectService::Pending
    }
}

#[async_trait]
impl ProjectService for StubProjectService {
    async fn fetch_projects(&self) -> Result<Vec<Project>, ApiError> {
        match self {
            StubProjectService::Projects(projects) => Ok(projects.clone()),
            StubProjectService::Error(reason) => Err(ApiError::Network(reason.clone())),
            StubProjectService::Pending => std::future::pending().await,
        }
    }
}

pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            name: "Alpha".to_string(),
            key: Some("ALP".to_string()),
            access: Some("admin".to_string()),
        },
        Project {
            id: 2,
            name: "Beta".to_string(),
            key: Some("BET".to_string()),
            access: None,
        },
    ]
}

/// Creates a test App with a stub service and the default route.
pub fn test_app() -> App {
    App::new(
        Arc::new(StubProjectService::with_projects(sample_projects())),
        "/projects".to_string(),
    )
}
