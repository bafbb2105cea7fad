pub mod auth;
pub mod client;
pub mod error;
pub mod projects;
pub mod types;

pub use auth::{CredentialProvider, StaticCredential, StoredTokenProvider};
pub use client::ApiClient;
pub use error::ApiError;
pub use projects::{HttpProjectService, PROJECTS_PATH, ProjectService};
pub use types::Project;
