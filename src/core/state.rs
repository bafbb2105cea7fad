//! # Application State
//!
//! Core business state for Taskdeck. This module contains domain logic
//! only - no TUI-specific types. Presentation state lives in the `tui`
//! module.
//!
//! ```text
//! App
//! ├── service: Arc<dyn ProjectService>  // listing backend
//! ├── route: String                     // current route path
//! ├── phase: FetchPhase                 // Loading | Ready | Failed
//! └── status_message: String            // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::api::{Project, ProjectService};
use crate::core::config::ResolvedConfig;

/// Progress of the one fetch a mounted listing screen performs.
///
/// `Ready` and `Failed` are terminal for the lifetime of a mount; only a
/// re-mount (refresh) goes back to `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchPhase {
    Loading,
    Ready(Vec<Project>),
    Failed(String),
}

pub struct App {
    pub service: Arc<dyn ProjectService>,
    pub route: String,
    pub phase: FetchPhase,
    pub status_message: String,
}

impl App {
    pub fn new(service: Arc<dyn ProjectService>, route: String) -> Self {
        Self {
            service,
            route,
            phase: FetchPhase::Loading,
            status_message: String::from("Welcome to Taskdeck!"),
        }
    }

    pub fn from_config(service: Arc<dyn ProjectService>, config: &ResolvedConfig) -> Self {
        Self::new(service, config.start_route.clone())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FetchPhase::Loading)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Taskdeck!");
        assert!(app.is_loading());
        assert_eq!(app.route, "/projects");
    }
}
