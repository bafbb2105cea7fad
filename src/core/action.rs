//! # Actions
//!
//! Everything that can happen in Taskdeck becomes an `Action`.
//! Fetch task resolves? That's `Action::ProjectsLoaded(items)`.
//! User presses `r`? That's `Action::Refresh`.
//!
//! The `update()` function takes the current state and an action,
//! then returns an `Effect` describing the I/O the caller must perform.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: run an action, assert on the state.

use log::debug;

use crate::api::Project;
use crate::core::state::{App, FetchPhase};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The fetch task resolved with the decoded collection.
    ProjectsLoaded(Vec<Project>),
    /// The fetch task failed; carries a human-readable reason.
    FetchFailed(String),
    /// Re-mount the current screen: fresh state, fresh fetch.
    Refresh,
    Quit,
}

/// I/O the event loop must perform after an `update()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Abort any in-flight fetch and spawn a new one.
    SpawnFetch,
    Quit,
}

/// The reducer: applies `action` to `app`, returns the follow-up effect.
///
/// `ProjectsLoaded`/`FetchFailed` only apply while `Loading` — `Ready` and
/// `Failed` are terminal per mount, so a straggler result from an aborted
/// task can never overwrite settled state.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::ProjectsLoaded(projects) => {
            if app.is_loading() {
                app.status_message = format!("{} projects", projects.len());
                app.phase = FetchPhase::Ready(projects);
            } else {
                debug!("Dropping stale ProjectsLoaded, phase already settled");
            }
            Effect::None
        }
        Action::FetchFailed(reason) => {
            if app.is_loading() {
                app.status_message = String::from("Fetch failed");
                app.phase = FetchPhase::Failed(reason);
            } else {
                debug!("Dropping stale FetchFailed, phase already settled");
            }
            Effect::None
        }
        Action::Refresh => {
            app.phase = FetchPhase::Loading;
            app.status_message = String::from("Refreshing…");
            Effect::SpawnFetch
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Project;
    use crate::test_support::test_app;

    fn sample_project(id: i64, name: &str) -> Project {
        Project {
            id,
            name: name.to_string(),
            key: None,
            access: None,
        }
    }

    #[test]
    fn test_loaded_transitions_to_ready_order_preserved() {
        let mut app = test_app();
        let items = vec![sample_project(2, "Beta"), sample_project(1, "Alpha")];
        let effect = update(&mut app, Action::ProjectsLoaded(items.clone()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.phase, FetchPhase::Ready(items));
    }

    #[test]
    fn test_failed_transitions_to_failed() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::FetchFailed("API error (HTTP 401): Unauthorized".to_string()),
        );
        assert_eq!(effect, Effect::None);
        match &app.phase {
            FetchPhase::Failed(reason) => assert!(!reason.is_empty()),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_ready_is_terminal() {
        let mut app = test_app();
        update(&mut app, Action::ProjectsLoaded(vec![sample_project(1, "Alpha")]));
        update(&mut app, Action::FetchFailed("late error".to_string()));
        assert!(matches!(app.phase, FetchPhase::Ready(_)));
    }

    #[test]
    fn test_failed_is_terminal() {
        let mut app = test_app();
        update(&mut app, Action::FetchFailed("boom".to_string()));
        update(&mut app, Action::ProjectsLoaded(vec![sample_project(1, "Alpha")]));
        assert!(matches!(app.phase, FetchPhase::Failed(_)));
    }

    #[test]
    fn test_refresh_remounts() {
        let mut app = test_app();
        update(&mut app, Action::ProjectsLoaded(vec![sample_project(1, "Alpha")]));
        let effect = update(&mut app, Action::Refresh);
        assert_eq!(effect, Effect::SpawnFetch);
        assert!(app.is_loading());
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
