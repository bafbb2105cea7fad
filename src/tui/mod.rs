//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Mount semantics
//!
//! Entering the listing screen "mounts" it: presentation state is reset and
//! exactly one fetch task is spawned. The task's `AbortHandle` is kept for
//! the lifetime of the mount and aborted on unmount (refresh or quit), so a
//! stale result can never land after teardown. The reducer additionally
//! ignores results outside the `Loading` phase.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms for a smooth spinner.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};

use crate::api::ProjectService;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::components::ProjectListState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub project_list: ProjectListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            project_list: ProjectListState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawns the single fetch a mounted listing screen performs and returns
/// the handle that unmount uses to cancel it.
///
/// The task owns its clone of the service and reports back over the action
/// channel; a send failure just means the event loop is gone.
pub fn spawn_fetch(
    service: Arc<dyn ProjectService>,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!("Spawning project fetch");
    let handle = tokio::spawn(async move {
        match service.fetch_projects().await {
            Ok(projects) => {
                if tx.send(Action::ProjectsLoaded(projects)).is_err() {
                    warn!("Failed to deliver fetched projects: receiver dropped");
                }
            }
            Err(e) => {
                info!("Project fetch failed: {}", e);
                if tx.send(Action::FetchFailed(e.to_string())).is_err() {
                    warn!("Failed to deliver fetch error: receiver dropped");
                }
            }
        }
    });
    handle.abort_handle()
}

/// Runs the TUI until the user quits. Must be called from within the tokio
/// runtime (fetch tasks are spawned onto it).
pub fn run(config: ResolvedConfig, service: Arc<dyn ProjectService>) -> std::io::Result<()> {
    let mut app = App::from_config(service, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Channel for actions from background fetch tasks
    let (tx, rx) = mpsc::channel();

    // Mount the initial screen: one fetch, one abort handle
    let mut active_fetch = Some(spawn_fetch(app.service.clone(), tx.clone()));

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                TuiEvent::Resize => {}
                TuiEvent::Quit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        break 'main;
                    }
                }
                TuiEvent::Refresh => {
                    let effect = update(&mut app, Action::Refresh);
                    if effect == Effect::SpawnFetch {
                        remount(&mut active_fetch, &mut tui, &app, &tx);
                    }
                }
                TuiEvent::SelectUp => tui.project_list.select_up(),
                TuiEvent::SelectDown => tui.project_list.select_down(),
            }
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => break 'main,
                Effect::SpawnFetch => remount(&mut active_fetch, &mut tui, &app, &tx),
                Effect::None => {}
            }
        }
    }

    // Unmount: discard any in-flight fetch before giving the terminal back
    if let Some(handle) = active_fetch.take() {
        handle.abort();
    }

    ratatui::restore();
    Ok(())
}

/// Tears down the current mount (abort in-flight fetch, reset presentation
/// state) and mounts afresh.
fn remount(
    active_fetch: &mut Option<tokio::task::AbortHandle>,
    tui: &mut TuiState,
    app: &App,
    tx: &mpsc::Sender<Action>,
) {
    if let Some(handle) = active_fetch.take() {
        handle.abort();
    }
    tui.project_list = ProjectListState::new();
    *active_fetch = Some(spawn_fetch(app.service.clone(), tx.clone()));
}
