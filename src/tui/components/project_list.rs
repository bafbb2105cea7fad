//! # ProjectList Component
//!
//! Renders the fetched project collection as a selectable list. The
//! component receives the projects as props and emits nothing back into
//! the core — selection is purely presentation state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::api::Project;
use crate::tui::component::Component;

/// Persistent presentation state: which row is selected. Survives redraws,
/// reset on re-mount.
#[derive(Default)]
pub struct ProjectListState {
    pub list_state: ListState,
}

impl ProjectListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_up(&mut self) {
        self.list_state.select_previous();
    }

    pub fn select_down(&mut self) {
        self.list_state.select_next();
    }
}

/// The listing itself. Borrows the projects from `App` for the duration of
/// one render pass.
pub struct ProjectList<'a> {
    pub projects: &'a [Project],
    pub state: &'a mut ProjectListState,
}

fn project_line(project: &Project) -> Line<'_> {
    let mut line = Line::from(project.label());
    if let Some(access) = &project.access {
        line.push_span(format!("  ({access})"));
    }
    line
}

impl Component for ProjectList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self.projects.iter().map(|p| ListItem::new(project_line(p))).collect();

        let list = List::new(items)
            .block(Block::bordered().title(format!("Projects ({})", self.projects.len())))
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
