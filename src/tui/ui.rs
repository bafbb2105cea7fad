//! Frame composition. Resolves the current route to a screen chain and
//! renders it inside-out: layout screens first, then the leaf screen in
//! whatever area the layouts left over.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::{App, FetchPhase};
use crate::router::{self, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ProjectList, TitleBar};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    match router::resolve(&app.route) {
        Some(chain) => {
            let mut area = frame.area();
            for screen in chain {
                match screen {
                    Screen::AppLayout => area = draw_app_layout(frame, area, app),
                    Screen::ProjectList => draw_project_screen(frame, area, app, tui, spinner_frame),
                }
            }
        }
        None => draw_not_found(frame, frame.area(), &app.route),
    }
}

/// Shared chrome: title bar on top, key hints at the bottom. Returns the
/// inner area left for the routed child screen.
fn draw_app_layout(frame: &mut Frame, area: Rect, app: &App) -> Rect {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, hint_area] = layout.areas(area);

    let mut title_bar = TitleBar {
        route: app.route.clone(),
        status_message: app.status_message.clone(),
    };
    title_bar.render(frame, title_area);

    let hints = Span::styled(
        " q quit | r refresh | ↑/↓ select",
        Style::default().add_modifier(Modifier::DIM),
    );
    frame.render_widget(hints, hint_area);

    main_area
}

fn draw_project_screen(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    tui: &mut TuiState,
    spinner_frame: usize,
) {
    match &app.phase {
        FetchPhase::Loading => {
            let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
            let loading = Paragraph::new(format!("{spinner} Loading projects…"))
                .block(Block::bordered().title("Projects"))
                .alignment(Alignment::Center);
            frame.render_widget(loading, area);
        }
        FetchPhase::Failed(reason) => draw_error_view(frame, area, reason),
        FetchPhase::Ready(projects) => {
            let mut list = ProjectList {
                projects,
                state: &mut tui.project_list,
            };
            list.render(frame, area);
        }
    }
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(error_msg)
        .block(Block::bordered().title("ERROR"))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center);

    frame.render_widget(error_paragraph, area);
}

/// The not-found collaborator: rendered for any path the route table does
/// not declare.
fn draw_not_found(frame: &mut Frame, area: Rect, route: &str) {
    let paragraph = Paragraph::new(format!("No screen registered for {route}"))
        .block(Block::bordered().title("Not Found"))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
