//! # TitleBar Component
//!
//! Top status bar showing the current route and transient status text.
//!
//! TitleBar is purely presentational — it receives all data as props and
//! has no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar {
//!     route: app.route.clone(),
//!     status_message: app.status_message.clone(),
//! };
//! title_bar.render(frame, area);
//! ```
//!
//! Props live in struct fields rather than render() parameters because the
//! `Component` trait requires a fixed render() signature.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar component showing the route and status text.
pub struct TitleBar {
    pub route: String,
    pub status_message: String,
}

impl TitleBar {
    fn title_text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Taskdeck ({})", self.route)
        } else {
            format!("Taskdeck ({}) | {}", self.route, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.title_text()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_without_status() {
        let bar = TitleBar {
            route: "/projects".to_string(),
            status_message: String::new(),
        };
        assert_eq!(bar.title_text(), "Taskdeck (/projects)");
    }

    #[test]
    fn test_title_with_status() {
        let bar = TitleBar {
            route: "/projects".to_string(),
            status_message: "3 projects".to_string(),
        };
        assert_eq!(bar.title_text(), "Taskdeck (/projects) | 3 projects");
    }
}
