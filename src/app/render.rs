//! Rendering logic for the application

use ratatui::{Frame, layout::Rect};

use super::state::{App, View};
use crate::keys;
use crate::ui::status_bar::render_status_bar;

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let main = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };

        match self.current_view {
            View::List => self.list.render(frame, main),
            View::Grid => self.grid.render(frame, main),
        }

        render_status_bar(frame, keys::DEMO_HINTS, &self.message);
    }
}
