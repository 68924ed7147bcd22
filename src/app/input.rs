//! Input handling for the application

use crossterm::event::{KeyEvent, MouseEvent};

use super::state::{App, View};
use crate::binding::EmptyDataSetExt;
use crate::keys;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        match key.code {
            keys::QUIT | keys::ESC => self.quit(),
            keys::TAB => self.switch_view(),
            keys::ADD => self.add_item(),
            keys::ADD_BATCH => self.add_batch(),
            keys::DELETE => self.delete_item(),
            keys::CLEAR => self.clear(),
            keys::FORCE => self.toggle_force(),
            keys::ACTIVATE => self.activate_button(),
            code if keys::is_move_down(code) && self.current_view == View::List => {
                self.list.select_next();
            }
            code if keys::is_move_up(code) && self.current_view == View::List => {
                self.list.select_prev();
            }
            _ => {}
        }
    }

    /// Handle mouse events; only the empty state overlay reacts to them
    pub fn on_mouse_event(&mut self, event: MouseEvent) {
        let consumed = match self.current_view {
            View::List => self.list.handle_empty_data_set_mouse(event),
            View::Grid => self.grid.handle_empty_data_set_mouse(event),
        };
        if consumed {
            self.process_delegate_events();
        }
    }
}
