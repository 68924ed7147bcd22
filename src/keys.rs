//! Keybinding definitions for the demo application

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

/// Check if key is Ctrl+C
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys
// =============================================================================

pub const QUIT: KeyCode = KeyCode::Char('q');

pub const ESC: KeyCode = KeyCode::Esc;

/// Switch between list and grid
pub const TAB: KeyCode = KeyCode::Tab;

// =============================================================================
// Content keys
// =============================================================================

/// Append one item
pub const ADD: KeyCode = KeyCode::Char('a');

/// Append several items inside one batch update
pub const ADD_BATCH: KeyCode = KeyCode::Char('b');

/// Remove the last item
pub const DELETE: KeyCode = KeyCode::Char('d');

/// Remove every item
pub const CLEAR: KeyCode = KeyCode::Char('c');

/// Toggle forced display of the empty state
pub const FORCE: KeyCode = KeyCode::Char('f');

/// Press the empty state button
pub const ACTIVATE: KeyCode = KeyCode::Enter;

// =============================================================================
// Navigation keys
// =============================================================================

pub const MOVE_UP: KeyCode = KeyCode::Char('k');

pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_ADD: KeyHint = KeyHint {
    key: "a",
    label: "Add",
    color: Color::Green,
};
pub const HINT_BATCH: KeyHint = KeyHint {
    key: "b",
    label: "Batch",
    color: Color::Green,
};
pub const HINT_DELETE: KeyHint = KeyHint {
    key: "d",
    label: "Delete",
    color: Color::Red,
};
pub const HINT_CLEAR: KeyHint = KeyHint {
    key: "c",
    label: "Clear",
    color: Color::Red,
};
pub const HINT_FORCE: KeyHint = KeyHint {
    key: "f",
    label: "Force",
    color: Color::Magenta,
};
pub const HINT_SWITCH: KeyHint = KeyHint {
    key: "Tab",
    label: "Switch",
    color: Color::Cyan,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Yellow,
};

pub const DEMO_HINTS: &[KeyHint] = &[
    HINT_ADD,
    HINT_BATCH,
    HINT_DELETE,
    HINT_CLEAR,
    HINT_FORCE,
    HINT_SWITCH,
    HINT_QUIT,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_key() {
        assert!(is_interrupt_key(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_interrupt_key(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_movement_keys() {
        assert!(is_move_up(KeyCode::Char('k')));
        assert!(is_move_up(KeyCode::Up));
        assert!(is_move_down(KeyCode::Char('j')));
        assert!(!is_move_down(KeyCode::Char('a')));
    }
}
