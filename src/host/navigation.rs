//! Selection and scroll helpers for list-like hosts
//!
//! Pure functions; each host applies the results to its own state.

/// Move selection down by one within `count` rows.
pub fn select_next(selected: usize, count: usize) -> usize {
    selected.saturating_add(1).min(count.saturating_sub(1))
}

/// Move selection up by one.
pub fn select_prev(selected: usize) -> usize {
    selected.saturating_sub(1)
}

/// Keep a selection valid after the row count changed.
pub fn clamp_selection(selected: usize, count: usize) -> usize {
    selected.min(count.saturating_sub(1))
}

/// Scroll offset that keeps `selected` inside a window of `visible` rows.
///
/// A zero-height window leaves the offset unchanged.
pub fn adjust_scroll(selected: usize, offset: usize, visible: usize) -> usize {
    if visible == 0 {
        offset
    } else if selected < offset {
        selected
    } else if selected >= offset + visible {
        selected + 1 - visible
    } else {
        offset
    }
}
