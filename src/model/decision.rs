//! Visibility decision for one reload cycle

use crate::defaults;

/// Inputs and outcome of the "should the overlay show?" check
///
/// Recomputed on every reload; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityDecision {
    pub item_count: usize,
    pub should_display: bool,
    pub should_be_forced_to_display: bool,
}

impl Default for VisibilityDecision {
    fn default() -> Self {
        Self {
            item_count: 0,
            should_display: defaults::delegate::SHOULD_DISPLAY,
            should_be_forced_to_display: defaults::delegate::SHOULD_BE_FORCED_TO_DISPLAY,
        }
    }
}

impl VisibilityDecision {
    pub fn new(item_count: usize, should_display: bool, should_be_forced_to_display: bool) -> Self {
        Self {
            item_count,
            should_display,
            should_be_forced_to_display,
        }
    }

    /// `(item_count == 0 && should_display) || should_be_forced_to_display`
    pub fn is_visible(&self) -> bool {
        (self.item_count == 0 && self.should_display) || self.should_be_forced_to_display
    }
}
