//! Host widgets
//!
//! The contract a display widget offers to the empty data set engine, and
//! the concrete widgets shipped with the crate.

mod content;
mod grid;
mod list;
pub mod navigation;
mod scroll;

use std::any::Any;

use ratatui::text::Line;

use crate::binding::WidgetBinding;

pub use content::{Section, SectionedItems};
pub use grid::GridView;
pub use list::ListView;
pub use scroll::ScrollArea;

/// Concrete kind of a display widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    /// Sectioned list of rows
    List,
    /// Items laid out in columns
    Grid,
    /// Plain scrollable content with no item model
    Scroll,
}

impl WidgetKind {
    /// Whether the overlay can be shown on this kind of widget
    pub fn supports_empty_data_set(self) -> bool {
        matches!(self, WidgetKind::List | WidgetKind::Grid)
    }
}

/// The widget's own content data source
///
/// This is the model the widget renders from; it is separate from the
/// empty data set providers.
pub trait ContentSource {
    /// Number of sections, or `None` if the source does not report one
    fn number_of_sections(&self) -> Option<usize> {
        None
    }

    fn number_of_items(&self, section: usize) -> usize;

    /// Rendered row for an item
    #[allow(unused_variables)]
    fn item(&self, section: usize, index: usize) -> Option<Line<'static>> {
        None
    }

    #[allow(unused_variables)]
    fn section_header(&self, section: usize) -> Option<Line<'static>> {
        None
    }
}

/// What the empty data set engine needs from a display widget
pub trait HostWidget: Any {
    fn kind(&self) -> WidgetKind;

    fn content_source(&self) -> Option<&dyn ContentSource>;

    /// Empty data set state attached to this instance, if any
    fn binding(&self) -> Option<&WidgetBinding>;

    /// Storage for the instance's empty data set state
    fn binding_slot(&mut self) -> &mut Option<WidgetBinding>;

    fn is_scroll_enabled(&self) -> bool;

    fn set_scroll_enabled(&mut self, enabled: bool);
}
