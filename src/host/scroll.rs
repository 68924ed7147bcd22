//! Plain scrollable text host
//!
//! Has no item model and no reload operation, so the overlay never shows
//! on it. Binding providers to it is allowed and does nothing.

use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::{ContentSource, HostWidget, WidgetKind};
use crate::binding::WidgetBinding;
use crate::intercept::{NativeReload, ReloadOp, Reloadable};

#[derive(Debug)]
pub struct ScrollArea {
    lines: Vec<Line<'static>>,
    offset: u16,
    scroll_enabled: bool,
    empty_data_set: Option<WidgetBinding>,
}

impl Default for ScrollArea {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ScrollArea {
    pub fn new(lines: Vec<Line<'static>>) -> Self {
        Self {
            lines,
            offset: 0,
            scroll_enabled: true,
            empty_data_set: None,
        }
    }

    pub fn set_lines(&mut self, lines: Vec<Line<'static>>) {
        self.lines = lines;
        self.offset = 0;
    }

    pub fn scroll_by(&mut self, rows: i32) {
        if !self.scroll_enabled {
            return;
        }
        let max = self.lines.len().saturating_sub(1).min(u16::MAX as usize) as i32;
        self.offset = (i32::from(self.offset) + rows).clamp(0, max) as u16;
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.lines.clone())
            .scroll((self.offset, 0))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }
}

impl HostWidget for ScrollArea {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Scroll
    }

    fn content_source(&self) -> Option<&dyn ContentSource> {
        None
    }

    fn binding(&self) -> Option<&WidgetBinding> {
        self.empty_data_set.as_ref()
    }

    fn binding_slot(&mut self) -> &mut Option<WidgetBinding> {
        &mut self.empty_data_set
    }

    fn is_scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_enabled = enabled;
    }
}

impl Reloadable for ScrollArea {
    const RELOAD_OPERATIONS: &'static [ReloadOp] = &[];

    fn native_reload(_op: ReloadOp) -> Option<NativeReload<Self>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_by_clamps() {
        let mut area = ScrollArea::new(vec![Line::from("a"), Line::from("b"), Line::from("c")]);
        area.scroll_by(10);
        assert_eq!(area.offset(), 2);
        area.scroll_by(-5);
        assert_eq!(area.offset(), 0);
    }

    #[test]
    fn test_scroll_area_is_unsupported_kind() {
        let area = ScrollArea::default();
        assert!(!area.kind().supports_empty_data_set());
    }
}
