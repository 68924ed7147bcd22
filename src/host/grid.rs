//! Grid host

use std::fmt;
use std::rc::Rc;

use ratatui::{
    Frame,
    layout::Rect,
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{ContentSource, HostWidget, WidgetKind};
use crate::binding::WidgetBinding;
use crate::defaults;
use crate::intercept::{self, NativeReload, ReloadOp, Reloadable};
use crate::ui::theme;

/// Items laid out left to right in fixed-width columns
///
/// Only [`reload_data`](GridView::reload_data) is interceptable; grids have
/// no batch updates.
pub struct GridView {
    content: Option<Rc<dyn ContentSource>>,
    title: String,
    columns: u16,
    items: Vec<Line<'static>>,
    scroll_enabled: bool,
    reload_count: usize,
    empty_data_set: Option<WidgetBinding>,
}

impl fmt::Debug for GridView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridView")
            .field("title", &self.title)
            .field("columns", &self.columns)
            .field("items", &self.items.len())
            .field("reload_count", &self.reload_count)
            .field("empty_data_set", &self.empty_data_set)
            .finish_non_exhaustive()
    }
}

impl GridView {
    /// Create a grid. `columns` of zero is treated as one.
    pub fn new(title: impl Into<String>, columns: u16) -> Self {
        Self {
            content: None,
            title: title.into(),
            columns: columns.max(1),
            items: Vec::new(),
            scroll_enabled: true,
            reload_count: 0,
            empty_data_set: None,
        }
    }

    pub fn set_content(&mut self, content: Option<Rc<dyn ContentSource>>) {
        self.content = content;
    }

    pub fn reload_data(&mut self) {
        intercept::dispatch(self, ReloadOp::ReloadData);
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn reload_count(&self) -> usize {
        self.reload_count
    }

    fn native_reload_data(&mut self) {
        self.items.clear();
        if let Some(content) = self.content.as_deref() {
            let sections = content
                .number_of_sections()
                .unwrap_or(defaults::SECTION_COUNT);
            for section in 0..sections {
                for index in 0..content.number_of_items(section) {
                    self.items
                        .push(content.item(section, index).unwrap_or_default());
                }
            }
        }
        self.reload_count += 1;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let title = Line::from(format!(" {} ", self.title)).bold().fg(theme::list::TITLE);
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(area);

        let cell_width = (inner.width / self.columns).max(1) as usize;
        let lines: Vec<Line<'static>> = self
            .items
            .chunks(self.columns as usize)
            .take(inner.height as usize)
            .map(|row| {
                let spans: Vec<Span<'static>> = row
                    .iter()
                    .map(|item| {
                        let text = item.to_string();
                        let clipped: String = text.chars().take(cell_width.saturating_sub(1)).collect();
                        Span::raw(format!("{clipped:<cell_width$}"))
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();
        frame.render_widget(Paragraph::new(lines).block(block), area);

        if let Some(binding) = &self.empty_data_set {
            frame.render_widget(binding, inner);
        }
    }
}

impl HostWidget for GridView {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Grid
    }

    fn content_source(&self) -> Option<&dyn ContentSource> {
        self.content.as_deref()
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

impl Reloadable for GridView {
    const RELOAD_OPERATIONS: &'static [ReloadOp] = &[ReloadOp::ReloadData];

    fn native_reload(op: ReloadOp) -> Option<NativeReload<Self>> {
        match op {
            ReloadOp::ReloadData => Some(GridView::native_reload_data),
            ReloadOp::EndUpdates => None,
        }
    }
}
