//! Sectioned list host

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::{ContentSource, HostWidget, WidgetKind, navigation};
use crate::binding::WidgetBinding;
use crate::defaults;
use crate::intercept::{self, NativeReload, ReloadOp, Reloadable};
use crate::ui::theme;

/// A list of rows grouped in sections
///
/// Row counts are snapshotted from the content source on every reload, the
/// way the list renders. Both [`reload_data`](ListView::reload_data) and
/// [`end_updates`](ListView::end_updates) are interceptable.
pub struct ListView {
    content: Option<Rc<dyn ContentSource>>,
    title: String,
    section_counts: Vec<usize>,
    selected: usize,
    scroll_offset: Cell<usize>,
    scroll_enabled: bool,
    batch_depth: usize,
    reload_count: usize,
    empty_data_set: Option<WidgetBinding>,
}

impl fmt::Debug for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListView")
            .field("title", &self.title)
            .field("section_counts", &self.section_counts)
            .field("selected", &self.selected)
            .field("scroll_enabled", &self.scroll_enabled)
            .field("reload_count", &self.reload_count)
            .field("empty_data_set", &self.empty_data_set)
            .finish_non_exhaustive()
    }
}

impl Default for ListView {
    fn default() -> Self {
        Self::new("")
    }
}

impl ListView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            content: None,
            title: title.into(),
            section_counts: Vec::new(),
            selected: 0,
            scroll_offset: Cell::new(0),
            scroll_enabled: true,
            batch_depth: 0,
            reload_count: 0,
            empty_data_set: None,
        }
    }

    /// Set the content source. Takes effect on the next reload.
    pub fn set_content(&mut self, content: Option<Rc<dyn ContentSource>>) {
        self.content = content;
    }

    /// Reload every row from the content source
    pub fn reload_data(&mut self) {
        intercept::dispatch(self, ReloadOp::ReloadData);
    }

    /// Start a batch of row updates
    pub fn begin_updates(&mut self) {
        self.batch_depth += 1;
    }

    /// Finish a batch of row updates
    pub fn end_updates(&mut self) {
        intercept::dispatch(self, ReloadOp::EndUpdates);
    }

    /// Number of native reloads performed
    pub fn reload_count(&self) -> usize {
        self.reload_count
    }

    /// Rows known since the last reload
    pub fn row_count(&self) -> usize {
        self.section_counts.iter().sum()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_batch_updating(&self) -> bool {
        self.batch_depth > 0
    }

    pub fn select_next(&mut self) {
        if self.scroll_enabled {
            self.selected = navigation::select_next(self.selected, self.row_count());
        }
    }

    pub fn select_prev(&mut self) {
        if self.scroll_enabled {
            self.selected = navigation::select_prev(self.selected);
        }
    }

    fn native_reload_data(&mut self) {
        self.snapshot_counts();
        self.reload_count += 1;
    }

    fn native_end_updates(&mut self) {
        self.batch_depth = self.batch_depth.saturating_sub(1);
        if self.batch_depth == 0 {
            self.snapshot_counts();
        }
    }

    fn snapshot_counts(&mut self) {
        self.section_counts = match self.content.as_deref() {
            Some(content) => {
                let sections = content
                    .number_of_sections()
                    .unwrap_or(defaults::SECTION_COUNT);
                (0..sections)
                    .map(|section| content.number_of_items(section))
                    .collect()
            }
            None => Vec::new(),
        };
        self.selected = navigation::clamp_selection(self.selected, self.row_count());
    }

    /// Render the list, with the empty data set overlay in front when shown
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let title = Line::from(format!(" {} ", self.title)).bold().fg(theme::list::TITLE);
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(area);

        let lines = self.build_lines(inner.height as usize);
        frame.render_widget(Paragraph::new(lines).block(block), area);

        if let Some(binding) = &self.empty_data_set {
            frame.render_widget(binding, inner);
        }
    }

    fn build_lines(&self, visible: usize) -> Vec<Line<'static>> {
        let Some(content) = self.content.as_deref() else {
            return Vec::new();
        };

        // (line, row index) pairs; headers carry no row index
        let mut rows: Vec<(Line<'static>, Option<usize>)> = Vec::new();
        let mut row = 0;
        for (section, &count) in self.section_counts.iter().enumerate() {
            if let Some(header) = content.section_header(section) {
                rows.push((header.fg(theme::list::HEADER).bold(), None));
            }
            for index in 0..count {
                let line = content.item(section, index).unwrap_or_default();
                rows.push((line, Some(row)));
                row += 1;
            }
        }

        let selected_line = rows
            .iter()
            .position(|(_, row)| *row == Some(self.selected))
            .unwrap_or(0);
        let offset = navigation::adjust_scroll(selected_line, self.scroll_offset.get(), visible);
        self.scroll_offset.set(offset);

        rows.into_iter()
            .skip(offset)
            .take(visible)
            .map(|(line, row)| {
                if row == Some(self.selected) {
                    line.style(
                        Style::default()
                            .fg(theme::list::SELECTED_FG)
                            .bg(theme::list::SELECTED_BG)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    line
                }
            })
            .collect()
    }
}

impl HostWidget for ListView {
    fn kind(&self) -> WidgetKind {
        WidgetKind::List
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

impl Reloadable for ListView {
    const RELOAD_OPERATIONS: &'static [ReloadOp] = &[ReloadOp::ReloadData, ReloadOp::EndUpdates];

    fn native_reload(op: ReloadOp) -> Option<NativeReload<Self>> {
        match op {
            ReloadOp::ReloadData => Some(ListView::native_reload_data),
            ReloadOp::EndUpdates => Some(ListView::native_end_updates),
        }
    }
}
