//! Snapshot tests for the overlay drawn over a list
//!
//! Uses insta + ratatui TestBackend for visual regression testing.
//! Reference: https://ratatui.rs/recipes/testing/snapshots/

use std::rc::Rc;

use insta::assert_snapshot;
use ratatui::{
    Terminal, backend::TestBackend, buffer::Buffer, layout::Rect, style::Style, text::Text,
};

use emptyset::host::{HostWidget, ListView, SectionedItems};
use emptyset::model::{ControlState, Image, Insets};
use emptyset::{CustomView, EmptyDataSetExt, EmptyDataSetSource};

use super::screen;

struct TitleOnly;

impl EmptyDataSetSource for TitleOnly {
    fn title(&self, _view: &dyn HostWidget) -> Option<Text<'static>> {
        Some(Text::from("No results"))
    }
}

struct FullStack;

impl EmptyDataSetSource for FullStack {
    fn image(&self, _view: &dyn HostWidget) -> Option<Image> {
        Some(Image::new(["[*]"]))
    }

    fn title(&self, _view: &dyn HostWidget) -> Option<Text<'static>> {
        Some(Text::from("Inbox zero"))
    }

    fn description(&self, _view: &dyn HostWidget) -> Option<Text<'static>> {
        Some(Text::from("Nothing to read"))
    }

    fn button_title(&self, _view: &dyn HostWidget, _state: ControlState) -> Option<Text<'static>> {
        Some(Text::from("Refresh"))
    }

    fn button_insets(&self, _view: &dyn HostWidget) -> Option<Insets> {
        Some(Insets::horizontal(1))
    }
}

#[derive(Debug)]
struct Spinner;

impl CustomView for Spinner {
    fn size(&self) -> (u16, u16) {
        (7, 1)
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        buf.set_string(area.x, area.y, "loading", Style::default());
    }
}

struct Custom;

impl EmptyDataSetSource for Custom {
    fn title(&self, _view: &dyn HostWidget) -> Option<Text<'static>> {
        Some(Text::from("never drawn"))
    }

    fn custom_view(&self, _view: &dyn HostWidget) -> Option<Box<dyn CustomView>> {
        Some(Box::new(Spinner))
    }
}

fn draw(source: Rc<dyn EmptyDataSetSource>, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut list = ListView::new("Inbox");
    list.set_content(Some(Rc::new(SectionedItems::flat(Vec::new()))));
    list.set_empty_data_source(Some(Rc::downgrade(&source))).unwrap();
    list.reload_data();

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| list.render(frame, frame.area()))
        .unwrap();
    terminal
}

#[test]
fn test_title_only_overlay() {
    let terminal = draw(Rc::new(TitleOnly), 30, 9);
    assert_snapshot!(screen(&terminal), @r"
    ┌ Inbox ─────────────────────┐
    │                            │
    │                            │
    │                            │
    │         No results         │
    │                            │
    │                            │
    │                            │
    └────────────────────────────┘
    ");
}

#[test]
fn test_full_default_stack() {
    let terminal = draw(Rc::new(FullStack), 40, 14);
    assert_snapshot!(screen(&terminal), @r"
    ┌ Inbox ───────────────────────────────┐
    │                                      │
    │                                      │
    │                 [*]                  │
    │                                      │
    │              Inbox zero              │
    │                                      │
    │           Nothing to read            │
    │                                      │
    │               Refresh                │
    │                                      │
    │                                      │
    │                                      │
    └──────────────────────────────────────┘
    ");
}

#[test]
fn test_custom_view_replaces_default_elements() {
    let terminal = draw(Rc::new(Custom), 20, 5);
    let screen = screen(&terminal);
    assert!(screen.contains("loading"));
    assert!(!screen.contains("never drawn"));
}
