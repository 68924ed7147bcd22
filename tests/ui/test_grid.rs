//! Rendering tests for grids and scroll areas

use std::rc::Rc;

use ratatui::{Terminal, backend::TestBackend, text::Text};

use emptyset::host::{GridView, HostWidget, ScrollArea, SectionedItems};
use emptyset::{EmptyDataSetExt, EmptyDataSetSource};

use super::screen;

struct Empty;

impl EmptyDataSetSource for Empty {
    fn title(&self, _view: &dyn HostWidget) -> Option<Text<'static>> {
        Some(Text::from("No tiles"))
    }
}

#[test]
fn test_grid_shows_overlay_until_items_arrive() {
    let items = Rc::new(SectionedItems::flat(Vec::new()));
    let source: Rc<dyn EmptyDataSetSource> = Rc::new(Empty);
    let mut grid = GridView::new("Tiles", 3);
    grid.set_content(Some(items.clone()));
    grid.set_empty_data_source(Some(Rc::downgrade(&source))).unwrap();
    grid.reload_data();

    let mut terminal = Terminal::new(TestBackend::new(30, 7)).unwrap();
    terminal
        .draw(|frame| grid.render(frame, frame.area()))
        .unwrap();
    assert!(screen(&terminal).contains("No tiles"));

    items.push(0, "alpha");
    items.push(0, "beta");
    grid.reload_data();
    terminal
        .draw(|frame| grid.render(frame, frame.area()))
        .unwrap();
    let screen = screen(&terminal);
    assert!(!screen.contains("No tiles"));
    assert!(screen.contains("alpha"));
    assert!(screen.contains("beta"));
}

#[test]
fn test_scroll_area_never_shows_overlay() {
    let source: Rc<dyn EmptyDataSetSource> = Rc::new(Empty);
    let mut area = ScrollArea::default();
    area.set_empty_data_source(Some(Rc::downgrade(&source))).unwrap();
    area.reload_empty_data_set();

    let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
    terminal
        .draw(|frame| area.render(frame, frame.area()))
        .unwrap();
    assert!(!screen(&terminal).contains("No tiles"));
}
