//! End-to-end display lifecycle of the empty data set overlay
//!
//! Drives real host widgets through reloads and checks the overlay and the
//! delegate notifications that result.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use ratatui::text::Text;

use emptyset::host::{HostWidget, ListView, SectionedItems};
use emptyset::model::{ButtonContent, ControlState, Image, Offset};
use emptyset::overlay::OverlayElement;
use emptyset::{EmptyDataSetDelegate, EmptyDataSetExt, EmptyDataSetSource};

struct NoResults;

impl EmptyDataSetSource for NoResults {
    fn title(&self, _view: &dyn HostWidget) -> Option<Text<'static>> {
        Some(Text::from("No results"))
    }
}

struct BothButtons;

impl EmptyDataSetSource for BothButtons {
    fn button_title(&self, _view: &dyn HostWidget, _state: ControlState) -> Option<Text<'static>> {
        Some(Text::from("Retry"))
    }

    fn button_image(&self, _view: &dyn HostWidget, state: ControlState) -> Option<Image> {
        match state {
            ControlState::Normal => Some(Image::new(["(R)"])),
            ControlState::Highlighted => None,
        }
    }
}

#[derive(Default)]
struct Recorder {
    events: RefCell<Vec<&'static str>>,
}

impl Recorder {
    fn take(&self) -> Vec<&'static str> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl EmptyDataSetDelegate for Recorder {
    fn will_appear(&self, _view: &dyn HostWidget) {
        self.events.borrow_mut().push("will_appear");
    }
    fn did_appear(&self, _view: &dyn HostWidget) {
        self.events.borrow_mut().push("did_appear");
    }
    fn will_disappear(&self, _view: &dyn HostWidget) {
        self.events.borrow_mut().push("will_disappear");
    }
    fn did_disappear(&self, _view: &dyn HostWidget) {
        self.events.borrow_mut().push("did_disappear");
    }
}

struct Harness {
    list: ListView,
    items: Rc<SectionedItems>,
    recorder: Rc<Recorder>,
    _source: Rc<dyn EmptyDataSetSource>,
}

fn harness(source: Rc<dyn EmptyDataSetSource>) -> Harness {
    let items = Rc::new(SectionedItems::flat(Vec::new()));
    let recorder = Rc::new(Recorder::default());
    let delegate: Weak<dyn EmptyDataSetDelegate> = Rc::downgrade(&recorder) as _;

    let mut list = ListView::new("Results");
    list.set_content(Some(items.clone()));
    list.set_empty_delegate(Some(delegate));
    list.set_empty_data_source(Some(Rc::downgrade(&source))).unwrap();

    Harness {
        list,
        items,
        recorder,
        _source: source,
    }
}

#[test]
fn test_title_only_scenario() {
    let mut h = harness(Rc::new(NoResults));
    h.list.reload_data();

    let overlay = h.list.empty_overlay().expect("overlay shown");
    assert_eq!(overlay.elements(), &[OverlayElement::Title]);
    let config = overlay.configuration();
    assert!(config.image.is_none());
    assert!(config.description.is_none());
    assert!(config.button.is_none());
    assert_eq!(config.spacing.image_title, 8.0);
    assert_eq!(config.spacing.title_description, 4.0);
    assert_eq!(config.spacing.description_button, 8.0);
    assert_eq!(config.offset, Offset::ZERO);
    assert!(config.fade_in);
    assert!(config.allow_touch);
    assert!(!config.allow_scroll);
}

#[test]
fn test_repeated_reloads_redisplay_without_hiding() {
    let mut h = harness(Rc::new(NoResults));
    const RELOADS: usize = 5;
    for _ in 0..RELOADS {
        h.list.reload_data();
    }

    let events = h.recorder.take();
    assert_eq!(events.iter().filter(|e| **e == "will_appear").count(), RELOADS);
    assert_eq!(events.iter().filter(|e| **e == "did_appear").count(), RELOADS);
    assert!(!events.contains(&"will_disappear"));
    assert!(!events.contains(&"did_disappear"));

    let overlay = h.list.empty_overlay().unwrap();
    assert_eq!(overlay.rebuild_count(), RELOADS);
    assert_eq!(overlay.elements().len(), 1);
}

#[test]
fn test_items_arriving_removes_overlay() {
    let mut h = harness(Rc::new(NoResults));
    h.list.reload_data();
    assert!(h.list.is_empty_data_set_visible());
    h.recorder.take();

    for item in ["one", "two", "three"] {
        h.items.push(0, item);
    }
    h.list.reload_data();

    assert_eq!(h.recorder.take(), vec!["will_disappear", "did_disappear"]);
    assert!(!h.list.is_empty_data_set_visible());
    assert!(h.list.empty_overlay().is_none());
    assert_eq!(h.list.row_count(), 3);
}

#[test]
fn test_fresh_instance_keeps_native_reload() {
    let mut bound = harness(Rc::new(NoResults));
    bound.list.reload_data();

    let items = Rc::new(SectionedItems::flat(Vec::new()));
    let mut fresh = ListView::new("Plain");
    fresh.set_content(Some(items.clone()));
    items.push(0, "only");
    fresh.reload_data();

    assert_eq!(fresh.reload_count(), 1);
    assert_eq!(fresh.row_count(), 1);
    assert!(fresh.binding().is_none());
    assert!(!fresh.is_empty_data_set_visible());
    assert!(fresh.is_scroll_enabled());
}

#[test]
fn test_button_image_wins_over_title() {
    let mut h = harness(Rc::new(BothButtons));
    h.list.reload_data();

    let overlay = h.list.empty_overlay().unwrap();
    let button = overlay.configuration().button.as_ref().unwrap();
    assert!(matches!(button.content, ButtonContent::Image { .. }));
    assert!(button.title(ControlState::Normal).is_none());
    assert_eq!(overlay.elements(), &[OverlayElement::Button]);
}

#[test]
fn test_end_updates_refreshes_overlay() {
    let mut h = harness(Rc::new(NoResults));
    h.list.reload_data();
    h.recorder.take();

    h.list.begin_updates();
    h.items.push(0, "batched");
    h.list.end_updates();

    assert_eq!(h.recorder.take(), vec!["will_disappear", "did_disappear"]);
    assert_eq!(h.list.row_count(), 1);
}
