//! Empty data set providers used by the demo

use std::cell::{Cell, RefCell};

use ratatui::{style::Color, text::Text};

use crate::host::{HostWidget, WidgetKind};
use crate::model::{ControlState, Image, ImageAnimation, Insets};
use crate::provider::{EmptyDataSetDelegate, EmptyDataSetSource};
use crate::ui::theme;

const BOX: [&str; 3] = [" .-----. ", " |     | ", " '-----' "];

const BOX_FRAMES: [[&str; 3]; 4] = [
    [" .-----. ", " | .   | ", " '-----' "],
    [" .-----. ", " |  .  | ", " '-----' "],
    [" .-----. ", " |   . | ", " '-----' "],
    [" .-----. ", " |  .  | ", " '-----' "],
];

/// Ticks each animation frame stays on screen
const TICKS_PER_FRAME: u16 = 2;

/// Interaction reported back to the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoEvent {
    ButtonTapped,
    ViewTapped,
}

/// Static empty state content, worded per widget kind
#[derive(Debug, Default)]
pub struct DemoSource;

impl EmptyDataSetSource for DemoSource {
    fn image(&self, _view: &dyn HostWidget) -> Option<Image> {
        Some(Image::new(BOX))
    }

    fn image_tint_color(&self, _view: &dyn HostWidget) -> Option<Color> {
        Some(theme::demo::IMAGE_TINT)
    }

    fn image_animation(&self, _view: &dyn HostWidget) -> Option<ImageAnimation> {
        let frames = BOX_FRAMES.iter().map(|frame| Image::new(*frame)).collect();
        Some(ImageAnimation::new(frames, TICKS_PER_FRAME))
    }

    fn title(&self, view: &dyn HostWidget) -> Option<Text<'static>> {
        let title = match view.kind() {
            WidgetKind::Grid => "No tiles yet",
            WidgetKind::List | WidgetKind::Scroll => "No items yet",
        };
        Some(Text::from(title))
    }

    fn description(&self, _view: &dyn HostWidget) -> Option<Text<'static>> {
        Some(Text::from(
            "Press a to add an item, or click the button below.",
        ))
    }

    fn button_title(&self, _view: &dyn HostWidget, state: ControlState) -> Option<Text<'static>> {
        match state {
            ControlState::Normal => Some(Text::from("Add item")),
            ControlState::Highlighted => Some(Text::from("Adding...")),
        }
    }

    fn button_insets(&self, _view: &dyn HostWidget) -> Option<Insets> {
        Some(Insets::horizontal(1))
    }
}

/// Delegate that records taps for the application to act on
#[derive(Debug, Default)]
pub struct DemoDelegate {
    forced: Cell<bool>,
    events: RefCell<Vec<DemoEvent>>,
}

impl DemoDelegate {
    pub fn new(forced: bool) -> Self {
        Self {
            forced: Cell::new(forced),
            events: RefCell::new(Vec::new()),
        }
    }

    pub fn is_forced(&self) -> bool {
        self.forced.get()
    }

    /// Flip forced display and return the new value
    pub fn toggle_forced(&self) -> bool {
        let forced = !self.forced.get();
        self.forced.set(forced);
        forced
    }

    /// Drain recorded events, oldest first
    pub fn take_events(&self) -> Vec<DemoEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl EmptyDataSetDelegate for DemoDelegate {
    fn should_be_forced_to_display(&self, _view: &dyn HostWidget) -> Option<bool> {
        Some(self.forced.get())
    }

    fn should_animate_image(&self, _view: &dyn HostWidget) -> Option<bool> {
        Some(true)
    }

    fn did_tap_view(&self, _view: &dyn HostWidget) {
        self.events.borrow_mut().push(DemoEvent::ViewTapped);
    }

    fn did_tap_button(&self, _view: &dyn HostWidget) {
        self.events.borrow_mut().push(DemoEvent::ButtonTapped);
    }

    fn did_appear(&self, view: &dyn HostWidget) {
        tracing::debug!(kind = ?view.kind(), "empty state appeared");
    }

    fn did_disappear(&self, view: &dyn HostWidget) {
        tracing::debug!(kind = ?view.kind(), "empty state disappeared");
    }
}
