//! Application state and view management

use std::rc::{Rc, Weak};

use super::providers::{DemoDelegate, DemoEvent, DemoSource};
use crate::binding::EmptyDataSetExt;
use crate::error::InterceptError;
use crate::host::{GridView, ListView, Section, SectionedItems};
use crate::provider::{EmptyDataSetDelegate, EmptyDataSetSource};

/// Items appended by one batch update
const BATCH_SIZE: usize = 3;

/// Columns of the grid view
const GRID_COLUMNS: u16 = 4;

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List,
    Grid,
}

/// Startup options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Number of list sections; zero is treated as one
    pub sections: usize,
    /// Items present at startup
    pub items: usize,
    /// Force the empty state to display even with items
    pub force: bool,
    /// Start on the grid view
    pub grid: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            sections: 1,
            items: 0,
            force: false,
            grid: false,
        }
    }
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    pub list: ListView,
    pub grid: GridView,
    /// Status bar message
    pub message: String,
    pub(crate) items: Rc<SectionedItems>,
    sections: usize,
    next_item: usize,
    // Providers are held weakly by the widgets; the app keeps them alive.
    _source: Rc<DemoSource>,
    pub(crate) delegate: Rc<DemoDelegate>,
}

impl App {
    /// Build the demo widgets and bind the empty data set providers.
    pub fn new(options: Options) -> Result<Self, InterceptError> {
        let sections = options.sections.max(1);
        let items = Rc::new(if sections > 1 {
            SectionedItems::new(
                (1..=sections)
                    .map(|n| Section::new(Some(format!("Section {n}").as_str()), Vec::new()))
                    .collect(),
            )
        } else {
            SectionedItems::flat(Vec::new())
        });

        let source = Rc::new(DemoSource);
        let delegate = Rc::new(DemoDelegate::new(options.force));
        let weak_source: Weak<dyn EmptyDataSetSource> = Rc::downgrade(&source) as _;
        let weak_delegate: Weak<dyn EmptyDataSetDelegate> = Rc::downgrade(&delegate) as _;

        let mut list = ListView::new("Items");
        list.set_content(Some(items.clone()));
        list.set_empty_delegate(Some(weak_delegate.clone()));
        list.set_empty_data_source(Some(weak_source.clone()))?;

        let mut grid = GridView::new("Tiles", GRID_COLUMNS);
        grid.set_content(Some(items.clone()));
        grid.set_empty_delegate(Some(weak_delegate));
        grid.set_empty_data_source(Some(weak_source))?;

        let mut app = Self {
            running: true,
            current_view: if options.grid { View::Grid } else { View::List },
            list,
            grid,
            message: String::new(),
            items,
            sections,
            next_item: 0,
            _source: source,
            delegate,
        };
        for _ in 0..options.items {
            app.push_item();
        }
        app.reload();
        Ok(app)
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn switch_view(&mut self) {
        self.current_view = match self.current_view {
            View::List => View::Grid,
            View::Grid => View::List,
        };
    }

    /// Total items across all sections
    pub fn item_count(&self) -> usize {
        self.items.total()
    }

    pub fn add_item(&mut self) {
        self.push_item();
        self.reload();
        self.message = format!("{} items", self.item_count());
    }

    /// Append several items through the list's batch update path
    pub fn add_batch(&mut self) {
        self.list.begin_updates();
        for _ in 0..BATCH_SIZE {
            self.push_item();
        }
        self.list.end_updates();
        self.grid.reload_data();
        self.message = format!("{} items", self.item_count());
    }

    pub fn delete_item(&mut self) {
        if let Some(item) = self.items.pop() {
            self.message = format!("Removed {item}");
        }
        self.reload();
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.reload();
        self.message = "Cleared".to_string();
    }

    pub fn toggle_force(&mut self) {
        let forced = self.delegate.toggle_forced();
        self.reload();
        self.message = if forced {
            "Empty state forced".to_string()
        } else {
            "Empty state follows content".to_string()
        };
    }

    /// Press the empty state button of the current view
    pub fn activate_button(&mut self) {
        let pressed = match self.current_view {
            View::List => self.list.activate_empty_data_set_button(),
            View::Grid => self.grid.activate_empty_data_set_button(),
        };
        if pressed {
            self.process_delegate_events();
        }
    }

    /// Idle processing: animation and fade-in
    pub fn on_tick(&mut self) {
        self.list.tick_empty_data_set();
        self.grid.tick_empty_data_set();
    }

    /// Act on taps the delegate recorded
    pub(crate) fn process_delegate_events(&mut self) {
        for event in self.delegate.take_events() {
            match event {
                DemoEvent::ButtonTapped => self.add_item(),
                DemoEvent::ViewTapped => self.message = "Tapped the empty state".to_string(),
            }
        }
    }

    fn push_item(&mut self) {
        self.next_item += 1;
        let section = (self.next_item - 1) % self.sections;
        self.items.push(section, format!("Item {}", self.next_item));
    }

    fn reload(&mut self) {
        self.list.reload_data();
        self.grid.reload_data();
    }
}
