//! Demo application
//!
//! A list and a grid sharing one content model, both bound to the same
//! empty data set providers, split into:
//! - `state`: App struct and content mutations
//! - `input`: Key and mouse event handling
//! - `render`: UI rendering
//! - `providers`: The demo's source and delegate

mod input;
mod providers;
mod render;
mod state;

pub use providers::{DemoDelegate, DemoEvent, DemoSource};
pub use state::{App, Options, View};
