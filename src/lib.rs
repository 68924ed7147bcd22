//! Emptyset - empty data set overlays for ratatui list and grid widgets
//!
//! When a bound list or grid has no items, a centered overlay with an image,
//! title, description and button (or a caller-drawn view) is shown in its
//! place. The overlay is refreshed on every content reload without the
//! caller asking for it.
//!
//! This library provides:
//! - [`binding`]: Per-widget state and the [`EmptyDataSetExt`] attachment API
//! - [`provider`]: Data source and delegate traits
//! - [`resolver`]: Visibility decision and configuration resolution
//! - [`intercept`]: Process-wide reload interception
//! - [`overlay`]: The materialized overlay, its layout and drawing
//! - [`host`]: List, grid and scroll host widgets
//! - [`model`]: Configuration and decision types
//! - [`app`]: Demo application

pub mod app;
pub mod binding;
pub mod defaults;
pub mod error;
pub mod host;
pub mod intercept;
pub mod keys;
pub mod model;
pub mod overlay;
pub mod provider;
pub mod resolver;
pub mod ui;

pub use binding::{EmptyDataSetExt, WidgetBinding};
pub use error::InterceptError;
pub use provider::{CustomView, EmptyDataSetDelegate, EmptyDataSetSource};
