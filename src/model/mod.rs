//! Data model for the empty data set overlay
//!
//! UI-independent snapshots produced by the resolver and consumed by the
//! overlay view.

mod config;
mod decision;

pub(crate) use config::has_text;
pub use config::{
    ButtonConfig, ButtonContent, ControlState, Image, ImageAnimation, Insets, Offset,
    OverlayConfiguration, RenderingMode, Spacing,
};
pub use decision::VisibilityDecision;
