//! UI layer
//!
//! Contains the status bar and theme definitions.

pub mod status_bar;
pub mod theme;
