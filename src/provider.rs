//! Capability providers for the empty data set
//!
//! Both traits are made of optional capabilities: every method has a
//! default that reports "not implemented" (`None`, or a no-op for
//! notifications). The resolver treats a missing capability as the
//! documented default, never as an error.
//!
//! Widgets hold providers through [`std::rc::Weak`] references and never
//! keep them alive.

use std::fmt;

use ratatui::{buffer::Buffer, layout::Rect, style::Color, text::Text};

use crate::host::HostWidget;
use crate::model::{ControlState, Image, ImageAnimation, Insets, Offset};

/// A caller-drawn view that replaces the default overlay composition
pub trait CustomView: fmt::Debug {
    /// Preferred size in cells (width, height)
    fn size(&self) -> (u16, u16);

    /// Draw into `area`, already clipped to the overlay
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// Supplies the visual content of the overlay.
#[allow(unused_variables)]
pub trait EmptyDataSetSource {
    /// Image shown above the title
    fn image(&self, view: &dyn HostWidget) -> Option<Image> {
        None
    }

    /// Tint for the image. When set the image is drawn as a template.
    fn image_tint_color(&self, view: &dyn HostWidget) -> Option<Color> {
        None
    }

    /// Frames cycled over the image when the delegate allows animation
    fn image_animation(&self, view: &dyn HostWidget) -> Option<ImageAnimation> {
        None
    }

    fn title(&self, view: &dyn HostWidget) -> Option<Text<'static>> {
        None
    }

    fn description(&self, view: &dyn HostWidget) -> Option<Text<'static>> {
        None
    }

    fn button_title(&self, view: &dyn HostWidget, state: ControlState) -> Option<Text<'static>> {
        None
    }

    /// Button image. A normal-state image takes precedence over any title.
    fn button_image(&self, view: &dyn HostWidget, state: ControlState) -> Option<Image> {
        None
    }

    /// Background drawn behind a title button
    fn button_background_image(
        &self,
        view: &dyn HostWidget,
        state: ControlState,
    ) -> Option<Image> {
        None
    }

    fn background_color(&self, view: &dyn HostWidget) -> Option<Color> {
        None
    }

    /// Replaces image, title, description and button entirely
    fn custom_view(&self, view: &dyn HostWidget) -> Option<Box<dyn CustomView>> {
        None
    }

    fn button_insets(&self, view: &dyn HostWidget) -> Option<Insets> {
        None
    }

    fn space_between_image_title(&self, view: &dyn HostWidget) -> Option<f32> {
        None
    }

    fn space_between_title_description(&self, view: &dyn HostWidget) -> Option<f32> {
        None
    }

    fn space_between_description_button(&self, view: &dyn HostWidget) -> Option<f32> {
        None
    }

    /// Offset of the content from the center of the overlay
    fn content_offset(&self, view: &dyn HostWidget) -> Option<Offset> {
        None
    }
}

/// Supplies the overlay's behavior and receives its notifications.
#[allow(unused_variables)]
pub trait EmptyDataSetDelegate {
    /// Default: true
    fn should_fade_in(&self, view: &dyn HostWidget) -> Option<bool> {
        None
    }

    /// Show the overlay even when the widget has content. Default: false
    fn should_be_forced_to_display(&self, view: &dyn HostWidget) -> Option<bool> {
        None
    }

    /// Default: true
    fn should_display(&self, view: &dyn HostWidget) -> Option<bool> {
        None
    }

    /// Default: true
    fn should_allow_touch(&self, view: &dyn HostWidget) -> Option<bool> {
        None
    }

    /// Default: false
    fn should_allow_scroll(&self, view: &dyn HostWidget) -> Option<bool> {
        None
    }

    /// Default: false
    fn should_animate_image(&self, view: &dyn HostWidget) -> Option<bool> {
        None
    }

    fn did_tap_view(&self, view: &dyn HostWidget) {}

    fn did_tap_button(&self, view: &dyn HostWidget) {}

    fn will_appear(&self, view: &dyn HostWidget) {}

    fn did_appear(&self, view: &dyn HostWidget) {}

    fn will_disappear(&self, view: &dyn HostWidget) {}

    fn did_disappear(&self, view: &dyn HostWidget) {}
}
