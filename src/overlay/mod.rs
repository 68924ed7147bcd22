//! Materialized empty data set overlay
//!
//! The overlay is rebuilt from scratch on every display cycle: all
//! elements are dropped ([`OverlayView::prepare_for_reuse`]) and composed
//! again from the resolved configuration, so nothing from a previous
//! configuration survives.

mod render;

pub use render::OverlayLayout;

use crate::model::{self, ButtonContent, ControlState, Image, OverlayConfiguration};

/// Elements the overlay can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayElement {
    Image,
    Title,
    Description,
    Button,
    /// Caller-drawn view replacing all of the above
    Custom,
}

/// Fade-in progress of the overlay content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadeState {
    /// Not yet attached to a widget; nothing is drawn
    #[default]
    Detached,
    /// Attached with fade-in; drawn dimmed until settled
    FadingIn,
    /// Fully shown
    Shown,
}

/// The overlay view attached to a widget while the empty state is shown
#[derive(Debug, Default)]
pub struct OverlayView {
    config: OverlayConfiguration,
    elements: Vec<OverlayElement>,
    button_state: ControlState,
    fade: FadeState,
    animation_tick: u64,
    rebuild_count: usize,
}

impl OverlayView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every element and any custom view
    pub fn prepare_for_reuse(&mut self) {
        self.elements.clear();
        self.config.custom_view = None;
        self.button_state = ControlState::Normal;
    }

    /// Recompose the overlay from a freshly resolved configuration
    pub fn rebuild(&mut self, config: OverlayConfiguration) {
        self.prepare_for_reuse();
        self.elements = compose(&config);
        self.config = config;
        self.animation_tick = 0;
        self.rebuild_count += 1;
    }

    /// Called once when the overlay is attached to a widget
    pub fn did_move_to_superview(&mut self) {
        self.fade = if self.config.fade_in {
            FadeState::FadingIn
        } else {
            FadeState::Shown
        };
    }

    /// Finish a pending fade-in
    pub fn settle(&mut self) {
        if self.fade == FadeState::FadingIn {
            self.fade = FadeState::Shown;
        }
    }

    /// Advance the image animation by one tick
    pub fn tick(&mut self) {
        if self.config.image_animation.is_some() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    pub fn elements(&self) -> &[OverlayElement] {
        &self.elements
    }

    pub fn has_element(&self, element: OverlayElement) -> bool {
        self.elements.contains(&element)
    }

    pub fn configuration(&self) -> &OverlayConfiguration {
        &self.config
    }

    pub fn fade_state(&self) -> FadeState {
        self.fade
    }

    pub fn allows_touch(&self) -> bool {
        self.config.allow_touch
    }

    pub fn button_state(&self) -> ControlState {
        self.button_state
    }

    pub fn set_button_state(&mut self, state: ControlState) {
        self.button_state = state;
    }

    /// Number of times the overlay has been composed
    pub fn rebuild_count(&self) -> usize {
        self.rebuild_count
    }

    /// Image to draw now: the current animation frame, else the static image
    pub fn current_image(&self) -> Option<Image> {
        let image = self.config.image.as_ref()?;
        let frame = self
            .config
            .image_animation
            .as_ref()
            .and_then(|animation| animation.frame_at(self.animation_tick));
        Some(match frame {
            Some(frame) => frame
                .clone()
                .with_rendering_mode(image.rendering_mode(), image.tint()),
            None => image.clone(),
        })
    }
}

fn compose(config: &OverlayConfiguration) -> Vec<OverlayElement> {
    if config.custom_view.is_some() {
        return vec![OverlayElement::Custom];
    }

    let mut elements = Vec::new();
    if config.image.as_ref().is_some_and(|image| !image.is_empty()) {
        elements.push(OverlayElement::Image);
    }
    if model::has_text(config.title.as_ref()) {
        elements.push(OverlayElement::Title);
    }
    if model::has_text(config.description.as_ref()) {
        elements.push(OverlayElement::Description);
    }
    let has_button = config.button.as_ref().is_some_and(|button| match &button.content {
        ButtonContent::Image { normal, .. } => !normal.is_empty(),
        ButtonContent::Title { normal, .. } => model::has_text(Some(normal)),
    });
    if has_button {
        elements.push(OverlayElement::Button);
    }
    elements
}

#[cfg(test)]
mod tests {
    use ratatui::{buffer::Buffer, layout::Rect, style::Style, text::Text};

    use super::*;
    use crate::model::{ButtonConfig, ImageAnimation, Insets};
    use crate::provider::CustomView;

    #[derive(Debug)]
    struct Badge;
    impl CustomView for Badge {
        fn size(&self) -> (u16, u16) {
            (5, 1)
        }
        fn render(&self, area: Rect, buf: &mut Buffer) {
            buf.set_string(area.x, area.y, "badge", Style::default());
        }
    }

    fn title_button(title: &str) -> ButtonConfig {
        ButtonConfig {
            content: ButtonContent::Title {
                normal: Text::from(title.to_string()),
                highlighted: None,
                background_normal: None,
                background_highlighted: None,
            },
            insets: Insets::ZERO,
        }
    }

    #[test]
    fn test_title_only() {
        let mut overlay = OverlayView::new();
        overlay.rebuild(OverlayConfiguration {
            title: Some(Text::from("No results")),
            ..Default::default()
        });
        assert_eq!(overlay.elements(), &[OverlayElement::Title]);
        assert_eq!(overlay.rebuild_count(), 1);
    }

    #[test]
    fn test_empty_texts_are_not_shown() {
        let mut overlay = OverlayView::new();
        overlay.rebuild(OverlayConfiguration {
            title: Some(Text::from("")),
            description: Some(Text::from("")),
            button: Some(title_button("")),
            ..Default::default()
        });
        assert!(overlay.elements().is_empty());
    }

    #[test]
    fn test_full_composition_order() {
        let mut overlay = OverlayView::new();
        overlay.rebuild(OverlayConfiguration {
            image: Some(Image::new(["(o)"])),
            title: Some(Text::from("Inbox zero")),
            description: Some(Text::from("Nothing left to read")),
            button: Some(title_button("Refresh")),
            ..Default::default()
        });
        assert_eq!(
            overlay.elements(),
            &[
                OverlayElement::Image,
                OverlayElement::Title,
                OverlayElement::Description,
                OverlayElement::Button,
            ]
        );
    }

    #[test]
    fn test_custom_view_replaces_elements() {
        let mut overlay = OverlayView::new();
        overlay.rebuild(OverlayConfiguration {
            title: Some(Text::from("hidden")),
            image: Some(Image::new(["x"])),
            custom_view: Some(Box::new(Badge)),
            ..Default::default()
        });
        assert_eq!(overlay.elements(), &[OverlayElement::Custom]);
    }

    #[test]
    fn test_rebuild_discards_previous_elements() {
        let mut overlay = OverlayView::new();
        overlay.rebuild(OverlayConfiguration {
            custom_view: Some(Box::new(Badge)),
            ..Default::default()
        });
        overlay.rebuild(OverlayConfiguration {
            title: Some(Text::from("Back to defaults")),
            ..Default::default()
        });
        assert_eq!(overlay.elements(), &[OverlayElement::Title]);
        assert!(!overlay.configuration().has_custom_view());
        assert_eq!(overlay.rebuild_count(), 2);
    }

    #[test]
    fn test_fade_in_lifecycle() {
        let mut overlay = OverlayView::new();
        assert_eq!(overlay.fade_state(), FadeState::Detached);
        overlay.rebuild(OverlayConfiguration::default());
        overlay.did_move_to_superview();
        assert_eq!(overlay.fade_state(), FadeState::FadingIn);
        overlay.settle();
        assert_eq!(overlay.fade_state(), FadeState::Shown);
    }

    #[test]
    fn test_no_fade_shows_immediately() {
        let mut overlay = OverlayView::new();
        overlay.rebuild(OverlayConfiguration {
            fade_in: false,
            ..Default::default()
        });
        overlay.did_move_to_superview();
        assert_eq!(overlay.fade_state(), FadeState::Shown);
    }

    #[test]
    fn test_animation_frames_follow_ticks() {
        let mut overlay = OverlayView::new();
        overlay.rebuild(OverlayConfiguration {
            image: Some(Image::new(["."])),
            image_animation: Some(ImageAnimation::new(
                vec![Image::new(["-"]), Image::new(["|"])],
                1,
            )),
            ..Default::default()
        });
        let row = |o: &OverlayView| o.current_image().unwrap().rows()[0].to_string();
        assert_eq!(row(&overlay), "-");
        overlay.tick();
        assert_eq!(row(&overlay), "|");
        overlay.rebuild(OverlayConfiguration {
            image: Some(Image::new(["."])),
            ..Default::default()
        });
        overlay.tick();
        assert_eq!(row(&overlay), ".");
    }

    #[test]
    fn test_prepare_for_reuse_resets_button_state() {
        let mut overlay = OverlayView::new();
        overlay.rebuild(OverlayConfiguration {
            button: Some(title_button("Go")),
            ..Default::default()
        });
        overlay.set_button_state(ControlState::Highlighted);
        overlay.prepare_for_reuse();
        assert_eq!(overlay.button_state(), ControlState::Normal);
        assert!(overlay.elements().is_empty());
    }
}
