//! Resolved overlay configuration
//!
//! A snapshot of every visual and behavioral knob for one display cycle.

use ratatui::{
    style::{Color, Style},
    text::{Line, Text},
};

use crate::defaults;
use crate::provider::CustomView;
use crate::ui::theme;

/// Interaction state of the overlay button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlState {
    #[default]
    Normal,
    Highlighted,
}

/// How an image's glyphs are colored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderingMode {
    /// Keep the styles the image was drawn with
    #[default]
    Original,
    /// Recolor every glyph with the tint color
    Template,
}

/// A block of styled glyph rows used as a terminal "image"
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Image {
    rows: Vec<Line<'static>>,
    rendering_mode: RenderingMode,
    tint: Option<Color>,
}

impl Image {
    /// Create an image from its rows, top to bottom
    pub fn new<I, L>(rows: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Line<'static>>,
    {
        Self {
            rows: rows.into_iter().map(Into::into).collect(),
            rendering_mode: RenderingMode::Original,
            tint: None,
        }
    }

    /// Return a copy drawn with the given rendering mode and tint
    pub fn with_rendering_mode(mut self, mode: RenderingMode, tint: Option<Color>) -> Self {
        self.rendering_mode = mode;
        self.tint = tint;
        self
    }

    pub fn rendering_mode(&self) -> RenderingMode {
        self.rendering_mode
    }

    pub fn tint(&self) -> Option<Color> {
        self.tint
    }

    pub fn rows(&self) -> &[Line<'static>] {
        &self.rows
    }

    /// Width in columns of the widest row
    pub fn width(&self) -> u16 {
        self.rows
            .iter()
            .map(|row| row.width())
            .max()
            .unwrap_or(0)
            .min(u16::MAX as usize) as u16
    }

    /// Height in rows
    pub fn height(&self) -> u16 {
        self.rows.len().min(u16::MAX as usize) as u16
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.width() == 0)
    }

    /// Rows as they should be drawn.
    ///
    /// Template images lose their own colors and take the tint instead.
    pub fn rendered_rows(&self) -> Vec<Line<'static>> {
        match self.rendering_mode {
            RenderingMode::Template => {
                let tint = self.tint.unwrap_or(theme::overlay::TEMPLATE_FALLBACK);
                self.rows
                    .iter()
                    .map(|row| {
                        let mut row = row.clone();
                        row.style = row.style.fg(tint);
                        for span in &mut row.spans {
                            span.style = span.style.fg(tint);
                        }
                        row
                    })
                    .collect()
            }
            RenderingMode::Original => self.rows.clone(),
        }
    }
}

/// Frames cycled over the overlay image
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAnimation {
    frames: Vec<Image>,
    ticks_per_frame: u16,
}

impl ImageAnimation {
    /// Create an animation. `ticks_per_frame` of zero is treated as one.
    pub fn new(frames: Vec<Image>, ticks_per_frame: u16) -> Self {
        Self {
            frames,
            ticks_per_frame: ticks_per_frame.max(1),
        }
    }

    pub fn frames(&self) -> &[Image] {
        &self.frames
    }

    /// Frame shown at the given tick, if the animation has any frames
    pub fn frame_at(&self, tick: u64) -> Option<&Image> {
        if self.frames.is_empty() {
            return None;
        }
        let index = (tick / u64::from(self.ticks_per_frame)) % self.frames.len() as u64;
        self.frames.get(index as usize)
    }
}

/// Edge insets in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Insets {
    pub top: u16,
    pub left: u16,
    pub bottom: u16,
    pub right: u16,
}

impl Insets {
    pub const ZERO: Insets = Insets {
        top: 0,
        left: 0,
        bottom: 0,
        right: 0,
    };

    pub fn new(top: u16, left: u16, bottom: u16, right: u16) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same inset on the left and right edges
    pub fn horizontal(amount: u16) -> Self {
        Self::new(0, amount, 0, amount)
    }
}

/// 2D content offset in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Vertical spacing between default elements, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    pub image_title: f32,
    pub title_description: f32,
    pub description_button: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            image_title: defaults::SPACE_IMAGE_TITLE,
            title_description: defaults::SPACE_TITLE_DESCRIPTION,
            description_button: defaults::SPACE_DESCRIPTION_BUTTON,
        }
    }
}

/// Content of the overlay button
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonContent {
    /// Image button; any title is ignored
    Image {
        normal: Image,
        highlighted: Option<Image>,
    },
    /// Title button with optional background images
    Title {
        normal: Text<'static>,
        highlighted: Option<Text<'static>>,
        background_normal: Option<Image>,
        background_highlighted: Option<Image>,
    },
}

/// Resolved overlay button
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonConfig {
    pub content: ButtonContent,
    pub insets: Insets,
}

impl ButtonConfig {
    /// Title for a state, falling back to the normal title
    pub fn title(&self, state: ControlState) -> Option<&Text<'static>> {
        match &self.content {
            ButtonContent::Title {
                normal,
                highlighted,
                ..
            } => match state {
                ControlState::Highlighted => highlighted.as_ref().or(Some(normal)),
                ControlState::Normal => Some(normal),
            },
            ButtonContent::Image { .. } => None,
        }
    }

    /// Image for a state, falling back to the normal image
    pub fn image(&self, state: ControlState) -> Option<&Image> {
        match &self.content {
            ButtonContent::Image {
                normal,
                highlighted,
            } => match state {
                ControlState::Highlighted => highlighted.as_ref().or(Some(normal)),
                ControlState::Normal => Some(normal),
            },
            ButtonContent::Title { .. } => None,
        }
    }

    /// Background image for a state, falling back to the normal background
    pub fn background(&self, state: ControlState) -> Option<&Image> {
        match &self.content {
            ButtonContent::Title {
                background_normal,
                background_highlighted,
                ..
            } => match state {
                ControlState::Highlighted => {
                    background_highlighted.as_ref().or(background_normal.as_ref())
                }
                ControlState::Normal => background_normal.as_ref(),
            },
            ButtonContent::Image { .. } => None,
        }
    }

    /// Size in cells (width, height) including insets
    pub fn size(&self, state: ControlState) -> (u16, u16) {
        let (content_w, content_h) = match &self.content {
            ButtonContent::Image { .. } => self
                .image(state)
                .map(|image| (image.width(), image.height()))
                .unwrap_or((0, 0)),
            ButtonContent::Title { .. } => {
                let (title_w, title_h) = self
                    .title(state)
                    .map(|text| {
                        (
                            text.width().min(u16::MAX as usize) as u16,
                            text.height().min(u16::MAX as usize) as u16,
                        )
                    })
                    .unwrap_or((0, 0));
                let (bg_w, bg_h) = self
                    .background(state)
                    .map(|image| (image.width(), image.height()))
                    .unwrap_or((0, 0));
                (title_w.max(bg_w), title_h.max(bg_h))
            }
        };
        (
            content_w
                .saturating_add(self.insets.left)
                .saturating_add(self.insets.right),
            content_h
                .saturating_add(self.insets.top)
                .saturating_add(self.insets.bottom),
        )
    }
}

/// Everything needed to draw the overlay for one display cycle
#[derive(Debug)]
pub struct OverlayConfiguration {
    pub image: Option<Image>,
    pub image_tint: Option<Color>,
    pub image_animation: Option<ImageAnimation>,
    pub title: Option<Text<'static>>,
    pub description: Option<Text<'static>>,
    pub button: Option<ButtonConfig>,
    pub background_color: Option<Color>,
    /// Replaces the default composition when present
    pub custom_view: Option<Box<dyn CustomView>>,
    pub spacing: Spacing,
    pub offset: Offset,
    pub fade_in: bool,
    pub allow_touch: bool,
    pub allow_scroll: bool,
}

impl Default for OverlayConfiguration {
    fn default() -> Self {
        Self {
            image: None,
            image_tint: None,
            image_animation: None,
            title: None,
            description: None,
            button: None,
            background_color: None,
            custom_view: None,
            spacing: Spacing::default(),
            offset: Offset::ZERO,
            fade_in: defaults::delegate::SHOULD_FADE_IN,
            allow_touch: defaults::delegate::SHOULD_ALLOW_TOUCH,
            allow_scroll: defaults::delegate::SHOULD_ALLOW_SCROLL,
        }
    }
}

impl OverlayConfiguration {
    pub fn has_custom_view(&self) -> bool {
        self.custom_view.is_some()
    }

    /// Background style for the overlay area
    pub fn background_style(&self) -> Style {
        self.background_color
            .map(|color| Style::default().bg(color))
            .unwrap_or_default()
    }
}

/// Whether a styled text has anything visible to show
pub(crate) fn has_text(text: Option<&Text<'_>>) -> bool {
    text.is_some_and(|text| {
        text.lines
            .iter()
            .any(|line| line.spans.iter().any(|span| !span.content.is_empty()))
    })
}
