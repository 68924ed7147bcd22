//! Configuration resolver
//!
//! Decides whether the overlay must be visible on this reload and, when it
//! is, resolves every knob from the providers. Precedence is always
//! provider value, else built-in default. A provider that does not
//! implement a capability is the normal case, not a fault.

use crate::defaults;
use crate::host::HostWidget;
use crate::model::{
    ButtonConfig, ButtonContent, ControlState, Insets, Offset, OverlayConfiguration,
    RenderingMode, Spacing, VisibilityDecision,
};
use crate::provider::{EmptyDataSetDelegate, EmptyDataSetSource};

/// Outcome of one resolution cycle
#[derive(Debug)]
pub enum Resolution {
    /// No data source bound, or the widget kind is unsupported
    CannotDisplay,
    /// The overlay must not be shown
    Hide(VisibilityDecision),
    /// The overlay must be shown with this configuration
    Show(Box<OverlayConfiguration>),
}

impl Resolution {
    pub fn should_show(&self) -> bool {
        matches!(self, Resolution::Show(_))
    }

    pub fn configuration(&self) -> Option<&OverlayConfiguration> {
        match self {
            Resolution::Show(config) => Some(config.as_ref()),
            _ => None,
        }
    }
}

/// Whether the overlay can be displayed on `widget` at all
pub fn can_display(widget: &dyn HostWidget, source: Option<&dyn EmptyDataSetSource>) -> bool {
    source.is_some() && widget.kind().supports_empty_data_set()
}

/// Items the widget's own content source reports.
///
/// A content source that does not report sections is treated as having one
/// section. Unsupported widget kinds and widgets without content report
/// zero.
pub fn item_count(widget: &dyn HostWidget) -> usize {
    if !widget.kind().supports_empty_data_set() {
        return 0;
    }
    let Some(content) = widget.content_source() else {
        return 0;
    };
    let sections = content
        .number_of_sections()
        .unwrap_or(defaults::SECTION_COUNT);
    (0..sections)
        .map(|section| content.number_of_items(section))
        .sum()
}

/// Evaluate the visibility formula for `widget`
pub fn decide(
    widget: &dyn HostWidget,
    delegate: Option<&dyn EmptyDataSetDelegate>,
) -> VisibilityDecision {
    let should_display = delegate_flag(
        delegate,
        |d| d.should_display(widget),
        defaults::delegate::SHOULD_DISPLAY,
    );
    let forced = delegate_flag(
        delegate,
        |d| d.should_be_forced_to_display(widget),
        defaults::delegate::SHOULD_BE_FORCED_TO_DISPLAY,
    );
    VisibilityDecision::new(item_count(widget), should_display, forced)
}

/// Resolve visibility and, when visible, the full configuration.
pub fn resolve(
    widget: &dyn HostWidget,
    source: Option<&dyn EmptyDataSetSource>,
    delegate: Option<&dyn EmptyDataSetDelegate>,
) -> Resolution {
    let Some(source) = source.filter(|_| widget.kind().supports_empty_data_set()) else {
        return Resolution::CannotDisplay;
    };

    let decision = decide(widget, delegate);
    if !decision.is_visible() {
        return Resolution::Hide(decision);
    }

    Resolution::Show(Box::new(resolve_configuration(widget, source, delegate)))
}

/// Query every field from the providers and apply defaults.
pub fn resolve_configuration(
    widget: &dyn HostWidget,
    source: &dyn EmptyDataSetSource,
    delegate: Option<&dyn EmptyDataSetDelegate>,
) -> OverlayConfiguration {
    let mut config = OverlayConfiguration {
        background_color: source.background_color(widget),
        offset: source.content_offset(widget).unwrap_or(Offset::ZERO),
        fade_in: delegate_flag(
            delegate,
            |d| d.should_fade_in(widget),
            defaults::delegate::SHOULD_FADE_IN,
        ),
        allow_touch: delegate_flag(
            delegate,
            |d| d.should_allow_touch(widget),
            defaults::delegate::SHOULD_ALLOW_TOUCH,
        ),
        allow_scroll: delegate_flag(
            delegate,
            |d| d.should_allow_scroll(widget),
            defaults::delegate::SHOULD_ALLOW_SCROLL,
        ),
        ..OverlayConfiguration::default()
    };

    if let Some(custom_view) = source.custom_view(widget) {
        config.custom_view = Some(custom_view);
        return config;
    }

    let tint = source.image_tint_color(widget);
    let mode = if tint.is_some() {
        RenderingMode::Template
    } else {
        RenderingMode::Original
    };
    config.image = source
        .image(widget)
        .map(|image| image.with_rendering_mode(mode, tint));
    config.image_tint = tint;

    if delegate_flag(
        delegate,
        |d| d.should_animate_image(widget),
        defaults::delegate::SHOULD_ANIMATE_IMAGE,
    ) {
        config.image_animation = source.image_animation(widget);
    }

    config.title = source.title(widget);
    config.description = source.description(widget);
    config.button = resolve_button(widget, source);
    config.spacing = Spacing {
        image_title: source
            .space_between_image_title(widget)
            .unwrap_or(defaults::SPACE_IMAGE_TITLE),
        title_description: source
            .space_between_title_description(widget)
            .unwrap_or(defaults::SPACE_TITLE_DESCRIPTION),
        description_button: source
            .space_between_description_button(widget)
            .unwrap_or(defaults::SPACE_DESCRIPTION_BUTTON),
    };

    config
}

fn delegate_flag(
    delegate: Option<&dyn EmptyDataSetDelegate>,
    query: impl FnOnce(&dyn EmptyDataSetDelegate) -> Option<bool>,
    default: bool,
) -> bool {
    delegate.and_then(query).unwrap_or(default)
}

/// A normal-state image wins over a normal-state title.
fn resolve_button(widget: &dyn HostWidget, source: &dyn EmptyDataSetSource) -> Option<ButtonConfig> {
    let content = if let Some(normal) = source.button_image(widget, ControlState::Normal) {
        ButtonContent::Image {
            normal,
            highlighted: source.button_image(widget, ControlState::Highlighted),
        }
    } else if let Some(normal) = source.button_title(widget, ControlState::Normal) {
        ButtonContent::Title {
            normal,
            highlighted: source.button_title(widget, ControlState::Highlighted),
            background_normal: source.button_background_image(widget, ControlState::Normal),
            background_highlighted: source
                .button_background_image(widget, ControlState::Highlighted),
        }
    } else {
        return None;
    };

    Some(ButtonConfig {
        content,
        insets: source.button_insets(widget).unwrap_or(Insets::ZERO),
    })
}
