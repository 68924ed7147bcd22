//! Overlay layout and drawing

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Text,
    widgets::{Clear, Paragraph, Widget},
};

use super::{FadeState, OverlayElement, OverlayView};
use crate::defaults::{self, cells};
use crate::model::{ButtonConfig, ButtonContent, ControlState, Image};
use crate::ui::theme;

/// Where each overlay element lands inside the widget area
///
/// Elements that are absent, or pushed entirely outside the area by the
/// content offset, have no rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayLayout {
    pub image: Option<Rect>,
    pub title: Option<Rect>,
    pub description: Option<Rect>,
    pub button: Option<Rect>,
    pub custom: Option<Rect>,
}

impl OverlayView {
    /// Compute element placement for `area`.
    ///
    /// Default elements are stacked top to bottom and centered as a group,
    /// with the configured spacing between neighbours. A custom view is
    /// centered on its own. The content offset shifts either.
    pub fn layout(&self, area: Rect) -> OverlayLayout {
        let mut layout = OverlayLayout::default();
        let dx = defaults::offset_to_columns(self.config.offset.x);
        let dy = defaults::offset_to_rows(self.config.offset.y);

        if self.has_element(OverlayElement::Custom) {
            if let Some(view) = &self.config.custom_view {
                let (width, height) = view.size();
                let width = width.min(area.width);
                let x = centered(area.x, area.width, width).saturating_add(dx);
                let y = centered(area.y, area.height, height).saturating_add(dy);
                layout.custom = clip(area, x, y, width, height);
            }
            return layout;
        }

        let max_width = if area.width > 2 * cells::STACK_MARGIN {
            area.width - 2 * cells::STACK_MARGIN
        } else {
            area.width
        };

        let mut blocks: Vec<(OverlayElement, u16, u16, u16)> = Vec::new();
        for &element in &self.elements {
            let (width, height) = self.element_size(element);
            let spacing = &self.config.spacing;
            let gap = match (blocks.last().map(|block| block.0), element) {
                (None, _) => 0,
                (Some(_), OverlayElement::Button) => {
                    defaults::points_to_rows(spacing.description_button)
                }
                (Some(OverlayElement::Title), _) => {
                    defaults::points_to_rows(spacing.title_description)
                }
                (Some(_), _) => defaults::points_to_rows(spacing.image_title),
            };
            blocks.push((element, width.min(max_width), height, gap));
        }

        let total: i32 = blocks
            .iter()
            .map(|&(_, _, height, gap)| i32::from(height) + i32::from(gap))
            .sum();
        let top = i32::from(area.y) + (i32::from(area.height) - total) / 2;
        let mut y = top.saturating_add(dy);

        for (element, width, height, gap) in blocks {
            y = y.saturating_add(i32::from(gap));
            let x = centered(area.x, area.width, width).saturating_add(dx);
            let rect = clip(area, x, y, width, height);
            match element {
                OverlayElement::Image => layout.image = rect,
                OverlayElement::Title => layout.title = rect,
                OverlayElement::Description => layout.description = rect,
                OverlayElement::Button => layout.button = rect,
                OverlayElement::Custom => layout.custom = rect,
            }
            y = y.saturating_add(i32::from(height));
        }
        layout
    }

    fn element_size(&self, element: OverlayElement) -> (u16, u16) {
        match element {
            OverlayElement::Image => self
                .current_image()
                .map(|image| (image.width(), image.height()))
                .unwrap_or((0, 0)),
            OverlayElement::Title => text_size(self.config.title.as_ref()),
            OverlayElement::Description => text_size(self.config.description.as_ref()),
            OverlayElement::Button => self
                .config
                .button
                .as_ref()
                .map(|button| button.size(self.button_state))
                .unwrap_or((0, 0)),
            OverlayElement::Custom => self
                .config
                .custom_view
                .as_ref()
                .map(|view| view.size())
                .unwrap_or((0, 0)),
        }
    }
}

impl Widget for &OverlayView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.fade == FadeState::Detached || area.is_empty() {
            return;
        }

        Clear.render(area, buf);
        buf.set_style(area, self.config.background_style());

        let layout = self.layout(area);

        if let (Some(rect), Some(view)) = (layout.custom, &self.config.custom_view) {
            view.render(rect, buf);
        }
        if let (Some(rect), Some(image)) = (layout.image, self.current_image()) {
            render_image(&image, rect, buf);
        }
        if let (Some(rect), Some(title)) = (layout.title, &self.config.title) {
            render_text(title, Style::default().fg(theme::overlay::TITLE), rect, buf);
        }
        if let (Some(rect), Some(description)) = (layout.description, &self.config.description) {
            render_text(
                description,
                Style::default().fg(theme::overlay::DESCRIPTION),
                rect,
                buf,
            );
        }
        if let (Some(rect), Some(button)) = (layout.button, &self.config.button) {
            render_button(button, self.button_state, rect, buf);
        }

        if self.fade == FadeState::FadingIn {
            buf.set_style(area, Style::default().add_modifier(Modifier::DIM));
        }
    }
}

fn render_image(image: &Image, area: Rect, buf: &mut Buffer) {
    for (offset, row) in image
        .rendered_rows()
        .iter()
        .enumerate()
        .take(area.height as usize)
    {
        buf.set_line(area.x, area.y + offset as u16, row, area.width);
    }
}

fn render_text(text: &Text<'static>, style: Style, area: Rect, buf: &mut Buffer) {
    Paragraph::new(text.clone())
        .style(style)
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_button(button: &ButtonConfig, state: ControlState, area: Rect, buf: &mut Buffer) {
    let insets = button.insets;
    let inner = Rect {
        x: area.x.saturating_add(insets.left),
        y: area.y.saturating_add(insets.top),
        width: area.width.saturating_sub(insets.left.saturating_add(insets.right)),
        height: area.height.saturating_sub(insets.top.saturating_add(insets.bottom)),
    };

    match &button.content {
        ButtonContent::Image { .. } => {
            if let Some(image) = button.image(state) {
                render_image(image, inner, buf);
            }
        }
        ButtonContent::Title { .. } => {
            if let Some(background) = button.background(state) {
                render_image(background, inner, buf);
            }
            if let Some(title) = button.title(state) {
                let height = (title.height() as u16).min(inner.height);
                let centered_title = Rect {
                    y: inner.y + (inner.height - height) / 2,
                    height,
                    ..inner
                };
                let mut style = Style::default()
                    .fg(theme::overlay::BUTTON)
                    .add_modifier(Modifier::BOLD);
                if state == ControlState::Highlighted {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                render_text(title, style, centered_title, buf);
            }
        }
    }
}

fn text_size(text: Option<&Text<'static>>) -> (u16, u16) {
    text.map(|text| {
        (
            text.width().min(u16::MAX as usize) as u16,
            text.height().min(u16::MAX as usize) as u16,
        )
    })
    .unwrap_or((0, 0))
}

/// Origin that centers `size` within `[start, start + extent)`
fn centered(start: u16, extent: u16, size: u16) -> i32 {
    i32::from(start) + (i32::from(extent) - i32::from(size)) / 2
}

/// Intersect a signed rectangle with `area`
fn clip(area: Rect, x: i32, y: i32, width: u16, height: u16) -> Option<Rect> {
    let left = x.max(i32::from(area.x));
    let top = y.max(i32::from(area.y));
    let right = x.saturating_add(i32::from(width)).min(i32::from(area.right()));
    let bottom = y.saturating_add(i32::from(height)).min(i32::from(area.bottom()));
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}
