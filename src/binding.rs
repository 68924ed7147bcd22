//! Per-widget empty data set state and the public attachment API
//!
//! Any [`Reloadable`] host gains [`EmptyDataSetExt`] for free. Assigning a
//! data source installs reload interception for the host's type; from then
//! on every reload re-evaluates whether the overlay should be shown.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::Widget,
};

use crate::error::InterceptError;
use crate::host::HostWidget;
use crate::intercept::{self, Reloadable};
use crate::model::{ControlState, OverlayConfiguration};
use crate::overlay::{OverlayElement, OverlayView};
use crate::provider::{EmptyDataSetDelegate, EmptyDataSetSource};
use crate::resolver::{self, Resolution};

/// Providers and overlay attached to one widget instance
///
/// Providers are held weakly; a provider that has been dropped behaves as
/// if it was never assigned.
#[derive(Debug, Default)]
pub struct WidgetBinding {
    source: Option<Weak<dyn EmptyDataSetSource>>,
    delegate: Option<Weak<dyn EmptyDataSetDelegate>>,
    overlay: Option<OverlayView>,
    last_area: Cell<Option<Rect>>,
}

impl WidgetBinding {
    pub fn source(&self) -> Option<Rc<dyn EmptyDataSetSource>> {
        self.source.as_ref().and_then(Weak::upgrade)
    }

    pub fn delegate(&self) -> Option<Rc<dyn EmptyDataSetDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    pub fn overlay(&self) -> Option<&OverlayView> {
        self.overlay.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.overlay.is_some()
    }

    /// Area the overlay was last drawn into
    pub fn last_area(&self) -> Option<Rect> {
        self.last_area.get()
    }
}

impl Widget for &WidgetBinding {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.last_area.set(Some(area));
        if let Some(overlay) = &self.overlay {
            overlay.render(area, buf);
        }
    }
}

/// Re-evaluate and apply the empty state of `widget`.
pub(crate) fn reload_empty_data_set(widget: &mut dyn HostWidget) {
    let Some(binding) = widget.binding() else {
        return;
    };
    let source = binding.source();
    let delegate = binding.delegate();

    match resolver::resolve(&*widget, source.as_deref(), delegate.as_deref()) {
        Resolution::CannotDisplay => {}
        Resolution::Hide(decision) => {
            if is_visible(widget) {
                tracing::debug!(items = decision.item_count, "hiding empty data set");
                invalidate(widget, delegate.as_deref());
            }
        }
        Resolution::Show(config) => show(widget, delegate.as_deref(), *config),
    }
}

fn is_visible(widget: &dyn HostWidget) -> bool {
    widget.binding().is_some_and(WidgetBinding::is_visible)
}

fn show(
    widget: &mut dyn HostWidget,
    delegate: Option<&dyn EmptyDataSetDelegate>,
    config: OverlayConfiguration,
) {
    if let Some(delegate) = delegate {
        delegate.will_appear(&*widget);
    }

    let allow_scroll = config.allow_scroll;
    if let Some(binding) = widget.binding_slot().as_mut() {
        let attached = binding.overlay.is_some();
        let overlay = binding.overlay.get_or_insert_with(OverlayView::new);
        overlay.rebuild(config);
        if !attached {
            overlay.did_move_to_superview();
            tracing::debug!(elements = ?overlay.elements(), "attached empty data set overlay");
        }
    }
    widget.set_scroll_enabled(allow_scroll);

    if let Some(delegate) = delegate {
        delegate.did_appear(&*widget);
    }
}

fn invalidate(widget: &mut dyn HostWidget, delegate: Option<&dyn EmptyDataSetDelegate>) {
    if let Some(delegate) = delegate {
        delegate.will_disappear(&*widget);
    }

    if let Some(binding) = widget.binding_slot().as_mut() {
        if let Some(mut overlay) = binding.overlay.take() {
            overlay.prepare_for_reuse();
        }
        binding.last_area.set(None);
    }
    widget.set_scroll_enabled(true);

    if let Some(delegate) = delegate {
        delegate.did_disappear(&*widget);
    }
}

fn set_button_state(widget: &mut dyn HostWidget, state: ControlState) {
    if let Some(overlay) = widget
        .binding_slot()
        .as_mut()
        .and_then(|binding| binding.overlay.as_mut())
    {
        overlay.set_button_state(state);
    }
}

fn handle_mouse(widget: &mut dyn HostWidget, event: MouseEvent) -> bool {
    let position = Position::new(event.column, event.row);
    let Some(binding) = widget.binding() else {
        return false;
    };
    let (Some(overlay), Some(area)) = (binding.overlay(), binding.last_area()) else {
        return false;
    };
    if !overlay.allows_touch() || !area.contains(position) {
        return false;
    }
    let on_button = overlay
        .layout(area)
        .button
        .is_some_and(|rect| rect.contains(position));
    let delegate = binding.delegate();

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if on_button {
                set_button_state(widget, ControlState::Highlighted);
            }
            true
        }
        MouseEventKind::Up(MouseButton::Left) => {
            set_button_state(widget, ControlState::Normal);
            if let Some(delegate) = delegate {
                if on_button {
                    delegate.did_tap_button(&*widget);
                } else {
                    delegate.did_tap_view(&*widget);
                }
            }
            true
        }
        _ => false,
    }
}

/// Empty data set support for every interceptable host widget
pub trait EmptyDataSetExt: Reloadable {
    /// Assign or clear the data source.
    ///
    /// Assigning installs reload interception for this widget type, which
    /// fails if the type cannot provide an original reload implementation.
    /// On failure the widget is left unbound.
    /// Clearing removes a visible overlay.
    fn set_empty_data_source(
        &mut self,
        source: Option<Weak<dyn EmptyDataSetSource>>,
    ) -> Result<(), InterceptError> {
        match source {
            Some(source) => {
                intercept::install_all::<Self>()?;
                self.binding_slot()
                    .get_or_insert_with(WidgetBinding::default)
                    .source = Some(source);
                Ok(())
            }
            None => {
                if is_visible(&*self) {
                    let delegate = self.binding().and_then(WidgetBinding::delegate);
                    invalidate(self, delegate.as_deref());
                }
                if let Some(binding) = self.binding_slot().as_mut() {
                    binding.source = None;
                }
                Ok(())
            }
        }
    }

    /// Assign or clear the delegate
    fn set_empty_delegate(&mut self, delegate: Option<Weak<dyn EmptyDataSetDelegate>>) {
        if delegate.is_none() && self.binding().is_none() {
            return;
        }
        self.binding_slot()
            .get_or_insert_with(WidgetBinding::default)
            .delegate = delegate;
    }

    fn empty_data_source(&self) -> Option<Rc<dyn EmptyDataSetSource>> {
        self.binding().and_then(WidgetBinding::source)
    }

    fn empty_delegate(&self) -> Option<Rc<dyn EmptyDataSetDelegate>> {
        self.binding().and_then(WidgetBinding::delegate)
    }

    /// Re-evaluate the empty state now, without reloading content
    fn reload_empty_data_set(&mut self) {
        reload_empty_data_set(self);
    }

    fn is_empty_data_set_visible(&self) -> bool {
        is_visible(&*self)
    }

    fn empty_overlay(&self) -> Option<&OverlayView> {
        self.binding().and_then(WidgetBinding::overlay)
    }

    /// Route a mouse event to the overlay.
    ///
    /// Returns whether the overlay consumed the event. Presses on the button
    /// highlight it; releases report a button or background tap to the
    /// delegate. Ignored while touch is disallowed.
    fn handle_empty_data_set_mouse(&mut self, event: MouseEvent) -> bool {
        handle_mouse(self, event)
    }

    /// Press the overlay button from the keyboard
    fn activate_empty_data_set_button(&mut self) -> bool {
        let Some(overlay) = self.empty_overlay() else {
            return false;
        };
        if !overlay.allows_touch() || !overlay.has_element(OverlayElement::Button) {
            return false;
        }
        if let Some(delegate) = self.empty_delegate() {
            delegate.did_tap_button(&*self);
        }
        true
    }

    /// Advance overlay animation and finish any fade-in
    fn tick_empty_data_set(&mut self) {
        if let Some(overlay) = self
            .binding_slot()
            .as_mut()
            .and_then(|binding| binding.overlay.as_mut())
        {
            overlay.tick();
            overlay.settle();
        }
    }
}

impl<W: Reloadable> EmptyDataSetExt for W {}
